//! ClipMaster CLI
//!
//! Paste a video link, pick a start and end time, and follow the clip from
//! processing to ready.
//!
//! # Usage
//!
//! ```bash
//! clipmaster clip --url "https://youtu.be/abc123" --start 00:05 --end 00:20
//! clipmaster duration --start 00:30 --end 02:00
//! clipmaster detect --url "https://www.twitch.tv/videos/1"
//! clipmaster platforms
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use clipmaster::app::container::DefaultAppContainer;
use clipmaster::cli::{commands, Cli, Commands};
use clipmaster::config_initialization::initialize_configuration_hierarchy;
use clipmaster::utils::logging::LoggingSystem;

/// Main entry point for the ClipMaster CLI application
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let loaded = initialize_configuration_hierarchy(&cli).context("Failed to load configuration")?;
    LoggingSystem::new(loaded.config.logging.clone()).initialize()?;

    info!("Starting ClipMaster {}", env!("CARGO_PKG_VERSION"));
    match &loaded.source {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }
    if loaded.env_overrides > 0 {
        info!("Applied {} environment variable overrides", loaded.env_overrides);
    }
    if loaded.cli_overrides > 0 {
        info!("Applied {} CLI configuration overrides", loaded.cli_overrides);
    }

    let config = loaded.config;
    let container = DefaultAppContainer::new(&config);

    // Execute the requested command
    match cli.command {
        Commands::Clip(args) => commands::clip(args, &container, &config).await?,
        Commands::Duration(args) => commands::duration(args, &container)?,
        Commands::Detect(args) => commands::detect(args, &container)?,
        Commands::Platforms => commands::platforms(&config)?,
    }

    debug!("ClipMaster completed successfully");
    Ok(())
}
