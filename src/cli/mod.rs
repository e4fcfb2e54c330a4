//! CLI module for ClipMaster
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// ClipMaster
///
/// Paste a video link, pick a start and end time, and follow the clip until
/// it is ready.
#[derive(Parser, Debug)]
#[command(name = "clipmaster")]
#[command(about = "ClipMaster - Create clips from video links")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Configuration file path
    #[arg(long, global = true, env = "CLIPMASTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Simulated processing delay in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Output language (en, pt, es)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create clips and follow them until ready
    Clip(args::ClipArgs),
    /// Compute the duration between two mm:ss markers
    Duration(args::DurationArgs),
    /// Detect the source platform of a video link
    Detect(args::DetectArgs),
    /// List supported platforms
    Platforms,
}
