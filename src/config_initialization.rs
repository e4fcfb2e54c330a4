//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::clip_interactor::{LifecycleSettings, DEFAULT_CLIP_TITLE, DEFAULT_PROCESSING_DELAY};
use crate::cli::Cli;
use crate::domain::rules::TimeArithmetic;
use crate::error::{ClipMasterError, ClipMasterResult};
use crate::output::Language;
use crate::utils::logging::LoggingConfig;

/// Files searched, in order, when no `--config` is given
pub const CONFIG_SEARCH_PATHS: &[&str] = &["clipmaster.toml", "config/clipmaster.toml"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated processing time before a clip turns ready
    pub processing_delay_ms: u64,
    /// Title given to every new clip
    pub clip_title: String,
    /// Start marker used when none is supplied
    pub default_start: String,
    /// End marker used when none is supplied
    pub default_end: String,
    pub language: Language,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY.as_millis() as u64,
            clip_title: DEFAULT_CLIP_TITLE.to_string(),
            default_start: "00:00".to_string(),
            default_end: "01:00".to_string(),
            language: Language::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str, origin: &Path) -> ClipMasterResult<Self> {
        toml::from_str(content).map_err(|source| ClipMasterError::ConfigParse {
            path: origin.display().to_string(),
            source,
        })
    }

    pub fn load_file(path: &Path) -> ClipMasterResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ClipMasterError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Apply `CLIPMASTER_*` overrides; returns how many were applied
    pub fn apply_env<F>(&mut self, lookup: F) -> ClipMasterResult<usize>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = 0;

        if let Some(value) = lookup("CLIPMASTER_PROCESSING_DELAY_MS") {
            self.processing_delay_ms =
                value.trim().parse().map_err(|_| ClipMasterError::Config {
                    message: format!("Invalid CLIPMASTER_PROCESSING_DELAY_MS: {}", value),
                })?;
            applied += 1;
        }
        if let Some(value) = lookup("CLIPMASTER_CLIP_TITLE") {
            self.clip_title = value;
            applied += 1;
        }
        if let Some(value) = lookup("CLIPMASTER_LANGUAGE") {
            self.language = value.parse()?;
            applied += 1;
        }
        if let Some(value) = lookup("CLIPMASTER_LOG_LEVEL") {
            self.logging.level = value.parse()?;
            applied += 1;
        }
        if let Some(value) = lookup("CLIPMASTER_LOG_FORMAT") {
            self.logging.format = value.parse()?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Apply global command-line overrides; returns how many were applied
    pub fn apply_cli(&mut self, cli: &Cli) -> ClipMasterResult<usize> {
        let mut applied = 0;

        if let Some(delay) = cli.delay_ms {
            self.processing_delay_ms = delay;
            applied += 1;
        }
        if let Some(lang) = &cli.lang {
            self.language = lang.parse()?;
            applied += 1;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.parse()?;
            applied += 1;
        }
        if let Some(format) = &cli.log_format {
            self.logging.format = format.parse()?;
            applied += 1;
        }

        Ok(applied)
    }

    pub fn validate(&self) -> ClipMasterResult<()> {
        if self.clip_title.trim().is_empty() {
            return Err(ClipMasterError::Config {
                message: "clip_title cannot be empty".to_string(),
            });
        }
        for (key, value) in [
            ("default_start", &self.default_start),
            ("default_end", &self.default_end),
        ] {
            TimeArithmetic::parse_to_seconds(value).map_err(|e| ClipMasterError::Config {
                message: format!("{}: {}", key, e),
            })?;
        }
        Ok(())
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl From<&AppConfig> for LifecycleSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            processing_delay: config.processing_delay(),
            clip_title: config.clip_title.clone(),
        }
    }
}

/// Result of resolving the configuration hierarchy
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
    pub env_overrides: usize,
    pub cli_overrides: usize,
}

/// Resolve configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> ClipMasterResult<LoadedConfig> {
    let source = match &cli.config {
        Some(path) => Some(path.clone()),
        None => find_config_file(Path::new(".")),
    };

    let mut config = match &source {
        Some(path) => AppConfig::load_file(path)?,
        None => AppConfig::default(),
    };

    let env_overrides = config.apply_env(|key| std::env::var(key).ok())?;
    let cli_overrides = config.apply_cli(cli)?;
    config.validate()?;

    Ok(LoadedConfig {
        config,
        source,
        env_overrides,
        cli_overrides,
    })
}

/// First existing file from [`CONFIG_SEARCH_PATHS`] under `base`
pub fn find_config_file(base: &Path) -> Option<PathBuf> {
    CONFIG_SEARCH_PATHS
        .iter()
        .map(|relative| base.join(relative))
        .find(|candidate| candidate.is_file())
}
