//! Error handling module for ClipMaster

use thiserror::Error;

/// Main error type for ClipMaster operations outside the domain core
#[derive(Error, Debug)]
pub enum ClipMasterError {
    /// Configuration value or file could not be used
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file is not valid TOML for the expected layout
    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

/// Result type alias for ClipMaster operations
pub type ClipMasterResult<T> = std::result::Result<T, ClipMasterError>;
