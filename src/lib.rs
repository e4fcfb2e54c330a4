//! ClipMaster Library
//!
//! Clip lifecycle core: turns a video link plus a start/end marker into a clip
//! record, guesses the source platform, and drives the record from
//! processing to ready on a deferred timer.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{ClipInteractor, LifecycleSettings};
pub use domain::errors::DomainError;
pub use domain::model::{ClipEvent, ClipId, ClipRecord, ClipStatus, Platform};
pub use domain::rules::{PlatformDetector, TimeArithmetic};
pub use error::{ClipMasterError, ClipMasterResult};
