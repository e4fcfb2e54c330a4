// Domain errors - Error types for the domain layer

use thiserror::Error;

use crate::domain::model::{ClipId, ClipStatus};

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time field could not be read as `mm:ss`
    #[error("Malformed time input: '{0}'. Expected MM:SS")]
    MalformedTimeInput(String),

    /// Clip creation attempted without a video link
    #[error("Video URL cannot be empty")]
    EmptyUrl,

    /// No clip with this identifier exists in the session
    #[error("Clip not found: {0}")]
    ClipNotFound(ClipId),

    /// The requested status change is not allowed from the current state
    #[error("Invalid transition for clip {id}: {from} -> {to}")]
    InvalidTransition {
        id: ClipId,
        from: ClipStatus,
        to: ClipStatus,
    },

    /// Only ready clips can be shared
    #[error("Clip {id} cannot be shared while {status}")]
    NotShareable { id: ClipId, status: ClipStatus },
}
