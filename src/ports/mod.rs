// Ports - Interface definitions (contracts)

use async_trait::async_trait;

use crate::domain::model::*;

/// Port for logging and observability
#[async_trait]
pub trait LogPort: Send + Sync {
    /// Log info message
    async fn info(&self, message: &str);

    /// Log warning message
    async fn warn(&self, message: &str);

    /// Log error message
    async fn error(&self, message: &str);

    /// Log debug message
    async fn debug(&self, message: &str);
}

/// Observer notified of every change to the clip collection
///
/// Called while no lock on the collection is held, from whichever task
/// performed the change. Implementations must not block.
pub trait ClipEventListener: Send + Sync {
    fn on_event(&self, event: &ClipEvent);
}
