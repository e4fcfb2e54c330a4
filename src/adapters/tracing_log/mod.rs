// Tracing log adapter - Structured logging using tracing crate

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::ports::*;

/// Tracing log adapter
///
/// Events are tagged with a fixed component name so clip lifecycle output can
/// be filtered separately from the command layer.
pub struct TracingLogAdapter {
    component: &'static str,
}

impl TracingLogAdapter {
    /// Create new tracing log adapter
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new("clip_lifecycle")
    }
}

#[async_trait]
impl LogPort for TracingLogAdapter {
    async fn info(&self, message: &str) {
        info!(component = self.component, "{}", message);
    }

    async fn warn(&self, message: &str) {
        warn!(component = self.component, "{}", message);
    }

    async fn error(&self, message: &str) {
        error!(component = self.component, "{}", message);
    }

    async fn debug(&self, message: &str) {
        debug!(component = self.component, "{}", message);
    }
}
