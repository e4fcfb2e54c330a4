// Adapters - External system implementations

pub mod event_channel;
pub mod tracing_log;

// Re-export adapters
pub use event_channel::ChannelEventAdapter;
pub use tracing_log::TracingLogAdapter;
