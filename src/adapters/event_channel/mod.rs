// Event channel adapter - Forwards clip events into a tokio channel

use tokio::sync::mpsc;

use crate::domain::model::ClipEvent;
use crate::ports::ClipEventListener;

/// Listener that forwards every event to an unbounded mpsc channel
///
/// Lets async consumers `recv().await` status changes instead of polling the
/// collection. Events sent after the receiver is dropped are discarded.
pub struct ChannelEventAdapter {
    sender: mpsc::UnboundedSender<ClipEvent>,
}

impl ChannelEventAdapter {
    /// Create an adapter together with the receiving end
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ClipEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ClipEventListener for ChannelEventAdapter {
    fn on_event(&self, event: &ClipEvent) {
        if self.sender.send(event.clone()).is_err() {
            tracing::trace!("Event receiver dropped, discarding event");
        }
    }
}
