use super::traits::{Notification, NotificationSink};
use tokio::sync::broadcast;

/// Fans notifications out to every subscribed UI surface.
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl NotificationSink for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        // No subscribers means nobody is looking; the message is dropped.
        if self.sender.send(notification).is_err() {
            tracing::debug!("notification dropped, no subscribers");
        }
    }
}
