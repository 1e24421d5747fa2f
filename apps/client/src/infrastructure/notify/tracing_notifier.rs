use super::traits::{Notification, NotificationLevel, NotificationSink};

/// Writes notifications to the log. Used by the command-line driver, which
/// has no toast surface.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!(text = %notification.message, "notification"),
            NotificationLevel::Error => tracing::error!(text = %notification.message, "notification"),
        }
    }
}
