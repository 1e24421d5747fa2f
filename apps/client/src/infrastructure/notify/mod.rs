pub mod broadcast_notifier;
pub mod tracing_notifier;
pub mod traits;
