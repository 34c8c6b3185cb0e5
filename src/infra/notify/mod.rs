//! Notification sink backends.

pub mod memory;
pub mod spawned;
pub mod tracing;

pub use memory::InMemoryNotifier;
pub use spawned::{NotificationDelivery, SpawnedNotifier};
pub use tracing::TracingNotifier;
