//! Fire-and-forget async notification dispatch.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::core::notify::{EnrollmentEvent, NotificationSink, Spawn};

/// Outbound delivery port for sinks that do real I/O (email, in-app
/// records, webhooks).
#[async_trait]
pub trait NotificationDelivery: Send + Sync + 'static {
    /// Deliver one event. Failures are logged by the wrapping sink, never
    /// surfaced to the enrollment transaction.
    async fn deliver(&self, event: EnrollmentEvent) -> AppResult<()>;
}

/// Wraps a delivery port and a runtime spawner into an infallible sink.
///
/// `notify` returns immediately; delivery runs on the spawner so a slow
/// channel never holds up a registration call.
pub struct SpawnedNotifier<D, S> {
    delivery: Arc<D>,
    spawner: S,
}

impl<D, S> SpawnedNotifier<D, S>
where
    D: NotificationDelivery,
    S: Spawn,
{
    /// Create a sink from a delivery port and a spawner.
    pub fn new(delivery: D, spawner: S) -> Self {
        Self {
            delivery: Arc::new(delivery),
            spawner,
        }
    }
}

impl<D, S> NotificationSink for SpawnedNotifier<D, S>
where
    D: NotificationDelivery,
    S: Spawn + Send + Sync + 'static,
{
    fn notify(&self, event: EnrollmentEvent) {
        let delivery = Arc::clone(&self.delivery);
        self.spawner.spawn(async move {
            if let Err(err) = delivery.deliver(event).await {
                tracing::warn!(error = %err, kind = event.kind(), "notification delivery failed");
            }
        });
    }
}
