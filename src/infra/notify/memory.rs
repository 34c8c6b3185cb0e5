//! In-memory notification sink.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::notify::{EnrollmentEvent, NotificationSink};
use crate::util::ids::StudentId;

/// Records every emitted event for development and testing.
///
/// Clones share the same buffer, so tests can keep a handle while the
/// coordinator owns another.
#[derive(Clone, Default)]
pub struct InMemoryNotifier {
    events: Arc<Mutex<Vec<EnrollmentEvent>>>,
}

impl InMemoryNotifier {
    /// Create an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event emitted so far, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EnrollmentEvent> {
        self.events.lock().clone()
    }

    /// Events emitted for one student, in emission order.
    #[must_use]
    pub fn events_for(&self, student: StudentId) -> Vec<EnrollmentEvent> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.student() == student)
            .copied()
            .collect()
    }
}

impl NotificationSink for InMemoryNotifier {
    fn notify(&self, event: EnrollmentEvent) {
        self.events.lock().push(event);
    }
}
