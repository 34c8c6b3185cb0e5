//! Structured-log notification sink.

use crate::core::notify::{EnrollmentEvent, NotificationSink};

/// Delivers events to the tracing subscriber. The default sink for
/// deployments without an outbound channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Create the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationSink for TracingNotifier {
    fn notify(&self, event: EnrollmentEvent) {
        match event {
            EnrollmentEvent::EnrollmentSucceeded { student, course } => {
                tracing::info!(%student, %course, "notify: enrollment succeeded");
            }
            EnrollmentEvent::Waitlisted {
                student,
                course,
                position,
            } => {
                tracing::info!(%student, %course, position, "notify: waitlisted");
            }
            EnrollmentEvent::AdvancedFromWaitlist { student, course } => {
                tracing::info!(%student, %course, "notify: advanced from waitlist");
            }
        }
    }
}
