//! Notification port: outbound event emission contract.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::util::ids::{CourseId, StudentId};

/// Events the coordinator emits after its critical section releases.
///
/// The coordinator neither knows nor cares how these are delivered
/// (in-app record, email, nothing); sinks swallow their own failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnrollmentEvent {
    /// The student got a seat directly.
    EnrollmentSucceeded {
        /// Seated student.
        student: StudentId,
        /// Course enrolled into.
        course: CourseId,
    },
    /// The course was full; the student joined the waiting line.
    Waitlisted {
        /// Waiting student.
        student: StudentId,
        /// Course being waited on.
        course: CourseId,
        /// Assigned line position.
        position: u32,
    },
    /// A vacated seat was filled from the head of the line.
    AdvancedFromWaitlist {
        /// Promoted student.
        student: StudentId,
        /// Course the seat belongs to.
        course: CourseId,
    },
}

impl EnrollmentEvent {
    /// Student the event concerns.
    #[must_use]
    pub const fn student(&self) -> StudentId {
        match self {
            Self::EnrollmentSucceeded { student, .. }
            | Self::Waitlisted { student, .. }
            | Self::AdvancedFromWaitlist { student, .. } => *student,
        }
    }

    /// Course the event concerns.
    #[must_use]
    pub const fn course(&self) -> CourseId {
        match self {
            Self::EnrollmentSucceeded { course, .. }
            | Self::Waitlisted { course, .. }
            | Self::AdvancedFromWaitlist { course, .. } => *course,
        }
    }

    /// Short action label for logs and audit records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EnrollmentSucceeded { .. } => "enrollment_succeeded",
            Self::Waitlisted { .. } => "waitlisted",
            Self::AdvancedFromWaitlist { .. } => "advanced_from_waitlist",
        }
    }
}

/// Single-method sink the coordinator hands events to.
///
/// `notify` must not block and must not fail the enrollment transaction:
/// delivery problems are the sink's to log, never to propagate back into a
/// rollback of capacity state. The coordinator calls this only after the
/// course's critical section has released.
pub trait NotificationSink: Send + Sync + 'static {
    /// Hand one event to the sink.
    fn notify(&self, event: EnrollmentEvent);
}

/// Abstraction for spawning delivery work on a runtime.
///
/// Lets sinks push slow outbound I/O off the caller's thread without this
/// crate committing to a runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
