//! Error types for registrar operations.

use thiserror::Error;

use crate::util::ids::{CourseId, StudentId};

/// Errors produced by registrar components.
///
/// Everything up to [`RegistrarError::NotWaiting`] is an expected,
/// recoverable condition the route layer surfaces to the user. The
/// defensive variants indicate the per-course critical section was
/// violated and must be treated as bugs, not business outcomes; see
/// [`RegistrarError::is_defensive`].
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// The course is unknown to the ledger.
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    /// A capacity record already exists for this course.
    #[error("course {0} already exists")]
    CourseExists(CourseId),
    /// Capacity must be a positive number of seats.
    #[error("course {0} capacity must be greater than zero")]
    ZeroCapacity(CourseId),
    /// A capacity edit would strand already-enrolled students.
    #[error(
        "cannot set capacity of course {course} to {capacity}: {occupied} students are enrolled"
    )]
    CapacityBelowOccupancy {
        /// Course being edited.
        course: CourseId,
        /// Requested capacity.
        capacity: u32,
        /// Current occupancy.
        occupied: u32,
    },
    /// The student already holds a seat in this course.
    #[error("student {student} is already enrolled in course {course}")]
    AlreadyEnrolled {
        /// Student attempting to register.
        student: StudentId,
        /// Target course.
        course: CourseId,
    },
    /// The student is already in the waiting line for this course.
    #[error("student {student} is already waiting for course {course} at position {position}")]
    AlreadyWaiting {
        /// Student attempting to register.
        student: StudentId,
        /// Target course.
        course: CourseId,
        /// Their current waitlist position.
        position: u32,
    },
    /// No enrollment record exists for this (student, course) pair.
    #[error("student {student} is not enrolled in course {course}")]
    NotEnrolled {
        /// Student named by the drop request.
        student: StudentId,
        /// Target course.
        course: CourseId,
    },
    /// No waitlist entry exists for this (student, course) pair.
    #[error("student {student} is not waiting for course {course}")]
    NotWaiting {
        /// Student named by the withdrawal request.
        student: StudentId,
        /// Target course.
        course: CourseId,
    },
    /// Occupancy would exceed capacity. Defensive: unreachable when every
    /// mutation runs under the course's critical section.
    #[error("occupancy of course {0} would exceed capacity")]
    CapacityExceeded(CourseId),
    /// Occupancy would drop below zero. Defensive, as above.
    #[error("occupancy of course {0} is already zero")]
    OccupancyUnderflow(CourseId),
    /// Head removal on an empty waitlist. Defensive: the coordinator only
    /// removes a head it has just peeked under the same lock.
    #[error("waitlist of course {0} is empty")]
    WaitlistEmpty(CourseId),
    /// Backend-specific failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

impl RegistrarError {
    /// True for errors that indicate a broken locking discipline rather
    /// than a user-visible condition. Callers should log these loudly and
    /// fail the request instead of retrying or self-healing.
    #[must_use]
    pub const fn is_defensive(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded(_) | Self::OccupancyUnderflow(_) | Self::WaitlistEmpty(_)
        )
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
