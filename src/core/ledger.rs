//! Seat ledger port: capacity, occupancy, and enrollment records.

use serde::{Deserialize, Serialize};

use crate::core::error::RegistrarError;
use crate::util::ids::{CourseId, StudentId};

/// Capacity record for one course.
///
/// `occupied` is the authoritative seat count; the invariant
/// `0 <= occupied <= capacity` holds at all times, including while
/// concurrent operations are in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCapacity {
    /// Course this record belongs to.
    pub course: CourseId,
    /// Configured number of seats (positive, set externally).
    pub capacity: u32,
    /// Seats currently held by enrolled students.
    pub occupied: u32,
}

impl CourseCapacity {
    /// Seats still open in this course.
    #[must_use]
    pub const fn available(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }

    /// True iff at least one seat is open.
    #[must_use]
    pub const fn has_vacancy(&self) -> bool {
        self.occupied < self.capacity
    }
}

/// Enrollment record for one seated (student, course) pair.
///
/// Existence of this record implies the student counts toward `occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Seated student.
    pub student: StudentId,
    /// Course the seat belongs to.
    pub course: CourseId,
    /// When the seat was taken, milliseconds since epoch.
    pub enrolled_at_ms: u128,
}

/// Abstraction for seat ledger backends.
///
/// Implementations must be safe to share across threads, but they do not
/// provide the check-then-act atomicity the enrollment flow needs: that is
/// the coordinator's per-course critical section. Backends only guarantee
/// that each individual call is consistent.
pub trait SeatLedger: Send + Sync + 'static {
    /// Create the capacity record for a new course (external input event).
    fn open_course(&self, course: CourseId, capacity: u32) -> Result<(), RegistrarError>;

    /// Fetch one course's capacity record.
    fn course(&self, course: CourseId) -> Result<CourseCapacity, RegistrarError>;

    /// Snapshot of every known course, ordered by course id.
    fn courses(&self) -> Result<Vec<CourseCapacity>, RegistrarError>;

    /// True iff `occupied < capacity`.
    fn has_vacancy(&self, course: CourseId) -> Result<bool, RegistrarError>;

    /// Take one seat. Fails with [`RegistrarError::CapacityExceeded`] if
    /// the course is full; defensive, never expected under the lock
    /// discipline.
    fn increment_occupied(&self, course: CourseId) -> Result<(), RegistrarError>;

    /// Release one seat. Fails with [`RegistrarError::OccupancyUnderflow`]
    /// at zero; defensive, as above.
    fn decrement_occupied(&self, course: CourseId) -> Result<(), RegistrarError>;

    /// Update the configured capacity. Does not advance anyone; reacting
    /// to the new vacancy is the coordinator's job. Fails with
    /// [`RegistrarError::CapacityBelowOccupancy`] rather than stranding
    /// enrolled students.
    fn set_capacity(&self, course: CourseId, new_capacity: u32) -> Result<(), RegistrarError>;

    /// Record a seated student. The caller has already taken the seat via
    /// [`SeatLedger::increment_occupied`].
    fn insert_enrollment(&self, enrollment: Enrollment) -> Result<(), RegistrarError>;

    /// Remove a seated student's record, returning it. Fails with
    /// [`RegistrarError::NotEnrolled`] if absent.
    fn remove_enrollment(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Enrollment, RegistrarError>;

    /// True iff an enrollment record exists for the pair.
    fn is_enrolled(&self, course: CourseId, student: StudentId) -> Result<bool, RegistrarError>;

    /// All enrollment records for one course, ordered by enrollment time.
    fn roster(&self, course: CourseId) -> Result<Vec<Enrollment>, RegistrarError>;

    /// All enrollment records for one student, ordered by course id.
    fn enrollments_of(&self, student: StudentId) -> Result<Vec<Enrollment>, RegistrarError>;
}
