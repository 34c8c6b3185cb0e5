//! Waitlist port: per-course ordered waiting lines with FIFO semantics.

use serde::{Deserialize, Serialize};

use crate::core::error::RegistrarError;
use crate::util::ids::{CourseId, StudentId};

/// One waiting (student, course) pair.
///
/// Per course, positions are exactly `{1..N}` with no gaps or duplicates.
/// Order is strictly FIFO by arrival, where arrival is the order `append`
/// calls are observed by the store: two entries with the same `joined_at_ms`
/// keep their insertion order, and the wall clock never reorders anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Waiting student.
    pub student: StudentId,
    /// Course being waited on.
    pub course: CourseId,
    /// Current position, 1 = head.
    pub position: u32,
    /// When the student joined the line, milliseconds since epoch.
    pub joined_at_ms: u128,
    /// Whether the student has been told they are waitlisted.
    pub notified: bool,
}

/// Abstraction for waitlist backends.
///
/// Like [`crate::core::ledger::SeatLedger`], implementations are
/// thread-safe per call; the coordinator's per-course critical section
/// supplies cross-call atomicity.
pub trait WaitlistStore: Send + Sync + 'static {
    /// Add a student at the tail, returning the assigned position (line
    /// length after insertion). Fails with
    /// [`RegistrarError::AlreadyWaiting`] if the student already has an
    /// entry for this course.
    fn append(
        &self,
        course: CourseId,
        student: StudentId,
        joined_at_ms: u128,
    ) -> Result<u32, RegistrarError>;

    /// Student at position 1, if any. Does not mutate.
    fn peek_head(&self, course: CourseId) -> Result<Option<StudentId>, RegistrarError>;

    /// Remove the position-1 entry and decrement every remaining position
    /// by one, preserving contiguity from 1. Fails with
    /// [`RegistrarError::WaitlistEmpty`] if nothing is waiting.
    fn remove_head(&self, course: CourseId) -> Result<WaitlistEntry, RegistrarError>;

    /// Remove an arbitrary entry (a waiting student withdrawing) and
    /// decrement every greater position by one. Fails with
    /// [`RegistrarError::NotWaiting`] if absent.
    fn remove(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<WaitlistEntry, RegistrarError>;

    /// Current line length. Zero for courses nobody has waited on.
    fn len(&self, course: CourseId) -> Result<u32, RegistrarError>;

    /// Current position for display to the waiting party.
    fn position_of(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Option<u32>, RegistrarError>;

    /// Mark the student's entry as notified. A missing entry is not an
    /// error here: the student may have advanced or withdrawn between the
    /// notification being queued and delivered.
    fn mark_notified(&self, course: CourseId, student: StudentId) -> Result<(), RegistrarError>;

    /// Snapshot of one course's line, ordered by position.
    fn entries(&self, course: CourseId) -> Result<Vec<WaitlistEntry>, RegistrarError>;

    /// `(course, length)` for every course with a non-empty line, ordered
    /// by course id. Input to the demand analyzer.
    fn lengths(&self) -> Result<Vec<(CourseId, u32)>, RegistrarError>;

    /// Every line entry held by one student, ordered by course id.
    fn entries_for_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<WaitlistEntry>, RegistrarError>;
}
