//! Postgres-backed seat ledger adapter (schema and interface stubs).

use crate::core::error::RegistrarError;
use crate::core::ledger::{CourseCapacity, Enrollment, SeatLedger};
use crate::util::ids::{CourseId, StudentId};

/// Postgres ledger adapter placeholder.
///
/// Carries the schema a multi-instance deployment would use; the per-course
/// critical section maps onto `SELECT ... FOR UPDATE` of the course row.
#[derive(Debug, Default)]
pub struct PostgresLedger;

impl PostgresLedger {
    /// Create a new adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Migration statements for the capacity and enrollment tables.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS cr_courses (
    course_id BIGINT PRIMARY KEY,
    capacity INT NOT NULL CHECK (capacity > 0),
    occupied INT NOT NULL DEFAULT 0 CHECK (occupied >= 0 AND occupied <= capacity)
);
CREATE TABLE IF NOT EXISTS cr_enrollments (
    student_id BIGINT NOT NULL,
    course_id BIGINT NOT NULL REFERENCES cr_courses (course_id) ON DELETE CASCADE,
    enrolled_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (student_id, course_id)
);
CREATE INDEX IF NOT EXISTS idx_cr_enrollments_course ON cr_enrollments (course_id);
"#,
        ]
    }

    fn unwired<T>() -> Result<T, RegistrarError> {
        Err(RegistrarError::Backend(
            "postgres ledger not wired to database client".into(),
        ))
    }
}

impl SeatLedger for PostgresLedger {
    fn open_course(&self, _course: CourseId, _capacity: u32) -> Result<(), RegistrarError> {
        Self::unwired()
    }

    fn course(&self, _course: CourseId) -> Result<CourseCapacity, RegistrarError> {
        Self::unwired()
    }

    fn courses(&self) -> Result<Vec<CourseCapacity>, RegistrarError> {
        Self::unwired()
    }

    fn has_vacancy(&self, _course: CourseId) -> Result<bool, RegistrarError> {
        Self::unwired()
    }

    fn increment_occupied(&self, _course: CourseId) -> Result<(), RegistrarError> {
        Self::unwired()
    }

    fn decrement_occupied(&self, _course: CourseId) -> Result<(), RegistrarError> {
        Self::unwired()
    }

    fn set_capacity(&self, _course: CourseId, _new_capacity: u32) -> Result<(), RegistrarError> {
        Self::unwired()
    }

    fn insert_enrollment(&self, _enrollment: Enrollment) -> Result<(), RegistrarError> {
        Self::unwired()
    }

    fn remove_enrollment(
        &self,
        _course: CourseId,
        _student: StudentId,
    ) -> Result<Enrollment, RegistrarError> {
        Self::unwired()
    }

    fn is_enrolled(&self, _course: CourseId, _student: StudentId) -> Result<bool, RegistrarError> {
        Self::unwired()
    }

    fn roster(&self, _course: CourseId) -> Result<Vec<Enrollment>, RegistrarError> {
        Self::unwired()
    }

    fn enrollments_of(&self, _student: StudentId) -> Result<Vec<Enrollment>, RegistrarError> {
        Self::unwired()
    }
}
