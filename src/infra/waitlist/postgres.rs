//! Postgres-backed waitlist adapter (schema and interface stubs).

use crate::core::error::RegistrarError;
use crate::core::waitlist::{WaitlistEntry, WaitlistStore};
use crate::util::ids::{CourseId, StudentId};

/// Postgres waitlist adapter placeholder.
#[derive(Debug, Default)]
pub struct PostgresWaitlist;

impl PostgresWaitlist {
    /// Create a new adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Migration statements for the waitlist table.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS cr_waitlist_entries (
    course_id BIGINT NOT NULL,
    student_id BIGINT NOT NULL,
    position INT NOT NULL CHECK (position > 0),
    joined_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    notified BOOLEAN NOT NULL DEFAULT FALSE,
    PRIMARY KEY (course_id, student_id),
    UNIQUE (course_id, position)
);
CREATE INDEX IF NOT EXISTS idx_cr_waitlist_course_position ON cr_waitlist_entries (course_id, position);
"#,
        ]
    }

    fn unwired<T>() -> Result<T, RegistrarError> {
        Err(RegistrarError::Backend(
            "postgres waitlist not wired to database client".into(),
        ))
    }
}

impl WaitlistStore for PostgresWaitlist {
    fn append(
        &self,
        _course: CourseId,
        _student: StudentId,
        _joined_at_ms: u128,
    ) -> Result<u32, RegistrarError> {
        Self::unwired()
    }

    fn peek_head(&self, _course: CourseId) -> Result<Option<StudentId>, RegistrarError> {
        Self::unwired()
    }

    fn remove_head(&self, _course: CourseId) -> Result<WaitlistEntry, RegistrarError> {
        Self::unwired()
    }

    fn remove(
        &self,
        _course: CourseId,
        _student: StudentId,
    ) -> Result<WaitlistEntry, RegistrarError> {
        Self::unwired()
    }

    fn len(&self, _course: CourseId) -> Result<u32, RegistrarError> {
        Self::unwired()
    }

    fn position_of(
        &self,
        _course: CourseId,
        _student: StudentId,
    ) -> Result<Option<u32>, RegistrarError> {
        Self::unwired()
    }

    fn mark_notified(&self, _course: CourseId, _student: StudentId) -> Result<(), RegistrarError> {
        Self::unwired()
    }

    fn entries(&self, _course: CourseId) -> Result<Vec<WaitlistEntry>, RegistrarError> {
        Self::unwired()
    }

    fn lengths(&self) -> Result<Vec<(CourseId, u32)>, RegistrarError> {
        Self::unwired()
    }

    fn entries_for_student(
        &self,
        _student: StudentId,
    ) -> Result<Vec<WaitlistEntry>, RegistrarError> {
        Self::unwired()
    }
}
