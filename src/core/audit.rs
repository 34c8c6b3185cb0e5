//! Audit sink implementations.
//!
//! Provides in-memory logging and Postgres schema definitions for audit
//! persistence of enrollment actions.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::util::clock::now_ms;
use crate::util::ids::{CourseId, StudentId};

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Student the action concerns, absent for course-level actions
    /// (open, set_capacity).
    pub student: Option<StudentId>,
    /// Course the action concerns.
    pub course: CourseId,
    /// Action taken (open, register, waitlist, drop, advance, withdraw,
    /// set_capacity).
    pub action: String,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
///
/// Clones share the same bounded buffer, so a test can keep a handle while
/// the coordinator owns the boxed sink.
#[derive(Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Postgres-backed audit sink (schema-only; DB I/O not wired).
pub struct PostgresAuditSink;

impl PostgresAuditSink {
    /// Returns SQL migration statements for the audit log.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS cr_audit_events (
    event_id TEXT PRIMARY KEY,
    student_id BIGINT,
    course_id BIGINT NOT NULL,
    action TEXT NOT NULL,
    detail TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_cr_audit_events_course_created ON cr_audit_events (course_id, created_at);
CREATE INDEX IF NOT EXISTS idx_cr_audit_events_student ON cr_audit_events (student_id);
"#,
        ]
    }
}

impl AuditSink for PostgresAuditSink {
    fn record(&mut self, _event: AuditEvent) {
        // Stub: actual DB writes require a runtime + client; left to the
        // integration layer.
    }
}

/// Helper to build an audit event from context.
pub fn build_audit_event(
    student: Option<StudentId>,
    course: CourseId,
    action: impl Into<String>,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        student,
        course,
        action: action.into(),
        created_at_ms: now_ms(),
        detail,
    }
}
