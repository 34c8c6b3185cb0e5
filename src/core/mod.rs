//! Core enrollment abstractions: ports, records, and the coordinator.

pub mod analyzer;
pub mod audit;
pub mod coordinator;
pub mod error;
pub mod ledger;
pub mod notify;
pub mod waitlist;

pub use analyzer::{DemandAnalyzer, HighDemandCourse, DEFAULT_SECTION_THRESHOLD};
pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink, PostgresAuditSink};
pub use coordinator::{EnrollmentCoordinator, EnrollmentOutcome};
pub use error::{AppResult, RegistrarError};
pub use ledger::{CourseCapacity, Enrollment, SeatLedger};
pub use notify::{EnrollmentEvent, NotificationSink, Spawn};
pub use waitlist::{WaitlistEntry, WaitlistStore};
