//! # Course Registrar
//!
//! Capacity-aware course enrollment and waitlist coordination for
//! learning-center platforms.
//!
//! This library is the enrollment core of an administrative web
//! application: the route layer, CRUD forms, payments, and notification
//! delivery live elsewhere and talk to this crate through narrow ports.
//! What lives here is the one subsystem with real invariants: a course
//! never exceeds its seat capacity, students denied a seat wait in a
//! strictly ordered line, and a vacated seat is filled automatically and
//! deterministically from the head of that line.
//!
//! ## Core guarantees
//!
//! - **Capacity**: `0 <= occupied <= capacity` for every course at all
//!   times, including under concurrent registrations and drops.
//! - **FIFO waitlists**: positions are contiguous from 1 and ordered by
//!   arrival as observed by the store, never by wall clock or student id.
//! - **Deterministic advancement**: a drop or capacity increase promotes
//!   the current head of the line inside the same critical section, so a
//!   concurrently arriving registration can never steal the seat.
//! - **Exclusivity**: a student is never simultaneously seated and
//!   waiting for the same course.
//!
//! Operations on the same course are mutually exclusive; operations on
//! different courses run in parallel. Notifications and audit records are
//! buffered during the critical section and dispatched only after it
//! releases, so a slow sink never blocks another student's registration.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use course_registrar::builders::build_in_memory;
//! use course_registrar::config::RegistrarConfig;
//! use course_registrar::infra::TracingNotifier;
//! use course_registrar::util::ids::{CourseId, StudentId};
//!
//! let cfg = RegistrarConfig::from_json_str(input)?;
//! let registrar = build_in_memory(&cfg, TracingNotifier::new())?;
//!
//! registrar.open_course(CourseId(301), 25)?;
//! let outcome = registrar.register(StudentId(1001), CourseId(301))?;
//! ```
//!
//! For complete examples, see:
//! - `tests/enrollment_flow_test.rs` - Full integration tests
//! - `tests/concurrency_test.rs` - Interleaving and race coverage

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Builders to construct registrar components from configuration.
pub mod builders;
/// Configuration models for backends, thresholds, and seeded courses.
pub mod config;
/// Core enrollment abstractions: ports, records, and the coordinator.
pub mod core;
/// Infrastructure adapters for ledgers, waitlists, and notification sinks.
pub mod infra;
/// Route-facing API surface and runtime adapters.
pub mod runtime;
/// Shared utilities.
pub mod util;
