//! Configuration models for backends, thresholds, and seeded courses.

pub mod registrar;

pub use registrar::{CourseSeed, LedgerBackendConfig, RegistrarConfig, WaitlistBackendConfig};
