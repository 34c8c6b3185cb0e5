//! Registrar configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::analyzer::DEFAULT_SECTION_THRESHOLD;

/// Seat ledger backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerBackendConfig {
    /// In-memory ledger for development/testing and single instances.
    InMemory,
    /// Postgres ledger with row-lock critical sections.
    Postgres,
}

/// Waitlist backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistBackendConfig {
    /// In-memory waitlist.
    InMemory,
    /// Postgres waitlist.
    Postgres,
}

/// Capacity record seeded at startup (course creation is otherwise an
/// external runtime event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSeed {
    /// Course identifier.
    pub course: u64,
    /// Configured number of seats.
    pub capacity: u32,
}

/// Root registrar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Waitlist length at which a course is flagged as needing a new
    /// section.
    pub suggestion_threshold: u32,
    /// Bounded size of the in-memory audit buffer.
    pub audit_buffer: usize,
    /// Ledger backend selection.
    pub ledger: LedgerBackendConfig,
    /// Waitlist backend selection.
    pub waitlist: WaitlistBackendConfig,
    /// Courses opened when the registrar is built.
    pub courses: Vec<CourseSeed>,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            suggestion_threshold: DEFAULT_SECTION_THRESHOLD,
            audit_buffer: 1024,
            ledger: LedgerBackendConfig::InMemory,
            waitlist: WaitlistBackendConfig::InMemory,
            courses: Vec::new(),
        }
    }
}

impl RegistrarConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.suggestion_threshold == 0 {
            return Err("suggestion_threshold must be greater than 0".into());
        }
        if self.audit_buffer == 0 {
            return Err("audit_buffer must be greater than 0".into());
        }
        let mut seen = std::collections::HashSet::new();
        for seed in &self.courses {
            if seed.capacity == 0 {
                return Err(format!("course {} capacity must be greater than 0", seed.course));
            }
            if !seen.insert(seed.course) {
                return Err(format!("course {} is seeded more than once", seed.course));
            }
        }
        Ok(())
    }

    /// Parse registrar configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
