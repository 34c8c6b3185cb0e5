//! High-demand course suggestions.

use serde::{Deserialize, Serialize};

use crate::core::error::RegistrarError;
use crate::core::waitlist::WaitlistStore;
use crate::util::ids::CourseId;

/// Waitlist length at which a course warrants a new section.
pub const DEFAULT_SECTION_THRESHOLD: u32 = 5;

/// One advisory signal: a course whose line has reached the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighDemandCourse {
    /// Course in demand.
    pub course: CourseId,
    /// Current waitlist length.
    pub waiting: u32,
}

/// Read-only reporting pass over waitlist lengths.
///
/// Never mutates state and is safe to run concurrently with any
/// coordinator operation: a momentarily stale length is acceptable for an
/// advisory report.
#[derive(Debug, Clone, Copy)]
pub struct DemandAnalyzer {
    threshold: u32,
}

impl Default for DemandAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_THRESHOLD)
    }
}

impl DemandAnalyzer {
    /// Create an analyzer with the given threshold (at least 1).
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self {
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Every course whose waitlist has reached the threshold, longest
    /// line first (ties broken by course id for a stable report).
    pub fn suggest<W: WaitlistStore + ?Sized>(
        &self,
        waitlist: &W,
    ) -> Result<Vec<HighDemandCourse>, RegistrarError> {
        let mut hits: Vec<HighDemandCourse> = waitlist
            .lengths()?
            .into_iter()
            .filter(|(_, waiting)| *waiting >= self.threshold)
            .map(|(course, waiting)| HighDemandCourse { course, waiting })
            .collect();
        hits.sort_by(|a, b| b.waiting.cmp(&a.waiting).then(a.course.cmp(&b.course)));
        Ok(hits)
    }
}
