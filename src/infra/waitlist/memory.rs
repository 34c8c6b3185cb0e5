//! In-memory waitlist with explicit contiguous positions.

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;

use crate::core::error::RegistrarError;
use crate::core::waitlist::{WaitlistEntry, WaitlistStore};
use crate::util::ids::{CourseId, StudentId};

struct Slot {
    student: StudentId,
    position: u32,
    joined_at_ms: u128,
    notified: bool,
}

impl Slot {
    fn entry(&self, course: CourseId) -> WaitlistEntry {
        WaitlistEntry {
            student: self.student,
            course,
            position: self.position,
            joined_at_ms: self.joined_at_ms,
            notified: self.notified,
        }
    }
}

/// In-memory waitlist storing per-course lines in arrival order.
///
/// Arrival order is append order; a slot's `joined_at_ms` is display
/// metadata and never reorders the line. Positions are stored explicitly
/// and renumbered on every removal so they always form `{1..N}`.
#[derive(Default)]
pub struct InMemoryWaitlist {
    lines: RwLock<HashMap<CourseId, VecDeque<Slot>>>,
}

impl InMemoryWaitlist {
    /// Create an empty waitlist store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn assert_contiguous(line: &VecDeque<Slot>) {
        debug_assert!(
            line.iter()
                .enumerate()
                .all(|(idx, slot)| slot.position as usize == idx + 1),
            "waitlist positions must form 1..=N"
        );
    }
}

impl WaitlistStore for InMemoryWaitlist {
    fn append(
        &self,
        course: CourseId,
        student: StudentId,
        joined_at_ms: u128,
    ) -> Result<u32, RegistrarError> {
        let mut lines = self.lines.write();
        let line = lines.entry(course).or_default();
        if let Some(slot) = line.iter().find(|slot| slot.student == student) {
            return Err(RegistrarError::AlreadyWaiting {
                student,
                course,
                position: slot.position,
            });
        }
        let position = u32::try_from(line.len()).unwrap_or(u32::MAX) + 1;
        line.push_back(Slot {
            student,
            position,
            joined_at_ms,
            notified: false,
        });
        Self::assert_contiguous(line);
        Ok(position)
    }

    fn peek_head(&self, course: CourseId) -> Result<Option<StudentId>, RegistrarError> {
        let lines = self.lines.read();
        Ok(lines
            .get(&course)
            .and_then(|line| line.front())
            .map(|slot| slot.student))
    }

    fn remove_head(&self, course: CourseId) -> Result<WaitlistEntry, RegistrarError> {
        let mut lines = self.lines.write();
        let line = lines
            .get_mut(&course)
            .ok_or(RegistrarError::WaitlistEmpty(course))?;
        let head = line
            .pop_front()
            .ok_or(RegistrarError::WaitlistEmpty(course))?;
        for slot in line.iter_mut() {
            slot.position -= 1;
        }
        Self::assert_contiguous(line);
        if line.is_empty() {
            lines.remove(&course);
        }
        Ok(head.entry(course))
    }

    fn remove(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<WaitlistEntry, RegistrarError> {
        let mut lines = self.lines.write();
        let line = lines
            .get_mut(&course)
            .ok_or(RegistrarError::NotWaiting { student, course })?;
        let idx = line
            .iter()
            .position(|slot| slot.student == student)
            .ok_or(RegistrarError::NotWaiting { student, course })?;
        let removed = line
            .remove(idx)
            .ok_or(RegistrarError::NotWaiting { student, course })?;
        for slot in line.iter_mut().skip(idx) {
            slot.position -= 1;
        }
        Self::assert_contiguous(line);
        if line.is_empty() {
            lines.remove(&course);
        }
        Ok(removed.entry(course))
    }

    fn len(&self, course: CourseId) -> Result<u32, RegistrarError> {
        let lines = self.lines.read();
        Ok(lines
            .get(&course)
            .map_or(0, |line| u32::try_from(line.len()).unwrap_or(u32::MAX)))
    }

    fn position_of(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Option<u32>, RegistrarError> {
        let lines = self.lines.read();
        Ok(lines.get(&course).and_then(|line| {
            line.iter()
                .find(|slot| slot.student == student)
                .map(|slot| slot.position)
        }))
    }

    fn mark_notified(&self, course: CourseId, student: StudentId) -> Result<(), RegistrarError> {
        let mut lines = self.lines.write();
        if let Some(line) = lines.get_mut(&course) {
            if let Some(slot) = line.iter_mut().find(|slot| slot.student == student) {
                slot.notified = true;
            }
        }
        Ok(())
    }

    fn entries(&self, course: CourseId) -> Result<Vec<WaitlistEntry>, RegistrarError> {
        let lines = self.lines.read();
        Ok(lines.get(&course).map_or_else(Vec::new, |line| {
            line.iter().map(|slot| slot.entry(course)).collect()
        }))
    }

    fn lengths(&self) -> Result<Vec<(CourseId, u32)>, RegistrarError> {
        let lines = self.lines.read();
        let mut all: Vec<(CourseId, u32)> = lines
            .iter()
            .map(|(course, line)| (*course, u32::try_from(line.len()).unwrap_or(u32::MAX)))
            .collect();
        all.sort_by_key(|(course, _)| *course);
        Ok(all)
    }

    fn entries_for_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<WaitlistEntry>, RegistrarError> {
        let lines = self.lines.read();
        let mut found: Vec<WaitlistEntry> = lines
            .iter()
            .filter_map(|(course, line)| {
                line.iter()
                    .find(|slot| slot.student == student)
                    .map(|slot| slot.entry(*course))
            })
            .collect();
        found.sort_by_key(|entry| entry.course);
        Ok(found)
    }
}
