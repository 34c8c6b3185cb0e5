//! In-memory seat ledger.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::core::error::RegistrarError;
use crate::core::ledger::{CourseCapacity, Enrollment, SeatLedger};
use crate::util::ids::{CourseId, StudentId};

struct CourseSeats {
    capacity: u32,
    occupied: u32,
    roster: HashMap<StudentId, Enrollment>,
}

/// In-memory ledger for development, testing, and single-instance
/// deployments.
///
/// Each call locks the course map briefly; check-then-act atomicity across
/// calls comes from the coordinator's per-course critical section.
#[derive(Default)]
pub struct InMemoryLedger {
    courses: RwLock<HashMap<CourseId, CourseSeats>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeatLedger for InMemoryLedger {
    fn open_course(&self, course: CourseId, capacity: u32) -> Result<(), RegistrarError> {
        if capacity == 0 {
            return Err(RegistrarError::ZeroCapacity(course));
        }
        let mut courses = self.courses.write();
        if courses.contains_key(&course) {
            return Err(RegistrarError::CourseExists(course));
        }
        courses.insert(
            course,
            CourseSeats {
                capacity,
                occupied: 0,
                roster: HashMap::new(),
            },
        );
        Ok(())
    }

    fn course(&self, course: CourseId) -> Result<CourseCapacity, RegistrarError> {
        let courses = self.courses.read();
        let seats = courses
            .get(&course)
            .ok_or(RegistrarError::CourseNotFound(course))?;
        Ok(CourseCapacity {
            course,
            capacity: seats.capacity,
            occupied: seats.occupied,
        })
    }

    fn courses(&self) -> Result<Vec<CourseCapacity>, RegistrarError> {
        let courses = self.courses.read();
        let mut all: Vec<CourseCapacity> = courses
            .iter()
            .map(|(course, seats)| CourseCapacity {
                course: *course,
                capacity: seats.capacity,
                occupied: seats.occupied,
            })
            .collect();
        all.sort_by_key(|c| c.course);
        Ok(all)
    }

    fn has_vacancy(&self, course: CourseId) -> Result<bool, RegistrarError> {
        self.course(course).map(|c| c.has_vacancy())
    }

    fn increment_occupied(&self, course: CourseId) -> Result<(), RegistrarError> {
        let mut courses = self.courses.write();
        let seats = courses
            .get_mut(&course)
            .ok_or(RegistrarError::CourseNotFound(course))?;
        if seats.occupied >= seats.capacity {
            return Err(RegistrarError::CapacityExceeded(course));
        }
        seats.occupied += 1;
        Ok(())
    }

    fn decrement_occupied(&self, course: CourseId) -> Result<(), RegistrarError> {
        let mut courses = self.courses.write();
        let seats = courses
            .get_mut(&course)
            .ok_or(RegistrarError::CourseNotFound(course))?;
        if seats.occupied == 0 {
            return Err(RegistrarError::OccupancyUnderflow(course));
        }
        seats.occupied -= 1;
        Ok(())
    }

    fn set_capacity(&self, course: CourseId, new_capacity: u32) -> Result<(), RegistrarError> {
        if new_capacity == 0 {
            return Err(RegistrarError::ZeroCapacity(course));
        }
        let mut courses = self.courses.write();
        let seats = courses
            .get_mut(&course)
            .ok_or(RegistrarError::CourseNotFound(course))?;
        if new_capacity < seats.occupied {
            return Err(RegistrarError::CapacityBelowOccupancy {
                course,
                capacity: new_capacity,
                occupied: seats.occupied,
            });
        }
        seats.capacity = new_capacity;
        Ok(())
    }

    fn insert_enrollment(&self, enrollment: Enrollment) -> Result<(), RegistrarError> {
        let mut courses = self.courses.write();
        let seats = courses
            .get_mut(&enrollment.course)
            .ok_or(RegistrarError::CourseNotFound(enrollment.course))?;
        if seats.roster.contains_key(&enrollment.student) {
            return Err(RegistrarError::AlreadyEnrolled {
                student: enrollment.student,
                course: enrollment.course,
            });
        }
        seats.roster.insert(enrollment.student, enrollment);
        Ok(())
    }

    fn remove_enrollment(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Enrollment, RegistrarError> {
        let mut courses = self.courses.write();
        let seats = courses
            .get_mut(&course)
            .ok_or(RegistrarError::CourseNotFound(course))?;
        seats
            .roster
            .remove(&student)
            .ok_or(RegistrarError::NotEnrolled { student, course })
    }

    fn is_enrolled(&self, course: CourseId, student: StudentId) -> Result<bool, RegistrarError> {
        let courses = self.courses.read();
        let seats = courses
            .get(&course)
            .ok_or(RegistrarError::CourseNotFound(course))?;
        Ok(seats.roster.contains_key(&student))
    }

    fn roster(&self, course: CourseId) -> Result<Vec<Enrollment>, RegistrarError> {
        let courses = self.courses.read();
        let seats = courses
            .get(&course)
            .ok_or(RegistrarError::CourseNotFound(course))?;
        let mut roster: Vec<Enrollment> = seats.roster.values().copied().collect();
        roster.sort_by_key(|e| (e.enrolled_at_ms, e.student));
        Ok(roster)
    }

    fn enrollments_of(&self, student: StudentId) -> Result<Vec<Enrollment>, RegistrarError> {
        let courses = self.courses.read();
        let mut found: Vec<Enrollment> = courses
            .values()
            .filter_map(|seats| seats.roster.get(&student).copied())
            .collect();
        found.sort_by_key(|e| e.course);
        Ok(found)
    }
}
