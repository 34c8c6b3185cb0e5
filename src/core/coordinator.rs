//! Enrollment coordinator: the only component that enrolls, drops, or
//! advances students.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::analyzer::{DemandAnalyzer, HighDemandCourse};
use crate::core::audit::{build_audit_event, AuditEvent, AuditSink};
use crate::core::error::RegistrarError;
use crate::core::ledger::{Enrollment, SeatLedger};
use crate::core::notify::{EnrollmentEvent, NotificationSink};
use crate::core::waitlist::WaitlistStore;
use crate::util::clock::now_ms;
use crate::util::ids::{CourseId, StudentId};

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnrollmentOutcome {
    /// The student got a seat.
    Enrolled,
    /// The course was full; the student joined the waiting line.
    Waitlisted {
        /// Assigned line position.
        position: u32,
    },
}

/// Notifications and audit records accumulated inside a critical section,
/// flushed only after the course lock releases so a slow sink never blocks
/// another student's registration.
#[derive(Default)]
struct Outbox {
    events: Vec<EnrollmentEvent>,
    audits: Vec<AuditEvent>,
}

/// Coordinates register/drop/advance as atomic operations per course.
///
/// Holds one lock per course: operations on the same course are mutually
/// exclusive, operations on different courses proceed in parallel. The
/// ledger and waitlist backends only need per-call consistency; every
/// check-then-act sequence happens under the course lock held here.
pub struct EnrollmentCoordinator<L, W, N>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    ledger: L,
    waitlist: W,
    notifier: N,
    /// Per-course critical sections, created on first touch.
    locks: Mutex<HashMap<CourseId, Arc<Mutex<()>>>>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<L, W, N> EnrollmentCoordinator<L, W, N>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    /// Create a coordinator from backend components.
    pub fn new(ledger: L, waitlist: W, notifier: N) -> Self {
        Self {
            ledger,
            waitlist,
            notifier,
            locks: Mutex::new(HashMap::new()),
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    /// Read access to the seat ledger, for reporting views.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Read access to the waitlist store, for reporting views.
    pub const fn waitlist(&self) -> &W {
        &self.waitlist
    }

    /// Create the capacity record for a new course (external input event).
    pub fn open_course(&self, course: CourseId, capacity: u32) -> Result<(), RegistrarError> {
        let section = self.course_lock(course);
        let guard = section.lock();

        self.ledger.open_course(course, capacity)?;
        let mut outbox = Outbox::default();
        outbox.audits.push(build_audit_event(
            None,
            course,
            "open",
            Some(format!("capacity {capacity}")),
        ));
        tracing::info!(%course, capacity, "course opened");

        drop(guard);
        self.flush(outbox);
        Ok(())
    }

    /// Register a student: a seat if one is open, the waiting line
    /// otherwise.
    ///
    /// The vacancy check and the resulting mutation run as one atomic unit
    /// under the course lock; no other register/drop/advance for the same
    /// course can interleave between them.
    pub fn register(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<EnrollmentOutcome, RegistrarError> {
        let section = self.course_lock(course);
        let guard = section.lock();

        if self.ledger.is_enrolled(course, student)? {
            return Err(RegistrarError::AlreadyEnrolled { student, course });
        }
        if let Some(position) = self.waitlist.position_of(course, student)? {
            return Err(RegistrarError::AlreadyWaiting {
                student,
                course,
                position,
            });
        }

        let mut outbox = Outbox::default();
        let outcome = if self.ledger.has_vacancy(course)? {
            self.seat(student, course)?;
            outbox
                .events
                .push(EnrollmentEvent::EnrollmentSucceeded { student, course });
            outbox
                .audits
                .push(build_audit_event(Some(student), course, "register", None));
            tracing::info!(%student, %course, "student enrolled");
            EnrollmentOutcome::Enrolled
        } else {
            let position = self.waitlist.append(course, student, now_ms())?;
            outbox.events.push(EnrollmentEvent::Waitlisted {
                student,
                course,
                position,
            });
            outbox.audits.push(build_audit_event(
                Some(student),
                course,
                "waitlist",
                Some(format!("position {position}")),
            ));
            tracing::info!(%student, %course, position, "course full, student waitlisted");
            EnrollmentOutcome::Waitlisted { position }
        };

        drop(guard);
        self.flush(outbox);
        Ok(outcome)
    }

    /// Drop a seated student and fill the vacated seat from the head of
    /// the line before releasing the course lock.
    pub fn drop_enrollment(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<(), RegistrarError> {
        let section = self.course_lock(course);
        let guard = section.lock();

        self.ledger.remove_enrollment(course, student)?;
        Self::defensive(self.ledger.decrement_occupied(course))?;
        tracing::info!(%student, %course, "enrollment dropped");

        let mut outbox = Outbox::default();
        outbox
            .audits
            .push(build_audit_event(Some(student), course, "drop", None));
        self.advance_locked(course, &mut outbox)?;

        drop(guard);
        self.flush(outbox);
        Ok(())
    }

    /// Remove a waiting student who no longer wants the seat. Positions
    /// behind them close up; nobody advances (no seat changed hands).
    pub fn withdraw_from_waitlist(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<(), RegistrarError> {
        let section = self.course_lock(course);
        let guard = section.lock();

        let entry = self.waitlist.remove(course, student)?;
        tracing::info!(%student, %course, position = entry.position, "student withdrew from waitlist");

        let mut outbox = Outbox::default();
        outbox.audits.push(build_audit_event(
            Some(student),
            course,
            "withdraw",
            Some(format!("was position {}", entry.position)),
        ));

        drop(guard);
        self.flush(outbox);
        Ok(())
    }

    /// Update a course's capacity, then fill any newly created vacancies
    /// from the line inside the same critical section.
    pub fn set_capacity(
        &self,
        course: CourseId,
        new_capacity: u32,
    ) -> Result<(), RegistrarError> {
        let section = self.course_lock(course);
        let guard = section.lock();

        self.ledger.set_capacity(course, new_capacity)?;
        tracing::info!(%course, new_capacity, "capacity updated");

        let mut outbox = Outbox::default();
        outbox.audits.push(build_audit_event(
            None,
            course,
            "set_capacity",
            Some(format!("capacity {new_capacity}")),
        ));
        self.advance_locked(course, &mut outbox)?;

        drop(guard);
        self.flush(outbox);
        Ok(())
    }

    /// A waiting student's current position, for "my queue position"
    /// views. Read-only; does not take the course lock.
    pub fn position_of(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<Option<u32>, RegistrarError> {
        self.waitlist.position_of(course, student)
    }

    /// Courses whose waitlist has reached `threshold`, for manager views.
    pub fn suggest_high_demand(
        &self,
        threshold: u32,
    ) -> Result<Vec<HighDemandCourse>, RegistrarError> {
        DemandAnalyzer::new(threshold).suggest(&self.waitlist)
    }

    /// Promote head-of-line students while seats remain. Runs inside the
    /// caller's critical section so a concurrently arriving `register`
    /// cannot race the promotion for the same seat. The loop shape handles
    /// capacity jumps of more than one seat.
    fn advance_locked(
        &self,
        course: CourseId,
        outbox: &mut Outbox,
    ) -> Result<(), RegistrarError> {
        while Self::defensive(self.ledger.has_vacancy(course))? {
            let Some(student) = self.waitlist.peek_head(course)? else {
                break;
            };
            Self::defensive(self.ledger.increment_occupied(course))?;
            self.seat_record(student, course)?;
            Self::defensive(self.waitlist.remove_head(course))?;
            outbox
                .events
                .push(EnrollmentEvent::AdvancedFromWaitlist { student, course });
            outbox
                .audits
                .push(build_audit_event(Some(student), course, "advance", None));
            tracing::info!(%student, %course, "advanced from waitlist");
        }
        Ok(())
    }

    /// Take a seat and record the enrollment. Caller holds the course lock
    /// and has verified vacancy.
    fn seat(&self, student: StudentId, course: CourseId) -> Result<(), RegistrarError> {
        Self::defensive(self.ledger.increment_occupied(course))?;
        self.seat_record(student, course)
    }

    fn seat_record(&self, student: StudentId, course: CourseId) -> Result<(), RegistrarError> {
        self.ledger.insert_enrollment(Enrollment {
            student,
            course,
            enrolled_at_ms: now_ms(),
        })
    }

    /// Deliver buffered audit records and notifications. Runs strictly
    /// after the course lock has released; sink failures never propagate
    /// back into capacity state.
    fn flush(&self, outbox: Outbox) {
        if let Some(audit) = &self.audit {
            let mut sink = audit.lock();
            for event in outbox.audits {
                sink.record(event);
            }
        }
        for event in outbox.events {
            self.notifier.notify(event);
            if let EnrollmentEvent::Waitlisted {
                student, course, ..
            } = event
            {
                if let Err(err) = self.waitlist.mark_notified(course, student) {
                    tracing::debug!(error = %err, "waitlist entry gone before notified flag set");
                }
            }
        }
    }

    fn course_lock(&self, course: CourseId) -> Arc<Mutex<()>> {
        let mut table = self.locks.lock();
        Arc::clone(table.entry(course).or_default())
    }

    /// Defensive errors mean the critical section was violated. Log loudly
    /// and fail the request; silent correction could mask a capacity
    /// breach.
    fn defensive<T>(result: Result<T, RegistrarError>) -> Result<T, RegistrarError> {
        if let Err(err) = &result {
            if err.is_defensive() {
                tracing::error!(error = %err, "per-course critical section violated");
            }
        }
        result
    }
}
