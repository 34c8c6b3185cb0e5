//! Route-facing request/response models and thin handlers.
//!
//! The web layer (excluded from this crate) maps these onto its routes;
//! messages are user-facing strings in the wording the administrative UI
//! shows.

use serde::{Deserialize, Serialize};

use crate::core::analyzer::HighDemandCourse;
use crate::core::coordinator::{EnrollmentCoordinator, EnrollmentOutcome};
use crate::core::error::RegistrarError;
use crate::core::ledger::SeatLedger;
use crate::core::notify::NotificationSink;
use crate::core::waitlist::WaitlistStore;
use crate::util::ids::{CourseId, StudentId};

/// Registration payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Student to register.
    pub student: StudentId,
    /// Target course.
    pub course: CourseId,
}

/// Registration result for the route layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// True when the student got a seat directly.
    pub enrolled: bool,
    /// Waitlist position when the course was full.
    pub position: Option<u32>,
    /// User-facing message.
    pub message: String,
}

/// One row of the manager capacity report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Course identifier.
    pub course: CourseId,
    /// Configured seats.
    pub capacity: u32,
    /// Seats held.
    pub occupied: u32,
    /// Seats still open.
    pub available: u32,
    /// Students waiting.
    pub waiting: u32,
    /// True when the waitlist has reached the suggestion threshold.
    pub needs_new_section: bool,
}

/// One enrolled course in a student's overview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnrolledCourse {
    /// Course identifier.
    pub course: CourseId,
    /// When the seat was taken, milliseconds since epoch.
    pub enrolled_at_ms: u128,
}

/// One queued course in a student's overview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueuedCourse {
    /// Course identifier.
    pub course: CourseId,
    /// Current line position.
    pub position: u32,
    /// When the student joined the line, milliseconds since epoch.
    pub joined_at_ms: u128,
}

/// Everything one student is enrolled in or waiting for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentOverview {
    /// Courses where the student holds a seat.
    pub enrolled: Vec<EnrolledCourse>,
    /// Courses where the student is in line.
    pub waiting: Vec<QueuedCourse>,
}

/// Health response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Register a student, mapping the outcome onto the UI contract.
pub fn register<L, W, N>(
    coordinator: &EnrollmentCoordinator<L, W, N>,
    req: RegisterRequest,
) -> Result<RegisterResponse, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    match coordinator.register(req.student, req.course)? {
        EnrollmentOutcome::Enrolled => Ok(RegisterResponse {
            enrolled: true,
            position: None,
            message: "Student enrolled successfully.".into(),
        }),
        EnrollmentOutcome::Waitlisted { position } => Ok(RegisterResponse {
            enrolled: false,
            position: Some(position),
            message: format!(
                "Course is full. Student added to waiting list at position {position}."
            ),
        }),
    }
}

/// Drop a seated student; the head of the line is promoted automatically.
pub fn drop_enrollment<L, W, N>(
    coordinator: &EnrollmentCoordinator<L, W, N>,
    student: StudentId,
    course: CourseId,
) -> Result<String, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    coordinator.drop_enrollment(student, course)?;
    Ok("Enrollment dropped successfully. Next student in queue has been notified.".into())
}

/// Remove a waiting student who no longer wants the seat.
pub fn withdraw<L, W, N>(
    coordinator: &EnrollmentCoordinator<L, W, N>,
    student: StudentId,
    course: CourseId,
) -> Result<String, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    coordinator.withdraw_from_waitlist(student, course)?;
    Ok("Student removed from the waiting list.".into())
}

/// A waiting student's position, for "my queue position" views.
pub fn queue_position<L, W, N>(
    coordinator: &EnrollmentCoordinator<L, W, N>,
    student: StudentId,
    course: CourseId,
) -> Result<Option<u32>, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    coordinator.position_of(student, course)
}

/// Courses whose waitlist has reached `threshold`, for the manager view.
pub fn demand_report<L, W, N>(
    coordinator: &EnrollmentCoordinator<L, W, N>,
    threshold: u32,
) -> Result<Vec<HighDemandCourse>, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    coordinator.suggest_high_demand(threshold)
}

/// Capacity report across every course, one row per course.
pub fn course_summaries<L, W, N>(
    coordinator: &EnrollmentCoordinator<L, W, N>,
    threshold: u32,
) -> Result<Vec<CourseSummary>, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    coordinator
        .ledger()
        .courses()?
        .into_iter()
        .map(|record| {
            let waiting = coordinator.waitlist().len(record.course)?;
            Ok(CourseSummary {
                course: record.course,
                capacity: record.capacity,
                occupied: record.occupied,
                available: record.available(),
                waiting,
                needs_new_section: waiting >= threshold,
            })
        })
        .collect()
}

/// Everything one student is enrolled in or waiting for.
pub fn student_overview<L, W, N>(
    coordinator: &EnrollmentCoordinator<L, W, N>,
    student: StudentId,
) -> Result<StudentOverview, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
{
    let enrolled = coordinator
        .ledger()
        .enrollments_of(student)?
        .into_iter()
        .map(|e| EnrolledCourse {
            course: e.course,
            enrolled_at_ms: e.enrolled_at_ms,
        })
        .collect();
    let waiting = coordinator
        .waitlist()
        .entries_for_student(student)?
        .into_iter()
        .map(|entry| QueuedCourse {
            course: entry.course,
            position: entry.position,
            joined_at_ms: entry.joined_at_ms,
        })
        .collect();
    Ok(StudentOverview { enrolled, waiting })
}

/// Return a health payload.
#[must_use]
pub const fn health() -> Health {
    Health { ok: true }
}
