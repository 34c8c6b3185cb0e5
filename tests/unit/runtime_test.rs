//! Tests for the route-facing API surface

use course_registrar::builders::build_in_memory;
use course_registrar::config::{CourseSeed, RegistrarConfig};
use course_registrar::core::{EnrollmentCoordinator, RegistrarError, SeatLedger};
use course_registrar::infra::{InMemoryLedger, InMemoryNotifier, InMemoryWaitlist};
use course_registrar::runtime::api;
use course_registrar::util::ids::{CourseId, StudentId};

type Registrar = EnrollmentCoordinator<InMemoryLedger, InMemoryWaitlist, InMemoryNotifier>;

fn registrar() -> Registrar {
    let cfg = RegistrarConfig {
        courses: vec![
            CourseSeed {
                course: 301,
                capacity: 1,
            },
            CourseSeed {
                course: 302,
                capacity: 2,
            },
        ],
        ..RegistrarConfig::default()
    };
    build_in_memory(&cfg, InMemoryNotifier::new()).unwrap()
}

#[test]
fn test_register_response_messages() {
    let registrar = registrar();

    let seated = api::register(
        &registrar,
        api::RegisterRequest {
            student: StudentId(1),
            course: CourseId(301),
        },
    )
    .unwrap();
    assert!(seated.enrolled);
    assert_eq!(seated.position, None);
    assert_eq!(seated.message, "Student enrolled successfully.");

    let queued = api::register(
        &registrar,
        api::RegisterRequest {
            student: StudentId(2),
            course: CourseId(301),
        },
    )
    .unwrap();
    assert!(!queued.enrolled);
    assert_eq!(queued.position, Some(1));
    assert_eq!(
        queued.message,
        "Course is full. Student added to waiting list at position 1."
    );
}

#[test]
fn test_queue_position_and_withdraw() {
    let registrar = registrar();
    registrar.register(StudentId(1), CourseId(301)).unwrap();
    registrar.register(StudentId(2), CourseId(301)).unwrap();

    assert_eq!(
        api::queue_position(&registrar, StudentId(2), CourseId(301)).unwrap(),
        Some(1)
    );
    assert_eq!(
        api::queue_position(&registrar, StudentId(1), CourseId(301)).unwrap(),
        None
    );

    api::withdraw(&registrar, StudentId(2), CourseId(301)).unwrap();
    assert_eq!(
        api::queue_position(&registrar, StudentId(2), CourseId(301)).unwrap(),
        None
    );
}

#[test]
fn test_drop_promotes_and_reports() {
    let registrar = registrar();
    registrar.register(StudentId(1), CourseId(301)).unwrap();
    registrar.register(StudentId(2), CourseId(301)).unwrap();

    let message = api::drop_enrollment(&registrar, StudentId(1), CourseId(301)).unwrap();
    assert!(message.contains("dropped"));
    assert!(registrar
        .ledger()
        .is_enrolled(CourseId(301), StudentId(2))
        .unwrap());
}

#[test]
fn test_course_summaries_flag_high_demand() {
    let registrar = registrar();
    registrar.register(StudentId(1), CourseId(301)).unwrap();
    for id in 2..=6 {
        registrar.register(StudentId(id), CourseId(301)).unwrap();
    }

    let summaries = api::course_summaries(&registrar, 5).unwrap();
    assert_eq!(summaries.len(), 2);

    let crowded = summaries
        .iter()
        .find(|s| s.course == CourseId(301))
        .unwrap();
    assert_eq!(crowded.capacity, 1);
    assert_eq!(crowded.occupied, 1);
    assert_eq!(crowded.available, 0);
    assert_eq!(crowded.waiting, 5);
    assert!(crowded.needs_new_section);

    let quiet = summaries
        .iter()
        .find(|s| s.course == CourseId(302))
        .unwrap();
    assert_eq!(quiet.waiting, 0);
    assert!(!quiet.needs_new_section);

    let report = api::demand_report(&registrar, 5).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].course, CourseId(301));
    assert_eq!(report[0].waiting, 5);
}

#[test]
fn test_student_overview_spans_courses() {
    let registrar = registrar();
    registrar.register(StudentId(1), CourseId(301)).unwrap();
    registrar.register(StudentId(2), CourseId(301)).unwrap();
    registrar.register(StudentId(2), CourseId(302)).unwrap();

    let overview = api::student_overview(&registrar, StudentId(2)).unwrap();
    assert_eq!(overview.enrolled.len(), 1);
    assert_eq!(overview.enrolled[0].course, CourseId(302));
    assert_eq!(overview.waiting.len(), 1);
    assert_eq!(overview.waiting[0].course, CourseId(301));
    assert_eq!(overview.waiting[0].position, 1);
}

#[test]
fn test_errors_pass_through_for_the_route_layer() {
    let registrar = registrar();
    assert!(matches!(
        api::register(
            &registrar,
            api::RegisterRequest {
                student: StudentId(1),
                course: CourseId(999),
            },
        ),
        Err(RegistrarError::CourseNotFound(_))
    ));
}

#[test]
fn test_health() {
    assert!(api::health().ok);
}
