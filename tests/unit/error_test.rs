//! Tests for the error taxonomy

use course_registrar::core::RegistrarError;
use course_registrar::util::ids::{CourseId, StudentId};

#[test]
fn test_recoverable_errors_are_not_defensive() {
    let errors = [
        RegistrarError::CourseNotFound(CourseId(1)),
        RegistrarError::CourseExists(CourseId(1)),
        RegistrarError::ZeroCapacity(CourseId(1)),
        RegistrarError::AlreadyEnrolled {
            student: StudentId(1),
            course: CourseId(1),
        },
        RegistrarError::AlreadyWaiting {
            student: StudentId(1),
            course: CourseId(1),
            position: 3,
        },
        RegistrarError::NotEnrolled {
            student: StudentId(1),
            course: CourseId(1),
        },
        RegistrarError::NotWaiting {
            student: StudentId(1),
            course: CourseId(1),
        },
        RegistrarError::CapacityBelowOccupancy {
            course: CourseId(1),
            capacity: 1,
            occupied: 2,
        },
        RegistrarError::Backend("db down".into()),
    ];
    for err in errors {
        assert!(!err.is_defensive(), "{err} must be recoverable");
    }
}

#[test]
fn test_defensive_errors_are_flagged() {
    assert!(RegistrarError::CapacityExceeded(CourseId(1)).is_defensive());
    assert!(RegistrarError::OccupancyUnderflow(CourseId(1)).is_defensive());
    assert!(RegistrarError::WaitlistEmpty(CourseId(1)).is_defensive());
}

#[test]
fn test_messages_name_the_parties() {
    let err = RegistrarError::AlreadyWaiting {
        student: StudentId(7),
        course: CourseId(301),
        position: 2,
    };
    assert_eq!(
        err.to_string(),
        "student 7 is already waiting for course 301 at position 2"
    );

    let err = RegistrarError::CapacityBelowOccupancy {
        course: CourseId(301),
        capacity: 1,
        occupied: 4,
    };
    assert_eq!(
        err.to_string(),
        "cannot set capacity of course 301 to 1: 4 students are enrolled"
    );
}
