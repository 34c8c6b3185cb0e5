//! Tests for shared utilities

use course_registrar::util::clock::now_ms;
use course_registrar::util::ids::{CourseId, StudentId};

#[test]
fn test_ids_display_as_plain_numbers() {
    assert_eq!(StudentId(42).to_string(), "42");
    assert_eq!(CourseId(301).to_string(), "301");
}

#[test]
fn test_ids_convert_from_u64() {
    assert_eq!(StudentId::from(7), StudentId(7));
    assert_eq!(CourseId::from(7), CourseId(7));
}

#[test]
fn test_ids_serialize_transparently() {
    assert_eq!(serde_json::to_string(&StudentId(42)).unwrap(), "42");
    let parsed: CourseId = serde_json::from_str("301").unwrap();
    assert_eq!(parsed, CourseId(301));
}

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(a > 0);
    assert!(b >= a);
}
