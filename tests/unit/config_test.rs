//! Tests for configuration validation

use course_registrar::config::{
    CourseSeed, LedgerBackendConfig, RegistrarConfig, WaitlistBackendConfig,
};

fn valid_config() -> RegistrarConfig {
    RegistrarConfig {
        suggestion_threshold: 5,
        audit_buffer: 256,
        ledger: LedgerBackendConfig::InMemory,
        waitlist: WaitlistBackendConfig::InMemory,
        courses: vec![
            CourseSeed {
                course: 301,
                capacity: 25,
            },
            CourseSeed {
                course: 302,
                capacity: 10,
            },
        ],
    }
}

#[test]
fn test_valid_config_passes() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_default_config_is_valid() {
    let cfg = RegistrarConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.suggestion_threshold, 5);
}

#[test]
fn test_zero_threshold_rejected() {
    let mut cfg = valid_config();
    cfg.suggestion_threshold = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_zero_audit_buffer_rejected() {
    let mut cfg = valid_config();
    cfg.audit_buffer = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_zero_capacity_seed_rejected() {
    let mut cfg = valid_config();
    cfg.courses[0].capacity = 0;
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("301"));
}

#[test]
fn test_duplicate_course_seed_rejected() {
    let mut cfg = valid_config();
    cfg.courses[1].course = 301;
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("more than once"));
}

#[test]
fn test_from_json_str_round_trip() {
    let input = r#"{
        "suggestion_threshold": 5,
        "audit_buffer": 128,
        "ledger": "in_memory",
        "waitlist": "in_memory",
        "courses": [{"course": 301, "capacity": 25}]
    }"#;
    let cfg = RegistrarConfig::from_json_str(input).unwrap();
    assert_eq!(cfg.ledger, LedgerBackendConfig::InMemory);
    assert_eq!(cfg.courses.len(), 1);
    assert_eq!(cfg.courses[0].capacity, 25);
}

#[test]
fn test_from_json_str_rejects_invalid_values() {
    let input = r#"{
        "suggestion_threshold": 0,
        "audit_buffer": 128,
        "ledger": "in_memory",
        "waitlist": "in_memory",
        "courses": []
    }"#;
    assert!(RegistrarConfig::from_json_str(input).is_err());
}

#[test]
fn test_from_json_str_rejects_garbage() {
    assert!(RegistrarConfig::from_json_str("not json").is_err());
}
