//! Tests for builder modules

use course_registrar::builders::{build_in_memory, build_registrar};
use course_registrar::config::{
    CourseSeed, LedgerBackendConfig, RegistrarConfig, WaitlistBackendConfig,
};
use course_registrar::core::{EnrollmentOutcome, RegistrarError};
use course_registrar::infra::ledger::PostgresLedger;
use course_registrar::infra::waitlist::PostgresWaitlist;
use course_registrar::infra::{InMemoryNotifier, TracingNotifier};
use course_registrar::util::ids::{CourseId, StudentId};

fn in_memory_config() -> RegistrarConfig {
    RegistrarConfig {
        courses: vec![CourseSeed {
            course: 301,
            capacity: 1,
        }],
        ..RegistrarConfig::default()
    }
}

#[test]
fn test_build_in_memory_seeds_courses() {
    let registrar = build_in_memory(&in_memory_config(), InMemoryNotifier::new()).unwrap();

    assert_eq!(
        registrar.register(StudentId(1), CourseId(301)).unwrap(),
        EnrollmentOutcome::Enrolled
    );
    assert_eq!(
        registrar.register(StudentId(2), CourseId(301)).unwrap(),
        EnrollmentOutcome::Waitlisted { position: 1 }
    );
}

#[test]
fn test_build_in_memory_rejects_other_backends() {
    let mut cfg = in_memory_config();
    cfg.ledger = LedgerBackendConfig::Postgres;
    assert!(matches!(
        build_in_memory(&cfg, TracingNotifier::new()),
        Err(RegistrarError::Backend(_))
    ));
}

#[test]
fn test_build_registrar_rejects_invalid_config() {
    let mut cfg = in_memory_config();
    cfg.suggestion_threshold = 0;
    assert!(matches!(
        build_in_memory(&cfg, TracingNotifier::new()),
        Err(RegistrarError::Backend(_))
    ));
}

#[test]
fn test_postgres_backends_fail_seeding_until_wired() {
    let cfg = RegistrarConfig {
        ledger: LedgerBackendConfig::Postgres,
        waitlist: WaitlistBackendConfig::Postgres,
        ..in_memory_config()
    };
    let result = build_registrar(
        &cfg,
        |_| Ok(PostgresLedger::new()),
        |_| Ok(PostgresWaitlist::new()),
        |_| Ok(TracingNotifier::new()),
        None,
    );
    // Seeding the course hits the unwired ledger stub.
    assert!(matches!(result, Err(RegistrarError::Backend(_))));
}

#[test]
fn test_postgres_backends_build_without_seeds() {
    let cfg = RegistrarConfig {
        ledger: LedgerBackendConfig::Postgres,
        waitlist: WaitlistBackendConfig::Postgres,
        courses: Vec::new(),
        ..RegistrarConfig::default()
    };
    let registrar = build_registrar(
        &cfg,
        |_| Ok(PostgresLedger::new()),
        |_| Ok(PostgresWaitlist::new()),
        |_| Ok(TracingNotifier::new()),
        None,
    )
    .unwrap();
    assert!(matches!(
        registrar.register(StudentId(1), CourseId(301)),
        Err(RegistrarError::Backend(_))
    ));
}

#[test]
fn test_postgres_migrations_cover_all_tables() {
    let ledger_sql = PostgresLedger::migrations().concat();
    assert!(ledger_sql.contains("cr_courses"));
    assert!(ledger_sql.contains("cr_enrollments"));
    let waitlist_sql = PostgresWaitlist::migrations().concat();
    assert!(waitlist_sql.contains("cr_waitlist_entries"));
    assert!(waitlist_sql.contains("position"));
}
