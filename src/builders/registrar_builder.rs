//! Builders to construct an enrollment coordinator from configuration.

use crate::config::{LedgerBackendConfig, RegistrarConfig, WaitlistBackendConfig};
use crate::core::audit::{AuditSink, InMemoryAuditSink};
use crate::core::coordinator::EnrollmentCoordinator;
use crate::core::error::RegistrarError;
use crate::core::ledger::SeatLedger;
use crate::core::notify::NotificationSink;
use crate::core::waitlist::WaitlistStore;
use crate::infra::ledger::InMemoryLedger;
use crate::infra::waitlist::InMemoryWaitlist;
use crate::util::ids::CourseId;

/// Build a coordinator from validated configuration using provided
/// factories, then open the seeded courses.
pub fn build_registrar<L, W, N, FL, FW, FN>(
    cfg: &RegistrarConfig,
    mut ledger_factory: FL,
    mut waitlist_factory: FW,
    mut notifier_factory: FN,
    audit: Option<Box<dyn AuditSink>>,
) -> Result<EnrollmentCoordinator<L, W, N>, RegistrarError>
where
    L: SeatLedger,
    W: WaitlistStore,
    N: NotificationSink,
    FL: FnMut(&RegistrarConfig) -> Result<L, RegistrarError>,
    FW: FnMut(&RegistrarConfig) -> Result<W, RegistrarError>,
    FN: FnMut(&RegistrarConfig) -> Result<N, RegistrarError>,
{
    cfg.validate()
        .map_err(|e| RegistrarError::Backend(format!("config invalid: {e}")))?;

    let mut coordinator = EnrollmentCoordinator::new(
        ledger_factory(cfg)?,
        waitlist_factory(cfg)?,
        notifier_factory(cfg)?,
    );
    if let Some(audit) = audit {
        coordinator = coordinator.with_audit(audit);
    }
    for seed in &cfg.courses {
        coordinator.open_course(CourseId(seed.course), seed.capacity)?;
    }
    Ok(coordinator)
}

/// Convenience builder for the in-memory backends, with a bounded
/// in-memory audit trail. Fails if the configuration selects a backend
/// that needs a database client.
pub fn build_in_memory<N>(
    cfg: &RegistrarConfig,
    notifier: N,
) -> Result<EnrollmentCoordinator<InMemoryLedger, InMemoryWaitlist, N>, RegistrarError>
where
    N: NotificationSink,
{
    if cfg.ledger != LedgerBackendConfig::InMemory
        || cfg.waitlist != WaitlistBackendConfig::InMemory
    {
        return Err(RegistrarError::Backend(
            "build_in_memory requires in_memory ledger and waitlist backends".into(),
        ));
    }
    let mut notifier = Some(notifier);
    build_registrar(
        cfg,
        |_| Ok(InMemoryLedger::new()),
        |_| Ok(InMemoryWaitlist::new()),
        |_| {
            notifier
                .take()
                .ok_or_else(|| RegistrarError::Backend("notifier factory called twice".into()))
        },
        Some(Box::new(InMemoryAuditSink::new(cfg.audit_buffer))),
    )
}
