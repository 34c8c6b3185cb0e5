//! Tests for notification sinks

use std::time::Duration;

use async_trait::async_trait;

use course_registrar::core::error::AppResult;
use course_registrar::core::{EnrollmentEvent, NotificationSink};
use course_registrar::infra::notify::{NotificationDelivery, SpawnedNotifier};
use course_registrar::infra::{InMemoryNotifier, TracingNotifier};
use course_registrar::runtime::TokioSpawner;
use course_registrar::util::ids::{CourseId, StudentId};

fn sample_events() -> [EnrollmentEvent; 3] {
    [
        EnrollmentEvent::EnrollmentSucceeded {
            student: StudentId(1),
            course: CourseId(301),
        },
        EnrollmentEvent::Waitlisted {
            student: StudentId(2),
            course: CourseId(301),
            position: 1,
        },
        EnrollmentEvent::AdvancedFromWaitlist {
            student: StudentId(2),
            course: CourseId(301),
        },
    ]
}

#[test]
fn test_in_memory_notifier_records_in_order() {
    let notifier = InMemoryNotifier::new();
    for event in sample_events() {
        notifier.notify(event);
    }
    assert_eq!(notifier.events(), sample_events().to_vec());
    assert_eq!(notifier.events_for(StudentId(2)).len(), 2);
    assert_eq!(notifier.events_for(StudentId(9)).len(), 0);
}

#[test]
fn test_event_accessors() {
    let [enrolled, waitlisted, advanced] = sample_events();
    assert_eq!(enrolled.student(), StudentId(1));
    assert_eq!(waitlisted.course(), CourseId(301));
    assert_eq!(enrolled.kind(), "enrollment_succeeded");
    assert_eq!(waitlisted.kind(), "waitlisted");
    assert_eq!(advanced.kind(), "advanced_from_waitlist");
}

#[test]
fn test_events_serialize_with_kind_tag() {
    let json = serde_json::to_string(&sample_events()[1]).unwrap();
    assert!(json.contains(r#""kind":"waitlisted""#));
    assert!(json.contains(r#""position":1"#));
}

#[test]
fn test_tracing_notifier_swallows_everything() {
    let notifier = TracingNotifier::new();
    for event in sample_events() {
        notifier.notify(event);
    }
}

struct ChannelDelivery {
    tx: tokio::sync::mpsc::UnboundedSender<EnrollmentEvent>,
}

#[async_trait]
impl NotificationDelivery for ChannelDelivery {
    async fn deliver(&self, event: EnrollmentEvent) -> AppResult<()> {
        self.tx.send(event)?;
        Ok(())
    }
}

struct FailingDelivery;

#[async_trait]
impl NotificationDelivery for FailingDelivery {
    async fn deliver(&self, _event: EnrollmentEvent) -> AppResult<()> {
        anyhow::bail!("channel unavailable")
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_spawned_notifier_delivers_off_thread() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let sink = SpawnedNotifier::new(ChannelDelivery { tx }, TokioSpawner::current());

    let [event, ..] = sample_events();
    sink.notify(event);

    let delivered = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("delivery timed out")
        .expect("channel closed");
    assert_eq!(delivered, event);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_spawned_notifier_swallows_delivery_failures() {
    let sink = SpawnedNotifier::new(FailingDelivery, TokioSpawner::current());
    // Must not panic or propagate; the failure is logged and dropped.
    sink.notify(sample_events()[0]);
    tokio::time::sleep(Duration::from_millis(50)).await;
}
