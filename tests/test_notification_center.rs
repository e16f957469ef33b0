// ABOUTME: Tests for the notification center's ordering, expiry, and dismissal guarantees

use classroom_notify::config::NotificationConfig;
use classroom_notify::notification::{NotificationCenter, NotificationKind, NotifyError};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;

fn center_with_default(duration_ms: u64) -> NotificationCenter {
    NotificationCenter::new(&NotificationConfig {
        default_duration_ms: duration_ms,
    })
    .unwrap()
}

fn messages(center: &NotificationCenter) -> Vec<String> {
    center.snapshot().into_iter().map(|n| n.message).collect()
}

#[tokio::test(start_paused = true)]
async fn test_enqueue_sequence_keeps_insertion_order_and_unique_ids() {
    let center = center_with_default(3000);

    let mut ids = Vec::new();
    for i in 0..20 {
        ids.push(
            center
                .enqueue(format!("message {}", i), NotificationKind::Info, Duration::ZERO)
                .unwrap(),
        );
    }

    let snapshot = center.snapshot();
    assert_eq!(snapshot.len(), 20);
    assert_eq!(snapshot.iter().map(|n| n.id).collect::<Vec<_>>(), ids);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 20);
    assert_eq!(snapshot[0].message, "message 0");
    assert_eq!(snapshot[19].message, "message 19");
}

#[tokio::test(start_paused = true)]
async fn test_saved_scenario_expires_after_duration() {
    let center = center_with_default(3000);

    let id = center
        .enqueue("Saved", NotificationKind::Success, Duration::from_millis(1000))
        .unwrap();

    let snapshot = center.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, id);
    assert_eq!(snapshot[0].message, "Saved");
    assert_eq!(snapshot[0].kind, NotificationKind::Success);

    sleep(Duration::from_millis(1001)).await;
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_timed_notification_present_before_and_absent_after_deadline() {
    let center = center_with_default(3000);
    let id = center
        .enqueue("Quiz submitted", NotificationKind::Success, Duration::from_millis(500))
        .unwrap();

    sleep(Duration::from_millis(499)).await;
    assert!(center.contains(id));

    sleep(Duration::from_millis(2)).await;
    assert!(!center.contains(id));
}

#[tokio::test(start_paused = true)]
async fn test_zero_duration_persists_until_dismissed() {
    let center = center_with_default(3000);
    let id = center
        .enqueue("Exam moved", NotificationKind::Info, Duration::ZERO)
        .unwrap();

    sleep(Duration::from_secs(24 * 60 * 60)).await;
    assert!(center.contains(id));

    center.dismiss(id);
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_duration_beyond_clock_range_is_accepted_and_stays() {
    let center = center_with_default(3000);

    let id = center
        .enqueue("Course archived", NotificationKind::Info, Duration::MAX)
        .unwrap();

    sleep(Duration::from_secs(365 * 24 * 60 * 60)).await;
    assert!(center.contains(id));

    center.dismiss(id);
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_preserves_remaining_order() {
    let center = center_with_default(3000);
    let a = center.enqueue("A", NotificationKind::Info, Duration::ZERO).unwrap();
    let _b = center.enqueue("B", NotificationKind::Error, Duration::ZERO).unwrap();

    assert_eq!(messages(&center), vec!["A", "B"]);

    center.dismiss(a);
    assert_eq!(messages(&center), vec!["B"]);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_twice_is_same_as_once() {
    let center = center_with_default(3000);
    let a = center.enqueue("A", NotificationKind::Info, Duration::ZERO).unwrap();
    center.enqueue("B", NotificationKind::Info, Duration::ZERO).unwrap();

    center.dismiss(a);
    let after_once = messages(&center);
    center.dismiss(a);

    assert_eq!(messages(&center), after_once);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_unknown_id_on_empty_center_is_noop() {
    let other = center_with_default(3000);
    let foreign = other.enqueue("elsewhere", NotificationKind::Info, Duration::ZERO).unwrap();

    let center = center_with_default(3000);
    center.dismiss(foreign);

    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_before_expiry_then_timer_is_harmless() {
    let center = center_with_default(3000);
    let timed = center
        .enqueue("Uploading", NotificationKind::Info, Duration::from_millis(200))
        .unwrap();
    center.dismiss(timed);

    let later = center
        .enqueue("Upload finished", NotificationKind::Success, Duration::ZERO)
        .unwrap();
    sleep(Duration::from_millis(500)).await;

    assert_eq!(center.snapshot().iter().map(|n| n.id).collect::<Vec<_>>(), vec![later]);
}

#[tokio::test(start_paused = true)]
async fn test_ids_are_not_reused_after_removal() {
    let center = center_with_default(3000);
    let first = center.enqueue("first", NotificationKind::Info, Duration::ZERO).unwrap();
    center.dismiss(first);
    let second = center.enqueue("second", NotificationKind::Info, Duration::ZERO).unwrap();

    assert_ne!(first, second);
    assert!(second > first);
}

#[tokio::test(start_paused = true)]
async fn test_empty_message_is_rejected() {
    let center = center_with_default(3000);

    assert_eq!(
        center.enqueue("", NotificationKind::Success, Duration::ZERO),
        Err(NotifyError::EmptyMessage)
    );
    assert_eq!(center.notify_error("   "), Err(NotifyError::EmptyMessage));
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_shortcuts_use_configured_default_duration() {
    let center = center_with_default(250);
    let notifier = center.notifier();

    notifier.notify_success("Saved").unwrap();
    notifier.notify_error("Upload failed").unwrap();
    notifier.notify_info("New forum reply").unwrap();

    let kinds: Vec<_> = center.snapshot().into_iter().map(|n| (n.kind, n.duration)).collect();
    assert_eq!(
        kinds,
        vec![
            (NotificationKind::Success, Duration::from_millis(250)),
            (NotificationKind::Error, Duration::from_millis(250)),
            (NotificationKind::Info, Duration::from_millis(250)),
        ]
    );

    sleep(Duration::from_millis(251)).await;
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_default_duration_is_three_seconds() {
    let center = NotificationCenter::new(&NotificationConfig::default()).unwrap();
    assert_eq!(center.default_duration(), Duration::from_millis(3000));

    center.notify_success("Saved").unwrap();
    sleep(Duration::from_millis(2999)).await;
    assert_eq!(center.len(), 1);
    sleep(Duration::from_millis(2)).await;
    assert_eq!(center.len(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_clear_removes_everything_and_cancels_timers() {
    let center = center_with_default(1000);
    center.notify_info("one").unwrap();
    center.enqueue("two", NotificationKind::Error, Duration::ZERO).unwrap();

    center.clear();
    assert!(center.is_empty());

    sleep(Duration::from_millis(1500)).await;
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_notifier_fails_after_shutdown() {
    let center = center_with_default(3000);
    let notifier = center.notifier();
    let id = notifier.notify_info("before shutdown").unwrap();
    assert!(!notifier.is_closed());

    center.shutdown();

    assert!(notifier.is_closed());
    assert_eq!(notifier.notify_success("after"), Err(NotifyError::CenterClosed));
    assert_eq!(
        notifier.enqueue("after", NotificationKind::Info, Duration::ZERO),
        Err(NotifyError::CenterClosed)
    );
    notifier.dismiss(id);
    notifier.clear();
    assert!(notifier.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_redraw_revision_tracks_changes() {
    let center = center_with_default(3000);
    let mut redraw = center.subscribe();
    assert!(!redraw.has_changed().unwrap());

    let id = center.enqueue("A", NotificationKind::Info, Duration::ZERO).unwrap();
    assert!(redraw.has_changed().unwrap());
    redraw.borrow_and_update();

    center.dismiss(id);
    assert!(redraw.has_changed().unwrap());
    redraw.borrow_and_update();

    center.dismiss(id);
    assert!(!redraw.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_expiry_triggers_redraw() {
    let center = center_with_default(100);
    let mut redraw = center.subscribe();
    center.notify_info("Reminder").unwrap();
    redraw.borrow_and_update();

    sleep(Duration::from_millis(101)).await;
    assert!(redraw.has_changed().unwrap());
}

#[test]
fn test_center_requires_runtime() {
    let result = NotificationCenter::new(&NotificationConfig::default());
    assert_eq!(result.err(), Some(NotifyError::NoRuntime));
}
