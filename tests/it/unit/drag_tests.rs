//! Unit tests for the drag controller.

use crate::helpers::{Fired, at, recorded_drag};
use humanpdf::{DragController, GestureConfig, Position, PointerCapture, PointerSample, Size};

#[test]
fn test_drag_reports_live_and_committed_positions() {
    let (mut drag, log, _) = recorded_drag(10.0, 20.0);

    assert!(drag.begin(at(0.0, 0.0)));
    drag.update(at(5.0, 5.0));
    drag.update(at(40.0, -10.0));
    let committed = drag.end();

    assert_eq!(committed, Some(Position::new(50.0, 10.0)));
    assert_eq!(
        log.events(),
        vec![
            Fired::DragMove(Position::new(15.0, 25.0)),
            Fired::DragMove(Position::new(50.0, 10.0)),
            Fired::DragEnd(Position::new(50.0, 10.0)),
        ]
    );
}

#[test]
fn test_drag_is_unclamped() {
    let (mut drag, _, _) = recorded_drag(0.0, 0.0);
    drag.begin(at(0.0, 0.0));
    assert_eq!(drag.update(at(-500.0, -500.0)), Some(Position::new(-500.0, -500.0)));
}

#[test]
fn test_replaying_same_pointer_is_idempotent() {
    let (mut drag, _, _) = recorded_drag(0.0, 0.0);
    drag.begin(at(3.0, 3.0));
    let first = drag.update(at(17.0, 9.0));
    let second = drag.update(at(17.0, 9.0));
    assert_eq!(first, second);
}

#[test]
fn test_disabled_drag_changes_nothing() {
    let config = GestureConfig::new(Position::new(5.0, 5.0), Size::new(50.0, 50.0)).with_disabled(true);
    let capture = PointerCapture::new();
    let mut drag = DragController::from_config(&config, capture.clone());

    assert!(!drag.begin(at(0.0, 0.0)));
    assert_eq!(drag.update(at(100.0, 100.0)), None);
    assert_eq!(drag.end(), None);
    assert_eq!(drag.position(), Position::new(5.0, 5.0));
    assert_eq!(capture.active_subscriptions(), 0);
}

#[test]
fn test_reentrant_begin_keeps_first_session() {
    let (mut drag, _, capture) = recorded_drag(0.0, 0.0);
    assert!(drag.begin(at(0.0, 0.0)));
    assert!(!drag.begin(at(50.0, 50.0)));
    assert_eq!(capture.active_subscriptions(), 1);

    // Still measured against the first origin
    assert_eq!(drag.update(at(10.0, 0.0)), Some(Position::new(10.0, 0.0)));
}

#[test]
fn test_second_touch_does_not_perturb_drag() {
    let (mut drag, log, capture) = recorded_drag(0.0, 0.0);
    assert!(drag.begin(PointerSample::touch(1, 10.0, 10.0)));
    drag.update(PointerSample::touch(1, 20.0, 10.0));

    // Second finger lands and moves
    assert!(!drag.begin(PointerSample::touch(2, 200.0, 200.0)));
    assert_eq!(drag.update(PointerSample::touch(2, 300.0, 300.0)), None);
    assert_eq!(drag.release(PointerSample::touch(2, 300.0, 300.0)), None);
    assert!(drag.is_active());
    assert_eq!(capture.active_subscriptions(), 1);

    let committed = drag.release(PointerSample::touch(1, 25.0, 10.0));
    assert_eq!(committed, Some(Position::new(15.0, 0.0)));
    assert_eq!(log.last(), Some(Fired::DragEnd(Position::new(15.0, 0.0))));
    assert_eq!(capture.active_subscriptions(), 0);
}

#[test]
fn test_unmeasurable_sample_is_skipped() {
    let (mut drag, log, _) = recorded_drag(0.0, 0.0);
    drag.begin(at(0.0, 0.0));
    drag.update(at(4.0, 4.0));

    assert_eq!(drag.update(at(f32::INFINITY, 4.0)), None);
    assert_eq!(drag.update(at(1.0e9, 4.0)), None);
    assert_eq!(drag.position(), Position::new(4.0, 4.0));
    assert_eq!(log.len(), 1);
}

#[test]
fn test_cancel_commits_last_valid_position() {
    let (mut drag, log, capture) = recorded_drag(0.0, 0.0);
    drag.begin(at(0.0, 0.0));
    drag.update(at(8.0, 2.0));

    assert_eq!(drag.cancel(), Some(Position::new(8.0, 2.0)));
    assert_eq!(log.last(), Some(Fired::DragEnd(Position::new(8.0, 2.0))));
    assert_eq!(capture.active_subscriptions(), 0);
    assert_eq!(drag.cancel(), None);
}

#[test]
fn test_each_gesture_starts_from_fresh_snapshot() {
    let (mut drag, _, _) = recorded_drag(0.0, 0.0);
    drag.begin(at(0.0, 0.0));
    drag.update(at(10.0, 10.0));
    drag.end();

    drag.set_position(Position::new(100.0, 100.0));
    drag.begin(at(50.0, 50.0));
    assert_eq!(drag.update(at(51.0, 52.0)), Some(Position::new(101.0, 102.0)));
}

#[test]
fn test_dropping_controller_releases_capture() {
    let (mut drag, _, capture) = recorded_drag(0.0, 0.0);
    drag.begin(at(0.0, 0.0));
    assert!(capture.is_captured());

    drop(drag);
    assert!(!capture.is_captured());
}

#[test]
fn test_non_finite_set_position_keeps_last_good_anchor() {
    let (mut drag, log, _) = recorded_drag(10.0, 20.0);
    drag.set_position(Position::new(f32::NAN, 0.0));
    assert_eq!(drag.position(), Position::new(10.0, 20.0));

    drag.begin(at(0.0, 0.0));
    assert_eq!(drag.update(at(5.0, 5.0)), Some(Position::new(15.0, 25.0)));
    assert_eq!(drag.end(), Some(Position::new(15.0, 25.0)));
    assert_eq!(
        log.events(),
        vec![
            Fired::DragMove(Position::new(15.0, 25.0)),
            Fired::DragEnd(Position::new(15.0, 25.0)),
        ]
    );
}

#[test]
fn test_end_overrides_mid_gesture_resync() {
    let (mut drag, log, _) = recorded_drag(0.0, 0.0);
    drag.begin(at(0.0, 0.0));
    drag.update(at(12.0, 4.0));
    drag.set_position(Position::new(300.0, 300.0));
    assert_eq!(drag.position(), Position::new(300.0, 300.0));

    assert_eq!(drag.end(), Some(Position::new(12.0, 4.0)));
    assert_eq!(drag.position(), Position::new(12.0, 4.0));
    assert_eq!(log.last(), Some(Fired::DragEnd(Position::new(12.0, 4.0))));
}
