//! Trace Replay Integration Tests

use humanpdf::replay::{GestureTrace, TraceEvent};
use humanpdf::{Manipulation, PointerCapture, Position, Size};

const LEFT_HANDLE_TRACE: &str = r#"{
    "config": {
        "initial_position": {"x": 0, "y": 0},
        "initial_size": {"width": 100, "height": 100},
        "min_size": {"width": 20, "height": 20}
    },
    "events": [
        {"type": "down", "x": 0, "y": 50, "handle": "left"},
        {"type": "move", "x": 30, "y": 50},
        {"type": "move", "x": 30, "y": 50},
        {"type": "up", "x": 30, "y": 50}
    ]
}"#;

#[test]
fn test_replay_left_handle_trace() {
    let trace: GestureTrace = serde_json::from_str(LEFT_HANDLE_TRACE).unwrap();
    assert!(trace.resizable);
    assert!(matches!(trace.events[0], TraceEvent::Down { handle: Some(_), .. }));

    let capture = PointerCapture::new();
    let outcomes = trace.replay(capture.clone()).unwrap();

    // Two moves plus the release
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0], outcomes[1]);
    let Manipulation::Resize { update, position } = outcomes[2] else {
        panic!("expected resize outcome");
    };
    assert_eq!(update.size, Size::new(70.0, 100.0));
    assert_eq!(update.position_delta, Position::new(30.0, 0.0));
    assert_eq!(position, Position::new(30.0, 0.0));
    assert_eq!(capture.active_subscriptions(), 0);
}

#[test]
fn test_replay_touch_drag_with_stray_contact() {
    let json = r#"{
        "events": [
            {"type": "down", "x": 10, "y": 10, "pointer": 1, "kind": "touch"},
            {"type": "down", "x": 90, "y": 90, "pointer": 2, "kind": "touch"},
            {"type": "move", "x": 95, "y": 95, "pointer": 2, "kind": "touch"},
            {"type": "move", "x": 20, "y": 15, "pointer": 1, "kind": "touch"},
            {"type": "cancel"}
        ]
    }"#;
    let trace: GestureTrace = serde_json::from_str(json).unwrap();
    let outcomes = trace.replay(PointerCapture::new()).unwrap();

    assert_eq!(
        outcomes,
        vec![
            Manipulation::Drag {
                position: Position::new(10.0, 5.0)
            },
            Manipulation::Drag {
                position: Position::new(10.0, 5.0)
            },
        ]
    );
}

#[test]
fn test_replay_rejects_invalid_config() {
    let json = r#"{
        "config": {"min_size": {"width": 50, "height": 50}, "max_size": {"width": 10, "height": 10}},
        "events": []
    }"#;
    let trace: GestureTrace = serde_json::from_str(json).unwrap();
    assert!(trace.replay(PointerCapture::new()).is_err());
}

#[test]
fn test_replay_teardown_releases_unfinished_gesture() {
    let json = r#"{
        "events": [
            {"type": "down", "x": 0, "y": 0, "handle": "bottomRight"},
            {"type": "move", "x": 5, "y": 5}
        ]
    }"#;
    let trace: GestureTrace = serde_json::from_str(json).unwrap();
    let capture = PointerCapture::new();
    let outcomes = trace.replay(capture.clone()).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(capture.active_subscriptions(), 0);
}
