//! Registration and end-to-end behavior across the public API.

use std::sync::Arc;
use std::thread;

use glint_event::platform::testing::StaticEvent;
use glint_event::{EventKind, InputEvent, RuntimeValue, TypeRegistry};
use glint_types::{Point, WindowId};

// ── Registration ─────────────────────────────────────────────

#[test]
fn registration_is_idempotent() {
    let first = InputEvent::register_type();
    for _ in 0..100 {
        assert_eq!(InputEvent::register_type(), first);
        assert_eq!(InputEvent::type_id(), first);
    }
}

#[test]
fn registration_is_exactly_once_across_threads() {
    let ids: Vec<_> = (0..16)
        .map(|_| thread::spawn(InputEvent::register_type))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("registration thread panicked"))
        .collect();

    let first = ids[0];
    assert!(ids.iter().all(|id| *id == first));

    // Exactly one descriptor installed under the InputEvent name.
    assert_eq!(TypeRegistry::global().name_of(first), Some("InputEvent"));
}

#[test]
fn registry_reports_installed_descriptors() {
    let registry = TypeRegistry::global();
    let before = registry.len();
    InputEvent::register_type();
    assert!(!registry.is_empty());
    // At least the InputEvent descriptor, installed at most once.
    assert!(registry.len() >= 1);
    assert!(registry.len() <= before + 1);
}

#[test]
fn type_id_is_stable_and_nonzero() {
    let id = InputEvent::type_id();
    assert_ne!(id.raw(), 0); // 0 is the "not a type" value
    assert_eq!(id, InputEvent::type_id());
}

// ── End-to-end scenario ──────────────────────────────────────

#[test]
fn left_mouse_down_round_trip() {
    let platform = Arc::new(StaticEvent::new(
        EventKind::LEFT_MOUSE_DOWN,
        WindowId(42),
        Point::new(10.5, 20.25),
    ));
    let event = InputEvent::from_platform(platform);

    assert_eq!(event.kind(), EventKind::LEFT_MOUSE_DOWN);
    assert_eq!(event.kind().code(), 1);
    assert_eq!(event.window_id(), WindowId(42));
    assert_eq!(event.location_in_window(), Point::new(10.5, 20.25));
    assert_eq!(event.timestamp(), 0.0);

    let description = InputEvent::describe(Some(&event));
    assert!(description.contains("LeftMouseDown"), "got: {description}");
    assert!(
        description.contains("10.500000, 20.250000"),
        "got: {description}"
    );

    let copy = InputEvent::copy_value(Some(&event)).expect("copy of a live event");
    assert_eq!(copy, event);
    assert!(Arc::ptr_eq(copy.platform_event(), event.platform_event()));
}

#[test]
fn every_table_name_appears_in_descriptions() {
    for (kind, name) in [
        (EventKind::LEFT_MOUSE_DOWN, "LeftMouseDown"),
        (EventKind::LEFT_MOUSE_UP, "LeftMouseUp"),
        (EventKind::RIGHT_MOUSE_DOWN, "RightMouseDown"),
        (EventKind::RIGHT_MOUSE_UP, "RightMouseUp"),
        (EventKind::MOUSE_MOVED, "MouseMoved"),
        (EventKind::LEFT_MOUSE_DRAGGED, "LeftMouseDragged"),
        (EventKind::RIGHT_MOUSE_DRAGGED, "RightMouseDragged"),
        (EventKind::KEY_DOWN, "KeyDown"),
        (EventKind::KEY_UP, "KeyUp"),
        (EventKind::FLAGS_CHANGED, "FlagsChanged"),
        (EventKind::SCROLL_WHEEL, "ScrollWheel"),
        (EventKind::OTHER_MOUSE_DOWN, "OtherMouseDown"),
        (EventKind::OTHER_MOUSE_UP, "OtherMouseUp"),
        (EventKind::OTHER_MOUSE_DRAGGED, "OtherMouseDragged"),
    ] {
        let platform = Arc::new(StaticEvent::new(kind, WindowId::NONE, Point::ZERO));
        let event = InputEvent::from_platform(platform);
        let description = InputEvent::describe(Some(&event));
        assert!(description.contains(name), "got: {description}");
    }
}

#[test]
fn unlisted_code_describes_without_panicking() {
    let event = glint_event::testing::event_with(
        EventKind(31),
        Point::new(1.0, 2.0),
        0.0,
        WindowId(1),
    );
    let description = InputEvent::describe(Some(&event));
    assert!(description.contains("unknown"), "got: {description}");
    assert!(description.contains("1.000000, 2.000000"), "got: {description}");
}
