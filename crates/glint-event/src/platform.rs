//! The seam to the externally-owned platform event.
//!
//! An [`InputEvent`](crate::InputEvent) wraps an opaque event object
//! owned by the window system. This module defines the narrow
//! interface Glint consumes from it: the classification code, integer
//! field extraction, and the window-relative location.
//!
//! The trait deliberately exposes **no timestamp**. The platform
//! event carries no timebase this layer is allowed to read, which is
//! why a constructed event's timestamp stays at the epoch zero
//! default (see [`InputEvent::from_platform`](crate::InputEvent::from_platform)).

use glint_types::Point;
use serde::{Deserialize, Serialize};

use crate::kind::EventKind;

/// Integer fields extractable from a platform event.
///
/// The window system exposes many numbered fields; this layer reads
/// exactly one. The enum is non-exhaustive so adding fields is not a
/// breaking change for matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EventField {
    /// The id of the window under the pointer when the event fired.
    WindowUnderPointer,
}

/// An opaque input event owned by the window system.
///
/// Implementations live outside this crate, next to whatever display
/// server or input backend produced the event. Glint holds them as
/// `Arc<dyn PlatformEvent>`: the wrapping [`InputEvent`](crate::InputEvent)
/// co-owns the platform event for its whole lifetime and releases it
/// on drop.
///
/// All three methods are pure reads over an already-delivered event;
/// none may block.
pub trait PlatformEvent: Send + Sync {
    /// The classification code the window system attached.
    fn kind(&self) -> EventKind;

    /// Extracts an integer field, `0` if the field was not set.
    fn integer_field(&self, field: EventField) -> i64;

    /// The event location relative to the target window's origin.
    fn window_location(&self) -> Point;
}

/// Canned platform events for tests and examples.
pub mod testing {
    use super::*;
    use glint_types::WindowId;

    /// A [`PlatformEvent`] with fixed field values.
    ///
    /// # Example
    ///
    /// ```
    /// use glint_event::platform::testing::StaticEvent;
    /// use glint_event::platform::{EventField, PlatformEvent};
    /// use glint_event::EventKind;
    /// use glint_types::{Point, WindowId};
    ///
    /// let evt = StaticEvent::new(EventKind::LEFT_MOUSE_DOWN, WindowId(42), Point::new(10.5, 20.25));
    /// assert_eq!(evt.kind(), EventKind::LEFT_MOUSE_DOWN);
    /// assert_eq!(evt.integer_field(EventField::WindowUnderPointer), 42);
    /// ```
    #[derive(Debug, Clone)]
    pub struct StaticEvent {
        kind: EventKind,
        window: WindowId,
        location: Point,
    }

    impl StaticEvent {
        /// Creates an event reporting the given fixed values.
        #[must_use]
        pub fn new(kind: EventKind, window: WindowId, location: Point) -> Self {
            Self {
                kind,
                window,
                location,
            }
        }
    }

    impl PlatformEvent for StaticEvent {
        fn kind(&self) -> EventKind {
            self.kind
        }

        fn integer_field(&self, field: EventField) -> i64 {
            match field {
                EventField::WindowUnderPointer => i64::from(self.window.raw()),
            }
        }

        fn window_location(&self) -> Point {
            self.location
        }
    }
}
