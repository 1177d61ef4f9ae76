//! The immutable input-event record.
//!
//! An [`InputEvent`] snapshots the fields this layer cares about from
//! a platform event (classification, window-relative location, target
//! window) and keeps a co-owning reference to the platform event
//! itself for callers that need the rest.
//!
//! # Immutability
//!
//! Every field is fixed at construction. There are no setters; a
//! "changed" event is a new event.
//!
//! # Equality
//!
//! Equality is deliberately identity-light: two events are equal when
//! their {kind, timestamp, window id} agree. Location and the wrapped
//! platform event are **excluded**: two clicks at different
//! coordinates in the same window at the same time are the same
//! event as far as comparison goes.
//!
//! # Copy Policy
//!
//! Copies share the wrapped platform event: [`Clone`] clones the
//! `Arc`, so original and copy co-own one platform event with a
//! correctly counted reference each. No bitwise aliasing.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use glint_event::platform::testing::StaticEvent;
//! use glint_event::{EventKind, InputEvent};
//! use glint_types::{Point, WindowId};
//!
//! let platform = Arc::new(StaticEvent::new(
//!     EventKind::LEFT_MOUSE_DOWN,
//!     WindowId(42),
//!     Point::new(10.5, 20.25),
//! ));
//! let event = InputEvent::from_platform(platform);
//!
//! assert_eq!(event.kind(), EventKind::LEFT_MOUSE_DOWN);
//! assert_eq!(event.window_id(), WindowId(42));
//! assert_eq!(event.location_in_window(), Point::new(10.5, 20.25));
//! assert_eq!(event.timestamp(), 0.0); // no timestamp source on the platform seam
//! ```

use std::sync::Arc;

use glint_types::{AbsoluteTime, Point, WindowId};

use crate::error::EventError;
use crate::kind::EventKind;
use crate::platform::{EventField, PlatformEvent};
use crate::runtime::{RuntimeValue, TypeDescriptor, TypeRegistry};

/// An immutable user-input event.
///
/// See the [module docs](self) for the equality and copy policies.
#[derive(Clone)]
pub struct InputEvent {
    kind: EventKind,
    window_location: Point,
    timestamp: AbsoluteTime,
    window_id: WindowId,
    platform: Arc<dyn PlatformEvent>,
}

impl InputEvent {
    /// Constructs an event from a platform event, taking a co-owning
    /// reference to it.
    ///
    /// Classification, window id (the window under the pointer), and
    /// window-relative location are read from the platform event.
    /// A window-id field outside the `u32` range degrades to
    /// [`WindowId::NONE`]. The timestamp stays at the epoch zero
    /// default: the [`PlatformEvent`] seam exposes no timebase to
    /// read it from.
    #[must_use]
    pub fn from_platform(platform: Arc<dyn PlatformEvent>) -> Self {
        let kind = platform.kind();
        let raw_window = platform.integer_field(EventField::WindowUnderPointer);
        let window_id = WindowId(u32::try_from(raw_window).unwrap_or(WindowId::NONE.raw()));
        let window_location = platform.window_location();
        Self {
            kind,
            window_location,
            timestamp: AbsoluteTime::default(),
            window_id,
            platform,
        }
    }

    /// Null-guarded constructor.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingPlatformEvent`] when no platform
    /// event is supplied; there is nothing meaningful to construct
    /// without one.
    ///
    /// # Example
    ///
    /// ```
    /// use glint_event::{EventError, InputEvent};
    ///
    /// assert_eq!(
    ///     InputEvent::try_from_platform(None).unwrap_err(),
    ///     EventError::MissingPlatformEvent,
    /// );
    /// ```
    pub fn try_from_platform(
        platform: Option<Arc<dyn PlatformEvent>>,
    ) -> Result<Self, EventError> {
        platform
            .map(Self::from_platform)
            .ok_or(EventError::MissingPlatformEvent)
    }

    /// The stored classification code.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The stored window-relative location.
    #[must_use]
    pub fn location_in_window(&self) -> Point {
        self.window_location
    }

    /// The stored timestamp, seconds since the platform epoch.
    ///
    /// Currently always the zero default; see
    /// [`from_platform`](Self::from_platform).
    #[must_use]
    pub fn timestamp(&self) -> AbsoluteTime {
        self.timestamp
    }

    /// The stored target-window id ([`WindowId::NONE`] = unknown).
    #[must_use]
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// The wrapped platform event this record was derived from.
    #[must_use]
    pub fn platform_event(&self) -> &Arc<dyn PlatformEvent> {
        &self.platform
    }
}

/// Equality over {kind, timestamp, window id} only; location and the
/// platform event are excluded by contract.
impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.timestamp == other.timestamp
            && self.window_id == other.window_id
    }
}

impl std::fmt::Debug for InputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputEvent")
            .field("kind", &self.kind)
            .field("window_location", &self.window_location)
            .field("timestamp", &self.timestamp)
            .field("window_id", &self.window_id)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for InputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::describe(Some(self)))
    }
}

impl RuntimeValue for InputEvent {
    const NAME: &'static str = "InputEvent";

    fn register_type() -> glint_types::TypeId {
        static TYPE_ID: std::sync::OnceLock<glint_types::TypeId> = std::sync::OnceLock::new();
        *TYPE_ID
            .get_or_init(|| TypeRegistry::global().register(TypeDescriptor::new(Self::NAME)))
    }

    fn copy_value(value: Option<&Self>) -> Option<Self> {
        // Share-with-retain: the clone holds its own counted
        // reference to the same platform event.
        value.cloned()
    }

    fn equal_values(a: Option<&Self>, b: Option<&Self>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn describe(value: Option<&Self>) -> String {
        let Some(event) = value else {
            return format!("<{} null>", Self::NAME);
        };
        let name = event.kind.name().unwrap_or_else(|| {
            tracing::warn!(
                code = event.kind.code(),
                "describing event with a classification code outside the table"
            );
            "unknown"
        });
        format!(
            "<{} {:p}>{{kind = {}, window_loc = {}}}",
            Self::NAME,
            event as *const Self,
            name,
            event.window_location,
        )
    }
}

/// The stored classification, or [`EventKind::INVALID`] when `event`
/// is `None`.
#[must_use]
pub fn kind_of(event: Option<&InputEvent>) -> EventKind {
    event.map_or(EventKind::INVALID, InputEvent::kind)
}

/// The stored location, or [`Point::ZERO`] when `event` is `None`.
#[must_use]
pub fn location_of(event: Option<&InputEvent>) -> Point {
    event.map_or(Point::ZERO, InputEvent::location_in_window)
}

/// The stored timestamp, or `0.0` when `event` is `None`.
#[must_use]
pub fn timestamp_of(event: Option<&InputEvent>) -> AbsoluteTime {
    event.map_or(0.0, InputEvent::timestamp)
}

/// The stored window id, or [`WindowId::NONE`] when `event` is
/// `None`.
#[must_use]
pub fn window_id_of(event: Option<&InputEvent>) -> WindowId {
    event.map_or(WindowId::NONE, InputEvent::window_id)
}

/// The wrapped platform event, or `None` when `event` is `None`.
///
/// The returned `Arc` is a fresh counted reference; the event keeps
/// its own.
#[must_use]
pub fn platform_event_of(event: Option<&InputEvent>) -> Option<Arc<dyn PlatformEvent>> {
    event.map(|e| Arc::clone(&e.platform))
}

/// Fixture constructors for tests.
///
/// The public constructor cannot populate the timestamp (the platform
/// seam has no source for it), so equality tests that need distinct
/// timestamps build events directly.
pub mod testing {
    use super::*;
    use crate::platform::testing::StaticEvent;

    /// Builds an event with explicit field values, backed by a
    /// [`StaticEvent`] reporting the same kind, window, and location.
    #[must_use]
    pub fn event_with(
        kind: EventKind,
        location: Point,
        timestamp: AbsoluteTime,
        window: WindowId,
    ) -> InputEvent {
        InputEvent {
            kind,
            window_location: location,
            timestamp,
            window_id: window,
            platform: Arc::new(StaticEvent::new(kind, window, location)),
        }
    }
}
