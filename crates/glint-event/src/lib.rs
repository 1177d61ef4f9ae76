//! Input-event value type for Glint.
//!
//! This crate defines [`InputEvent`], a small immutable record of a
//! user-input event, together with its runtime type registration and
//! the classification name table its description uses.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  glint-types : TypeId, WindowId, Point, ErrorCode           │
//! │  glint-event : InputEvent, EventKind, TypeRegistry  ◄── HERE│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Pieces
//!
//! | Piece | Role |
//! |-------|------|
//! | [`TypeRegistry`] / [`RuntimeValue`] | one-time type registration, behaviors {copy, equals, describe} |
//! | [`InputEvent`] | the immutable event record and its accessors |
//! | [`EventKind`] | classification codes and the name table |
//! | [`PlatformEvent`] | seam to the externally-owned platform event |
//!
//! # Control Flow
//!
//! A caller registers the type (or just asks for its id, which
//! registers on first use), then constructs an [`InputEvent`] from a
//! wrapped platform event. Everything after that is read-only field
//! access or one of the registered behaviors:
//!
//! ```
//! use std::sync::Arc;
//! use glint_event::platform::testing::StaticEvent;
//! use glint_event::{EventKind, InputEvent, RuntimeValue};
//! use glint_types::{Point, WindowId};
//!
//! let id = InputEvent::type_id();
//! assert_eq!(id, InputEvent::register_type()); // idempotent
//!
//! let platform = Arc::new(StaticEvent::new(
//!     EventKind::LEFT_MOUSE_DOWN,
//!     WindowId(42),
//!     Point::new(10.5, 20.25),
//! ));
//! let event = InputEvent::from_platform(platform);
//!
//! let description = InputEvent::describe(Some(&event));
//! assert!(description.contains("LeftMouseDown"));
//! ```
//!
//! # Not In Scope
//!
//! No event bus, no delivery, no I/O. This crate defines one value
//! type; producing and routing events belongs to the layers around
//! it.

mod error;
mod event;
mod kind;
pub mod platform;
pub mod runtime;

pub use error::EventError;
pub use event::{
    kind_of, location_of, platform_event_of, timestamp_of, window_id_of, InputEvent,
};
pub use kind::EventKind;
pub use platform::{EventField, PlatformEvent};
pub use runtime::{RuntimeValue, TypeDescriptor, TypeRegistry};

/// Fixture constructors re-exported for integration tests.
pub use event::testing;

// Re-export from glint_types for convenience
pub use glint_types::{AbsoluteTime, Point, TypeId, WindowId};
