//! Core types for Glint.
//!
//! This crate provides the foundational types shared across the Glint
//! input-event layer.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  glint-types : TypeId, WindowId, Point, ErrorCode  ◄── HERE │
//! │  glint-event : InputEvent, EventKind, TypeRegistry          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design
//!
//! Everything here is a plain value: no I/O, no global state, no
//! async. Identifiers are small newtypes so that a window id can
//! never be confused with a runtime type id at a call site.
//!
//! # Example
//!
//! ```
//! use glint_types::{Point, WindowId};
//!
//! let window = WindowId(42);
//! assert!(!window.is_none());
//!
//! let loc = Point::new(10.5, 20.25);
//! assert_eq!(loc.to_string(), "(10.500000, 20.250000)");
//! ```

mod error;
mod geometry;
mod id;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use geometry::Point;
pub use id::{TypeId, WindowId};

/// Absolute time in seconds since the platform epoch.
///
/// Kept as a raw double rather than a newtype: the value participates
/// in event equality bit-for-bit and carries no behavior of its own.
pub type AbsoluteTime = f64;
