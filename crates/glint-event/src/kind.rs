//! Event classification codes and their name table.
//!
//! [`EventKind`] wraps the raw integer classification code the window
//! system attaches to every input event. The codes form a closed set,
//! but an event stores whatever code its platform event reported, so
//! the wrapper accepts any value verbatim and only name lookup and
//! validation consult the table.
//!
//! # Name Table
//!
//! The table is written once as `(constant, display name, code,
//! index)` rows and expanded twice: into a parallel array of names
//! and into a parallel array of `(code, index)` pairs. Lookup is a
//! linear scan over the pairs. The codes are few and sparse (they
//! neither start at zero nor pack densely), so a scan avoids a second
//! indirection table; description formatting is not a hot path.

use crate::error::EventError;
use serde::{Deserialize, Serialize};

/// Integer classification code for an input event.
///
/// # Known Codes
///
/// | Name | Code |
/// |------|------|
/// | `LeftMouseDown` | 1 |
/// | `LeftMouseUp` | 2 |
/// | `RightMouseDown` | 3 |
/// | `RightMouseUp` | 4 |
/// | `MouseMoved` | 5 |
/// | `LeftMouseDragged` | 6 |
/// | `RightMouseDragged` | 7 |
/// | `KeyDown` | 10 |
/// | `KeyUp` | 11 |
/// | `FlagsChanged` | 12 |
/// | `ScrollWheel` | 22 |
/// | `OtherMouseDown` | 25 |
/// | `OtherMouseUp` | 26 |
/// | `OtherMouseDragged` | 27 |
///
/// # Example
///
/// ```
/// use glint_event::EventKind;
///
/// assert_eq!(EventKind::LEFT_MOUSE_DOWN.code(), 1);
/// assert_eq!(EventKind::LEFT_MOUSE_DOWN.name(), Some("LeftMouseDown"));
///
/// // Codes outside the table are stored verbatim but have no name.
/// let odd = EventKind(999);
/// assert_eq!(odd.name(), None);
/// assert_eq!(odd.to_string(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventKind(pub u32);

/// Expands the classification table into the kind constants, the
/// name array, and the `(code, index)` scan array.
macro_rules! event_kind_table {
    ($(($konst:ident, $name:literal, $code:literal, $index:literal),)+) => {
        impl EventKind {
            $(
                #[doc = concat!("The `", $name, "` classification (code ", stringify!($code), ").")]
                pub const $konst: EventKind = EventKind($code);
            )+
        }

        /// Display names, indexed by table position.
        const KIND_NAMES: &[&str] = &[$($name),+];

        /// `(code, index)` pairs scanned by [`EventKind::name`].
        const KIND_CODES: &[(u32, usize)] = &[$(($code, $index)),+];
    };
}

event_kind_table! {
    (LEFT_MOUSE_DOWN, "LeftMouseDown", 1, 0),
    (LEFT_MOUSE_UP, "LeftMouseUp", 2, 1),
    (RIGHT_MOUSE_DOWN, "RightMouseDown", 3, 2),
    (RIGHT_MOUSE_UP, "RightMouseUp", 4, 3),
    (MOUSE_MOVED, "MouseMoved", 5, 4),
    (LEFT_MOUSE_DRAGGED, "LeftMouseDragged", 6, 5),
    (RIGHT_MOUSE_DRAGGED, "RightMouseDragged", 7, 6),
    (KEY_DOWN, "KeyDown", 10, 7),
    (KEY_UP, "KeyUp", 11, 8),
    (FLAGS_CHANGED, "FlagsChanged", 12, 9),
    (SCROLL_WHEEL, "ScrollWheel", 22, 10),
    (OTHER_MOUSE_DOWN, "OtherMouseDown", 25, 11),
    (OTHER_MOUSE_UP, "OtherMouseUp", 26, 12),
    (OTHER_MOUSE_DRAGGED, "OtherMouseDragged", 27, 13),
}

impl EventKind {
    /// Sentinel returned by accessors handed a null event.
    ///
    /// Outside the valid code range, so it can never collide with a
    /// table entry.
    pub const INVALID: EventKind = EventKind(u32::MAX);

    /// Returns the raw classification code.
    #[must_use]
    pub fn code(&self) -> u32 {
        self.0
    }

    /// Returns the registered display name, or `None` if the code is
    /// not in the table.
    ///
    /// # Example
    ///
    /// ```
    /// use glint_event::EventKind;
    ///
    /// assert_eq!(EventKind::KEY_DOWN.name(), Some("KeyDown"));
    /// assert_eq!(EventKind(999).name(), None);
    /// assert_eq!(EventKind::INVALID.name(), None);
    /// ```
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        KIND_CODES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|&(_, index)| KIND_NAMES[index])
    }

    /// Returns `true` if the code is present in the table.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.name().is_some()
    }

    /// Validates a raw code against the closed table.
    ///
    /// Use this when a code comes from outside the platform seam and
    /// membership should be enforced. Events themselves store any
    /// code verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownKind`] for codes not in the table.
    ///
    /// # Example
    ///
    /// ```
    /// use glint_event::{EventError, EventKind};
    ///
    /// assert_eq!(EventKind::try_from_code(1), Ok(EventKind::LEFT_MOUSE_DOWN));
    /// assert_eq!(EventKind::try_from_code(999), Err(EventError::UnknownKind(999)));
    /// ```
    pub fn try_from_code(code: u32) -> Result<EventKind, EventError> {
        let kind = EventKind(code);
        if kind.is_known() {
            Ok(kind)
        } else {
            Err(EventError::UnknownKind(code))
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().unwrap_or("unknown"))
    }
}
