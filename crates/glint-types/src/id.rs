//! Identifier types for Glint.
//!
//! Both identifiers are thin newtypes over the integers the runtime
//! and the window system already use. They exist so the two can never
//! be swapped at a call site.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a value type registered with the runtime.
///
/// A `TypeId` is handed out by the type registry at registration time
/// and is stable for the lifetime of the process. There is no way to
/// unregister a type, so a `TypeId` never dangles.
///
/// # Example
///
/// ```
/// use glint_types::TypeId;
///
/// let id = TypeId(1);
/// assert_eq!(id.raw(), 1);
/// assert_eq!(id.to_string(), "type:1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u64);

impl TypeId {
    /// Returns the inner identifier value.
    #[must_use]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

// NOTE: TypeId intentionally does NOT implement Default.
// A defaulted TypeId would not correspond to any registered
// descriptor. Obtain one from the registry instead.

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "type:{}", self.0)
    }
}

/// Identifier for a window in the windowing system.
///
/// The value `0` is reserved by the window system to mean "no window"
/// or "unknown"; [`WindowId::NONE`] names it.
///
/// # Example
///
/// ```
/// use glint_types::WindowId;
///
/// let window = WindowId(42);
/// assert!(!window.is_none());
/// assert!(WindowId::NONE.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u32);

impl WindowId {
    /// The "no window / unknown" identifier.
    pub const NONE: WindowId = WindowId(0);

    /// Returns the inner identifier value.
    #[must_use]
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Returns `true` if this is the "no window" identifier.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "win:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_id_display_and_raw() {
        let id = TypeId(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.to_string(), "type:7");
    }

    #[test]
    fn type_id_equality() {
        assert_eq!(TypeId(1), TypeId(1));
        assert_ne!(TypeId(1), TypeId(2));
    }

    #[test]
    fn window_id_none_sentinel() {
        assert!(WindowId::NONE.is_none());
        assert_eq!(WindowId::NONE, WindowId(0));
        assert_eq!(WindowId::default(), WindowId::NONE);
        assert!(!WindowId(42).is_none());
    }

    #[test]
    fn window_id_display() {
        assert_eq!(WindowId(42).to_string(), "win:42");
    }

    #[test]
    fn ids_serialize_transparently_enough() {
        let json = serde_json::to_string(&WindowId(42)).unwrap();
        let back: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WindowId(42));

        let json = serde_json::to_string(&TypeId(3)).unwrap();
        let back: TypeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TypeId(3));
    }
}
