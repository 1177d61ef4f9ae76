//! Event layer errors.
//!
//! All event errors use the `EVENT_` prefix for their codes,
//! implementing [`ErrorCode`] for unified handling across Glint.
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`EventError::MissingPlatformEvent`] | `EVENT_MISSING_PLATFORM_EVENT` | No |
//! | [`EventError::UnknownKind`] | `EVENT_UNKNOWN_KIND` | No |
//!
//! Neither error is recoverable: both describe input that will not
//! change on retry, so the fix belongs in the caller.

use glint_types::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Event layer error.
///
/// # Example
///
/// ```
/// use glint_event::EventError;
/// use glint_types::ErrorCode;
///
/// let err = EventError::MissingPlatformEvent;
/// assert_eq!(err.code(), "EVENT_MISSING_PLATFORM_EVENT");
/// assert!(!err.is_recoverable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum EventError {
    /// No platform event was supplied to the constructor.
    ///
    /// An [`InputEvent`](crate::InputEvent) derives every field from
    /// its wrapped platform event, so there is nothing meaningful to
    /// construct without one.
    #[error("missing platform event")]
    MissingPlatformEvent,

    /// A classification code is not in the closed kind table.
    ///
    /// Returned by [`EventKind::try_from_code`](crate::EventKind::try_from_code)
    /// for callers that want membership enforced. Note that events
    /// themselves store any code verbatim; only validation and name
    /// lookup care about the table.
    #[error("unknown classification code: {0}")]
    UnknownKind(u32),
}

impl ErrorCode for EventError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingPlatformEvent => "EVENT_MISSING_PLATFORM_EVENT",
            Self::UnknownKind(_) => "EVENT_UNKNOWN_KIND",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingPlatformEvent => false,
            Self::UnknownKind(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_types::assert_error_codes;

    /// All variants for exhaustive testing
    fn all_variants() -> Vec<EventError> {
        vec![
            EventError::MissingPlatformEvent,
            EventError::UnknownKind(99),
        ]
    }

    #[test]
    fn all_error_codes_valid() {
        // Ensures ALL variants have correct prefix and format
        assert_error_codes(&all_variants(), "EVENT_");
    }

    #[test]
    fn missing_platform_event() {
        let err = EventError::MissingPlatformEvent;
        assert_eq!(err.code(), "EVENT_MISSING_PLATFORM_EVENT");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("missing platform event"));
    }

    #[test]
    fn unknown_kind() {
        let err = EventError::UnknownKind(99);
        assert_eq!(err.code(), "EVENT_UNKNOWN_KIND");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("99"));
    }
}
