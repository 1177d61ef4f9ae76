//! Unified error interface for Glint.
//!
//! All Glint error types implement [`ErrorCode`] to provide:
//!
//! - **Machine-readable codes**: for programmatic error handling
//! - **Recoverability info**: for retry logic and user feedback
//!
//! # Code Format
//!
//! Error codes are:
//!
//! - **UPPER_SNAKE_CASE**: e.g. `"EVENT_UNKNOWN_KIND"`
//! - **Namespace-prefixed**: e.g. `"EVENT_"` for the event layer
//! - **Stable**: codes do not change once defined (API contract)
//!
//! # Example
//!
//! ```
//! use glint_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum MyError {
//!     NotFound,
//!     Busy,
//! }
//!
//! impl ErrorCode for MyError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::NotFound => "MY_NOT_FOUND",
//!             Self::Busy => "MY_BUSY",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Busy)
//!     }
//! }
//!
//! assert_eq!(MyError::NotFound.code(), "MY_NOT_FOUND");
//! assert!(MyError::Busy.is_recoverable());
//! ```

/// Unified error code interface for Glint errors.
///
/// An error is **recoverable** when retrying the operation may
/// succeed or the caller can take corrective action; invalid input
/// is not recoverable because it will not change on retry.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    ///
    /// UPPER_SNAKE_CASE, prefixed with the owning layer's namespace,
    /// and stable across versions.
    fn code(&self) -> &'static str;

    /// Returns whether the error is recoverable.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows Glint conventions.
///
/// # Checks
///
/// 1. Code starts with the expected layer prefix
/// 2. Code is UPPER_SNAKE_CASE with no empty segments
///
/// # Panics
///
/// Panics with a descriptive message if validation fails.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(
        code.starts_with(expected_prefix),
        "error code '{}' lacks the '{}' layer prefix",
        code,
        expected_prefix
    );

    assert!(
        has_code_format(code),
        "error code '{}' is not UPPER_SNAKE_CASE",
        code
    );
}

/// Validates every variant of an error enum at once.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// UPPER_SNAKE_CASE with non-empty segments: one or more runs of
/// uppercase letters and digits, joined by single underscores.
fn has_code_format(s: &str) -> bool {
    let mut segments = 0;
    for segment in s.split('_') {
        if segment.is_empty() {
            // Leading, trailing, or doubled underscore
            return false;
        }
        if !segment
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return false;
        }
        segments += 1;
    }
    segments > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A window-layer error the way a Glint consumer would write one.
    #[derive(Debug)]
    enum WindowError {
        Gone,
        Occluded,
    }

    impl ErrorCode for WindowError {
        fn code(&self) -> &'static str {
            match self {
                Self::Gone => "WINDOW_GONE",
                Self::Occluded => "WINDOW_OCCLUDED",
            }
        }

        fn is_recoverable(&self) -> bool {
            // An occluded window can come back; a destroyed one cannot.
            matches!(self, Self::Occluded)
        }
    }

    #[test]
    fn code_and_recoverability() {
        assert_eq!(WindowError::Gone.code(), "WINDOW_GONE");
        assert!(!WindowError::Gone.is_recoverable());
        assert!(WindowError::Occluded.is_recoverable());
    }

    #[test]
    fn helpers_accept_all_variants() {
        assert_error_code(&WindowError::Gone, "WINDOW_");
        assert_error_codes(&[WindowError::Gone, WindowError::Occluded], "WINDOW_");
    }

    #[test]
    #[should_panic(expected = "lacks the 'EVENT_' layer prefix")]
    fn prefix_mismatch_panics() {
        assert_error_code(&WindowError::Gone, "EVENT_");
    }

    #[test]
    fn code_format_accepts_conventional_codes() {
        assert!(has_code_format("WINDOW_GONE"));
        assert!(has_code_format("EVENT_UNKNOWN_KIND"));
        assert!(has_code_format("CODE2"));
    }

    #[test]
    fn code_format_rejects_malformed_codes() {
        assert!(!has_code_format(""));
        assert!(!has_code_format("window_gone"));
        assert!(!has_code_format("Window_Gone"));
        assert!(!has_code_format("_WINDOW"));
        assert!(!has_code_format("WINDOW_"));
        assert!(!has_code_format("WINDOW__GONE"));
    }
}
