//! Window-relative geometry.

use serde::{Deserialize, Serialize};

/// A 2-D point in window-relative coordinates.
///
/// Coordinates are doubles because the window system reports
/// sub-pixel positions for pointing devices.
///
/// # Display
///
/// `Display` uses fixed six-decimal precision, which is the format
/// event descriptions embed:
///
/// ```
/// use glint_types::Point;
///
/// let p = Point::new(10.5, 20.25);
/// assert_eq!(p.to_string(), "(10.500000, 20.250000)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the window origin.
    pub x: f64,
    /// Vertical offset from the window origin.
    pub y: f64,
}

impl Point {
    /// The origin, also the documented fallback for null accessors.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_origin() {
        assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
        assert_eq!(Point::default(), Point::ZERO);
    }

    #[test]
    fn display_fixed_precision() {
        assert_eq!(Point::new(10.5, 20.25).to_string(), "(10.500000, 20.250000)");
        assert_eq!(Point::ZERO.to_string(), "(0.000000, 0.000000)");
    }

    #[test]
    fn serialize_round_trip() {
        let p = Point::new(1.5, -2.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
