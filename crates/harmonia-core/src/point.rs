//! Continuous 2D coordinates in grid-cell units.

use std::fmt;

/// A continuous `(x, y)` location in cell units.
///
/// `x` indexes columns and `y` indexes rows. Cell `(col, row)` covers
/// `[col - 0.5, col + 0.5) x [row - 0.5, row + 0.5)`, so integer values
/// are cell centres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    /// Column coordinate.
    pub x: f32,
    /// Row coordinate.
    pub y: f32,
}

impl Point2D {
    /// Create a point from its column and row coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point2D) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates are finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Translate by `(dx, dy) * scale`.
    pub fn offset(&self, dx: f32, dy: f32, scale: f32) -> Point2D {
        Point2D::new(self.x + dx * scale, self.y + dy * scale)
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
