//! The finalized, uniquely-owned path handed back to callers.

use crate::error::TraceError;
use crate::point::Point2D;

/// A finished path: `k` waypoints stored flat as `x0, y0, x1, y1, ...`.
///
/// `PathBuffer` is move-only. Whoever holds it owns the allocation, and it
/// is released exactly once when dropped.
#[derive(Debug, PartialEq)]
pub struct PathBuffer {
    coords: Vec<f32>,
}

impl PathBuffer {
    /// Wrap flattened `x, y` pairs.
    ///
    /// Returns `Err(TraceError::InvalidData)` if `coords` has an odd length.
    pub fn from_flat(coords: Vec<f32>) -> Result<Self, TraceError> {
        if coords.len() % 2 != 0 {
            return Err(TraceError::InvalidData {
                reason: format!(
                    "flattened path has odd length {}, expected x/y pairs",
                    coords.len()
                ),
            });
        }
        Ok(Self { coords })
    }

    /// Build from a sequence of points.
    pub fn from_points(points: &[Point2D]) -> Self {
        let mut coords = Vec::with_capacity(points.len() * 2);
        for p in points {
            coords.push(p.x);
            coords.push(p.y);
        }
        Self { coords }
    }

    /// Number of waypoints `k`.
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// True if the path holds no waypoints.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The flattened `2 * k` coordinates.
    pub fn as_flat(&self) -> &[f32] {
        &self.coords
    }

    /// Waypoint `i`, if present.
    pub fn get(&self, i: usize) -> Option<Point2D> {
        let x = *self.coords.get(2 * i)?;
        let y = *self.coords.get(2 * i + 1)?;
        Some(Point2D::new(x, y))
    }

    /// First waypoint.
    pub fn first(&self) -> Option<Point2D> {
        self.get(0)
    }

    /// Last waypoint.
    pub fn last(&self) -> Option<Point2D> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate waypoints in trace order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point2D> + '_ {
        self.coords
            .chunks_exact(2)
            .map(|pair| Point2D::new(pair[0], pair[1]))
    }

    /// Total polyline length in cell units.
    pub fn arc_length(&self) -> f32 {
        self.points()
            .zip(self.points().skip(1))
            .map(|(a, b)| a.distance(&b))
            .sum()
    }

    /// Consume the buffer, returning the flattened coordinates.
    pub fn into_flat(self) -> Vec<f32> {
        self.coords
    }
}
