//! Growable waypoint sequence used while a path is being traced.

use harmonia_core::{PathBuffer, Point2D, TraceError};

/// Waypoints accumulated by the tracer, stored flat as `[x0, y0, x1, y1, ...]`.
///
/// Always holds at least the start point. Converted into a
/// [`PathBuffer`] once tracing terminates.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    coords: Vec<f32>,
}

impl Trace {
    /// A trace containing only `start`.
    pub fn new(start: Point2D) -> Self {
        Self::with_capacity(start, 1)
    }

    /// A trace containing only `start`, with room for `waypoints` points.
    pub fn with_capacity(start: Point2D, waypoints: usize) -> Self {
        let mut coords = Vec::with_capacity(2 * waypoints.max(1));
        coords.extend([start.x, start.y]);
        Self { coords }
    }

    /// Append a waypoint.
    pub fn push(&mut self, p: Point2D) {
        self.coords.extend([p.x, p.y]);
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// Always false; a trace holds its start point.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The newest waypoint.
    pub fn last(&self) -> Point2D {
        let n = self.coords.len();
        Point2D::new(self.coords[n - 2], self.coords[n - 1])
    }

    /// Flat coordinate view.
    pub fn as_flat(&self) -> &[f32] {
        &self.coords
    }

    /// Hand the coordinates over as an owned [`PathBuffer`].
    pub fn into_path(self) -> Result<PathBuffer, TraceError> {
        PathBuffer::from_flat(self.coords)
    }
}
