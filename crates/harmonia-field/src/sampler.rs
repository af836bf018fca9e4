//! Bilinear sampling of the potential field at continuous coordinates.
//!
//! The four corners around `(x, y)` are found from the half-cell offsets
//! `floor(x ∓ 0.5)` and `floor(y ∓ 0.5)`:
//!
//! ```text
//! (xtl, ytl) ---- (xtr, ytr)        one = (1-α)·tl + α·tr
//!     |                |            two = (1-α)·bl + α·br
//! (xbl, ybl) ---- (xbr, ybr)        P   = (1-β)·one + β·two
//!
//! α = x - xtl,  β = y - ytl
//! ```
//!
//! Affine fields `u = a·col + b·row + c` are reproduced exactly.

use crate::edge::{resolve_axis, EdgePolicy};
use harmonia_core::{GridView, Point2D, SampleError};

/// Samples the potential of a [`GridView`] at sub-cell locations.
///
/// A location is valid when it rounds (via `floor(v + 0.5)`) to a cell
/// inside the grid that is not an obstacle (locked with a negative
/// potential). Corners that fall outside the grid are handled by the
/// sampler's [`EdgePolicy`].
///
/// # Examples
///
/// ```
/// use harmonia_core::{GridView, Point2D};
/// use harmonia_field::PotentialSampler;
///
/// // 2x3 ramp: u = col.
/// let u = [0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
/// let locked = [false; 6];
/// let grid = GridView::new([2, 3], &u, &locked).unwrap();
/// let sampler = PotentialSampler::new(grid);
/// let v = sampler.sample(Point2D::new(1.25, 0.5)).unwrap();
/// assert!((v - 1.25).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PotentialSampler<'a> {
    grid: GridView<'a>,
    edge: EdgePolicy,
}

impl<'a> PotentialSampler<'a> {
    /// Create a sampler with the default [`EdgePolicy::Clamp`].
    pub fn new(grid: GridView<'a>) -> Self {
        Self::with_edge_policy(grid, EdgePolicy::default())
    }

    /// Create a sampler with an explicit edge policy.
    pub fn with_edge_policy(grid: GridView<'a>, edge: EdgePolicy) -> Self {
        Self { grid, edge }
    }

    /// The grid being sampled.
    pub fn grid(&self) -> GridView<'a> {
        self.grid
    }

    /// The corner edge policy.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    /// Bilinearly interpolated potential at `p`.
    ///
    /// # Errors
    ///
    /// `InvalidLocation` if `p` is not finite, rounds outside the grid, or
    /// rounds onto an obstacle; also when a corner is out of range under
    /// [`EdgePolicy::Reject`].
    pub fn sample(&self, p: Point2D) -> Result<f32, SampleError> {
        if let Err(e) = self.grid.check_location(p) {
            log::debug!("sample rejected: {e}");
            return Err(e);
        }

        let xtl = (p.x - 0.5).floor();
        let ytl = (p.y - 0.5).floor();
        let xbr = (p.x + 0.5).floor();
        let ybr = (p.y + 0.5).floor();

        let alpha = p.x - xtl;
        let beta = p.y - ytl;

        let cols = self.grid.cols();
        let rows = self.grid.rows();
        let corners = (
            resolve_axis(xtl as i64, cols, self.edge),
            resolve_axis(xbr as i64, cols, self.edge),
            resolve_axis(ytl as i64, rows, self.edge),
            resolve_axis(ybr as i64, rows, self.edge),
        );
        let (Some(c0), Some(c1), Some(r0), Some(r1)) = corners else {
            log::debug!("sample rejected: corner of {p} outside grid under {:?}", self.edge);
            return Err(SampleError::InvalidLocation { x: p.x, y: p.y });
        };

        let g = &self.grid;
        let one = (1.0 - alpha) * g.value(c0, r0) + alpha * g.value(c1, r0);
        let two = (1.0 - alpha) * g.value(c0, r1) + alpha * g.value(c1, r1);
        Ok((1.0 - beta) * one + beta * two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_core::ErrorKind;
    use harmonia_test_utils::GridFixture;
    use proptest::prelude::*;

    #[test]
    fn integer_point_in_constant_neighbourhood_is_exact() {
        let fx = GridFixture::constant(5, 5, 3.25);
        let s = PotentialSampler::new(fx.view());
        for r in 1..4 {
            for c in 1..4 {
                let v = s.sample(Point2D::new(c as f32, r as f32)).unwrap();
                assert_eq!(v, 3.25, "cell ({c},{r})");
            }
        }
    }

    #[test]
    fn ramp_is_reproduced_between_centres() {
        let fx = GridFixture::ramp(4, 8, 2.0, 0.0);
        let s = PotentialSampler::new(fx.view());
        let v = s.sample(Point2D::new(3.75, 1.5)).unwrap();
        assert!((v - 7.5).abs() < 1e-5, "got {v}");
    }

    #[test]
    fn obstacle_rejected_goal_accepted() {
        let mut fx = GridFixture::constant(3, 3, 0.5);
        fx.lock(1, 1, -1.0);
        fx.lock(2, 2, 0.0);
        let s = PotentialSampler::new(fx.view());

        let err = s.sample(Point2D::new(1.1, 0.9)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLocation);
        assert!(s.sample(Point2D::new(2.0, 2.0)).is_ok());
    }

    #[test]
    fn out_of_bounds_rejected() {
        let fx = GridFixture::constant(3, 3, 1.0);
        let s = PotentialSampler::new(fx.view());
        for p in [
            Point2D::new(-0.6, 1.0),
            Point2D::new(2.5, 1.0),
            Point2D::new(1.0, -0.6),
            Point2D::new(1.0, 2.5),
            Point2D::new(f32::NAN, 1.0),
        ] {
            let err = s.sample(p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidLocation, "point {p}");
        }
    }

    #[test]
    fn clamp_replicates_edge_values() {
        // Row-constant field: corners clamped past the left edge read col 0.
        let fx = GridFixture::constant(3, 3, 4.0);
        let s = PotentialSampler::new(fx.view());
        let v = s.sample(Point2D::new(0.2, 0.1)).unwrap();
        assert!((v - 4.0).abs() < 1e-5, "got {v}");

        let v = s.sample(Point2D::new(2.4, 2.4)).unwrap();
        assert!((v - 4.0).abs() < 1e-5, "got {v}");
    }

    #[test]
    fn reject_policy_refuses_edge_corners() {
        let fx = GridFixture::constant(3, 3, 4.0);
        let s = PotentialSampler::with_edge_policy(fx.view(), EdgePolicy::Reject);
        assert_eq!(s.edge_policy(), EdgePolicy::Reject);

        let err = s.sample(Point2D::new(0.2, 1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLocation);

        // Interior points are unaffected.
        assert_eq!(s.sample(Point2D::new(1.0, 1.0)).unwrap(), 4.0);
    }

    proptest! {
        #[test]
        fn affine_fields_interpolate_exactly(
            a in -5.0f32..5.0,
            b in -5.0f32..5.0,
            x in 1.0f32..8.0,
            y in 1.0f32..8.0,
        ) {
            let fx = GridFixture::ramp(10, 10, a, b);
            let s = PotentialSampler::new(fx.view());
            let v = s.sample(Point2D::new(x, y)).unwrap();
            let expected = a * x + b * y;
            prop_assert!((v - expected).abs() < 1e-3, "got {} expected {}", v, expected);
        }
    }
}
