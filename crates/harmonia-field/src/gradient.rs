//! Central-difference gradient estimation.
//!
//! ```text
//! ∂P/∂x ≈ (P(x+h, y) - P(x-h, y)) / 2h
//! ∂P/∂y ≈ (P(x, y+h) - P(x, y-h)) / 2h
//! ```
//!
//! The partials are divided by their Euclidean norm, giving a unit vector
//! that points toward increasing potential.

use crate::sampler::PotentialSampler;
use harmonia_core::{GradientError, GradientFault, Point2D};

/// A unit-length direction `(dx, dy)` in cell units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    /// Column component.
    pub dx: f32,
    /// Row component.
    pub dy: f32,
}

impl Direction {
    /// Euclidean length. `1.0` within float tolerance for estimator output.
    pub fn norm(&self) -> f32 {
        self.dx.hypot(self.dy)
    }

    /// The opposite direction.
    pub fn negated(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Which way along the gradient the tracer moves.
///
/// The estimator's raw vector points toward increasing potential. Fields
/// solved with the goal pinned at the highest value (obstacles negative,
/// goal at zero) are traced with `Ascend`; fields with the goal as the
/// minimum use `Descend`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientPolarity {
    /// Follow the raw gradient.
    #[default]
    Ascend,
    /// Follow the negated gradient.
    Descend,
}

impl GradientPolarity {
    /// Orient a raw gradient direction.
    pub fn apply(self, d: Direction) -> Direction {
        match self {
            Self::Ascend => d,
            Self::Descend => d.negated(),
        }
    }
}

/// Estimates normalized gradients with a fixed central-difference step.
///
/// Each estimate costs four [`PotentialSampler::sample`] calls. Any failing
/// sample fails the whole estimate.
#[derive(Clone, Copy, Debug)]
pub struct GradientEstimator<'a> {
    sampler: PotentialSampler<'a>,
    precision: f32,
}

impl<'a> GradientEstimator<'a> {
    /// Create an estimator with central-difference step `precision` (`h`).
    pub fn new(sampler: PotentialSampler<'a>, precision: f32) -> Self {
        Self { sampler, precision }
    }

    /// The central-difference step `h`.
    pub fn precision(&self) -> f32 {
        self.precision
    }

    /// The underlying sampler.
    pub fn sampler(&self) -> &PotentialSampler<'a> {
        &self.sampler
    }

    /// Raw (unnormalized) partial derivatives `(∂P/∂x, ∂P/∂y)` at `p`.
    pub fn partials(&self, p: Point2D) -> Result<(f32, f32), GradientError> {
        let h = self.precision;
        let sample = |q: Point2D| {
            self.sampler.sample(q).map_err(|e| GradientError {
                x: p.x,
                y: p.y,
                cause: GradientFault::Sample(e),
            })
        };

        let west = sample(Point2D::new(p.x - h, p.y))?;
        let east = sample(Point2D::new(p.x + h, p.y))?;
        let north = sample(Point2D::new(p.x, p.y - h))?;
        let south = sample(Point2D::new(p.x, p.y + h))?;

        Ok(((east - west) / (2.0 * h), (south - north) / (2.0 * h)))
    }

    /// Unit gradient direction at `p`, pointing toward increasing potential.
    ///
    /// # Errors
    ///
    /// Returns a [`GradientError`] if any of the four samples fails, or
    /// with [`GradientFault::FlatField`] if the partials have zero or
    /// non-finite length.
    pub fn direction(&self, p: Point2D) -> Result<Direction, GradientError> {
        let (px, py) = self.partials(p).inspect_err(|e| {
            log::debug!("gradient failed: {e}");
        })?;

        let denom = px.hypot(py);
        if denom == 0.0 || !denom.is_finite() {
            let e = GradientError {
                x: p.x,
                y: p.y,
                cause: GradientFault::FlatField,
            };
            log::debug!("gradient failed: {e}");
            return Err(e);
        }

        Ok(Direction {
            dx: px / denom,
            dy: py / denom,
        })
    }
}
