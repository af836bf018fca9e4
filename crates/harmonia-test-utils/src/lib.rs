//! Test utilities and fixture grids for Harmonia development.
//!
//! [`GridFixture`] owns the arrays behind a [`GridView`] and offers
//! builders for the field shapes the tests lean on: constants, affine
//! ramps, walled rooms relaxed into harmonic fields, and arbitrary
//! per-cell functions. [`random_interior_points`] produces deterministic
//! start points from a seed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod relax;

pub use relax::{neighbours_flat, relax_harmonic};

use harmonia_core::{GridView, Point2D};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Potential pinned at obstacle cells in relaxed fixtures.
pub const OBSTACLE_POTENTIAL: f32 = -1.0;

/// Potential pinned at the goal in relaxed fixtures.
pub const GOAL_POTENTIAL: f32 = 0.0;

/// Owned grid arrays for building test scenarios.
///
/// Coordinates are `(col, row)` throughout, matching [`Point2D`].
#[derive(Clone, Debug)]
pub struct GridFixture {
    pub rows: u32,
    pub cols: u32,
    pub potential: Vec<f32>,
    pub locked: Vec<bool>,
}

impl GridFixture {
    /// Every cell unlocked with potential `value`.
    pub fn constant(rows: u32, cols: u32, value: f32) -> Self {
        let n = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            potential: vec![value; n],
            locked: vec![false; n],
        }
    }

    /// Unlocked field with potential `f(col, row)`.
    pub fn from_fn(rows: u32, cols: u32, f: impl Fn(u32, u32) -> f32) -> Self {
        let mut fx = Self::constant(rows, cols, 0.0);
        for r in 0..rows {
            for c in 0..cols {
                fx.set(c, r, f(c, r));
            }
        }
        fx
    }

    /// Affine ramp `u = a * col + b * row`, unlocked.
    pub fn ramp(rows: u32, cols: u32, a: f32, b: f32) -> Self {
        Self::from_fn(rows, cols, |c, r| a * c as f32 + b * r as f32)
    }

    /// A room of `rows x cols` with obstacle walls on the border and the
    /// goal at `goal = (col, row)`, relaxed into a harmonic field with
    /// `iterations` Gauss-Seidel sweeps.
    pub fn walled_room(rows: u32, cols: u32, goal: (u32, u32), iterations: usize) -> Self {
        let mut fx = Self::constant(rows, cols, OBSTACLE_POTENTIAL);
        fx.wall_border();
        fx.lock(goal.0, goal.1, GOAL_POTENTIAL);
        fx.relax(iterations);
        fx
    }

    fn idx(&self, col: u32, row: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Set the potential at `(col, row)` without changing its lock.
    pub fn set(&mut self, col: u32, row: u32, value: f32) {
        let i = self.idx(col, row);
        self.potential[i] = value;
    }

    /// Lock `(col, row)` at `value`. Negative values make it an obstacle.
    pub fn lock(&mut self, col: u32, row: u32, value: f32) {
        let i = self.idx(col, row);
        self.potential[i] = value;
        self.locked[i] = true;
    }

    /// Lock every border cell as an obstacle.
    pub fn wall_border(&mut self) {
        for c in 0..self.cols {
            self.lock(c, 0, OBSTACLE_POTENTIAL);
            self.lock(c, self.rows - 1, OBSTACLE_POTENTIAL);
        }
        for r in 0..self.rows {
            self.lock(0, r, OBSTACLE_POTENTIAL);
            self.lock(self.cols - 1, r, OBSTACLE_POTENTIAL);
        }
    }

    /// Relax unlocked cells toward the discrete Laplace solution.
    pub fn relax(&mut self, iterations: usize) {
        relax_harmonic(
            self.rows,
            self.cols,
            &mut self.potential,
            &self.locked,
            iterations,
        );
    }

    /// Borrow the arrays as a [`GridView`].
    pub fn view(&self) -> GridView<'_> {
        GridView::new([self.rows, self.cols], &self.potential, &self.locked)
            .expect("fixture arrays always match their dimensions")
    }
}

/// `n` deterministic points whose cells lie at least `margin` cells inside
/// the grid and are unlocked.
///
/// Identical seeds produce identical points.
pub fn random_interior_points(fx: &GridFixture, n: usize, margin: u32, seed: u64) -> Vec<Point2D> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span_c = fx.cols.saturating_sub(2 * margin);
    let span_r = fx.rows.saturating_sub(2 * margin);
    assert!(span_c > 0 && span_r > 0, "margin {margin} leaves no interior");

    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let c = margin + rng.next_u32() % span_c;
        let r = margin + rng.next_u32() % span_r;
        if fx.locked[fx.idx(c, r)] {
            continue;
        }
        // Sub-cell jitter in [-0.25, 0.25).
        let jx = (rng.next_u32() % 1000) as f32 / 2000.0 - 0.25;
        let jy = (rng.next_u32() % 1000) as f32 / 2000.0 - 0.25;
        out.push(Point2D::new(c as f32 + jx, r as f32 + jy));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_layout_is_row_major() {
        let fx = GridFixture::ramp(2, 3, 1.0, 10.0);
        assert_eq!(fx.potential, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(fx.view().dims(), [2, 3]);
    }

    #[test]
    fn walled_room_pins_boundary() {
        let fx = GridFixture::walled_room(8, 8, (5, 5), 200);
        let g = fx.view();
        assert!(g.is_locked(0, 3));
        assert!(g.is_locked(7, 7));
        assert_eq!(g.value(5, 5), GOAL_POTENTIAL);
        assert!(g.is_locked(5, 5));
        // Interior values sit strictly between the boundary values.
        let v = g.value(3, 3);
        assert!(v > OBSTACLE_POTENTIAL && v < GOAL_POTENTIAL, "got {v}");
    }

    #[test]
    fn random_points_are_deterministic_and_interior() {
        let fx = GridFixture::walled_room(12, 12, (6, 6), 10);
        let a = random_interior_points(&fx, 16, 3, 42);
        let b = random_interior_points(&fx, 16, 3, 42);
        assert_eq!(a, b);
        for p in &a {
            let (c, r) = fx.view().cell_of(*p).unwrap();
            assert!((3..9).contains(&c) && (3..9).contains(&r), "point {p}");
        }
    }
}
