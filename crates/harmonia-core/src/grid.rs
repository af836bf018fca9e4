//! Read-only view over a solved potential field.

use crate::error::SampleError;
use crate::point::Point2D;

/// A borrowed, immutable view of a harmonic potential grid.
///
/// `potential` and `locked` are row-major with `rows * cols` entries:
/// the value for cell `(col, row)` lives at `row * cols + col`. A locked
/// cell has its potential pinned by a boundary condition (obstacle or
/// goal). A locked cell holding a negative potential marks an obstacle.
///
/// The view never mutates the arrays and is `Copy`, so it can be shared
/// freely across threads for concurrent traces.
///
/// # Examples
///
/// ```
/// use harmonia_core::{GridView, Point2D};
///
/// let potential = vec![0.0f32; 12];
/// let locked = vec![false; 12];
/// let grid = GridView::new([3, 4], &potential, &locked).unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cols(), 4);
/// assert_eq!(grid.cell_of(Point2D::new(3.4, 1.6)), Some((3, 2)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    rows: u32,
    cols: u32,
    potential: &'a [f32],
    locked: &'a [bool],
}

impl<'a> GridView<'a> {
    /// Create a view over `dims = [rows, cols]`.
    ///
    /// Returns `Err(SampleError::InvalidData)` if either dimension is zero,
    /// the cell count overflows, or an array length differs from
    /// `rows * cols`.
    pub fn new(
        dims: [u32; 2],
        potential: &'a [f32],
        locked: &'a [bool],
    ) -> Result<Self, SampleError> {
        let [rows, cols] = dims;
        if rows == 0 || cols == 0 {
            return Err(SampleError::InvalidData {
                reason: format!("grid dimensions must be non-zero, got {rows}x{cols}"),
            });
        }
        let cells = (rows as usize)
            .checked_mul(cols as usize)
            .ok_or_else(|| SampleError::InvalidData {
                reason: format!("grid {rows}x{cols} overflows usize"),
            })?;
        if potential.len() != cells {
            return Err(SampleError::InvalidData {
                reason: format!(
                    "potential has {} elements, expected {cells}",
                    potential.len()
                ),
            });
        }
        if locked.len() != cells {
            return Err(SampleError::InvalidData {
                reason: format!("locked has {} elements, expected {cells}", locked.len()),
            });
        }
        Ok(Self {
            rows,
            cols,
            potential,
            locked,
        })
    }

    /// Number of rows (y-extent).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (x-extent).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `[rows, cols]`.
    pub fn dims(&self) -> [u32; 2] {
        [self.rows, self.cols]
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.potential.len()
    }

    /// The row-major potential array.
    pub fn potential(&self) -> &'a [f32] {
        self.potential
    }

    /// The row-major lock array.
    pub fn locked(&self) -> &'a [bool] {
        self.locked
    }

    /// Flat index of `(col, row)`, or `None` if outside the grid.
    pub fn index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Potential at in-bounds cell `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn value(&self, col: u32, row: u32) -> f32 {
        self.potential[row as usize * self.cols as usize + col as usize]
    }

    /// Whether in-bounds cell `(col, row)` is locked.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn is_locked(&self, col: u32, row: u32) -> bool {
        self.locked[row as usize * self.cols as usize + col as usize]
    }

    /// The cell containing `p`, rounding each axis with `floor(v + 0.5)`.
    ///
    /// Returns `None` for non-finite points and points whose rounded cell
    /// lies outside `[0, cols) x [0, rows)`.
    pub fn cell_of(&self, p: Point2D) -> Option<(u32, u32)> {
        if !p.is_finite() {
            return None;
        }
        let col = (p.x + 0.5).floor() as i64;
        let row = (p.y + 0.5).floor() as i64;
        self.index(col, row).map(|_| (col as u32, row as u32))
    }

    /// Whether the cell containing `p` is locked. Points outside the grid
    /// are reported as unlocked.
    pub fn is_locked_at(&self, p: Point2D) -> bool {
        self.cell_of(p)
            .map(|(col, row)| self.is_locked(col, row))
            .unwrap_or(false)
    }

    /// Validate `p` as a sampling location and return its cell.
    ///
    /// Fails with `InvalidLocation` when `p` rounds outside the grid, is
    /// not finite, or rounds onto a locked cell with a negative potential
    /// (an obstacle). A locked cell with a non-negative potential, such as
    /// the goal, is a valid location.
    pub fn check_location(&self, p: Point2D) -> Result<(u32, u32), SampleError> {
        let invalid = || SampleError::InvalidLocation { x: p.x, y: p.y };
        let (col, row) = self.cell_of(p).ok_or_else(invalid)?;
        if self.is_locked(col, row) && self.value(col, row) < 0.0 {
            return Err(invalid());
        }
        Ok((col, row))
    }
}
