//! Borrowed grid description passed in from C.

use harmonia_core::GridView;

use crate::status::HarmoniaStatus;

/// A solved potential grid owned by the caller.
///
/// `potential` and `locked` each point to `rows * cols` row-major
/// elements and must stay valid for the duration of the call.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct HarmoniaGrid {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Potential values, row-major.
    pub potential: *const f32,
    /// Lock flags, row-major.
    pub locked: *const bool,
}

/// Borrow a C grid as a [`GridView`].
///
/// Null pointers, zero dimensions, and overflowing sizes are
/// `InvalidData`.
///
/// # Safety
///
/// If `grid` is non-null it must point to a valid [`HarmoniaGrid`] whose
/// non-null arrays hold `rows * cols` initialized elements that outlive
/// `'a` and are not mutated meanwhile.
#[allow(unsafe_code)]
pub(crate) unsafe fn grid_view<'a>(
    grid: *const HarmoniaGrid,
) -> Result<GridView<'a>, HarmoniaStatus> {
    if grid.is_null() {
        return Err(HarmoniaStatus::InvalidData);
    }
    // SAFETY: non-null and valid per caller contract.
    let g = unsafe { *grid };
    if g.potential.is_null() || g.locked.is_null() {
        return Err(HarmoniaStatus::InvalidData);
    }
    if g.rows == 0 || g.cols == 0 {
        return Err(HarmoniaStatus::InvalidData);
    }
    let n = (g.rows as usize)
        .checked_mul(g.cols as usize)
        .ok_or(HarmoniaStatus::InvalidData)?;

    // SAFETY: both arrays hold n elements per caller contract.
    let potential = unsafe { std::slice::from_raw_parts(g.potential, n) };
    let locked = unsafe { std::slice::from_raw_parts(g.locked, n) };

    GridView::new([g.rows, g.cols], potential, locked).map_err(|e| {
        log::warn!("rejected C grid: {e}");
        HarmoniaStatus::InvalidData
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_test_utils::GridFixture;

    #[test]
    #[allow(unsafe_code)]
    fn valid_grid_borrows_arrays() {
        let fx = GridFixture::ramp(3, 4, 1.0, 0.0);
        let g = HarmoniaGrid {
            rows: 3,
            cols: 4,
            potential: fx.potential.as_ptr(),
            locked: fx.locked.as_ptr(),
        };
        let view = unsafe { grid_view(&g) }.unwrap();
        assert_eq!(view.dims(), [3, 4]);
        assert_eq!(view.value(2, 1), 2.0);
    }

    #[test]
    #[allow(unsafe_code)]
    fn null_and_empty_grids_are_invalid_data() {
        let fx = GridFixture::constant(2, 2, 0.0);
        let ok = HarmoniaGrid {
            rows: 2,
            cols: 2,
            potential: fx.potential.as_ptr(),
            locked: fx.locked.as_ptr(),
        };
        let cases = [
            HarmoniaGrid {
                potential: std::ptr::null(),
                ..ok
            },
            HarmoniaGrid {
                locked: std::ptr::null(),
                ..ok
            },
            HarmoniaGrid { rows: 0, ..ok },
            HarmoniaGrid { cols: 0, ..ok },
        ];
        for g in cases {
            let err = unsafe { grid_view(&g) }.unwrap_err();
            assert_eq!(err, HarmoniaStatus::InvalidData, "{g:?}");
        }
        let err = unsafe { grid_view(std::ptr::null()) }.unwrap_err();
        assert_eq!(err, HarmoniaStatus::InvalidData);
    }
}
