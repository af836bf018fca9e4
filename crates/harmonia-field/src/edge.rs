//! Handling of interpolation corners that fall outside the grid.

/// What the sampler does when one of the four interpolation corners lies
/// outside the grid.
///
/// A point whose own cell is valid can still sit within half a cell of the
/// boundary, putting a corner one index past the edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Replicate the edge cell: out-of-range corners read the nearest
    /// in-range cell on that axis.
    #[default]
    Clamp,
    /// Treat the sample as an invalid location.
    Reject,
}

/// Resolve a single corner index under the given policy.
/// Returns `Some(index)` or `None` for Reject out-of-bounds.
pub(crate) fn resolve_axis(val: i64, len: u32, edge: EdgePolicy) -> Option<u32> {
    let n = len as i64;
    if val >= 0 && val < n {
        return Some(val as u32);
    }
    match edge {
        EdgePolicy::Reject => None,
        EdgePolicy::Clamp => Some(val.clamp(0, n - 1) as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 5, EdgePolicy::Reject), Some(2));
        assert_eq!(resolve_axis(0, 5, EdgePolicy::Clamp), Some(0));
    }

    #[test]
    fn resolve_axis_reject_out_of_bounds() {
        assert_eq!(resolve_axis(-1, 5, EdgePolicy::Reject), None);
        assert_eq!(resolve_axis(5, 5, EdgePolicy::Reject), None);
    }

    #[test]
    fn resolve_axis_clamp() {
        assert_eq!(resolve_axis(-1, 5, EdgePolicy::Clamp), Some(0));
        assert_eq!(resolve_axis(5, 5, EdgePolicy::Clamp), Some(4));
    }
}
