//! Cycle detection over the tail of a trace.

/// Number of preceding points the tracer compares against by default.
pub const DEFAULT_HISTORY_LENGTH: usize = 5;

/// Decides whether a trace has stopped making progress.
///
/// The newest point is compared against up to `history_length` points
/// before it, newest first. The trace is stuck if any of them lies closer
/// than `step_size / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StuckDetector {
    history_length: usize,
}

impl Default for StuckDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LENGTH)
    }
}

impl StuckDetector {
    /// Detector looking back `history_length` points.
    pub const fn new(history_length: usize) -> Self {
        Self { history_length }
    }

    /// The comparison window.
    pub fn history_length(&self) -> usize {
        self.history_length
    }

    /// Whether the flat `[x0, y0, x1, y1, ...]` trace is stuck.
    ///
    /// An odd-length buffer is malformed and reported as stuck so the
    /// caller stops. An empty trace is never stuck.
    pub fn is_stuck(&self, coords: &[f32], step_size: f32) -> bool {
        if coords.len() % 2 != 0 {
            return true;
        }
        let Some((earlier, last)) = coords.split_last_chunk::<2>() else {
            return false;
        };
        let [x, y] = *last;
        let threshold = step_size / 2.0;

        earlier
            .chunks_exact(2)
            .rev()
            .take(self.history_length)
            .any(|p| (x - p[0]).hypot(y - p[1]) < threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn returning_point_is_stuck() {
        let d = StuckDetector::default();
        assert!(d.is_stuck(&[0.0, 0.0, 1.0, 0.0, 0.0, 0.0], 1.0));
    }

    #[test]
    fn far_apart_points_are_not_stuck() {
        let d = StuckDetector::default();
        assert!(!d.is_stuck(&[0.0, 0.0, 10.0, 10.0], 1.0));
    }

    #[test]
    fn odd_length_is_stuck() {
        let d = StuckDetector::default();
        assert!(d.is_stuck(&[0.0, 0.0, 1.0], 1.0));
    }

    #[test]
    fn empty_and_single_point_are_not_stuck() {
        let d = StuckDetector::default();
        assert!(!d.is_stuck(&[], 1.0));
        assert!(!d.is_stuck(&[3.0, 4.0], 1.0));
    }

    #[test]
    fn threshold_is_strict_half_step() {
        let d = StuckDetector::default();
        // Exactly half a step apart: not stuck.
        assert!(!d.is_stuck(&[0.0, 0.0, 0.5, 0.0], 1.0));
        assert!(d.is_stuck(&[0.0, 0.0, 0.49, 0.0], 1.0));
    }

    #[test]
    fn window_limits_lookback() {
        // Newest point revisits the point three steps back.
        let coords = [0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 0.0];
        assert!(!StuckDetector::new(2).is_stuck(&coords, 1.0));
        assert!(StuckDetector::new(3).is_stuck(&coords, 1.0));
        assert!(!StuckDetector::new(0).is_stuck(&coords, 1.0));
    }

    proptest! {
        #[test]
        fn evenly_spaced_line_never_stuck(
            n in 1usize..50,
            step in 0.01f32..2.0,
            window in 0usize..10,
        ) {
            let coords: Vec<f32> = (0..n)
                .flat_map(|i| [i as f32 * step, 0.0])
                .collect();
            prop_assert!(!StuckDetector::new(window).is_stuck(&coords, step));
        }

        #[test]
        fn repeat_within_window_is_stuck(
            n in 2usize..30,
            back in 1usize..6,
        ) {
            prop_assume!(back < n);
            let mut coords: Vec<f32> = (0..n)
                .flat_map(|i| [i as f32, 2.0 * i as f32])
                .collect();
            let j = n - back;
            let (x, y) = (coords[2 * j], coords[2 * j + 1]);
            coords.extend([x, y]);
            prop_assert!(StuckDetector::new(back).is_stuck(&coords, 1.0));
        }
    }
}
