//! Gauss-Seidel relaxation for building harmonic fixtures.
//!
//! Solving the field is not part of the tracer; this exists so tests can
//! run against realistic potentials instead of hand-written ones.

use smallvec::SmallVec;

/// Flat indices of the in-bounds 4-connected neighbours of `(col, row)`.
pub fn neighbours_flat(col: u32, row: u32, rows: u32, cols: u32) -> SmallVec<[usize; 4]> {
    let offsets: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
    let mut result = SmallVec::new();
    for (dc, dr) in offsets {
        let nc = col as i64 + dc;
        let nr = row as i64 + dr;
        if nc >= 0 && nr >= 0 && nc < cols as i64 && nr < rows as i64 {
            result.push(nr as usize * cols as usize + nc as usize);
        }
    }
    result
}

/// Relax every unlocked cell to the mean of its neighbours, in place.
///
/// Locked cells keep their values. Runs exactly `iterations` row-major
/// sweeps.
pub fn relax_harmonic(
    rows: u32,
    cols: u32,
    potential: &mut [f32],
    locked: &[bool],
    iterations: usize,
) {
    let neighbours: Vec<SmallVec<[usize; 4]>> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (c, r)))
        .map(|(c, r)| neighbours_flat(c, r, rows, cols))
        .collect();

    for _ in 0..iterations {
        for (i, nbs) in neighbours.iter().enumerate() {
            if locked[i] || nbs.is_empty() {
                continue;
            }
            let sum: f32 = nbs.iter().map(|&j| potential[j]).sum();
            potential[i] = sum / nbs.len() as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_flat_center() {
        let nbs = neighbours_flat(1, 1, 3, 3);
        assert_eq!(nbs.len(), 4);
        // (1,0)=1, (1,2)=7, (0,1)=3, (2,1)=5
        for i in [1, 7, 3, 5] {
            assert!(nbs.contains(&i));
        }
    }

    #[test]
    fn neighbours_flat_corner() {
        let nbs = neighbours_flat(0, 0, 3, 3);
        assert_eq!(nbs.len(), 2);
        assert!(nbs.contains(&1));
        assert!(nbs.contains(&3));
    }

    #[test]
    fn relaxed_line_is_linear() {
        // 1x5 strip pinned at 0 and 4 converges to the ramp 0..4.
        let mut u = vec![0.0, 0.0, 0.0, 0.0, 4.0];
        let locked = [true, false, false, false, true];
        relax_harmonic(1, 5, &mut u, &locked, 500);
        for (c, v) in u.iter().enumerate() {
            assert!((v - c as f32).abs() < 1e-3, "cell {c}: {v}");
        }
    }
}
