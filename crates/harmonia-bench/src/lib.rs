//! Benchmark profiles for Harmonia path extraction.
//!
//! - [`reference_profile`]: 64x64 walled room, goal off-centre, 16 starts
//! - [`stress_profile`]: 256x256 walled room with an interior wall, 64 starts
//!
//! Fields are relaxed once at construction; benchmarks only time tracing.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use harmonia_core::Point2D;
use harmonia_path::TraceConfig;
use harmonia_test_utils::{random_interior_points, GridFixture, OBSTACLE_POTENTIAL};

/// A relaxed field, a set of start points, and the tracer settings to use.
pub struct BenchProfile {
    /// Owned grid arrays.
    pub fixture: GridFixture,
    /// Deterministic start points on unlocked interior cells.
    pub starts: Vec<Point2D>,
    /// Tracer configuration.
    pub config: TraceConfig,
}

/// 64x64 room, goal at (48, 40), 16 seeded starts.
pub fn reference_profile(seed: u64) -> BenchProfile {
    let fixture = GridFixture::walled_room(64, 64, (48, 40), 4000);
    let starts = random_interior_points(&fixture, 16, 4, seed);
    BenchProfile {
        fixture,
        starts,
        config: TraceConfig::default().with_step_size(0.1),
    }
}

/// 256x256 room split by a wall with a single gap, 64 seeded starts.
pub fn stress_profile(seed: u64) -> BenchProfile {
    let (rows, cols) = (256, 256);
    let mut fixture = GridFixture::constant(rows, cols, OBSTACLE_POTENTIAL);
    fixture.wall_border();
    for r in 0..rows {
        if !(120..136).contains(&r) {
            fixture.lock(128, r, OBSTACLE_POTENTIAL);
        }
    }
    fixture.lock(200, 64, 0.0);
    fixture.relax(8000);

    let starts = random_interior_points(&fixture, 64, 8, seed);
    BenchProfile {
        fixture,
        starts,
        config: TraceConfig::default().with_step_size(0.25),
    }
}
