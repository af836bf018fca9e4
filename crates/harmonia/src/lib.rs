//! Harmonia: path extraction from harmonic potential fields.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Harmonia sub-crates. Solving the field is left to the caller; this
//! crate samples a solved field and follows its gradient.
//!
//! # Quick start
//!
//! ```rust
//! use harmonia::prelude::*;
//!
//! // 5x8 grid, u = col, column 7 locked as the goal (non-negative).
//! let (rows, cols) = (5u32, 8u32);
//! let mut potential = Vec::new();
//! let mut locked = Vec::new();
//! for _ in 0..rows {
//!     for c in 0..cols {
//!         potential.push(c as f32);
//!         locked.push(c == 7);
//!     }
//! }
//! let grid = GridView::new([rows, cols], &potential, &locked).unwrap();
//!
//! let tracer = PathTracer::new(TraceConfig::default().with_step_size(0.5)).unwrap();
//! let outcome = tracer.trace_detailed(&grid, Point2D::new(1.0, 2.0)).unwrap();
//! assert_eq!(outcome.termination, Termination::ReachedLockedCell);
//! assert_eq!(outcome.path.last(), Some(Point2D::new(6.5, 2.0)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `harmonia-core` | Grid view, points, path buffers, errors |
//! | [`field`] | `harmonia-field` | Bilinear sampling and gradient estimation |
//! | [`path`] | `harmonia-path` | Tracer, stuck detection, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`harmonia-core`).
///
/// [`types::GridView`], [`types::Point2D`], [`types::PathBuffer`] and the
/// error enums.
pub use harmonia_core as types;

/// Field sampling (`harmonia-field`).
///
/// [`field::PotentialSampler`] interpolates the field;
/// [`field::GradientEstimator`] turns it into unit directions.
pub use harmonia_field as field;

/// Path tracing (`harmonia-path`).
///
/// [`path::PathTracer`] drives the loop; [`path::StuckDetector`] stops it
/// when it cycles.
pub use harmonia_path as path;

/// Common imports for typical Harmonia usage.
///
/// ```rust
/// use harmonia::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use harmonia_core::{GridView, PathBuffer, Point2D};

    // Errors
    pub use harmonia_core::{ErrorKind, GradientError, SampleError, TraceError};

    // Field
    pub use harmonia_field::{EdgePolicy, GradientEstimator, GradientPolarity, PotentialSampler};

    // Path
    pub use harmonia_path::{
        release, ConfigError, PathTracer, StuckDetector, Termination, TraceConfig, TraceOutcome,
    };
}
