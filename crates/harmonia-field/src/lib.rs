//! Continuous-domain access to a discrete potential field.
//!
//! - [`PotentialSampler`]: bilinear interpolation at sub-cell `(x, y)`,
//!   with location validity checks against grid extent and obstacles.
//! - [`GradientEstimator`]: central-difference gradient built on four
//!   sampler calls, normalized to a unit [`Direction`].
//!
//! Corner reads near the grid edge follow an [`EdgePolicy`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod gradient;
pub mod sampler;

pub use edge::EdgePolicy;
pub use gradient::{Direction, GradientEstimator, GradientPolarity};
pub use sampler::PotentialSampler;
