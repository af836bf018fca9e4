//! Core types for the Harmonia path extraction workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! borrowed [`GridView`] over a solved potential field, continuous
//! [`Point2D`] coordinates, the uniquely-owned [`PathBuffer`] handed to
//! callers, and the error taxonomy shared by every other crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod path;
pub mod point;

pub use error::{ErrorKind, GradientError, GradientFault, SampleError, TraceError};
pub use grid::GridView;
pub use path::PathBuffer;
pub use point::Point2D;
