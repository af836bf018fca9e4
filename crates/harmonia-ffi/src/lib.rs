//! C ABI for Harmonia path extraction.
//!
//! Every entry point returns an `i32` [`HarmoniaStatus`] code and catches
//! panics at the boundary. Finished paths are held in a process-wide
//! handle table and named by opaque `u64` handles; `0` is never a valid
//! handle and marks an empty output slot. This is the only crate in the
//! workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
// Entry points take raw pointers from C and null-check them before use.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

#[macro_use]
mod macros;

pub mod config;
pub mod grid;
mod handle;
pub mod path;
pub mod status;
pub mod types;

pub use config::{harmonia_trace_config_default, HarmoniaTraceConfig};
pub use grid::HarmoniaGrid;
pub use path::{
    harmonia_compute_path_2d, harmonia_compute_path_2d_ex, harmonia_path_copy,
    harmonia_path_free, harmonia_path_len,
};
pub use status::HarmoniaStatus;
pub use types::{HarmoniaEdgePolicy, HarmoniaPolarity};
