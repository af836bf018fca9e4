//! Path extraction from solved harmonic potential fields.
//!
//! [`PathTracer`] walks from a start point along the normalized gradient
//! in fixed steps, consulting a [`StuckDetector`] after every step, until
//! the trace reaches a locked cell, stalls, or reaches its length cap. The
//! finished trace is handed back as an owned
//! [`PathBuffer`](harmonia_core::PathBuffer).
//!
//! # Termination (checked in order before each step)
//!
//! 1. The current cell is locked (goal or obstacle reached).
//! 2. The trace is stuck: the newest point is within `step_size / 2` of
//!    one of the preceding `history_length` points.
//! 3. The trace holds `max_length` waypoints.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod stuck;
pub mod trace;
pub mod tracer;

pub use config::{ConfigError, TraceConfig};
pub use stuck::{StuckDetector, DEFAULT_HISTORY_LENGTH};
pub use trace::Trace;
pub use tracer::{release, PathTracer, Termination, TraceOutcome};
