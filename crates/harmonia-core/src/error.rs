//! Error types for path extraction.
//!
//! Four failure kinds surface to callers ([`ErrorKind`]). Each stage has its
//! own enum carrying the detail for that stage; conversions fold sampler and
//! gradient failures into [`TraceError`] as the tracer propagates them.

use std::error::Error;
use std::fmt;

/// The bare failure kind, without detail.
///
/// Every error in this crate maps onto exactly one kind via `kind()`.
/// The C boundary turns these into stable status codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Grid arrays are absent or malformed, or the output slot is occupied.
    InvalidData,
    /// A point rounds to a cell outside the grid, or onto an obstacle.
    InvalidLocation,
    /// A gradient estimate could not be formed.
    InvalidGradient,
    /// The finished trace is too short to be a path.
    InvalidPath,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidData => write!(f, "invalid data"),
            Self::InvalidLocation => write!(f, "invalid location"),
            Self::InvalidGradient => write!(f, "invalid gradient"),
            Self::InvalidPath => write!(f, "invalid path"),
        }
    }
}

/// Errors from sampling the potential field at a point.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleError {
    /// Grid arrays are missing or do not match the dimensions.
    InvalidData {
        /// What is wrong with the grid.
        reason: String,
    },
    /// The point rounds outside the grid, onto a locked cell holding a
    /// negative potential, or is not finite.
    InvalidLocation {
        /// Column coordinate of the rejected point.
        x: f32,
        /// Row coordinate of the rejected point.
        y: f32,
    },
}

impl SampleError {
    /// The failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidData { .. } => ErrorKind::InvalidData,
            Self::InvalidLocation { .. } => ErrorKind::InvalidLocation,
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidData { reason } => write!(f, "invalid data: {reason}"),
            Self::InvalidLocation { x, y } => write!(f, "invalid location ({x}, {y})"),
        }
    }
}

impl Error for SampleError {}

/// Why a gradient estimate failed.
#[derive(Clone, Debug, PartialEq)]
pub enum GradientFault {
    /// One of the four central-difference samples failed.
    Sample(SampleError),
    /// The samples were valid but the difference vector has zero or
    /// non-finite length, so it has no direction.
    FlatField,
}

/// A gradient could not be estimated at `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientError {
    /// Column coordinate of the evaluation point.
    pub x: f32,
    /// Row coordinate of the evaluation point.
    pub y: f32,
    /// The underlying failure.
    pub cause: GradientFault,
}

impl GradientError {
    /// Always [`ErrorKind::InvalidGradient`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidGradient
    }
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            GradientFault::Sample(e) => write!(
                f,
                "failed to compute potential values around ({}, {}): {e}",
                self.x, self.y
            ),
            GradientFault::FlatField => {
                write!(f, "gradient at ({}, {}) has no direction", self.x, self.y)
            }
        }
    }
}

impl Error for GradientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            GradientFault::Sample(e) => Some(e),
            GradientFault::FlatField => None,
        }
    }
}

/// Errors from tracing a path.
///
/// No partial path accompanies any of these: a failed trace yields nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceError {
    /// Grid data is malformed, or the output slot already holds a path.
    InvalidData {
        /// What is wrong.
        reason: String,
    },
    /// The start point is not a valid location.
    InvalidLocation {
        /// Column coordinate of the start point.
        x: f32,
        /// Row coordinate of the start point.
        y: f32,
    },
    /// A gradient evaluation failed mid-trace.
    InvalidGradient(GradientError),
    /// The trace ended with too few waypoints to be a path.
    InvalidPath {
        /// Number of waypoints the trace held.
        waypoints: usize,
    },
}

impl TraceError {
    /// The failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidData { .. } => ErrorKind::InvalidData,
            Self::InvalidLocation { .. } => ErrorKind::InvalidLocation,
            Self::InvalidGradient(_) => ErrorKind::InvalidGradient,
            Self::InvalidPath { .. } => ErrorKind::InvalidPath,
        }
    }
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidData { reason } => write!(f, "invalid data: {reason}"),
            Self::InvalidLocation { x, y } => write!(f, "invalid start location ({x}, {y})"),
            Self::InvalidGradient(e) => write!(f, "could not compute gradient: {e}"),
            Self::InvalidPath { waypoints } => {
                write!(f, "could not compute a valid path: {waypoints} waypoint(s)")
            }
        }
    }
}

impl Error for TraceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGradient(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GradientError> for TraceError {
    fn from(e: GradientError) -> Self {
        Self::InvalidGradient(e)
    }
}

impl From<SampleError> for TraceError {
    fn from(e: SampleError) -> Self {
        match e {
            SampleError::InvalidData { reason } => Self::InvalidData { reason },
            SampleError::InvalidLocation { x, y } => Self::InvalidLocation { x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_one_to_one() {
        let data = SampleError::InvalidData {
            reason: "x".into(),
        };
        let loc = SampleError::InvalidLocation { x: 1.0, y: 2.0 };
        assert_eq!(data.kind(), ErrorKind::InvalidData);
        assert_eq!(loc.kind(), ErrorKind::InvalidLocation);

        let grad = GradientError {
            x: 0.0,
            y: 0.0,
            cause: GradientFault::FlatField,
        };
        assert_eq!(grad.kind(), ErrorKind::InvalidGradient);
        assert_eq!(
            TraceError::from(grad).kind(),
            ErrorKind::InvalidGradient
        );
        assert_eq!(
            TraceError::InvalidPath { waypoints: 2 }.kind(),
            ErrorKind::InvalidPath
        );
    }

    #[test]
    fn sample_error_folds_into_trace_error() {
        let e = TraceError::from(SampleError::InvalidLocation { x: -3.0, y: 1.0 });
        assert_eq!(e, TraceError::InvalidLocation { x: -3.0, y: 1.0 });

        let e = TraceError::from(SampleError::InvalidData {
            reason: "short".into(),
        });
        assert_eq!(e.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn gradient_error_exposes_sample_source() {
        let e = GradientError {
            x: 1.0,
            y: 1.0,
            cause: GradientFault::Sample(SampleError::InvalidLocation { x: 0.4, y: 1.0 }),
        };
        assert!(e.source().is_some());
        let trace = TraceError::from(e);
        let source = trace.source().unwrap();
        assert!(source.source().is_some());
    }

    #[test]
    fn display_mentions_location() {
        let e = SampleError::InvalidLocation { x: 7.5, y: -1.0 };
        let msg = e.to_string();
        assert!(msg.contains("7.5"), "got: {msg}");
        assert!(msg.contains("-1"), "got: {msg}");
    }
}
