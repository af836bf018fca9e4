//! C-compatible status codes.
//!
//! [`HarmoniaStatus`] is a `repr(i32)` enum returned by every FFI
//! function. Conversions from the Rust error types are provided.

use harmonia_core::{ErrorKind, TraceError};
use harmonia_path::ConfigError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarmoniaStatus {
    /// Success.
    Ok = 0,
    /// Grid data or an output pointer is null or malformed, or the output
    /// slot already holds a path.
    InvalidData = -1,
    /// The start point is out of bounds or on an obstacle.
    InvalidLocation = -2,
    /// A gradient could not be computed along the trace.
    InvalidGradient = -3,
    /// The trace ended with two or fewer waypoints.
    InvalidPath = -4,
    /// Path handle is invalid or was already freed.
    InvalidHandle = -5,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -6,
    /// Trace configuration failed validation.
    ConfigError = -7,
    /// Internal error (poisoned handle table after a prior panic).
    InternalError = -8,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<ErrorKind> for HarmoniaStatus {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidData => HarmoniaStatus::InvalidData,
            ErrorKind::InvalidLocation => HarmoniaStatus::InvalidLocation,
            ErrorKind::InvalidGradient => HarmoniaStatus::InvalidGradient,
            ErrorKind::InvalidPath => HarmoniaStatus::InvalidPath,
        }
    }
}

impl From<&TraceError> for HarmoniaStatus {
    fn from(e: &TraceError) -> Self {
        HarmoniaStatus::from(e.kind())
    }
}

impl From<&ConfigError> for HarmoniaStatus {
    fn from(_e: &ConfigError) -> Self {
        HarmoniaStatus::ConfigError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_core::{GradientError, GradientFault};

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(HarmoniaStatus::Ok as i32, 0);
        assert_eq!(HarmoniaStatus::InvalidData as i32, -1);
        assert_eq!(HarmoniaStatus::InvalidLocation as i32, -2);
        assert_eq!(HarmoniaStatus::InvalidGradient as i32, -3);
        assert_eq!(HarmoniaStatus::InvalidPath as i32, -4);
        assert_eq!(HarmoniaStatus::InvalidHandle as i32, -5);
        assert_eq!(HarmoniaStatus::BufferTooSmall as i32, -6);
        assert_eq!(HarmoniaStatus::ConfigError as i32, -7);
        assert_eq!(HarmoniaStatus::InternalError as i32, -8);
    }

    #[test]
    fn panicked_status_is_negative_128() {
        assert_eq!(HarmoniaStatus::Panicked as i32, -128);
    }

    #[test]
    fn trace_error_to_status() {
        assert_eq!(
            HarmoniaStatus::from(&TraceError::InvalidData { reason: "x".into() }),
            HarmoniaStatus::InvalidData
        );
        assert_eq!(
            HarmoniaStatus::from(&TraceError::InvalidLocation { x: 1.0, y: 2.0 }),
            HarmoniaStatus::InvalidLocation
        );
        assert_eq!(
            HarmoniaStatus::from(&TraceError::InvalidGradient(GradientError {
                x: 0.0,
                y: 0.0,
                cause: GradientFault::FlatField,
            })),
            HarmoniaStatus::InvalidGradient
        );
        assert_eq!(
            HarmoniaStatus::from(&TraceError::InvalidPath { waypoints: 2 }),
            HarmoniaStatus::InvalidPath
        );
    }

    #[test]
    fn config_error_to_status() {
        assert_eq!(
            HarmoniaStatus::from(&ConfigError::InvalidPrecision { value: 0.0 }),
            HarmoniaStatus::ConfigError
        );
    }
}
