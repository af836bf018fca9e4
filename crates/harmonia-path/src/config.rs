//! Tracer configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use harmonia_field::{EdgePolicy, GradientPolarity};

use crate::stuck::DEFAULT_HISTORY_LENGTH;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TraceConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `step_size` is NaN, infinite, zero, or negative.
    InvalidStepSize {
        /// The invalid value.
        value: f32,
    },
    /// `cd_precision` is NaN, infinite, zero, or negative.
    InvalidPrecision {
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepSize { value } => {
                write!(f, "step_size must be finite and positive, got {value}")
            }
            Self::InvalidPrecision { value } => {
                write!(f, "cd_precision must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── TraceConfig ────────────────────────────────────────────────────

/// Parameters for a [`PathTracer`](crate::PathTracer).
#[derive(Clone, Debug, PartialEq)]
pub struct TraceConfig {
    /// Distance advanced per step, in cells. Default: 0.05.
    pub step_size: f32,
    /// Central-difference offset `h` for gradient estimates. Default: 0.5.
    pub cd_precision: f32,
    /// Maximum number of waypoints, start included. Default: 100 000.
    ///
    /// Any value is accepted; a cap of 2 or less always ends in
    /// `InvalidPath`.
    pub max_length: usize,
    /// How many preceding points the stuck check compares against.
    /// Default: [`DEFAULT_HISTORY_LENGTH`].
    pub history_length: usize,
    /// Follow or negate the raw gradient. Default: `Ascend`.
    pub polarity: GradientPolarity,
    /// Interpolation corners past the grid edge. Default: `Clamp`.
    pub edge_policy: EdgePolicy,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            step_size: 0.05,
            cd_precision: 0.5,
            max_length: 100_000,
            history_length: DEFAULT_HISTORY_LENGTH,
            polarity: GradientPolarity::Ascend,
            edge_policy: EdgePolicy::Clamp,
        }
    }
}

impl TraceConfig {
    /// Set the step size.
    pub fn with_step_size(mut self, step_size: f32) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the central-difference offset.
    pub fn with_cd_precision(mut self, cd_precision: f32) -> Self {
        self.cd_precision = cd_precision;
        self
    }

    /// Set the waypoint cap.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the stuck-detection window.
    pub fn with_history_length(mut self, history_length: usize) -> Self {
        self.history_length = history_length;
        self
    }

    /// Set the gradient polarity.
    pub fn with_polarity(mut self, polarity: GradientPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Set the edge policy.
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::InvalidStepSize {
                value: self.step_size,
            });
        }
        if !self.cd_precision.is_finite() || self.cd_precision <= 0.0 {
            return Err(ConfigError::InvalidPrecision {
                value: self.cd_precision,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        let cfg = TraceConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.history_length, DEFAULT_HISTORY_LENGTH);
        assert_eq!(cfg.polarity, GradientPolarity::Ascend);
        assert_eq!(cfg.edge_policy, EdgePolicy::Clamp);
    }

    #[test]
    fn rejects_bad_step_size() {
        for v in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = TraceConfig::default().with_step_size(v).validate();
            assert!(
                matches!(err, Err(ConfigError::InvalidStepSize { .. })),
                "step_size {v}"
            );
        }
    }

    #[test]
    fn rejects_bad_precision() {
        let err = TraceConfig::default().with_cd_precision(0.0).validate();
        assert!(matches!(err, Err(ConfigError::InvalidPrecision { .. })));
    }

    #[test]
    fn any_max_length_validates() {
        for n in [0, 1, 2, usize::MAX] {
            assert!(TraceConfig::default().with_max_length(n).validate().is_ok());
        }
    }

    #[test]
    fn builder_setters_apply() {
        let cfg = TraceConfig::default()
            .with_step_size(0.25)
            .with_cd_precision(0.1)
            .with_max_length(7)
            .with_history_length(2)
            .with_polarity(GradientPolarity::Descend)
            .with_edge_policy(EdgePolicy::Reject);
        assert_eq!(cfg.step_size, 0.25);
        assert_eq!(cfg.cd_precision, 0.1);
        assert_eq!(cfg.max_length, 7);
        assert_eq!(cfg.history_length, 2);
        assert_eq!(cfg.polarity, GradientPolarity::Descend);
        assert_eq!(cfg.edge_policy, EdgePolicy::Reject);
    }
}
