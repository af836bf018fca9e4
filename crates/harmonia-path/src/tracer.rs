//! The gradient-following tracer.

use std::fmt;

use harmonia_core::{GridView, PathBuffer, Point2D, TraceError};
use harmonia_field::{GradientEstimator, PotentialSampler};
use log::{debug, trace, warn};

use crate::config::{ConfigError, TraceConfig};
use crate::stuck::StuckDetector;
use crate::trace::Trace;

/// Initial waypoint reservation; the trace grows past this as needed.
const INITIAL_CAPACITY: usize = 1024;

/// Why a successful trace stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The newest waypoint lies on a locked cell (goal or obstacle).
    ReachedLockedCell,
    /// The newest waypoint revisited a recent one.
    Stuck,
    /// The trace reached `max_length` waypoints.
    LengthCap,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReachedLockedCell => write!(f, "reached locked cell"),
            Self::Stuck => write!(f, "stuck"),
            Self::LengthCap => write!(f, "length cap"),
        }
    }
}

/// A successful trace together with how it ended.
#[derive(Debug, PartialEq)]
pub struct TraceOutcome {
    /// The finished path, start point first.
    pub path: PathBuffer,
    /// Which stopping condition fired.
    pub termination: Termination,
    /// Number of gradient estimates taken.
    pub gradient_evaluations: usize,
}

/// Extracts paths from a solved potential field.
///
/// Holds only validated configuration, so one tracer can be shared across
/// threads and used against any number of grids.
///
/// # Examples
///
/// ```
/// use harmonia_core::{GridView, Point2D};
/// use harmonia_path::{PathTracer, TraceConfig};
///
/// // 3 rows by 6 cols, u = col, last column locked as the goal.
/// let mut u = Vec::new();
/// let mut locked = Vec::new();
/// for _ in 0..3 {
///     for c in 0..6 {
///         u.push(c as f32);
///         locked.push(c == 5);
///     }
/// }
/// let grid = GridView::new([3, 6], &u, &locked).unwrap();
/// let tracer = PathTracer::new(TraceConfig::default().with_step_size(0.5)).unwrap();
/// let path = tracer.trace(&grid, Point2D::new(1.0, 1.0)).unwrap();
/// assert_eq!(path.last(), Some(Point2D::new(4.5, 1.0)));
/// ```
#[derive(Clone, Debug)]
pub struct PathTracer {
    config: TraceConfig,
    stuck: StuckDetector,
}

impl PathTracer {
    /// Create a tracer, validating `config`.
    pub fn new(config: TraceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let stuck = StuckDetector::new(config.history_length);
        Ok(Self { config, stuck })
    }

    /// The active configuration.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Trace a path from `start` and return it.
    ///
    /// # Errors
    ///
    /// * `InvalidLocation` if `start` is out of bounds or on an obstacle.
    /// * `InvalidGradient` if any gradient estimate fails along the way.
    /// * `InvalidPath` if the trace ends with two or fewer waypoints.
    ///
    /// No partial path is returned on failure.
    pub fn trace(&self, grid: &GridView<'_>, start: Point2D) -> Result<PathBuffer, TraceError> {
        self.trace_detailed(grid, start).map(|outcome| outcome.path)
    }

    /// Trace into a caller-owned slot.
    ///
    /// The slot must be empty. On success it holds the path; on failure it
    /// is left empty.
    ///
    /// # Errors
    ///
    /// `InvalidData` if `slot` already holds a path, otherwise as
    /// [`trace`](Self::trace).
    pub fn trace_into(
        &self,
        grid: &GridView<'_>,
        start: Point2D,
        slot: &mut Option<PathBuffer>,
    ) -> Result<(), TraceError> {
        if slot.is_some() {
            let e = TraceError::InvalidData {
                reason: "output slot already holds a path".into(),
            };
            warn!("trace rejected: {e}");
            return Err(e);
        }
        *slot = Some(self.trace(grid, start)?);
        Ok(())
    }

    /// Trace a path and report why it stopped.
    ///
    /// # Errors
    ///
    /// As [`trace`](Self::trace).
    pub fn trace_detailed(
        &self,
        grid: &GridView<'_>,
        start: Point2D,
    ) -> Result<TraceOutcome, TraceError> {
        let cfg = &self.config;

        if let Err(e) = grid.check_location(start) {
            let e = TraceError::from(e);
            warn!("trace rejected: {e}");
            return Err(e);
        }
        debug!(
            "tracing from {start} on {}x{} grid, step {} h {}",
            grid.rows(),
            grid.cols(),
            cfg.step_size,
            cfg.cd_precision
        );

        let sampler = PotentialSampler::with_edge_policy(*grid, cfg.edge_policy);
        let estimator = GradientEstimator::new(sampler, cfg.cd_precision);

        let mut path = Trace::with_capacity(start, cfg.max_length.min(INITIAL_CAPACITY));
        let mut pos = start;
        let mut gradient_evaluations = 0;

        let termination = loop {
            if grid.is_locked_at(pos) {
                break Termination::ReachedLockedCell;
            }
            if self.stuck.is_stuck(path.as_flat(), cfg.step_size) {
                break Termination::Stuck;
            }
            if path.len() >= cfg.max_length {
                break Termination::LengthCap;
            }

            let dir = match estimator.direction(pos) {
                Ok(d) => cfg.polarity.apply(d),
                Err(e) => {
                    let e = TraceError::InvalidGradient(e);
                    warn!("trace from {start} failed after {} waypoints: {e}", path.len());
                    return Err(e);
                }
            };
            gradient_evaluations += 1;

            pos = pos.offset(dir.dx, dir.dy, cfg.step_size);
            path.push(pos);
            trace!("waypoint {}: {pos}", path.len() - 1);
        };

        let waypoints = path.len();
        if waypoints <= 2 {
            let e = TraceError::InvalidPath { waypoints };
            warn!("trace from {start} failed ({termination}): {e}");
            return Err(e);
        }

        debug!("trace from {start} finished ({termination}) with {waypoints} waypoints");
        Ok(TraceOutcome {
            path: path.into_path()?,
            termination,
            gradient_evaluations,
        })
    }
}

/// Release whatever path `slot` holds and leave it empty.
///
/// Releasing an empty slot is a no-op, so calling this twice is harmless.
pub fn release(slot: &mut Option<PathBuffer>) {
    if slot.take().is_some() {
        trace!("released path");
    }
}
