//! Full tracer configuration for C callers.

use harmonia_path::TraceConfig;

use crate::status::HarmoniaStatus;
use crate::types::{edge_policy_code, parse_edge_policy, parse_polarity, polarity_code};

/// C mirror of [`TraceConfig`].
///
/// `polarity` holds a [`HarmoniaPolarity`](crate::HarmoniaPolarity) code
/// and `edge_policy` a [`HarmoniaEdgePolicy`](crate::HarmoniaEdgePolicy)
/// code. Obtain defaults from [`harmonia_trace_config_default`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmoniaTraceConfig {
    /// Distance advanced per step, in cells.
    pub step_size: f32,
    /// Central-difference offset.
    pub cd_precision: f32,
    /// Maximum number of waypoints, start included.
    pub max_length: usize,
    /// Stuck-detection window.
    pub history_length: usize,
    /// Gradient polarity code.
    pub polarity: i32,
    /// Edge policy code.
    pub edge_policy: i32,
}

impl From<&TraceConfig> for HarmoniaTraceConfig {
    fn from(c: &TraceConfig) -> Self {
        Self {
            step_size: c.step_size,
            cd_precision: c.cd_precision,
            max_length: c.max_length,
            history_length: c.history_length,
            polarity: polarity_code(c.polarity),
            edge_policy: edge_policy_code(c.edge_policy),
        }
    }
}

impl HarmoniaTraceConfig {
    /// Convert to a validated [`TraceConfig`].
    ///
    /// Unknown enum codes and out-of-range values are `ConfigError`.
    pub fn to_trace_config(&self) -> Result<TraceConfig, HarmoniaStatus> {
        let polarity = parse_polarity(self.polarity).ok_or(HarmoniaStatus::ConfigError)?;
        let edge_policy =
            parse_edge_policy(self.edge_policy).ok_or(HarmoniaStatus::ConfigError)?;
        let config = TraceConfig {
            step_size: self.step_size,
            cd_precision: self.cd_precision,
            max_length: self.max_length,
            history_length: self.history_length,
            polarity,
            edge_policy,
        };
        config.validate().map_err(|e| {
            log::warn!("rejected trace config: {e}");
            HarmoniaStatus::from(&e)
        })?;
        Ok(config)
    }
}

/// Write the default configuration to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn harmonia_trace_config_default(out: *mut HarmoniaTraceConfig) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return HarmoniaStatus::InvalidData as i32;
        }
        // SAFETY: out is valid per caller contract.
        unsafe { *out = HarmoniaTraceConfig::from(&TraceConfig::default()) };
        HarmoniaStatus::Ok as i32
    })
}
