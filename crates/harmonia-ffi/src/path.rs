//! Path extraction FFI: compute, inspect, copy out, and free paths.
//!
//! Finished paths live in a global handle table. The table lock is held
//! only for insertion, lookup, and removal, never while tracing, so
//! independent calls trace concurrently.

use std::sync::Mutex;

use harmonia_core::{PathBuffer, Point2D};
use harmonia_path::{PathTracer, TraceConfig};

use crate::config::HarmoniaTraceConfig;
use crate::grid::{grid_view, HarmoniaGrid};
use crate::handle::HandleTable;
use crate::status::HarmoniaStatus;

static PATHS: Mutex<HandleTable<PathBuffer>> = Mutex::new(HandleTable::new());

/// Trace a path from `(x, y)` with the given step parameters.
///
/// History length, polarity, and edge policy take their defaults; use
/// [`harmonia_compute_path_2d_ex`] to set them.
///
/// `*path_out` must be `0` (an empty slot). On success it receives a
/// non-zero path handle; on failure it is left at `0`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn harmonia_compute_path_2d(
    grid: *const HarmoniaGrid,
    x: f32,
    y: f32,
    step_size: f32,
    cd_precision: f32,
    max_length: usize,
    path_out: *mut u64,
) -> i32 {
    ffi_guard!({
        let config = TraceConfig::default()
            .with_step_size(step_size)
            .with_cd_precision(cd_precision)
            .with_max_length(max_length);
        compute(grid, Point2D::new(x, y), config, path_out)
    })
}

/// Trace a path from `(x, y)` with a full configuration.
///
/// Slot rules as for [`harmonia_compute_path_2d`]. A null `config` is
/// `InvalidData`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn harmonia_compute_path_2d_ex(
    grid: *const HarmoniaGrid,
    x: f32,
    y: f32,
    config: *const HarmoniaTraceConfig,
    path_out: *mut u64,
) -> i32 {
    ffi_guard!({
        if config.is_null() {
            return HarmoniaStatus::InvalidData as i32;
        }
        // SAFETY: config is valid per caller contract.
        let c = unsafe { *config };
        let config = match c.to_trace_config() {
            Ok(c) => c,
            Err(status) => return status as i32,
        };
        compute(grid, Point2D::new(x, y), config, path_out)
    })
}

#[allow(unsafe_code)]
fn compute(
    grid: *const HarmoniaGrid,
    start: Point2D,
    config: TraceConfig,
    path_out: *mut u64,
) -> i32 {
    if path_out.is_null() {
        return HarmoniaStatus::InvalidData as i32;
    }
    // SAFETY: path_out is valid per caller contract.
    if unsafe { *path_out } != 0 {
        log::warn!("compute_path rejected: output slot already holds a path");
        return HarmoniaStatus::InvalidData as i32;
    }

    // SAFETY: grid and its arrays are valid for this call per caller contract.
    let view = match unsafe { grid_view(grid) } {
        Ok(v) => v,
        Err(status) => return status as i32,
    };
    let tracer = match PathTracer::new(config) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("compute_path rejected: {e}");
            return HarmoniaStatus::from(&e) as i32;
        }
    };
    let path = match tracer.trace(&view, start) {
        Ok(p) => p,
        Err(e) => return HarmoniaStatus::from(&e) as i32,
    };

    let mut paths = ffi_lock!(PATHS);
    let handle = paths.insert(path);
    log::trace!("issued path handle {handle:#x} ({} live)", paths.len());
    drop(paths);

    // SAFETY: path_out is valid per caller contract.
    unsafe { *path_out = handle };
    HarmoniaStatus::Ok as i32
}

/// Write the number of waypoints `k` behind `handle` to `k_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn harmonia_path_len(handle: u64, k_out: *mut usize) -> i32 {
    ffi_guard!({
        if k_out.is_null() {
            return HarmoniaStatus::InvalidData as i32;
        }
        let k = match ffi_lock!(PATHS).get(handle) {
            Some(p) => p.len(),
            None => return HarmoniaStatus::InvalidHandle as i32,
        };
        // SAFETY: k_out is valid per caller contract.
        unsafe { *k_out = k };
        HarmoniaStatus::Ok as i32
    })
}

/// Copy the flattened `x0, y0, x1, y1, ...` coordinates behind `handle`
/// into `buf`, which holds `cap` floats.
///
/// `cap` must be at least `2k`; otherwise nothing is written and
/// `BufferTooSmall` is returned.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn harmonia_path_copy(handle: u64, buf: *mut f32, cap: usize) -> i32 {
    ffi_guard!({
        let paths = ffi_lock!(PATHS);
        let coords = match paths.get(handle) {
            Some(p) => p.as_flat(),
            None => return HarmoniaStatus::InvalidHandle as i32,
        };
        if cap < coords.len() {
            return HarmoniaStatus::BufferTooSmall as i32;
        }
        if buf.is_null() {
            return HarmoniaStatus::InvalidData as i32;
        }
        // SAFETY: buf holds cap >= coords.len() floats per caller contract
        // and cannot overlap the table's own allocation.
        let out = unsafe { std::slice::from_raw_parts_mut(buf, coords.len()) };
        out.copy_from_slice(coords);
        HarmoniaStatus::Ok as i32
    })
}

/// Free the path named by `*path` and reset the slot to `0`.
///
/// Always succeeds for a null pointer, an empty slot, or a stale handle,
/// so freeing twice is harmless.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn harmonia_path_free(path: *mut u64) -> i32 {
    ffi_guard!({
        if path.is_null() {
            return HarmoniaStatus::Ok as i32;
        }
        // SAFETY: path is valid per caller contract.
        let handle = unsafe { *path };
        if handle != 0 {
            if ffi_lock!(PATHS).remove(handle).is_none() {
                log::debug!("free of stale path handle {handle:#x} ignored");
            }
            // SAFETY: as above.
            unsafe { *path = 0 };
        }
        HarmoniaStatus::Ok as i32
    })
}
