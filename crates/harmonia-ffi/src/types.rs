//! C-compatible enums for tracer options.

use harmonia_field::{EdgePolicy, GradientPolarity};

/// Whether the tracer follows or negates the raw gradient.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarmoniaPolarity {
    /// Climb toward higher potential (goal pinned at the maximum).
    Ascend = 0,
    /// Descend toward lower potential (goal pinned at the minimum).
    Descend = 1,
}

/// How interpolation treats corners past the grid edge.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarmoniaEdgePolicy {
    /// Clamp out-of-range corners to the nearest edge cell.
    Clamp = 0,
    /// Reject samples whose corners fall outside the grid.
    Reject = 1,
}

pub(crate) fn parse_polarity(v: i32) -> Option<GradientPolarity> {
    match v {
        x if x == HarmoniaPolarity::Ascend as i32 => Some(GradientPolarity::Ascend),
        x if x == HarmoniaPolarity::Descend as i32 => Some(GradientPolarity::Descend),
        _ => None,
    }
}

pub(crate) fn parse_edge_policy(v: i32) -> Option<EdgePolicy> {
    match v {
        x if x == HarmoniaEdgePolicy::Clamp as i32 => Some(EdgePolicy::Clamp),
        x if x == HarmoniaEdgePolicy::Reject as i32 => Some(EdgePolicy::Reject),
        _ => None,
    }
}

pub(crate) fn polarity_code(p: GradientPolarity) -> i32 {
    match p {
        GradientPolarity::Ascend => HarmoniaPolarity::Ascend as i32,
        GradientPolarity::Descend => HarmoniaPolarity::Descend as i32,
    }
}

pub(crate) fn edge_policy_code(e: EdgePolicy) -> i32 {
    match e {
        EdgePolicy::Clamp => HarmoniaEdgePolicy::Clamp as i32,
        EdgePolicy::Reject => HarmoniaEdgePolicy::Reject as i32,
    }
}
