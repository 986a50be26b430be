//! Delta-bound resolution.
//!
//! Resolves each parameter's bound through the override hierarchy and clamps
//! the raw transit delta into it:
//!
//! ```text
//! effective[p] = resolve(p) * (shock_multiplier if shock_active else 1)
//! bounded[p]   = clamp(raw[p], -effective[p], +effective[p])
//! ```
//!
//! All functions are pure.

use tracing::debug;

use crate::config::DeltaBoundConfig;
use crate::error::KernelResult;
use crate::schema::{axis_of, vector32_from_slice, Vector32, NUM_PARAMETERS};

/// Bound for parameter `p`: parameter override, else axis override, else global.
#[inline]
pub fn resolve_max_delta(p: usize, config: &DeltaBoundConfig, axis: usize) -> f64 {
    config
        .parameter_override(p)
        .or_else(|| config.axis_override(axis))
        .unwrap_or_else(|| config.global_max_delta())
}

/// Shock is active once stress reaches the threshold.
#[inline]
pub fn is_shock_active(stress: f64, config: &DeltaBoundConfig) -> bool {
    stress >= config.shock_threshold()
}

/// Per-parameter effective bounds.
pub fn effective_max_delta(config: &DeltaBoundConfig, shock_active: bool) -> Vector32 {
    let multiplier = if shock_active {
        config.shock_multiplier()
    } else {
        1.0
    };
    let mut out = [0.0; NUM_PARAMETERS];
    for (p, slot) in out.iter_mut().enumerate() {
        *slot = resolve_max_delta(p, config, axis_of(p)) * multiplier;
    }
    out
}

/// Clamp a raw delta into its effective bounds.
///
/// Returns `(bounded_delta, effective_max_delta)`.
pub fn apply_bounds(
    raw_delta: &Vector32,
    config: &DeltaBoundConfig,
    shock_active: bool,
) -> (Vector32, Vector32) {
    let effective = effective_max_delta(config, shock_active);
    let mut bounded = [0.0; NUM_PARAMETERS];
    for p in 0..NUM_PARAMETERS {
        bounded[p] = raw_delta[p].clamp(-effective[p], effective[p]);
    }
    if shock_active {
        debug!(
            multiplier = config.shock_multiplier(),
            "shock active, bounds widened"
        );
    }
    (bounded, effective)
}

/// [`apply_bounds`] over a slice; fails on wrong length before computing anything.
pub fn apply_bounds_slice(
    raw_delta: &[f64],
    config: &DeltaBoundConfig,
    shock_active: bool,
) -> KernelResult<(Vector32, Vector32)> {
    let raw = vector32_from_slice("raw_delta", raw_delta)?;
    Ok(apply_bounds(&raw, config, shock_active))
}
