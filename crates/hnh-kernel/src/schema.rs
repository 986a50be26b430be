//! Canonical 8 × 4 parameter schema.
//!
//! The trait vector holds 32 scalars in `[0, 1]`, grouped into 8 axes of
//! exactly 4 parameters each. The global index of a parameter is
//! `axis * 4 + sub`. Ordering is fixed at compile time and never changes at
//! runtime; reordering would change every replay fingerprint.
//!
//! ```text
//! 0 emotional_tone        warmth, empathy, patience, emotional_intensity
//! 1 stability_regulation  stability, reactivity, resilience, stress_response
//! 2 cognitive_style       analytical_depth, abstraction_level, detail_orientation, big_picture_focus
//! 3 structure_discipline  structure_preference, consistency, rule_adherence, planning_bias
//! 4 communication_style   verbosity, directness, questioning_frequency, explanation_bias
//! 5 teaching_style        correction_intensity, challenge_level, encouragement_level, pacing
//! 6 power_boundaries      authority_presence, dominance, tolerance_for_errors, conflict_tolerance
//! 7 motivation_drive      ambition, curiosity, initiative, persistence
//! ```

use crate::error::{KernelError, KernelResult};

/// Number of axes.
pub const NUM_AXES: usize = 8;

/// Number of parameters per axis.
pub const PARAMS_PER_AXIS: usize = 4;

/// Number of parameters.
pub const NUM_PARAMETERS: usize = NUM_AXES * PARAMS_PER_AXIS;

/// One value per parameter, in canonical order.
pub type Vector32 = [f64; NUM_PARAMETERS];

/// One value per axis, in canonical order.
pub type AxisVector = [f64; NUM_AXES];

/// Canonical axis names.
pub const AXES: [&str; NUM_AXES] = [
    "emotional_tone",
    "stability_regulation",
    "cognitive_style",
    "structure_discipline",
    "communication_style",
    "teaching_style",
    "power_boundaries",
    "motivation_drive",
];

/// Canonical parameter names. Index `i` belongs to axis `i / 4`.
pub const PARAMETERS: [&str; NUM_PARAMETERS] = [
    "warmth",
    "empathy",
    "patience",
    "emotional_intensity",
    "stability",
    "reactivity",
    "resilience",
    "stress_response",
    "analytical_depth",
    "abstraction_level",
    "detail_orientation",
    "big_picture_focus",
    "structure_preference",
    "consistency",
    "rule_adherence",
    "planning_bias",
    "verbosity",
    "directness",
    "questioning_frequency",
    "explanation_bias",
    "correction_intensity",
    "challenge_level",
    "encouragement_level",
    "pacing",
    "authority_presence",
    "dominance",
    "tolerance_for_errors",
    "conflict_tolerance",
    "ambition",
    "curiosity",
    "initiative",
    "persistence",
];

/// Axis index of the stability_regulation axis, source of resilience.
pub const STABILITY_AXIS: usize = 1;

/// Return the canonical axis index for `name`.
pub fn axis_index(name: &str) -> KernelResult<usize> {
    AXES.iter()
        .position(|a| *a == name)
        .ok_or_else(|| KernelError::UnknownAxis(name.to_string()))
}

/// Return the canonical parameter index for `name`.
pub fn parameter_index(name: &str) -> KernelResult<usize> {
    PARAMETERS
        .iter()
        .position(|p| *p == name)
        .ok_or_else(|| KernelError::UnknownParameter(name.to_string()))
}

/// Axis index of parameter `p`.
///
/// # Panics
///
/// Panics if `p >= NUM_PARAMETERS`; indices come from iterating the
/// fixed-size vectors, so an out-of-range index is a programming error.
#[inline]
pub const fn axis_of(p: usize) -> usize {
    assert!(p < NUM_PARAMETERS);
    p / PARAMS_PER_AXIS
}

/// Global parameter indices belonging to axis `a`.
#[inline]
pub fn axis_parameters(a: usize) -> std::ops::Range<usize> {
    let start = a * PARAMS_PER_AXIS;
    start..start + PARAMS_PER_AXIS
}

/// Convert a slice into a [`Vector32`], failing on wrong length.
pub fn vector32_from_slice(what: &str, values: &[f64]) -> KernelResult<Vector32> {
    <Vector32>::try_from(values)
        .map_err(|_| KernelError::length_mismatch(what, NUM_PARAMETERS, values.len()))
}

/// Mean of each axis' 4 parameters.
pub fn axis_means(values: &Vector32) -> AxisVector {
    let mut out = [0.0; NUM_AXES];
    for (a, slot) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for p in axis_parameters(a) {
            sum += values[p];
        }
        *slot = sum / PARAMS_PER_AXIS as f64;
    }
    out
}

/// Clamp into `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Check that every entry lies in `[0, 1]` and is finite.
pub fn ensure_unit_range(what: &str, values: &Vector32) -> KernelResult<()> {
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() || !(0.0..=1.0).contains(v) {
            return Err(KernelError::out_of_range(
                format!("{}[{}]", what, i),
                v,
                "must be finite and in [0, 1]",
            ));
        }
    }
    Ok(())
}
