//! State assembly.
//!
//! ```text
//! final[p]    = clamp01(base[p] + transit_effect[p] + memory_delta[p])
//! axis_mean[a] = mean(final[p] for p in axis a)
//! ```
//!
//! The transit effect is `bounded_delta * sensitivity` unless the caller
//! supplies it precomputed (after gating or smoothing). Pure; no hidden
//! state.

use serde::{Deserialize, Serialize};

use crate::error::KernelResult;
use crate::schema::{axis_means, clamp01, vector32_from_slice, AxisVector, Vector32, NUM_PARAMETERS};

/// How the transit term reaches the assembler.
#[derive(Debug, Clone, Copy)]
pub enum TransitEffect<'a> {
    /// Bounded delta, weighted by sensitivity inside the assembler.
    FromBounded(&'a Vector32),
    /// Final per-parameter transit term.
    Precomputed(&'a Vector32),
}

/// Output of one assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledState {
    /// 32 parameters in `[0, 1]`.
    pub params: Vector32,
    /// 8 axis means in `[0, 1]`.
    pub axes: AxisVector,
}

impl AssembledState {
    /// Wrap already-clamped parameters and derive their axis means.
    pub fn from_params(params: Vector32) -> Self {
        Self {
            axes: axis_means(&params),
            params,
        }
    }
}

/// Per-parameter transit term: `bounded * sensitivity`.
pub fn transit_effect(bounded: &Vector32, sensitivity: &Vector32) -> Vector32 {
    let mut out = [0.0; NUM_PARAMETERS];
    for (p, slot) in out.iter_mut().enumerate() {
        *slot = bounded[p] * sensitivity[p];
    }
    out
}

/// Assemble the final vector and its axis means.
pub fn assemble(
    base: &Vector32,
    sensitivity: &Vector32,
    transit: TransitEffect<'_>,
    memory_delta: Option<&Vector32>,
) -> AssembledState {
    let effect = match transit {
        TransitEffect::FromBounded(bounded) => transit_effect(bounded, sensitivity),
        TransitEffect::Precomputed(effect) => *effect,
    };
    let mut params = [0.0; NUM_PARAMETERS];
    for (p, slot) in params.iter_mut().enumerate() {
        let memory = memory_delta.map_or(0.0, |m| m[p]);
        *slot = clamp01(base[p] + effect[p] + memory);
    }
    AssembledState::from_params(params)
}

/// [`assemble`] over slices; every length is checked before any work.
pub fn assemble_slices(
    base: &[f64],
    sensitivity: &[f64],
    bounded_delta: &[f64],
    memory_delta: Option<&[f64]>,
) -> KernelResult<AssembledState> {
    let base = vector32_from_slice("base_vector", base)?;
    let sensitivity = vector32_from_slice("sensitivity_vector", sensitivity)?;
    let bounded = vector32_from_slice("bounded_delta", bounded_delta)?;
    let memory = memory_delta
        .map(|m| vector32_from_slice("memory_delta", m))
        .transpose()?;
    Ok(assemble(
        &base,
        &sensitivity,
        TransitEffect::FromBounded(&bounded),
        memory.as_ref(),
    ))
}
