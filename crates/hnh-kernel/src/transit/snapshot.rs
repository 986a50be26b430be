//! Per-tick transit product.

use serde::{Deserialize, Serialize};

use crate::bounds::{apply_bounds, is_shock_active};
use crate::config::{DeltaBoundConfig, LifecycleConstants};
use crate::schema::Vector32;

use super::aspect::AspectRecord;
use super::mapper::TransitDeltaMapper;
use super::stress::transit_stress;

/// Stress plus the raw and bounded deltas of one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSnapshot {
    /// Normalised transit stress in `[0, 1]`.
    pub stress: f64,
    /// Whether bounds were widened this tick.
    pub shock_active: bool,
    /// Unbounded mapper output.
    pub raw_delta: Vector32,
    /// `raw_delta` clamped into `effective_max_delta`.
    pub bounded_delta: Vector32,
    /// Resolved per-parameter bounds.
    pub effective_max_delta: Vector32,
}

impl TransitSnapshot {
    /// Map, measure and bound one tick's aspects.
    pub fn compute(
        aspects: &[AspectRecord],
        mapper: &TransitDeltaMapper,
        bounds: &DeltaBoundConfig,
        constants: &LifecycleConstants,
    ) -> Self {
        let raw_delta = mapper.map(aspects);
        let stress = transit_stress(aspects, mapper.orbs(), constants);
        Self::from_raw(raw_delta, stress, bounds)
    }

    /// Bound an already computed raw delta.
    pub fn from_raw(raw_delta: Vector32, stress: f64, bounds: &DeltaBoundConfig) -> Self {
        let shock_active = is_shock_active(stress, bounds);
        let (bounded_delta, effective_max_delta) = apply_bounds(&raw_delta, bounds, shock_active);
        Self {
            stress,
            shock_active,
            raw_delta,
            bounded_delta,
            effective_max_delta,
        }
    }
}
