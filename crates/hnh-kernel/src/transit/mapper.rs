//! Aspect → raw delta mapping.
//!
//! ```text
//! raw[p] += weight[aspect][p] * intensity * amplification
//! ```
//!
//! only for parameters whose axis is reachable from one of the aspect's two
//! bodies. Contributions are added strictly in input order.

use tracing::warn;

use crate::config::{AspectWeightTable, BodyAmplification, MapperConfig, OrbConfig};
use crate::error::KernelResult;
use crate::schema::{axis_parameters, Vector32, NUM_AXES, NUM_PARAMETERS};

use super::aspect::{AspectRecord, Body};

/// Axes each body reaches. Bodies outside this table reach nothing.
pub fn body_axes(body: Body) -> &'static [usize] {
    // 0 emotional_tone, 1 stability_regulation, 2 cognitive_style,
    // 3 structure_discipline, 4 communication_style, 5 teaching_style,
    // 6 power_boundaries, 7 motivation_drive
    match body {
        Body::Sun => &[7, 6],
        Body::Moon => &[0, 1],
        Body::Mercury => &[2, 4],
        Body::Venus => &[0, 4],
        Body::Mars => &[6, 7],
        Body::Jupiter => &[5, 7],
        Body::Saturn => &[3, 1],
        Body::Uranus => &[2],
        Body::Neptune => &[0],
        Body::Pluto => &[6],
    }
}

/// Linear orb falloff: 1 at exact, 0 at the orb edge and beyond.
///
/// A non-finite separation yields 0.
pub fn intensity(aspect: &AspectRecord, orb: f64) -> f64 {
    if !aspect.separation.is_finite() {
        warn!(
            body_a = %aspect.body_a,
            body_b = %aspect.body_b,
            "Non-finite aspect separation, using intensity 0"
        );
        return 0.0;
    }
    (1.0 - aspect.deviation() / orb).max(0.0)
}

/// Union of the axes reachable from an aspect's two bodies.
pub fn reachable_axes(aspect: &AspectRecord) -> [bool; NUM_AXES] {
    let mut mask = [false; NUM_AXES];
    let (a, b) = aspect.bodies();
    for body in [a, b].into_iter().flatten() {
        for &axis in body_axes(body) {
            mask[axis] = true;
        }
    }
    mask
}

/// Amplification for an aspect: the larger of its bodies' class factors.
/// Aspects with no known body are not amplified.
pub fn amplification(aspect: &AspectRecord, factors: &BodyAmplification) -> f64 {
    let (a, b) = aspect.bodies();
    [a, b]
        .into_iter()
        .flatten()
        .map(|body| factors.factor(body.class()))
        .fold(1.0, f64::max)
}

/// Maps ordered aspect lists to a 32-entry raw delta.
#[derive(Debug, Clone)]
pub struct TransitDeltaMapper {
    orbs: OrbConfig,
    amplification: BodyAmplification,
    weights: AspectWeightTable,
}

impl TransitDeltaMapper {
    /// Build a mapper, resolving weight names once.
    pub fn new(config: &MapperConfig) -> KernelResult<Self> {
        config.validate()?;
        Ok(Self {
            orbs: config.orbs.clone(),
            amplification: config.amplification.clone(),
            weights: config.weight_table()?,
        })
    }

    /// Orbs in use.
    pub fn orbs(&self) -> &OrbConfig {
        &self.orbs
    }

    /// Raw delta for `aspects`, accumulated in input order.
    pub fn map(&self, aspects: &[AspectRecord]) -> Vector32 {
        let mut raw = [0.0; NUM_PARAMETERS];
        for aspect in aspects {
            self.accumulate(aspect, &mut raw);
        }
        raw
    }

    /// Add a single aspect's contribution to `raw`.
    pub fn accumulate(&self, aspect: &AspectRecord, raw: &mut Vector32) {
        let reach = reachable_axes(aspect);
        if !reach.iter().any(|r| *r) {
            return;
        }
        let strength = intensity(aspect, self.orbs.orb(aspect.aspect))
            * amplification(aspect, &self.amplification);
        if strength == 0.0 {
            return;
        }
        let weights = &self.weights[aspect.aspect.index()];
        for (axis, reachable) in reach.iter().enumerate() {
            if !reachable {
                continue;
            }
            for p in axis_parameters(axis) {
                raw[p] += weights[p] * strength;
            }
        }
    }
}
