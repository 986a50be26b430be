//! Transit stress from hard aspects.
//!
//! ```text
//! I_T = sum(hard_weight * orb_decay)   over hard aspects, input order
//! S_T = clamp(I_T / C_T, 0, 1)
//! ```

use crate::config::{LifecycleConstants, OrbConfig};

use super::aspect::AspectRecord;
use super::mapper::intensity;

/// Raw transit intensity `I_T`.
pub fn raw_transit_intensity(
    aspects: &[AspectRecord],
    orbs: &OrbConfig,
    hard_aspect_weight: f64,
) -> f64 {
    let mut total = 0.0;
    for aspect in aspects.iter().filter(|a| a.aspect.is_hard()) {
        total += hard_aspect_weight * intensity(aspect, orbs.orb(aspect.aspect));
    }
    total
}

/// Normalised transit stress `S_T` in `[0, 1]`.
pub fn transit_stress(aspects: &[AspectRecord], orbs: &OrbConfig, constants: &LifecycleConstants) -> f64 {
    let raw = raw_transit_intensity(aspects, orbs, constants.hard_aspect_weight);
    (raw / constants.c_t).clamp(0.0, 1.0)
}
