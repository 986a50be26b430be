//! Phase smoothing of the daily transit effect.

use serde::{Deserialize, Serialize};

use crate::config::PhaseConfig;
use crate::schema::{Vector32, NUM_PARAMETERS};

/// Carried phase accumulator. O(1) per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseState {
    phase: Vector32,
}

impl Default for PhaseState {
    fn default() -> Self {
        Self {
            phase: [0.0; NUM_PARAMETERS],
        }
    }
}

impl PhaseState {
    /// Fresh accumulator at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current accumulator.
    #[inline]
    pub fn phase(&self) -> &Vector32 {
        &self.phase
    }

    /// Advance the accumulator with `daily` and return the blended effect.
    pub fn step(
        &mut self,
        daily: &Vector32,
        config: &PhaseConfig,
        global_max_delta: f64,
    ) -> Vector32 {
        let limit = config.limit_fraction * global_max_delta;
        let mut effective = [0.0; NUM_PARAMETERS];
        for p in 0..NUM_PARAMETERS {
            let next = (self.phase[p] * config.decay + daily[p] * config.gain).clamp(-limit, limit);
            self.phase[p] = next;
            effective[p] = config.daily_weight * daily[p] + config.phase_weight * next;
        }
        effective
    }
}
