//! Phase smoothing settings.
//!
//! When enabled the daily transit effect is blended with a slowly decaying
//! phase accumulator:
//!
//! ```text
//! phase[t]  = clamp(phase[t-1] * decay + daily * gain, +-limit_fraction * global_max_delta)
//! effective = daily_weight * daily + phase_weight * phase[t]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Phase smoothing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfig {
    /// Enable smoothing. Off by default.
    pub enabled: bool,

    /// Per-tick decay of the accumulator. Range: `[0.0, 1.0]`
    pub decay: f64,

    /// Share of the daily effect fed into the accumulator. Range: `[0.0, 1.0]`
    pub gain: f64,

    /// Accumulator limit as a fraction of `global_max_delta`.
    pub limit_fraction: f64,

    /// Blend weight of the daily effect.
    pub daily_weight: f64,

    /// Blend weight of the accumulator.
    pub phase_weight: f64,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            decay: 0.98,
            gain: 0.3,
            limit_fraction: 0.5,
            daily_weight: 0.7,
            phase_weight: 0.3,
        }
    }
}

impl PhaseConfig {
    /// Defaults with smoothing switched on.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Validate the phase configuration.
    pub fn validate(&self) -> KernelResult<()> {
        for (name, value) in [
            ("decay", self.decay),
            ("gain", self.gain),
            ("daily_weight", self.daily_weight),
            ("phase_weight", self.phase_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(KernelError::config_invalid(
                    format!("phase.{}", name),
                    format!("must be in [0, 1], got {}", value),
                ));
            }
        }
        if !self.limit_fraction.is_finite() || self.limit_fraction <= 0.0 {
            return Err(KernelError::config_invalid(
                "phase.limit_fraction",
                format!("must be finite and > 0, got {}", self.limit_fraction),
            ));
        }
        if (self.daily_weight + self.phase_weight - 1.0).abs() > 1e-9 {
            return Err(KernelError::config_invalid(
                "phase.daily_weight",
                format!(
                    "daily_weight ({}) + phase_weight ({}) must equal 1",
                    self.daily_weight, self.phase_weight
                ),
            ));
        }
        Ok(())
    }
}
