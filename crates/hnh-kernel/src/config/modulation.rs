//! Response-modulation settings.

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::modulation::is_registered_profile;

/// Where the polarity multiplier is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModulationMode {
    /// Layer disabled; multipliers are exactly 1.
    #[default]
    Off,
    /// Scale the bounded delta: `bounded * M`.
    ScaleDelta,
    /// Scale the sensitivity vector for the tick: `clamp01(sensitivity * M)`.
    ScaleSensitivity,
}

/// Response-modulation configuration.
///
/// `M[i] = clamp(1 + beta * E * W[i], 1 - mcap, 1 + mcap)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulationConfig {
    /// Application mode.
    pub mode: ModulationMode,

    /// Strength of the polarity response. Must be >= 0.
    pub beta: f64,

    /// Half-width of the multiplier band. Range: `[0.0, 1.0]`
    pub mcap: f64,

    /// Name of a registered weight profile.
    pub profile: String,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            mode: ModulationMode::Off,
            beta: 0.05,
            mcap: 0.10,
            profile: "v1".to_string(),
        }
    }
}

impl ModulationConfig {
    /// Defaults with the given mode.
    pub fn with_mode(mode: ModulationMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// True unless the mode is [`ModulationMode::Off`].
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.mode != ModulationMode::Off
    }

    /// Validate the modulation configuration.
    ///
    /// The profile is checked even when the layer is off, so a config that
    /// only needs its mode flipped is already known to be good.
    pub fn validate(&self) -> KernelResult<()> {
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(KernelError::config_invalid(
                "modulation.beta",
                format!("must be finite and >= 0, got {}", self.beta),
            ));
        }
        if !(0.0..=1.0).contains(&self.mcap) {
            return Err(KernelError::config_invalid(
                "modulation.mcap",
                format!("must be in [0, 1], got {}", self.mcap),
            ));
        }
        if !is_registered_profile(&self.profile) {
            return Err(KernelError::config_invalid(
                "modulation.profile",
                format!("must be a registered profile (e.g. \"v1\"), got '{}'", self.profile),
            ));
        }
        Ok(())
    }
}
