//! Symmetric response modulator.
//!
//! `M[i] = clamp(1 + beta * E * W[i], 1 - mcap, 1 + mcap)`. Because every
//! `W[i]` is a signed unit and the band is symmetric, `M(E) + M(-E) = 2`.

use crate::config::{ModulationConfig, ModulationMode};
use crate::error::{KernelError, KernelResult};
use crate::schema::{clamp01, Vector32, NUM_PARAMETERS};

use super::profile::weight_profile;

/// Multipliers of a disabled or neutral modulator.
pub const IDENTITY_MULTIPLIERS: Vector32 = [1.0; NUM_PARAMETERS];

/// Per-parameter multiplier for a fixed polarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseModulator {
    mode: ModulationMode,
    polarity: f64,
    multipliers: Vector32,
}

impl ResponseModulator {
    /// Build a modulator. The profile is resolved here, so an unknown name
    /// fails before any tick runs.
    pub fn new(config: &ModulationConfig, polarity: f64) -> KernelResult<Self> {
        config.validate()?;
        if !polarity.is_finite() || !(-1.0..=1.0).contains(&polarity) {
            return Err(KernelError::out_of_range(
                "polarity",
                polarity,
                "must be finite and in [-1, 1]",
            ));
        }
        let weights = weight_profile(&config.profile)?;
        let multipliers = if config.mode == ModulationMode::Off {
            IDENTITY_MULTIPLIERS
        } else {
            compute_multipliers(polarity, weights, config.beta, config.mcap)
        };
        Ok(Self {
            mode: config.mode,
            polarity,
            multipliers,
        })
    }

    /// Application mode.
    #[inline]
    pub fn mode(&self) -> ModulationMode {
        self.mode
    }

    /// Polarity score `E`.
    #[inline]
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    /// Multiplier vector `M`.
    #[inline]
    pub fn multipliers(&self) -> &Vector32 {
        &self.multipliers
    }

    /// Apply to one tick.
    ///
    /// Returns the (possibly scaled) bounded delta and sensitivity vector.
    pub fn apply(&self, bounded: &Vector32, sensitivity: &Vector32) -> (Vector32, Vector32) {
        match self.mode {
            ModulationMode::Off => (*bounded, *sensitivity),
            ModulationMode::ScaleDelta => (scale(bounded, &self.multipliers), *sensitivity),
            ModulationMode::ScaleSensitivity => {
                let mut scaled = scale(sensitivity, &self.multipliers);
                for s in scaled.iter_mut() {
                    *s = clamp01(*s);
                }
                (*bounded, scaled)
            }
        }
    }
}

/// Multipliers for polarity `e` against `weights`.
///
/// `e == 0` short-circuits to [`IDENTITY_MULTIPLIERS`].
pub fn compute_multipliers(e: f64, weights: &Vector32, beta: f64, mcap: f64) -> Vector32 {
    if e == 0.0 {
        return IDENTITY_MULTIPLIERS;
    }
    let mut out = [0.0; NUM_PARAMETERS];
    for (m, w) in out.iter_mut().zip(weights.iter()) {
        *m = (1.0 + beta * e * w).clamp(1.0 - mcap, 1.0 + mcap);
    }
    out
}

fn scale(values: &Vector32, multipliers: &Vector32) -> Vector32 {
    let mut out = [0.0; NUM_PARAMETERS];
    for i in 0..NUM_PARAMETERS {
        out[i] = values[i] * multipliers[i];
    }
    out
}
