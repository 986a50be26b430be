//! Polarity score `E` fed to the modulator.
//!
//! ```text
//! E = clamp(a * sex + b * sign_score + c * sect, -1, 1)
//! ```
//!
//! with `sex` in {+1, -1, 0}, `sign_score` the planet-weighted sign polarity
//! and `sect` the day/night score.

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::transit::Body;

/// Declared sex of the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// +1, -1 or 0.
    #[inline]
    pub fn score(&self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => -1.0,
            Sex::Unknown => 0.0,
        }
    }
}

/// +1 for Aries, Gemini, Leo, Libra, Sagittarius, Aquarius; -1 otherwise.
///
/// `sign_index` runs 0 (Aries) to 11 (Pisces).
pub fn sign_polarity(sign_index: u8) -> KernelResult<i8> {
    if sign_index > 11 {
        return Err(KernelError::out_of_range(
            "sign_index",
            sign_index,
            "must be in 0..=11",
        ));
    }
    Ok(if sign_index % 2 == 0 { 1 } else { -1 })
}

/// Per-body weights for the sign polarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetWeights {
    weights: [f64; 10],
}

impl Default for PlanetWeights {
    fn default() -> Self {
        // Body::ALL order
        Self {
            weights: [2.0, 2.0, 1.5, 1.5, 1.5, 1.0, 1.0, 0.5, 0.5, 0.5],
        }
    }
}

impl PlanetWeights {
    /// Weight of `body`.
    #[inline]
    pub fn weight(&self, body: Body) -> f64 {
        self.weights[body as usize]
    }

    /// Replace one weight. Must be finite and >= 0.
    pub fn with_weight(mut self, body: Body, weight: f64) -> KernelResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(KernelError::config_invalid(
                format!("planet_weights.{}", body),
                format!("must be finite and >= 0, got {}", weight),
            ));
        }
        self.weights[body as usize] = weight;
        Ok(self)
    }
}

/// Weighted mean sign polarity over planets with a known sign.
///
/// Entries with a zero weight are skipped. Fails when nothing is left to
/// weigh.
pub fn sign_polarity_score(planet_signs: &[(Body, u8)], weights: &PlanetWeights) -> KernelResult<f64> {
    let mut num = 0.0;
    let mut den = 0.0;
    for &(body, sign) in planet_signs {
        let polarity = sign_polarity(sign)?;
        let w = weights.weight(body);
        if w <= 0.0 {
            continue;
        }
        num += w * f64::from(polarity);
        den += w;
    }
    if den <= 0.0 {
        return Err(KernelError::out_of_range(
            "planet_signs",
            planet_signs.len(),
            "no weighted planet with a known sign",
        ));
    }
    Ok((num / den).clamp(-1.0, 1.0))
}

/// Day (+1) / night (-1) / unknown (0).
///
/// Sun altitude wins when it is known and non-zero; otherwise the Sun's
/// house decides (7-12 day, 1-6 night).
pub fn sect_score(sun_altitude: Option<f64>, sun_house: Option<u8>) -> i8 {
    match sun_altitude {
        Some(alt) if alt > 0.0 => return 1,
        Some(alt) if alt < 0.0 => return -1,
        _ => {}
    }
    match sun_house {
        Some(7..=12) => 1,
        Some(1..=6) => -1,
        _ => 0,
    }
}

/// Mixing weights for the polarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarityWeights {
    pub sex: f64,
    pub sign: f64,
    pub sect: f64,
}

impl Default for PolarityWeights {
    fn default() -> Self {
        Self {
            sex: 0.70,
            sign: 0.20,
            sect: 0.10,
        }
    }
}

/// Combine the three components into `E` in `[-1, 1]`.
pub fn polarity_score(sex: Sex, sign_score: f64, sect: i8, weights: &PolarityWeights) -> f64 {
    let raw = weights.sex * sex.score() + weights.sign * sign_score + weights.sect * f64::from(sect);
    raw.clamp(-1.0, 1.0)
}
