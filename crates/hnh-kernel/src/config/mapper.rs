//! Aspect-to-delta mapper settings.
//!
//! Weight tables are written by name (`aspect -> {parameter: weight}`) so a
//! TOML file stays readable. They are resolved into dense per-aspect
//! [`Vector32`] tables once, when the mapper is built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::schema::{parameter_index, Vector32, NUM_PARAMETERS};
use crate::transit::{AspectType, BodyClass};

/// Dense weight tables, indexed by [`AspectType::index`].
pub type AspectWeightTable = [Vector32; 5];

/// Orb widths in degrees, one per aspect type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    pub conjunction: f64,
    pub opposition: f64,
    pub trine: f64,
    pub square: f64,
    pub sextile: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            opposition: 8.0,
            trine: 8.0,
            square: 7.0,
            sextile: 6.0,
        }
    }
}

impl OrbConfig {
    /// Orb for `aspect`.
    #[inline]
    pub fn orb(&self, aspect: AspectType) -> f64 {
        match aspect {
            AspectType::Conjunction => self.conjunction,
            AspectType::Opposition => self.opposition,
            AspectType::Trine => self.trine,
            AspectType::Square => self.square,
            AspectType::Sextile => self.sextile,
        }
    }

    /// Validate the orbs: every orb must be finite and > 0.
    pub fn validate(&self) -> KernelResult<()> {
        for aspect in AspectType::ALL {
            let orb = self.orb(aspect);
            if !orb.is_finite() || orb <= 0.0 {
                return Err(KernelError::config_invalid(
                    format!("mapper.orbs.{}", aspect.name().to_lowercase()),
                    format!("must be finite and > 0, got {}", orb),
                ));
            }
        }
        Ok(())
    }
}

/// Amplification per body speed class. Slower bodies weigh more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyAmplification {
    pub personal: f64,
    pub social: f64,
    pub outer: f64,
}

impl Default for BodyAmplification {
    fn default() -> Self {
        Self {
            personal: 1.0,
            social: 1.25,
            outer: 1.5,
        }
    }
}

impl BodyAmplification {
    /// Factor for one body class.
    #[inline]
    pub fn factor(&self, class: BodyClass) -> f64 {
        match class {
            BodyClass::Personal => self.personal,
            BodyClass::Social => self.social,
            BodyClass::Outer => self.outer,
        }
    }

    /// Validate: factors must be finite and >= 1.
    pub fn validate(&self) -> KernelResult<()> {
        for (name, value) in [
            ("personal", self.personal),
            ("social", self.social),
            ("outer", self.outer),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(KernelError::config_invalid(
                    format!("mapper.amplification.{}", name),
                    format!("must be finite and >= 1, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

/// Mapper configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Orb widths.
    pub orbs: OrbConfig,

    /// Outer-body amplification factors.
    pub amplification: BodyAmplification,

    /// Aspect name → (parameter name → weight).
    ///
    /// Aspect types missing from the map contribute nothing.
    pub aspect_weights: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            orbs: OrbConfig::default(),
            amplification: BodyAmplification::default(),
            aspect_weights: default_aspect_weights(),
        }
    }
}

impl MapperConfig {
    /// Validate orbs, amplification and weight names.
    pub fn validate(&self) -> KernelResult<()> {
        self.orbs.validate()?;
        self.amplification.validate()?;
        self.weight_table().map(|_| ())
    }

    /// Resolve the named weight maps into dense tables.
    pub fn weight_table(&self) -> KernelResult<AspectWeightTable> {
        let mut table = [[0.0; NUM_PARAMETERS]; 5];
        for (aspect_name, weights) in &self.aspect_weights {
            let aspect: AspectType = aspect_name.parse().map_err(|_| {
                KernelError::config_invalid(
                    format!("mapper.aspect_weights.{}", aspect_name),
                    "unknown aspect type",
                )
            })?;
            for (parameter, weight) in weights {
                let p = parameter_index(parameter)?;
                if !weight.is_finite() {
                    return Err(KernelError::config_invalid(
                        format!("mapper.aspect_weights.{}.{}", aspect_name, parameter),
                        format!("must be finite, got {}", weight),
                    ));
                }
                table[aspect.index()][p] = *weight;
            }
        }
        Ok(table)
    }
}

/// Default sparse weight table.
pub fn default_aspect_weights() -> BTreeMap<String, BTreeMap<String, f64>> {
    let rows: [(&str, &[(&str, f64)]); 5] = [
        (
            "Conjunction",
            &[("warmth", 0.02), ("empathy", 0.01), ("verbosity", 0.01)],
        ),
        (
            "Opposition",
            &[
                ("reactivity", 0.02),
                ("challenge_level", 0.02),
                ("conflict_tolerance", -0.01),
            ],
        ),
        (
            "Trine",
            &[
                ("warmth", 0.02),
                ("patience", 0.01),
                ("encouragement_level", 0.02),
                ("pacing", -0.01),
            ],
        ),
        (
            "Square",
            &[
                ("reactivity", 0.02),
                ("challenge_level", 0.03),
                ("correction_intensity", 0.02),
                ("stress_response", 0.02),
            ],
        ),
        (
            "Sextile",
            &[
                ("warmth", 0.01),
                ("curiosity", 0.01),
                ("encouragement_level", 0.01),
            ],
        ),
    ];
    rows.iter()
        .map(|(aspect, weights)| {
            (
                aspect.to_string(),
                weights
                    .iter()
                    .map(|(p, w)| (p.to_string(), *w))
                    .collect::<BTreeMap<_, _>>(),
            )
        })
        .collect()
}
