//! Delta-bound configuration.
//!
//! Bounds resolve per parameter as parameter override > axis override >
//! global. During shock the resolved bound is widened by `shock_multiplier`,
//! which may never exceed [`SHOCK_MULTIPLIER_HARD_CAP`]. A config that
//! breaks either rule cannot be constructed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::schema::{axis_index, parameter_index, NUM_AXES, NUM_PARAMETERS};

/// Engine-wide hard cap on the shock multiplier. Independent of configuration.
pub const SHOCK_MULTIPLIER_HARD_CAP: f64 = 2.0;

/// Validated delta-bound configuration.
///
/// # Example
///
/// ```
/// use hnh_kernel::config::DeltaBoundConfig;
///
/// let config = DeltaBoundConfig::new(0.1, 0.5, 1.5)
///     .unwrap()
///     .with_axis_override("emotional_tone", 0.02)
///     .unwrap();
/// assert_eq!(config.axis_override(0), Some(0.02));
///
/// // Above the hard cap: rejected at construction, never clamped later.
/// assert!(DeltaBoundConfig::new(0.1, 0.5, 2.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeltaBoundRaw", into = "DeltaBoundRaw")]
pub struct DeltaBoundConfig {
    global_max_delta: f64,
    shock_threshold: f64,
    shock_multiplier: f64,
    axis_max_delta: BTreeMap<String, f64>,
    parameter_max_delta: BTreeMap<String, f64>,
    axis_resolved: [Option<f64>; NUM_AXES],
    parameter_resolved: [Option<f64>; NUM_PARAMETERS],
}

/// Wire form of [`DeltaBoundConfig`]; only used for (de)serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaBoundRaw {
    /// Global bound, must be > 0.
    pub global_max_delta: f64,
    /// Stress level at which shock widening kicks in, in `[0, 1]`.
    pub shock_threshold: f64,
    /// Widening factor during shock, in `[1, SHOCK_MULTIPLIER_HARD_CAP]`.
    pub shock_multiplier: f64,
    /// Axis-name → bound overrides.
    #[serde(default)]
    pub axis_max_delta: BTreeMap<String, f64>,
    /// Parameter-name → bound overrides.
    #[serde(default)]
    pub parameter_max_delta: BTreeMap<String, f64>,
}

impl DeltaBoundConfig {
    /// Build a config without overrides.
    pub fn new(
        global_max_delta: f64,
        shock_threshold: f64,
        shock_multiplier: f64,
    ) -> KernelResult<Self> {
        if !global_max_delta.is_finite() || global_max_delta <= 0.0 {
            return Err(KernelError::config_invalid(
                "global_max_delta",
                format!("must be finite and > 0, got {}", global_max_delta),
            ));
        }
        if !(0.0..=1.0).contains(&shock_threshold) {
            return Err(KernelError::config_invalid(
                "shock_threshold",
                format!("must be in [0, 1], got {}", shock_threshold),
            ));
        }
        if !shock_multiplier.is_finite() || shock_multiplier < 1.0 {
            return Err(KernelError::config_invalid(
                "shock_multiplier",
                format!("must be finite and >= 1, got {}", shock_multiplier),
            ));
        }
        if shock_multiplier > SHOCK_MULTIPLIER_HARD_CAP {
            return Err(KernelError::config_invalid(
                "shock_multiplier",
                format!(
                    "must be <= {}, got {}",
                    SHOCK_MULTIPLIER_HARD_CAP, shock_multiplier
                ),
            ));
        }
        Ok(Self {
            global_max_delta,
            shock_threshold,
            shock_multiplier,
            axis_max_delta: BTreeMap::new(),
            parameter_max_delta: BTreeMap::new(),
            axis_resolved: [None; NUM_AXES],
            parameter_resolved: [None; NUM_PARAMETERS],
        })
    }

    /// Add (or replace) an axis-level override.
    pub fn with_axis_override(mut self, axis: &str, max_delta: f64) -> KernelResult<Self> {
        let a = axis_index(axis)?;
        self.check_override(&format!("axis_max_delta.{}", axis), max_delta)?;
        self.axis_max_delta.insert(axis.to_string(), max_delta);
        self.axis_resolved[a] = Some(max_delta);
        Ok(self)
    }

    /// Add (or replace) a parameter-level override.
    pub fn with_parameter_override(
        mut self,
        parameter: &str,
        max_delta: f64,
    ) -> KernelResult<Self> {
        let p = parameter_index(parameter)?;
        self.check_override(&format!("parameter_max_delta.{}", parameter), max_delta)?;
        self.parameter_max_delta
            .insert(parameter.to_string(), max_delta);
        self.parameter_resolved[p] = Some(max_delta);
        Ok(self)
    }

    /// Drop an axis override; lookups fall back to the global bound.
    pub fn without_axis_override(mut self, axis: &str) -> KernelResult<Self> {
        let a = axis_index(axis)?;
        self.axis_max_delta.remove(axis);
        self.axis_resolved[a] = None;
        Ok(self)
    }

    /// Drop a parameter override; lookups fall back to axis, then global.
    pub fn without_parameter_override(mut self, parameter: &str) -> KernelResult<Self> {
        let p = parameter_index(parameter)?;
        self.parameter_max_delta.remove(parameter);
        self.parameter_resolved[p] = None;
        Ok(self)
    }

    // Overrides may widen past the global bound, but under shock no effective
    // bound may exceed global_max_delta * SHOCK_MULTIPLIER_HARD_CAP.
    fn check_override(&self, field: &str, max_delta: f64) -> KernelResult<()> {
        if !max_delta.is_finite() || max_delta <= 0.0 {
            return Err(KernelError::config_invalid(
                field,
                format!("must be finite and > 0, got {}", max_delta),
            ));
        }
        let ceiling = self.global_max_delta * SHOCK_MULTIPLIER_HARD_CAP;
        if max_delta * self.shock_multiplier > ceiling {
            return Err(KernelError::config_invalid(
                field,
                format!(
                    "{} x shock_multiplier {} exceeds global_max_delta x hard cap ({})",
                    max_delta, self.shock_multiplier, ceiling
                ),
            ));
        }
        Ok(())
    }

    /// Global bound.
    #[inline]
    pub fn global_max_delta(&self) -> f64 {
        self.global_max_delta
    }

    /// Shock threshold on transit stress.
    #[inline]
    pub fn shock_threshold(&self) -> f64 {
        self.shock_threshold
    }

    /// Shock widening factor.
    #[inline]
    pub fn shock_multiplier(&self) -> f64 {
        self.shock_multiplier
    }

    /// Axis override for axis index `a`, if any.
    #[inline]
    pub fn axis_override(&self, a: usize) -> Option<f64> {
        self.axis_resolved.get(a).copied().flatten()
    }

    /// Parameter override for parameter index `p`, if any.
    #[inline]
    pub fn parameter_override(&self, p: usize) -> Option<f64> {
        self.parameter_resolved.get(p).copied().flatten()
    }

    /// Axis overrides by name, sorted.
    pub fn axis_overrides(&self) -> &BTreeMap<String, f64> {
        &self.axis_max_delta
    }

    /// Parameter overrides by name, sorted.
    pub fn parameter_overrides(&self) -> &BTreeMap<String, f64> {
        &self.parameter_max_delta
    }
}

impl Default for DeltaBoundConfig {
    fn default() -> Self {
        Self {
            global_max_delta: 0.08,
            shock_threshold: 0.5,
            shock_multiplier: 1.0,
            axis_max_delta: BTreeMap::new(),
            parameter_max_delta: BTreeMap::new(),
            axis_resolved: [None; NUM_AXES],
            parameter_resolved: [None; NUM_PARAMETERS],
        }
    }
}

impl TryFrom<DeltaBoundRaw> for DeltaBoundConfig {
    type Error = KernelError;

    fn try_from(raw: DeltaBoundRaw) -> KernelResult<Self> {
        let mut config = Self::new(
            raw.global_max_delta,
            raw.shock_threshold,
            raw.shock_multiplier,
        )?;
        for (axis, value) in &raw.axis_max_delta {
            config = config.with_axis_override(axis, *value)?;
        }
        for (parameter, value) in &raw.parameter_max_delta {
            config = config.with_parameter_override(parameter, *value)?;
        }
        Ok(config)
    }
}

impl From<DeltaBoundConfig> for DeltaBoundRaw {
    fn from(config: DeltaBoundConfig) -> Self {
        Self {
            global_max_delta: config.global_max_delta,
            shock_threshold: config.shock_threshold,
            shock_multiplier: config.shock_multiplier,
            axis_max_delta: config.axis_max_delta,
            parameter_max_delta: config.parameter_max_delta,
        }
    }
}
