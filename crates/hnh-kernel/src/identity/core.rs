//! Identity profile trait and its concrete core type.

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::replay::{identity_fingerprint, Fingerprint};
use crate::schema::{
    axis_parameters, clamp01, ensure_unit_range, vector32_from_slice, Vector32, NUM_PARAMETERS,
    PARAMS_PER_AXIS, STABILITY_AXIS,
};

use super::registry::IdentityRegistry;
use super::stats::SensitivityStats;

/// Anything that can supply the two fixed identity vectors.
pub trait IdentityProfile {
    /// Base trait vector, 32 entries in `[0, 1]`.
    fn base_vector(&self) -> &Vector32;

    /// Per-parameter reactivity, 32 entries in `[0, 1]`.
    fn sensitivity_vector(&self) -> &Vector32;
}

/// Immutable identity: id, vectors and the scalars derived from them.
///
/// Derived values are computed once at construction.
///
/// # Example
///
/// ```
/// use hnh_kernel::identity::{IdentityCore, IdentityProfile};
///
/// let core = IdentityCore::new("ada", [0.5; 32], [0.25; 32]).unwrap();
/// assert_eq!(core.resilience(), 0.5);
/// assert_eq!(core.global_sensitivity(), 0.25);
/// assert_eq!(core.base_vector()[0], 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityCore {
    identity_id: String,
    base_vector: Vector32,
    sensitivity_vector: Vector32,
    resilience: f64,
    global_sensitivity: f64,
    identity_hash: Fingerprint,
}

impl IdentityCore {
    /// Build an identity without registering its id.
    pub fn new(
        identity_id: impl Into<String>,
        base_vector: Vector32,
        sensitivity_vector: Vector32,
    ) -> KernelResult<Self> {
        let identity_id = identity_id.into();
        if identity_id.trim().is_empty() {
            return Err(KernelError::out_of_range(
                "identity_id",
                "\"\"",
                "must not be empty",
            ));
        }
        ensure_unit_range("base_vector", &base_vector)?;
        ensure_unit_range("sensitivity_vector", &sensitivity_vector)?;

        let resilience = resilience_of(&base_vector);
        let global_sensitivity = global_sensitivity_of(&sensitivity_vector);
        let identity_hash = identity_fingerprint(&identity_id, &base_vector, &sensitivity_vector)?;

        Ok(Self {
            identity_id,
            base_vector,
            sensitivity_vector,
            resilience,
            global_sensitivity,
            identity_hash,
        })
    }

    /// Build from slices, checking lengths first.
    pub fn from_slices(
        identity_id: impl Into<String>,
        base_vector: &[f64],
        sensitivity_vector: &[f64],
    ) -> KernelResult<Self> {
        let base = vector32_from_slice("base_vector", base_vector)?;
        let sensitivity = vector32_from_slice("sensitivity_vector", sensitivity_vector)?;
        Self::new(identity_id, base, sensitivity)
    }

    /// Build and claim the id in `registry`.
    ///
    /// Vectors are validated before the id is claimed, so a rejected
    /// identity never occupies a slot.
    pub fn register(
        registry: &IdentityRegistry,
        identity_id: impl Into<String>,
        base_vector: Vector32,
        sensitivity_vector: Vector32,
    ) -> KernelResult<Self> {
        let core = Self::new(identity_id, base_vector, sensitivity_vector)?;
        registry.register(&core.identity_id)?;
        Ok(core)
    }

    /// Identity id.
    #[inline]
    pub fn identity_id(&self) -> &str {
        &self.identity_id
    }

    /// Resilience `R`: mean of the stability_regulation axis of the base.
    #[inline]
    pub fn resilience(&self) -> f64 {
        self.resilience
    }

    /// Global sensitivity `S_g`: mean of the sensitivity vector.
    #[inline]
    pub fn global_sensitivity(&self) -> f64 {
        self.global_sensitivity
    }

    /// Fingerprint of id and vectors.
    #[inline]
    pub fn identity_hash(&self) -> Fingerprint {
        self.identity_hash
    }

    /// Histogram and range of the sensitivity vector.
    pub fn sensitivity_stats(&self) -> SensitivityStats {
        SensitivityStats::compute(&self.sensitivity_vector)
    }
}

impl IdentityProfile for IdentityCore {
    fn base_vector(&self) -> &Vector32 {
        &self.base_vector
    }

    fn sensitivity_vector(&self) -> &Vector32 {
        &self.sensitivity_vector
    }
}

/// Mean of the stability_regulation axis.
pub fn resilience_of(base: &Vector32) -> f64 {
    let sum: f64 = axis_parameters(STABILITY_AXIS).map(|p| base[p]).sum();
    clamp01(sum / PARAMS_PER_AXIS as f64)
}

/// Mean of all 32 sensitivities.
pub fn global_sensitivity_of(sensitivity: &Vector32) -> f64 {
    clamp01(sensitivity.iter().sum::<f64>() / NUM_PARAMETERS as f64)
}
