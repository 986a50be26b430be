//! Mutable per-identity behavioral state.

use serde::{Deserialize, Serialize};

use crate::identity::IdentityProfile;
use crate::schema::{axis_means, AxisVector, Vector32};

/// Base and sensitivity are fixed copies of the identity's vectors;
/// `current` is the last committed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralState {
    base: Vector32,
    sensitivity: Vector32,
    current: Vector32,
}

impl BehavioralState {
    /// Start from `profile` with `current == base`.
    pub fn from_profile<P: IdentityProfile + ?Sized>(profile: &P) -> Self {
        let base = *profile.base_vector();
        Self {
            base,
            sensitivity: *profile.sensitivity_vector(),
            current: base,
        }
    }

    #[inline]
    pub fn base(&self) -> &Vector32 {
        &self.base
    }

    #[inline]
    pub fn sensitivity(&self) -> &Vector32 {
        &self.sensitivity
    }

    /// Last committed parameters.
    #[inline]
    pub fn current(&self) -> &Vector32 {
        &self.current
    }

    /// Axis means of `current`.
    pub fn current_axes(&self) -> AxisVector {
        axis_means(&self.current)
    }

    pub(crate) fn commit(&mut self, params: Vector32) {
        self.current = params;
    }
}
