//! Lifecycle status and snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{AxisVector, Vector32};

/// Lifecycle state machine status.
///
/// `Disabled` and `Transcended` are absorbing: once entered, no tick moves
/// the engine out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LifecycleStatus {
    /// Ticks update fatigue and gate the assembler.
    #[default]
    Alive,
    /// Fatigue reached its limit.
    Disabled,
    /// Will reached the transcendence threshold.
    Transcended,
}

impl LifecycleStatus {
    /// True for the two absorbing states.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LifecycleStatus::Alive)
    }

    /// Upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleStatus::Alive => "ALIVE",
            LifecycleStatus::Disabled => "DISABLED",
            LifecycleStatus::Transcended => "TRANSCENDED",
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Point-in-time view of the lifecycle accumulators.
///
/// `age_psy`, `params` and `axes` are only filled on the snapshot taken at
/// a terminal transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleSnapshot {
    /// Fatigue `F`.
    pub fatigue: f64,
    /// Fatigue limit `L`.
    pub limit: f64,
    /// Normalised fatigue `q = clamp(F / L, 0, 1)`.
    pub q: f64,
    /// Will `W`.
    pub will: f64,
    /// Status after the tick.
    pub status: LifecycleStatus,
    /// Running sum of `A_g * S`.
    pub sum_activity_stress: f64,
    /// Running sum of `max(0, q - q_crit)`.
    pub sum_burnout: f64,
    /// Completed ALIVE ticks.
    pub day_count: u64,
    /// Psychological age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_psy: Option<f64>,
    /// Frozen parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vector32>,
    /// Frozen axis means.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxisVector>,
}

impl LifecycleSnapshot {
    /// True if the snapshot carries frozen output vectors.
    pub fn is_final(&self) -> bool {
        self.params.is_some()
    }
}
