//! Type definitions for the lifecycle engine.

use serde::{Deserialize, Serialize};

use crate::assembler::AssembledState;
use crate::config::LifecycleConstants;
use crate::schema::Vector32;

use super::super::state::{LifecycleSnapshot, LifecycleStatus};

/// Fatigue/will state machine for one identity.
///
/// Owns only O(1) accumulators; no tick history is kept. Resilience and
/// global sensitivity are fixed per identity, so the fatigue limit is
/// computed once at construction.
///
/// # Example
///
/// ```
/// use hnh_kernel::config::LifecycleConfig;
/// use hnh_kernel::lifecycle::{LifecycleEngine, LifecycleStatus};
///
/// let config = LifecycleConfig {
///     initial_fatigue: 100.0,
///     ..Default::default()
/// };
/// let engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
///
/// // Already past the limit: terminal before the first tick.
/// assert_eq!(engine.status(), LifecycleStatus::Disabled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEngine {
    /// Versioned constants.
    pub(crate) constants: LifecycleConstants,

    /// Resilience `R`.
    pub(crate) resilience: f64,

    /// Global sensitivity `S_g`.
    pub(crate) global_sensitivity: f64,

    /// Fatigue limit `L`.
    pub(crate) limit: f64,

    /// Fatigue `F`.
    pub(crate) fatigue: f64,

    /// Will `W`.
    pub(crate) will: f64,

    pub(crate) status: LifecycleStatus,

    /// Running sum of `A_g * S`.
    pub(crate) sum_activity_stress: f64,

    /// Running sum of burnout above `q_crit`.
    pub(crate) sum_burnout: f64,

    /// Completed ALIVE ticks.
    pub(crate) day_count: u64,
}

/// Per-tick inputs to [`LifecycleEngine::step`].
#[derive(Debug, Clone, Copy)]
pub struct LifecycleInput<'a> {
    pub base: &'a Vector32,
    pub sensitivity: &'a Vector32,
    /// Ungated daily transit term (already sensitivity-weighted).
    pub transit_effect: &'a Vector32,
    pub memory_delta: Option<&'a Vector32>,
    /// Transit stress `S` in `[0, 1]`.
    pub stress: f64,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Normal ALIVE tick.
    Active,
    /// This tick moved the engine to DISABLED.
    Disabled,
    /// This tick moved the engine to TRANSCENDED.
    Transcended,
    /// Engine was already terminal; nothing changed.
    Frozen,
}

/// Result of one lifecycle tick.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleStep {
    pub kind: StepKind,

    /// Gate applied to transit and memory terms: `A_g` on active ticks, 0 at
    /// death, 1 at transcendence, 0 when frozen.
    pub activity_factor: f64,

    /// Assembled output. `None` when frozen; the caller keeps its current
    /// vector.
    pub state: Option<AssembledState>,

    /// Accumulators after the tick.
    pub snapshot: LifecycleSnapshot,
}

impl LifecycleStep {
    /// True if this tick entered a terminal state.
    #[inline]
    pub fn is_transition(&self) -> bool {
        matches!(self.kind, StepKind::Disabled | StepKind::Transcended)
    }
}
