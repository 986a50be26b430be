//! Tick inputs and self-describing tick records.

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::lifecycle::{LifecycleSnapshot, StepKind};
use crate::replay::Fingerprint;
use crate::schema::{vector32_from_slice, AxisVector, Vector32};
use crate::transit::AspectRecord;

/// One tick of input: ordered aspects plus an optional memory delta.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub aspects: Vec<AspectRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_delta: Option<Vector32>,
}

impl TickInput {
    pub fn new(aspects: Vec<AspectRecord>) -> Self {
        Self {
            aspects,
            memory_delta: None,
        }
    }

    /// Attach a memory delta, checking its length.
    pub fn with_memory_delta(mut self, memory_delta: &[f64]) -> KernelResult<Self> {
        self.memory_delta = Some(vector32_from_slice("memory_delta", memory_delta)?);
        Ok(self)
    }

    /// Reject non-finite memory deltas.
    pub fn validate(&self) -> KernelResult<()> {
        if let Some(memory) = &self.memory_delta {
            if let Some((p, v)) = memory.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(KernelError::out_of_range(
                    format!("memory_delta[{}]", p),
                    v,
                    "must be finite",
                ));
            }
        }
        Ok(())
    }
}

/// Everything one tick computed, with the hashes needed to re-verify it.
///
/// Written by the caller as one JSON line per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub config_hash: Fingerprint,
    pub input_hash: Fingerprint,
    pub memory_hash: Fingerprint,
    pub polarity_hash: Fingerprint,
    pub identity_hash: Fingerprint,
    pub stress: f64,
    pub shock_active: bool,
    pub raw_delta: Vector32,
    pub bounded_delta: Vector32,
    pub effective_max_delta: Vector32,
    pub multipliers: Vector32,
    /// `None` when the lifecycle engine is disabled.
    pub lifecycle_step: Option<StepKind>,
    pub lifecycle: Option<LifecycleSnapshot>,
    pub params_final: Vector32,
    pub axis_final: AxisVector,
    pub output_hash: Fingerprint,
}

impl TickRecord {
    /// Compact single-line JSON.
    pub fn to_json_line(&self) -> KernelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a line written by [`to_json_line`](Self::to_json_line).
    pub fn from_json_line(line: &str) -> KernelResult<Self> {
        Ok(serde_json::from_str(line.trim_end())?)
    }

    /// True if the lifecycle engine did not run this tick's update.
    pub fn is_frozen(&self) -> bool {
        self.lifecycle_step == Some(StepKind::Frozen)
    }
}
