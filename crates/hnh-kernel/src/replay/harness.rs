//! Replay signature and two-run verification.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::KernelConfig;
use crate::error::KernelResult;
use crate::identity::{IdentityCore, IdentityProfile};
use crate::pipeline::{KernelPipeline, TickInput, TickRecord};
use crate::schema::Vector32;
use crate::transit::AspectRecord;

use super::fingerprint::{
    config_fingerprint, identity_fingerprint, memory_fingerprint, polarity_fingerprint, Fingerprint,
};

/// Absolute tolerance for output comparison.
pub const REPLAY_TOLERANCE: f64 = 1e-9;

/// Fingerprints of everything that determines a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySignature {
    pub config: Fingerprint,
    /// Per-tick aspect lists.
    pub input: Fingerprint,
    /// Per-tick memory deltas.
    pub memory: Fingerprint,
    pub polarity: Fingerprint,
    pub identity: Fingerprint,
    /// Hash over all of the above.
    pub combined: Fingerprint,
}

impl ReplaySignature {
    /// Signature of running `identity` over `ticks` with the given polarity.
    pub fn compute(
        config: &KernelConfig,
        ticks: &[TickInput],
        identity: &IdentityCore,
        polarity: Option<f64>,
    ) -> KernelResult<Self> {
        let aspects: Vec<&[AspectRecord]> = ticks.iter().map(|t| t.aspects.as_slice()).collect();
        let memory: Vec<Option<Vector32>> = ticks.iter().map(|t| t.memory_delta).collect();

        let config = config_fingerprint(config)?;
        let input = Fingerprint::of(&aspects)?;
        let memory = memory_fingerprint(&memory)?;
        let polarity = polarity_fingerprint(polarity)?;
        let identity = identity_fingerprint(
            identity.identity_id(),
            identity.base_vector(),
            identity.sensitivity_vector(),
        )?;
        let combined = Fingerprint::of(&json!({
            "config": config,
            "input": input,
            "memory": memory,
            "polarity": polarity,
            "identity": identity,
        }))?;
        Ok(Self {
            config,
            input,
            memory,
            polarity,
            identity,
            combined,
        })
    }
}

/// Largest absolute difference over params and axes.
pub fn max_abs_diff(a: &TickRecord, b: &TickRecord) -> f64 {
    let params = a
        .params_final
        .iter()
        .zip(b.params_final.iter())
        .map(|(x, y)| (x - y).abs());
    let axes = a
        .axis_final
        .iter()
        .zip(b.axis_final.iter())
        .map(|(x, y)| (x - y).abs());
    params.chain(axes).fold(0.0, f64::max)
}

/// True if params and axes agree within `tolerance`.
pub fn replay_match(a: &TickRecord, b: &TickRecord, tolerance: f64) -> bool {
    max_abs_diff(a, b) <= tolerance
}

/// Outcome of [`ReplayHarness::verify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayVerdict {
    pub signature: ReplaySignature,
    pub signatures_match: bool,
    pub outputs_match: bool,
    pub max_abs_diff: f64,
    pub ticks: usize,
}

impl ReplayVerdict {
    /// Both the fingerprints and the outputs agree.
    pub fn passed(&self) -> bool {
        self.signatures_match && self.outputs_match
    }
}

/// Runs independent pipelines over the same inputs.
#[derive(Debug, Clone, Copy)]
pub struct ReplayHarness {
    tolerance: f64,
}

impl Default for ReplayHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayHarness {
    pub fn new() -> Self {
        Self::with_tolerance(REPLAY_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Build a fresh pipeline and evaluate every tick.
    pub fn run(
        config: &KernelConfig,
        identity: &IdentityCore,
        polarity: Option<f64>,
        ticks: &[TickInput],
    ) -> KernelResult<Vec<TickRecord>> {
        let mut pipeline = KernelPipeline::new(config.clone(), identity.clone(), polarity)?;
        ticks.iter().map(|t| pipeline.tick(t)).collect()
    }

    /// Run twice from scratch and compare signatures and outputs.
    pub fn verify(
        &self,
        config: &KernelConfig,
        identity: &IdentityCore,
        polarity: Option<f64>,
        ticks: &[TickInput],
    ) -> KernelResult<ReplayVerdict> {
        let first_sig = ReplaySignature::compute(config, ticks, identity, polarity)?;
        let second_sig = ReplaySignature::compute(config, ticks, identity, polarity)?;
        let first = Self::run(config, identity, polarity, ticks)?;
        let second = Self::run(config, identity, polarity, ticks)?;

        let max_abs_diff = first
            .iter()
            .zip(second.iter())
            .map(|(a, b)| max_abs_diff(a, b))
            .fold(0.0, f64::max);
        let outputs_match = first.len() == second.len() && max_abs_diff <= self.tolerance;
        let signatures_match = first_sig == second_sig;

        if signatures_match && outputs_match {
            debug!(
                signature = %first_sig.combined,
                ticks = first.len(),
                max_abs_diff,
                "Replay verified"
            );
        } else {
            warn!(
                signatures_match,
                outputs_match,
                max_abs_diff,
                "Replay mismatch"
            );
        }

        Ok(ReplayVerdict {
            signature: first_sig,
            signatures_match,
            outputs_match,
            max_abs_diff,
            ticks: first.len(),
        })
    }
}
