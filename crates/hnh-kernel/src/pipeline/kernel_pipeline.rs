//! KernelPipeline - per-identity tick orchestrator.

use tracing::debug;

use crate::assembler::{assemble, transit_effect, TransitEffect};
use crate::config::KernelConfig;
use crate::error::KernelResult;
use crate::identity::IdentityCore;
use crate::lifecycle::{LifecycleEngine, LifecycleInput, LifecycleSnapshot, StepKind};
use crate::modulation::{ResponseModulator, IDENTITY_MULTIPLIERS};
use crate::replay::{
    config_fingerprint, input_fingerprint, memory_fingerprint, output_fingerprint,
    polarity_fingerprint, Fingerprint,
};
use crate::schema::{axis_means, Vector32};
use crate::transit::{PhaseState, TransitDeltaMapper, TransitSnapshot};

use super::record::{TickInput, TickRecord};
use super::state::BehavioralState;

/// Composes mapping, bounding, modulation, smoothing, lifecycle gating and
/// assembly for one identity.
///
/// Every component is built and validated in [`KernelPipeline::new`], so
/// configuration errors never surface at tick time.
///
/// # Example
///
/// ```
/// use hnh_kernel::config::KernelConfig;
/// use hnh_kernel::identity::IdentityCore;
/// use hnh_kernel::pipeline::{KernelPipeline, TickInput};
/// use hnh_kernel::transit::{AspectRecord, AspectType};
///
/// let identity = IdentityCore::new("ada", [0.5; 32], [0.5; 32]).unwrap();
/// let mut pipeline = KernelPipeline::new(KernelConfig::default(), identity, None).unwrap();
///
/// let input = TickInput::new(vec![AspectRecord::new("Moon", "Venus", AspectType::Trine, 120.0)]);
/// let record = pipeline.tick(&input).unwrap();
/// assert_eq!(record.tick, 0);
/// assert!(record.params_final.iter().all(|p| (0.0..=1.0).contains(p)));
/// ```
#[derive(Debug)]
pub struct KernelPipeline {
    config: KernelConfig,
    identity: IdentityCore,
    state: BehavioralState,
    mapper: TransitDeltaMapper,
    modulator: Option<ResponseModulator>,
    lifecycle: Option<LifecycleEngine>,
    phase: PhaseState,
    config_hash: Fingerprint,
    polarity_hash: Fingerprint,
    tick_count: u64,
}

impl KernelPipeline {
    /// Build a pipeline.
    ///
    /// A modulator is built only when `polarity` is given; its multipliers
    /// are the identity vector when the configured mode is off.
    ///
    /// # Errors
    ///
    /// `ConfigInvalid` for any invalid sub-config, `OutOfRange` for a
    /// polarity outside `[-1, 1]`.
    pub fn new(
        config: KernelConfig,
        identity: IdentityCore,
        polarity: Option<f64>,
    ) -> KernelResult<Self> {
        config.validate()?;
        let mapper = TransitDeltaMapper::new(&config.mapper)?;
        let modulator = polarity
            .map(|e| ResponseModulator::new(&config.modulation, e))
            .transpose()?;
        let lifecycle = if config.lifecycle.enabled {
            Some(LifecycleEngine::new(
                &config.lifecycle,
                identity.resilience(),
                identity.global_sensitivity(),
            )?)
        } else {
            None
        };
        let config_hash = config_fingerprint(&config)?;
        let polarity_hash = polarity_fingerprint(polarity)?;
        let state = BehavioralState::from_profile(&identity);

        let stats = identity.sensitivity_stats();
        debug!(
            identity = identity.identity_id(),
            config_hash = %config_hash,
            sensitivity_low_pct = stats.low_pct,
            sensitivity_high_pct = stats.high_pct,
            sensitivity_mean = stats.mean,
            modulated = modulator.is_some(),
            lifecycle = lifecycle.is_some(),
            "Kernel pipeline created"
        );

        Ok(Self {
            config,
            identity,
            state,
            mapper,
            modulator,
            lifecycle,
            phase: PhaseState::new(),
            config_hash,
            polarity_hash,
            tick_count: 0,
        })
    }

    /// Run one tick.
    ///
    /// Order: validate, map, stress, bound, modulate, smooth, gate,
    /// assemble, commit. Inputs are validated before anything mutates. A
    /// frozen lifecycle leaves `current` untouched.
    pub fn tick(&mut self, input: &TickInput) -> KernelResult<TickRecord> {
        input.validate()?;
        let input_hash = input_fingerprint(std::slice::from_ref(&input.aspects))?;
        let memory_hash = memory_fingerprint(std::slice::from_ref(&input.memory_delta))?;

        let snapshot = TransitSnapshot::compute(
            &input.aspects,
            &self.mapper,
            &self.config.bounds,
            &self.config.lifecycle.constants,
        );

        let (delta, sensitivity) = match &self.modulator {
            Some(m) => m.apply(&snapshot.bounded_delta, self.state.sensitivity()),
            None => (snapshot.bounded_delta, *self.state.sensitivity()),
        };
        let multipliers = self
            .modulator
            .as_ref()
            .map_or(IDENTITY_MULTIPLIERS, |m| *m.multipliers());

        let daily = transit_effect(&delta, &sensitivity);
        let effect = if self.config.phase.enabled {
            self.phase.step(
                &daily,
                &self.config.phase,
                self.config.bounds.global_max_delta(),
            )
        } else {
            daily
        };

        let (params, lifecycle_step, lifecycle) =
            self.gate_and_assemble(&effect, &sensitivity, input, snapshot.stress)?;
        self.state.commit(params);

        let axes = axis_means(&params);
        let record = TickRecord {
            tick: self.tick_count,
            config_hash: self.config_hash,
            input_hash,
            memory_hash,
            polarity_hash: self.polarity_hash,
            identity_hash: self.identity.identity_hash(),
            stress: snapshot.stress,
            shock_active: snapshot.shock_active,
            raw_delta: snapshot.raw_delta,
            bounded_delta: snapshot.bounded_delta,
            effective_max_delta: snapshot.effective_max_delta,
            multipliers,
            lifecycle_step,
            lifecycle,
            params_final: params,
            axis_final: axes,
            output_hash: output_fingerprint(&params, &axes)?,
        };
        self.tick_count += 1;
        Ok(record)
    }

    fn gate_and_assemble(
        &mut self,
        effect: &Vector32,
        sensitivity: &Vector32,
        input: &TickInput,
        stress: f64,
    ) -> KernelResult<(Vector32, Option<StepKind>, Option<LifecycleSnapshot>)> {
        let base = *self.state.base();
        let Some(engine) = self.lifecycle.as_mut() else {
            let state = assemble(
                &base,
                sensitivity,
                TransitEffect::Precomputed(effect),
                input.memory_delta.as_ref(),
            );
            return Ok((state.params, None, None));
        };

        let step = engine.step(&LifecycleInput {
            base: &base,
            sensitivity,
            transit_effect: effect,
            memory_delta: input.memory_delta.as_ref(),
            stress,
        })?;
        let params = step.state.map_or(*self.state.current(), |s| s.params);
        Ok((params, Some(step.kind), Some(step.snapshot)))
    }

    #[inline]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    #[inline]
    pub fn identity(&self) -> &IdentityCore {
        &self.identity
    }

    #[inline]
    pub fn state(&self) -> &BehavioralState {
        &self.state
    }

    /// Lifecycle engine, if enabled.
    #[inline]
    pub fn lifecycle(&self) -> Option<&LifecycleEngine> {
        self.lifecycle.as_ref()
    }

    #[inline]
    pub fn modulator(&self) -> Option<&ResponseModulator> {
        self.modulator.as_ref()
    }

    /// Phase accumulator; stays zero unless smoothing is enabled.
    #[inline]
    pub fn phase(&self) -> &PhaseState {
        &self.phase
    }

    #[inline]
    pub fn config_hash(&self) -> Fingerprint {
        self.config_hash
    }

    /// Ticks run so far, frozen ones included.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
