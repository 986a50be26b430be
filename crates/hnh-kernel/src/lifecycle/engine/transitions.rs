//! Per-tick update and terminal transitions.

use tracing::{debug, info};

use crate::assembler::{assemble, AssembledState, TransitEffect};
use crate::error::{KernelError, KernelResult};
use crate::schema::{Vector32, NUM_PARAMETERS};

use super::super::fatigue::{
    activity_factor, age_psy_years, apply_degradation, load, normalized_fatigue, recovery,
    update_fatigue, will_delta,
};
use super::super::state::LifecycleStatus;
use super::types::{LifecycleEngine, LifecycleInput, LifecycleStep, StepKind};

impl LifecycleEngine {
    /// Advance one tick.
    ///
    /// Transition checks run before the normal update:
    ///
    /// 1. `F >= L`: DISABLED. Will moves once by the clamped death delta and
    ///    the final state is assembled fully gated (`A_g = 0`).
    /// 2. `W >= w_transcend`: TRANSCENDED. Final state assembled ungated.
    /// 3. Otherwise fatigue, running sums and the day counter advance and
    ///    the state is assembled with gate `A_g`.
    ///
    /// Once terminal, every call returns [`StepKind::Frozen`] without
    /// touching the engine.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `stress` lies outside `[0, 1]`, raised before any
    /// mutation. Frozen ticks never fail.
    pub fn step(&mut self, input: &LifecycleInput<'_>) -> KernelResult<LifecycleStep> {
        if !self.is_alive() {
            return Ok(LifecycleStep {
                kind: StepKind::Frozen,
                activity_factor: 0.0,
                state: None,
                snapshot: self.snapshot(),
            });
        }
        if !(0.0..=1.0).contains(&input.stress) {
            return Err(KernelError::out_of_range(
                "stress",
                input.stress,
                "must be in [0, 1]",
            ));
        }

        if self.fatigue >= self.limit {
            return Ok(self.die(input));
        }
        if self.will >= self.constants.w_transcend {
            return Ok(self.transcend(input));
        }
        Ok(self.advance(input))
    }

    fn die(&mut self, input: &LifecycleInput<'_>) -> LifecycleStep {
        let q = self.q();
        let delta = will_delta(
            self.sum_activity_stress,
            self.sum_burnout,
            self.day_count,
            &self.constants,
        );
        self.will = (self.will + delta).clamp(0.0, 1.0);
        self.status = LifecycleStatus::Disabled;

        let state = self.gated_state(input, 0.0, true);
        info!(
            fatigue = self.fatigue,
            limit = self.limit,
            will = self.will,
            will_delta = delta,
            days = self.day_count,
            "Lifecycle transition ALIVE -> DISABLED"
        );
        self.final_step(StepKind::Disabled, 0.0, q, state)
    }

    fn transcend(&mut self, input: &LifecycleInput<'_>) -> LifecycleStep {
        let q = self.q();
        self.status = LifecycleStatus::Transcended;

        let state = self.gated_state(input, 1.0, false);
        info!(
            will = self.will,
            days = self.day_count,
            "Lifecycle transition ALIVE -> TRANSCENDED"
        );
        self.final_step(StepKind::Transcended, 1.0, q, state)
    }

    fn advance(&mut self, input: &LifecycleInput<'_>) -> LifecycleStep {
        let c = &self.constants;
        let s = input.stress;
        let load = load(s, self.resilience, self.global_sensitivity, c);
        let rec = recovery(s, self.resilience, c);
        let fatigue = update_fatigue(self.fatigue, load, rec, c);
        let q = normalized_fatigue(fatigue, self.limit);
        let a_g = activity_factor(q, c);

        self.sum_activity_stress += a_g * s;
        self.sum_burnout += (q - c.q_crit).max(0.0);
        self.fatigue = fatigue;
        self.day_count += 1;

        debug!(fatigue, q, activity = a_g, stress = s, "Lifecycle tick");

        let state = self.gated_state(input, a_g, true);
        LifecycleStep {
            kind: StepKind::Active,
            activity_factor: a_g,
            state: Some(state),
            snapshot: self.snapshot(),
        }
    }

    fn gated_state(
        &self,
        input: &LifecycleInput<'_>,
        gate: f64,
        degrade: bool,
    ) -> AssembledState {
        let transit = scaled(input.transit_effect, gate);
        let memory = input.memory_delta.map(|m| scaled(m, gate));
        let assembled = assemble(
            input.base,
            input.sensitivity,
            TransitEffect::Precomputed(&transit),
            memory.as_ref(),
        );
        if !degrade {
            return assembled;
        }
        let mut params = assembled.params;
        apply_degradation(&mut params, gate, &self.constants);
        AssembledState::from_params(params)
    }

    fn final_step(&self, kind: StepKind, gate: f64, q: f64, state: AssembledState) -> LifecycleStep {
        let mut snapshot = self.snapshot();
        snapshot.q = q;
        snapshot.age_psy = Some(age_psy_years(self.day_count as f64, q, &self.constants));
        snapshot.params = Some(state.params);
        snapshot.axes = Some(state.axes);
        LifecycleStep {
            kind,
            activity_factor: gate,
            state: Some(state),
            snapshot,
        }
    }
}

fn scaled(values: &Vector32, factor: f64) -> Vector32 {
    let mut out = [0.0; NUM_PARAMETERS];
    for (o, v) in out.iter_mut().zip(values.iter()) {
        *o = v * factor;
    }
    out
}
