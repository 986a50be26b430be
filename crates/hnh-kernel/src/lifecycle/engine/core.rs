//! Constructors and accessors for the lifecycle engine.

use tracing::info;

use crate::config::{LifecycleConfig, LifecycleConstants};
use crate::error::{KernelError, KernelResult};

use super::super::fatigue::{age_psy_years, fatigue_limit, normalized_fatigue};
use super::super::state::{LifecycleSnapshot, LifecycleStatus};
use super::types::LifecycleEngine;

impl LifecycleEngine {
    /// Create an engine for an identity with resilience `R` and global
    /// sensitivity `S_g`.
    ///
    /// If the initial fatigue already reaches the limit the engine starts
    /// DISABLED; if the initial will already reaches the transcendence
    /// threshold it starts TRANSCENDED.
    ///
    /// # Errors
    ///
    /// `ConfigInvalid` for a bad config, `OutOfRange` if `R` or `S_g` lies
    /// outside `[0, 1]`.
    pub fn new(
        config: &LifecycleConfig,
        resilience: f64,
        global_sensitivity: f64,
    ) -> KernelResult<Self> {
        config.validate()?;
        check_unit("resilience", resilience)?;
        check_unit("global_sensitivity", global_sensitivity)?;

        let constants = config.constants.clone();
        let limit = fatigue_limit(resilience, global_sensitivity, &constants);
        let status = initial_status(config.initial_fatigue, config.initial_will, limit, &constants);
        if status.is_terminal() {
            info!(
                status = %status,
                fatigue = config.initial_fatigue,
                will = config.initial_will,
                limit,
                "Lifecycle terminal at construction"
            );
        }

        Ok(Self {
            constants,
            resilience,
            global_sensitivity,
            limit,
            fatigue: config.initial_fatigue,
            will: config.initial_will,
            status,
            sum_activity_stress: 0.0,
            sum_burnout: 0.0,
            day_count: 0,
        })
    }

    /// Resume from a persisted snapshot.
    ///
    /// The limit is recomputed from `R` and `S_g`; the snapshot's status is
    /// kept unless the restored accumulators already demand a terminal one.
    pub fn from_snapshot(
        constants: &LifecycleConstants,
        snapshot: &LifecycleSnapshot,
        resilience: f64,
        global_sensitivity: f64,
    ) -> KernelResult<Self> {
        constants.validate()?;
        check_unit("resilience", resilience)?;
        check_unit("global_sensitivity", global_sensitivity)?;
        check_unit("will", snapshot.will)?;
        for (name, value) in [
            ("fatigue", snapshot.fatigue),
            ("sum_activity_stress", snapshot.sum_activity_stress),
            ("sum_burnout", snapshot.sum_burnout),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(KernelError::out_of_range(name, value, "must be finite and >= 0"));
            }
        }

        let limit = fatigue_limit(resilience, global_sensitivity, constants);
        let status = match snapshot.status {
            LifecycleStatus::Alive => initial_status(snapshot.fatigue, snapshot.will, limit, constants),
            terminal => terminal,
        };

        Ok(Self {
            constants: constants.clone(),
            resilience,
            global_sensitivity,
            limit,
            fatigue: snapshot.fatigue,
            will: snapshot.will,
            status,
            sum_activity_stress: snapshot.sum_activity_stress,
            sum_burnout: snapshot.sum_burnout,
            day_count: snapshot.day_count,
        })
    }

    /// Current status.
    #[inline]
    pub fn status(&self) -> LifecycleStatus {
        self.status
    }

    /// True while ticks still update the engine.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == LifecycleStatus::Alive
    }

    /// Fatigue `F`.
    #[inline]
    pub fn fatigue(&self) -> f64 {
        self.fatigue
    }

    /// Fatigue limit `L`.
    #[inline]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Normalised fatigue `q`.
    #[inline]
    pub fn q(&self) -> f64 {
        normalized_fatigue(self.fatigue, self.limit)
    }

    /// Will `W`.
    #[inline]
    pub fn will(&self) -> f64 {
        self.will
    }

    /// Completed ALIVE ticks.
    #[inline]
    pub fn day_count(&self) -> u64 {
        self.day_count
    }

    /// Resilience `R`.
    #[inline]
    pub fn resilience(&self) -> f64 {
        self.resilience
    }

    /// Global sensitivity `S_g`.
    #[inline]
    pub fn global_sensitivity(&self) -> f64 {
        self.global_sensitivity
    }

    /// Constants in use.
    pub fn constants(&self) -> &LifecycleConstants {
        &self.constants
    }

    /// Psychological age in years at the current fatigue.
    pub fn age_psy(&self) -> f64 {
        age_psy_years(self.day_count as f64, self.q(), &self.constants)
    }

    /// Accumulator snapshot without output vectors.
    pub fn snapshot(&self) -> LifecycleSnapshot {
        LifecycleSnapshot {
            fatigue: self.fatigue,
            limit: self.limit,
            q: self.q(),
            will: self.will,
            status: self.status,
            sum_activity_stress: self.sum_activity_stress,
            sum_burnout: self.sum_burnout,
            day_count: self.day_count,
            age_psy: None,
            params: None,
            axes: None,
        }
    }
}

fn initial_status(
    fatigue: f64,
    will: f64,
    limit: f64,
    constants: &LifecycleConstants,
) -> LifecycleStatus {
    if fatigue >= limit {
        LifecycleStatus::Disabled
    } else if will >= constants.w_transcend {
        LifecycleStatus::Transcended
    } else {
        LifecycleStatus::Alive
    }
}

fn check_unit(name: &str, value: f64) -> KernelResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(KernelError::out_of_range(name, value, "must be in [0, 1]"));
    }
    Ok(())
}
