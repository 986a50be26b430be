//! Transition tests for the lifecycle engine.

#[cfg(test)]
mod tests {
    use crate::config::LifecycleConfig;
    use crate::lifecycle::{LifecycleEngine, LifecycleInput, LifecycleStatus, StepKind};
    use crate::schema::{parameter_index, Vector32, NUM_PARAMETERS};

    const BASE: Vector32 = [0.5; NUM_PARAMETERS];
    const SENS: Vector32 = [0.5; NUM_PARAMETERS];
    const EFFECT: Vector32 = [0.04; NUM_PARAMETERS];

    fn input(stress: f64) -> LifecycleInput<'static> {
        LifecycleInput {
            base: &BASE,
            sensitivity: &SENS,
            transit_effect: &EFFECT,
            memory_delta: None,
            stress,
        }
    }

    #[test]
    fn test_first_tick_fully_active() {
        let mut engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
        let step = engine.step(&input(0.0)).unwrap();
        assert_eq!(step.kind, StepKind::Active);
        // zero stress: recovery only, fatigue stays at 0
        assert_eq!(engine.fatigue(), 0.0);
        assert_eq!(step.activity_factor, 1.0);
        let state = step.state.unwrap();
        assert!((state.params[0] - 0.54).abs() < 1e-12);
        // A_g = 1: no degradation
        let initiative = parameter_index("initiative").unwrap();
        assert!((state.params[initiative] - 0.54).abs() < 1e-12);
        assert_eq!(engine.day_count(), 1);
    }

    #[test]
    fn test_fatigue_grows_under_stress() {
        let mut engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.2, 0.8).unwrap();
        let mut previous = engine.fatigue();
        for _ in 0..20 {
            engine.step(&input(1.0)).unwrap();
            assert!(engine.fatigue() >= previous);
            previous = engine.fatigue();
        }
        assert!(engine.fatigue() > 0.0);
        assert!(engine.snapshot().sum_activity_stress > 0.0);
    }

    #[test]
    fn test_progression_to_disabled() {
        let mut engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.0, 1.0).unwrap();
        let mut death = None;
        for tick in 0..1000 {
            let step = engine.step(&input(1.0)).unwrap();
            if step.kind == StepKind::Disabled {
                death = Some((tick, step));
                break;
            }
        }
        let (tick, step) = death.expect("engine should die under sustained stress");
        assert!(tick < 400);
        assert_eq!(engine.status(), LifecycleStatus::Disabled);
        assert_eq!(step.activity_factor, 0.0);

        // Fully gated, then degraded by min(0.1, 0.08)
        let state = step.state.unwrap();
        assert!((state.params[0] - 0.5).abs() < 1e-12);
        let initiative = parameter_index("initiative").unwrap();
        assert!((state.params[initiative] - 0.42).abs() < 1e-12);

        let snap = step.snapshot;
        assert!(snap.is_final());
        assert_eq!(snap.status, LifecycleStatus::Disabled);
        assert!(snap.age_psy.unwrap() > 0.0);
        assert!(snap.will >= 0.0 && snap.will <= 0.02 + 1e-12);
    }

    #[test]
    fn test_death_applies_will_delta_once() {
        let config = LifecycleConfig {
            initial_will: 0.5,
            ..Default::default()
        };
        let mut engine = LifecycleEngine::new(&config, 0.0, 1.0).unwrap();
        // Force the accumulator past the limit without constructing terminal.
        engine.fatigue = engine.limit();
        let step = engine.step(&input(0.5)).unwrap();
        assert_eq!(step.kind, StepKind::Disabled);
        // No ALIVE days: both means are zero.
        assert!((engine.will() - 0.5).abs() < 1e-12);

        let frozen = engine.step(&input(0.5)).unwrap();
        assert_eq!(frozen.kind, StepKind::Frozen);
        assert!((engine.will() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_transcendence_preserves_full_expression() {
        let mut engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
        engine.step(&input(0.2)).unwrap();
        engine.will = 0.999;
        let step = engine.step(&input(0.2)).unwrap();
        assert_eq!(step.kind, StepKind::Transcended);
        assert_eq!(step.activity_factor, 1.0);
        let state = step.state.unwrap();
        assert!(state.params.iter().all(|p| (*p - 0.54).abs() < 1e-12));
        assert_eq!(engine.status(), LifecycleStatus::Transcended);
    }

    #[test]
    fn test_frozen_is_noop() {
        let config = LifecycleConfig {
            initial_fatigue: 100.0,
            ..Default::default()
        };
        let mut engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
        let before = engine.clone();
        for _ in 0..3 {
            let step = engine.step(&input(1.0)).unwrap();
            assert_eq!(step.kind, StepKind::Frozen);
            assert!(step.state.is_none());
        }
        assert_eq!(engine, before);
    }

    #[test]
    fn test_frozen_ignores_bad_stress() {
        let config = LifecycleConfig {
            initial_fatigue: 100.0,
            ..Default::default()
        };
        let mut engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
        assert!(engine.step(&input(7.0)).is_ok());
    }

    #[test]
    fn test_bad_stress_rejected_without_mutation() {
        let mut engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
        let before = engine.clone();
        assert!(engine.step(&input(1.5)).is_err());
        assert!(engine.step(&input(f64::NAN)).is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_memory_delta_is_gated() {
        let mut engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
        let memory = [0.1; NUM_PARAMETERS];
        let zero = [0.0; NUM_PARAMETERS];
        let step = engine
            .step(&LifecycleInput {
                base: &BASE,
                sensitivity: &SENS,
                transit_effect: &zero,
                memory_delta: Some(&memory),
                stress: 0.0,
            })
            .unwrap();
        let state = step.state.unwrap();
        assert!((state.params[0] - 0.6).abs() < 1e-12);
    }
}
