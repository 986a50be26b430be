//! Core tests for the lifecycle engine (constructors, accessors).

#[cfg(test)]
mod tests {
    use crate::config::{LifecycleConfig, LifecycleConstants};
    use crate::error::KernelError;
    use crate::lifecycle::{LifecycleEngine, LifecycleStatus};

    #[test]
    fn test_new_alive() {
        let engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
        assert_eq!(engine.status(), LifecycleStatus::Alive);
        assert!((engine.limit() - 14.7).abs() < 1e-12);
        assert_eq!(engine.fatigue(), 0.0);
        assert_eq!(engine.q(), 0.0);
        assert_eq!(engine.day_count(), 0);
    }

    #[test]
    fn test_new_disabled_when_fatigue_at_limit() {
        // R = 0, S_g = 1 -> L = 7
        let config = LifecycleConfig {
            initial_fatigue: 7.0,
            ..Default::default()
        };
        let engine = LifecycleEngine::new(&config, 0.0, 1.0).unwrap();
        assert_eq!(engine.status(), LifecycleStatus::Disabled);
        assert!(!engine.is_alive());
    }

    #[test]
    fn test_new_transcended_when_will_at_threshold() {
        let config = LifecycleConfig {
            initial_will: 0.995,
            ..Default::default()
        };
        let engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
        assert_eq!(engine.status(), LifecycleStatus::Transcended);
    }

    #[test]
    fn test_death_checked_before_transcendence() {
        let config = LifecycleConfig {
            initial_fatigue: 50.0,
            initial_will: 1.0,
            ..Default::default()
        };
        let engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
        assert_eq!(engine.status(), LifecycleStatus::Disabled);
    }

    #[test]
    fn test_new_rejects_out_of_range_scalars() {
        let config = LifecycleConfig::default();
        assert!(matches!(
            LifecycleEngine::new(&config, 1.2, 0.5),
            Err(KernelError::OutOfRange { .. })
        ));
        assert!(LifecycleEngine::new(&config, 0.5, f64::NAN).is_err());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let config = LifecycleConfig {
            initial_fatigue: 3.0,
            initial_will: 0.4,
            ..Default::default()
        };
        let engine = LifecycleEngine::new(&config, 0.3, 0.6).unwrap();
        let snap = engine.snapshot();
        assert!(!snap.is_final());

        let json = serde_json::to_string(&snap).unwrap();
        let back = serde_json::from_str(&json).unwrap();
        let restored =
            LifecycleEngine::from_snapshot(&LifecycleConstants::default(), &back, 0.3, 0.6)
                .unwrap();
        assert_eq!(restored, engine);
    }

    #[test]
    fn test_from_snapshot_keeps_terminal_status() {
        let config = LifecycleConfig {
            initial_fatigue: 100.0,
            ..Default::default()
        };
        let engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
        let snap = engine.snapshot();
        let restored =
            LifecycleEngine::from_snapshot(&LifecycleConstants::default(), &snap, 0.5, 0.5)
                .unwrap();
        assert_eq!(restored.status(), LifecycleStatus::Disabled);
    }

    #[test]
    fn test_from_snapshot_rejects_negative_fatigue() {
        let engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
        let mut snap = engine.snapshot();
        snap.fatigue = -1.0;
        assert!(
            LifecycleEngine::from_snapshot(&LifecycleConstants::default(), &snap, 0.5, 0.5)
                .is_err()
        );
    }

    #[test]
    fn test_age_psy_starts_at_zero() {
        let engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
        assert_eq!(engine.age_psy(), 0.0);
    }
}
