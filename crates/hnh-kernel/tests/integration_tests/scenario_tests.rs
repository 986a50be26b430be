//! Reference Scenarios A, B and C

use hnh_kernel::assembler::{assemble, TransitEffect};
use hnh_kernel::config::LifecycleConfig;
use hnh_kernel::lifecycle::{LifecycleInput, StepKind};
use hnh_kernel::transit::{AspectRecord, AspectType, TransitSnapshot};
use hnh_kernel::{
    DeltaBoundConfig, IdentityProfile, KernelConfig, KernelPipeline, LifecycleEngine,
    LifecycleStatus, TickInput, NUM_PARAMETERS,
};

use super::helpers::generated_identity;

// =============================================================================
// SCENARIO A: unmapped bodies leave the base untouched
// =============================================================================

#[test]
fn test_scenario_a_raw_delta_bounded_to_global() {
    let bounds = DeltaBoundConfig::new(0.08, 0.5, 1.0).unwrap();
    let snapshot = TransitSnapshot::from_raw([0.2; NUM_PARAMETERS], 0.0, &bounds);
    assert!(snapshot.bounded_delta.iter().all(|d| *d == 0.08));
}

#[test]
fn test_scenario_a_unmapped_bodies_yield_base() {
    let config = KernelConfig::with_bounds(DeltaBoundConfig::new(0.08, 0.5, 1.0).unwrap());
    let identity = generated_identity("scenario-a", 3);
    let base = *identity.base_vector();
    let mut pipeline = KernelPipeline::new(config, identity, None).unwrap();

    let input = TickInput::new(vec![
        AspectRecord::new("Ceres", "Chiron", AspectType::Trine, 120.0),
        AspectRecord::new("Vesta", "Eris", AspectType::Sextile, 60.0),
    ]);
    let record = pipeline.tick(&input).unwrap();

    assert!(record.raw_delta.iter().all(|d| *d == 0.0));
    assert!(record.bounded_delta.iter().all(|d| *d == 0.0));
    assert_eq!(record.params_final, base);
}

// =============================================================================
// SCENARIO B: axis override on emotional_tone
// =============================================================================

#[test]
fn test_scenario_b_axis_override() {
    let bounds = DeltaBoundConfig::new(0.1, 0.5, 1.0)
        .unwrap()
        .with_axis_override("emotional_tone", 0.02)
        .unwrap();
    let snapshot = TransitSnapshot::from_raw([0.5; NUM_PARAMETERS], 0.0, &bounds);

    for p in 0..4 {
        assert_eq!(snapshot.bounded_delta[p], 0.02, "parameter {}", p);
    }
    for p in 4..NUM_PARAMETERS {
        assert_eq!(snapshot.bounded_delta[p], 0.1, "parameter {}", p);
    }
}

#[test]
fn test_scenario_b_assembled_through_sensitivity() {
    let bounds = DeltaBoundConfig::new(0.1, 0.5, 1.0)
        .unwrap()
        .with_axis_override("emotional_tone", 0.02)
        .unwrap();
    let snapshot = TransitSnapshot::from_raw([0.5; NUM_PARAMETERS], 0.0, &bounds);
    let state = assemble(
        &[0.5; NUM_PARAMETERS],
        &[1.0; NUM_PARAMETERS],
        TransitEffect::FromBounded(&snapshot.bounded_delta),
        None,
    );
    assert!((state.params[0] - 0.52).abs() < 1e-12);
    assert!((state.params[4] - 0.6).abs() < 1e-12);
    assert!((state.axes[0] - 0.52).abs() < 1e-12);
}

// =============================================================================
// SCENARIO C: terminal at construction
// =============================================================================

#[test]
fn test_scenario_c_disabled_immediately() {
    let fresh = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
    let config = LifecycleConfig {
        initial_fatigue: fresh.limit(),
        ..Default::default()
    };
    let mut engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
    assert_eq!(engine.status(), LifecycleStatus::Disabled);

    let before = engine.snapshot();
    let base = [0.5; NUM_PARAMETERS];
    let step = engine
        .step(&LifecycleInput {
            base: &base,
            sensitivity: &base,
            transit_effect: &[0.05; NUM_PARAMETERS],
            memory_delta: None,
            stress: 1.0,
        })
        .unwrap();

    assert_eq!(step.kind, StepKind::Frozen);
    assert!(step.state.is_none());
    assert_eq!(step.activity_factor, 0.0);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_scenario_c_transcended_immediately() {
    let config = LifecycleConfig {
        initial_will: 1.0,
        ..Default::default()
    };
    let engine = LifecycleEngine::new(&config, 0.5, 0.5).unwrap();
    assert_eq!(engine.status(), LifecycleStatus::Transcended);
    assert!(!engine.is_alive());
}
