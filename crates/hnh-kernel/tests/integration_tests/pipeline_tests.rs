//! Pipeline Tests: clamp and determinism

use hnh_kernel::config::{LifecycleConfig, ModulationConfig, ModulationMode, PhaseConfig};
use hnh_kernel::replay::{replay_match, ReplaySignature};
use hnh_kernel::{
    DeltaBoundConfig, IdentityCore, KernelConfig, KernelPipeline, ReplayHarness, TickInput,
    NUM_PARAMETERS, REPLAY_TOLERANCE,
};

use super::helpers::{generate_ticks, generated_identity, saturating_stress};

fn full_config() -> KernelConfig {
    KernelConfig {
        bounds: DeltaBoundConfig::new(0.2, 0.4, 2.0)
            .unwrap()
            .with_axis_override("power_boundaries", 0.05)
            .unwrap(),
        modulation: ModulationConfig::with_mode(ModulationMode::ScaleDelta),
        phase: PhaseConfig::enabled(),
        ..Default::default()
    }
}

// =============================================================================
// CLAMP TESTS
// =============================================================================

#[test]
fn test_outputs_stay_in_unit_range_at_extremes() {
    for (base, sensitivity) in [(0.0, 1.0), (1.0, 1.0), (0.0, 0.0), (1.0, 0.5)] {
        let identity = IdentityCore::new(
            format!("clamp-{}-{}", base, sensitivity),
            [base; NUM_PARAMETERS],
            [sensitivity; NUM_PARAMETERS],
        )
        .unwrap();
        let mut pipeline = KernelPipeline::new(full_config(), identity, Some(1.0)).unwrap();

        for (i, tick) in generate_ticks(60).into_iter().enumerate() {
            let memory = if i % 2 == 0 { [0.9; NUM_PARAMETERS] } else { [-0.9; NUM_PARAMETERS] };
            let input = TickInput {
                memory_delta: Some(memory),
                ..tick
            };
            let record = pipeline.tick(&input).unwrap();
            assert!(
                record.params_final.iter().all(|p| (0.0..=1.0).contains(p)),
                "tick {}: {:?}",
                i,
                record.params_final
            );
            assert!(record.axis_final.iter().all(|a| (0.0..=1.0).contains(a)));
            assert!((0.0..=1.0).contains(&record.stress));
        }
    }
}

#[test]
fn test_bounded_within_effective_every_tick() {
    let mut pipeline =
        KernelPipeline::new(full_config(), generated_identity("bounded", 9), None).unwrap();
    for tick in generate_ticks(40) {
        let record = pipeline.tick(&tick).unwrap();
        for p in 0..NUM_PARAMETERS {
            assert!(record.bounded_delta[p].abs() <= record.effective_max_delta[p]);
        }
    }
}

// =============================================================================
// DETERMINISM TESTS
// =============================================================================

#[test]
fn test_independent_pipelines_agree() {
    let ticks = generate_ticks(100);
    let identity = generated_identity("determinism", 17);

    let mut first = KernelPipeline::new(full_config(), identity.clone(), Some(-0.6)).unwrap();
    let mut second = KernelPipeline::new(full_config(), identity, Some(-0.6)).unwrap();
    for tick in &ticks {
        let a = first.tick(tick).unwrap();
        let b = second.tick(tick).unwrap();
        assert!(replay_match(&a, &b, REPLAY_TOLERANCE));
        assert_eq!(a.output_hash, b.output_hash);
        assert_eq!(a.to_json_line().unwrap(), b.to_json_line().unwrap());
    }
}

#[test]
fn test_harness_verifies_full_run() {
    let ticks = generate_ticks(120);
    let identity = generated_identity("harness", 23);
    let verdict = ReplayHarness::new()
        .verify(&full_config(), &identity, Some(0.35), &ticks)
        .unwrap();
    assert!(verdict.signatures_match);
    assert!(verdict.outputs_match);
    assert_eq!(verdict.ticks, 120);
    assert!(verdict.max_abs_diff <= REPLAY_TOLERANCE);
}

#[test]
fn test_signature_changes_with_constants_version() {
    let ticks = generate_ticks(5);
    let identity = generated_identity("version", 5);
    let config = full_config();
    let mut bumped = full_config();
    bumped.lifecycle.constants.version += 1;

    let a = ReplaySignature::compute(&config, &ticks, &identity, None).unwrap();
    let b = ReplaySignature::compute(&bumped, &ticks, &identity, None).unwrap();
    assert_ne!(a.config, b.config);
    assert_eq!(a.input, b.input);
}

#[test]
fn test_lifecycle_disabled_pipeline_is_ungated() {
    let config = KernelConfig {
        lifecycle: LifecycleConfig::disabled(),
        ..Default::default()
    };
    let mut pipeline =
        KernelPipeline::new(config, generated_identity("ungated", 2), None).unwrap();
    for _ in 0..500 {
        let record = pipeline.tick(&saturating_stress()).unwrap();
        assert!(record.lifecycle.is_none());
    }
    assert!(pipeline.lifecycle().is_none());
}
