//! Response Modulator Symmetry Tests

use hnh_kernel::config::{ModulationConfig, ModulationMode};
use hnh_kernel::modulation::{
    compute_multipliers, polarity_score, PolarityWeights, ResponseModulator, Sex,
    IDENTITY_MULTIPLIERS, W32_V1,
};
use hnh_kernel::transit::{AspectRecord, AspectType};
use hnh_kernel::{KernelConfig, KernelPipeline, TickInput, NUM_PARAMETERS};

use super::helpers::uniform_identity;

const SYMMETRY_EPS: f64 = 1e-12;

// =============================================================================
// SYMMETRY TESTS
// =============================================================================

#[test]
fn test_multipliers_sum_to_two() {
    for step in 0..=20 {
        let e = step as f64 / 20.0;
        let pos = compute_multipliers(e, &W32_V1, 0.05, 0.1);
        let neg = compute_multipliers(-e, &W32_V1, 0.05, 0.1);
        for i in 0..NUM_PARAMETERS {
            assert!(
                (pos[i] + neg[i] - 2.0).abs() < SYMMETRY_EPS,
                "e={} i={}: {} + {}",
                e,
                i,
                pos[i],
                neg[i]
            );
        }
    }
}

#[test]
fn test_symmetry_holds_when_capped() {
    let pos = compute_multipliers(1.0, &W32_V1, 0.5, 0.1);
    let neg = compute_multipliers(-1.0, &W32_V1, 0.5, 0.1);
    for i in 0..NUM_PARAMETERS {
        assert!((pos[i] - 1.0).abs() <= 0.1 + SYMMETRY_EPS);
        assert!((pos[i] + neg[i] - 2.0).abs() < SYMMETRY_EPS);
    }
}

#[test]
fn test_zero_polarity_is_identity_in_every_mode() {
    for mode in [
        ModulationMode::Off,
        ModulationMode::ScaleDelta,
        ModulationMode::ScaleSensitivity,
    ] {
        let modulator = ResponseModulator::new(&ModulationConfig::with_mode(mode), 0.0).unwrap();
        assert_eq!(modulator.multipliers(), &IDENTITY_MULTIPLIERS);

        let delta = [0.03; NUM_PARAMETERS];
        let sens = [0.7; NUM_PARAMETERS];
        let (d, s) = modulator.apply(&delta, &sens);
        assert_eq!(d, delta);
        assert_eq!(s, sens);
    }
}

#[test]
fn test_opposite_polarities_mirror_around_unmodulated() {
    let config = KernelConfig {
        modulation: ModulationConfig::with_mode(ModulationMode::ScaleDelta),
        lifecycle: hnh_kernel::config::LifecycleConfig::disabled(),
        ..Default::default()
    };
    let input = TickInput::new(vec![
        AspectRecord::new("Moon", "Venus", AspectType::Trine, 120.0),
        AspectRecord::new("Mercury", "Jupiter", AspectType::Sextile, 60.0),
    ]);
    let run = |polarity: Option<f64>| {
        let identity = uniform_identity("mirror", 0.5, 1.0);
        let mut pipeline = KernelPipeline::new(config.clone(), identity, polarity).unwrap();
        pipeline.tick(&input).unwrap().params_final
    };

    let neutral = run(None);
    let pos = run(Some(0.8));
    let neg = run(Some(-0.8));
    for p in 0..NUM_PARAMETERS {
        assert!((pos[p] + neg[p] - 2.0 * neutral[p]).abs() < SYMMETRY_EPS, "p={}", p);
    }
}

#[test]
fn test_scale_sensitivity_stays_in_unit_range() {
    let modulator =
        ResponseModulator::new(&ModulationConfig::with_mode(ModulationMode::ScaleSensitivity), 1.0)
            .unwrap();
    let (_, s) = modulator.apply(&[0.05; NUM_PARAMETERS], &[1.0; NUM_PARAMETERS]);
    assert!(s.iter().all(|v| (0.0..=1.0).contains(v)));
}

// =============================================================================
// POLARITY SCORE TESTS
// =============================================================================

#[test]
fn test_polarity_score_in_range_and_antisymmetric() {
    let weights = PolarityWeights::default();
    let male = polarity_score(Sex::Male, 1.0, 1, &weights);
    let female = polarity_score(Sex::Female, -1.0, -1, &weights);
    assert!((male - 1.0).abs() < 1e-12);
    assert!((female + 1.0).abs() < 1e-12);
    assert_eq!(polarity_score(Sex::Unknown, 0.0, 0, &weights), 0.0);
}
