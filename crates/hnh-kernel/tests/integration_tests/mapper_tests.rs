//! Aspect Mapper Tests: axis isolation, orbs and accumulation order

use std::collections::BTreeMap;

use hnh_kernel::config::MapperConfig;
use hnh_kernel::schema::{axis_index, axis_of, PARAMETERS};
use hnh_kernel::transit::{body_axes, AspectRecord, AspectType, Body, TransitDeltaMapper};
use hnh_kernel::NUM_PARAMETERS;

/// Mapper whose every aspect pushes every parameter by `weight`.
fn dense_mapper(weight: f64) -> TransitDeltaMapper {
    let row: BTreeMap<String, f64> = PARAMETERS.iter().map(|p| (p.to_string(), weight)).collect();
    let config = MapperConfig {
        aspect_weights: AspectType::ALL
            .iter()
            .map(|a| (a.name().to_string(), row.clone()))
            .collect(),
        ..Default::default()
    };
    TransitDeltaMapper::new(&config).unwrap()
}

// =============================================================================
// AXIS ISOLATION TESTS
// =============================================================================

#[test]
fn test_single_axis_bodies_touch_only_their_axis() {
    let mapper = dense_mapper(0.01);
    for body in [Body::Uranus, Body::Neptune, Body::Pluto] {
        let axes = body_axes(body);
        assert_eq!(axes.len(), 1);
        let axis = axes[0];

        for aspect in AspectType::ALL {
            let record = AspectRecord::new(body.name(), body.name(), aspect, aspect.exact_angle());
            let raw = mapper.map(&[record]);
            for p in 0..NUM_PARAMETERS {
                if axis_of(p) == axis {
                    assert!(raw[p] > 0.0, "{} {} p={}", body, aspect, p);
                } else {
                    assert_eq!(raw[p], 0.0, "{} {} leaked into p={}", body, aspect, p);
                }
            }
        }
    }
}

#[test]
fn test_unknown_partner_does_not_widen_reach() {
    let mapper = dense_mapper(0.01);
    let record = AspectRecord::new("Neptune", "Ceres", AspectType::Trine, 120.0);
    let raw = mapper.map(&[record]);
    let tone = axis_index("emotional_tone").unwrap();
    for p in 0..NUM_PARAMETERS {
        assert_eq!(raw[p] != 0.0, axis_of(p) == tone, "p={}", p);
    }
}

// =============================================================================
// ORB AND AMPLIFICATION TESTS
// =============================================================================

#[test]
fn test_out_of_orb_contributes_nothing() {
    let mapper = dense_mapper(0.01);
    let record = AspectRecord::new("Moon", "Venus", AspectType::Square, 100.0);
    assert!(mapper.map(&[record]).iter().all(|d| *d == 0.0));
}

#[test]
fn test_intensity_falls_off_linearly() {
    let mapper = dense_mapper(0.01);
    let exact = mapper.map(&[AspectRecord::new("Moon", "Moon", AspectType::Trine, 120.0)]);
    let half = mapper.map(&[AspectRecord::new("Moon", "Moon", AspectType::Trine, 124.0)]);
    assert!((exact[0] - 0.01).abs() < 1e-15);
    assert!((half[0] - 0.005).abs() < 1e-15);
}

#[test]
fn test_outer_bodies_amplified() {
    let mapper = dense_mapper(0.01);
    let personal = mapper.map(&[AspectRecord::new("Moon", "Venus", AspectType::Conjunction, 0.0)]);
    let outer = mapper.map(&[AspectRecord::new("Moon", "Neptune", AspectType::Conjunction, 0.0)]);
    assert!((personal[0] - 0.01).abs() < 1e-15);
    assert!((outer[0] - 0.015).abs() < 1e-15);
}

#[test]
fn test_conjunction_wraps_around_zero() {
    let mapper = dense_mapper(0.01);
    let a = mapper.map(&[AspectRecord::new("Moon", "Moon", AspectType::Conjunction, 2.0)]);
    let b = mapper.map(&[AspectRecord::new("Moon", "Moon", AspectType::Conjunction, 358.0)]);
    assert!((a[0] - b[0]).abs() < 1e-15);
    assert!(a[0] > 0.0);
}

// =============================================================================
// ACCUMULATION ORDER TESTS
// =============================================================================

#[test]
fn test_accumulation_follows_input_order() {
    let mapper = TransitDeltaMapper::new(&MapperConfig::default()).unwrap();
    let aspects = vec![
        AspectRecord::new("Sun", "Moon", AspectType::Trine, 121.3),
        AspectRecord::new("Venus", "Neptune", AspectType::Conjunction, 2.7),
        AspectRecord::new("Mars", "Saturn", AspectType::Square, 93.1),
    ];

    let mut expected = [0.0; NUM_PARAMETERS];
    for aspect in &aspects {
        mapper.accumulate(aspect, &mut expected);
    }
    let mapped = mapper.map(&aspects);
    for p in 0..NUM_PARAMETERS {
        assert_eq!(mapped[p].to_bits(), expected[p].to_bits(), "p={}", p);
    }
}

#[test]
fn test_nan_separation_is_neutralized() {
    let mapper = dense_mapper(0.01);
    let record = AspectRecord::new("Moon", "Venus", AspectType::Trine, f64::NAN);
    assert!(mapper.map(&[record]).iter().all(|d| *d == 0.0));
}
