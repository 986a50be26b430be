//! Helper Functions: Deterministic Data Generation

use hnh_kernel::transit::{AspectRecord, AspectType};
use hnh_kernel::{IdentityCore, TickInput, Vector32, NUM_PARAMETERS};

/// Deterministic vector in `[0, 1]` from a sin pattern.
pub fn generate_vector(seed: u64) -> Vector32 {
    let mut out = [0.0; NUM_PARAMETERS];
    for (i, slot) in out.iter_mut().enumerate() {
        let x = (i as f64 + seed as f64) * 0.37;
        *slot = (x.sin() + 1.0) / 2.0;
    }
    out
}

/// Identity with generated vectors.
pub fn generated_identity(id: &str, seed: u64) -> IdentityCore {
    IdentityCore::new(id, generate_vector(seed), generate_vector(seed + 101)).unwrap()
}

/// Identity with uniform vectors.
pub fn uniform_identity(id: &str, base: f64, sensitivity: f64) -> IdentityCore {
    IdentityCore::new(id, [base; NUM_PARAMETERS], [sensitivity; NUM_PARAMETERS]).unwrap()
}

/// Deterministic aspect sequence cycling through bodies and aspect types.
pub fn generate_ticks(count: usize) -> Vec<TickInput> {
    const BODIES: [&str; 10] = [
        "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
        "Pluto",
    ];
    (0..count)
        .map(|t| {
            let aspects = (0..3)
                .map(|k| {
                    let aspect = AspectType::ALL[(t + k) % AspectType::ALL.len()];
                    let a = BODIES[(t * 3 + k) % BODIES.len()];
                    let b = BODIES[(t * 7 + k + 1) % BODIES.len()];
                    let offset = ((t * 13 + k * 5) % 11) as f64 - 5.0;
                    AspectRecord::new(a, b, aspect, aspect.exact_angle() + offset)
                })
                .collect();
            TickInput::new(aspects)
        })
        .collect()
}

/// Three exact hard aspects: transit stress saturates at 1 with default constants.
pub fn saturating_stress() -> TickInput {
    TickInput::new(vec![
        AspectRecord::new("Mars", "Pluto", AspectType::Square, 90.0),
        AspectRecord::new("Saturn", "Moon", AspectType::Opposition, 180.0),
        AspectRecord::new("Sun", "Mars", AspectType::Conjunction, 0.0),
    ])
}
