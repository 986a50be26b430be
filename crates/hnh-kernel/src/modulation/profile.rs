//! Registered weight profiles.
//!
//! A profile is a fixed 32-entry table of signed unit weights in canonical
//! parameter order. Profiles are looked up by name; the set is closed at
//! compile time.

use crate::error::{KernelError, KernelResult};
use crate::schema::Vector32;

/// Profile "v1".
#[rustfmt::skip]
pub const W32_V1: Vector32 = [
    // emotional_tone: warmth, empathy, patience, emotional_intensity
    -1.0, -1.0, -1.0,  1.0,
    // stability_regulation
     1.0,  1.0, -1.0,  1.0,
    // cognitive_style
    -1.0,  1.0, -1.0,  1.0,
    // structure_discipline
     1.0, -1.0, -1.0,  1.0,
    // communication_style
    -1.0,  1.0, -1.0, -1.0,
    // teaching_style
     1.0,  1.0, -1.0, -1.0,
    // power_boundaries
     1.0,  1.0, -1.0,  1.0,
    // motivation_drive
     1.0, -1.0,  1.0, -1.0,
];

const REGISTRY: [(&str, &Vector32); 1] = [("v1", &W32_V1)];

/// Weight table for `name`.
pub fn weight_profile(name: &str) -> KernelResult<&'static Vector32> {
    REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, w)| *w)
        .ok_or_else(|| {
            KernelError::config_invalid(
                "modulation.profile",
                format!("must be a registered profile (e.g. \"v1\"), got '{}'", name),
            )
        })
}

/// True if `name` is a registered profile.
pub fn is_registered_profile(name: &str) -> bool {
    REGISTRY.iter().any(|(n, _)| *n == name)
}

/// Names of all registered profiles.
pub fn registered_profiles() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(n, _)| *n)
}
