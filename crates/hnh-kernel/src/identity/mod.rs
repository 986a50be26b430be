//! Identities: fixed base and sensitivity vectors plus derived scalars.
//!
//! - [`IdentityProfile`]: the two-accessor interface the kernel consumes.
//! - [`IdentityCore`]: the concrete, validated implementation.
//! - [`IdentityRegistry`]: id uniqueness, injected by the caller.
//! - [`SensitivityStats`]: debug summary of a sensitivity vector.

mod core;
mod registry;
mod stats;

pub use self::core::{global_sensitivity_of, resilience_of, IdentityCore, IdentityProfile};
pub use self::registry::IdentityRegistry;
pub use self::stats::SensitivityStats;
