//! Deterministic trait-update kernel for behavioral identities.
//!
//! Each identity carries a fixed 32-parameter base vector and a matching
//! sensitivity vector. Every tick, a list of planetary aspects is mapped to
//! a raw per-parameter delta, clamped by a hierarchical bound with stress
//! driven shock widening, optionally modulated by a polarity score, gated by
//! a fatigue/will lifecycle, and assembled into a final vector in `[0, 1]`.
//!
//! # Modules
//!
//! - [`schema`]: the 8 axes and 32 parameters, in canonical order
//! - [`config`]: configuration for every stage, TOML-loadable
//! - [`error`]: error type and result alias
//! - [`transit`]: aspect records, delta mapping, stress and smoothing
//! - [`bounds`]: bound resolution and shock-aware clamping
//! - [`modulation`]: polarity score and symmetric response multipliers
//! - [`assembler`]: base + transit + memory assembly with axis means
//! - [`lifecycle`]: fatigue/will state machine
//! - [`identity`]: identity profiles and the id registry
//! - [`pipeline`]: per-identity tick orchestration and tick records
//! - [`replay`]: fingerprints and reproducibility checks
//!
//! # Example
//!
//! ```
//! use hnh_kernel::{IdentityCore, KernelConfig, KernelPipeline, ReplayHarness, TickInput};
//! use hnh_kernel::transit::{AspectRecord, AspectType};
//!
//! let config = KernelConfig::default();
//! let identity = IdentityCore::new("ada", [0.5; 32], [0.4; 32]).unwrap();
//! let ticks = vec![TickInput::new(vec![
//!     AspectRecord::new("Mars", "Saturn", AspectType::Square, 91.0),
//! ])];
//!
//! let mut pipeline = KernelPipeline::new(config.clone(), identity.clone(), None).unwrap();
//! let record = pipeline.tick(&ticks[0]).unwrap();
//! assert!(record.stress > 0.0);
//!
//! let verdict = ReplayHarness::new().verify(&config, &identity, None, &ticks).unwrap();
//! assert!(verdict.passed());
//! ```

pub mod assembler;
pub mod bounds;
pub mod config;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod modulation;
pub mod pipeline;
pub mod replay;
pub mod schema;
pub mod transit;

pub use config::{DeltaBoundConfig, KernelConfig, SHOCK_MULTIPLIER_HARD_CAP};
pub use error::{KernelError, KernelResult};

// Re-export schema types for convenience
pub use schema::{AxisVector, Vector32, NUM_AXES, NUM_PARAMETERS};

// Re-export identity types for convenience
pub use identity::{IdentityCore, IdentityProfile, IdentityRegistry};

// Re-export lifecycle types for convenience
pub use lifecycle::{LifecycleEngine, LifecycleSnapshot, LifecycleStatus};

// Re-export pipeline and replay types for convenience
pub use pipeline::{KernelPipeline, TickInput, TickRecord};
pub use replay::{Fingerprint, ReplayHarness, ReplaySignature, ReplayVerdict, REPLAY_TOLERANCE};
