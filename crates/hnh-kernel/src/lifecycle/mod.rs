//! Fatigue / will lifecycle.
//!
//! A per-identity state machine with one live state and two absorbing ones:
//!
//! ```text
//!            F >= L              W >= w_transcend
//! DISABLED <-------- ALIVE -------------------> TRANSCENDED
//! ```
//!
//! While ALIVE, each tick raises or relaxes fatigue `F` against the
//! identity's limit `L` and gates the transit and memory terms by the
//! activity factor `A_g = 1 - q^rho`. Only O(1) running sums are carried.
//!
//! # Example
//!
//! ```
//! use hnh_kernel::config::LifecycleConfig;
//! use hnh_kernel::lifecycle::{LifecycleEngine, LifecycleInput, StepKind};
//!
//! let base = [0.5; 32];
//! let sensitivity = [0.5; 32];
//! let effect = [0.02; 32];
//!
//! let mut engine = LifecycleEngine::new(&LifecycleConfig::default(), 0.5, 0.5).unwrap();
//! let step = engine
//!     .step(&LifecycleInput {
//!         base: &base,
//!         sensitivity: &sensitivity,
//!         transit_effect: &effect,
//!         memory_delta: None,
//!         stress: 0.3,
//!     })
//!     .unwrap();
//! assert_eq!(step.kind, StepKind::Active);
//! assert!(step.state.is_some());
//! ```

mod engine;
pub mod fatigue;
mod state;

pub use self::engine::{LifecycleEngine, LifecycleInput, LifecycleStep, StepKind};
pub use self::fatigue::{
    activity_factor, age_psy_years, fatigue_limit, load, normalized_fatigue, recovery,
    update_fatigue, will_delta, ACTIVITY_SENSITIVE_PARAMETERS,
};
pub use self::state::{LifecycleSnapshot, LifecycleStatus};
