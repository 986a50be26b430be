//! Lifecycle engine: the ALIVE / DISABLED / TRANSCENDED state machine.
//!
//! # Module Organization
//!
//! - [`types`] - `LifecycleEngine`, per-tick input and step result
//! - [`core`] - Constructors and accessors
//! - [`transitions`] - Tick update and terminal transitions

mod core;
mod transitions;
mod types;

#[cfg(test)]
mod tests_core;
#[cfg(test)]
mod tests_transitions;

pub use types::{LifecycleEngine, LifecycleInput, LifecycleStep, StepKind};
