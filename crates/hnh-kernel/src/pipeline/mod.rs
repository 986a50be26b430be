//! Per-identity tick pipeline.
//!
//! `KernelPipeline` runs the kernel stages in a fixed order each tick:
//! - TransitDeltaMapper and transit stress
//! - hierarchical bounds with shock widening
//! - optional ResponseModulator
//! - optional phase smoothing
//! - LifecycleEngine gating and degradation (or plain assembly)
//!
//! Each tick yields a [`TickRecord`] that the caller may persist with
//! [`TickRecord::to_json_line`].

mod kernel_pipeline;
mod record;
mod state;


pub use self::kernel_pipeline::KernelPipeline;
pub use self::record::{TickInput, TickRecord};
pub use self::state::BehavioralState;
