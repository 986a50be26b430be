//! Transit layer: aspect records in, stress and deltas out.
//!
//! - [`aspect`]: aspect types, bodies and the records the astronomical layer
//!   supplies.
//! - [`mapper`]: aspect list → raw 32-entry delta with axis isolation.
//! - [`stress`]: hard-aspect stress `S_T`.
//! - [`snapshot`]: stress plus raw and bounded deltas for one tick.
//! - [`phase`]: optional smoothing of the daily effect.

pub mod aspect;
pub mod mapper;
pub mod phase;
pub mod snapshot;
pub mod stress;

pub use self::aspect::{AspectRecord, AspectType, Body, BodyClass};
pub use self::mapper::{amplification, body_axes, intensity, reachable_axes, TransitDeltaMapper};
pub use self::phase::PhaseState;
pub use self::snapshot::TransitSnapshot;
pub use self::stress::{raw_transit_intensity, transit_stress};
