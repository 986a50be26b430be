//! Kernel configuration types.
//!
//! [`KernelConfig`] aggregates the settings of every kernel stage. All types
//! derive serde and default sensibly, so a TOML document only needs to name
//! what it changes:
//!
//! ```toml
//! [bounds]
//! global_max_delta = 0.1
//! shock_threshold = 0.5
//! shock_multiplier = 1.5
//!
//! [bounds.axis_max_delta]
//! emotional_tone = 0.02
//!
//! [modulation]
//! mode = "scale_delta"
//! ```
//!
//! The kernel never touches the filesystem; callers read the document and
//! hand the text to [`KernelConfig::from_toml_str`].

mod bounds;
mod lifecycle;
mod mapper;
mod modulation;
mod phase;


pub use self::bounds::{DeltaBoundConfig, DeltaBoundRaw, SHOCK_MULTIPLIER_HARD_CAP};
pub use self::lifecycle::{LifecycleConfig, LifecycleConstants, LIFECYCLE_CONSTANTS_VERSION};
pub use self::mapper::{
    default_aspect_weights, AspectWeightTable, BodyAmplification, MapperConfig, OrbConfig,
};
pub use self::modulation::{ModulationConfig, ModulationMode};
pub use self::phase::PhaseConfig;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Main kernel configuration containing all stage settings.
///
/// # Example
///
/// ```
/// use hnh_kernel::config::KernelConfig;
///
/// let config = KernelConfig::default();
/// assert!(config.validate().is_ok());
/// assert!(config.lifecycle.enabled);
/// assert!(!config.phase.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KernelConfig {
    /// Delta bounds and shock handling.
    pub bounds: DeltaBoundConfig,

    /// Aspect-to-delta mapping.
    pub mapper: MapperConfig,

    /// Optional polarity response modulation.
    pub modulation: ModulationConfig,

    /// Fatigue/will state machine.
    pub lifecycle: LifecycleConfig,

    /// Optional transit smoothing.
    pub phase: PhaseConfig,
}

impl KernelConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default stages around a custom bound config.
    pub fn with_bounds(bounds: DeltaBoundConfig) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> KernelResult<Self> {
        let config: KernelConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> KernelResult<String> {
        toml::to_string(self).map_err(|e| KernelError::Serialization(e.to_string()))
    }

    /// Validate the configuration, returning the first problem found.
    ///
    /// Bounds are validated while they are built and need no check here.
    pub fn validate(&self) -> KernelResult<()> {
        self.mapper.validate()?;
        self.modulation.validate()?;
        self.lifecycle.validate()?;
        self.phase.validate()?;
        Ok(())
    }
}
