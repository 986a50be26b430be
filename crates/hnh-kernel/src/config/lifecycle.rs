//! Lifecycle settings and the versioned constants table.
//!
//! Every numeric tunable of the fatigue/will model lives in
//! [`LifecycleConstants`]. The table is part of the config fingerprint, so
//! changing a default means bumping [`LIFECYCLE_CONSTANTS_VERSION`].
//!
//! ```text
//! stress      C_T=3.0  theta_shock=0.90  alpha_shock=0.6
//! load        beta_s=0.6  beta_r=0.7
//! recovery    gamma_0=0.12  gamma_r=0.30  gamma_c=0.20
//! fatigue     lambda_up=0.010  lambda_down=0.009
//! limit       L0=14.0  delta_r=0.8  delta_s=0.5
//! activity    rho=2.5  delta_p=0.08  cap=0.1
//! age         eta_0=0.80  eta_1=0.45  kappa=2.0
//! will        q_crit=0.75  eta_w=0.12  xi_w=0.30  dW in [-0.03, 0.02]
//! transcend   W=0.995
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Version of the default constants table.
pub const LIFECYCLE_CONSTANTS_VERSION: u32 = 1;

/// Lifecycle constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConstants {
    /// Table version; must equal [`LIFECYCLE_CONSTANTS_VERSION`].
    pub version: u32,

    /// Transit stress normaliser `C_T`.
    pub c_t: f64,
    /// Weight of one exact hard aspect in raw transit intensity.
    pub hard_aspect_weight: f64,
    pub theta_shock: f64,
    pub alpha_shock: f64,

    pub beta_s: f64,
    pub beta_r: f64,

    pub gamma_0: f64,
    pub gamma_r: f64,
    pub gamma_c: f64,

    pub lambda_up: f64,
    pub lambda_down: f64,

    /// Base fatigue limit `L0`.
    pub l0: f64,
    pub delta_r: f64,
    pub delta_s: f64,

    /// Activity suppression exponent.
    pub rho: f64,
    /// Degradation rate for activity-sensitive parameters.
    pub delta_p: f64,
    /// Fixed cap on that degradation.
    pub activity_cap: f64,

    pub eta_0: f64,
    pub eta_1: f64,
    pub kappa: f64,

    /// Normalised fatigue above which burnout accrues.
    pub q_crit: f64,
    pub eta_w: f64,
    pub xi_w: f64,
    pub delta_w_min: f64,
    pub delta_w_max: f64,

    /// Will threshold for transcendence.
    pub w_transcend: f64,
}

impl Default for LifecycleConstants {
    fn default() -> Self {
        Self {
            version: LIFECYCLE_CONSTANTS_VERSION,
            c_t: 3.0,
            hard_aspect_weight: 1.0,
            theta_shock: 0.90,
            alpha_shock: 0.6,
            beta_s: 0.6,
            beta_r: 0.7,
            gamma_0: 0.12,
            gamma_r: 0.30,
            gamma_c: 0.20,
            lambda_up: 0.010,
            lambda_down: 0.009,
            l0: 14.0,
            delta_r: 0.8,
            delta_s: 0.5,
            rho: 2.5,
            delta_p: 0.08,
            activity_cap: 0.1,
            eta_0: 0.80,
            eta_1: 0.45,
            kappa: 2.0,
            q_crit: 0.75,
            eta_w: 0.12,
            xi_w: 0.30,
            delta_w_min: -0.03,
            delta_w_max: 0.02,
            w_transcend: 0.995,
        }
    }
}

impl LifecycleConstants {
    /// Validate the constants table.
    pub fn validate(&self) -> KernelResult<()> {
        if self.version != LIFECYCLE_CONSTANTS_VERSION {
            return Err(KernelError::config_invalid(
                "lifecycle.constants.version",
                format!(
                    "unsupported version {}, expected {}",
                    self.version, LIFECYCLE_CONSTANTS_VERSION
                ),
            ));
        }

        let non_negative = [
            ("hard_aspect_weight", self.hard_aspect_weight),
            ("alpha_shock", self.alpha_shock),
            ("beta_s", self.beta_s),
            ("gamma_0", self.gamma_0),
            ("gamma_r", self.gamma_r),
            ("gamma_c", self.gamma_c),
            ("lambda_up", self.lambda_up),
            ("lambda_down", self.lambda_down),
            ("delta_r", self.delta_r),
            ("delta_p", self.delta_p),
            ("eta_0", self.eta_0),
            ("eta_1", self.eta_1),
            ("eta_w", self.eta_w),
            ("xi_w", self.xi_w),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(constant_error(name, value, "must be finite and >= 0"));
            }
        }

        let positive = [
            ("c_t", self.c_t),
            ("l0", self.l0),
            ("rho", self.rho),
            ("kappa", self.kappa),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(constant_error(name, value, "must be finite and > 0"));
            }
        }

        let unit = [
            ("theta_shock", self.theta_shock),
            ("beta_r", self.beta_r),
            ("activity_cap", self.activity_cap),
            ("q_crit", self.q_crit),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(constant_error(name, value, "must be in [0, 1]"));
            }
        }

        // delta_s < 1 keeps the limit strictly positive
        if !(0.0..1.0).contains(&self.delta_s) {
            return Err(constant_error("delta_s", self.delta_s, "must be in [0, 1)"));
        }
        if !(self.w_transcend > 0.0 && self.w_transcend <= 1.0) {
            return Err(constant_error(
                "w_transcend",
                self.w_transcend,
                "must be in (0, 1]",
            ));
        }
        if !(self.delta_w_min.is_finite()
            && self.delta_w_max.is_finite()
            && self.delta_w_min <= self.delta_w_max)
        {
            return Err(KernelError::config_invalid(
                "lifecycle.constants.delta_w_min",
                format!(
                    "delta_w_min ({}) must be <= delta_w_max ({})",
                    self.delta_w_min, self.delta_w_max
                ),
            ));
        }
        Ok(())
    }
}

fn constant_error(name: &str, value: f64, reason: &str) -> KernelError {
    KernelError::config_invalid(
        format!("lifecycle.constants.{}", name),
        format!("{}, got {}", reason, value),
    )
}

/// Lifecycle configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Run the fatigue/will state machine.
    pub enabled: bool,

    /// Fatigue at construction. Must be >= 0.
    pub initial_fatigue: f64,

    /// Will at construction. Range: `[0.0, 1.0]`
    pub initial_will: f64,

    /// Versioned constants.
    pub constants: LifecycleConstants,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_fatigue: 0.0,
            initial_will: 0.0,
            constants: LifecycleConstants::default(),
        }
    }
}

impl LifecycleConfig {
    /// Lifecycle switched off; the assembler runs ungated.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Validate the lifecycle configuration.
    pub fn validate(&self) -> KernelResult<()> {
        if !self.initial_fatigue.is_finite() || self.initial_fatigue < 0.0 {
            return Err(KernelError::config_invalid(
                "lifecycle.initial_fatigue",
                format!("must be finite and >= 0, got {}", self.initial_fatigue),
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_will) {
            return Err(KernelError::config_invalid(
                "lifecycle.initial_will",
                format!("must be in [0, 1], got {}", self.initial_will),
            ));
        }
        self.constants.validate()
    }
}
