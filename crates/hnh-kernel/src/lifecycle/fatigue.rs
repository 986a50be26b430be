//! Fatigue, activity and will formulas.
//!
//! ```text
//! L        = L0 * (1 + delta_r*R) * (1 - delta_s*S_g)         (floored at 1e-9)
//! q        = clamp(F / L, 0, 1)
//! load     = shock(S) * S * (1 + beta_s*S_g) * (1 - beta_r*R)
//! recovery = gamma_0 + gamma_r*R + gamma_c*(1 - S)
//! F'       = max(0, F + lambda_up*load - lambda_down*recovery)
//! A_g      = clamp(1 - q^rho, 0, 1)
//! ```
//!
//! All functions are pure.

use crate::config::LifecycleConstants;
use crate::schema::{clamp01, parameter_index, Vector32};

/// Lower floor for the fatigue limit.
pub const MIN_FATIGUE_LIMIT: f64 = 1e-9;

/// Days per year for psychological age.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Parameters degraded as activity drops.
pub const ACTIVITY_SENSITIVE_PARAMETERS: [&str; 6] = [
    "initiative",
    "curiosity",
    "persistence",
    "pacing",
    "challenge_level",
    "verbosity",
];

/// Shock factor on load: `1 + alpha_shock` once stress reaches `theta_shock`.
#[inline]
pub fn shock_factor(stress: f64, c: &LifecycleConstants) -> f64 {
    if stress >= c.theta_shock {
        1.0 + c.alpha_shock
    } else {
        1.0
    }
}

/// Identity-specific fatigue limit `L`.
pub fn fatigue_limit(resilience: f64, global_sensitivity: f64, c: &LifecycleConstants) -> f64 {
    let limit = c.l0 * (1.0 + c.delta_r * resilience) * (1.0 - c.delta_s * global_sensitivity);
    limit.max(MIN_FATIGUE_LIMIT)
}

/// Normalised fatigue `q`.
#[inline]
pub fn normalized_fatigue(fatigue: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 1.0;
    }
    clamp01(fatigue / limit)
}

/// Daily load.
pub fn load(stress: f64, resilience: f64, global_sensitivity: f64, c: &LifecycleConstants) -> f64 {
    shock_factor(stress, c)
        * stress
        * (1.0 + c.beta_s * global_sensitivity)
        * (1.0 - c.beta_r * resilience)
}

/// Daily recovery.
pub fn recovery(stress: f64, resilience: f64, c: &LifecycleConstants) -> f64 {
    c.gamma_0 + c.gamma_r * resilience + c.gamma_c * (1.0 - stress)
}

/// Next fatigue value.
#[inline]
pub fn update_fatigue(fatigue: f64, load: f64, recovery: f64, c: &LifecycleConstants) -> f64 {
    (fatigue + c.lambda_up * load - c.lambda_down * recovery).max(0.0)
}

/// Activity suppression factor `A_g`.
#[inline]
pub fn activity_factor(q: f64, c: &LifecycleConstants) -> f64 {
    clamp01(1.0 - q.powf(c.rho))
}

/// Psychological age in years after `days` ticks at normalised fatigue `q`.
pub fn age_psy_years(days: f64, q: f64, c: &LifecycleConstants) -> f64 {
    days * (c.eta_0 + c.eta_1 * q.powf(c.kappa)) / DAYS_PER_YEAR
}

/// Will change at death: `clamp(eta_w*mean(v) - xi_w*mean(burn), dW_min, dW_max)`.
///
/// Means are taken over `max(1, days)`.
pub fn will_delta(sum_activity_stress: f64, sum_burnout: f64, days: u64, c: &LifecycleConstants) -> f64 {
    let n = days.max(1) as f64;
    let raw = c.eta_w * (sum_activity_stress / n) - c.xi_w * (sum_burnout / n);
    raw.clamp(c.delta_w_min, c.delta_w_max)
}

/// Indices of [`ACTIVITY_SENSITIVE_PARAMETERS`].
pub fn activity_sensitive_indices() -> impl Iterator<Item = usize> {
    ACTIVITY_SENSITIVE_PARAMETERS
        .iter()
        .filter_map(|name| parameter_index(name).ok())
}

/// Lower every activity-sensitive parameter by
/// `min(activity_cap, delta_p * (1 - A_g))`, clamped to `[0, 1]`.
pub fn apply_degradation(params: &mut Vector32, activity: f64, c: &LifecycleConstants) {
    let reduction = c.activity_cap.min(c.delta_p * (1.0 - activity));
    for p in activity_sensitive_indices() {
        params[p] = clamp01(params[p] - reduction);
    }
}
