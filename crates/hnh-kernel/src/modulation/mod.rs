//! Optional polarity response modulation.
//!
//! A polarity score `E` (see [`polarity`]) and a named weight profile (see
//! [`profile`]) produce a multiplier vector in `[1 - mcap, 1 + mcap]` that
//! scales either the bounded delta or the sensitivity vector.

pub mod modulator;
pub mod polarity;
pub mod profile;

pub use self::modulator::{compute_multipliers, ResponseModulator, IDENTITY_MULTIPLIERS};
pub use self::polarity::{
    polarity_score, sect_score, sign_polarity, sign_polarity_score, PlanetWeights,
    PolarityWeights, Sex,
};
pub use self::profile::{is_registered_profile, registered_profiles, weight_profile, W32_V1};
