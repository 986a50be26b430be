//! Replay fingerprints and verification.
//!
//! Two independent evaluations of the same configuration, identity and
//! aspect sequence must produce the same fingerprints and outputs equal
//! within [`REPLAY_TOLERANCE`].

mod fingerprint;
mod harness;

pub use self::fingerprint::{
    canonical_bytes, config_fingerprint, identity_fingerprint, input_fingerprint,
    memory_fingerprint, output_fingerprint, polarity_fingerprint, Fingerprint,
};
pub use self::harness::{
    max_abs_diff, replay_match, ReplayHarness, ReplaySignature, ReplayVerdict, REPLAY_TOLERANCE,
};
