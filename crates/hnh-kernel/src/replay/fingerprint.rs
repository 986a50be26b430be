//! Deterministic fingerprints.
//!
//! Values are encoded as compact JSON with sorted keys (by way of
//! `serde_json::Value`, whose maps are ordered) and hashed with XXH3-128.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::KernelConfig;
use crate::error::{KernelError, KernelResult};
use crate::schema::{AxisVector, Vector32};
use crate::transit::AspectRecord;

/// 128-bit fingerprint. Displays and serializes as 32 lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Fingerprint(pub u128);

impl Fingerprint {
    /// Hash raw bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_128(bytes))
    }

    /// Hash the canonical encoding of `value`.
    pub fn of<T: Serialize + ?Sized>(value: &T) -> KernelResult<Self> {
        Ok(Self::from_bytes(&canonical_bytes(value)?))
    }

    /// Raw value.
    #[inline]
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// 32-digit hex form.
    pub fn to_hex(&self) -> String {
        format!("{:032x}", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = KernelError;

    fn from_str(s: &str) -> KernelResult<Self> {
        if s.len() != 32 {
            return Err(KernelError::Serialization(format!(
                "fingerprint must be 32 hex digits, got {} chars",
                s.len()
            )));
        }
        u128::from_str_radix(s, 16)
            .map(Self)
            .map_err(|e| KernelError::Serialization(format!("invalid fingerprint '{}': {}", s, e)))
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.to_hex()
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = KernelError;

    fn try_from(s: String) -> KernelResult<Self> {
        s.parse()
    }
}

/// Canonical byte encoding: compact JSON, object keys sorted.
pub fn canonical_bytes<T: Serialize + ?Sized>(value: &T) -> KernelResult<Vec<u8>> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_vec(&value)?)
}

/// Fingerprint of the full kernel configuration, constants version included.
pub fn config_fingerprint(config: &KernelConfig) -> KernelResult<Fingerprint> {
    Fingerprint::of(config)
}

/// Fingerprint of a per-tick aspect list sequence, order preserved.
pub fn input_fingerprint(ticks: &[Vec<AspectRecord>]) -> KernelResult<Fingerprint> {
    Fingerprint::of(ticks)
}

/// Fingerprint of a per-tick memory delta sequence. Ticks without a delta
/// encode as `null`, so their position still counts.
pub fn memory_fingerprint(deltas: &[Option<Vector32>]) -> KernelResult<Fingerprint> {
    let encoded: Vec<Option<&[f64]>> = deltas
        .iter()
        .map(|d| d.as_ref().map(|v| v.as_slice()))
        .collect();
    Fingerprint::of(&encoded)
}

/// Fingerprint of the caller-supplied polarity score, `null` when unmodulated.
pub fn polarity_fingerprint(polarity: Option<f64>) -> KernelResult<Fingerprint> {
    Fingerprint::of(&json!({ "polarity": polarity }))
}

/// Fingerprint of an identity's id and vectors.
pub fn identity_fingerprint(
    identity_id: &str,
    base: &Vector32,
    sensitivity: &Vector32,
) -> KernelResult<Fingerprint> {
    Fingerprint::of(&json!({
        "identity_id": identity_id,
        "base_vector": base.as_slice(),
        "sensitivity_vector": sensitivity.as_slice(),
    }))
}

/// Fingerprint of one tick's outputs.
pub fn output_fingerprint(params: &Vector32, axes: &AxisVector) -> KernelResult<Fingerprint> {
    Fingerprint::of(&json!({
        "params_final": params.as_slice(),
        "axis_final": axes.as_slice(),
    }))
}
