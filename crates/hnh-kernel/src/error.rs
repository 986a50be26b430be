//! Kernel error types.
//!
//! Every error the kernel can raise is detected before any state is mutated.
//! Configuration problems surface at construction time; wrong-size vectors
//! surface at the call that received them. Lifecycle terminal states are not
//! errors and never appear here.

use thiserror::Error;

/// Errors that can occur while building or driving the trait-update kernel.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A configuration value is invalid (shock cap, bounds, override names, profiles).
    #[error("Invalid configuration for '{field}': {reason}")]
    ConfigInvalid {
        /// Configuration field that failed validation
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A vector had the wrong number of entries.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Which vector was malformed
        what: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Axis name is not one of the 8 canonical axes.
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    /// Parameter name is not one of the 32 canonical parameters.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// A scalar input was outside its domain.
    #[error("Value out of range for '{name}': {value}. {reason}")]
    OutOfRange {
        /// Input name
        name: String,
        /// Offending value as string
        value: String,
        /// Reason for rejection
        reason: String,
    },

    /// An identity with this id was already registered.
    #[error("Identity with id '{0}' already exists")]
    DuplicateIdentity(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

impl From<serde_json::Error> for KernelError {
    fn from(err: serde_json::Error) -> Self {
        KernelError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for KernelError {
    fn from(err: toml::de::Error) -> Self {
        KernelError::Serialization(err.to_string())
    }
}

impl KernelError {
    /// Create a configuration error.
    pub fn config_invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        KernelError::ConfigInvalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        KernelError::LengthMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        KernelError::OutOfRange {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors that can only be raised while building configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            KernelError::ConfigInvalid { .. }
                | KernelError::UnknownAxis(_)
                | KernelError::UnknownParameter(_)
        )
    }

    /// True for errors caused by malformed per-call inputs.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            KernelError::LengthMismatch { .. } | KernelError::OutOfRange { .. }
        )
    }
}
