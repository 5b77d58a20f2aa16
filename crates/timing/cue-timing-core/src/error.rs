//! Error types for the timing core

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Comprehensive error type for timing and composition operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimingError {
    /// Execution requested before a schedule was resolved
    #[error("animation on {target}.{param} executed before absolute scaling")]
    UnscaledExecution { target: String, param: String },

    /// Aggregate query on a group with zero flattened entries
    #[error("aggregate run-time query on an empty animation group")]
    EmptyGroup,

    /// Rescale interval with stop ahead of start, or non-finite endpoints
    #[error("invalid rescale interval [{start}, {stop}]")]
    InvalidInterval { start: f64, stop: f64 },

    /// Run time that is zero, negative, or non-finite
    #[error("invalid run time: {seconds}s")]
    InvalidRunTime { seconds: f64 },

    /// Invalid time value
    #[error("invalid time value: {seconds}s")]
    InvalidTime { seconds: f64 },

    /// Parameter whose current value cannot be animated the requested way
    #[error("parameter {param} has unsupported value type: {reason}")]
    UnknownValueType { param: String, reason: String },

    /// Value type mismatch
    #[error("value type mismatch: expected {expected:?}, got {actual:?}")]
    ValueTypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Verb not implemented by a target's capability interface
    #[error("verb {verb} not supported by target {target}")]
    VerbUnsupported { verb: String, target: String },

    /// Failure surfaced by the host document
    #[error("host document error: {reason}")]
    Host { reason: String },
}

impl TimingError {
    /// Create a new host-side error
    pub fn host(reason: impl Into<String>) -> Self {
        Self::Host {
            reason: reason.into(),
        }
    }

    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnscaledExecution { .. } => "execution",
            Self::EmptyGroup => "composition",
            Self::InvalidInterval { .. } | Self::InvalidRunTime { .. } | Self::InvalidTime { .. } => {
                "validation"
            }
            Self::UnknownValueType { .. } | Self::ValueTypeMismatch { .. } => "value",
            Self::VerbUnsupported { .. } => "animator",
            Self::Host { .. } => "host",
        }
    }
}
