//! Error types for the alert engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during evaluation.
///
/// These never cross the public [`evaluate`](crate::evaluate) boundary:
/// that entry point converts any error into a non-alerting diagnostic
/// decision. The fallible path is exposed separately for callers that want
/// to observe faults directly.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid analysis config: {0}")]
    InvalidConfig(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Create an invalid-config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
