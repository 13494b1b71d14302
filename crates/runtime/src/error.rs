//! Runtime error type for the strict helper paths.

use thiserror::Error;

use strato_value::ValueError;

/// Errors raised by the strict helpers (coercion wrappers, reader
/// draining, model validation).
///
/// The best-effort formatting helpers never produce this type.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A value coercion or conversion failed.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Draining a reader failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    /// A payload could not be decoded as JSON.
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A model failed validation.
    #[error("validation failed: {reason}")]
    Validation { reason: String },
}

impl RuntimeError {
    /// Create a validation error.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

/// Result alias for runtime helpers.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
