//! Error types for value coercion and conversion.

use thiserror::Error;

/// Errors raised by strict operations on [`Value`](crate::Value).
///
/// Best-effort formatting helpers never return this type; they degrade to a
/// null sentinel instead. Only strict coercions and explicit conversions
/// fail loudly.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A coercion asserted a kind the value does not hold.
    ///
    /// Carries the rendering of the offending value so generated-client
    /// error messages can show what was actually received.
    #[error("{rendering} is not a {expected}")]
    TypeMismatch {
        expected: &'static str,
        rendering: String,
    },

    /// A value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Input could not be deserialized into a value.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ValueError {
    /// Create a type mismatch error from the expected type name and the
    /// offending value's rendering.
    pub fn type_mismatch(expected: &'static str, rendering: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            rendering: rendering.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }
}

/// Result alias for value operations.
pub type ValueResult<T> = Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = ValueError::type_mismatch("object", "[1,2]");
        assert_eq!(err.to_string(), "[1,2] is not a object");
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(
            ValueError::serialization("boom"),
            ValueError::Serialization(_)
        ));
        assert!(matches!(
            ValueError::deserialization("boom"),
            ValueError::Deserialization(_)
        ));
    }
}
