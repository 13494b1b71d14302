//! The unified `Value` enum and its strict coercions.
//!
//! This is the central type of the crate: a closed tagged union over every
//! shape a deserialized API payload can take. Generated client code moves
//! values through the wire layer as `Value` and asserts concrete types at
//! the edges via the `try_*` coercions.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::Number;

use crate::core::kind::ValueKind;
use crate::error::{ValueError, ValueResult};
use crate::stream::ValueStream;

/// Ordered sequence of dynamic values.
pub type Array = Vec<Value>;

/// String-keyed mapping of dynamic values. Keys are always strings; the
/// iteration order is unspecified.
pub type Object = HashMap<String, Value>;

/// A runtime-typed value, as produced by generic JSON deserialization.
///
/// `Null` doubles as the absence sentinel: optional fields that were never
/// supplied deserialize to `Null`, observably distinct from a field set to
/// its zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null / absence sentinel
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Numeric value, preserving the integer/float form of its lexeme
    Number(Number),

    /// UTF-8 text
    String(String),

    /// Binary payload
    Bytes(Bytes),

    /// Ordered sequence of values
    Array(Array),

    /// String-keyed mapping of values
    Object(Object),

    /// Readable byte stream (response body)
    Stream(ValueStream),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value.
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value.
    pub const fn boolean(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Create an integer value.
    pub fn integer(v: i64) -> Self {
        Self::Number(Number::from(v))
    }

    /// Create a float value.
    ///
    /// Non-finite floats have no JSON representation and collapse to
    /// `Null`.
    pub fn float(v: f64) -> Self {
        match Number::from_f64(v) {
            Some(n) => Self::Number(n),
            None => Self::Null,
        }
    }

    /// Create a string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a bytes value.
    pub fn bytes(v: impl Into<Bytes>) -> Self {
        Self::Bytes(v.into())
    }

    /// Create an array value.
    pub fn array(v: impl Into<Array>) -> Self {
        Self::Array(v.into())
    }

    /// Create an object value.
    pub fn object(v: impl Into<Object>) -> Self {
        Self::Object(v.into())
    }

    /// Wrap a reader into a stream value.
    pub fn stream<R: std::io::Read + Send + 'static>(reader: R) -> Self {
        Self::Stream(ValueStream::new(reader))
    }

    // ==================== Type queries ====================

    /// Get the kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(n) if n.is_f64() => ValueKind::Float,
            Self::Number(_) => ValueKind::Integer,
            Self::String(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Stream(_) => ValueKind::Stream,
        }
    }

    /// Check if this is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a boolean.
    #[inline]
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Check if this is an integer-form number.
    #[inline]
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Number(n) if !n.is_f64())
    }

    /// Check if this is a float-form number.
    #[inline]
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_f64())
    }

    /// Check if this is a string.
    #[inline]
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if this is a bytes payload.
    #[inline]
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// Check if this is an array.
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is an object.
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if this is a stream.
    #[inline]
    #[must_use]
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    // ==================== Accessors (as_*) ====================

    /// Try to get as boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64 (integer-form numbers only).
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Try to get as f64 (any numeric form).
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Try to get as string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes reference.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as array reference.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get as stream reference.
    #[inline]
    #[must_use]
    pub fn as_stream(&self) -> Option<&ValueStream> {
        match self {
            Self::Stream(s) => Some(s),
            _ => None,
        }
    }

    // ==================== Strict coercions (try_*) ====================
    //
    // Each coercion asserts one concrete kind and returns its payload, or
    // fails with a type-mismatch error carrying the offending value's
    // rendering. Nothing here coerces across kinds.

    /// Assert an object and return an independently mutable copy of it.
    pub fn try_object(&self) -> ValueResult<Object> {
        match self {
            Self::Object(map) => Ok(map.clone()),
            other => Err(ValueError::type_mismatch("object", other.to_string())),
        }
    }

    /// Assert an integer and return it.
    ///
    /// Float-form numbers fail: `1.5` is not an integer even though it is
    /// numeric.
    pub fn try_integer(&self) -> ValueResult<i64> {
        match self {
            Self::Number(n) => n
                .as_i64()
                .ok_or_else(|| ValueError::type_mismatch("integer", n.to_string())),
            other => Err(ValueError::type_mismatch("integer", other.to_string())),
        }
    }

    /// Assert an integer and return it.
    ///
    /// Identical to [`try_integer`](Self::try_integer); both names are part
    /// of the public contract because generated call sites use both.
    pub fn try_number(&self) -> ValueResult<i64> {
        self.try_integer()
    }

    /// Assert a boolean and return it.
    pub fn try_boolean(&self) -> ValueResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(ValueError::type_mismatch("boolean", other.to_string())),
        }
    }

    /// Assert a string and return an owned copy.
    pub fn try_string(&self) -> ValueResult<String> {
        match self {
            Self::String(s) => Ok(s.clone()),
            other => Err(ValueError::type_mismatch("string", other.to_string())),
        }
    }

    /// Assert a bytes payload and return it.
    pub fn try_bytes(&self) -> ValueResult<Bytes> {
        match self {
            Self::Bytes(b) => Ok(b.clone()),
            other => Err(ValueError::type_mismatch("bytes", other.to_string())),
        }
    }

    /// Assert a readable stream and return a shared handle to it.
    pub fn try_readable(&self) -> ValueResult<ValueStream> {
        match self {
            Self::Stream(s) => Ok(s.clone()),
            other => Err(ValueError::type_mismatch("readable stream", other.to_string())),
        }
    }

    /// Assert an array and return a newly allocated copy covering every
    /// element.
    pub fn try_array(&self) -> ValueResult<Array> {
        match self {
            Self::Array(items) => Ok(items.iter().cloned().collect()),
            other => Err(ValueError::type_mismatch("array", other.to_string())),
        }
    }

    // ==================== Unset check ====================

    /// Whether this value counts as "unset".
    ///
    /// True for the absence sentinel and for the zero value of every
    /// non-container kind: `false`, `0`, `0.0`, and the empty string.
    /// Allocated-but-empty containers are set; so are streams.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !*b,
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::String(s) => s.is_empty(),
            Self::Bytes(_) | Self::Array(_) | Self::Object(_) | Self::Stream(_) => false,
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<ValueStream> for Value {
    fn from(v: ValueStream) -> Self {
        Self::Stream(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}
