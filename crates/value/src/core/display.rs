//! Display implementation for `Value`.
//!
//! This is the default stringification used by form encoding and by
//! coercion error messages: scalars render bare (no JSON quoting),
//! containers render as compact JSON, streams render as an opaque marker.

use std::fmt;

use crate::core::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Bool(b) => write!(f, "{b}"),

            Value::Number(n) => write!(f, "{n}"),

            Value::String(s) => write!(f, "{s}"),

            Value::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),

            Value::Array(_) | Value::Object(_) => match serde_json::to_string(&self.to_json()) {
                Ok(rendered) => write!(f, "{rendered}"),
                Err(_) => write!(f, "{}", self.kind().name()),
            },

            Value::Stream(_) => write!(f, "<stream>"),
        }
    }
}
