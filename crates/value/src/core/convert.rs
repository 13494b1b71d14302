//! Conversions between `Value` and `serde_json::Value`.
//!
//! Byte payloads cross into JSON as base64 strings, matching how serde
//! models serialize `Vec<u8>` fields on the wire. Streams have no JSON
//! representation and cross as null; callers that need stream contents
//! drain them before encoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use crate::core::value::{Object, Value};

impl Value {
    /// Convert into a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => serde_json::Value::String(BASE64.encode(b)),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Stream(_) => serde_json::Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Serialize any serde model into its object form.
///
/// Returns `None` when the value does not serialize to a JSON object
/// (scalars, sequences, serialization failures).
pub fn to_map<T: Serialize>(value: &T) -> Option<Object> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => {
            Some(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
        }
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(error = %err, "model did not serialize to an object");
            None
        }
    }
}
