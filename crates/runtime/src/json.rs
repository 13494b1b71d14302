//! Best-effort JSON normalization.
//!
//! Nothing in this module returns an error: failures degrade to `None` or
//! `Value::Null`. Generated clients branch on the null sentinel, so
//! "improving" these into error-returning functions would break them.

use std::collections::HashMap;

use strato_value::{Object, Value};

/// Render a value as wire-ready text.
///
/// Strings and byte payloads pass through unchanged (no JSON quoting);
/// streams are drained fully and returned as text. Everything else is
/// JSON-encoded with `<`, `>`, `&` emitted literally and surrounding
/// whitespace trimmed. Returns `None` when the value cannot be
/// stringified (stream read failure, encode failure).
pub fn to_json_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bytes(b) => Some(String::from_utf8_lossy(b).into_owned()),
        Value::Stream(stream) => match stream.drain_to_string() {
            Ok(contents) => Some(contents),
            Err(err) => {
                tracing::debug!(error = %err, "stream drain failed during stringification");
                None
            }
        },
        other => match serde_json::to_string(other) {
            Ok(encoded) => Some(encoded.trim().to_string()),
            Err(err) => {
                tracing::debug!(error = %err, "value did not encode as JSON");
                None
            }
        },
    }
}

/// Parse text into a dynamic value via an ordered fallback cascade:
/// JSON object, JSON array, integer, boolean, float, and finally the null
/// sentinel.
///
/// The order is part of the contract: `"1"` takes the integer branch
/// before the float branch ever runs, and `"true"` only matches the
/// boolean branch. Numbers inside decoded objects and arrays keep their
/// integer/float lexical form.
pub fn parse_json(text: &str) -> Value {
    if let Ok(map) = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(text) {
        return Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect());
    }
    if let Ok(items) = serde_json::from_str::<Vec<serde_json::Value>>(text) {
        return Value::Array(items.into_iter().map(Value::from).collect());
    }
    if let Ok(n) = text.parse::<i64>() {
        return Value::integer(n);
    }
    if let Ok(b) = text.parse::<bool>() {
        return Value::boolean(b);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Value::float(f);
    }
    Value::Null
}

/// JSON-round-trip a value into a sequence of string-keyed maps.
///
/// Unset input yields `None`; so does any encode or decode failure.
pub fn to_array(value: &Value) -> Option<Vec<Object>> {
    if value.is_unset() {
        return None;
    }

    let encoded = value.to_json();
    match serde_json::from_value::<Vec<serde_json::Map<String, serde_json::Value>>>(encoded) {
        Ok(items) => Some(
            items
                .into_iter()
                .map(|map| map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
                .collect(),
        ),
        Err(err) => {
            tracing::debug!(error = %err, "value is not a sequence of objects");
            None
        }
    }
}

/// Convert a dynamic map into a string map via [`to_json_string`],
/// skipping null-valued entries.
///
/// The round trip through [`anyify_map_value`] is lossy for non-string
/// values: they come back as their JSON text, not their original type.
pub fn stringify_map_value(map: &Object) -> HashMap<String, Option<String>> {
    map.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), to_json_string(value)))
        .collect()
}

/// Convert a string map back into a dynamic map, treating every entry as
/// opaque text. Absent strings become empty strings.
pub fn anyify_map_value(map: &HashMap<String, Option<String>>) -> Object {
    map.iter()
        .map(|(key, value)| {
            (
                key.clone(),
                Value::string(value.clone().unwrap_or_default()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_json_string_passes_strings_through() {
        assert_eq!(
            to_json_string(&Value::string("hello")).as_deref(),
            Some("hello")
        );
        // No quoting, even for text that looks like JSON.
        assert_eq!(
            to_json_string(&Value::string(r#"{"a":1}"#)).as_deref(),
            Some(r#"{"a":1}"#)
        );
    }

    #[test]
    fn test_to_json_string_encodes_containers_compactly() {
        let mut map = Object::new();
        map.insert("a".to_string(), Value::integer(1));
        assert_eq!(
            to_json_string(&Value::Object(map)).as_deref(),
            Some(r#"{"a":1}"#)
        );
    }

    #[test]
    fn test_to_json_string_leaves_html_unescaped() {
        let rendered = to_json_string(&Value::array(vec![Value::string("<a>&</a>")])).unwrap();
        assert_eq!(rendered, r#"["<a>&</a>"]"#);
    }

    #[test]
    fn test_to_json_string_drains_streams() {
        let value = Value::stream("streamed body".as_bytes());
        assert_eq!(to_json_string(&value).as_deref(), Some("streamed body"));
    }

    #[test]
    fn test_to_json_string_failed_stream_is_none() {
        struct FailingReader;
        impl std::io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("connection reset"))
            }
        }

        assert_eq!(to_json_string(&Value::stream(FailingReader)), None);
    }

    #[test]
    fn test_parse_json_cascade() {
        assert_eq!(parse_json("123"), Value::integer(123));
        assert!(parse_json("123").is_integer());
        assert_eq!(parse_json("true"), Value::boolean(true));
        assert_eq!(parse_json("1.5"), Value::float(1.5));
        assert_eq!(parse_json("not json"), Value::Null);
        assert_eq!(parse_json(""), Value::Null);
    }

    #[test]
    fn test_parse_json_object_keeps_integer_form() {
        let value = parse_json(r#"{"a": 1}"#);
        let map = value.as_object().unwrap();
        assert!(map.get("a").unwrap().is_integer());
        assert_eq!(map.get("a").unwrap().as_i64(), Some(1));
    }

    #[test]
    fn test_parse_json_array() {
        let value = parse_json("[1, \"two\"]");
        let items = value.as_array().unwrap();
        assert_eq!(items[0], Value::integer(1));
        assert_eq!(items[1], Value::string("two"));
    }

    #[test]
    fn test_to_array() {
        let value = parse_json(r#"[{"a": 1}, {"b": 2}]"#);
        let rows = to_array(&value).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("a"), Some(&Value::integer(1)));
        assert_eq!(rows[1].get("b"), Some(&Value::integer(2)));
    }

    #[test]
    fn test_to_array_degrades_to_none() {
        assert_eq!(to_array(&Value::Null), None);
        assert_eq!(to_array(&Value::integer(0)), None);
        // Set, but not a sequence of objects.
        assert_eq!(to_array(&Value::integer(7)), None);
        assert_eq!(to_array(&Value::array(vec![Value::integer(1)])), None);
    }

    #[test]
    fn test_stringify_skips_null_entries() {
        let mut map = Object::new();
        map.insert("keep".to_string(), Value::string("v"));
        map.insert("drop".to_string(), Value::Null);

        let strings = stringify_map_value(&map);
        assert_eq!(strings.len(), 1);
        assert_eq!(
            strings.get("keep").and_then(|v| v.as_deref()),
            Some("v")
        );
    }

    #[test]
    fn test_stringify_anyify_round_trip_is_lossy_for_non_strings() {
        let mut map = Object::new();
        map.insert("s".to_string(), Value::string("plain"));
        map.insert("n".to_string(), Value::integer(7));
        map.insert("flag".to_string(), Value::boolean(true));

        let round_tripped = anyify_map_value(&stringify_map_value(&map));

        // Strings survive exactly; everything else becomes its JSON text.
        assert_eq!(round_tripped.get("s"), Some(&Value::string("plain")));
        assert_eq!(round_tripped.get("n"), Some(&Value::string("7")));
        assert_eq!(round_tripped.get("flag"), Some(&Value::string("true")));
    }
}
