//! Response-body draining.
//!
//! These sit on the strict path: an I/O failure while reading a response
//! body must surface to the caller, unlike the best-effort formatting
//! helpers.

use std::io::Read;

use strato_value::Value;

use crate::error::RuntimeResult;

/// Drain a reader and return the raw bytes.
pub fn read_as_bytes(mut reader: impl Read) -> RuntimeResult<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Drain a reader and return its contents as text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_as_string(reader: impl Read) -> RuntimeResult<String> {
    let bytes = read_as_bytes(reader)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Drain a reader and decode its contents as JSON.
///
/// An empty body yields `Value::Null`. Decoded numbers keep their
/// integer/float lexical form.
pub fn read_as_json(reader: impl Read) -> RuntimeResult<Value> {
    let bytes = read_as_bytes(reader)?;
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    let decoded: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(Value::from(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_as_bytes() {
        let body: &[u8] = b"\x00\x01binary";
        assert_eq!(read_as_bytes(body).unwrap(), body);
    }

    #[test]
    fn test_read_as_string() {
        assert_eq!(read_as_string("plain text".as_bytes()).unwrap(), "plain text");
    }

    #[test]
    fn test_read_as_json() {
        let value = read_as_json(r#"{"n": 3}"#.as_bytes()).unwrap();
        assert_eq!(
            value.as_object().unwrap().get("n"),
            Some(&Value::integer(3))
        );
    }

    #[test]
    fn test_read_as_json_empty_body_is_null() {
        assert_eq!(read_as_json("".as_bytes()).unwrap(), Value::Null);
    }

    #[test]
    fn test_read_as_json_invalid_body_errors() {
        assert!(read_as_json("{not json".as_bytes()).is_err());
    }

    #[test]
    fn test_read_errors_surface() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("connection reset"))
            }
        }

        assert!(read_as_string(FailingReader).is_err());
    }
}
