//! Stateless helpers for generated Strato cloud clients.
//!
//! Every function here is an independent utility wrapping the dynamic value
//! model from [`strato_value`]: JSON normalization, form encoding, nonce
//! generation, HTTP status classification, user-agent assembly, date
//! formatting, reader draining, and the [`RuntimeOptions`] record consumed
//! by the transport layer.
//!
//! Two error policies coexist on purpose. Coercions and reader draining
//! are strict and return [`RuntimeError`]. The formatting helpers
//! ([`to_json_string`], [`parse_json`], [`to_array`]) are best-effort:
//! they degrade to a null sentinel and never surface an error, because
//! generated client code depends on that contract.

pub mod agent;
pub mod error;
pub mod form;
pub mod io;
pub mod json;
pub mod nonce;
pub mod options;
pub mod status;
pub mod time;
pub mod validate;

pub use agent::{default_user_agent, get_user_agent};
pub use error::{RuntimeError, RuntimeResult};
pub use form::to_form_string;
pub use io::{read_as_bytes, read_as_json, read_as_string};
pub use json::{anyify_map_value, parse_json, stringify_map_value, to_array, to_json_string};
pub use nonce::get_nonce;
pub use options::RuntimeOptions;
pub use status::{is_2xx, is_3xx, is_4xx, is_5xx};
pub use time::{get_date_utc_string, sleep};
pub use validate::{Validate, validate_model};

// Generated clients reach the value model through this facade.
pub use strato_value::{Array, Number, Object, Value, ValueError, ValueKind, ValueStream, to_map};
