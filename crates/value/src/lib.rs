//! Dynamic value model for generated Strato cloud clients.
//!
//! Deserializing heterogeneous API payloads produces values whose shape is
//! only known at runtime. This crate gives those values a closed
//! representation, the [`Value`] enum, together with strict coercions back
//! into concrete types, JSON interop, and a shared handle type for readable
//! response bodies.
//!
//! Strict coercions (`try_*`) fail loudly with a [`ValueError`] when the
//! runtime kind does not match; the non-failing `as_*` accessors return
//! `Option` instead. Nothing in this crate coerces silently.

pub mod core;
pub mod error;
pub mod stream;

pub use self::core::convert::to_map;
pub use self::core::kind::ValueKind;
pub use self::core::value::{Array, Object, Value};
pub use error::{ValueError, ValueResult};
pub use stream::ValueStream;

// Numbers keep the integer/float form of their source lexeme.
pub use serde_json::Number;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{Array, Number, Object, Value, ValueError, ValueKind, ValueResult, ValueStream};
}
