//! Model validation entry point.
//!
//! Generated model types implement [`Validate`] with whatever constraints
//! their API definition declares; [`validate_model`] is the single entry
//! point generated client code calls before serializing a request.

use crate::error::RuntimeResult;

/// A model that can check its own field constraints.
pub trait Validate {
    fn validate(&self) -> RuntimeResult<()>;
}

/// Validate an optional model. An absent model is vacuously valid.
pub fn validate_model<T: Validate>(model: Option<&T>) -> RuntimeResult<()> {
    match model {
        Some(model) => model.validate(),
        None => Ok(()),
    }
}
