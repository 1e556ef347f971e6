//! Layered error types for the model layer.
//!
//! - [`ModelError`] - a conversion failure at a field path, with its [`ErrorKind`]
//! - [`ErrorCode`] - stable machine-readable code for each kind
//! - [`Diagnostic`] - serializable, user-facing report of a [`ModelError`]
//! - [`BodyError`] - failures at the request/response body edges

mod body_error;
mod diagnostic;
mod model_error;

pub use body_error::BodyError;
pub use diagnostic::Diagnostic;
pub use model_error::{ErrorCode, ErrorKind, JsonKind, ModelError};
