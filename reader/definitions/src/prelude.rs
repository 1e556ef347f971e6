//! Common imports for working with reader models.

pub use crate::endpoints;
pub use crate::gpio::*;
pub use crate::profiles::*;
pub use crate::system::*;

pub use reader_model::{
    body, decode_response, BodyConfig, BodyError, Entity, Field, ModelError, Outcome, Wire,
    ABSENT,
};
