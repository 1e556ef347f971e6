//! Wire model primitives for the reader REST control surface.
//!
//! Every request and response model of the reader API is declared against a
//! small set of primitives. This crate provides them; the concrete schemas
//! live in `reader-definitions`.
//!
//! ## Core Types
//!
//! - [`Field`] / [`ABSENT`] - "not supplied", distinct from `null`
//! - [`LiteralSet`] / [`validate`] / [`literal_set!`] - closed sets of wire strings or integers
//! - [`Candidate`] / [`union::resolve`] / [`wire_union!`] - polymorphic fields resolved by ordered trial
//! - [`Entity`] / [`EntityReader`] / [`EntityWriter`] - records with an overflow map for unknown keys
//! - [`Wire`] - the conversion contract all of the above share
//! - [`ModelError`] / [`Diagnostic`] - failures located by [`FieldPath`]
//! - [`body`] - the edges the HTTP layer calls before sending and after receiving
//!
//! ## Example
//!
//! ```
//! use reader_model::{body, impl_entity_wire, literal_set, Entity, EntityReader, EntityWriter, Field, ModelError, Overflow};
//!
//! literal_set! {
//!     pub enum Level as str {
//!         High = "HIGH",
//!         Low = "LOW",
//!     }
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct Pins {
//!     pub pin1: Level,
//!     pub pin2: Field<Level>,
//!     pub extra: Overflow,
//! }
//!
//! impl Entity for Pins {
//!     const NAME: &'static str = "Pins";
//!
//!     fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
//!         Ok(Self {
//!             pin1: reader.required("1")?,
//!             pin2: reader.optional("2")?,
//!             extra: reader.finish(),
//!         })
//!     }
//!
//!     fn write(&self, writer: &mut EntityWriter) {
//!         writer.required("1", &self.pin1);
//!         writer.optional("2", &self.pin2);
//!     }
//!
//!     fn overflow(&self) -> &Overflow {
//!         &self.extra
//!     }
//! }
//!
//! impl_entity_wire!(Pins);
//!
//! let pins: Pins = body::from_slice(br#"{"1": "HIGH"}"#).unwrap();
//! assert_eq!(pins.pin1, Level::High);
//! assert!(pins.pin2.is_absent());
//!
//! let err = body::from_slice::<Pins>(br#"{"1": "MEDIUM"}"#).unwrap_err();
//! assert!(err.to_string().contains(r#"$["1"]"#));
//! ```

pub mod absent;
pub mod body;
pub mod codec;
pub mod config;
pub mod entity;
pub mod error;
pub mod literal;
pub mod path;
pub mod union;
pub mod wire;

// Re-exports for convenience
pub use absent::{is_absent, Absent, Field, ABSENT};
pub use body::{decode_response, Outcome, Route, StatusRoutes, JSON_CONTENT_TYPE};
pub use config::BodyConfig;
pub use entity::{Entity, EntityReader, EntityWriter, Overflow};
pub use error::{BodyError, Diagnostic, ErrorCode, ErrorKind, JsonKind, ModelError};
pub use literal::{validate, Literal, LiteralList, LiteralSet};
pub use path::{FieldPath, PathSegment};
pub use union::{Attempt, AttemptLog, Candidate};
pub use wire::Wire;

pub use serde_json::{Map, Value};

#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use strum;
