//! Request and response models of the reader REST API.
//!
//! Every model is declared against the primitives in [`reader_model`]:
//! optional fields are [`Field`](reader_model::Field)s, closed sets are
//! `literal_set!` enums, untagged alternatives are `wire_union!` enums and
//! every record keeps unrecognised wire keys in an `extra` overflow map.
//!
//! ## Modules
//!
//! - [`gpio`] - GPI levels and events, GPO configuration and pulse schedules
//! - [`profiles`] - the operating-mode configuration
//! - [`system`] - reader status, antennas, beeper, error body
//! - [`endpoints`] - which status codes carry which shape
//!
//! ## Example
//!
//! ```
//! use bytes::Bytes;
//! use reader_definitions::prelude::*;
//!
//! let outcome: Outcome<GpiStatus, ErrorResponse> = decode_response(
//!     &endpoints::GPI_STATUS,
//!     200,
//!     Bytes::from_static(br#"{"1": "HIGH", "2": "LOW"}"#),
//!     &BodyConfig::default(),
//! )
//! .unwrap();
//!
//! let status = outcome.into_success().unwrap();
//! assert_eq!(status.pin1, GpioState::High);
//! assert!(status.pin3.is_absent());
//! ```

pub mod endpoints;
pub mod gpio;
pub mod prelude;
pub mod profiles;
pub mod system;
