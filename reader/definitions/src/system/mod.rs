//! System Models
//!
//! Reader status, antenna connection state, beeper control and the shared
//! error body.
//!
//! ## Resources
//!
//! | Resource | Shape |
//! |----------|-------|
//! | Reader status | [`ReaderStatus`] |
//! | Antenna connection state | [`AntennaPortStatus`] |
//! | Beeper | [`BeeperTiming`] |
//! | Any 4xx/5xx body | [`ErrorResponse`] |

mod types;

pub use types::*;
