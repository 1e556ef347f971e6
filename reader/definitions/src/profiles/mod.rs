//! Operating-Mode Models
//!
//! The inventory configuration applied to the radio.
//!
//! ## Resources
//!
//! | Resource | Shape |
//! |----------|-------|
//! | Operating mode | [`OperatingModeConfiguration`] |
//! | Per-antenna overrides | [`AntennaConfiguration`] |
//! | Transmit power | [`TransmitPower`] |

mod types;

pub use types::*;
