//! GPIO Models
//!
//! Request and response bodies for the reader's general-purpose input and
//! output pins.
//!
//! ## Resources
//!
//! | Resource | Shape |
//! |----------|-------|
//! | GPI levels | [`GpiStatus`] |
//! | GPI edge events | [`GpiTransitionEvent`] |
//! | GPO configuration | [`GpoConfigurations`] of [`GpoConfiguration`] |
//! | GPO pulse schedule | [`GpoPulseSchedule`] of [`GpoPulseStep`] |
//!
//! Pin-keyed bodies use the pin number as the wire key (`"1"`, `"2"`, ...).
//! Each such model names its fields `pin1`, `pin2`, ... and carries the wire
//! key as an associated constant.

mod types;

pub use types::*;
