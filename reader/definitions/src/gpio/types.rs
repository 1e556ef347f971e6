//! GPIO request and response types.

use reader_model::{
    impl_entity_wire, literal_set, wire_union, Entity, EntityReader, EntityWriter, Field,
    ModelError, Overflow,
};

// =============================================================================
// Literal Sets
// =============================================================================

literal_set! {
    /// Logic level of a GPI or GPO pin.
    pub enum GpioState as str {
        High = "HIGH",
        Low = "LOW",
    }
}

literal_set! {
    /// How a GPO pin is driven.
    pub enum GpoControl as str {
        /// Held at a fixed level.
        Static = "static",
        /// Driven for `pulseDurationMilliseconds`, then released.
        Pulsed = "pulsed",
        /// High while tags are being read.
        ReadingTags = "reading-tags",
        /// High while an inventory is running.
        Running = "running",
        /// High while a network connection is up.
        Network = "network",
    }
}

literal_set! {
    /// Edge reported by a GPI transition event.
    pub enum GpiTransition as str {
        HighToLow = "high-to-low",
        LowToHigh = "low-to-high",
    }
}

// =============================================================================
// GPI Status
// =============================================================================

/// Current level of each GPI pin.
///
/// The wire keys are the pin numbers themselves.
///
/// ## Example
///
/// ```json
/// {
///   "1": "HIGH",
///   "2": "LOW",
///   "3": "HIGH"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GpiStatus {
    /// Level of pin 1.
    pub pin1: GpioState,
    /// Level of pin 2.
    pub pin2: GpioState,
    /// Level of pin 3, on readers that have one.
    pub pin3: Field<GpioState>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl GpiStatus {
    /// Wire key of [`pin1`](Self::pin1).
    pub const PIN1: &'static str = "1";
    /// Wire key of [`pin2`](Self::pin2).
    pub const PIN2: &'static str = "2";
    /// Wire key of [`pin3`](Self::pin3).
    pub const PIN3: &'static str = "3";

    /// Creates a status for a two-pin reader.
    pub fn new(pin1: GpioState, pin2: GpioState) -> Self {
        Self {
            pin1,
            pin2,
            pin3: Field::Absent,
            extra: Overflow::new(),
        }
    }
}

impl Entity for GpiStatus {
    const NAME: &'static str = "GpiStatus";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            pin1: reader.required(Self::PIN1)?,
            pin2: reader.required(Self::PIN2)?,
            pin3: reader.optional(Self::PIN3)?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required(Self::PIN1, &self.pin1);
        writer.required(Self::PIN2, &self.pin2);
        writer.optional(Self::PIN3, &self.pin3);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

/// A GPI edge reported on the event stream.
///
/// ## Example
///
/// ```json
/// {"gpi": 1, "transition": "low-to-high"}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GpiTransitionEvent {
    /// Pin number.
    pub gpi: u8,
    /// Edge direction.
    pub transition: GpiTransition,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl Entity for GpiTransitionEvent {
    const NAME: &'static str = "GpiTransitionEvent";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            gpi: reader.required("gpi")?,
            transition: reader.required("transition")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("gpi", &self.gpi);
        writer.required("transition", &self.transition);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

// =============================================================================
// GPO Configuration
// =============================================================================

/// Configuration of one GPO pin.
///
/// ## Example
///
/// ```json
/// {
///   "gpo": 1,
///   "control": "pulsed",
///   "state": "HIGH",
///   "pulseDurationMilliseconds": 500
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GpoConfiguration {
    /// Pin number.
    pub gpo: u8,
    /// Drive mode.
    pub control: GpoControl,
    /// Level for `static` and `pulsed` control.
    pub state: Field<GpioState>,
    /// Pulse length for `pulsed` control.
    pub pulse_duration_milliseconds: Field<u32>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl GpoConfiguration {
    /// Creates a configuration with only the required fields set.
    pub fn new(gpo: u8, control: GpoControl) -> Self {
        Self {
            gpo,
            control,
            state: Field::Absent,
            pulse_duration_milliseconds: Field::Absent,
            extra: Overflow::new(),
        }
    }
}

impl Entity for GpoConfiguration {
    const NAME: &'static str = "GpoConfiguration";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            gpo: reader.required("gpo")?,
            control: reader.required("control")?,
            state: reader.optional("state")?,
            pulse_duration_milliseconds: reader.optional("pulseDurationMilliseconds")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("gpo", &self.gpo);
        writer.required("control", &self.control);
        writer.optional("state", &self.state);
        writer.optional("pulseDurationMilliseconds", &self.pulse_duration_milliseconds);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

/// Request and response body of the GPO configuration endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GpoConfigurations {
    /// One entry per configured pin.
    pub gpo_configurations: Vec<GpoConfiguration>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl Entity for GpoConfigurations {
    const NAME: &'static str = "GpoConfigurations";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            gpo_configurations: reader.required("gpoConfigurations")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("gpoConfigurations", &self.gpo_configurations);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

// =============================================================================
// GPO Pulse Schedule
// =============================================================================

/// Set a GPO port to a level.
///
/// ## Example
///
/// ```json
/// {"port": 2, "signal": "HIGH"}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GpoSignal {
    /// Pin number.
    pub port: u8,
    /// Level to drive.
    pub signal: GpioState,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl GpoSignal {
    /// Creates a signal step.
    pub fn new(port: u8, signal: GpioState) -> Self {
        Self {
            port,
            signal,
            extra: Overflow::new(),
        }
    }
}

impl Entity for GpoSignal {
    const NAME: &'static str = "GpoSignal";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            port: reader.required("port")?,
            signal: reader.required("signal")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("port", &self.port);
        writer.required("signal", &self.signal);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

wire_union! {
    /// One step of a pulse schedule: a level change, or a pause in milliseconds.
    pub enum GpoPulseStep {
        Signal(GpoSignal),
        DelayMilliseconds(f64),
    }
}

/// A sequence of GPO level changes and pauses.
///
/// ## Example
///
/// ```json
/// {
///   "steps": [{"port": 1, "signal": "HIGH"}, 250, {"port": 1, "signal": "LOW"}],
///   "repeat": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GpoPulseSchedule {
    /// Steps, executed in order.
    pub steps: Vec<GpoPulseStep>,
    /// Number of repetitions; once when absent.
    pub repeat: Field<u32>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl Entity for GpoPulseSchedule {
    const NAME: &'static str = "GpoPulseSchedule";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            steps: reader.required("steps")?,
            repeat: reader.optional("repeat")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("steps", &self.steps);
        writer.optional("repeat", &self.repeat);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

impl_entity_wire!(
    GpiStatus,
    GpiTransitionEvent,
    GpoConfiguration,
    GpoConfigurations,
    GpoSignal,
    GpoPulseSchedule,
);
