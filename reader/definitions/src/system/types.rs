//! System request and response types.

use reader_model::{
    impl_entity_wire, literal_set, Entity, EntityReader, EntityWriter, Field, ModelError,
    Map, Overflow, Value,
};

// =============================================================================
// Literal Sets
// =============================================================================

literal_set! {
    /// Whether an antenna is attached to a port.
    pub enum AntennaState as str {
        Connected = "connected",
        Disconnected = "disconnected",
        Unknown = "unknown",
    }
}

literal_set! {
    /// Top-level state of the reader's radio.
    pub enum RadioActivity as str {
        Active = "active",
        Inactive = "inactive",
    }
}

literal_set! {
    /// Whether the radio is being driven by the REST interface.
    pub enum RadioControl as str {
        Rest = "rest",
        Llrp = "llrp",
        Unowned = "none",
    }
}

// =============================================================================
// Beeper
// =============================================================================

/// Beeper pattern: on time, off time and total duration, in milliseconds.
///
/// The device uses upper-case wire keys for this body.
///
/// ## Example
///
/// ```json
/// {"ON": 100, "OFF": 50, "DURATION": 1000}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BeeperTiming {
    /// Tone length.
    pub on: u32,
    /// Silence between tones.
    pub off: u32,
    /// Total length of the pattern.
    pub duration: u32,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl BeeperTiming {
    /// Wire key of [`on`](Self::on).
    pub const ON: &'static str = "ON";
    /// Wire key of [`off`](Self::off).
    pub const OFF: &'static str = "OFF";
    /// Wire key of [`duration`](Self::duration).
    pub const DURATION: &'static str = "DURATION";

    /// Creates a beeper pattern.
    pub fn new(on: u32, off: u32, duration: u32) -> Self {
        Self {
            on,
            off,
            duration,
            extra: Overflow::new(),
        }
    }
}

impl Entity for BeeperTiming {
    const NAME: &'static str = "BeeperTiming";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            on: reader.required(Self::ON)?,
            off: reader.required(Self::OFF)?,
            duration: reader.required(Self::DURATION)?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required(Self::ON, &self.on);
        writer.required(Self::OFF, &self.off);
        writer.required(Self::DURATION, &self.duration);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

// =============================================================================
// Antenna Ports
// =============================================================================

/// Connection state of each antenna port, keyed by port number.
///
/// ## Example
///
/// ```json
/// {"1": "connected", "2": "disconnected"}
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AntennaPortStatus {
    /// Port 1.
    pub port1: Field<AntennaState>,
    /// Port 2.
    pub port2: Field<AntennaState>,
    /// Port 3.
    pub port3: Field<AntennaState>,
    /// Port 4.
    pub port4: Field<AntennaState>,
    /// Unrecognised wire keys, including ports beyond 4.
    pub extra: Overflow,
}

impl AntennaPortStatus {
    /// Wire key of [`port1`](Self::port1).
    pub const PORT1: &'static str = "1";
    /// Wire key of [`port2`](Self::port2).
    pub const PORT2: &'static str = "2";
    /// Wire key of [`port3`](Self::port3).
    pub const PORT3: &'static str = "3";
    /// Wire key of [`port4`](Self::port4).
    pub const PORT4: &'static str = "4";

    /// Returns the state of a port by number, if the port is modelled.
    pub fn port(&self, number: u8) -> Option<&Field<AntennaState>> {
        match number {
            1 => Some(&self.port1),
            2 => Some(&self.port2),
            3 => Some(&self.port3),
            4 => Some(&self.port4),
            _ => None,
        }
    }
}

impl Entity for AntennaPortStatus {
    const NAME: &'static str = "AntennaPortStatus";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            port1: reader.optional(Self::PORT1)?,
            port2: reader.optional(Self::PORT2)?,
            port3: reader.optional(Self::PORT3)?,
            port4: reader.optional(Self::PORT4)?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.optional(Self::PORT1, &self.port1);
        writer.optional(Self::PORT2, &self.port2);
        writer.optional(Self::PORT3, &self.port3);
        writer.optional(Self::PORT4, &self.port4);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

// =============================================================================
// Reader Status
// =============================================================================

/// Reader status report.
///
/// ## Example
///
/// ```json
/// {
///   "status": "active",
///   "time": "2024-01-01T00:00:00Z",
///   "serialNumber": "37017090614",
///   "activePreset": {"id": "default", "profile": "inventory"},
///   "radioControl": "rest",
///   "lastError": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderStatus {
    /// Radio activity.
    pub status: RadioActivity,
    /// Device clock, as reported.
    pub time: Field<String>,
    /// Device serial number.
    pub serial_number: Field<String>,
    /// The running preset, passed through unvalidated.
    pub active_preset: Field<Map<String, Value>>,
    /// Which interface owns the radio.
    pub radio_control: Field<RadioControl>,
    /// Most recent radio error; `null` once cleared.
    pub last_error: Field<Option<String>>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl Entity for ReaderStatus {
    const NAME: &'static str = "ReaderStatus";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            status: reader.required("status")?,
            time: reader.optional("time")?,
            serial_number: reader.optional("serialNumber")?,
            active_preset: reader.optional("activePreset")?,
            radio_control: reader.optional("radioControl")?,
            last_error: reader.optional("lastError")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("status", &self.status);
        writer.optional("time", &self.time);
        writer.optional("serialNumber", &self.serial_number);
        writer.optional("activePreset", &self.active_preset);
        writer.optional("radioControl", &self.radio_control);
        writer.optional("lastError", &self.last_error);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error body returned with 4xx and 5xx statuses.
///
/// ## Example
///
/// ```json
/// {"message": "antenna 5 does not exist", "invalidPropertyId": "antennas"}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable description.
    pub message: String,
    /// The request property that was rejected.
    pub invalid_property_id: Field<String>,
    /// Further detail, as reported.
    pub detail: Field<String>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl ErrorResponse {
    /// Creates an error body with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            invalid_property_id: Field::Absent,
            detail: Field::Absent,
            extra: Overflow::new(),
        }
    }
}

impl Entity for ErrorResponse {
    const NAME: &'static str = "ErrorResponse";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            message: reader.required("message")?,
            invalid_property_id: reader.optional("invalidPropertyId")?,
            detail: reader.optional("detail")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("message", &self.message);
        writer.optional("invalidPropertyId", &self.invalid_property_id);
        writer.optional("detail", &self.detail);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

impl_entity_wire!(BeeperTiming, AntennaPortStatus, ReaderStatus, ErrorResponse);
