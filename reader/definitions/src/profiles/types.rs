//! Operating-mode request and response types.

use reader_model::{
    impl_entity_wire, literal_set, wire_union, Entity, EntityReader, EntityWriter, Field,
    ModelError, Overflow, Value,
};

// =============================================================================
// Literal Sets
// =============================================================================

literal_set! {
    /// Gen2 inventory session.
    pub enum SessionNumber as int {
        S0 = 0,
        S1 = 1,
        S2 = 2,
        S3 = 3,
    }
}

literal_set! {
    /// Which tag population an inventory round targets.
    pub enum SearchMode as str {
        ReaderSelected = "reader-selected",
        SingleTarget = "single-target",
        DualTarget = "dual-target",
        SingleTargetWithTagfocus = "single-target-with-tagfocus",
        SingleTargetReset = "single-target-reset",
        DualTargetWithReset = "dual-target-with-reset",
    }
}

literal_set! {
    /// What the reader does when an operating mode is applied.
    pub enum OperatingModeType as str {
        Inventory = "inventory",
        Portal = "portal",
        Conditional = "conditional",
    }
}

literal_set! {
    /// Regulatory channel plan.
    pub enum ChannelPlan as str {
        Fcc = "fcc",
        Etsi = "etsi",
        Japan = "japan",
    }
}

// =============================================================================
// Transmit Power
// =============================================================================

/// A power ramp in dBm.
///
/// ## Example
///
/// ```json
/// {"start": 10.0, "stop": 30.0, "step": 0.25}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSweep {
    /// First power level.
    pub start: f64,
    /// Last power level.
    pub stop: f64,
    /// Increment between levels.
    pub step: Field<f64>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl PowerSweep {
    /// Creates a sweep with the device default step.
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start,
            stop,
            step: Field::Absent,
            extra: Overflow::new(),
        }
    }
}

impl Entity for PowerSweep {
    const NAME: &'static str = "PowerSweep";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            start: reader.required("start")?,
            stop: reader.required("stop")?,
            step: reader.optional("step")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("start", &self.start);
        writer.required("stop", &self.stop);
        writer.optional("step", &self.step);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

wire_union! {
    /// Transmit power in dBm: a sweep, one level per antenna, or a single level.
    pub enum TransmitPower {
        Sweep(PowerSweep),
        PerAntenna(Vec<f64>),
        Fixed(f64),
    }
}

// =============================================================================
// Antenna Configuration
// =============================================================================

/// Per-antenna overrides inside an operating mode.
///
/// ## Example
///
/// ```json
/// {"antennaPort": 1, "transmitPower": 27.5, "estimatedTagPopulation": 16}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaConfiguration {
    /// Antenna port number.
    pub antenna_port: u8,
    /// Power override for this port.
    pub transmit_power: Field<TransmitPower>,
    /// Expected number of tags in the field of view.
    pub estimated_tag_population: Field<u32>,
    /// Session override for this port.
    pub session: Field<SessionNumber>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl AntennaConfiguration {
    /// Creates a configuration for `antenna_port` with no overrides.
    pub fn new(antenna_port: u8) -> Self {
        Self {
            antenna_port,
            transmit_power: Field::Absent,
            estimated_tag_population: Field::Absent,
            session: Field::Absent,
            extra: Overflow::new(),
        }
    }
}

impl Entity for AntennaConfiguration {
    const NAME: &'static str = "AntennaConfiguration";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            antenna_port: reader.required("antennaPort")?,
            transmit_power: reader.optional("transmitPower")?,
            estimated_tag_population: reader.optional("estimatedTagPopulation")?,
            session: reader.optional("session")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("antennaPort", &self.antenna_port);
        writer.optional("transmitPower", &self.transmit_power);
        writer.optional("estimatedTagPopulation", &self.estimated_tag_population);
        writer.optional("session", &self.session);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

// =============================================================================
// Operating Mode
// =============================================================================

/// The reader's operating-mode configuration.
///
/// `selects` is carried as raw JSON. Its sub-schema (Gen2 select filters) is
/// passed through to the device without validation.
///
/// ## Example
///
/// ```json
/// {
///   "type": "inventory",
///   "antennas": [1, 2],
///   "session": 1,
///   "searchMode": "dual-target",
///   "transmitPower": 30.0,
///   "selects": [{"bank": "epc", "offset": 32, "mask": "E280"}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingModeConfiguration {
    /// Mode type.
    pub kind: OperatingModeType,
    /// Antenna ports to use; every port when absent.
    pub antennas: Field<Vec<u8>>,
    /// Inventory session.
    pub session: Field<SessionNumber>,
    /// Target population.
    pub search_mode: Field<SearchMode>,
    /// Power for every antenna without an override.
    pub transmit_power: Field<TransmitPower>,
    /// Regulatory channel plan.
    pub channel_plan: Field<ChannelPlan>,
    /// Expected number of tags in the field of view.
    pub estimated_tag_population: Field<u32>,
    /// Per-antenna overrides.
    pub antenna_configurations: Field<Vec<AntennaConfiguration>>,
    /// Tag select filters, unvalidated.
    pub selects: Field<Value>,
    /// Tag query filter; `null` clears a previously set filter.
    pub filter: Field<Option<Value>>,
    /// Unrecognised wire keys.
    pub extra: Overflow,
}

impl OperatingModeConfiguration {
    /// Creates a configuration of the given type with device defaults.
    pub fn new(kind: OperatingModeType) -> Self {
        Self {
            kind,
            antennas: Field::Absent,
            session: Field::Absent,
            search_mode: Field::Absent,
            transmit_power: Field::Absent,
            channel_plan: Field::Absent,
            estimated_tag_population: Field::Absent,
            antenna_configurations: Field::Absent,
            selects: Field::Absent,
            filter: Field::Absent,
            extra: Overflow::new(),
        }
    }
}

impl Entity for OperatingModeConfiguration {
    const NAME: &'static str = "OperatingModeConfiguration";

    fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            kind: reader.required("type")?,
            antennas: reader.optional("antennas")?,
            session: reader.optional("session")?,
            search_mode: reader.optional("searchMode")?,
            transmit_power: reader.optional("transmitPower")?,
            channel_plan: reader.optional("channelPlan")?,
            estimated_tag_population: reader.optional("estimatedTagPopulation")?,
            antenna_configurations: reader.optional("antennaConfigurations")?,
            selects: reader.optional("selects")?,
            filter: reader.optional("filter")?,
            extra: reader.finish(),
        })
    }

    fn write(&self, writer: &mut EntityWriter) {
        writer.required("type", &self.kind);
        writer.optional("antennas", &self.antennas);
        writer.optional("session", &self.session);
        writer.optional("searchMode", &self.search_mode);
        writer.optional("transmitPower", &self.transmit_power);
        writer.optional("channelPlan", &self.channel_plan);
        writer.optional("estimatedTagPopulation", &self.estimated_tag_population);
        writer.optional("antennaConfigurations", &self.antenna_configurations);
        writer.optional("selects", &self.selects);
        writer.optional("filter", &self.filter);
    }

    fn overflow(&self) -> &Overflow {
        &self.extra
    }
}

impl_entity_wire!(PowerSweep, AntennaConfiguration, OperatingModeConfiguration);

#[cfg(test)]
mod tests {
    use super::*;
    use reader_model::{ErrorKind, Wire};
    use serde_json::json;

    #[test]
    fn test_transmit_power_candidates() {
        assert_eq!(
            TransmitPower::from_wire(&json!(30)).unwrap(),
            TransmitPower::Fixed(30.0)
        );
        assert_eq!(
            TransmitPower::from_wire(&json!([27.5, 30])).unwrap(),
            TransmitPower::PerAntenna(vec![27.5, 30.0])
        );
        let sweep = TransmitPower::from_wire(&json!({"start": 10, "stop": 30})).unwrap();
        assert_eq!(sweep, TransmitPower::Sweep(PowerSweep::new(10.0, 30.0)));
    }

    #[test]
    fn test_transmit_power_unresolved() {
        let err = TransmitPower::from_wire(&json!("max")).unwrap_err();
        match err.kind() {
            ErrorKind::UnresolvedUnion { attempts, .. } => {
                assert_eq!(
                    attempts.candidate_names(),
                    vec!["Sweep", "PerAntenna", "Fixed"]
                );
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_session_is_integer_literal() {
        assert_eq!(
            SessionNumber::from_wire(&json!(2)).unwrap(),
            SessionNumber::S2
        );
        assert!(SessionNumber::from_wire(&json!("2")).is_err());
        assert!(SessionNumber::from_wire(&json!(4)).is_err());
    }

    #[test]
    fn test_selects_is_passed_through() {
        let selects = json!([{"bank": "epc", "anything": [1, "two", null]}]);
        let raw = json!({"type": "inventory", "selects": selects});
        let mode = OperatingModeConfiguration::from_wire(&raw).unwrap();
        assert_eq!(mode.selects, Field::Present(selects));
        assert_eq!(mode.to_wire(), raw);
    }

    #[test]
    fn test_filter_null_is_distinct_from_absent() {
        let cleared =
            OperatingModeConfiguration::from_wire(&json!({"type": "portal", "filter": null}))
                .unwrap();
        assert_eq!(cleared.filter, Field::Present(None));
        assert_eq!(cleared.to_wire(), json!({"type": "portal", "filter": null}));

        let untouched = OperatingModeConfiguration::from_wire(&json!({"type": "portal"})).unwrap();
        assert!(untouched.filter.is_absent());
        assert_eq!(untouched.to_wire(), json!({"type": "portal"}));
    }

    #[test]
    fn test_nested_antenna_error_path() {
        let raw = json!({
            "type": "inventory",
            "antennaConfigurations": [
                {"antennaPort": 1},
                {"antennaPort": 2, "session": 7}
            ]
        });
        let err = OperatingModeConfiguration::from_wire(&raw).unwrap_err();
        assert!(err.is_schema_violation());
        assert_eq!(err.path().to_string(), "$.antennaConfigurations[1].session");
    }
}
