//! Sequence fields: absent, empty and populated arrays, and element errors.

use reader_definitions::prelude::*;
use reader_model::ErrorCode;
use serde_json::json;

#[test]
fn absent_sequence_is_omitted() {
    let mode = OperatingModeConfiguration::from_wire(&json!({"type": "inventory"})).unwrap();
    assert!(mode.antennas.is_absent());
    assert_eq!(mode.to_wire(), json!({"type": "inventory"}));
}

#[test]
fn empty_sequence_is_present_and_reemitted() {
    let mode =
        OperatingModeConfiguration::from_wire(&json!({"type": "inventory", "antennas": []}))
            .unwrap();
    assert_eq!(mode.antennas, Field::Present(vec![]));
    assert_eq!(mode.to_wire(), json!({"type": "inventory", "antennas": []}));
}

#[test]
fn absent_and_empty_serialize_differently() {
    let mut absent = OperatingModeConfiguration::new(OperatingModeType::Inventory);
    let mut empty = absent.clone();
    empty.antennas = Field::Present(Vec::new());
    assert_ne!(absent.to_wire(), empty.to_wire());

    absent.antennas = ABSENT.into();
    assert!(absent.to_wire().get("antennas").is_none());
}

#[test]
fn element_order_is_preserved() {
    let raw = json!({"type": "inventory", "antennas": [4, 1, 3]});
    let mode = OperatingModeConfiguration::from_wire(&raw).unwrap();
    assert_eq!(mode.antennas, Field::Present(vec![4, 1, 3]));
}

#[test]
fn bad_element_aborts_with_its_index() {
    let raw = json!({"type": "inventory", "antennas": [1, 2, "three"]});
    let err = OperatingModeConfiguration::from_wire(&raw).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidType);
    assert_eq!(err.path().to_string(), "$.antennas[2]");
}

#[test]
fn out_of_range_element_is_rejected() {
    let raw = json!({"type": "inventory", "antennas": [1, 300]});
    let err = OperatingModeConfiguration::from_wire(&raw).unwrap_err();
    assert_eq!(err.path().to_string(), "$.antennas[1]");
}

#[test]
fn nested_records_keep_their_own_overflow() {
    let raw = json!({
        "gpoConfigurations": [
            {"gpo": 1, "control": "static", "state": "LOW", "label": "door"},
            {"gpo": 2, "control": "network"}
        ]
    });
    let configs = GpoConfigurations::from_wire(&raw).unwrap();
    assert_eq!(configs.gpo_configurations.len(), 2);
    assert_eq!(
        configs.gpo_configurations[0].extra.get("label"),
        Some(&json!("door"))
    );
    assert!(configs.gpo_configurations[1].extra.is_empty());
    assert_eq!(configs.to_wire(), raw);
}
