//! Sequences and homogeneous maps of any wire shape.
//!
//! Elements convert independently and in order. The first failing element
//! aborts the whole conversion with its index (or key) in the error path; no
//! partial collection is ever produced. An empty array is an empty `Vec`,
//! which is a different state from an absent field.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::wire::Wire;

/// Lifts an element converter over a wire array.
///
/// ## Examples
///
/// ```
/// use reader_model::{codec, Wire};
/// use serde_json::json;
///
/// let ports = codec::decode_seq(&json!([1, 2]), u8::from_wire).unwrap();
/// assert_eq!(ports, vec![1, 2]);
///
/// let err = codec::decode_seq(&json!([1, "two"]), u8::from_wire).unwrap_err();
/// assert_eq!(err.path().to_string(), "$[1]");
/// ```
pub fn decode_seq<T>(
    value: &Value,
    element: impl Fn(&Value) -> Result<T, ModelError>,
) -> Result<Vec<T>, ModelError> {
    let Value::Array(items) = value else {
        return Err(ModelError::invalid_type("array", value));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| element(item).map_err(|e| e.with_index(index)))
        .collect()
}

/// Encodes a sequence element-wise, preserving order.
pub fn encode_seq<T>(items: &[T], element: impl Fn(&T) -> Value) -> Value {
    Value::Array(items.iter().map(element).collect())
}

/// Lifts an element converter over a wire mapping with arbitrary keys.
pub fn decode_map<T>(
    value: &Value,
    element: impl Fn(&Value) -> Result<T, ModelError>,
) -> Result<BTreeMap<String, T>, ModelError> {
    let Value::Object(entries) = value else {
        return Err(ModelError::invalid_type("object", value));
    };
    entries
        .iter()
        .map(|(key, item)| {
            element(item)
                .map(|v| (key.clone(), v))
                .map_err(|e| e.with_key(key.as_str()))
        })
        .collect()
}

/// Encodes a homogeneous map, in key order.
pub fn encode_map<T>(entries: &BTreeMap<String, T>, element: impl Fn(&T) -> Value) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(k, v)| (k.clone(), element(v)))
            .collect::<Map<String, Value>>(),
    )
}

impl<T: Wire> Wire for Vec<T> {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        if !value.is_array() {
            return Err(ModelError::invalid_type(Self::shape(), value));
        }
        decode_seq(value, T::from_wire)
    }

    fn to_wire(&self) -> Value {
        encode_seq(self, T::to_wire)
    }

    fn shape() -> String {
        format!("array of {}", T::shape())
    }
}

impl<T: Wire> Wire for BTreeMap<String, T> {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        if !value.is_object() {
            return Err(ModelError::invalid_type(Self::shape(), value));
        }
        decode_map(value, T::from_wire)
    }

    fn to_wire(&self) -> Value {
        encode_map(self, T::to_wire)
    }

    fn shape() -> String {
        format!("map of {}", T::shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_empty_array_is_empty_vec() {
        let items = Vec::<u8>::from_wire(&json!([])).unwrap();
        assert!(items.is_empty());
        assert_eq!(items.to_wire(), json!([]));
    }

    #[test]
    fn test_order_preserved() {
        let raw = json!(["c", "a", "b"]);
        let items = Vec::<String>::from_wire(&raw).unwrap();
        assert_eq!(items, vec!["c", "a", "b"]);
        assert_eq!(items.to_wire(), raw);
    }

    #[test]
    fn test_failing_element_aborts_with_index() {
        let err = Vec::<u8>::from_wire(&json!([1, 2, 999, "x"])).unwrap_err();
        assert_eq!(err.path().to_string(), "$[2]");
        assert!(matches!(err.kind(), ErrorKind::InvalidType { .. }));
    }

    #[test]
    fn test_non_array_names_element_shape() {
        let err = Vec::<u8>::from_wire(&json!({"0": 1})).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"$: expected array of integer (u8), found object {"0":1}"#
        );
    }

    #[test]
    fn test_nested_sequences() {
        let raw = json!([[1, 2], [], [3]]);
        let items = Vec::<Vec<u16>>::from_wire(&raw).unwrap();
        assert_eq!(items, vec![vec![1, 2], vec![], vec![3]]);
        let err = Vec::<Vec<u16>>::from_wire(&json!([[1], [true]])).unwrap_err();
        assert_eq!(err.path().to_string(), "$[1][0]");
    }

    #[test]
    fn test_map_of_values() {
        let raw = json!({"1": true, "2": false});
        let map = BTreeMap::<String, bool>::from_wire(&raw).unwrap();
        assert_eq!(map.get("1"), Some(&true));
        assert_eq!(map.to_wire(), raw);

        let err = BTreeMap::<String, bool>::from_wire(&json!({"3": "on"})).unwrap_err();
        assert_eq!(err.path().to_string(), r#"$["3"]"#);
    }
}
