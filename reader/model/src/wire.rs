//! Conversion between wire values and typed values.
//!
//! [`Wire`] is the one conversion contract every field shape implements:
//! primitives here, sequences and maps in [`codec`](crate::codec), literal
//! sets via [`literal_set!`](crate::literal_set), unions via
//! [`wire_union!`](crate::wire_union) and entities via
//! [`impl_entity_wire!`](crate::impl_entity_wire).
//!
//! Primitive checks are strict: strings never coerce to numbers or back,
//! integer fields reject fractional and out-of-range numbers.

use serde_json::{Map, Number, Value};

use crate::error::ModelError;

/// A typed value with a JSON wire representation.
pub trait Wire: Sized {
    /// Converts a raw wire value. Never mutates its input.
    fn from_wire(value: &Value) -> Result<Self, ModelError>;

    /// Produces the wire representation.
    fn to_wire(&self) -> Value;

    /// Human-readable name of the accepted shape, used in diagnostics.
    fn shape() -> String;
}

/// Implements serde's `Serialize` and `Deserialize` for a [`Wire`] type.
///
/// Serialization writes [`Wire::to_wire`]; deserialization buffers a
/// [`Value`] and runs [`Wire::from_wire`], so serde callers get the same
/// strict checks and the [`ModelError`] text as a custom error.
#[doc(hidden)]
#[macro_export]
macro_rules! __serde_via_wire {
    ($ty:ty) => {
        impl $crate::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                $crate::serde::Serialize::serialize(&$crate::Wire::to_wire(self), serializer)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value = <$crate::Value as $crate::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::Wire>::from_wire(&value)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }
    };
}

impl Wire for String {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(ModelError::invalid_type(Self::shape(), other)),
        }
    }

    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn shape() -> String {
        "string".to_string()
    }
}

impl Wire for bool {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(ModelError::invalid_type(Self::shape(), other)),
        }
    }

    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }

    fn shape() -> String {
        "boolean".to_string()
    }
}

macro_rules! impl_int_wire {
    ($($ty:ty),+) => {
        $(
            impl Wire for $ty {
                fn from_wire(value: &Value) -> Result<Self, ModelError> {
                    let parsed = match value {
                        Value::Number(n) => n
                            .as_i64()
                            .and_then(|i| <$ty>::try_from(i).ok())
                            .or_else(|| n.as_u64().and_then(|u| <$ty>::try_from(u).ok())),
                        _ => None,
                    };
                    parsed.ok_or_else(|| ModelError::invalid_type(Self::shape(), value))
                }

                fn to_wire(&self) -> Value {
                    Value::from(*self)
                }

                fn shape() -> String {
                    concat!("integer (", stringify!($ty), ")").to_string()
                }
            }
        )+
    };
}

impl_int_wire!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Wire for f64 {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| ModelError::invalid_type(Self::shape(), value)),
            other => Err(ModelError::invalid_type(Self::shape(), other)),
        }
    }

    /// Non-finite values have no JSON form and become `null`.
    fn to_wire(&self) -> Value {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }

    fn shape() -> String {
        "number".to_string()
    }
}

/// Raw passthrough: any wire value is accepted and kept verbatim.
impl Wire for Value {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        Ok(value.clone())
    }

    fn to_wire(&self) -> Value {
        self.clone()
    }

    fn shape() -> String {
        "any".to_string()
    }
}

/// An untyped mapping, kept verbatim.
impl Wire for Map<String, Value> {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(map.clone()),
            other => Err(ModelError::invalid_type(Self::shape(), other)),
        }
    }

    fn to_wire(&self) -> Value {
        Value::Object(self.clone())
    }

    fn shape() -> String {
        "object".to_string()
    }
}

/// Nullable: `null` is `None`, anything else must convert as `T`.
impl<T: Wire> Wire for Option<T> {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_wire(other).map(Some),
        }
    }

    fn to_wire(&self) -> Value {
        match self {
            Some(v) => v.to_wire(),
            None => Value::Null,
        }
    }

    fn shape() -> String {
        format!("{} or null", T::shape())
    }
}

impl<T: Wire> Wire for Box<T> {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        T::from_wire(value).map(Box::new)
    }

    fn to_wire(&self) -> Value {
        (**self).to_wire()
    }

    fn shape() -> String {
        T::shape()
    }
}

/// The empty shape: only `null` (an empty body decodes to `null`).
impl Wire for () {
    fn from_wire(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Null => Ok(()),
            other => Err(ModelError::invalid_type(Self::shape(), other)),
        }
    }

    fn to_wire(&self) -> Value {
        Value::Null
    }

    fn shape() -> String {
        "null".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_rejects_numbers() {
        assert_eq!(String::from_wire(&json!("5")).unwrap(), "5");
        let err = String::from_wire(&json!(5)).unwrap_err();
        assert_eq!(err.to_string(), "$: expected string, found number 5");
    }

    #[test]
    fn test_integers_are_range_checked() {
        assert_eq!(u8::from_wire(&json!(255)).unwrap(), 255);
        assert!(u8::from_wire(&json!(256)).is_err());
        assert!(u8::from_wire(&json!(-1)).is_err());
        assert_eq!(i8::from_wire(&json!(-128)).unwrap(), -128);
        assert_eq!(u64::from_wire(&json!(u64::MAX)).unwrap(), u64::MAX);
    }

    #[test]
    fn test_integers_reject_fractions_and_strings() {
        assert!(u32::from_wire(&json!(1.5)).is_err());
        assert!(u32::from_wire(&json!("1")).is_err());
    }

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(f64::from_wire(&json!(500)).unwrap(), 500.0);
        assert_eq!(f64::from_wire(&json!(-2.5)).unwrap(), -2.5);
        assert!(f64::from_wire(&json!("500")).is_err());
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        assert_eq!(f64::NAN.to_wire(), Value::Null);
        assert_eq!(1.5f64.to_wire(), json!(1.5));
    }

    #[test]
    fn test_option_is_nullable() {
        assert_eq!(Option::<u8>::from_wire(&json!(null)).unwrap(), None);
        assert_eq!(Option::<u8>::from_wire(&json!(3)).unwrap(), Some(3));
        assert!(Option::<u8>::from_wire(&json!("3")).is_err());
        assert_eq!(None::<u8>.to_wire(), Value::Null);
        assert_eq!(Option::<u8>::shape(), "integer (u8) or null");
    }

    #[test]
    fn test_raw_value_passthrough() {
        let raw = json!({"nested": [1, {"deep": null}]});
        assert_eq!(Value::from_wire(&raw).unwrap(), raw);
    }

    #[test]
    fn test_map_requires_object() {
        assert!(Map::<String, Value>::from_wire(&json!({"a": 1})).is_ok());
        assert!(Map::<String, Value>::from_wire(&json!([])).is_err());
    }

    #[test]
    fn test_unit_accepts_only_null() {
        assert!(<()>::from_wire(&Value::Null).is_ok());
        assert!(<()>::from_wire(&json!({})).is_err());
    }
}
