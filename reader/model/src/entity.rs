//! The model entity contract.
//!
//! An [`Entity`] is a record with a fixed, ordered table of wire keys plus an
//! overflow map holding every wire key the table does not declare. Reading
//! goes through an [`EntityReader`], which looks fields up in schema order,
//! binds missing optional fields to [`Field::Absent`], fails on missing
//! required ones and hands back whatever was left unconsumed. Writing goes
//! through an [`EntityWriter`], which starts from the overflow map and
//! overlays each declared field, skipping absent ones.
//!
//! Reading is all-or-nothing: the first failing field aborts the whole entity.
//!
//! ## Examples
//!
//! ```
//! use reader_model::{impl_entity_wire, Entity, EntityReader, EntityWriter, Field, ModelError, Overflow, Wire};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Pulse {
//!     on_ms: u32,
//!     off_ms: Field<u32>,
//!     extra: Overflow,
//! }
//!
//! impl Entity for Pulse {
//!     const NAME: &'static str = "Pulse";
//!
//!     fn read(mut reader: EntityReader<'_>) -> Result<Self, ModelError> {
//!         Ok(Self {
//!             on_ms: reader.required("ON")?,
//!             off_ms: reader.optional("OFF")?,
//!             extra: reader.finish(),
//!         })
//!     }
//!
//!     fn write(&self, writer: &mut EntityWriter) {
//!         writer.required("ON", &self.on_ms);
//!         writer.optional("OFF", &self.off_ms);
//!     }
//!
//!     fn overflow(&self) -> &Overflow {
//!         &self.extra
//!     }
//! }
//!
//! impl_entity_wire!(Pulse);
//!
//! let pulse = Pulse::from_wire(&json!({"ON": 100})).unwrap();
//! assert!(pulse.off_ms.is_absent());
//! assert_eq!(pulse.to_wire(), json!({"ON": 100}));
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::absent::Field;
use crate::error::ModelError;
use crate::wire::Wire;

/// Wire keys an entity does not declare, kept verbatim.
pub type Overflow = Map<String, Value>;

/// A named record type with a fixed wire schema.
pub trait Entity: Sized {
    /// Schema name, used in diagnostics.
    const NAME: &'static str;

    /// Reads the declared fields in schema order, then takes the overflow.
    fn read(reader: EntityReader<'_>) -> Result<Self, ModelError>;

    /// Writes the declared fields in schema order.
    fn write(&self, writer: &mut EntityWriter);

    /// Returns the retained unknown wire keys.
    fn overflow(&self) -> &Overflow;
}

/// Field-by-field view of an incoming wire mapping.
#[derive(Debug)]
pub struct EntityReader<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
    consumed: Vec<&'static str>,
}

impl<'a> EntityReader<'a> {
    /// Creates a reader over a wire mapping for entity `entity`.
    pub fn new(entity: &'static str, map: &'a Map<String, Value>) -> Self {
        Self {
            entity,
            map,
            consumed: Vec::new(),
        }
    }

    fn lookup(&mut self, key: &'static str) -> Option<&'a Value> {
        self.consumed.push(key);
        self.map.get(key)
    }

    /// Reads a required field.
    ///
    /// ## Errors
    ///
    /// Fails with a missing-required-field error when `key` is absent, or
    /// with the field's own conversion error prefixed by `key`.
    pub fn required<T: Wire>(&mut self, key: &'static str) -> Result<T, ModelError> {
        match self.lookup(key) {
            Some(raw) => T::from_wire(raw).map_err(|e| e.with_key(key)),
            None => Err(ModelError::missing_field(self.entity, key)),
        }
    }

    /// Reads an optional field; a missing key yields [`Field::Absent`].
    pub fn optional<T: Wire>(&mut self, key: &'static str) -> Result<Field<T>, ModelError> {
        match self.lookup(key) {
            Some(raw) => T::from_wire(raw)
                .map(Field::Present)
                .map_err(|e| e.with_key(key)),
            None => Ok(Field::Absent),
        }
    }

    /// Reads an optional field through a custom converter.
    pub fn optional_with<T>(
        &mut self,
        key: &'static str,
        convert: impl FnOnce(&Value) -> Result<T, ModelError>,
    ) -> Result<Field<T>, ModelError> {
        match self.lookup(key) {
            Some(raw) => convert(raw).map(Field::Present).map_err(|e| e.with_key(key)),
            None => Ok(Field::Absent),
        }
    }

    /// Returns every entry not consumed by a declared field, in wire order.
    pub fn finish(self) -> Overflow {
        let overflow: Overflow = self
            .map
            .iter()
            .filter(|(key, _)| !self.consumed.iter().any(|c| *c == key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !overflow.is_empty() {
            debug!(
                entity = self.entity,
                keys = ?overflow.keys().collect::<Vec<_>>(),
                "retained unrecognised wire keys"
            );
        }
        overflow
    }
}

/// Builds an outgoing wire mapping on top of an entity's overflow.
#[derive(Debug, Default)]
pub struct EntityWriter {
    map: Map<String, Value>,
}

impl EntityWriter {
    /// Starts from a copy of the overflow map.
    pub fn new(overflow: &Overflow) -> Self {
        Self {
            map: overflow.clone(),
        }
    }

    /// Writes a required field.
    pub fn required<T: Wire>(&mut self, key: &'static str, value: &T) {
        self.map.insert(key.to_string(), value.to_wire());
    }

    /// Writes an optional field, or ensures the key is omitted when absent.
    pub fn optional<T: Wire>(&mut self, key: &'static str, value: &Field<T>) {
        match value {
            Field::Present(v) => {
                self.map.insert(key.to_string(), v.to_wire());
            }
            Field::Absent => {
                self.map.remove(key);
            }
        }
    }

    /// Returns the finished mapping.
    pub fn finish(self) -> Map<String, Value> {
        self.map
    }
}

/// Deserializes an entity from a wire value, which must be a mapping.
///
/// ## Errors
///
/// Fails on a non-mapping value or on the first failing field.
pub fn decode<E: Entity>(value: &Value) -> Result<E, ModelError> {
    let Value::Object(map) = value else {
        return Err(ModelError::invalid_type(format!("object ({})", E::NAME), value));
    };
    E::read(EntityReader::new(E::NAME, map))
}

/// Serializes an entity to a wire mapping.
pub fn encode<E: Entity>(entity: &E) -> Value {
    let mut writer = EntityWriter::new(entity.overflow());
    entity.write(&mut writer);
    Value::Object(writer.finish())
}

/// Implements [`Wire`] for entity types via [`decode`] and [`encode`], and
/// serde's `Serialize`/`Deserialize` on top of it.
#[macro_export]
macro_rules! impl_entity_wire {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Wire for $ty {
                fn from_wire(value: &$crate::Value) -> ::core::result::Result<Self, $crate::ModelError> {
                    $crate::entity::decode(value)
                }

                fn to_wire(&self) -> $crate::Value {
                    $crate::entity::encode(self)
                }

                fn shape() -> ::std::string::String {
                    <$ty as $crate::Entity>::NAME.to_string()
                }
            }

            $crate::__serde_via_wire!($ty);
        )+
    };
}
