//! Conversion errors raised while reading or building wire values.

use serde::Serialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::literal::LiteralList;
use crate::path::{FieldPath, PathSegment};
use crate::union::AttemptLog;

/// Primitive kind of a raw wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum JsonKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl JsonKind {
    /// Classifies a raw wire value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// Stable code for each [`ErrorKind`].
///
/// ## Examples
///
/// ```
/// use reader_model::ErrorCode;
///
/// assert_eq!(ErrorCode::SchemaViolation.to_string(), "schema_violation");
/// let code: ErrorCode = "unresolved_union".parse().unwrap();
/// assert_eq!(code, ErrorCode::UnresolvedUnion);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A literal field's value is outside its allowed set.
    SchemaViolation,
    /// A required field's wire key is absent.
    MissingRequiredField,
    /// No candidate of a polymorphic field accepted the value.
    UnresolvedUnion,
    /// A value has the wrong primitive type or is out of range.
    InvalidType,
}

/// What went wrong, independent of where.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// A literal field's value is outside its allowed set.
    #[error("value {value} is not a member of {set} {allowed}")]
    SchemaViolation {
        /// Name of the literal set.
        set: &'static str,
        /// The offending raw value.
        value: Value,
        /// The members that would have been accepted.
        allowed: LiteralList,
    },

    /// A required field's wire key is absent.
    #[error("missing required field {field:?} of {entity}")]
    MissingRequiredField {
        /// Name of the entity being read.
        entity: &'static str,
        /// Wire key of the missing field.
        field: &'static str,
    },

    /// No candidate shape of a polymorphic field accepted the value.
    #[error("value {value} matched none of {union} [{}]: {attempts}", .attempts.candidate_names().join(", "))]
    UnresolvedUnion {
        /// Name of the union.
        union: &'static str,
        /// The raw value every candidate rejected.
        value: Value,
        /// Per-candidate failures, in attempt order.
        attempts: AttemptLog,
    },

    /// A value has the wrong primitive type or is out of range.
    #[error("expected {expected}, found {} {value}", JsonKind::of(.value))]
    InvalidType {
        /// Description of the accepted shape.
        expected: String,
        /// The offending raw value.
        value: Value,
    },
}

impl ErrorKind {
    /// Returns the stable code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SchemaViolation { .. } => ErrorCode::SchemaViolation,
            Self::MissingRequiredField { .. } => ErrorCode::MissingRequiredField,
            Self::UnresolvedUnion { .. } => ErrorCode::UnresolvedUnion,
            Self::InvalidType { .. } => ErrorCode::InvalidType,
        }
    }
}

/// A conversion failure located at a field path.
///
/// Errors start at the innermost failing value and gain path segments as
/// they propagate out of enclosing entities and sequences, so the rendered
/// message names the full path from the payload root.
///
/// ## Examples
///
/// ```
/// use reader_model::{ErrorCode, ModelError};
///
/// let err = ModelError::missing_field("GpiStatus", "2");
/// assert_eq!(err.code(), ErrorCode::MissingRequiredField);
/// assert_eq!(err.to_string(), r#"$["2"]: missing required field "2" of GpiStatus"#);
///
/// let err = err.with_key("gpi");
/// assert_eq!(err.path().to_string(), r#"$.gpi["2"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {kind}")]
pub struct ModelError {
    path: FieldPath,
    kind: Box<ErrorKind>,
}

impl ModelError {
    /// Creates an error at the root path.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            path: FieldPath::root(),
            kind: Box::new(kind),
        }
    }

    /// Creates a schema violation for a literal set.
    pub fn schema_violation(set: &'static str, value: Value, allowed: LiteralList) -> Self {
        Self::new(ErrorKind::SchemaViolation {
            set,
            value,
            allowed,
        })
    }

    /// Creates a missing-required-field error located at the field's key.
    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        Self {
            path: FieldPath::root().key(field),
            kind: Box::new(ErrorKind::MissingRequiredField { entity, field }),
        }
    }

    /// Creates an unresolved-union error.
    pub fn unresolved_union(union: &'static str, value: Value, attempts: AttemptLog) -> Self {
        Self::new(ErrorKind::UnresolvedUnion {
            union,
            value,
            attempts,
        })
    }

    /// Creates a type mismatch error.
    pub fn invalid_type(expected: impl Into<String>, value: &Value) -> Self {
        Self::new(ErrorKind::InvalidType {
            expected: expected.into(),
            value: value.clone(),
        })
    }

    /// Prefixes the path with a mapping key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.path.push_front(PathSegment::Key(key.into()));
        self
    }

    /// Prefixes the path with a sequence index.
    pub fn with_index(mut self, index: usize) -> Self {
        self.path.push_front(PathSegment::Index(index));
        self
    }

    /// Returns the path from the payload root to the failing value.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Returns `true` for a literal set violation.
    pub fn is_schema_violation(&self) -> bool {
        matches!(*self.kind, ErrorKind::SchemaViolation { .. })
    }

    /// Returns `true` for a missing required field.
    pub fn is_missing_field(&self) -> bool {
        matches!(*self.kind, ErrorKind::MissingRequiredField { .. })
    }

    /// Returns `true` for an unresolved union.
    pub fn is_unresolved_union(&self) -> bool {
        matches!(*self.kind, ErrorKind::UnresolvedUnion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_json_kind_of() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!({})).to_string(), "object");
    }

    #[test]
    fn test_codes_round_trip_through_strings() {
        for code in ErrorCode::iter() {
            let parsed: ErrorCode = code.as_ref().parse().unwrap();
            assert_eq!(parsed, code);
        }
    }

    #[test]
    fn test_schema_violation_display() {
        let err = ModelError::schema_violation(
            "GpioState",
            json!("MEDIUM"),
            LiteralList(vec![Literal::Str("HIGH"), Literal::Str("LOW")]),
        )
        .with_key("1");
        assert_eq!(
            err.to_string(),
            r#"$["1"]: value "MEDIUM" is not a member of GpioState {"HIGH", "LOW"}"#
        );
        assert!(err.is_schema_violation());
        assert!(!err.is_missing_field());
    }

    #[test]
    fn test_invalid_type_display() {
        let err = ModelError::invalid_type("string", &json!(42)).with_index(3);
        assert_eq!(err.to_string(), "$[3]: expected string, found number 42");
        assert_eq!(err.code(), ErrorCode::InvalidType);
    }

    #[test]
    fn test_paths_accumulate_outward() {
        let err = ModelError::invalid_type("u8", &json!(-1))
            .with_key("port")
            .with_index(0)
            .with_key("steps");
        assert_eq!(err.path().to_string(), "$.steps[0].port");
    }
}
