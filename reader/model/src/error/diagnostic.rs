//! User-facing report of a conversion failure.

use serde::Serialize;
use serde_json::Value;

use super::{ErrorCode, ErrorKind, ModelError};

/// Serializable report of a [`ModelError`].
///
/// Names the field path, the offending raw value and what would have been
/// acceptable: the allowed members for a literal set, the attempted
/// candidates for a union, or the expected shape for a type mismatch.
///
/// ## Examples
///
/// ```
/// use reader_model::{Diagnostic, ErrorCode, ModelError};
///
/// let err = ModelError::invalid_type("string", &serde_json::json!(7)).with_key("name");
/// let report = Diagnostic::from(&err);
/// assert_eq!(report.code, ErrorCode::InvalidType);
/// assert_eq!(report.path, "$.name");
/// assert_eq!(report.expected, vec!["string".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Stable error code.
    pub code: ErrorCode,
    /// Rendered field path, e.g. `$.antennas[0]["1"]`.
    pub path: String,
    /// The offending raw value, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// What would have been accepted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expected: Vec<String>,
    /// Full human-readable message.
    pub message: String,
}

impl From<&ModelError> for Diagnostic {
    fn from(err: &ModelError) -> Self {
        let (value, expected) = match err.kind() {
            ErrorKind::SchemaViolation { value, allowed, .. } => (
                Some(value.clone()),
                allowed.0.iter().map(ToString::to_string).collect(),
            ),
            ErrorKind::MissingRequiredField { field, .. } => (None, vec![(*field).to_string()]),
            ErrorKind::UnresolvedUnion {
                value, attempts, ..
            } => (
                Some(value.clone()),
                attempts
                    .candidate_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            ErrorKind::InvalidType { expected, value } => {
                (Some(value.clone()), vec![expected.clone()])
            }
        };

        Self {
            code: err.code(),
            path: err.path().to_string(),
            value,
            expected,
            message: err.to_string(),
        }
    }
}

impl ModelError {
    /// Builds the user-facing report for this error.
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::from(self)
    }
}
