//! Body conversion settings.

use serde::Deserialize;

/// Policy knobs for the body edges.
///
/// The schema data itself (field tables, literal sets, candidate orders) is
/// fixed at compile time; only the handling of the HTTP envelope is
/// configurable.
///
/// ## Examples
///
/// ```
/// use reader_model::BodyConfig;
///
/// let config = BodyConfig::default()
///     .raise_on_unexpected_status(true)
///     .pretty(true);
/// assert!(config.raises_on_unexpected_status());
///
/// let from_file: BodyConfig = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
/// assert!(from_file.is_pretty());
/// assert!(!from_file.raises_on_unexpected_status());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BodyConfig {
    /// Return an error instead of the raw body for an unrouted status code.
    raise_on_unexpected_status: bool,
    /// Pretty-print outgoing request bodies.
    pretty: bool,
}

impl BodyConfig {
    /// Sets the unexpected-status policy.
    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    /// Sets pretty-printing of outgoing bodies.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns `true` if unrouted statuses are errors.
    pub fn raises_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    /// Returns `true` if outgoing bodies are pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}
