//! Polymorphic fields resolved by ordered structural trial.
//!
//! The wire format carries no discriminator for these fields, so a raw value
//! is offered to each candidate shape in declaration order and the first one
//! that converts without error wins. Later candidates are never consulted,
//! even when they would also match: the order is the priority. List
//! structured shapes before permissive fallbacks such as a bare string.
//!
//! Each attempt returns an explicit `Result`; failures are collected into an
//! [`AttemptLog`] instead of being thrown and caught.
//!
//! Declare a union with [`wire_union!`](crate::wire_union):
//!
//! ```
//! use reader_model::{wire_union, Wire};
//! use serde_json::json;
//!
//! wire_union! {
//!     /// A name or a numeric id.
//!     pub enum NameOrId {
//!         Id(u32),
//!         Name(String),
//!     }
//! }
//!
//! assert_eq!(NameOrId::from_wire(&json!(7)).unwrap(), NameOrId::Id(7));
//! assert_eq!(
//!     NameOrId::from_wire(&json!("dock")).unwrap(),
//!     NameOrId::Name("dock".to_string())
//! );
//! assert!(NameOrId::from_wire(&json!(true)).is_err());
//! ```

use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ModelError;

/// Conversion procedure for one candidate shape.
pub type ParseFn<T> = fn(&Value) -> Result<T, ModelError>;

/// One candidate shape of a polymorphic field.
pub struct Candidate<T> {
    name: &'static str,
    parse: ParseFn<T>,
}

impl<T> Candidate<T> {
    /// Creates a candidate with a name used in diagnostics.
    pub const fn new(name: &'static str, parse: ParseFn<T>) -> Self {
        Self { name, parse }
    }

    /// Returns the candidate's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs this candidate's conversion in isolation.
    pub fn attempt(&self, raw: &Value) -> Result<T, ModelError> {
        (self.parse)(raw)
    }
}

impl<T> Clone for Candidate<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Candidate<T> {}

impl<T> fmt::Debug for Candidate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

/// A rejected candidate and why it rejected the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// Name of the candidate.
    pub candidate: &'static str,
    /// The candidate's conversion error.
    pub error: ModelError,
}

/// Every failed attempt of one resolution, in attempt order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttemptLog {
    attempts: Vec<Attempt>,
}

impl AttemptLog {
    /// Records a failed attempt.
    pub fn push(&mut self, candidate: &'static str, error: ModelError) {
        self.attempts.push(Attempt { candidate, error });
    }

    /// Returns the attempts, in order.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Returns the names of the attempted candidates, in order.
    pub fn candidate_names(&self) -> Vec<&'static str> {
        self.attempts.iter().map(|a| a.candidate).collect()
    }

    /// Number of attempts.
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    /// Returns `true` if nothing was attempted.
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

impl fmt::Display for AttemptLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attempt) in self.attempts.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} rejected ({})", attempt.candidate, attempt.error)?;
        }
        Ok(())
    }
}

/// Offers `raw` to each candidate in order.
///
/// Returns the index of the first candidate that accepted the value together
/// with its result, or the log of every rejection when none did.
pub fn try_candidates<T>(raw: &Value, candidates: &[Candidate<T>]) -> Result<(usize, T), AttemptLog> {
    let mut log = AttemptLog::default();
    for (index, candidate) in candidates.iter().enumerate() {
        match candidate.attempt(raw) {
            Ok(value) => {
                trace!(candidate = candidate.name, "union candidate accepted");
                return Ok((index, value));
            }
            Err(error) => {
                trace!(candidate = candidate.name, %error, "union candidate rejected");
                log.push(candidate.name, error);
            }
        }
    }
    Err(log)
}

/// Resolves a polymorphic field.
///
/// ## Errors
///
/// Returns an unresolved-union error carrying the raw value and every
/// candidate's rejection when no candidate accepts the value. There is no
/// fallback to a default.
pub fn resolve<T>(union: &'static str, raw: &Value, candidates: &[Candidate<T>]) -> Result<T, ModelError> {
    match try_candidates(raw, candidates) {
        Ok((index, value)) => {
            debug!(union, candidate = candidates[index].name, "resolved union");
            Ok(value)
        }
        Err(attempts) => {
            debug!(union, attempts = attempts.len(), "union unresolved");
            Err(ModelError::unresolved_union(union, raw.clone(), attempts))
        }
    }
}

/// Declares a polymorphic field as a Rust enum.
///
/// Each variant wraps one candidate shape implementing [`Wire`](crate::Wire);
/// variants are tried in the order written. Serializing dispatches straight
/// to the held variant with no trial. The enum also implements serde's
/// `Serialize`/`Deserialize` through the same path.
#[macro_export]
macro_rules! wire_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($ty) ),+
        }

        impl $name {
            /// Candidate shapes, in resolution order.
            pub fn candidates() -> ::std::vec::Vec<$crate::Candidate<Self>> {
                ::std::vec![
                    $(
                        $crate::Candidate::new(stringify!($variant), |raw| {
                            <$ty as $crate::Wire>::from_wire(raw).map(Self::$variant)
                        })
                    ),+
                ]
            }

            /// Returns the name of the held candidate.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($variant) ),+
                }
            }
        }

        impl $crate::Wire for $name {
            fn from_wire(value: &$crate::Value) -> ::core::result::Result<Self, $crate::ModelError> {
                $crate::union::resolve(stringify!($name), value, &Self::candidates())
            }

            fn to_wire(&self) -> $crate::Value {
                match self {
                    $( Self::$variant(inner) => $crate::Wire::to_wire(inner) ),+
                }
            }

            fn shape() -> ::std::string::String {
                stringify!($name).to_string()
            }
        }

        $crate::__serde_via_wire!($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::Wire;
    use serde_json::json;
    use tracing_test::traced_test;

    fn as_text(raw: &Value) -> Result<String, ModelError> {
        String::from_wire(raw)
    }

    fn as_upper(raw: &Value) -> Result<String, ModelError> {
        String::from_wire(raw).map(|s| s.to_uppercase())
    }

    fn as_number(raw: &Value) -> Result<String, ModelError> {
        f64::from_wire(raw).map(|n| n.to_string())
    }

    #[test]
    fn test_first_match_wins() {
        let candidates = [
            Candidate::new("text", as_text as ParseFn<String>),
            Candidate::new("upper", as_upper),
        ];
        let (index, value) = try_candidates(&json!("abc"), &candidates).unwrap();
        assert_eq!(index, 0);
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_reordering_changes_result() {
        let forward = [
            Candidate::new("text", as_text as ParseFn<String>),
            Candidate::new("upper", as_upper),
        ];
        let reversed = [
            Candidate::new("upper", as_upper as ParseFn<String>),
            Candidate::new("text", as_text),
        ];
        let raw = json!("abc");
        assert_eq!(resolve("Text", &raw, &forward).unwrap(), "abc");
        assert_eq!(resolve("Text", &raw, &reversed).unwrap(), "ABC");
    }

    #[test]
    fn test_later_candidate_used_after_rejection() {
        let candidates = [
            Candidate::new("text", as_text as ParseFn<String>),
            Candidate::new("number", as_number),
        ];
        let (index, value) = try_candidates(&json!(2.5), &candidates).unwrap();
        assert_eq!(index, 1);
        assert_eq!(value, "2.5");
    }

    #[test]
    fn test_all_candidates_fail() {
        let candidates = [
            Candidate::new("text", as_text as ParseFn<String>),
            Candidate::new("number", as_number),
        ];
        let err = resolve("TextOrNumber", &json!([1]), &candidates).unwrap_err();
        match err.kind() {
            ErrorKind::UnresolvedUnion {
                union,
                value,
                attempts,
            } => {
                assert_eq!(*union, "TextOrNumber");
                assert_eq!(value, &json!([1]));
                assert_eq!(attempts.candidate_names(), vec!["text", "number"]);
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_empty_candidate_list_never_resolves() {
        let candidates: [Candidate<String>; 0] = [];
        let err = resolve("Nothing", &json!("x"), &candidates).unwrap_err();
        assert!(err.is_unresolved_union());
    }

    crate::wire_union! {
        enum Loose {
            Flag(bool),
            Count(u8),
            Text(String),
        }
    }

    #[test]
    fn test_macro_union_round_trips_each_variant() {
        for raw in [json!(true), json!(4), json!("four")] {
            let value = Loose::from_wire(&raw).unwrap();
            assert_eq!(value.to_wire(), raw);
        }
        assert_eq!(Loose::from_wire(&json!(4)).unwrap().variant_name(), "Count");
    }

    #[test]
    fn test_macro_union_out_of_range_falls_through() {
        let err = Loose::from_wire(&json!(300)).unwrap_err();
        assert!(err.is_unresolved_union());
        assert!(err.to_string().contains("Flag, Count, Text"));
    }

    #[test]
    fn test_macro_union_through_serde() {
        let parsed: Vec<Loose> = serde_json::from_str(r#"[false, 9, "nine"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Loose::Flag(false), Loose::Count(9), Loose::Text("nine".to_string())]
        );
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"[false,9,"nine"]"#);

        let err = serde_json::from_str::<Loose>("[1]").unwrap_err();
        assert!(err.to_string().contains("matched none of Loose"));
    }

    #[test]
    #[traced_test]
    fn test_attempts_are_traced() {
        let _ = Loose::from_wire(&json!("x"));
        assert!(logs_contain("union candidate rejected"));
        assert!(logs_contain("resolved union"));
    }
}
