//! Closed sets of literal wire values.
//!
//! A [`LiteralSet`] is a Rust enum whose variants map one-to-one onto the
//! exact wire strings or small integers a field may carry. [`validate`] is
//! the single membership check every such field goes through: exact
//! equality, case-sensitive, no trimming, and no coercion between numeric
//! and string forms.
//!
//! Declare a set with [`literal_set!`](crate::literal_set):
//!
//! ```
//! use reader_model::{literal_set, validate, LiteralSet, Wire};
//! use serde_json::json;
//!
//! literal_set! {
//!     /// Logic level of a GPIO pin.
//!     pub enum Level as str {
//!         High = "HIGH",
//!         Low = "LOW",
//!     }
//! }
//!
//! literal_set! {
//!     /// Inventory session.
//!     pub enum Session as int {
//!         S0 = 0,
//!         S1 = 1,
//!     }
//! }
//!
//! assert_eq!(validate::<Level>(&json!("HIGH")).unwrap(), Level::High);
//! assert!(validate::<Level>(&json!("high")).is_err());
//! assert!(validate::<Session>(&json!("1")).is_err());
//! assert_eq!(Session::S1.to_wire(), json!(1));
//! assert_eq!(Level::MEMBERS.len(), 2);
//! ```

use std::fmt;

use serde_json::Value;

use crate::error::ModelError;

/// A single allowed wire literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// An exact wire string.
    Str(&'static str),
    /// An exact wire integer.
    Int(i64),
}

impl Literal {
    /// Returns the wire representation of this literal.
    pub fn to_value(self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.to_string()),
            Self::Int(i) => Value::from(i),
        }
    }

    /// Exact membership test against a raw wire value.
    ///
    /// Integer literals only match integral JSON numbers: `1.0` does not
    /// match `1`, and the string `"1"` never does.
    pub fn matches(self, raw: &Value) -> bool {
        match (self, raw) {
            (Self::Str(s), Value::String(r)) => s == r.as_str(),
            (Self::Int(i), Value::Number(n)) => n.as_i64() == Some(i),
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

/// The allowed members of a set, rendered as `{"HIGH", "LOW"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LiteralList(pub Vec<Literal>);

impl fmt::Display for LiteralList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, literal) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{literal}")?;
        }
        f.write_str("}")
    }
}

/// A named, closed, non-empty set of wire literals.
///
/// Implemented by the enums [`literal_set!`](crate::literal_set) declares.
pub trait LiteralSet: Sized + Copy + 'static {
    /// Name of the set, used in diagnostics.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// The exact wire literal for this member.
    fn literal(self) -> Literal;

    /// All allowed literals, in declaration order.
    fn allowed() -> LiteralList {
        LiteralList(Self::MEMBERS.iter().map(|m| m.literal()).collect())
    }
}

/// Validates a raw wire value against the literal set `L`.
///
/// ## Errors
///
/// Returns a schema violation naming the set, the offending value and the
/// allowed members when `raw` is not exactly one of them.
pub fn validate<L: LiteralSet>(raw: &Value) -> Result<L, ModelError> {
    L::MEMBERS
        .iter()
        .copied()
        .find(|member| member.literal().matches(raw))
        .ok_or_else(|| ModelError::schema_violation(L::NAME, raw.clone(), L::allowed()))
}

/// Declares a closed literal set as a Rust enum.
///
/// Use `as str` for string sets and `as int` for integer sets. The generated
/// enum implements [`LiteralSet`], [`Wire`](crate::Wire), serde's
/// `Serialize`/`Deserialize` and `Display`. String sets also derive strum's
/// `EnumString`, `AsRefStr` and `IntoStaticStr`, so the calling crate needs
/// `strum` as a dependency.
#[macro_export]
macro_rules! literal_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as str {
            $( $(#[$vmeta:meta])* $variant:ident = $value:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            $crate::strum::Display,
            $crate::strum::EnumString,
            $crate::strum::AsRefStr,
            $crate::strum::IntoStaticStr,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[strum(to_string = $value)] $variant ),+
        }

        impl $name {
            /// Returns the exact wire string.
            pub fn as_str(self) -> &'static str {
                self.into()
            }
        }

        impl $crate::LiteralSet for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$( Self::$variant ),+];

            fn literal(self) -> $crate::Literal {
                $crate::Literal::Str(self.as_str())
            }
        }

        $crate::__literal_wire!($name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as int {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Returns the exact wire integer.
            pub fn as_i64(self) -> i64 {
                match self {
                    $( Self::$variant => $value ),+
                }
            }
        }

        impl $crate::LiteralSet for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$( Self::$variant ),+];

            fn literal(self) -> $crate::Literal {
                $crate::Literal::Int(self.as_i64())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.as_i64())
            }
        }

        $crate::__literal_wire!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __literal_wire {
    ($name:ident) => {
        impl $crate::Wire for $name {
            fn from_wire(value: &$crate::Value) -> ::core::result::Result<Self, $crate::ModelError> {
                $crate::literal::validate(value)
            }

            fn to_wire(&self) -> $crate::Value {
                $crate::LiteralSet::literal(*self).to_value()
            }

            fn shape() -> ::std::string::String {
                <Self as $crate::LiteralSet>::NAME.to_string()
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

    crate::literal_set! {
        enum Level as str {
            High = "HIGH",
            Low = "LOW",
        }
    }

    crate::literal_set! {
        enum Channel as int {
            Zero = 0,
            One = 1,
            Two = 2,
        }
    }

    #[test]
    fn test_every_member_validates_to_itself() {
        for member in Level::MEMBERS {
            let raw = member.to_wire();
            assert_eq!(validate::<Level>(&raw).unwrap(), *member);
        }
        for member in Channel::MEMBERS {
            let raw = member.to_wire();
            assert_eq!(validate::<Channel>(&raw).unwrap(), *member);
        }
    }

    #[test]
    fn test_case_sensitive() {
        let err = validate::<Level>(&json!("High")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::SchemaViolation { .. }));
    }

    #[test]
    fn test_no_trimming() {
        assert!(validate::<Level>(&json!(" HIGH")).is_err());
    }

    #[test]
    fn test_wrong_primitive_type_rejected() {
        assert!(validate::<Level>(&json!(1)).is_err());
        assert!(validate::<Channel>(&json!("1")).is_err());
        assert!(validate::<Channel>(&json!(1.0)).is_err());
        assert!(validate::<Channel>(&json!(true)).is_err());
        assert!(validate::<Channel>(&json!(null)).is_err());
    }

    #[test]
    fn test_out_of_set_integer_rejected() {
        let err = validate::<Channel>(&json!(3)).unwrap_err();
        match err.kind() {
            ErrorKind::SchemaViolation {
                set,
                value,
                allowed,
            } => {
                assert_eq!(*set, "Channel");
                assert_eq!(value, &json!(3));
                assert_eq!(allowed.to_string(), "{0, 1, 2}");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_violation_names_value_and_set() {
        let err = validate::<Level>(&json!("MEDIUM")).unwrap_err();
        let display = err.to_string();
        assert!(display.contains("\"MEDIUM\""));
        assert!(display.contains(r#"{"HIGH", "LOW"}"#));
    }

    #[test]
    fn test_from_str_and_display() {
        let level: Level = "LOW".parse().unwrap();
        assert_eq!(level, Level::Low);
        assert_eq!(level.to_string(), "LOW");
        assert!("low".parse::<Level>().is_err());
        assert_eq!(Channel::Two.to_string(), "2");
        assert_eq!(Level::High.as_ref(), "HIGH");
    }

    #[test]
    fn test_serde_uses_exact_wire_values() {
        assert_eq!(serde_json::to_string(&Level::Low).unwrap(), r#""LOW""#);
        assert_eq!(serde_json::to_string(&Channel::One).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Channel>("2").unwrap(), Channel::Two);

        let err = serde_json::from_str::<Level>(r#""low""#).unwrap_err();
        assert!(err.to_string().contains(r#"{"HIGH", "LOW"}"#));
    }
}
