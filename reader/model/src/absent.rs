//! The "field not supplied" sentinel.
//!
//! [`Field<T>`] wraps every optional field of a model entity. A field is
//! either [`Field::Absent`] (the wire mapping had no such key and the
//! serializer will not emit one) or [`Field::Present`] with a value. Absence
//! is distinct from JSON `null`: a nullable optional field is declared as
//! `Field<Option<T>>`, giving three states that all round-trip separately.
//!
//! ## Examples
//!
//! ```
//! use reader_model::{Field, ABSENT};
//!
//! let missing: Field<u32> = ABSENT.into();
//! assert!(missing.is_absent());
//!
//! let null: Field<Option<u32>> = Field::Present(None);
//! assert!(null.is_present());
//! assert_ne!(null, Field::Absent);
//! ```

/// Unit marker for "not supplied".
///
/// Converts into an absent [`Field`] of any type, so it can serve as the
/// single shared default for every optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

/// The process-wide sentinel value.
pub const ABSENT: Absent = Absent;

/// An optional field: absent from the wire, or present with a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The wire key is missing; the serializer omits it.
    Absent,
    /// The wire key is present with this value.
    Present(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field was not supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the field holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the value, if present.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    /// Mutably borrows the value, if present.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    /// Converts `&Field<T>` into `Field<&T>`.
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Present(v) => Field::Present(v),
            Self::Absent => Field::Absent,
        }
    }

    /// Maps a present value, leaving absence untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Present(v) => Field::Present(f(v)),
            Self::Absent => Field::Absent,
        }
    }

    /// Returns the value or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(v) => v,
            Self::Absent => default,
        }
    }

    /// Replaces the field with a present value and returns the previous state.
    pub fn set(&mut self, value: T) -> Field<T> {
        std::mem::replace(self, Self::Present(value))
    }

    /// Resets the field to absent and returns the previous state.
    pub fn take(&mut self) -> Field<T> {
        std::mem::take(self)
    }

    /// Converts into a plain `Option`, losing the absent/present wording.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Absent> for Field<T> {
    fn from(_: Absent) -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` becomes [`Field::Absent`]. Use `Field::Present(None)` for an
    /// explicit null.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }
}

impl<T> PartialEq<Absent> for Field<T> {
    fn eq(&self, _: &Absent) -> bool {
        self.is_absent()
    }
}

/// Returns `true` only for an absent field.
pub fn is_absent<T>(field: &Field<T>) -> bool {
    field.is_absent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absent() {
        let field: Field<String> = Field::default();
        assert!(field.is_absent());
        assert!(is_absent(&field));
        assert_eq!(field, ABSENT);
    }

    #[test]
    fn test_absent_differs_from_null() {
        let null: Field<Option<i64>> = Field::Present(None);
        assert!(!null.is_absent());
        assert_ne!(null, ABSENT);
        assert_ne!(null, Field::Absent);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Field::from(Some(3)), Field::Present(3));
        assert_eq!(Field::<i32>::from(None), Field::Absent);
    }

    #[test]
    fn test_set_and_take() {
        let mut field: Field<u8> = ABSENT.into();
        assert_eq!(field.set(4), Field::Absent);
        assert_eq!(field.get(), Some(&4));
        assert_eq!(field.take(), Field::Present(4));
        assert!(field.is_absent());
    }

    #[test]
    fn test_map_preserves_absence() {
        let field: Field<u8> = Field::Absent;
        assert_eq!(field.map(|v| v * 2), Field::Absent);
        assert_eq!(Field::Present(2).map(|v| v * 2), Field::Present(4));
    }
}
