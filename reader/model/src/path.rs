//! Field paths for diagnostics.

use std::fmt;

/// One step into a wire value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A key of a wire mapping.
    Key(String),
    /// An element index of a wire sequence.
    Index(usize),
}

/// Location of a value inside a wire payload, outermost segment first.
///
/// Rendered with `$` as the root, identifier-like keys in dot form and every
/// other key (including numeric-string pin keys) quoted in brackets.
///
/// ## Examples
///
/// ```
/// use reader_model::FieldPath;
///
/// let path = FieldPath::root().key("gpiStatus").key("1");
/// assert_eq!(path.to_string(), r#"$.gpiStatus["1"]"#);
///
/// let path = FieldPath::root().key("antennas").index(2);
/// assert_eq!(path.to_string(), "$.antennas[2]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The payload root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends a key segment.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Appends an index segment.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Prepends a segment. Errors gain their outer segments while unwinding.
    pub fn push_front(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    /// Returns the segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the innermost key, if the path ends in a key.
    pub fn last_key(&self) -> Option<&str> {
        match self.segments.last() {
            Some(PathSegment::Key(k)) => Some(k),
            _ => None,
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(k) if is_identifier(k) => write!(f, ".{k}")?,
                PathSegment::Key(k) => write!(f, "[{k:?}]")?,
                PathSegment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}
