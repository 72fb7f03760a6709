//! Dotted key paths for navigating document structure.
//!
//! A path names a sequence of mapping keys to descend through, written as
//! `a.b.c`. Only named-key descent is supported; there is no array-index
//! addressing.

use std::fmt;

/// An owned sequence of mapping-key segments.
///
/// Parsed from a dot-delimited string. Empty segments produced by stray
/// dots are skipped, so `"a..b"` and `"a.b."` both name the same path.
///
/// # Examples
///
/// ```
/// use paramsweep::KeyPath;
///
/// let path = KeyPath::parse("camera.fov");
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "camera.fov");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Parse a dot-delimited path string.
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Check if this path has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        KeyPath::parse(path)
    }
}
