//! Path types for addressing nodes inside a [`ValueTree`](crate::ValueTree).

use std::fmt;

/// A step in a path.
///
/// Either an array index or a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Zero-based position inside an `Array`.
    Index(usize),
    /// Key inside a `Map`.
    Key(String),
}

/// A path from the root of a tree. The empty path addresses the root itself.
pub type Path = Vec<PathSegment>;

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{i}"),
            PathSegment::Key(k) => f.write_str(k),
        }
    }
}
