//! Pointer-style rendering and parsing of [`Path`]s.
//!
//! Paths are written the way RFC 6901 pointers are: `/rows/0/name`. The
//! empty string is the root.

use crate::types::{Path, PathSegment};
use crate::validate::{validate_path, validate_pointer};
use crate::PathError;

/// Unescapes one pointer token. `~1` becomes `/` and `~0` becomes `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 before ~0, otherwise "~01" would turn into "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one pointer token. `~` becomes `~0` and `/` becomes `~1`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Check if a token is a canonical array index (`0`, or digits without a leading zero).
pub fn is_valid_index(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let bytes = token.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Render a path as a pointer string.
///
/// # Example
///
/// ```
/// use row_tree::{format_path, PathSegment};
///
/// assert_eq!(format_path(&[]), "");
/// let path = vec![PathSegment::from("rows"), PathSegment::from(0usize), PathSegment::from("a/b")];
/// assert_eq!(format_path(&path), "/rows/0/a~1b");
/// ```
pub fn format_path(path: &[PathSegment]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    for segment in path {
        out.push('/');
        match segment {
            PathSegment::Index(i) => out.push_str(&i.to_string()),
            PathSegment::Key(k) => out.push_str(&escape_component(k)),
        }
    }
    out
}

/// Parse a pointer string into a path.
///
/// Tokens that are canonical array indexes become [`PathSegment::Index`],
/// all others become [`PathSegment::Key`].
///
/// # Errors
///
/// Fails when the pointer is non-empty and does not start with `/`, or when
/// it exceeds the length or depth limits in [`crate::validate`].
///
/// # Example
///
/// ```
/// use row_tree::{parse_path, PathSegment};
///
/// let path = parse_path("/rows/0/name").unwrap();
/// assert_eq!(path, vec![
///     PathSegment::Key("rows".into()),
///     PathSegment::Index(0),
///     PathSegment::Key("name".into()),
/// ]);
/// assert!(parse_path("rows").is_err());
/// ```
pub fn parse_path(pointer: &str) -> Result<Path, PathError> {
    validate_pointer(pointer)?;
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let path: Path = pointer[1..]
        .split('/')
        .map(|token| {
            if is_valid_index(token) {
                if let Ok(i) = token.parse::<usize>() {
                    return PathSegment::Index(i);
                }
            }
            PathSegment::Key(unescape_component(token))
        })
        .collect();
    validate_path(&path)?;
    Ok(path)
}
