//! Validation limits for pointers and paths.

use crate::types::PathSegment;
use crate::PathError;

/// Maximum allowed pointer string length.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a pointer string.
///
/// # Example
///
/// ```
/// use row_tree::validate_pointer;
///
/// validate_pointer("").unwrap();
/// validate_pointer("/foo/0").unwrap();
/// validate_pointer("foo").unwrap_err();
/// ```
pub fn validate_pointer(pointer: &str) -> Result<(), PathError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PathError::NotAbsolute);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(PathError::TooLong {
            len: pointer.len(),
            max: MAX_POINTER_LENGTH,
        });
    }
    Ok(())
}

/// Validate a path's depth.
pub fn validate_path(path: &[PathSegment]) -> Result<(), PathError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::TooDeep {
            depth: path.len(),
            max: MAX_PATH_LENGTH,
        });
    }
    Ok(())
}
