//! Error types.

use thiserror::Error;

use crate::types::{Path, PathSegment};
use crate::util::format_path;

/// Failure while decoding a node into a typed value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// No node exists at `path`.
    #[error("value not found: expected {expected} at '{}'", format_path(.path))]
    ValueNotFound {
        /// Name of the requested type.
        expected: &'static str,
        /// Path that was resolved.
        path: Path,
    },
    /// A node exists but cannot become the requested type.
    #[error(
        "type mismatch: expected {expected} at '{}'{}",
        format_path(.path),
        detail_suffix(.detail)
    )]
    TypeMismatch {
        /// Name of the requested type.
        expected: &'static str,
        /// Path that was resolved.
        path: Path,
        /// Human-readable reason, empty when the variant simply did not match.
        detail: String,
    },
    /// Failure raised by a delegate or a [`Decode`](crate::Decode) impl.
    #[error("{0}")]
    Custom(String),
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

impl DecodeError {
    pub(crate) fn not_found(expected: &'static str, path: &[PathSegment]) -> Self {
        DecodeError::ValueNotFound {
            expected,
            path: path.to_vec(),
        }
    }

    pub(crate) fn mismatch(
        expected: &'static str,
        path: &[PathSegment],
        detail: impl Into<String>,
    ) -> Self {
        DecodeError::TypeMismatch {
            expected,
            path: path.to_vec(),
            detail: detail.into(),
        }
    }

    /// Re-anchors a failure raised on a scratch tree under `prefix`.
    pub(crate) fn prefixed(mut self, prefix: &[PathSegment]) -> Self {
        match &mut self {
            DecodeError::ValueNotFound { path, .. } | DecodeError::TypeMismatch { path, .. } => {
                path.splice(0..0, prefix.iter().cloned());
            }
            DecodeError::Custom(_) => {}
        }
        self
    }

    /// Build a [`DecodeError::Custom`].
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        DecodeError::Custom(msg.to_string())
    }

    /// Path the failure refers to, if any.
    pub fn path(&self) -> Option<&[PathSegment]> {
        match self {
            DecodeError::ValueNotFound { path, .. } | DecodeError::TypeMismatch { path, .. } => {
                Some(path)
            }
            DecodeError::Custom(_) => None,
        }
    }

    /// Mismatch detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            DecodeError::TypeMismatch { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Failure while editing a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// `set` only accepts single-segment paths.
    #[error("set requires a single-segment path, got {depth} segments")]
    UnsupportedDepth {
        /// Number of segments that were passed.
        depth: usize,
    },
}

/// Failure while parsing or validating a path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("pointer must be empty or start with '/'")]
    NotAbsolute,
    #[error("pointer too long: {len} bytes (max {max})")]
    TooLong { len: usize, max: usize },
    #[error("path too deep: {depth} segments (max {max})")]
    TooDeep { depth: usize, max: usize },
}
