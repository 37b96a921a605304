//! Path-addressed value trees for database rows.
//!
//! A row arrives as a [`ValueTree`], usually a map of column name to value.
//! A [`PathEditor`] owns that tree for one encode or decode pass and
//! exposes:
//!
//! - [`PathEditor::get`] / [`PathEditor::set`]: read or write the node at a
//!   path of [`PathSegment`]s, growing arrays and maps on demand.
//! - typed decodes (`decode_bool`, `decode_integer`, `decode_float`, ...)
//!   with checked integer narrowing through [`safe_cast`].
//! - [`PathEditor::decode`]: the entry point for [`Decode`] types, which
//!   drive further path lookups through a [`Decoder`].
//!
//! Nodes whose decoding belongs to an external unit are stored as
//! [`ValueTree::Delegate`] and every typed decode is forwarded to it.
//!
//! # Example
//!
//! ```
//! use row_tree::{PathEditor, PathSegment, ValueTree, DecodeError};
//!
//! let mut row = PathEditor::default();
//! row.set(&[PathSegment::from("id")], ValueTree::Int64(300)).unwrap();
//! row.set(&[PathSegment::from("name")], "ada").unwrap();
//!
//! let name: String = row.decode(&[PathSegment::from("name")]).unwrap();
//! assert_eq!(name, "ada");
//!
//! let err = row.decode_integer::<u8>(&[PathSegment::from("id")]).unwrap_err();
//! assert!(matches!(err, DecodeError::TypeMismatch { .. }));
//! ```

mod cast;
mod decode;
mod delegate;
mod editor;
mod error;
mod json;
pub mod types;
pub mod util;
pub mod validate;
mod value;

pub use cast::{safe_cast, FixedWidthInteger, FloatingPoint};
pub use decode::{Decode, Decoder};
pub use delegate::{Delegate, DelegateHandle};
pub use editor::PathEditor;
pub use error::{DecodeError, EditError, PathError};
pub use types::{Path, PathSegment};
pub use util::{escape_component, format_path, is_valid_index, parse_path, unescape_component};
pub use validate::{validate_path, validate_pointer, MAX_PATH_LENGTH, MAX_POINTER_LENGTH};
pub use value::{IntegerRepr, Map, ValueKind, ValueTree};
