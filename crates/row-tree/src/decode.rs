//! The seam between [`PathEditor`] and structured decoders.
//!
//! A type implements [`Decode`] by asking a [`Decoder`] for its fields. Each
//! request resolves a longer path against the same editor, so nested types
//! recurse into further path-based decodes without copying the tree.

use crate::cast::{FixedWidthInteger, FloatingPoint};
use crate::editor::PathEditor;
use crate::types::{Path, PathSegment};
use crate::value::ValueTree;
use crate::DecodeError;

/// A type that can be decoded from the node a [`Decoder`] points at.
///
/// # Example
///
/// ```
/// use row_tree::{Decode, Decoder, DecodeError, PathEditor, ValueTree};
///
/// #[derive(Debug, PartialEq)]
/// struct User {
///     name: String,
///     age: u8,
///     email: Option<String>,
/// }
///
/// impl Decode for User {
///     fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
///         Ok(User {
///             name: decoder.field("name")?,
///             age: decoder.field("age")?,
///             email: decoder.field("email")?,
///         })
///     }
/// }
///
/// let row: ValueTree = [("name", ValueTree::from("ada")), ("age", ValueTree::Int64(36))]
///     .into_iter()
///     .collect();
/// let user: User = PathEditor::new(row).decode(&[]).unwrap();
/// assert_eq!(user, User { name: "ada".into(), age: 36, email: None });
/// ```
pub trait Decode: Sized {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError>;
}

/// Nested decoding context: an editor plus the path being decoded.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    editor: &'a PathEditor,
    path: Path,
}

impl<'a> Decoder<'a> {
    pub fn new(editor: &'a PathEditor, path: Path) -> Self {
        Self { editor, path }
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn editor(&self) -> &'a PathEditor {
        self.editor
    }

    /// The node at the current path, if any.
    pub fn node(&self) -> Option<&'a ValueTree> {
        self.editor.get(&self.path)
    }

    /// A decoder one segment deeper.
    pub fn nested(&self, segment: impl Into<PathSegment>) -> Decoder<'a> {
        let mut path = self.path.clone();
        path.push(segment.into());
        Decoder::new(self.editor, path)
    }

    pub fn is_nil(&self) -> bool {
        self.editor.decode_nil(&self.path)
    }

    pub fn decode_bool(&self) -> Result<bool, DecodeError> {
        self.editor.decode_bool(&self.path)
    }

    pub fn decode_string(&self) -> Result<String, DecodeError> {
        self.editor.decode_string(&self.path)
    }

    pub fn decode_integer<I: FixedWidthInteger>(&self) -> Result<I, DecodeError> {
        self.editor.decode_integer(&self.path)
    }

    pub fn decode_float<F: FloatingPoint>(&self) -> Result<F, DecodeError> {
        self.editor.decode_float(&self.path)
    }

    /// Decodes `T` at the current path, honouring delegate nodes.
    pub fn decode<T: Decode>(&self) -> Result<T, DecodeError> {
        self.editor.decode(&self.path)
    }

    /// Decodes the map entry `key`.
    pub fn field<T: Decode>(&self, key: &str) -> Result<T, DecodeError> {
        self.nested(key).decode()
    }

    /// Decodes the array element `index`.
    pub fn element<T: Decode>(&self, index: usize) -> Result<T, DecodeError> {
        self.nested(index).decode()
    }

    /// Number of elements or entries of the container at the current path.
    pub fn len(&self) -> Result<usize, DecodeError> {
        match self.node() {
            Some(ValueTree::Array(items)) => Ok(items.len()),
            Some(ValueTree::Map(map)) => Ok(map.len()),
            Some(_) => Err(DecodeError::mismatch("container", &self.path, "")),
            None => Err(DecodeError::not_found("container", &self.path)),
        }
    }

    pub fn is_empty(&self) -> Result<bool, DecodeError> {
        self.len().map(|n| n == 0)
    }

    /// Keys of the map at the current path, in order.
    pub fn keys(&self) -> Result<Vec<String>, DecodeError> {
        match self.node() {
            Some(ValueTree::Map(map)) => Ok(map.keys().cloned().collect()),
            Some(_) => Err(DecodeError::mismatch("map", &self.path, "")),
            None => Err(DecodeError::not_found("map", &self.path)),
        }
    }
}

impl Decode for bool {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        decoder.decode_bool()
    }
}

impl Decode for String {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        decoder.decode_string()
    }
}

macro_rules! impl_decode_numeric {
    ($method:ident: $($ty:ty),*) => {
        $(
            impl Decode for $ty {
                fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
                    decoder.$method()
                }
            }
        )*
    };
}

impl_decode_numeric!(decode_integer: isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
impl_decode_numeric!(decode_float: f32, f64);

impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        if decoder.is_nil() {
            return Ok(None);
        }
        decoder.decode().map(Some)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        match decoder.node() {
            Some(ValueTree::Array(items)) => (0..items.len()).map(|i| decoder.element(i)).collect(),
            Some(_) => Err(DecodeError::mismatch("array", decoder.path(), "")),
            None => Err(DecodeError::not_found("array", decoder.path())),
        }
    }
}

impl Decode for ValueTree {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        decoder
            .node()
            .cloned()
            .ok_or_else(|| DecodeError::not_found("tree", decoder.path()))
    }
}
