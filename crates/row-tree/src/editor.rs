//! [`PathEditor`]: path-based get, set and typed decode over one owned tree.

use tracing::{debug, trace};

use crate::cast::{safe_cast, FixedWidthInteger, FloatingPoint};
use crate::decode::{Decode, Decoder};
use crate::delegate::decode_delegated;
use crate::types::PathSegment;
use crate::util::format_path;
use crate::value::{Map, ValueTree};
use crate::{DecodeError, EditError};

/// Owner of a single [`ValueTree`] root.
///
/// An editor lives for one encode or decode pass over one row. It is not
/// shared; rows processed concurrently each get their own editor.
///
/// # Example
///
/// ```
/// use row_tree::{PathEditor, PathSegment, ValueTree};
///
/// let mut editor = PathEditor::default();
/// editor.set(&[PathSegment::from("age")], ValueTree::Int(30)).unwrap();
///
/// let age: i16 = editor.decode_integer(&[PathSegment::from("age")]).unwrap();
/// assert_eq!(age, 30);
/// assert!(editor.decode_nil(&[PathSegment::from("name")]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathEditor {
    root: ValueTree,
}

impl Default for PathEditor {
    fn default() -> Self {
        PathEditor::new(ValueTree::map())
    }
}

impl PathEditor {
    pub fn new(root: ValueTree) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &ValueTree {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ValueTree {
        &mut self.root
    }

    pub fn into_root(self) -> ValueTree {
        self.root
    }

    /// Resolves `path` against the root.
    ///
    /// Index segments only descend into arrays and key segments only into
    /// maps. Any other combination, a missing key or an out-of-bounds index
    /// yields `None`. The empty path is the root.
    pub fn get(&self, path: &[PathSegment]) -> Option<&ValueTree> {
        let mut current = &self.root;
        for segment in path {
            current = match (current, segment) {
                (ValueTree::Array(items), PathSegment::Index(i)) => items.get(*i)?,
                (ValueTree::Map(map), PathSegment::Key(k)) => map.get(k)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Stores `value` under a single-segment path.
    ///
    /// # Errors
    ///
    /// [`EditError::UnsupportedDepth`] when `path` does not have exactly one
    /// segment. Use [`PathEditor::set_path`] for other depths.
    pub fn set(
        &mut self,
        path: &[PathSegment],
        value: impl Into<ValueTree>,
    ) -> Result<(), EditError> {
        if path.len() != 1 {
            return Err(EditError::UnsupportedDepth { depth: path.len() });
        }
        self.set_path(path, value);
        Ok(())
    }

    /// Stores `value` at a path of any depth, growing containers on demand.
    ///
    /// An index past the end appends. A node of the wrong shape, delegates
    /// included, is replaced by a fresh container. The empty path replaces
    /// the root.
    pub fn set_path(&mut self, path: &[PathSegment], value: impl Into<ValueTree>) {
        let root = std::mem::take(&mut self.root);
        self.root = reshape(root, path, path, value.into());
    }

    /// True when the node is absent or `Null`. Never fails.
    pub fn decode_nil(&self, path: &[PathSegment]) -> bool {
        matches!(self.get(path), None | Some(ValueTree::Null))
    }

    pub fn decode_bool(&self, path: &[PathSegment]) -> Result<bool, DecodeError> {
        match self.resolve("bool", path)? {
            ValueTree::Bool(b) => Ok(*b),
            ValueTree::Delegate(d) => d.decode_bool(path),
            other => Err(mismatch("bool", path, other)),
        }
    }

    pub fn decode_string(&self, path: &[PathSegment]) -> Result<String, DecodeError> {
        match self.resolve("string", path)? {
            ValueTree::String(s) => Ok(s.clone()),
            ValueTree::Delegate(d) => d.decode_string(path),
            other => Err(mismatch("string", path, other)),
        }
    }

    /// Decodes any integer node into `I` through [`safe_cast`].
    pub fn decode_integer<I: FixedWidthInteger>(
        &self,
        path: &[PathSegment],
    ) -> Result<I, DecodeError> {
        let node = self.resolve(I::NAME, path)?;
        if let ValueTree::Delegate(d) = node {
            return I::decode_delegate(&**d, path);
        }
        match node.integer() {
            Some(repr) => safe_cast(repr, path).inspect_err(|e| {
                debug!(path = %format_path(path), error = %e, "integer cast rejected");
            }),
            None => Err(mismatch(I::NAME, path, node)),
        }
    }

    /// Decodes any numeric node into `F`.
    ///
    /// Integers widen and `f64` narrows to `f32` without range checks.
    pub fn decode_float<F: FloatingPoint>(&self, path: &[PathSegment]) -> Result<F, DecodeError> {
        let node = self.resolve(F::NAME, path)?;
        match node {
            ValueTree::Float(f) => Ok(F::from_f32(*f)),
            ValueTree::Double(d) => Ok(F::from_f64(*d)),
            ValueTree::Delegate(d) => F::decode_delegate(&**d, path),
            other => match other.integer() {
                Some(repr) => Ok(F::from_integer(repr.value)),
                None => Err(mismatch(F::NAME, path, other)),
            },
        }
    }

    /// Decodes a [`Decode`] type rooted at `path`.
    ///
    /// A delegate node decodes `D` itself. Otherwise `D` drives further
    /// lookups through a [`Decoder`] bound to this editor and `path`.
    pub fn decode<D: Decode>(&self, path: &[PathSegment]) -> Result<D, DecodeError> {
        if let Some(d) = self.get(path).and_then(ValueTree::as_delegate) {
            return decode_delegated(&**d, path);
        }
        D::decode(&Decoder::new(self, path.to_vec()))
    }

    fn resolve(
        &self,
        expected: &'static str,
        path: &[PathSegment],
    ) -> Result<&ValueTree, DecodeError> {
        self.get(path).ok_or_else(|| {
            debug!(path = %format_path(path), expected, "value not found");
            DecodeError::not_found(expected, path)
        })
    }
}

fn mismatch(expected: &'static str, path: &[PathSegment], found: &ValueTree) -> DecodeError {
    debug!(
        path = %format_path(path),
        expected,
        found = found.kind().name(),
        "type mismatch"
    );
    DecodeError::mismatch(expected, path, String::new())
}

/// Takes ownership of `context`, places `value` at `path` below it and
/// returns the rebuilt node. `full` is only used for tracing.
fn reshape(
    context: ValueTree,
    path: &[PathSegment],
    full: &[PathSegment],
    value: ValueTree,
) -> ValueTree {
    let Some((segment, rest)) = path.split_first() else {
        return value;
    };

    match (context, segment) {
        (ValueTree::Array(mut items), PathSegment::Index(index)) => {
            if let Some(slot) = items.get_mut(*index) {
                let nested = std::mem::take(slot);
                *slot = reshape(nested, rest, full, value);
            } else {
                items.push(reshape(ValueTree::map(), rest, full, value));
            }
            ValueTree::Array(items)
        }
        (ValueTree::Map(mut map), PathSegment::Key(key)) => {
            let nested = map
                .get_mut(key)
                .map(std::mem::take)
                .unwrap_or_else(ValueTree::map);
            let child = reshape(nested, rest, full, value);
            map.insert(key.clone(), child);
            ValueTree::Map(map)
        }
        (replaced, PathSegment::Index(_)) => {
            trace!(
                path = %format_path(full),
                replaced = replaced.kind().name(),
                "replacing node with array"
            );
            ValueTree::Array(vec![reshape(ValueTree::map(), rest, full, value)])
        }
        (replaced, PathSegment::Key(key)) => {
            trace!(
                path = %format_path(full),
                replaced = replaced.kind().name(),
                "replacing node with map"
            );
            let mut map = Map::new();
            map.insert(key.clone(), reshape(ValueTree::map(), rest, full, value));
            ValueTree::Map(map)
        }
    }
}
