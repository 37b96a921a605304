//! Bridge to an external decoding unit.
//!
//! A [`ValueTree::Delegate`] node carries a [`DelegateHandle`]. When a typed
//! decode lands on such a node the request is forwarded to the handle
//! instead of being answered from the tree.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::decode::Decode;
use crate::editor::PathEditor;
use crate::types::PathSegment;
use crate::value::ValueTree;
use crate::DecodeError;

/// Decoding capability of an external unit bound to one node.
///
/// Only [`Delegate::decode_tree`] is required. Every typed method defaults
/// to materialising the node with `decode_tree` and decoding the result with
/// the same rules a [`PathEditor`] applies, so implementors override only
/// the types they can produce directly.
pub trait Delegate: fmt::Debug + Send + Sync {
    /// Materialise the node as a tree. `path` is where the delegate sits.
    fn decode_tree(&self, path: &[PathSegment]) -> Result<ValueTree, DecodeError>;

    fn decode_bool(&self, path: &[PathSegment]) -> Result<bool, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_string(&self, path: &[PathSegment]) -> Result<String, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_isize(&self, path: &[PathSegment]) -> Result<isize, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_i8(&self, path: &[PathSegment]) -> Result<i8, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_i16(&self, path: &[PathSegment]) -> Result<i16, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_i32(&self, path: &[PathSegment]) -> Result<i32, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_i64(&self, path: &[PathSegment]) -> Result<i64, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_usize(&self, path: &[PathSegment]) -> Result<usize, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_u8(&self, path: &[PathSegment]) -> Result<u8, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_u16(&self, path: &[PathSegment]) -> Result<u16, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_u32(&self, path: &[PathSegment]) -> Result<u32, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_u64(&self, path: &[PathSegment]) -> Result<u64, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_f32(&self, path: &[PathSegment]) -> Result<f32, DecodeError> {
        decode_delegated(self, path)
    }

    fn decode_f64(&self, path: &[PathSegment]) -> Result<f64, DecodeError> {
        decode_delegated(self, path)
    }
}

/// Builds a scratch editor over the delegate's tree.
fn materialize<D: Delegate + ?Sized>(
    delegate: &D,
    path: &[PathSegment],
) -> Result<PathEditor, DecodeError> {
    match delegate.decode_tree(path)? {
        ValueTree::Delegate(_) => Err(DecodeError::mismatch(
            "tree",
            path,
            "delegate resolved to another delegate",
        )),
        tree => Ok(PathEditor::new(tree)),
    }
}

/// Decodes any [`Decode`] type through a delegate's materialised tree.
pub(crate) fn decode_delegated<T, D>(delegate: &D, path: &[PathSegment]) -> Result<T, DecodeError>
where
    T: Decode,
    D: Delegate + ?Sized,
{
    materialize(delegate, path)?
        .decode::<T>(&[])
        .map_err(|e| e.prefixed(path))
}

/// Shared handle to a [`Delegate`]. Cloning shares the same unit.
#[derive(Clone)]
pub struct DelegateHandle(Arc<dyn Delegate>);

impl DelegateHandle {
    pub fn new(delegate: impl Delegate + 'static) -> Self {
        DelegateHandle(Arc::new(delegate))
    }
}

impl From<Arc<dyn Delegate>> for DelegateHandle {
    fn from(delegate: Arc<dyn Delegate>) -> Self {
        DelegateHandle(delegate)
    }
}

impl Deref for DelegateHandle {
    type Target = dyn Delegate;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for DelegateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DelegateHandle").field(&self.0).finish()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::FixedTree;
    use super::*;

    #[derive(Debug)]
    struct Direct;

    impl Delegate for Direct {
        fn decode_tree(&self, _path: &[PathSegment]) -> Result<ValueTree, DecodeError> {
            Err(DecodeError::custom("no tree"))
        }

        fn decode_bool(&self, _path: &[PathSegment]) -> Result<bool, DecodeError> {
            Ok(true)
        }
    }

    #[test]
    fn test_defaults_go_through_tree() {
        let d = FixedTree(ValueTree::Int64(300));
        assert_eq!(d.decode_i32(&[]).unwrap(), 300);
        assert_eq!(d.decode_f64(&[]).unwrap(), 300.0);
        assert!(d.decode_u8(&[]).is_err());
    }

    #[test]
    fn test_errors_carry_delegate_path() {
        let d = FixedTree(ValueTree::String("x".into()));
        let path = vec![PathSegment::from("col")];
        let err = d.decode_bool(&path).unwrap_err();
        assert_eq!(err.path(), Some(&path[..]));
    }

    #[test]
    fn test_override_skips_tree() {
        assert!(Direct.decode_bool(&[]).unwrap());
        let err = Direct.decode_string(&[]).unwrap_err();
        assert_eq!(err, DecodeError::custom("no tree"));
    }

    #[test]
    fn test_nested_delegate_rejected() {
        let inner = DelegateHandle::new(FixedTree(ValueTree::Bool(true)));
        let d = FixedTree(ValueTree::Delegate(inner));
        assert!(matches!(d.decode_bool(&[]), Err(DecodeError::TypeMismatch { .. })));
    }
}
