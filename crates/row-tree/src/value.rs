//! [`ValueTree`]: the tagged-union value every row is decoded from.

use indexmap::IndexMap;

use crate::delegate::DelegateHandle;

/// Ordered map node. Keys are unique and keep insertion order.
pub type Map = IndexMap<String, ValueTree>;

/// A semi-structured value.
///
/// Scalars carry their exact wire width so that decoding can tell an `Int8`
/// from a `UInt64`. `Delegate` hands decoding of the node to an external
/// unit and is never a storage target.
#[derive(Debug, Clone, Default)]
pub enum ValueTree {
    #[default]
    Null,
    Bool(bool),
    String(String),
    Float(f32),
    Double(f64),
    /// Platform-width signed integer.
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    /// Platform-width unsigned integer.
    UInt(usize),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Array(Vec<ValueTree>),
    Map(Map),
    /// Decoding of this node is forwarded to an external unit.
    Delegate(DelegateHandle),
}

/// Variant tag of a [`ValueTree`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    String,
    Float,
    Double,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Array,
    Map,
    Delegate,
}

impl ValueKind {
    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Float => "f32",
            ValueKind::Double => "f64",
            ValueKind::Int => "isize",
            ValueKind::Int8 => "i8",
            ValueKind::Int16 => "i16",
            ValueKind::Int32 => "i32",
            ValueKind::Int64 => "i64",
            ValueKind::UInt => "usize",
            ValueKind::UInt8 => "u8",
            ValueKind::UInt16 => "u16",
            ValueKind::UInt32 => "u32",
            ValueKind::UInt64 => "u64",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
            ValueKind::Delegate => "delegate",
        }
    }
}

/// Exact view of an integer node: its value, bit width and source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerRepr {
    pub value: i128,
    pub bits: u32,
    pub kind: ValueKind,
}

impl IntegerRepr {
    fn new(value: i128, bits: u32, kind: ValueKind) -> Self {
        Self { value, bits, kind }
    }
}

impl ValueTree {
    /// An empty `Map`.
    pub fn map() -> Self {
        ValueTree::Map(Map::new())
    }

    /// An empty `Array`.
    pub fn array() -> Self {
        ValueTree::Array(Vec::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            ValueTree::Null => ValueKind::Null,
            ValueTree::Bool(_) => ValueKind::Bool,
            ValueTree::String(_) => ValueKind::String,
            ValueTree::Float(_) => ValueKind::Float,
            ValueTree::Double(_) => ValueKind::Double,
            ValueTree::Int(_) => ValueKind::Int,
            ValueTree::Int8(_) => ValueKind::Int8,
            ValueTree::Int16(_) => ValueKind::Int16,
            ValueTree::Int32(_) => ValueKind::Int32,
            ValueTree::Int64(_) => ValueKind::Int64,
            ValueTree::UInt(_) => ValueKind::UInt,
            ValueTree::UInt8(_) => ValueKind::UInt8,
            ValueTree::UInt16(_) => ValueKind::UInt16,
            ValueTree::UInt32(_) => ValueKind::UInt32,
            ValueTree::UInt64(_) => ValueKind::UInt64,
            ValueTree::Array(_) => ValueKind::Array,
            ValueTree::Map(_) => ValueKind::Map,
            ValueTree::Delegate(_) => ValueKind::Delegate,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ValueTree::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ValueTree::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ValueTree::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<ValueTree>> {
        match self {
            ValueTree::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<ValueTree>> {
        match self {
            ValueTree::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            ValueTree::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            ValueTree::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_delegate(&self) -> Option<&DelegateHandle> {
        match self {
            ValueTree::Delegate(d) => Some(d),
            _ => None,
        }
    }

    /// Exact integer view of any integer variant.
    pub fn integer(&self) -> Option<IntegerRepr> {
        let repr = match *self {
            ValueTree::Int(v) => IntegerRepr::new(v as i128, isize::BITS, ValueKind::Int),
            ValueTree::Int8(v) => IntegerRepr::new(v.into(), i8::BITS, ValueKind::Int8),
            ValueTree::Int16(v) => IntegerRepr::new(v.into(), i16::BITS, ValueKind::Int16),
            ValueTree::Int32(v) => IntegerRepr::new(v.into(), i32::BITS, ValueKind::Int32),
            ValueTree::Int64(v) => IntegerRepr::new(v.into(), i64::BITS, ValueKind::Int64),
            ValueTree::UInt(v) => IntegerRepr::new(v as i128, usize::BITS, ValueKind::UInt),
            ValueTree::UInt8(v) => IntegerRepr::new(v.into(), u8::BITS, ValueKind::UInt8),
            ValueTree::UInt16(v) => IntegerRepr::new(v.into(), u16::BITS, ValueKind::UInt16),
            ValueTree::UInt32(v) => IntegerRepr::new(v.into(), u32::BITS, ValueKind::UInt32),
            ValueTree::UInt64(v) => IntegerRepr::new(v.into(), u64::BITS, ValueKind::UInt64),
            _ => return None,
        };
        Some(repr)
    }

    /// Any numeric variant widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ValueTree::Float(f) => Some(f64::from(*f)),
            ValueTree::Double(d) => Some(*d),
            other => other.integer().map(|repr| repr.value as f64),
        }
    }
}

impl PartialEq for ValueTree {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ValueTree::Null, ValueTree::Null) => true,
            (ValueTree::Bool(a), ValueTree::Bool(b)) => a == b,
            (ValueTree::String(a), ValueTree::String(b)) => a == b,
            (ValueTree::Float(a), ValueTree::Float(b)) => a == b,
            (ValueTree::Double(a), ValueTree::Double(b)) => a == b,
            (ValueTree::Int(a), ValueTree::Int(b)) => a == b,
            (ValueTree::Int8(a), ValueTree::Int8(b)) => a == b,
            (ValueTree::Int16(a), ValueTree::Int16(b)) => a == b,
            (ValueTree::Int32(a), ValueTree::Int32(b)) => a == b,
            (ValueTree::Int64(a), ValueTree::Int64(b)) => a == b,
            (ValueTree::UInt(a), ValueTree::UInt(b)) => a == b,
            (ValueTree::UInt8(a), ValueTree::UInt8(b)) => a == b,
            (ValueTree::UInt16(a), ValueTree::UInt16(b)) => a == b,
            (ValueTree::UInt32(a), ValueTree::UInt32(b)) => a == b,
            (ValueTree::UInt64(a), ValueTree::UInt64(b)) => a == b,
            (ValueTree::Array(a), ValueTree::Array(b)) => a == b,
            // IndexMap equality ignores order; rows compare by content.
            (ValueTree::Map(a), ValueTree::Map(b)) => a == b,
            // Mixed variants, and any Delegate (decode-only, never equal).
            _ => false,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ValueTree {
                fn from(v: $ty) -> Self {
                    ValueTree::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    String => String,
    f32 => Float,
    f64 => Double,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => UInt,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    Map => Map,
    DelegateHandle => Delegate,
}

impl From<&str> for ValueTree {
    fn from(v: &str) -> Self {
        ValueTree::String(v.to_string())
    }
}

impl<T: Into<ValueTree>> From<Vec<T>> for ValueTree {
    fn from(items: Vec<T>) -> Self {
        ValueTree::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ValueTree>> From<Option<T>> for ValueTree {
    fn from(v: Option<T>) -> Self {
        v.map_or(ValueTree::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<ValueTree>> FromIterator<(K, V)> for ValueTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v.into()));
        ValueTree::Map(entries.collect())
    }
}
