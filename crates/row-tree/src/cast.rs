//! Numeric decode targets and the checked integer cast.

use crate::delegate::Delegate;
use crate::types::PathSegment;
use crate::value::IntegerRepr;
use crate::DecodeError;

/// A fixed-width integer type that integer nodes can be decoded into.
pub trait FixedWidthInteger: Copy + Sized + 'static {
    /// Type name used in errors.
    const NAME: &'static str;
    const BITS: u32;
    const MIN: i128;
    const MAX: i128;

    /// Converts without loss, `None` if `value` is out of range.
    fn from_exact(value: i128) -> Option<Self>;

    /// Forwards to the delegate's typed decode for `Self`.
    fn decode_delegate<D: Delegate + ?Sized>(
        delegate: &D,
        path: &[PathSegment],
    ) -> Result<Self, DecodeError>;
}

/// A floating point type that numeric nodes can be decoded into.
pub trait FloatingPoint: Copy + Sized + 'static {
    /// Type name used in errors.
    const NAME: &'static str;

    fn from_f32(value: f32) -> Self;
    fn from_f64(value: f64) -> Self;
    /// Widens an integer. Precision loss past the mantissa is accepted.
    fn from_integer(value: i128) -> Self;

    /// Forwards to the delegate's typed decode for `Self`.
    fn decode_delegate<D: Delegate + ?Sized>(
        delegate: &D,
        path: &[PathSegment],
    ) -> Result<Self, DecodeError>;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl FixedWidthInteger for $ty {
                const NAME: &'static str = stringify!($ty);
                const BITS: u32 = <$ty>::BITS;
                const MIN: i128 = <$ty>::MIN as i128;
                const MAX: i128 = <$ty>::MAX as i128;

                fn from_exact(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }

                fn decode_delegate<D: Delegate + ?Sized>(
                    delegate: &D,
                    path: &[PathSegment],
                ) -> Result<Self, DecodeError> {
                    delegate.$method(path)
                }
            }
        )*
    };
}

impl_fixed_width! {
    isize => decode_isize,
    i8 => decode_i8,
    i16 => decode_i16,
    i32 => decode_i32,
    i64 => decode_i64,
    usize => decode_usize,
    u8 => decode_u8,
    u16 => decode_u16,
    u32 => decode_u32,
    u64 => decode_u64,
}

impl FloatingPoint for f32 {
    const NAME: &'static str = "f32";

    fn from_f32(value: f32) -> Self {
        value
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn from_integer(value: i128) -> Self {
        value as f32
    }

    fn decode_delegate<D: Delegate + ?Sized>(
        delegate: &D,
        path: &[PathSegment],
    ) -> Result<Self, DecodeError> {
        delegate.decode_f32(path)
    }
}

impl FloatingPoint for f64 {
    const NAME: &'static str = "f64";

    fn from_f32(value: f32) -> Self {
        f64::from(value)
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn from_integer(value: i128) -> Self {
        value as f64
    }

    fn decode_delegate<D: Delegate + ?Sized>(
        delegate: &D,
        path: &[PathSegment],
    ) -> Result<Self, DecodeError> {
        delegate.decode_f64(path)
    }
}

/// Checked conversion of an integer node into `I`.
///
/// A value that fits `I` exactly is returned as is. Anything else is
/// rejected as too large or too small for `I`, never truncated. A source
/// wider than `I` is not rejected on width alone; both bit widths are named
/// in the too-large or too-small detail instead.
///
/// # Example
///
/// ```
/// use row_tree::{safe_cast, ValueTree};
///
/// let repr = ValueTree::Int32(5).integer().unwrap();
/// assert_eq!(safe_cast::<i64>(repr, &[]).unwrap(), 5);
///
/// let repr = ValueTree::Int64(300).integer().unwrap();
/// assert!(safe_cast::<u8>(repr, &[]).is_err());
/// ```
pub fn safe_cast<I: FixedWidthInteger>(
    source: IntegerRepr,
    path: &[PathSegment],
) -> Result<I, DecodeError> {
    // Same-type and in-range values short-circuit before any range reasoning.
    if let Some(v) = I::from_exact(source.value) {
        return Ok(v);
    }

    let detail = if source.value > I::MAX {
        format!(
            "Value too large: {} ({}-bit {}) exceeds {}::MAX {} ({}-bit)",
            source.value,
            source.bits,
            source.kind.name(),
            I::NAME,
            I::MAX,
            I::BITS,
        )
    } else {
        format!(
            "Value too small: {} ({}-bit {}) is below {}::MIN {} ({}-bit)",
            source.value,
            source.bits,
            source.kind.name(),
            I::NAME,
            I::MIN,
            I::BITS,
        )
    };
    Err(DecodeError::mismatch(I::NAME, path, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueTree;

    fn cast<I: FixedWidthInteger>(v: ValueTree) -> Result<I, DecodeError> {
        safe_cast(v.integer().unwrap(), &[])
    }

    fn detail<I: FixedWidthInteger + std::fmt::Debug>(v: ValueTree) -> String {
        let err = cast::<I>(v).unwrap_err();
        err.detail().unwrap().to_string()
    }

    #[test]
    fn test_same_type_roundtrip() {
        assert_eq!(cast::<i64>(ValueTree::Int64(i64::MIN)).unwrap(), i64::MIN);
        assert_eq!(cast::<u64>(ValueTree::UInt64(u64::MAX)).unwrap(), u64::MAX);
    }

    #[test]
    fn test_widening() {
        assert_eq!(cast::<i64>(ValueTree::Int32(5)).unwrap(), 5);
        assert_eq!(cast::<u32>(ValueTree::UInt8(200)).unwrap(), 200);
        assert_eq!(cast::<i16>(ValueTree::UInt8(255)).unwrap(), 255);
    }

    #[test]
    fn test_narrowing_in_range() {
        assert_eq!(cast::<i16>(ValueTree::Int(30)).unwrap(), 30);
        assert_eq!(cast::<u8>(ValueTree::Int64(255)).unwrap(), 255);
    }

    #[test]
    fn test_too_large() {
        let d = detail::<u8>(ValueTree::Int64(300));
        assert!(d.starts_with("Value too large"));

        let d = detail::<i64>(ValueTree::UInt64(u64::MAX));
        assert!(d.starts_with("Value too large"));
    }

    #[test]
    fn test_too_small() {
        let err = cast::<u8>(ValueTree::Int8(-1)).unwrap_err();
        assert!(err.detail().unwrap().starts_with("Value too small"));
        let msg = err.to_string();
        assert!(msg.starts_with("type mismatch: expected u8 at ''"));

        let d = detail::<i8>(ValueTree::Int32(-129));
        assert!(d.starts_with("Value too small"));
    }

    #[test]
    fn test_detail_names_both_widths() {
        let d = detail::<i16>(ValueTree::Int64(70000));
        assert!(d.contains("64-bit i64"));
        assert!(d.contains("i16::MAX 32767 (16-bit)"));
    }

    #[test]
    fn test_float_widening() {
        assert_eq!(f64::from_integer(2), 2.0);
        assert_eq!(f32::from_f64(2.75), 2.75_f32);
    }
}
