//! Type promotion rules for binary operations

use super::{DType, Element};

/// Promote two dtypes to a common dtype for binary operations
///
/// Follows NumPy-like promotion rules:
/// - Floats always win over integers
/// - Larger types win over smaller types
/// - Signed wins over unsigned when mixing, widening to fit
pub fn promote(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }

    // Promotion priority (higher = wins)
    let priority = |dt: DType| -> u8 {
        match dt {
            F64 => 100,
            F32 => 90,
            I64 => 65,
            U64 => 60,
            I32 => 55,
            U32 => 50,
            I16 => 45,
            U16 => 40,
            I8 => 35,
            U8 => 30,
        }
    };

    // Special case: mixing signed and unsigned integers
    // Promote to signed type of same or larger size
    if lhs.is_signed_int() && rhs.is_unsigned_int() {
        return match (lhs, rhs) {
            (I64, _) => I64,
            (I32, U64 | U32) => I64,
            (I32, _) => I32,
            (I16, U64 | U32 | U16) => I32,
            (I16, _) => I16,
            (I8, _) => I16,
            _ => I64,
        };
    }
    if rhs.is_signed_int() && lhs.is_unsigned_int() {
        return promote(rhs, lhs);
    }

    // General case: higher priority wins
    if priority(lhs) >= priority(rhs) {
        lhs
    } else {
        rhs
    }
}

/// Compile-time mirror of [`promote`]
///
/// `<T as Promote<R>>::Output` is the common promoted type of `T` and `R`,
/// and the two conversion functions lift operands into it with exact `as`
/// casts. Mixed-type matrix arithmetic resolves its result element type
/// through this trait, so the runtime [`promote`] table and this one must
/// agree pair-for-pair (the unit tests below check all 100 pairs).
pub trait Promote<R: Element>: Element {
    /// The common promoted type of `Self` and `R`
    type Output: Element;

    /// Lift a left operand into the promoted type
    fn promote_lhs(lhs: Self) -> <Self as Promote<R>>::Output;

    /// Lift a right operand into the promoted type
    fn promote_rhs(rhs: R) -> <Self as Promote<R>>::Output;
}

macro_rules! impl_promote {
    ($lhs:ty => $($rhs:ty : $out:ty),+ $(,)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote_lhs(lhs: Self) -> $out {
                    lhs as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )+
    };
}

impl_promote!(f64 => f64: f64, f32: f64, i64: f64, i32: f64, i16: f64, i8: f64, u64: f64, u32: f64, u16: f64, u8: f64);
impl_promote!(f32 => f64: f64, f32: f32, i64: f32, i32: f32, i16: f32, i8: f32, u64: f32, u32: f32, u16: f32, u8: f32);
impl_promote!(i64 => f64: f64, f32: f32, i64: i64, i32: i64, i16: i64, i8: i64, u64: i64, u32: i64, u16: i64, u8: i64);
impl_promote!(i32 => f64: f64, f32: f32, i64: i64, i32: i32, i16: i32, i8: i32, u64: i64, u32: i64, u16: i32, u8: i32);
impl_promote!(i16 => f64: f64, f32: f32, i64: i64, i32: i32, i16: i16, i8: i16, u64: i32, u32: i32, u16: i32, u8: i16);
impl_promote!(i8 => f64: f64, f32: f32, i64: i64, i32: i32, i16: i16, i8: i8, u64: i16, u32: i16, u16: i16, u8: i16);
impl_promote!(u64 => f64: f64, f32: f32, i64: i64, i32: i64, i16: i32, i8: i16, u64: u64, u32: u64, u16: u64, u8: u64);
impl_promote!(u32 => f64: f64, f32: f32, i64: i64, i32: i64, i16: i32, i8: i16, u64: u64, u32: u32, u16: u32, u8: u32);
impl_promote!(u16 => f64: f64, f32: f32, i64: i64, i32: i32, i16: i32, i8: i16, u64: u64, u32: u32, u16: u16, u8: u16);
impl_promote!(u8 => f64: f64, f32: f32, i64: i64, i32: i32, i16: i16, i8: i16, u64: u64, u32: u32, u16: u16, u8: u8);

#[cfg(test)]
mod tests {
    use super::*;
    use DType::*;

    #[test]
    fn test_same_type_promotion() {
        assert_eq!(promote(F32, F32), F32);
        assert_eq!(promote(I64, I64), I64);
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(promote(F32, F64), F64);
        assert_eq!(promote(F64, F32), F64);
    }

    #[test]
    fn test_int_float_promotion() {
        // Float always wins
        assert_eq!(promote(I64, F32), F32);
        assert_eq!(promote(I32, F64), F64);
        assert_eq!(promote(U8, F32), F32);
    }

    #[test]
    fn test_signed_unsigned_promotion() {
        assert_eq!(promote(I32, U32), I64);
        assert_eq!(promote(I16, U16), I32);
        assert_eq!(promote(I8, U8), I16);
        assert_eq!(promote(U64, I64), I64);
    }

    #[test]
    fn test_promote_conversions() {
        assert_eq!(<i8 as Promote<u8>>::promote_lhs(-3), -3i16);
        assert_eq!(<i8 as Promote<u8>>::promote_rhs(200), 200i16);
        assert_eq!(<f32 as Promote<i32>>::promote_rhs(7), 7.0f32);
    }

    /// The type-level table must agree with the runtime table for every
    /// ordered pair of element types.
    #[test]
    fn test_type_level_matches_runtime() {
        macro_rules! assert_pairs {
            ($lhs:ty: $($rhs:ty),+) => {
                $(
                    assert_eq!(
                        <<$lhs as Promote<$rhs>>::Output as Element>::DTYPE,
                        promote(<$lhs as Element>::DTYPE, <$rhs as Element>::DTYPE),
                        "promotion mismatch for ({}, {})",
                        <$lhs as Element>::DTYPE,
                        <$rhs as Element>::DTYPE,
                    );
                )+
            };
        }

        assert_pairs!(f64: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(f32: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(i64: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(i32: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(i16: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(i8: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(u64: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(u32: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(u16: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
        assert_pairs!(u8: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
    }
}
