//! One-lane [`SimdFloat`] implementations.
//!
//! A bare `f32` or `f64` is a vector of width one: masks are `bool`, indices
//! are `usize`, and `select` is the bit blend of [`CoshFloat::blend`]. The
//! scalar entry points run the exact same pipeline as the lane vectors.

use crate::math::tables::SEED_COUNT;
use crate::math::CoshFloat;
use crate::simd::traits::SimdFloat;

macro_rules! impl_scalar_simd_float {
    ($t:ty) => {
        impl SimdFloat for $t {
            type Scalar = $t;
            type Mask = bool;
            type Index = usize;

            #[inline(always)]
            fn splat(value: $t) -> Self {
                value
            }

            #[inline(always)]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline(always)]
            fn mul_add(self, a: Self, b: Self) -> Self {
                <$t>::mul_add(self, a, b)
            }

            #[inline(always)]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            #[inline(always)]
            fn ge(self, rhs: Self) -> bool {
                self >= rhs
            }

            #[inline(always)]
            fn lt(self, rhs: Self) -> bool {
                self < rhs
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t as CoshFloat>::is_nan_pattern(self)
            }

            #[inline(always)]
            fn is_sign_negative(self) -> bool {
                <$t>::is_sign_negative(self)
            }

            #[inline(always)]
            fn quieted(self) -> Self {
                <$t as CoshFloat>::with_quiet_bit(self)
            }

            #[inline(always)]
            fn select(mask: bool, on_true: Self, on_false: Self) -> Self {
                <$t as CoshFloat>::blend(mask, on_true, on_false)
            }

            #[inline(always)]
            fn seed_index(self) -> usize {
                <$t as CoshFloat>::table_index(self)
            }

            #[inline(always)]
            fn index_value(index: usize) -> Self {
                <$t as CoshFloat>::from_table_index(index)
            }

            #[inline(always)]
            fn gather(table: &[$t; SEED_COUNT], index: usize) -> Self {
                table[index]
            }
        }
    };
}

impl_scalar_simd_float!(f32);

#[cfg(feature = "fp64")]
impl_scalar_simd_float!(f64);
