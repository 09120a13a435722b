use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use crate::math::tables::SEED_COUNT;
use crate::math::CoshFloat;

/// Lane-generic numeric surface the kernels are written against.
///
/// A value is either one scalar (one lane) or a fixed-width group of lanes.
/// Every operation acts on each lane independently; comparisons produce a
/// mask and [`SimdFloat::select`] merges two candidates by that mask, so no
/// lane ever takes a different control-flow path than its neighbours.
pub trait SimdFloat:
    Copy + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Element precision of every lane.
    type Scalar: CoshFloat;
    /// One boolean per lane.
    type Mask: Copy + Debug;
    /// One seed-table index per lane.
    type Index: Copy + Debug;

    fn splat(value: Self::Scalar) -> Self;

    fn abs(self) -> Self;

    /// `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;

    fn exp(self) -> Self;

    fn ge(self, rhs: Self) -> Self::Mask;

    fn lt(self, rhs: Self) -> Self::Mask;

    /// NaN classification on the bit pattern.
    fn is_nan(self) -> Self::Mask;

    fn is_sign_negative(self) -> Self::Mask;

    /// Sets the quiet bit of every lane.
    fn quieted(self) -> Self;

    /// Lane-wise `if mask { on_true } else { on_false }` without branching.
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    /// Lane-wise `min(trunc(self), 36)`.
    fn seed_index(self) -> Self::Index;

    fn index_value(index: Self::Index) -> Self;

    /// Lane-wise table lookup.
    fn gather(table: &[Self::Scalar; SEED_COUNT], index: Self::Index) -> Self;
}

pub trait SimdCosh {
    type Output;

    fn simd_cosh(self) -> Self::Output;
    fn par_simd_cosh(self) -> Self::Output;
    fn scalar_cosh(self) -> Self::Output;
}
