//! Fixed-width lane vector.
//!
//! This module provides `Lanes<T, W>`, a vector of `W` elements that
//! implements [`SimdFloat`] by applying the one-lane operation of `T` to every
//! lane. The fixed-width loops carry no cross-lane dependency, which lets the
//! compiler map them onto the vector registers of the target.
//!
//! # Supported Operations
//!
//! ## Loading and Storing
//! - `TryFrom<&[T]>` - packs up to `W` elements, fails above `W`
//! - `load()` - full block from a slice of at least `W` elements
//! - `load_partial()` - fewer than `W` elements, remaining lanes zeroed
//! - `store()`, `store_partial()` - write lanes back to a slice
//!
//! ## Arithmetic
//! - Element-wise addition (`+`), subtraction (`-`), multiplication (`*`)
//! - Everything in [`SimdFloat`]: fused multiply-add, comparisons, select,
//!   gather, exponential

use std::array;
use std::ops::{Add, Mul, Sub};

use crate::error::{lane_count_error, KernmathError};
use crate::math::tables::SEED_COUNT;
use crate::math::CoshFloat;
use crate::simd::traits::SimdFloat;

/// A vector of `W` lanes of `T`.
///
/// ```rust
/// use kernmath::simd::{Lanes, SimdFloat};
///
/// let x = Lanes([0.0f32, 1.0, -1.0, 2.5]);
/// let y = x.abs();
/// assert_eq!(y.0, [0.0, 1.0, 1.0, 2.5]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lanes<T, const W: usize>(pub [T; W]);

impl<T: Copy + Default, const W: usize> Lanes<T, W> {
    /// Loads the first `W` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` holds fewer than `W` elements.
    #[inline(always)]
    pub fn load(slice: &[T]) -> Self {
        assert!(
            slice.len() >= W,
            "Size must be at least {W} to fill every lane (got {})",
            slice.len()
        );
        Lanes(array::from_fn(|j| slice[j]))
    }

    /// Loads up to `W` elements; lanes past the end of `slice` are `T::default()`.
    #[inline(always)]
    pub fn load_partial(slice: &[T]) -> Self {
        let mut lanes = [T::default(); W];
        let size = slice.len().min(W);
        lanes[..size].copy_from_slice(&slice[..size]);
        Lanes(lanes)
    }

    /// Stores all `W` lanes at the start of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` holds fewer than `W` elements.
    #[inline(always)]
    pub fn store(&self, out: &mut [T]) {
        out[..W].copy_from_slice(&self.0);
    }

    /// Stores the first `min(out.len(), W)` lanes.
    #[inline(always)]
    pub fn store_partial(&self, out: &mut [T]) {
        let size = out.len().min(W);
        out[..size].copy_from_slice(&self.0[..size]);
    }

    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Lanes(array::from_fn(|j| f(self.0[j])))
    }

    #[inline(always)]
    fn zip_map(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Lanes(array::from_fn(|j| f(self.0[j], rhs.0[j])))
    }
}

impl<T: Copy + Default, const W: usize> TryFrom<&[T]> for Lanes<T, W> {
    type Error = KernmathError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        if slice.len() > W {
            return Err(lane_count_error(W, slice.len()));
        }
        Ok(Self::load_partial(slice))
    }
}

impl<T: Copy + Default + Add<Output = T>, const W: usize> Add for Lanes<T, W> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Copy + Default + Sub<Output = T>, const W: usize> Sub for Lanes<T, W> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Copy + Default + Mul<Output = T>, const W: usize> Mul for Lanes<T, W> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a * b)
    }
}

impl<T, const W: usize> SimdFloat for Lanes<T, W>
where
    T: CoshFloat + SimdFloat<Scalar = T, Mask = bool, Index = usize> + Default,
{
    type Scalar = T;
    type Mask = [bool; W];
    type Index = [usize; W];

    #[inline(always)]
    fn splat(value: T) -> Self {
        Lanes([value; W])
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(<T as SimdFloat>::abs)
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Lanes(array::from_fn(|j| {
            <T as SimdFloat>::mul_add(self.0[j], a.0[j], b.0[j])
        }))
    }

    #[inline(always)]
    fn exp(self) -> Self {
        self.map(<T as SimdFloat>::exp)
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> [bool; W] {
        array::from_fn(|j| <T as SimdFloat>::ge(self.0[j], rhs.0[j]))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> [bool; W] {
        array::from_fn(|j| <T as SimdFloat>::lt(self.0[j], rhs.0[j]))
    }

    #[inline(always)]
    fn is_nan(self) -> [bool; W] {
        array::from_fn(|j| <T as SimdFloat>::is_nan(self.0[j]))
    }

    #[inline(always)]
    fn is_sign_negative(self) -> [bool; W] {
        array::from_fn(|j| <T as SimdFloat>::is_sign_negative(self.0[j]))
    }

    #[inline(always)]
    fn quieted(self) -> Self {
        self.map(<T as SimdFloat>::quieted)
    }

    #[inline(always)]
    fn select(mask: [bool; W], on_true: Self, on_false: Self) -> Self {
        Lanes(array::from_fn(|j| {
            <T as SimdFloat>::select(mask[j], on_true.0[j], on_false.0[j])
        }))
    }

    #[inline(always)]
    fn seed_index(self) -> [usize; W] {
        array::from_fn(|j| <T as SimdFloat>::seed_index(self.0[j]))
    }

    #[inline(always)]
    fn index_value(index: [usize; W]) -> Self {
        Lanes(array::from_fn(|j| <T as SimdFloat>::index_value(index[j])))
    }

    #[inline(always)]
    fn gather(table: &[T; SEED_COUNT], index: [usize; W]) -> Self {
        Lanes(array::from_fn(|j| <T as SimdFloat>::gather(table, index[j])))
    }
}
