//! Per-precision capabilities of the cosh pipeline.
//!
//! [`CoshFloat`] gathers everything that differs between precisions: the seed
//! table, both coefficient sets, the region thresholds and the bit-level
//! helpers used for branchless selection. The pipeline itself is written once
//! against this trait (through [`SimdFloat`](crate::simd::SimdFloat)) and
//! instantiated for each precision.
//!
//! Epsilon and the largest finite magnitude come from [`num::Float`]
//! (`epsilon()`, `max_value()`).

use std::fmt::Debug;

use num::Float;

use super::tables::{self, SeedTable, SEED_MAX};

/// A floating-point format the cosh kernels are specialised for.
///
/// Implemented for `f32` and, with the `fp64` feature, for `f64`. Each
/// implementation keeps its constants independently tunable.
pub trait CoshFloat: Float + Debug + Send + Sync + 'static {
    /// Magnitude from which `exp(-y)` is negligible next to `exp(y)`.
    const SMALL_THRESHOLD: Self;
    /// Magnitude from which the result saturates to `+inf`.
    const MAX_ARG: Self;
    /// Magnitude below which the result is exactly `1`.
    const UNDERFLOW_THRESHOLD: Self;
    /// `ln(2)` truncated so that subtracting it from any large-path input is exact.
    const LN2_TRUNCATED: Self;
    /// Relative correction for the truncation of [`Self::LN2_TRUNCATED`].
    const HALF_EXP_CORRECTION: Self;
    /// `(sinh(r) - r) / r^3` coefficients, highest degree first.
    const SINH_COEFFS: &'static [Self];
    /// `(cosh(r) - 1) / r^2` coefficients, highest degree first.
    const COSH_COEFFS: &'static [Self];

    /// The `sinh(i)` / `cosh(i)` seeds of this precision.
    fn seeds() -> &'static SeedTable<Self>;

    /// NaN test on the exponent and mantissa bits.
    fn is_nan_pattern(self) -> bool;

    /// Same value with the quiet bit forced on (signalling NaN becomes quiet).
    fn with_quiet_bit(self) -> Self;

    /// Picks `on_true` or `on_false` by masking bit patterns, without a branch.
    fn blend(mask: bool, on_true: Self, on_false: Self) -> Self;

    /// `min(trunc(self), 36)` for a non-negative magnitude. NaN maps to 0.
    fn table_index(self) -> usize;

    /// Converts a seed index back to this precision (exact).
    fn from_table_index(index: usize) -> Self;
}

impl CoshFloat for f32 {
    const SMALL_THRESHOLD: Self = tables::F32_SMALL_THRESHOLD;
    const MAX_ARG: Self = tables::F32_MAX_ARG;
    const UNDERFLOW_THRESHOLD: Self = tables::F32_UNDERFLOW_THRESHOLD;
    const LN2_TRUNCATED: Self = tables::F32_LN2_TRUNCATED;
    const HALF_EXP_CORRECTION: Self = tables::F32_HALF_EXP_CORRECTION;
    const SINH_COEFFS: &'static [Self] = &tables::F32_SINH_COEFFS;
    const COSH_COEFFS: &'static [Self] = &tables::F32_COSH_COEFFS;

    #[inline(always)]
    fn seeds() -> &'static SeedTable<Self> {
        &tables::F32_SEEDS
    }

    #[inline(always)]
    fn is_nan_pattern(self) -> bool {
        (self.to_bits() & 0x7fff_ffff) > 0x7f80_0000
    }

    #[inline(always)]
    fn with_quiet_bit(self) -> Self {
        f32::from_bits(self.to_bits() | 0x0040_0000)
    }

    #[inline(always)]
    fn blend(mask: bool, on_true: Self, on_false: Self) -> Self {
        let m = (mask as u32).wrapping_neg();
        f32::from_bits((on_true.to_bits() & m) | (on_false.to_bits() & !m))
    }

    #[inline(always)]
    fn table_index(self) -> usize {
        // `as` saturates: NaN -> 0, +inf -> u32::MAX
        (self as u32).min(SEED_MAX as u32) as usize
    }

    #[inline(always)]
    fn from_table_index(index: usize) -> Self {
        index as f32
    }
}

#[cfg(feature = "fp64")]
impl CoshFloat for f64 {
    const SMALL_THRESHOLD: Self = tables::F64_SMALL_THRESHOLD;
    const MAX_ARG: Self = tables::F64_MAX_ARG;
    const UNDERFLOW_THRESHOLD: Self = tables::F64_UNDERFLOW_THRESHOLD;
    const LN2_TRUNCATED: Self = tables::F64_LN2_TRUNCATED;
    const HALF_EXP_CORRECTION: Self = tables::F64_HALF_EXP_CORRECTION;
    const SINH_COEFFS: &'static [Self] = &tables::F64_SINH_COEFFS;
    const COSH_COEFFS: &'static [Self] = &tables::F64_COSH_COEFFS;

    #[inline(always)]
    fn seeds() -> &'static SeedTable<Self> {
        &tables::F64_SEEDS
    }

    #[inline(always)]
    fn is_nan_pattern(self) -> bool {
        (self.to_bits() & 0x7fff_ffff_ffff_ffff) > 0x7ff0_0000_0000_0000
    }

    #[inline(always)]
    fn with_quiet_bit(self) -> Self {
        f64::from_bits(self.to_bits() | 0x0008_0000_0000_0000)
    }

    #[inline(always)]
    fn blend(mask: bool, on_true: Self, on_false: Self) -> Self {
        let m = (mask as u64).wrapping_neg();
        f64::from_bits((on_true.to_bits() & m) | (on_false.to_bits() & !m))
    }

    #[inline(always)]
    fn table_index(self) -> usize {
        (self as u64).min(SEED_MAX as u64) as usize
    }

    #[inline(always)]
    fn from_table_index(index: usize) -> Self {
        index as f64
    }
}
