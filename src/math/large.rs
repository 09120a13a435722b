use crate::math::CoshFloat;
use crate::simd::traits::SimdFloat;

/// `exp(y) / 2` for magnitudes where `exp(-y)` no longer matters.
///
/// Halving happens in the exponent domain as `exp(y - ln2)`. The truncated
/// `ln2` makes the subtraction exact and the result is scaled back by the
/// precomputed `exp(ln2_truncated - ln2)`.
#[inline(always)]
pub fn half_exp<V: SimdFloat>(y: V) -> V {
    let t = (y - V::splat(<V::Scalar as CoshFloat>::LN2_TRUNCATED)).exp();
    t.mul_add(V::splat(<V::Scalar as CoshFloat>::HALF_EXP_CORRECTION), t)
}
