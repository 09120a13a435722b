//! Remainder polynomials for `sinh(r)` and `cosh(r)` on `[0, 1)`.
//!
//! Only the deviation from the leading term is approximated:
//!
//! - `sinh(r) - r  ≈ r^3 * P(r^2)`
//! - `cosh(r) - 1  ≈ r^2 * Q(r^2)`
//!
//! so a small `r` keeps its exact linear (or unit) term and the polynomial only
//! contributes a correction several orders of magnitude smaller. Both
//! polynomials are evaluated with Horner's method on fused multiply-adds.

use num::Zero;

use crate::math::CoshFloat;
use crate::simd::traits::SimdFloat;

/// Corrections relative to the linear and unit approximations.
#[derive(Debug, Clone, Copy)]
pub struct Residuals<V> {
    /// `sinh(dy) - dy`.
    pub sinh: V,
    /// `cosh(dy) - 1`.
    pub cosh: V,
}

/// Evaluates `coeffs[0] * x^(n-1) + ... + coeffs[n-1]` with one FMA per term.
#[inline(always)]
pub fn horner<V: SimdFloat>(x: V, coeffs: &[V::Scalar]) -> V {
    coeffs
        .iter()
        .fold(V::splat(Zero::zero()), |acc, &c| acc.mul_add(x, V::splat(c)))
}

/// Computes both remainders for `dy` in `[0, 1)`.
#[inline(always)]
pub fn residuals<V: SimdFloat>(dy: V) -> Residuals<V> {
    let dy2 = dy * dy;

    let p = horner(dy2, <V::Scalar as CoshFloat>::SINH_COEFFS);
    let q = horner(dy2, <V::Scalar as CoshFloat>::COSH_COEFFS);

    Residuals {
        sinh: dy * dy2 * p,
        cosh: dy2 * q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner() {
        assert_eq!(horner(2.0f32, &[1.0, 2.0, 3.0]), 11.0);
        assert_eq!(horner(0.0f32, &[5.0, 7.0]), 7.0);
        assert_eq!(horner(3.0f32, &[]), 0.0);
    }

    #[test]
    fn test_residuals_at_zero() {
        let r = residuals(0.0f32);
        assert_eq!(r.sinh, 0.0);
        assert_eq!(r.cosh, 0.0);
    }

    #[test]
    fn test_residuals_f32_match_reference() {
        for k in 1..100 {
            let dy = k as f32 / 100.0;
            let r = residuals(dy);
            let d = dy as f64;
            let sinh_ref = d.sinh() - d;
            let cosh_ref = d.cosh() - 1.0;
            assert!(
                ((r.sinh as f64 - sinh_ref) / d.sinh()).abs() < 1e-7,
                "sinh residual at {dy}: {} vs {sinh_ref}",
                r.sinh
            );
            assert!(
                ((r.cosh as f64 - cosh_ref) / d.cosh()).abs() < 1e-7,
                "cosh residual at {dy}: {} vs {cosh_ref}",
                r.cosh
            );
        }
    }

    #[test]
    fn test_residuals_keep_small_remainders() {
        // the residual scales like dy^3 / 6 instead of vanishing into rounding
        let dy = 1.0e-3f32;
        let r = residuals(dy);
        assert!((r.sinh / (dy * dy * dy) - 1.0 / 6.0).abs() < 1e-6);
        assert!((r.cosh / (dy * dy) - 0.5).abs() < 1e-6);
    }

    #[cfg(feature = "fp64")]
    #[test]
    fn test_residuals_f64_match_reference() {
        let dy = 0.5f64;
        let r = residuals(dy);
        // sinh(0.5) - 0.5 and cosh(0.5) - 1
        let sinh_ref = 0.021095305493747362;
        let cosh_ref = 0.12762596520638079;
        assert!((r.sinh - sinh_ref).abs() < 1e-14);
        assert!((r.cosh - cosh_ref).abs() < 1e-14);
    }
}
