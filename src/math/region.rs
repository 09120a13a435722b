//! Region selection and special-case normalisation.
//!
//! Every region is evaluated for every lane and the final value is chosen by
//! masked selects applied in a fixed order, each one overriding the previous
//! result only where its condition holds:
//!
//! | order | condition                   | result                    |
//! |-------|-----------------------------|---------------------------|
//! | 1     | (default)                   | table-seeded combination  |
//! | 2     | `y >= small_threshold`      | `exp(y) / 2`              |
//! | 3     | `y >= max_arg`              | `+inf`                    |
//! | 4     | NaN bit pattern             | input NaN, quieted        |
//! | 5     | `y < underflow_threshold`   | `1`                       |
//!
//! Infinite inputs fall into row 3. NaN compares false against every
//! threshold, so only row 4 can claim it.

use num::{Float, One};

use crate::math::combine::combine;
use crate::math::large::half_exp;
use crate::math::poly::residuals;
use crate::math::reduce::{reduce, ReducedArgument};
use crate::math::CoshFloat;
use crate::simd::traits::SimdFloat;

/// The default region: seeds of the integer part plus remainder polynomials.
#[inline(always)]
pub fn table_path<V: SimdFloat>(reduced: &ReducedArgument<V>) -> V {
    combine(reduced.index, reduced.dy, residuals(reduced.dy))
}

/// Hyperbolic cosine of every lane of `x`.
///
/// Total over all bit patterns, never branches on lane data.
#[inline(always)]
pub fn cosh_kernel<V: SimdFloat>(x: V) -> V {
    let reduced = reduce(x);
    let y = reduced.y;

    let small_threshold = V::splat(<V::Scalar as CoshFloat>::SMALL_THRESHOLD);
    let max_arg = V::splat(<V::Scalar as CoshFloat>::MAX_ARG);
    let underflow_threshold = V::splat(<V::Scalar as CoshFloat>::UNDERFLOW_THRESHOLD);

    let mut z = table_path(&reduced);
    z = V::select(y.ge(small_threshold), half_exp(y), z);
    z = V::select(y.ge(max_arg), V::splat(Float::infinity()), z);
    z = V::select(x.is_nan(), x.quieted(), z);
    z = V::select(y.lt(underflow_threshold), V::splat(One::one()), z);

    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::Lanes;

    fn ulp_distance(a: f32, b: f32) -> u32 {
        a.to_bits().abs_diff(b.to_bits())
    }

    #[test]
    fn test_regions_in_order() {
        assert_eq!(cosh_kernel(0.0f32), 1.0);
        assert_eq!(cosh_kernel(1.0e-20f32), 1.0);
        assert_eq!(cosh_kernel(1.0f32), 1.5430807);
        assert!(cosh_kernel(f32::MAX_ARG).is_infinite());
        assert!(cosh_kernel(f32::INFINITY).is_infinite());
        assert!(cosh_kernel(f32::NEG_INFINITY) > 0.0);
        assert!(cosh_kernel(f32::NAN).is_nan());
    }

    #[test]
    fn test_underflow_boundary() {
        let below = f32::from_bits(f32::UNDERFLOW_THRESHOLD.to_bits() - 1);
        assert_eq!(cosh_kernel(below), 1.0);
        assert_eq!(cosh_kernel(f32::UNDERFLOW_THRESHOLD), 1.0);
        assert!(cosh_kernel(0.01f32) > 1.0);
    }

    #[test]
    fn test_subnormal_inputs() {
        assert_eq!(cosh_kernel(f32::from_bits(1)), 1.0);
        assert_eq!(cosh_kernel(-f32::MIN_POSITIVE / 2.0), 1.0);
    }

    #[test]
    fn test_signalling_nan_is_quieted() {
        let signalling = f32::from_bits(0x7f80_0005);
        let z = cosh_kernel(signalling);
        assert_eq!(z.to_bits(), 0x7fc0_0005);

        let negative = f32::from_bits(0xffc0_0000);
        assert!(cosh_kernel(negative).is_nan());
    }

    #[test]
    fn test_paths_agree_at_small_threshold() {
        let y = f32::SMALL_THRESHOLD;
        let table = table_path(&reduce(y));
        let large = half_exp(y);
        assert!(ulp_distance(table, large) <= 2, "{table} vs {large}");

        let below = f32::from_bits(y.to_bits() - 1);
        let expected = (below as f64).cosh() as f32;
        assert!(ulp_distance(cosh_kernel(below), expected) <= 2);
        assert!(cosh_kernel(below) < cosh_kernel(y));
    }

    #[test]
    fn test_lanes_match_scalar_kernel() {
        let x = Lanes([
            -0.0f32,
            0.75,
            -8.317766,
            42.0,
            89.41599,
            f32::NAN,
            -f32::INFINITY,
            3.0e-6,
        ]);
        let lanes = cosh_kernel(x);
        for j in 0..8 {
            assert_eq!(lanes.0[j].to_bits(), cosh_kernel(x.0[j]).to_bits(), "lane {j}");
        }
    }

    #[cfg(feature = "fp64")]
    #[test]
    fn test_regions_f64() {
        assert_eq!(cosh_kernel(0.0f64), 1.0);
        assert_eq!(cosh_kernel(1.0e-20f64), 1.0);
        assert_eq!(cosh_kernel(1.0f64), 1.5430806348152437);
        assert!(cosh_kernel(f64::MAX_ARG).is_infinite());
        assert!(cosh_kernel(710.4758600739439f64).is_finite());
        assert!(cosh_kernel(f64::NAN).is_nan());

        let y = f64::SMALL_THRESHOLD;
        let table = table_path(&reduce(y));
        let large = half_exp(y);
        assert!(table.to_bits().abs_diff(large.to_bits()) <= 2);
    }
}
