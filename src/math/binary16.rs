//! Half-precision cosh.
//!
//! `f16` inputs are widened to `f32`, run through the single-precision
//! pipeline and rounded back to nearest-even. The narrowing alone already
//! saturates where the `f16` result overflows, but the region selection is
//! still applied on the `f16` input bits so the half-precision thresholds stay
//! explicit.

use std::array;

use half::f16;

use crate::math::{cosh_kernel, CoshKernel};
use crate::simd::{Lanes, F32xN, F32_LANES};

/// Magnitude from which the result saturates to `+inf` (`11.7890625`).
pub const MAX_ARG: f16 = f16::from_bits(0x49e5);

/// Magnitude below which the result is exactly `1` (`2^-6`).
pub const UNDERFLOW_THRESHOLD: f16 = f16::from_bits(0x2400);

const MAGNITUDE_MASK: u16 = 0x7fff;
const EXPONENT_MASK: u16 = 0x7c00;
const QUIET_BIT: u16 = 0x0200;

#[inline(always)]
fn blend(mask: bool, on_true: u16, on_false: u16) -> u16 {
    let m = (mask as u16).wrapping_neg();
    (on_true & m) | (on_false & !m)
}

/// Rounds the widened result and applies the half-precision regions.
///
/// Magnitudes are compared as bit patterns, which orders them like the
/// values they encode.
#[inline(always)]
fn narrow(x: f16, widened: f32) -> f16 {
    let bits = x.to_bits();
    let y = bits & MAGNITUDE_MASK;

    let mut z = f16::from_f32(widened).to_bits();
    z = blend(y >= MAX_ARG.to_bits(), f16::INFINITY.to_bits(), z);
    z = blend(y > EXPONENT_MASK, bits | QUIET_BIT, z);
    z = blend(y < UNDERFLOW_THRESHOLD.to_bits(), f16::ONE.to_bits(), z);

    f16::from_bits(z)
}

/// Hyperbolic cosine of one `f16`.
///
/// ```rust
/// use half::f16;
/// use kernmath::math::binary16::cosh;
///
/// assert_eq!(cosh(f16::ZERO), f16::ONE);
/// assert_eq!(cosh(f16::from_f32(12.0)), f16::INFINITY);
/// ```
#[inline]
pub fn cosh(x: f16) -> f16 {
    narrow(x, cosh_kernel(x.to_f32()))
}

/// Hyperbolic cosine of `W` half-precision lanes.
#[inline]
pub fn cosh_lanes<const W: usize>(x: [f16; W]) -> [f16; W] {
    let widened: Lanes<f32, W> = cosh_kernel(Lanes(array::from_fn(|j| x[j].to_f32())));
    array::from_fn(|j| narrow(x[j], widened.0[j]))
}

impl CoshKernel for f16 {
    const LANES: usize = F32_LANES;

    #[inline(always)]
    fn cosh_scalar(self) -> Self {
        cosh(self)
    }

    #[inline(always)]
    fn cosh_block(input: &[Self], output: &mut [Self]) {
        debug_assert_eq!(input.len(), output.len());

        let mut wide = [0.0f32; F32_LANES];
        for (w, x) in wide.iter_mut().zip(input) {
            *w = x.to_f32();
        }

        let z: F32xN = cosh_kernel(Lanes(wide));
        for ((c, &x), &w) in output.iter_mut().zip(input).zip(z.0.iter()) {
            *c = narrow(x, w);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(x: f16) -> f16 {
        f16::from_f64(x.to_f64().cosh())
    }

    #[test]
    fn test_cosh_f16_every_input() {
        for bits in 0..=u16::MAX {
            let x = f16::from_bits(bits);
            let got = cosh(x);
            if x.is_nan() {
                assert!(got.is_nan(), "{bits:#06x}");
                continue;
            }
            let expected = reference(x);
            assert!(
                got.to_bits().abs_diff(expected.to_bits()) <= 1,
                "cosh({x}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_cosh_f16_regions() {
        assert_eq!(cosh(f16::ZERO), f16::ONE);
        assert_eq!(cosh(f16::NEG_ZERO), f16::ONE);
        assert_eq!(cosh(f16::from_bits(0x23ff)), f16::ONE);
        assert_eq!(cosh(MAX_ARG), f16::INFINITY);
        assert_eq!(cosh(-MAX_ARG), f16::INFINITY);
        assert!(cosh(f16::from_bits(0x49e4)).is_finite());
        assert_eq!(cosh(f16::NEG_INFINITY), f16::INFINITY);
        assert_eq!(cosh(f16::from_f32(1.0)), f16::from_f32(1.5430807));
    }

    #[test]
    fn test_cosh_f16_nan_is_quieted() {
        let signalling = f16::from_bits(0x7c01);
        assert_eq!(cosh(signalling).to_bits(), 0x7e01);
        assert_eq!(cosh(f16::NAN).to_bits(), f16::NAN.to_bits() | QUIET_BIT);
    }

    #[test]
    fn test_cosh_f16_lanes_any_width() {
        let one = cosh_lanes([f16::from_f32(2.0)]);
        assert_eq!(one[0].to_bits(), cosh(f16::from_f32(2.0)).to_bits());

        let x: [f16; 19] = array::from_fn(|j| f16::from_f32(j as f32 * 0.75 - 7.0));
        let wide = cosh_lanes(x);
        for j in 0..x.len() {
            assert_eq!(wide[j].to_bits(), cosh(x[j]).to_bits(), "lane {j}");
        }

        assert!(cosh_lanes::<0>([]).is_empty());
    }

    #[test]
    fn test_cosh_f16_lanes_and_blocks_match_scalar() {
        let x = [
            f16::from_f32(0.5),
            f16::from_f32(-3.25),
            MAX_ARG,
            f16::from_bits(0x7c01),
            f16::from_f32(1.0e-3),
        ];
        let lanes = cosh_lanes(x);

        let mut block = [f16::ZERO; 5];
        for (a, c) in x.chunks(f16::LANES).zip(block.chunks_mut(f16::LANES)) {
            f16::cosh_block(a, c);
        }

        for j in 0..x.len() {
            assert_eq!(lanes[j].to_bits(), cosh(x[j]).to_bits());
            assert_eq!(block[j].to_bits(), cosh(x[j]).to_bits());
        }
    }
}
