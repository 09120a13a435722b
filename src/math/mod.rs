//! Hyperbolic cosine kernels.
//!
//! # Mathematical Approach
//!
//! For `y = |x|` the evaluation is split into regions:
//!
//! - **Table region** (`y < small_threshold`): `y = i + dy` with integer
//!   `i <= 36`, then `cosh(y) = cosh(i) cosh(dy) + sinh(i) sinh(dy)` where
//!   `cosh(i)` and `sinh(i)` are tabulated and only `cosh(dy) - 1` and
//!   `sinh(dy) - dy` are approximated by minimax polynomials.
//! - **Large region** (`y >= small_threshold`): `cosh(y) = exp(y) / 2`, since
//!   `exp(-y)` is below the working precision of `exp(y)`.
//! - **Saturation** (`y >= max_arg`): `+inf`.
//! - **Unity** (`y < underflow_threshold`): exactly `1`.
//!
//! All regions are computed and merged by masked select (see [`region`]), so
//! the kernel runs identically on a scalar and on a vector of lanes.
//!
//! # Precision and Accuracy
//!
//! | Precision | Coefficients | Max error (table / large region) |
//! |-----------|--------------|----------------------------------|
//! | `f32`     | 6 + 6        | < 2 ULP                          |
//! | `f64`     | 7 + 7        | < 2 ULP                          |
//! | `f16`     | via `f32`    | < 1 ULP after rounding           |

pub mod combine;
pub mod large;
pub mod poly;
pub mod precision;
pub mod reduce;
pub mod region;

#[allow(clippy::excessive_precision)]
pub mod tables;

#[cfg(feature = "fp16")]
pub mod binary16;

pub use precision::CoshFloat;
pub use region::cosh_kernel;

use crate::simd::traits::SimdFloat;
use crate::simd::{Lanes, F32xN, F32_LANES};

#[cfg(feature = "fp64")]
use crate::simd::{F64xN, F64_LANES};

/// Hyperbolic cosine of one scalar.
///
/// ```rust
/// use kernmath::math::cosh;
///
/// assert_eq!(cosh(0.0f64), 1.0);
/// assert!(cosh(f32::NAN).is_nan());
/// assert_eq!(cosh(-1.0e3f32), f32::INFINITY);
/// ```
#[inline]
pub fn cosh<T>(x: T) -> T
where
    T: CoshFloat + SimdFloat<Scalar = T>,
{
    cosh_kernel(x)
}

/// Hyperbolic cosine of `W` lanes.
///
/// Lane `j` of the result is bit-identical to `cosh(x[j])`.
///
/// ```rust
/// use kernmath::math::{cosh, cosh_lanes};
///
/// let x = [0.5f32, -2.0, 100.0, 1.0e-9];
/// let z = cosh_lanes(x);
/// for j in 0..4 {
///     assert_eq!(z[j].to_bits(), cosh(x[j]).to_bits());
/// }
/// ```
#[inline]
pub fn cosh_lanes<T, const W: usize>(x: [T; W]) -> [T; W]
where
    T: CoshFloat + SimdFloat<Scalar = T, Mask = bool, Index = usize> + Default,
{
    cosh_kernel(Lanes(x)).0
}

/// Element types with a cosh kernel, used by the slice entry points.
pub trait CoshKernel: Copy + Default + Send + Sync + 'static {
    /// Native lane width of the vectorized kernel.
    const LANES: usize;

    fn cosh_scalar(self) -> Self;

    /// Evaluates one block of at most [`Self::LANES`] elements as a single vector.
    ///
    /// `input` and `output` must have the same length.
    fn cosh_block(input: &[Self], output: &mut [Self]);
}

macro_rules! impl_cosh_kernel {
    ($t:ty, $lanes:expr, $vector:ty) => {
        impl CoshKernel for $t {
            const LANES: usize = $lanes;

            #[inline(always)]
            fn cosh_scalar(self) -> Self {
                cosh_kernel(self)
            }

            #[inline(always)]
            fn cosh_block(input: &[Self], output: &mut [Self]) {
                debug_assert_eq!(input.len(), output.len());
                cosh_kernel(<$vector>::load_partial(input)).store_partial(output);
            }
        }
    };
}

impl_cosh_kernel!(f32, F32_LANES, F32xN);

#[cfg(feature = "fp64")]
impl_cosh_kernel!(f64, F64_LANES, F64xN);
