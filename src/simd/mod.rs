//! Lane vectors and slice entry points.
//!
//! The kernels in [`crate::math`] are written against [`SimdFloat`], which is
//! implemented both by bare scalars (one lane) and by [`Lanes`] (a fixed number
//! of lanes). The slice layer in [`slice`] walks input buffers in blocks of the
//! native lane width, sequentially or with rayon.
//!
//! # Native lane width
//!
//! The build script inspects the CPU of native builds and enables one cfg flag
//! that fixes the default vector width:
//!
//! | cfg flag   | f32 lanes | f64 lanes |
//! |------------|-----------|-----------|
//! | `avx512`   | 16        | 8         |
//! | `avx2`     | 8         | 4         |
//! | otherwise  | 4         | 2         |

pub mod lanes;
pub mod scalar;
pub mod slice;
pub mod traits;

pub use lanes::Lanes;
pub use traits::{SimdCosh, SimdFloat};

/// Number of f32 lanes in the native vector.
#[cfg(avx512)]
pub const F32_LANES: usize = 16;

/// Number of f64 lanes in the native vector.
#[cfg(all(avx512, feature = "fp64"))]
pub const F64_LANES: usize = 8;

/// Number of f32 lanes in the native vector.
#[cfg(all(avx2, not(avx512)))]
pub const F32_LANES: usize = 8;

/// Number of f64 lanes in the native vector.
#[cfg(all(avx2, not(avx512), feature = "fp64"))]
pub const F64_LANES: usize = 4;

/// Number of f32 lanes in the native vector.
#[cfg(not(any(avx512, avx2)))]
pub const F32_LANES: usize = 4;

/// Number of f64 lanes in the native vector.
#[cfg(all(not(any(avx512, avx2)), feature = "fp64"))]
pub const F64_LANES: usize = 2;

/// Native f32 vector.
pub type F32xN = Lanes<f32, F32_LANES>;

/// Native f64 vector.
#[cfg(feature = "fp64")]
pub type F64xN = Lanes<f64, F64_LANES>;
