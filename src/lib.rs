//! Branchless elementary functions for parallel compute kernels.
//!
//! `kernmath` evaluates the hyperbolic cosine in half, single and double
//! precision with a bounded error of a few ULP over the whole representable
//! domain, including subnormals, overflow, NaN and infinity.
//!
//! Every evaluation computes all candidate regions and merges them with
//! lane-wise selects, so the same code runs unchanged on one scalar or on a
//! fixed-width vector of lanes with no data-dependent control flow.
//!
//! # Usage
//!
//! ```rust
//! use kernmath::math::cosh;
//! use kernmath::simd::SimdCosh;
//!
//! assert_eq!(cosh(0.0f32), 1.0);
//! assert_eq!(cosh(-3.0f32), cosh(3.0f32));
//!
//! let data = vec![0.5f32, 1.0, 2.0, 90.0];
//! let result = data.as_slice().simd_cosh();
//! assert!(result[3].is_infinite());
//! ```
//!
//! # Precision support
//!
//! - `f32` is always available.
//! - `f64` is compiled with the `fp64` feature (on by default).
//! - `half::f16` is compiled with the `fp16` feature (on by default) and is
//!   evaluated by promotion to single precision.

pub mod error;
pub mod math;
pub mod simd;

pub use error::{KernmathError, Result};
pub use math::{cosh, CoshFloat, CoshKernel};
