//! Slice entry points for the cosh kernels.
//!
//! Inputs are walked in blocks of [`CoshKernel::LANES`] elements. Full blocks
//! and the trailing partial block go through the same vector kernel; the
//! partial block is padded with zeros on load and only its live lanes are
//! stored back. The parallel variants split the buffer into multi-block chunks
//! handed to rayon, each chunk running the sequential loop.

use log::trace;
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

use crate::error::{length_mismatch, Result};
use crate::math::CoshKernel;
use crate::simd::traits::SimdCosh;

/// Lane blocks per rayon work item.
pub const PARALLEL_BLOCKS_PER_CHUNK: usize = 256;

#[inline(always)]
fn cosh_blocks<T: CoshKernel>(input: &[T], output: &mut [T]) {
    for (a, c) in input.chunks(T::LANES).zip(output.chunks_mut(T::LANES)) {
        T::cosh_block(a, c);
    }
}

fn check_lengths<T>(input: &[T], output: &[T]) -> Result<()> {
    if input.len() != output.len() {
        return Err(length_mismatch(input.len(), output.len()));
    }
    Ok(())
}

/// One scalar kernel call per element.
pub fn scalar_cosh<T: CoshKernel>(a: &[T]) -> Vec<T> {
    trace!("scalar cosh over {} elements", a.len());
    a.iter().map(|&x| x.cosh_scalar()).collect()
}

fn run_sequential<T: CoshKernel>(input: &[T], output: &mut [T]) {
    let step = T::LANES;
    trace!(
        "simd cosh over {} elements: {} full blocks of {} lanes, {} tail lanes",
        input.len(),
        input.len() / step,
        step,
        input.len() % step
    );

    cosh_blocks(input, output);
}

fn run_parallel<T: CoshKernel>(input: &[T], output: &mut [T]) {
    let chunk_size = T::LANES * PARALLEL_BLOCKS_PER_CHUNK;
    trace!(
        "parallel simd cosh over {} elements in {} chunks of {} elements",
        input.len(),
        input.len().div_ceil(chunk_size),
        chunk_size
    );

    // chunk_size is a multiple of the lane count, so only the last chunk has a tail
    output
        .par_chunks_mut(chunk_size)
        .zip(input.par_chunks(chunk_size))
        .for_each(|(c_chunk, a_chunk)| cosh_blocks(a_chunk, c_chunk));
}

/// Sequential lane blocks into a caller-provided buffer.
///
/// # Errors
///
/// [`KernmathError::LengthMismatch`](crate::KernmathError::LengthMismatch) if
/// the buffers differ in length. `output` is left untouched in that case.
pub fn cosh_into<T: CoshKernel>(input: &[T], output: &mut [T]) -> Result<()> {
    check_lengths(input, output)?;
    run_sequential(input, output);
    Ok(())
}

/// Parallel lane blocks into a caller-provided buffer.
///
/// Same contract as [`cosh_into`].
pub fn par_cosh_into<T: CoshKernel>(input: &[T], output: &mut [T]) -> Result<()> {
    check_lengths(input, output)?;
    run_parallel(input, output);
    Ok(())
}

/// Sequential lane blocks, allocating the result.
pub fn simd_cosh<T: CoshKernel>(a: &[T]) -> Vec<T> {
    let mut c = vec![T::default(); a.len()];
    run_sequential(a, &mut c);
    c
}

/// Parallel lane blocks, allocating the result.
pub fn parallel_simd_cosh<T: CoshKernel>(a: &[T]) -> Vec<T> {
    let mut c = vec![T::default(); a.len()];
    run_parallel(a, &mut c);
    c
}

impl<T: CoshKernel> SimdCosh for &[T] {
    type Output = Vec<T>;

    #[inline(always)]
    fn simd_cosh(self) -> Self::Output {
        simd_cosh(self)
    }

    #[inline(always)]
    fn par_simd_cosh(self) -> Self::Output {
        parallel_simd_cosh(self)
    }

    #[inline(always)]
    fn scalar_cosh(self) -> Self::Output {
        scalar_cosh(self)
    }
}

impl<T: CoshKernel> SimdCosh for &Vec<T> {
    type Output = Vec<T>;

    #[inline(always)]
    fn simd_cosh(self) -> Self::Output {
        simd_cosh(self)
    }

    #[inline(always)]
    fn par_simd_cosh(self) -> Self::Output {
        parallel_simd_cosh(self)
    }

    #[inline(always)]
    fn scalar_cosh(self) -> Self::Output {
        scalar_cosh(self)
    }
}
