//! Error types for kernmath operations.
//!
//! The math kernels themselves are total and never fail. Errors only come
//! from the buffer plumbing around them: writing into a caller-provided output
//! slice or packing a slice into a fixed-width lane vector.

use std::fmt;

/// Errors that can occur while moving data in and out of the kernels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernmathError {
    /// Input and output buffers have different lengths.
    LengthMismatch {
        /// Number of input elements.
        input: usize,
        /// Number of output slots provided.
        output: usize,
    },
    /// A slice holds more elements than the lane vector can carry.
    LaneCount {
        /// Lane width of the target vector.
        lanes: usize,
        /// Number of elements that were offered.
        found: usize,
    },
}

impl fmt::Display for KernmathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernmathError::LengthMismatch { input, output } => write!(
                f,
                "Buffer length mismatch: {} input elements but {} output slots",
                input, output
            ),
            KernmathError::LaneCount { lanes, found } => write!(
                f,
                "Too many elements for lane vector: {} elements do not fit in {} lanes",
                found, lanes
            ),
        }
    }
}

impl std::error::Error for KernmathError {}

/// Result type alias for kernmath operations.
pub type Result<T> = std::result::Result<T, KernmathError>;

/// Creates a buffer length mismatch error.
pub fn length_mismatch(input: usize, output: usize) -> KernmathError {
    KernmathError::LengthMismatch { input, output }
}

/// Creates a lane count error.
pub fn lane_count_error(lanes: usize, found: usize) -> KernmathError {
    KernmathError::LaneCount { lanes, found }
}
