//! Error types for lazymat

use thiserror::Error;

/// Result type alias using lazymat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lazymat operations
///
/// Shape and type mismatches between whole containers are rejected at compile
/// time by the const-generic matrix type; this enum covers the constraints
/// that remain runtime-checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Element count doesn't match the container's shape at construction
    #[error("shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch {
        /// Element count the shape requires
        expected: usize,
        /// Element count actually provided
        got: usize,
    },

    /// Index out of bounds for an axis
    #[error("index {index} out of bounds for axis of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the axis
        size: usize,
    },

    /// Linear (single-index) access on a container that is not a vector
    #[error("operation requires a row or column vector, got shape {rows}x{cols}")]
    NotVector {
        /// Row count of the container
        rows: usize,
        /// Column count of the container
        cols: usize,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: usize, got: usize) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Create a not-a-vector error
    pub fn not_vector(rows: usize, cols: usize) -> Self {
        Self::NotVector { rows, cols }
    }
}
