//! Error types for vector operations.
//!
//! Every fallible [`Vector`](crate::Vector) method reports its failure
//! synchronously through [`VectorError`]. Nothing is truncated or padded:
//! an operand of the wrong dimension is rejected before any component
//! is touched.

use thiserror::Error;

/// Vector operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Operands have a different number of components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_math::{vector, VectorError};
    ///
    /// let mut v = vector![1.0, 2.0, 3.0];
    /// let err = v.add(&[1.0, 2.0]).unwrap_err();
    /// assert_eq!(err, VectorError::DimensionMismatch { expected: 3, found: 2 });
    /// ```
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch {
        /// Dimension of the receiving vector.
        expected: usize,
        /// Dimension of the operand.
        found: usize,
    },

    /// Normalization of a zero-length vector was requested.
    #[error("cannot normalize a zero-length vector")]
    DegenerateNormalize,
}

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;
