//! Error types for the linear solvers.
//!
//! Dimension errors signal a caller contract violation. Matrix property
//! errors are only raised by the direct solvers; the conjugate gradient
//! solver never inspects the matrix and lets numerical degeneracy surface
//! as non-finite values instead.

use thiserror::Error;

/// Errors that can occur in the vector primitives and solvers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Operand lengths disagree.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Length actually provided
        got: usize,
    },

    /// Matrix is not square.
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Matrix is not symmetric within the factorization tolerance.
    #[error("matrix is not symmetric")]
    NotSymmetric,

    /// A non-positive pivot was met during Cholesky factorization.
    #[error("matrix is not positive-definite (non-positive pivot at column {pivot})")]
    NotPositiveDefinite {
        /// Column of the offending pivot
        pivot: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if this is a dimension-related error.
    ///
    /// This includes `DimensionMismatch` and `NotSquare`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::DimensionMismatch { .. } | SolverError::NotSquare { .. }
        )
    }

    /// Returns `true` if the matrix violates a structural precondition
    /// (symmetry or positive-definiteness).
    pub fn is_matrix_property_error(&self) -> bool {
        matches!(
            self,
            SolverError::NotSymmetric | SolverError::NotPositiveDefinite { .. }
        )
    }
}

/// Fail with [`SolverError::DimensionMismatch`] unless `got == expected`.
#[inline]
pub(crate) fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(SolverError::DimensionMismatch { expected, got })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolverError::DimensionMismatch {
            expected: 3,
            got: 5,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 5");

        let err = SolverError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "matrix is not square: 2 rows, 3 columns");

        let err = SolverError::NotPositiveDefinite { pivot: 4 };
        assert_eq!(
            err.to_string(),
            "matrix is not positive-definite (non-positive pivot at column 4)"
        );
    }

    #[test]
    fn test_is_dimension_error() {
        let dim_err = SolverError::DimensionMismatch {
            expected: 10,
            got: 5,
        };
        let square_err = SolverError::NotSquare { rows: 1, cols: 2 };

        assert!(dim_err.is_dimension_error());
        assert!(square_err.is_dimension_error());
        assert!(!SolverError::NotSymmetric.is_dimension_error());
    }

    #[test]
    fn test_is_matrix_property_error() {
        assert!(SolverError::NotSymmetric.is_matrix_property_error());
        assert!(SolverError::NotPositiveDefinite { pivot: 0 }.is_matrix_property_error());
        assert!(
            !SolverError::DimensionMismatch {
                expected: 1,
                got: 2
            }
            .is_matrix_property_error()
        );
    }

    #[test]
    fn test_check_len() {
        assert!(check_len(3, 3).is_ok());
        assert_eq!(
            check_len(3, 2),
            Err(SolverError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }
}
