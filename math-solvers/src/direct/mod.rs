//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`cholesky_solve`]: Cholesky decomposition for SPD systems
//! - [`cholesky_solve_banded`]: the same, restricted to a known half bandwidth

mod cholesky;

pub use cholesky::{
    CholeskyFactorization, cholesky_factorize, cholesky_factorize_banded, cholesky_solve,
    cholesky_solve_banded, is_symmetric,
};
