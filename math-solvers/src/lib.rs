//! Dense linear solvers for finite-difference electrostatics
//!
//! The five-point discretization of Laplace's equation over a shielded
//! conductor produces a symmetric positive-definite system `A x = b`. This
//! crate solves such systems; building `A` and `b` from a mesh is left to
//! the caller.
//!
//! # Features
//!
//! - **Iterative Solver**: unpreconditioned Conjugate Gradient with a fixed
//!   budget of `n` iterations and the full residual history
//! - **Direct Solver**: Cholesky decomposition, dense or banded
//! - **Primitives**: checked dot products, matrix-vector products and norms
//! - **Generic Scalar Types**: `f64` and `f32`
//!
//! # Example
//!
//! ```
//! use math_laplace_solvers::conjugate_gradient;
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
//! let b = array![1.0_f64, 2.0];
//! let x0 = array![0.0_f64, 0.0];
//!
//! let solution = conjugate_gradient(&a, &b, &x0)?;
//! assert_eq!(solution.residuals.len(), 3);
//! assert!((solution.x[0] - 1.0 / 11.0).abs() < 1e-12);
//! # Ok::<(), math_laplace_solvers::SolverError>(())
//! ```

pub mod direct;
pub mod error;
pub mod iterative;
pub mod traits;
pub mod vector_ops;

// Re-export main types
pub use error::{Result, SolverError};
pub use traits::RealField;

// Re-export iterative solvers
pub use iterative::{CgConfig, CgSolution, conjugate_gradient, conjugate_gradient_with_config};

// Re-export direct solvers
pub use direct::{
    CholeskyFactorization, cholesky_factorize, cholesky_factorize_banded, cholesky_solve,
    cholesky_solve_banded,
};
