//! Iterative solvers for linear systems
//!
//! - [`conjugate_gradient`]: Conjugate Gradient for symmetric positive definite systems

mod cg;

pub use cg::{CgConfig, CgSolution, conjugate_gradient, conjugate_gradient_with_config};
