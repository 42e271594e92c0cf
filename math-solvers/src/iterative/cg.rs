//! CG (Conjugate Gradient) solver
//!
//! Unpreconditioned Conjugate Gradient for dense symmetric positive definite
//! systems. The iteration count is fixed to the system dimension `n`: in
//! exact arithmetic CG terminates in at most `n` steps, so there is no
//! tolerance test and no early exit. The residual is recomputed as
//! `b - A x` on every step rather than updated incrementally, which avoids
//! drift between the recursive and the true residual.
//!
//! The matrix is not validated. A zero `A`-inner product of a non-zero
//! search direction (non positive-definite `A`) is not caught and shows up
//! as infinite or NaN entries in the solution and the later residuals.
//! Only an exactly zero direction, which arises once the residual is
//! exactly zero, turns the remaining iterations into no-ops.

use crate::error::{Result, check_len};
use crate::traits::RealField;
use crate::vector_ops::{add, check_square, dot, inf_norm, quad_form, residual, scale, two_norm};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// CG solver configuration
///
/// Only affects diagnostics; the numerical path is the same for every
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CgConfig {
    /// Log the residual norm every N iterations (0 = no output)
    #[serde(default)]
    pub print_interval: usize,
}

/// CG solver result
#[derive(Debug, Clone)]
pub struct CgSolution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Residual `b - A x` after each iteration, starting with the initial one
    pub residuals: Vec<Array1<T>>,
}

impl<T: RealField> CgSolution<T> {
    /// Number of iterations performed
    pub fn iterations(&self) -> usize {
        self.residuals.len().saturating_sub(1)
    }

    /// Residual after the last iteration
    pub fn final_residual(&self) -> &Array1<T> {
        // A solve always records the initial residual.
        &self.residuals[self.residuals.len() - 1]
    }

    /// Two-norm of every recorded residual
    pub fn residual_two_norms(&self) -> Vec<T> {
        self.residuals.iter().map(two_norm).collect()
    }

    /// Infinity-norm of every recorded residual
    pub fn residual_inf_norms(&self) -> Vec<T> {
        self.residuals.iter().map(inf_norm).collect()
    }
}

/// Solve Ax = b using the Conjugate Gradient method, starting from `x0`
///
/// Runs exactly `x0.len()` iterations. The returned residual sequence has
/// `n + 1` entries.
///
/// Note: This method is only correct for symmetric positive definite matrices.
pub fn conjugate_gradient<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: &Array1<T>,
) -> Result<CgSolution<T>> {
    conjugate_gradient_with_config(a, b, x0, &CgConfig::default())
}

/// [`conjugate_gradient`] with explicit diagnostics configuration
pub fn conjugate_gradient_with_config<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: &Array1<T>,
    config: &CgConfig,
) -> Result<CgSolution<T>> {
    let n = check_square(a)?;
    check_len(n, b.len())?;
    check_len(n, x0.len())?;

    let mut x = x0.clone();
    let mut r = residual(a, b, &x)?;
    let mut p = r.clone();

    let mut residuals = Vec::with_capacity(n + 1);
    residuals.push(r.clone());

    for iter in 0..n {
        // A vanished direction means the residual hit zero exactly: the
        // remaining steps keep x where it is.
        if !p.iter().all(|&pi| pi == T::zero()) {
            let p_ap = quad_form(&p, a, &p)?;

            let alpha = dot(&p, &r)? / p_ap;
            x = add(&x, &scale(alpha, &p))?;

            r = residual(a, b, &x)?;

            let beta = -quad_form(&p, a, &r)? / p_ap;
            p = add(&r, &scale(beta, &p))?;
        }

        if config.print_interval > 0 && (iter + 1) % config.print_interval == 0 {
            log::info!(
                "CG iteration {}: residual norm = {:.6e}",
                iter + 1,
                two_norm(&r)
            );
        }

        residuals.push(r.clone());
    }

    log::debug!(
        "CG finished {} iterations, final residual norm = {:.6e}",
        n,
        two_norm(&r)
    );

    Ok(CgSolution { x, residuals })
}
