//! Dense vector and matrix primitives
//!
//! These are the only arithmetic building blocks the solvers use: inner
//! products, matrix-vector products, elementwise updates and norms. Every
//! binary operation checks operand lengths and reports a
//! [`SolverError::DimensionMismatch`] instead of panicking.

use crate::error::{Result, SolverError, check_len};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Compute the scalar product (x, y) = Σ x_i * y_i
#[inline]
pub fn dot<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> Result<T> {
    check_len(x.len(), y.len())?;
    let mut sum = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum += xi * yi;
    }
    Ok(sum)
}

/// Compute the matrix-vector product y = A * x, one row dot product at a time
pub fn mat_vec<T: RealField>(a: &Array2<T>, x: &Array1<T>) -> Result<Array1<T>> {
    check_len(a.ncols(), x.len())?;
    Ok(a
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&aij, &xj)| acc + aij * xj)
        })
        .collect())
}

/// Compute the A-inner product (x, A y) with a single matrix-vector product
#[inline]
pub fn quad_form<T: RealField>(x: &Array1<T>, a: &Array2<T>, y: &Array1<T>) -> Result<T> {
    let ay = mat_vec(a, y)?;
    dot(x, &ay)
}

/// Elementwise sum x + y
#[inline]
pub fn add<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> Result<Array1<T>> {
    check_len(x.len(), y.len())?;
    Ok(x + y)
}

/// Elementwise difference x - y
#[inline]
pub fn sub<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> Result<Array1<T>> {
    check_len(x.len(), y.len())?;
    Ok(x - y)
}

/// Scale vector by scalar: α * x
#[inline]
pub fn scale<T: RealField>(alpha: T, x: &Array1<T>) -> Array1<T> {
    x.mapv(|xi| alpha * xi)
}

/// Infinity norm: ||x||_∞ = max |x_i|
///
/// Returns zero for an empty vector.
#[inline]
pub fn inf_norm<T: RealField>(x: &Array1<T>) -> T {
    x.iter().fold(T::zero(), |acc, xi| acc.max(xi.abs()))
}

/// Euclidean norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn two_norm<T: RealField>(x: &Array1<T>) -> T {
    x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi).sqrt()
}

/// Residual r = b - A * x
pub fn residual<T: RealField>(a: &Array2<T>, b: &Array1<T>, x: &Array1<T>) -> Result<Array1<T>> {
    let ax = mat_vec(a, x)?;
    sub(b, &ax)
}

/// Fail with [`SolverError::NotSquare`] unless `a` is square.
pub(crate) fn check_square<T>(a: &Array2<T>) -> Result<usize> {
    if a.nrows() == a.ncols() {
        Ok(a.nrows())
    } else {
        Err(SolverError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        })
    }
}
