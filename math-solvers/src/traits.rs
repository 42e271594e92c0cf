//! Core traits for the solver library
//!
//! [`RealField`] abstracts over the real floating-point types the solvers
//! operate on, so the same code path serves `f64` (the default for
//! electrostatics problems) and `f32`.

use num_traits::{Float, NumAssign};
use std::fmt::{Debug, LowerExp};

/// Trait for real scalar types usable in the solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + Copy + Send + Sync + Debug + LowerExp + 'static
{
    /// Convert an `f64` constant into this type, rounding if needed
    fn from_f64_lossy(v: f64) -> Self;
}

impl RealField for f64 {
    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v
    }
}

impl RealField for f32 {
    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v as f32
    }
}
