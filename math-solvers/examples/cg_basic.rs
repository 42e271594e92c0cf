//! Example solving small SPD systems with conjugate gradient
//!
//! Run with `RUST_LOG=info` to see the per-iteration residual log.

use math_laplace_solvers::vector_ops::two_norm;
use math_laplace_solvers::{CgConfig, cholesky_solve, conjugate_gradient_with_config};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Conjugate Gradient Example");
    println!("==========================\n");

    let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
    let b = array![1.0_f64, 2.0, 3.0];
    let x0 = array![0.0_f64, 0.0, 0.0];

    let config = CgConfig { print_interval: 1 };
    let solution = conjugate_gradient_with_config(&a, &b, &x0, &config)?;

    println!("Solution: {}", solution.x);
    println!("Iterations: {}", solution.iterations());
    println!("\n{:>5} {:>14} {:>14}", "iter", "||r||_2", "||r||_inf");
    for (k, (two, inf)) in solution
        .residual_two_norms()
        .iter()
        .zip(solution.residual_inf_norms())
        .enumerate()
    {
        println!("{k:>5} {two:>14.6e} {inf:>14.6e}");
    }

    let direct = cholesky_solve(&a, &b)?;
    println!("\nCholesky solution: {direct}");
    println!("Difference: {:.3e}", two_norm(&(&solution.x - &direct)));

    Ok(())
}
