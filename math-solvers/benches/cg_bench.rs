use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use math_laplace_solvers::{cholesky_solve, cholesky_solve_banded, conjugate_gradient};
use ndarray::{Array1, Array2};

/// Five-point Laplacian on a `side x side` grid of free nodes
fn laplacian_2d(side: usize) -> Array2<f64> {
    let n = side * side;
    Array2::from_shape_fn((n, n), |(i, j)| {
        let (xi, yi) = (i / side, i % side);
        let (xj, yj) = (j / side, j % side);
        if i == j {
            4.0
        } else if (xi == xj && yi.abs_diff(yj) == 1) || (yi == yj && xi.abs_diff(xj) == 1) {
            -1.0
        } else {
            0.0
        }
    })
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("laplace_2d");
    for side in [6usize, 10, 14] {
        let a = laplacian_2d(side);
        let n = side * side;
        let b = Array1::from_elem(n, 1.0);
        let x0 = Array1::zeros(n);

        group.bench_with_input(BenchmarkId::new("cg", n), &n, |bench, _| {
            bench.iter(|| conjugate_gradient(black_box(&a), black_box(&b), &x0))
        });
        group.bench_with_input(BenchmarkId::new("cholesky", n), &n, |bench, _| {
            bench.iter(|| cholesky_solve(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("cholesky_banded", n), &n, |bench, _| {
            bench.iter(|| cholesky_solve_banded(black_box(&a), black_box(&b), side + 1))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
