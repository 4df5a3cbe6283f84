#![allow(non_snake_case)]

use rspa::{algebra::*, constraints::*, solver::*};

fn settings(tol: f64) -> SpaSettings<f64> {
    SpaSettingsBuilder::default()
        .tol(tol)
        .max_iter(10000)
        .build()
        .unwrap()
}

#[test]
fn test_ineq_upper_bound() {
    // x0 <= 5 from x = 8
    let A = SparseConstraints::from_triplets(&[0], &[0], &[1.], &[5.], 0).unwrap();

    let solution = solve_sparse(&A, &[1.], &[8.], settings(1e-10)).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);
    assert!((solution.x[0] - 5.).abs() <= 1e-10);
    assert_eq!(solution.multipliers, vec![3.]);
}

#[test]
fn test_ineq_satisfied_rows_keep_zero_multiplier() {
    // x0 + x1 <= 4   (violated at x0)
    // x0 - x1 <= 10  (satisfied throughout)
    //      x1 <= 3   (satisfied at x0, and at the projection)
    let A = SparseConstraints::from_triplets(
        &[0, 0, 1, 1, 2],
        &[0, 1, 0, 1, 1],
        &[1., 1., 1., -1., 1.],
        &[4., 10., 3.],
        0,
    )
    .unwrap();
    let x0 = [3., 3.];

    let solution = solve_sparse(&A, &[1., 1.], &x0, settings(1e-10)).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);
    assert!(solution.x.dist(&[2., 2.]) <= 1e-10);

    assert_eq!(solution.multipliers[0], 1.);
    assert_eq!(solution.multipliers[1], 0.);
    assert_eq!(solution.multipliers[2], 0.);

    let diff = A.diffvec(&solution.x).unwrap();
    assert!(diff.iter().all(|&d| d <= 1e-10));
}

#[test]
fn test_ineq_with_equality() {
    // x0 + x1 = 10,  x0 <= 4
    let A = SparseConstraints::from_triplets(&[0, 0, 1], &[0, 1, 0], &[1., 1., 1.], &[10., 4.], 1)
        .unwrap();

    let solution = solve_sparse(&A, &[1., 1.], &[5., 1.], settings(1e-10)).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);
    assert!(solution.x.dist(&[4., 6.]) <= 1e-8);
    assert!(solution.tol <= 1e-10);

    // equality rows never carry a multiplier
    assert_eq!(solution.multipliers[0], 0.);
    assert!(solution.multipliers[1] > 0.);
}

#[test]
fn test_ineq_infinite_bound() {
    // an infinite right hand side never binds
    let A = SparseConstraints::from_triplets(&[0, 1], &[0, 0], &[1., 1.], &[f64::INFINITY, 2.], 0)
        .unwrap();

    let solution = solve_sparse(&A, &[1.], &[3.], settings(1e-10)).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);
    assert_eq!(solution.x, vec![2.]);
    assert_eq!(solution.multipliers, vec![0., 1.]);
}
