#![allow(non_snake_case)]

use rspa::{algebra::*, constraints::*, solver::*};

fn tight_settings() -> SpaSettings<f64> {
    SpaSettingsBuilder::default()
        .tol(1e-12)
        .max_iter(10000)
        .build()
        .unwrap()
}

#[test]
fn test_eq_single_row() {
    // x0 + x1 = 10 from the origin
    let A = SparseConstraints::from_triplets(&[0, 0], &[0, 1], &[1., 1.], &[10.], 1).unwrap();

    let mut solver = SparseSolver::new(&A, &[1., 1.], tight_settings()).unwrap();
    let status = solver.solve(&[0., 0.]).unwrap();

    assert_eq!(status, SolverStatus::Solved);
    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert!(solver.solution.x.dist(&[5., 5.]) <= 1e-12);
    assert!(solver.solution.tol <= 1e-12);
    assert_eq!(solver.solution.multipliers, vec![0.]);
}

#[test]
fn test_eq_weighted_closed_form() {
    // A = [1 1  0]   b = [2]
    //     [0 1 -1]       [0]
    let A = SparseConstraints::from_triplets(
        &[0, 0, 1, 1],
        &[0, 1, 1, 2],
        &[1., 1., 1., -1.],
        &[2., 0.],
        2,
    )
    .unwrap();
    let w = [1., 2., 4.];
    let x0 = [0., 0., 0.];

    // x* = x0 - W⁻¹Aᵀ(AW⁻¹Aᵀ)⁻¹(Ax0 - b) = (12, 2, 2)/7
    let refsol = [12. / 7., 2. / 7., 2. / 7.];

    let solution = solve_sparse(&A, &w, &x0, tight_settings()).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);
    assert!(solution.x.dist(&refsol) <= 1e-9);
    assert!(A.diffmax(&solution.x).unwrap() <= 1e-12);
}

#[test]
fn test_eq_heavy_weight_moves_least() {
    // a variable with a large weight barely moves
    let A = SparseConstraints::from_triplets(&[0, 0], &[0, 1], &[1., 1.], &[10.], 1).unwrap();

    let solution = solve_sparse(&A, &[1e6, 1.], &[0., 0.], tight_settings()).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);
    assert!(solution.x[0].abs() < 1e-4);
    assert!((solution.x[0] + solution.x[1] - 10.).abs() <= 1e-12);
}

#[test]
fn test_eq_input_not_mutated() {
    let A = SparseConstraints::from_triplets(&[0, 0], &[0, 1], &[1., 1.], &[10.], 1).unwrap();
    let x0 = vec![1., 2.];
    let solution = solve_sparse(&A, &[1., 1.], &x0, tight_settings()).unwrap();

    assert_eq!(x0, vec![1., 2.]);
    assert!(solution.x.dist(&[4.5, 5.5]) <= 1e-12);
}

#[test]
fn test_eq_f32() {
    let A = SparseConstraints::<f32>::from_triplets(&[0, 0], &[0, 1], &[1., 1.], &[10.], 1)
        .unwrap();
    let settings = SpaSettingsBuilder::<f32>::default()
        .tol(1e-5)
        .build()
        .unwrap();

    let solution = solve_sparse(&A, &[1., 1.], &[0., 0.], settings).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);
    assert!(solution.x.dist(&[5., 5.]) <= 1e-5);
}
