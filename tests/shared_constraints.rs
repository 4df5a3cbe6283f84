#![allow(non_snake_case)]

use rspa::{algebra::*, constraints::*, solver::*};

#[test]
fn test_concurrent_solves_share_constraints() {
    // x0 + x1 + x2 = 6,  x0 <= 1,  x2 <= 1
    let A = SparseConstraints::from_triplets(
        &[0, 0, 0, 1, 2],
        &[0, 1, 2, 0, 2],
        &[1., 1., 1., 1., 1.],
        &[6., 1., 1.],
        1,
    )
    .unwrap();

    let starts: Vec<[f64; 3]> = vec![[0., 0., 0.], [5., 5., 5.], [-3., 2., 9.], [1., 4., 1.]];

    let settings = SpaSettingsBuilder::default().tol(1e-10).build().unwrap();

    // sequential reference
    let expected: Vec<_> = starts
        .iter()
        .map(|x0| solve_sparse(&A, &[1.; 3], x0, settings.clone()).unwrap())
        .collect();

    let results: Vec<SpaSolution<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = starts
            .iter()
            .map(|x0| {
                let A = &A;
                let settings = settings.clone();
                s.spawn(move || {
                    let mut solver = SparseSolver::new(A, &[1.; 3], settings).unwrap();
                    solver.solve(x0).unwrap();
                    solver.solution
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (res, exp) in results.iter().zip(&expected) {
        assert_eq!(res.status, SolverStatus::Solved);
        assert_eq!(res.x, exp.x);
        assert_eq!(res.multipliers, exp.multipliers);
        assert!(A.diffmax(&res.x).unwrap() <= 1e-9);
    }

    // the constraint set is untouched by the solves
    assert_eq!(A.rhs(), &[6., 1., 1.]);
    assert!(results[0].x.dist(&[1., 4., 1.]) <= 1e-8);
}
