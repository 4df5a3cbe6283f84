#![allow(non_snake_case)]

use rspa::{constraints::*, solver::*};

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> SparseConstraints<f64> {
    // x0 + x2 = 1,  x1 <= 2,  x2 <= 3
    SparseConstraints::from_triplets(&[0, 0, 1, 2], &[0, 2, 1, 2], &[1., 1., 1., 1.], &[1., 2., 3.], 1)
        .unwrap()
}

#[test]
fn api_dim_check_working() {
    let A = api_dim_check_data();
    let mut solver = SparseSolver::new(&A, &[1.; 3], SpaSettings::default()).unwrap();
    assert!(solver.solve(&[0.; 3]).is_ok());
}

#[test]
fn api_dim_check_bad_weights() {
    let A = api_dim_check_data();
    let result = SparseSolver::new(&A, &[1.; 4], SpaSettings::default());
    assert_eq!(
        result.err(),
        Some(SolverError::IncompatibleDimension {
            expected: 3,
            found: 4
        })
    );
}

#[test]
fn api_dim_check_bad_x0() {
    let A = api_dim_check_data();
    let mut solver = SparseSolver::new(&A, &[1.; 3], SpaSettings::default()).unwrap();
    assert_eq!(
        solver.solve(&[0.; 2]),
        Err(SolverError::IncompatibleDimension {
            expected: 3,
            found: 2
        })
    );
    // nothing was run
    assert_eq!(solver.solution.status, SolverStatus::Unsolved);
}

#[test]
fn api_dim_check_bad_settings() {
    let A = api_dim_check_data();
    let mut settings = SpaSettings::default();
    settings.tol = -1.;
    let result = SparseSolver::new(&A, &[1.; 3], settings);
    assert_eq!(
        result.err(),
        Some(SolverError::Settings(SettingsError::BadFieldValue("tol")))
    );
}

#[test]
fn api_dim_check_arith() {
    let A = api_dim_check_data();
    let err = DimensionError::IncompatibleDimension {
        expected: 3,
        found: 1,
    };
    assert_eq!(A.row_dot(0, &[1.]), Err(err.clone()));
    assert_eq!(A.multvec(&[1.]), Err(err.clone()));
    assert_eq!(A.diffvec(&[1.]), Err(err.clone()));
    assert_eq!(A.diffsum(&[1.]), Err(err.clone()));
    assert_eq!(A.diffmax(&[1.]), Err(err));

    assert_eq!(A.row_dot(2, &[1.; 3]), Ok(1.));
    assert_eq!(A.row_dot(3, &[1.; 3]), Err(DimensionError::BadRowIndex(3)));
    assert_eq!(
        A.row_dot(usize::MAX, &[1.; 3]),
        Err(DimensionError::BadRowIndex(usize::MAX))
    );

    let mut out = vec![0.; 2];
    assert_eq!(
        A.diffvec_into(&[0.; 3], &mut out),
        Err(DimensionError::IncompatibleDimension {
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn api_dim_check_dense() {
    assert_eq!(
        DenseConstraints::new(2, 2, vec![1.; 3], vec![0.; 2], 0),
        Err(ConstraintFormatError::IncompatibleDimension)
    );
    assert_eq!(
        DenseConstraints::new(2, 2, vec![1.; 4], vec![0.; 3], 0),
        Err(ConstraintFormatError::IncompatibleDimension)
    );

    let D = DenseConstraints::new(2, 2, vec![1.; 4], vec![0.; 2], 0).unwrap();
    let result = DenseSolver::new(&D, &[1.; 3], SpaSettings::default());
    assert!(result.is_err());
}
