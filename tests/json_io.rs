#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use rspa::{constraints::*, solver::*};
    use std::io::{Seek, SeekFrom};

    let A = SparseConstraints::from_triplets(
        &[0, 0, 1, 1],
        &[0, 1, 1, 2],
        &[1., 1., 1., -1.],
        &[10., 0.],
        1,
    )
    .unwrap();

    let settings = SpaSettingsBuilder::default()
        .tol(f64::INFINITY)
        .max_iter(7)
        .build()
        .unwrap();

    let problem = SpaProblem {
        constraints: A,
        weights: vec![1., 2., 3.],
        x0: vec![1., 1., 1.],
        settings,
    };

    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = SpaProblem::<f64>::read_from_file(&mut file).unwrap();

    assert_eq!(problem2.settings.tol, f64::INFINITY);
    assert_eq!(problem2.settings.max_iter, 7);
    assert_eq!(problem, problem2);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_rejects_malformed_constraints() {
    use rspa::solver::*;
    use std::io::{Seek, SeekFrom, Write};

    // column index 5 exceeds nvar
    let json = r#"{
        "constraints": {
            "m": 1, "neq": 0, "nvar": 2,
            "rowptr": [0, 1], "colval": [5], "nzval": [1.0], "b": [1.0]
        },
        "weights": [1.0, 1.0],
        "x0": [0.0, 0.0],
        "settings": {}
    }"#;

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = SpaProblem::<f64>::read_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
