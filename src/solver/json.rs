#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::constraints::SparseConstraints;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read, Write};

/// A complete projection problem, for saving to and loading from JSON.
///
/// Infinite right hand side values and tolerances are stored as the
/// largest finite value of `T`, since JSON has no representation for
/// infinity, and are restored as infinities when read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
pub struct SpaProblem<T: FloatT> {
    pub constraints: SparseConstraints<T>,
    pub weights: Vec<T>,
    pub x0: Vec<T>,
    pub settings: SpaSettings<T>,
}

impl<T> SpaProblem<T>
where
    T: FloatT + Serialize + DeserializeOwned,
{
    /// Project `x0` onto the constraints with a one-off solver.
    pub fn solve(&self) -> Result<SpaSolution<T>, SolverError> {
        solve_sparse(
            &self.constraints,
            &self.weights,
            &self.x0,
            self.settings.clone(),
        )
    }

    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let mut data = self.clone();

        // sanitize values that can't be serialized, i.e. infs
        for b in data.constraints.rhs_mut() {
            *b = sanitize(*b);
        }
        data.settings.tol = sanitize(data.settings.tol);

        let json = serde_json::to_string(&data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut data: SpaProblem<T> = serde_json::from_str(&buffer)?;

        // restore sanitized values to infinities
        for b in data.constraints.rhs_mut() {
            *b = desanitize(*b);
        }
        data.settings.tol = desanitize(data.settings.tol);

        data.constraints
            .check_format()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(data)
    }
}

fn sanitize<T: FloatT>(v: T) -> T {
    if v == T::infinity() {
        T::max_value()
    } else if v == T::neg_infinity() {
        T::min_value()
    } else {
        v
    }
}

fn desanitize<T: FloatT>(v: T) -> T {
    if v == T::max_value() {
        T::infinity()
    } else if v == T::min_value() {
        T::neg_infinity()
    } else {
        v
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    // x0 + x1 = 10, x0 <= inf, x1 <= 4
    let A = SparseConstraints::from_triplets(
        &[0, 0, 1, 2],
        &[0, 1, 0, 1],
        &[1., 1., 1., 1.],
        &[10., f64::INFINITY, 4.],
        1,
    )
    .unwrap();

    let settings = SpaSettingsBuilder::default()
        .tol(1e-10)
        .build()
        .unwrap();

    let problem = SpaProblem {
        constraints: A,
        weights: vec![1., 2.],
        x0: vec![0., 0.],
        settings,
    };

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = SpaProblem::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(problem, problem2);

    let sol1 = problem.solve().unwrap();
    let sol2 = problem2.solve().unwrap();
    assert_eq!(sol1.status, SolverStatus::Solved);
    assert_eq!(sol1.x, sol2.x);
}
