use super::*;
use crate::algebra::*;

/// Result of a projection.
#[derive(Debug, Clone)]
pub struct SpaSolution<T> {
    /// projected vector
    pub x: Vec<T>,
    /// final multiplier per constraint row, zero for equality rows
    pub multipliers: Vec<T>,
    /// final solver status
    pub status: SolverStatus,
    /// largest row violation of `x`, see
    /// [`diffmax`](crate::constraints::ConstraintArith::diffmax)
    pub tol: T,
    /// number of full sweeps over the rows
    pub iterations: u32,
    /// solve time in seconds
    pub solve_time: f64,
}

impl<T> SpaSolution<T>
where
    T: FloatT,
{
    /// Create a new `SpaSolution` object
    pub fn new(nvar: usize, m: usize) -> Self {
        Self {
            x: vec![T::zero(); nvar],
            multipliers: vec![T::zero(); m],
            status: SolverStatus::Unsolved,
            tol: T::nan(),
            iterations: 0,
            solve_time: 0f64,
        }
    }

    pub(crate) fn finalize(&mut self, info: &SpaInfo<T>) {
        self.status = info.status;
        self.iterations = info.iterations;
        self.solve_time = info.solve_time;
    }
}
