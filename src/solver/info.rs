use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use crate::timers::*;

/// Progress information of the most recent solve.
#[derive(Default, Debug)]
pub struct SpaInfo<T> {
    /// completed sweeps
    pub iterations: u32,
    /// convergence criterion after the last sweep
    pub criterion: T,
    pub solve_time: f64,
    /// part of `solve_time` spent on the row curvatures
    pub setup_time: f64,
    pub status: SolverStatus,

    // destination of verbose output
    pub(crate) stream: PrintTarget,
}

impl<T> SpaInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self {
            criterion: T::infinity(),
            ..Self::default()
        }
    }

    pub(crate) fn reset(&mut self, timers: &mut Timers) {
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.criterion = T::infinity();
        self.solve_time = 0f64;
        self.setup_time = 0f64;

        timers.reset_timer("solve");
        timers.reset_timer("curvature");
    }

    pub(crate) fn save_sweep(&mut self, iterations: u32, criterion: T) {
        self.iterations = iterations;
        self.criterion = criterion;
    }

    pub(crate) fn finalize(&mut self, status: SolverStatus, timers: &Timers) {
        self.status = status;
        self.solve_time = timers.elapsed("solve").as_secs_f64();
        self.setup_time = timers.elapsed("curvature").as_secs_f64();
    }
}
