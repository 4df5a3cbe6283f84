#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::constraints::*;
use crate::io::ConfigurablePrintTarget;
use crate::timers::*;
use itertools::izip;
use std::io::Write;
use thiserror::Error;

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination
#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum SolverStatus {
    /// Solver hasn't run.
    Unsolved,
    /// Convergence criterion met within the iteration limit.
    Solved,
    /// Scratch storage for the solve could not be allocated.
    OutOfMemory,
    /// The iterates or the multipliers became infinite or NaN.
    Diverged,
    /// Iteration limit reached above the tolerance.
    MaxIterations,
}

impl SolverStatus {
    /// Legacy integer status code, `None` if the solver hasn't run.
    ///
    /// | status          | code |
    /// |-----------------|------|
    /// | `Solved`        | 0    |
    /// | `OutOfMemory`   | 1    |
    /// | `Diverged`      | 2    |
    /// | `MaxIterations` | 3    |
    pub fn code(&self) -> Option<u32> {
        match self {
            SolverStatus::Unsolved => None,
            SolverStatus::Solved => Some(0),
            SolverStatus::OutOfMemory => Some(1),
            SolverStatus::Diverged => Some(2),
            SolverStatus::MaxIterations => Some(3),
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Default for SolverStatus {
    fn default() -> Self {
        SolverStatus::Unsolved
    }
}

#[derive(Error, Debug, PartialEq)]
/// Error type returned when a solver is given unusable data
pub enum SolverError {
    /// A vector does not match the number of variables
    #[error("Vector has length {found}, expected {expected}")]
    IncompatibleDimension { expected: usize, found: usize },
    /// A weight is zero, negative or not finite
    #[error("Weight {0} is not a positive finite number")]
    BadWeight(usize),
    /// Settings failed validation
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn check_dim(expected: usize, found: usize) -> Result<(), SolverError> {
    if expected == found {
        Ok(())
    } else {
        Err(SolverError::IncompatibleDimension { expected, found })
    }
}

// ---------------------------------
// top level solver container type
// ---------------------------------

/// Weighted least squares projection onto a set of linear restrictions.
///
/// Given a starting point `x0` and positive weights `w`, finds the `x`
/// minimizing `Σ w_j (x_j - x0_j)²` subject to `a·x = b` on the
/// equality rows and `a·x <= b` on the inequality rows, by cyclically
/// projecting onto one row at a time.
///
/// The solver only borrows the restrictions, so a single constraint set
/// may serve any number of solvers, also on different threads.
///
/// __Example usage__ : Project `(0, 0)` onto `x0 + x1 = 10`
/// ```
/// use rspa::constraints::SparseConstraints;
/// use rspa::solver::*;
///
/// let A = SparseConstraints::from_triplets(&[0, 0], &[0, 1], &[1., 1.], &[10.], 1).unwrap();
/// let settings = SpaSettingsBuilder::default().tol(1e-10).build().unwrap();
///
/// let mut solver = SparseSolver::new(&A, &[1., 1.], settings).unwrap();
/// let status = solver.solve(&[0., 0.]).unwrap();
///
/// assert_eq!(status, SolverStatus::Solved);
/// assert!((solver.solution.x[0] - 5.0_f64).abs() < 1e-10);
/// ```
pub struct SpaSolver<'a, T, C>
where
    T: FloatT,
    C: ConstraintRows<T> + ?Sized,
{
    constraints: &'a C,
    weights: Vec<T>,
    pub settings: SpaSettings<T>,
    pub info: SpaInfo<T>,
    pub solution: SpaSolution<T>,
    timers: Option<Timers>,
}

/// Projection onto [`SparseConstraints`]
pub type SparseSolver<'a, T = f64> = SpaSolver<'a, T, SparseConstraints<T>>;

/// Projection onto [`DenseConstraints`]
pub type DenseSolver<'a, T = f64> = SpaSolver<'a, T, DenseConstraints<T>>;

impl<'a, T, C> SpaSolver<'a, T, C>
where
    T: FloatT,
    C: ConstraintRows<T> + ?Sized,
{
    /// Create a solver for the restrictions `constraints` with one
    /// positive, finite weight per variable.
    pub fn new(
        constraints: &'a C,
        weights: &[T],
        settings: SpaSettings<T>,
    ) -> Result<Self, SolverError> {
        settings.validate()?;
        check_dim(constraints.nvar(), weights.len())?;

        if let Some(j) = weights.iter().position(|&w| !(w > T::zero() && w.is_finite())) {
            return Err(SolverError::BadWeight(j));
        }

        let solution = SpaSolution::new(constraints.nvar(), constraints.nconstraints());

        Ok(Self {
            constraints,
            weights: weights.to_vec(),
            settings,
            info: SpaInfo::new(),
            solution,
            timers: Some(Timers::default()),
        })
    }

    /// the restrictions being projected onto
    pub fn constraints(&self) -> &'a C {
        self.constraints
    }

    /// the variable weights
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Project `x0` onto the restrictions.
    ///
    /// `x0` itself is not modified.  The projected point and the row
    /// multipliers are left in `self.solution`.  An `Err` is returned only
    /// if `x0` has the wrong length; numerical failures are reported
    /// through the returned status.
    ///
    /// A solve that stops with [`MaxIterations`](SolverStatus::MaxIterations)
    /// can be resumed by solving again from `self.solution.x`.
    pub fn solve(&mut self, x0: &[T]) -> Result<SolverStatus, SolverError> {
        check_dim(self.constraints.nvar(), x0.len())?;

        let mut timers = self.timers.take().unwrap_or_default();

        // print failures never change the outcome of a solve
        notimeit! {timers; {
            let _ = self.info.print_banner(&self.settings);
            let _ = self.info.print_configuration(&self.settings, self.constraints);
            let _ = self.info.print_status_header(&self.settings);
        }}

        self.info.reset(&mut timers);
        self.solution.x.copy_from(x0);
        self.solution.multipliers.set(T::zero());

        let status;
        timeit! {timers => "solve"; {
            status = match SpaWorkspace::try_new(self.constraints.nvar(), self.constraints.nconstraints()) {
                Ok(mut work) => self.project(&mut work, &mut timers),
                Err(_) => SolverStatus::OutOfMemory,
            };
        }}

        self.info.finalize(status, &timers);
        self.solution.tol = diffmax_unchecked(self.constraints, &self.solution.x);
        self.solution.finalize(&self.info);

        notimeit! {timers; {
            let _ = self.info.print_footer(&self.settings, self.solution.tol);
        }}

        self.timers.replace(timers);
        Ok(status)
    }

    // Successive projection sweeps, starting from the point
    // in self.solution.x and updating it in place.
    fn project(&mut self, work: &mut SpaWorkspace<T>, timers: &mut Timers) -> SolverStatus {
        let A = self.constraints;
        let neq = A.neq();
        let x = &mut self.solution.x;

        timeit! {timers => "curvature"; {
            work.xw.scalarop_from(T::recip, &self.weights);
            for (k, awa) in work.awa.iter_mut().enumerate() {
                *awa = A.row(k).norm_sq_scaled(&work.xw);
            }
        }}

        let tol = self.settings.tol;
        let max_iter = self.settings.max_iter;
        let mut criterion = T::infinity();
        let mut iter = 0;
        let mut diverging = false;

        while criterion > tol && iter < max_iter {
            for (k, (&b, &awa, conv, alpha)) in
                izip!(A.rhs(), &work.awa, &mut work.conv, &mut work.alpha).enumerate()
            {
                let row = A.row(k);
                *conv = (row.dot(x) - b) / awa;

                let fact = if A.is_equality(k) {
                    *conv
                } else {
                    let old = *alpha;
                    *alpha = T::max(T::zero(), old + *conv);
                    *alpha - old
                };
                row.retract(x, &work.xw, fact);
            }
            iter += 1;

            if diverged(x.as_slice()) || diverged(&work.alpha) {
                self.info.save_sweep(iter, T::nan());
                diverging = true;
                break;
            }

            criterion = absmax(&work.conv, &work.awa, neq);
            self.info.save_sweep(iter, criterion);
            notimeit! {timers; {
                let _ = self.info.print_status(&self.settings);
            }}

            // zero curvature rows end up here
            if !criterion.is_finite() {
                diverging = true;
                break;
            }
        }

        self.solution.multipliers.copy_from(&work.alpha);

        if diverging {
            SolverStatus::Diverged
        } else if criterion <= tol {
            SolverStatus::Solved
        } else {
            SolverStatus::MaxIterations
        }
    }
}

impl<'a, T, C> ConfigurablePrintTarget for SpaSolver<'a, T, C>
where
    T: FloatT,
    C: ConstraintRows<T> + ?Sized,
{
    fn print_to_stdout(&mut self) {
        self.info.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.stream.get_print_buffer()
    }
}

/// Project `x0` onto sparse restrictions with a one-off solver.
pub fn solve_sparse<T: FloatT>(
    A: &SparseConstraints<T>,
    weights: &[T],
    x0: &[T],
    settings: SpaSettings<T>,
) -> Result<SpaSolution<T>, SolverError> {
    let mut solver = SparseSolver::new(A, weights, settings)?;
    solver.solve(x0)?;
    Ok(solver.solution)
}

/// Project `x0` onto dense restrictions with a one-off solver.
pub fn solve_dense<T: FloatT>(
    A: &DenseConstraints<T>,
    weights: &[T],
    x0: &[T],
    settings: SpaSettings<T>,
) -> Result<SpaSolution<T>, SolverError> {
    let mut solver = DenseSolver::new(A, weights, settings)?;
    solver.solve(x0)?;
    Ok(solver.solution)
}
