//! Weighted least squares projection by successive projections.
//!
//! The main types are the [`SpaSolver`] and its aliases [`SparseSolver`]
//! and [`DenseSolver`], configured by [`SpaSettings`].  Solvers are written
//! once against the [`ConstraintRows`](crate::constraints::ConstraintRows)
//! trait and borrow their restrictions, which therefore may be shared by
//! many solvers.
//!
//! For one-off projections the functions [`solve_sparse`] and
//! [`solve_dense`] construct and run a solver in a single call.

mod convergence;
mod info;
mod info_print;
mod settings;
mod solution;
#[allow(clippy::module_inception)]
mod solver;
mod workspace;

pub use convergence::*;
pub use info::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
pub(crate) use workspace::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod json;
        pub use json::*;
    }
}
