//! __rspa__ adjusts a vector so that it satisfies a system of linear
//! restrictions while changing it as little as possible.  Given a starting
//! point $x^0$ and positive weights $w$ it solves
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \sum_j w_j (x_j - x^0_j)^2 \\\\\[2ex\]
//!  \text{subject to} & A_E x = b_E \\\\\[1ex\]
//!         & A_I x \le b_I
//!  \end{array}
//! $$
//!
//! by the successive projection algorithm: the rows of $A$ are visited in a
//! fixed order and $x$ is projected onto each of them in turn, in the metric
//! defined by $w$.  Inequality rows carry a nonnegative multiplier so that
//! corrections made while a row was violated can be undone once it is
//! satisfied.  Sweeps are repeated until the largest correction falls below
//! a tolerance.
//!
//! Restrictions are stored either sparsely ([`SparseConstraints`](constraints::SparseConstraints),
//! assembled from `(row, col, coef)` triplets) or densely
//! ([`DenseConstraints`](constraints::DenseConstraints)).  Typical use:
//!
//! ```
//! use rspa::constraints::*;
//! use rspa::solver::*;
//!
//! // x0 + x1 = 10,  x0 <= 4
//! let A = SparseConstraints::from_triplets(
//!     &[0, 0, 1],
//!     &[0, 1, 0],
//!     &[1., 1., 1.],
//!     &[10., 4.],
//!     1,
//! ).unwrap();
//!
//! let settings = SpaSettingsBuilder::default().tol(1e-8).build().unwrap();
//! let solution = solve_sparse(&A, &[1., 1.], &[5., 1.], settings).unwrap();
//!
//! assert_eq!(solution.status, SolverStatus::Solved);
//! assert!(A.diffmax(&solution.x).unwrap() <= 1e-8);
//! ```
//!
//! # License
//!
//! Licensed under the GNU General Public License, version 3 or later.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod constraints;
pub mod io;
pub mod solver;
pub(crate) mod timers;
