//! Storage of linear equality and inequality restrictions.
//!
//! A constraint system `Ax <op> b` stores its first `neq` rows as equalities
//! `a·x = b` and all remaining rows as inequalities `a·x <= b`.  Two storage
//! formats are provided:
//!
//! * [`SparseConstraints`] : ragged rows holding only the nonzero coefficients,
//!   assembled from `(row, col, coef)` triplets.
//! * [`DenseConstraints`] : fully populated rows over all variables.
//!
//! Both implement [`ConstraintRows`], which hands out a [`RowView`] per row.
//! The projection solvers and the [`ConstraintArith`] evaluation functions
//! are written once against this trait.

#![allow(non_snake_case)]

use crate::algebra::FloatT;
use std::iter::zip;

mod arith;
mod dense;
mod error_types;
mod print;
mod sparse;

pub use arith::*;
pub use dense::*;
pub use error_types::*;
pub use sparse::*;

/// Read-only row access to a constraint system.
pub trait ConstraintRows<T: FloatT> {
    /// number of constraints (rows)
    fn nconstraints(&self) -> usize;

    /// number of equality rows.  These are always the leading rows.
    fn neq(&self) -> usize;

    /// number of variables (columns)
    fn nvar(&self) -> usize;

    /// right hand side values, one per row
    fn rhs(&self) -> &[T];

    /// coefficients of row `k`
    ///
    /// # Panics
    /// Panics if `k >= self.nconstraints()`.
    fn row(&self, k: usize) -> RowView<'_, T>;

    /// true if row `k` is an equality row
    fn is_equality(&self, k: usize) -> bool {
        k < self.neq()
    }
}

/// Borrowed view of the coefficients of a single constraint row.
///
/// Sparse rows pair every coefficient with its variable index.  Dense rows
/// hold one coefficient per variable, so the index is the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowView<'a, T> {
    Sparse { index: &'a [usize], coef: &'a [T] },
    Dense { coef: &'a [T] },
}

impl<'a, T> RowView<'a, T>
where
    T: FloatT,
{
    /// number of stored coefficients
    pub fn nnz(&self) -> usize {
        match self {
            RowView::Sparse { coef, .. } => coef.len(),
            RowView::Dense { coef } => coef.len(),
        }
    }

    /// iterate over `(variable index, coefficient)` pairs
    pub fn iter(&self) -> RowIter<'a, T> {
        RowIter {
            view: *self,
            pos: 0,
        }
    }

    /// row dot product `a·x`
    #[inline]
    pub fn dot(&self, x: &[T]) -> T {
        match self {
            RowView::Sparse { index, coef } => zip(*index, *coef)
                .fold(T::zero(), |acc, (&j, &a)| acc + a * x[j]),
            RowView::Dense { coef } => {
                zip(*coef, x).fold(T::zero(), |acc, (&a, &x)| acc + a * x)
            }
        }
    }

    /// squared norm of the row in the metric `xw`, i.e. `Σ a_j² xw_j`
    #[inline]
    pub fn norm_sq_scaled(&self, xw: &[T]) -> T {
        match self {
            RowView::Sparse { index, coef } => zip(*index, *coef)
                .fold(T::zero(), |acc, (&j, &a)| acc + a * xw[j] * a),
            RowView::Dense { coef } => {
                zip(*coef, xw).fold(T::zero(), |acc, (&a, &w)| acc + a * w * a)
            }
        }
    }

    /// in-place update `x[j] -= xw[j] * a_j * fact` over the row support
    #[inline]
    pub fn retract(&self, x: &mut [T], xw: &[T], fact: T) {
        match self {
            RowView::Sparse { index, coef } => {
                for (&j, &a) in zip(*index, *coef) {
                    x[j] -= xw[j] * a * fact;
                }
            }
            RowView::Dense { coef } => {
                for ((x, &w), &a) in zip(zip(x, xw), *coef) {
                    *x -= w * a * fact;
                }
            }
        }
    }
}

/// Iterator over the `(variable index, coefficient)` pairs of a [`RowView`]
#[derive(Debug, Clone)]
pub struct RowIter<'a, T> {
    view: RowView<'a, T>,
    pos: usize,
}

impl<'a, T> Iterator for RowIter<'a, T>
where
    T: FloatT,
{
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.view {
            RowView::Sparse { index, coef } => index.get(self.pos).map(|&j| (j, coef[self.pos])),
            RowView::Dense { coef } => coef.get(self.pos).map(|&a| (self.pos, a)),
        };
        self.pos += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.view.nnz().saturating_sub(self.pos);
        (rem, Some(rem))
    }
}

impl<'a, T: FloatT> ExactSizeIterator for RowIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_and_dense_views_agree() {
        let index = [0usize, 2];
        let coef = [2., -1.];
        let sparse = RowView::Sparse {
            index: &index,
            coef: &coef,
        };
        let dcoef = [2., 0., -1.];
        let dense = RowView::Dense { coef: &dcoef };

        let x = [1., 5., 3.];
        let xw = [1., 1., 0.5];
        assert_eq!(sparse.dot(&x), -1.);
        assert_eq!(dense.dot(&x), -1.);
        assert_eq!(sparse.norm_sq_scaled(&xw), 4.5);
        assert_eq!(dense.norm_sq_scaled(&xw), 4.5);

        let mut xs = x;
        let mut xd = x;
        sparse.retract(&mut xs, &xw, 2.);
        dense.retract(&mut xd, &xw, 2.);
        assert_eq!(xs, [-3., 5., 4.]);
        assert_eq!(xs, xd);
    }

    #[test]
    fn row_iter() {
        let index = [1usize, 4];
        let coef = [3., 7.];
        let view = RowView::Sparse {
            index: &index,
            coef: &coef,
        };
        let pairs: Vec<_> = view.iter().collect();
        assert_eq!(pairs, vec![(1, 3.), (4, 7.)]);
        assert_eq!(view.iter().len(), 2);

        let dense = RowView::Dense { coef: &coef };
        let pairs: Vec<_> = dense.iter().collect();
        assert_eq!(pairs, vec![(0, 3.), (1, 7.)]);
    }
}
