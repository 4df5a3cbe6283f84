#![allow(non_snake_case)]

use super::{check_dim, ConstraintRows, DimensionError};
use crate::algebra::FloatT;
use std::iter::zip;

/// Evaluation of restrictions at a point `x`.
///
/// Implemented for every [`ConstraintRows`] type.  Equality rows measure
/// violation as `|a·x - b|`, inequality rows as `max(a·x - b, 0)`, so that
/// satisfied inequalities contribute nothing.
///
/// All functions check that `x` has length `nvar`, and `row_dot` that
/// the row exists.
pub trait ConstraintArith<T: FloatT>: ConstraintRows<T> {
    /// dot product of row `k` with `x`
    fn row_dot(&self, k: usize, x: &[T]) -> Result<T, DimensionError> {
        check_dim(self.nvar(), x.len())?;
        if k >= self.nconstraints() {
            return Err(DimensionError::BadRowIndex(k));
        }
        Ok(self.row(k).dot(x))
    }

    /// `Ax`, written into `ax`
    fn multvec_into(&self, x: &[T], ax: &mut [T]) -> Result<(), DimensionError> {
        check_dim(self.nvar(), x.len())?;
        check_dim(self.nconstraints(), ax.len())?;
        for (k, ax) in ax.iter_mut().enumerate() {
            *ax = self.row(k).dot(x);
        }
        Ok(())
    }

    /// `Ax`
    fn multvec(&self, x: &[T]) -> Result<Vec<T>, DimensionError> {
        let mut ax = vec![T::zero(); self.nconstraints()];
        self.multvec_into(x, &mut ax)?;
        Ok(ax)
    }

    /// `Ax - b`, written into `diff`
    fn diffvec_into(&self, x: &[T], diff: &mut [T]) -> Result<(), DimensionError> {
        self.multvec_into(x, diff)?;
        for (d, &b) in zip(diff, self.rhs()) {
            *d -= b;
        }
        Ok(())
    }

    /// `Ax - b`
    fn diffvec(&self, x: &[T]) -> Result<Vec<T>, DimensionError> {
        let mut diff = vec![T::zero(); self.nconstraints()];
        self.diffvec_into(x, &mut diff)?;
        Ok(diff)
    }

    /// Total violation, i.e. the sum of the row violations.
    fn diffsum(&self, x: &[T]) -> Result<T, DimensionError> {
        check_dim(self.nvar(), x.len())?;
        Ok(violations(self, x).fold(T::zero(), |acc, d| acc + d))
    }

    /// Largest single row violation.  Zero if all restrictions hold exactly,
    /// NaN if any row evaluates to NaN.
    fn diffmax(&self, x: &[T]) -> Result<T, DimensionError> {
        check_dim(self.nvar(), x.len())?;
        Ok(diffmax_unchecked(self, x))
    }
}

impl<T, C> ConstraintArith<T> for C
where
    T: FloatT,
    C: ConstraintRows<T> + ?Sized,
{
}

/// violation of a single row with residual `d = a·x - b`
#[inline]
pub(crate) fn row_violation<T: FloatT>(is_equality: bool, d: T) -> T {
    if is_equality {
        d.abs()
    } else if d < T::zero() {
        T::zero()
    } else {
        d
    }
}

/// maximum that propagates NaN, unlike `Float::max`
#[inline]
pub(crate) fn nanmax<T: FloatT>(acc: T, v: T) -> T {
    if v.is_nan() || v > acc {
        v
    } else {
        acc
    }
}

fn violations<'a, T, C>(c: &'a C, x: &'a [T]) -> impl Iterator<Item = T> + 'a
where
    T: FloatT,
    C: ConstraintRows<T> + ?Sized,
{
    zip(0..c.nconstraints(), c.rhs())
        .map(move |(k, &b)| row_violation(c.is_equality(k), c.row(k).dot(x) - b))
}

// dimensions are the caller's responsibility
pub(crate) fn diffmax_unchecked<T, C>(c: &C, x: &[T]) -> T
where
    T: FloatT,
    C: ConstraintRows<T> + ?Sized,
{
    violations(c, x).fold(T::zero(), nanmax)
}
