use crate::algebra::*;
use crate::constraints::{nanmax, row_violation};
use std::iter::zip;

/// Convergence criterion of a projection sweep.
///
/// `conv[k]·awa[k]` is the residual `a·x - b` of row `k` as it was seen
/// just before the row was projected.  Equality rows contribute its
/// absolute value, inequality rows only its positive part.  Returns zero
/// for an empty system and NaN as soon as any row term is NaN.
pub fn absmax<T: FloatT>(conv: &[T], awa: &[T], neq: usize) -> T {
    zip(conv, awa)
        .enumerate()
        .map(|(k, (&c, &a))| row_violation(k < neq, c * a))
        .fold(T::zero(), nanmax)
}

/// true if any element of `v` is infinite or NaN
pub fn diverged<T: FloatT>(v: &[T]) -> bool {
    !v.is_finite()
}
