#![allow(non_snake_case)]

use super::{ConstraintFormatError, ConstraintRows, RowView};
use crate::algebra::{try_filled, FloatT};

/// Dense storage of linear restrictions `Ax <op> b`.
///
/// Every row holds a coefficient for each of the `n` variables.  The first
/// `neq` rows are equalities, the remaining rows are inequalities `a·x <= b`.
/// Coefficients are held internally in row major order so that each row is a
/// contiguous slice.
///
/// __Example usage__ : To construct the restrictions
/// ```text
///  x0 + x1  = 10
///  x0 - x1 <= 2
/// ```
///
/// ```
/// use rspa::constraints::{ConstraintRows, DenseConstraints};
///
/// // column major data
/// let A = DenseConstraints::new(2, 2, vec![1., 1., 1., -1.], vec![10., 2.], 1).unwrap();
///
/// assert_eq!(A.nvar(), 2);
/// assert_eq!(A.data(), &[1., 1., 1., -1.]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseConstraints<T = f64> {
    m: usize,
    n: usize,
    neq: usize,
    data: Vec<T>,
    b: Vec<T>,
}

impl<T> DenseConstraints<T>
where
    T: FloatT,
{
    /// Restrictions from an `m x n` coefficient matrix in column major order.
    pub fn new(
        m: usize,
        n: usize,
        data: Vec<T>,
        b: Vec<T>,
        neq: usize,
    ) -> Result<Self, ConstraintFormatError> {
        check_dims(m, n, &data, &b, neq)?;

        let mut rowmajor = try_filled(m * n, T::zero())?;
        for (j, col) in data.chunks_exact(m.max(1)).take(n).enumerate() {
            for (i, &a) in col.iter().enumerate() {
                rowmajor[i * n + j] = a;
            }
        }

        Ok(Self {
            m,
            n,
            neq,
            data: rowmajor,
            b,
        })
    }

    /// Restrictions from an `m x n` coefficient matrix in row major order.
    pub fn from_row_major(
        m: usize,
        n: usize,
        data: Vec<T>,
        b: Vec<T>,
        neq: usize,
    ) -> Result<Self, ConstraintFormatError> {
        check_dims(m, n, &data, &b, neq)?;
        Ok(Self { m, n, neq, data, b })
    }

    /// matrix dimensions `(m, n)`
    pub fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// coefficient data in row major order
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

fn check_dims<T>(
    m: usize,
    n: usize,
    data: &[T],
    b: &[T],
    neq: usize,
) -> Result<(), ConstraintFormatError> {
    if m.checked_mul(n) != Some(data.len()) || b.len() != m {
        return Err(ConstraintFormatError::IncompatibleDimension);
    }
    if neq > m {
        return Err(ConstraintFormatError::BadEqualityCount { neq, m });
    }
    Ok(())
}

impl<T> ConstraintRows<T> for DenseConstraints<T>
where
    T: FloatT,
{
    fn nconstraints(&self) -> usize {
        self.m
    }
    fn neq(&self) -> usize {
        self.neq
    }
    fn nvar(&self) -> usize {
        self.n
    }
    fn rhs(&self) -> &[T] {
        &self.b
    }
    fn row(&self, k: usize) -> RowView<'_, T> {
        assert!(k < self.m);
        RowView::Dense {
            coef: &self.data[k * self.n..(k + 1) * self.n],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_transpose() {
        // A = [1 2 3]
        //     [4 5 6]
        let A = DenseConstraints::new(2, 3, vec![1., 4., 2., 5., 3., 6.], vec![0., 0.], 0)
            .unwrap();
        assert_eq!(A.size(), (2, 3));
        assert_eq!(A.data(), &[1., 2., 3., 4., 5., 6.]);

        let B = DenseConstraints::from_row_major(2, 3, vec![1., 2., 3., 4., 5., 6.], vec![0., 0.], 0)
            .unwrap();
        assert_eq!(A, B);

        let row: Vec<_> = A.row(1).iter().collect();
        assert_eq!(row, vec![(0, 4.), (1, 5.), (2, 6.)]);
    }

    #[test]
    fn dimension_errors() {
        let err = DenseConstraints::new(2, 2, vec![1., 2., 3.], vec![0., 0.], 0);
        assert_eq!(err.unwrap_err(), ConstraintFormatError::IncompatibleDimension);

        let err = DenseConstraints::new(2, 2, vec![1., 2., 3., 4.], vec![0.], 0);
        assert_eq!(err.unwrap_err(), ConstraintFormatError::IncompatibleDimension);

        let err = DenseConstraints::new(1, 2, vec![1., 2.], vec![0.], 3);
        assert_eq!(
            err.unwrap_err(),
            ConstraintFormatError::BadEqualityCount { neq: 3, m: 1 }
        );
    }
}
