#![allow(non_snake_case)]

use super::{ConstraintFormatError, ConstraintRows, DenseConstraints, RowView};
use crate::algebra::{try_filled, try_with_capacity, FloatT};
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Sparse storage of linear restrictions `Ax <op> b`.
///
/// The first `neq` rows are equalities `a·x = b`, the remaining rows are
/// inequalities `a·x <= b`.  Rows are stored in a single arena in compressed
/// sparse row format: the coefficients of row `k` occupy positions
/// `rowptr[k]..rowptr[k+1]` of `colval` (variable indices) and `nzval`
/// (coefficient values).
///
/// __Example usage__ : To construct the restrictions
/// ```text
///  x0 + x1       = 10
///       x1 - x2 <= 0
/// ```
///
/// ```
/// use rspa::constraints::{ConstraintRows, SparseConstraints};
///
/// let A = SparseConstraints::from_triplets(
///     &[0, 0, 1, 1],           // rows
///     &[0, 1, 1, 2],           // cols
///     &[1., 1., 1., -1.],      // coefficients
///     &[10., 0.],              // b
///     1,                       // neq
/// ).unwrap();
///
/// assert_eq!(A.nvar(), 3);
/// assert_eq!(A.nconstraints(), 2);
/// ```

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct SparseConstraints<T = f64> {
    m: usize,
    neq: usize,
    nvar: usize,
    rowptr: Vec<usize>,
    colval: Vec<usize>,
    nzval: Vec<T>,
    b: Vec<T>,
}

impl<T> SparseConstraints<T>
where
    T: FloatT,
{
    /// Assemble restrictions from `(rows[i], cols[i], coef[i])` triplets.
    ///
    /// The triplets must be sorted by row index.  The number of constraints
    /// is the length of `b` and the number of variables is one more than the
    /// largest column index.  Rows without any triplets are stored as empty
    /// rows.
    pub fn from_triplets(
        rows: &[usize],
        cols: &[usize],
        coef: &[T],
        b: &[T],
        neq: usize,
    ) -> Result<Self, ConstraintFormatError> {
        Self::assemble(rows, cols, coef, b, neq, None)
    }

    /// As [`from_triplets`](Self::from_triplets), but with a fixed number of
    /// variables.  Variables not referenced by any row are still part of the
    /// problem.  Column indices must be less than `nvar`.
    pub fn from_triplets_with_nvar(
        nvar: usize,
        rows: &[usize],
        cols: &[usize],
        coef: &[T],
        b: &[T],
        neq: usize,
    ) -> Result<Self, ConstraintFormatError> {
        Self::assemble(rows, cols, coef, b, neq, Some(nvar))
    }

    /// Sparse copy of dense restrictions.  Only nonzero coefficients are kept.
    pub fn from_dense(D: &DenseConstraints<T>) -> Result<Self, ConstraintFormatError> {
        let (m, n) = (D.nconstraints(), D.nvar());
        let nnz = D.data().iter().filter(|&&a| a != T::zero()).count();

        let mut rowptr = try_with_capacity(m + 1)?;
        let mut colval = try_with_capacity(nnz)?;
        let mut nzval = try_with_capacity(nnz)?;
        let mut b = try_with_capacity(m)?;
        b.extend_from_slice(D.rhs());

        rowptr.push(0);
        for k in 0..m {
            for (j, a) in D.row(k).iter().filter(|&(_, a)| a != T::zero()) {
                colval.push(j);
                nzval.push(a);
            }
            rowptr.push(colval.len());
        }

        Ok(Self {
            m,
            neq: D.neq(),
            nvar: n,
            rowptr,
            colval,
            nzval,
            b,
        })
    }

    fn assemble(
        rows: &[usize],
        cols: &[usize],
        coef: &[T],
        b: &[T],
        neq: usize,
        nvar: Option<usize>,
    ) -> Result<Self, ConstraintFormatError> {
        let m = b.len();
        let nnz = rows.len();

        if cols.len() != nnz || coef.len() != nnz {
            return Err(ConstraintFormatError::IncompatibleDimension);
        }
        if neq > m {
            return Err(ConstraintFormatError::BadEqualityCount { neq, m });
        }

        // row indices must be in bounds and non-decreasing
        if let Some(&r) = rows.iter().find(|&&r| r >= m) {
            return Err(ConstraintFormatError::BadRowIndex(r));
        }
        if rows.windows(2).any(|r| r[0] > r[1]) {
            return Err(ConstraintFormatError::BadRowOrdering);
        }

        let maxcol = cols.iter().max().copied();
        let nvar = match (nvar, maxcol) {
            (Some(n), Some(c)) if c >= n => {
                return Err(ConstraintFormatError::BadColumnIndex(c));
            }
            (Some(n), _) => n,
            (None, Some(c)) => c
                .checked_add(1)
                .ok_or(ConstraintFormatError::BadColumnIndex(c))?,
            (None, None) => 0,
        };

        // every storage buffer is reserved up front, so that a failure
        // leaves nothing partially built behind
        let mut rowptr = try_with_capacity(m + 1)?;
        let mut colval = try_with_capacity(nnz)?;
        let mut nzval = try_with_capacity(nnz)?;
        let mut bv = try_with_capacity(m)?;
        bv.extend_from_slice(b);

        // marks the last row (plus one) in which each column was seen
        let mut lastrow = try_filled(nvar, 0usize)?;

        rowptr.push(0);
        let mut ptr = 0;
        for irow in 0..m {
            while ptr < nnz && rows[ptr] == irow {
                let col = cols[ptr];
                if lastrow[col] == irow + 1 {
                    return Err(ConstraintFormatError::DuplicateEntry { row: irow, col });
                }
                lastrow[col] = irow + 1;
                colval.push(col);
                nzval.push(coef[ptr]);
                ptr += 1;
            }
            rowptr.push(ptr);
        }

        Ok(Self {
            m,
            neq,
            nvar,
            rowptr,
            colval,
            nzval,
            b: bv,
        })
    }

    /// number of stored coefficients
    pub fn nnz(&self) -> usize {
        self.rowptr[self.m]
    }

    /// number of stored coefficients in row `k`
    pub fn row_nnz(&self, k: usize) -> usize {
        self.rowptr[k + 1] - self.rowptr[k]
    }

    /// largest number of stored coefficients in any row
    pub fn max_row_nnz(&self) -> usize {
        (0..self.m).map(|k| self.row_nnz(k)).max().unwrap_or(0)
    }

    #[cfg(feature = "serde")]
    pub(crate) fn rhs_mut(&mut self) -> &mut [T] {
        &mut self.b
    }

    /// Check that the internal data is consistently formatted.  Data
    /// assembled through the constructors always passes; this is intended
    /// for data obtained by deserialization.
    pub fn check_format(&self) -> Result<(), ConstraintFormatError> {
        if self.rowptr.len() != self.m + 1
            || self.b.len() != self.m
            || self.colval.len() != self.nzval.len()
            || self.rowptr.first() != Some(&0)
            || self.rowptr[self.m] != self.colval.len()
        {
            return Err(ConstraintFormatError::IncompatibleDimension);
        }
        if self.neq > self.m {
            return Err(ConstraintFormatError::BadEqualityCount {
                neq: self.neq,
                m: self.m,
            });
        }
        if self.rowptr.windows(2).any(|r| r[0] > r[1]) {
            return Err(ConstraintFormatError::BadRowOrdering);
        }
        if let Some(&c) = self.colval.iter().find(|&&c| c >= self.nvar) {
            return Err(ConstraintFormatError::BadColumnIndex(c));
        }
        let mut lastrow = vec![0usize; self.nvar];
        for k in 0..self.m {
            for &col in &self.colval[self.rowptr[k]..self.rowptr[k + 1]] {
                if lastrow[col] == k + 1 {
                    return Err(ConstraintFormatError::DuplicateEntry { row: k, col });
                }
                lastrow[col] = k + 1;
            }
        }
        Ok(())
    }
}

impl<T> ConstraintRows<T> for SparseConstraints<T>
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
        self.nvar
    }
    fn rhs(&self) -> &[T] {
        &self.b
    }
    fn row(&self, k: usize) -> RowView<'_, T> {
        let rng = self.rowptr[k]..self.rowptr[k + 1];
        RowView::Sparse {
            index: &self.colval[rng.clone()],
            coef: &self.nzval[rng],
        }
    }
}
