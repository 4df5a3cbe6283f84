#![allow(non_snake_case)]

use super::{ConstraintRows, DenseConstraints, SparseConstraints};
use crate::algebra::FloatT;
use std::fmt;

// Human readable listings of restrictions, one line per row:
//
//     2 : 1*turnover + -1*profit + -1*cost = 0
//
// using 1-based row numbers and, where no name is supplied, the
// surrogate variable name X<j> for 0-based variable index j.

impl<T> SparseConstraints<T>
where
    T: FloatT,
{
    /// Write a listing of the restrictions in `rows` to `out`.
    ///
    /// Variables are labelled from `names` where given, otherwise as
    /// `X<j>`.  Row numbers outside the restriction set are skipped.
    pub fn write_rows<W, S, I>(
        &self,
        out: &mut W,
        names: Option<&[S]>,
        rows: I,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
        S: AsRef<str>,
        I: IntoIterator<Item = usize>,
    {
        let m = self.nconstraints();
        let rows: Vec<usize> = rows.into_iter().filter(|&k| k < m).collect();

        writeln!(out, "Sparse numerical constraints.")?;
        writeln!(out, "  Variables   : {}", self.nvar())?;
        writeln!(out, "  Restrictions: {} (printing {})", m, rows.len())?;

        let mut line = String::new();
        for k in rows {
            line.clear();
            fmt_row(self, k, names, &mut line)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl<T: FloatT> fmt::Display for SparseConstraints<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sparse numerical constraints.")?;
        writeln!(f, "  Variables   : {}", self.nvar())?;
        writeln!(f, "  Restrictions: {}", self.nconstraints())?;
        fmt_all_rows(self, f)
    }
}

impl<T: FloatT> fmt::Display for DenseConstraints<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dense numerical constraints.")?;
        writeln!(f, "  Variables   : {}", self.nvar())?;
        writeln!(f, "  Restrictions: {}", self.nconstraints())?;
        fmt_all_rows(self, f)
    }
}

fn fmt_all_rows<T, C>(c: &C, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: FloatT,
    C: ConstraintRows<T>,
{
    for k in 0..c.nconstraints() {
        fmt_row::<T, C, &str, _>(c, k, None, f)?;
        writeln!(f)?;
    }
    Ok(())
}

fn fmt_row<T, C, S, W>(c: &C, k: usize, names: Option<&[S]>, out: &mut W) -> fmt::Result
where
    T: FloatT,
    C: ConstraintRows<T>,
    S: AsRef<str>,
    W: fmt::Write,
{
    write!(out, "{:>3} : ", k + 1)?;

    let row = c.row(k);
    if row.nnz() == 0 {
        write!(out, "0")?;
    }
    for (i, (j, a)) in row.iter().enumerate() {
        if i > 0 {
            write!(out, " + ")?;
        }
        match names.and_then(|names| names.get(j)) {
            Some(name) => write!(out, "{}*{}", a, name.as_ref())?,
            None => write!(out, "{}*X{}", a, j)?,
        }
    }

    let op = if c.is_equality(k) { "=" } else { "<=" };

    // no "-0" in the output
    let b = c.rhs()[k];
    let b = if b == T::zero() { T::zero() } else { b };
    write!(out, " {op} {b}")
}
