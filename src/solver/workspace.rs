use crate::algebra::*;
use std::collections::TryReserveError;

// Scratch state of a single solve call.  Dropped on every exit path,
// so nothing is carried over between solves.
pub(crate) struct SpaWorkspace<T> {
    /// inverse weights, one per variable
    pub xw: Vec<T>,
    /// row curvatures `Σ a_j² xw_j`
    pub awa: Vec<T>,
    /// accumulated inequality multipliers
    pub alpha: Vec<T>,
    /// scaled row residuals of the last sweep
    pub conv: Vec<T>,
}

impl<T> SpaWorkspace<T>
where
    T: FloatT,
{
    pub fn try_new(nvar: usize, m: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            xw: try_filled(nvar, T::zero())?,
            awa: try_filled(m, T::zero())?,
            alpha: try_filled(m, T::zero())?,
            conv: try_filled(m, T::zero())?,
        })
    }
}
