use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned when assembling constraint storage.
pub enum ConstraintFormatError {
    /// Triplet arrays, matrix dimensions and/or right hand side lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Row indices of the triplet data are not sorted in increasing order
    #[error("Triplet data is not sorted by row index")]
    BadRowOrdering,
    #[error("Row index {0} exceeds the number of constraints")]
    /// Row index exceeds the number of right hand side values
    BadRowIndex(usize),
    #[error("Column index {0} exceeds the number of variables")]
    /// Column index exceeds an explicitly specified number of variables
    BadColumnIndex(usize),
    /// A variable appears more than once in the same constraint row
    #[error("Variable {col} appears more than once in row {row}")]
    DuplicateEntry { row: usize, col: usize },
    /// More equality rows than constraints
    #[error("Number of equalities {neq} exceeds the number of constraints {m}")]
    BadEqualityCount { neq: usize, m: usize },
    /// Storage for the constraint rows could not be allocated
    #[error("Could not allocate enough memory for constraint storage")]
    AllocationFailure,
}

impl From<std::collections::TryReserveError> for ConstraintFormatError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ConstraintFormatError::AllocationFailure
    }
}

/// Error type returned by constraint arithmetic on vectors of the wrong size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("Vector has length {found}, expected {expected}")]
    /// The vector length does not match the constraint dimension
    IncompatibleDimension { expected: usize, found: usize },
    #[error("Row index {0} exceeds the number of constraints")]
    /// A row index is not below the number of constraints
    BadRowIndex(usize),
}

pub(crate) fn check_dim(expected: usize, found: usize) -> Result<(), DimensionError> {
    if expected == found {
        Ok(())
    } else {
        Err(DimensionError::IncompatibleDimension { expected, found })
    }
}
