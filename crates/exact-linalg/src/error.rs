//! Error types.

use thiserror::Error;

/// Convenience alias for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by container construction and by the vector and matrix operations.
///
/// Every variant names the offending operand or argument (eg. `"summand"`, `"factor"`,
/// `"row size"`), so the message alone identifies which input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A declared size is not at least 1.
    #[error("expected {name} > 0 but actual {actual}")]
    InvalidDimension { name: &'static str, actual: usize },

    /// An index lies outside `[1, max]`.
    #[error("expected {name} in [1, {max}] but actual {actual}")]
    IndexOutOfRange {
        name: &'static str,
        max: usize,
        actual: usize,
    },

    /// Two vectors of different size were combined.
    #[error("{operand}: expected equal sizes but actual {expected} != {actual}")]
    SizeMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Two matrices with a different number of rows were combined element-wise.
    #[error("{operand}: expected equal row sizes but actual {expected} != {actual}")]
    RowSizeMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Two matrices with a different number of columns were combined element-wise.
    #[error("{operand}: expected equal column sizes but actual {expected} != {actual}")]
    ColumnSizeMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The column size of the left operand of a product does not match the size of the right one.
    #[error("{operand}: expected column size == {operand} size but actual {expected} != {actual}")]
    DimensionMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A builder was finalized while some positions were still unset.
    #[error("expected all elements to be set but {missing} missing")]
    IncompleteContainer { missing: usize },

    /// An argument has a value outside of its domain.
    #[error("invalid {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A trace or determinant result was unwrapped for a non-square matrix.
    #[error(transparent)]
    NotSquare(#[from] NotSquare),
}

/// Failure value of [`Matrix::trace`] and [`Matrix::determinant`] for non-square matrices.
///
/// This is kept separate from [`Error`] so that batch computations can inspect the outcome for
/// each matrix without going through the general error path. It converts into
/// [`Error::NotSquare`] via `?`.
///
/// [`Matrix::trace`]: crate::Matrix::trace
/// [`Matrix::determinant`]: crate::Matrix::determinant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("matrix is not square, actual {rows}x{columns}")]
pub struct NotSquare {
    pub rows: usize,
    pub columns: usize,
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Checks that `actual` is a valid 1-based index into a dimension of size `max`.
pub(crate) fn check_index(name: &'static str, max: usize, actual: usize) -> Result<()> {
    if actual == 0 || actual > max {
        return Err(Error::IndexOutOfRange { name, max, actual });
    }
    Ok(())
}

/// Checks that a declared size is at least 1.
pub(crate) fn check_dimension(name: &'static str, actual: usize) -> Result<()> {
    if actual == 0 {
        return Err(Error::InvalidDimension { name, actual });
    }
    Ok(())
}
