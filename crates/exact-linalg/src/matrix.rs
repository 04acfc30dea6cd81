use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    error::{check_dimension, check_index, Error, NotSquare, Result},
    sqrt::{sqrt_non_negative, SquareRootContext},
    traits::{max_non_negative, sum, ComplexBigDecimal, ComplexBigInt, RealScalar},
    Scalar, Vector,
};

mod builder;
mod determinant;
mod ops;

pub use builder::MatrixBuilder;

/// A matrix of arbitrary-precision integers.
pub type IntMatrix = Matrix<BigInt>;
/// A matrix of arbitrary-precision decimals.
pub type DecimalMatrix = Matrix<BigDecimal>;
/// A matrix of complex numbers with integer parts.
pub type ComplexIntMatrix = Matrix<ComplexBigInt>;
/// A matrix of complex numbers with decimal parts.
pub type ComplexDecimalMatrix = Matrix<ComplexBigDecimal>;

/// An immutable matrix with at least one row and one column.
///
/// Elements are addressed by 1-based `(row, column)` pairs. Matrices are stored in column-major
/// order, and every matrix is produced by a [`MatrixBuilder`] (directly, or through
/// [`Matrix::from_rows`], [`Matrix::from_fn`] and the factory functions).
///
/// Like [`Vector`], the shape-checking operations return [`Result`]s, while the equivalent
/// `std::ops` operators on references panic.
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let mat = Matrix::from_rows([
///     [1, 2],
///     [3, 4],
/// ].map(|row| row.map(BigInt::from))).unwrap();
///
/// assert_eq!(mat[(1, 2)], BigInt::from(2));
/// assert_eq!(mat.determinant(), Ok(BigInt::from(-2)));
/// assert_eq!(format!("{:?}", mat.transpose()), "[[1, 3], [2, 4]]");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    elements: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix from validated, column-major elements.
    pub(crate) fn from_column_major(rows: usize, columns: usize, elements: Vec<T>) -> Self {
        debug_assert!(rows > 0 && columns > 0);
        debug_assert_eq!(elements.len(), rows * columns);
        Self {
            rows,
            columns,
            elements,
        }
    }

    /// Creates a matrix from a list of rows.
    ///
    /// The column size is the length of the first row.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if there are no rows, or the first row is empty.
    /// - [`Error::IndexOutOfRange`] if a later row is longer than the first.
    /// - [`Error::IncompleteContainer`] if a later row is shorter than the first.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let columns = rows.first().map_or(0, Vec::len);
        let mut builder = MatrixBuilder::new(rows.len(), columns)?;
        for (i, row) in rows.into_iter().enumerate() {
            for (j, elem) in row.into_iter().enumerate() {
                builder.put(i + 1, j + 1, elem)?;
            }
        }
        builder.build()
    }

    /// Creates a `rows`x`columns` matrix, calling `f` with each 1-based `(row, column)` pair to
    /// compute the element there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either size is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let mat = Matrix::from_fn(3, 3, |i, j| BigInt::from(i * 10 + j)).unwrap();
    /// assert_eq!(mat[(2, 3)], BigInt::from(23));
    /// ```
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut builder = MatrixBuilder::new(rows, columns)?;
        for col in 1..=columns {
            for row in 1..=rows {
                builder.put(row, col, f(row, col))?;
            }
        }
        builder.build()
    }

    /// Returns the number of rows.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_size(&self) -> usize {
        self.columns
    }

    /// Returns a reference to the element in `row` and `column`, or [`None`] if either is out of
    /// range.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row == 0 || row > self.rows || column == 0 || column > self.columns {
            return None;
        }
        Some(self.at(row, column))
    }

    /// Unchecked 1-based access for coordinates known to be in range.
    #[inline]
    fn at(&self, row: usize, column: usize) -> &T {
        &self.elements[(column - 1) * self.rows + (row - 1)]
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self::from_column_major(self.rows, self.columns, self.elements.iter().map(f).collect())
    }

    fn zip_with<F>(&self, other: &Self, operand: &'static str, mut f: F) -> Result<Self>
    where
        F: FnMut(&T, &T) -> T,
    {
        if self.rows != other.rows {
            return Err(Error::RowSizeMismatch {
                operand,
                expected: self.rows,
                actual: other.rows,
            });
        }
        if self.columns != other.columns {
            return Err(Error::ColumnSizeMismatch {
                operand,
                expected: self.columns,
                actual: other.columns,
            });
        }
        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Self::from_column_major(self.rows, self.columns, elements))
    }

    /// Element-wise sum of `self` and `summand`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowSizeMismatch`] or [`Error::ColumnSizeMismatch`] if the shapes differ.
    pub fn add(&self, summand: &Self) -> Result<Self> {
        self.zip_with(summand, "summand", T::add)
    }

    /// Element-wise difference of `self` and `subtrahend`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowSizeMismatch`] or [`Error::ColumnSizeMismatch`] if the shapes differ.
    pub fn subtract(&self, subtrahend: &Self) -> Result<Self> {
        self.zip_with(subtrahend, "subtrahend", T::subtract)
    }

    /// Computes the matrix product `self * factor`.
    ///
    /// The result has `self.row_size()` rows and `factor.column_size()` columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `self.column_size() != factor.row_size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let a = Matrix::from_rows([[1, 2, 3]].map(|row| row.map(BigInt::from))).unwrap();
    /// let b = Matrix::from_rows([[4], [5], [6]].map(|row| row.map(BigInt::from))).unwrap();
    /// assert_eq!(format!("{:?}", a.multiply(&b).unwrap()), "[[32]]");
    /// assert_eq!(b.multiply(&a).unwrap().row_size(), 3);
    /// ```
    pub fn multiply(&self, factor: &Self) -> Result<Self> {
        if self.columns != factor.rows {
            return Err(Error::DimensionMismatch {
                operand: "factor",
                expected: self.columns,
                actual: factor.rows,
            });
        }
        let mut elements = Vec::with_capacity(self.rows * factor.columns);
        for col in 1..=factor.columns {
            for row in 1..=self.rows {
                elements.push(sum(
                    (1..=self.columns).map(|k| self.at(row, k).multiply(factor.at(k, col))),
                ));
            }
        }
        Ok(Self::from_column_major(self.rows, factor.columns, elements))
    }

    /// Computes the matrix-vector product `self * vector`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `self.column_size() != vector.size()`.
    pub fn multiply_vector(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        if self.columns != vector.size() {
            return Err(Error::DimensionMismatch {
                operand: "vector",
                expected: self.columns,
                actual: vector.size(),
            });
        }
        let elements = (1..=self.rows)
            .map(|row| {
                sum(vector
                    .iter()
                    .enumerate()
                    .map(|(k, elem)| self.at(row, k + 1).multiply(elem)))
            })
            .collect();
        Ok(Vector::from_vec(elements))
    }

    /// Multiplies every element with `scalar`.
    pub fn scalar_multiply(&self, scalar: &T) -> Self {
        self.map(|elem| elem.multiply(scalar))
    }

    /// Negates every element.
    pub fn negate(&self) -> Self {
        self.map(T::negate)
    }

    /// Returns the transpose of `self`, a `column_size()`x`row_size()` matrix.
    pub fn transpose(&self) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len());
        for row in 1..=self.rows {
            for col in 1..=self.columns {
                elements.push(self.at(row, col).clone());
            }
        }
        Self::from_column_major(self.columns, self.rows, elements)
    }

    /// Returns the conjugate transpose of `self`.
    ///
    /// For real domains, this is the same as [`Matrix::transpose`].
    pub fn conjugate_transpose(&self) -> Self {
        self.transpose().map(T::conjugate)
    }

    /// Returns the matrix obtained by deleting `row` and `column` from `self`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] if `row` or `column` is out of range.
    /// - [`Error::InvalidDimension`] if `self` has only one row or one column, since the result
    ///   would be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let mat = Matrix::from_fn(3, 3, |i, j| BigInt::from(i * 10 + j)).unwrap();
    /// assert_eq!(format!("{:?}", mat.minor(2, 1).unwrap()), "[[12, 13], [32, 33]]");
    /// ```
    pub fn minor(&self, row: usize, column: usize) -> Result<Self> {
        check_index("row index", self.rows, row)?;
        check_index("column index", self.columns, column)?;
        check_dimension("row size", self.rows - 1)?;
        check_dimension("column size", self.columns - 1)?;

        let elements = (1..=self.columns)
            .filter(|&col| col != column)
            .flat_map(|col| {
                (1..=self.rows)
                    .filter(|&r| r != row)
                    .map(move |r| self.at(r, col).clone())
            })
            .collect();
        Ok(Self::from_column_major(self.rows - 1, self.columns - 1, elements))
    }

    /// Returns the elements on the main diagonal, from `(1, 1)` on.
    ///
    /// For non-square matrices, this stops at the last row or column, whichever comes first.
    pub fn diagonal_elements(&self) -> Vector<T> {
        let n = self.rows.min(self.columns);
        Vector::from_vec((1..=n).map(|i| self.at(i, i).clone()).collect())
    }

    fn check_square(&self) -> Result<(), NotSquare> {
        if self.is_square() {
            Ok(())
        } else {
            Err(NotSquare {
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Returns the sum of the diagonal elements.
    ///
    /// # Errors
    ///
    /// Returns [`NotSquare`] if the matrix is not square.
    pub fn trace(&self) -> Result<T, NotSquare> {
        self.check_square()?;
        Ok(sum((1..=self.rows).map(|i| self.at(i, i).clone())))
    }

    /// Returns `true` if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns `true` if the matrix is square and every element below the diagonal is zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square() && self.positions().all(|(i, j)| i <= j || self.at(i, j).is_zero())
    }

    /// Returns `true` if the matrix is square and every element above the diagonal is zero.
    pub fn is_lower_triangular(&self) -> bool {
        self.is_square() && self.positions().all(|(i, j)| i >= j || self.at(i, j).is_zero())
    }

    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// Returns `true` if the matrix is square and every element off the diagonal is zero.
    pub fn is_diagonal(&self) -> bool {
        self.is_square() && self.positions().all(|(i, j)| i == j || self.at(i, j).is_zero())
    }

    /// Returns `true` if the matrix is square, with ones on the diagonal and zeroes elsewhere.
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && self.positions().all(|(i, j)| {
                let elem = self.at(i, j);
                if i == j {
                    elem.is_one()
                } else {
                    elem.is_zero()
                }
            })
    }

    /// Returns `true` if the matrix is equal to its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.positions().all(|(i, j)| self.at(i, j) == self.at(j, i))
    }

    /// Returns `true` if the matrix is equal to its negated transpose.
    ///
    /// This implies that the diagonal is zero.
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && self
                .positions()
                .all(|(i, j)| *self.at(i, j) == self.at(j, i).negate())
    }

    /// Returns `true` if the matrix has an inverse *within its domain*.
    ///
    /// The matrix has to be square, and its determinant has to be a unit of the domain (see
    /// [`Scalar::is_unit`]). For integer matrices this means a determinant of `1` or `-1`, since
    /// the inverse of any other matrix has non-integer entries. Decimal matrices only need a
    /// non-zero determinant.
    ///
    /// This computes the determinant, so it has the same cost.
    pub fn is_invertible(&self) -> bool {
        match self.determinant() {
            Ok(det) => det.is_unit(),
            Err(_) => false,
        }
    }

    /// Returns the largest sum of absolute values of any column (the *1-norm*).
    pub fn max_abs_column_sum_norm(&self, ctx: &SquareRootContext) -> T::Abs {
        max_non_negative(
            self.elements
                .chunks(self.rows)
                .map(|column| sum(column.iter().map(|elem| elem.abs(ctx)))),
        )
    }

    /// Returns the largest sum of absolute values of any row (the *infinity norm*).
    pub fn max_abs_row_sum_norm(&self, ctx: &SquareRootContext) -> T::Abs {
        max_non_negative(
            (1..=self.rows)
                .map(|row| sum((1..=self.columns).map(|col| self.at(row, col).abs(ctx)))),
        )
    }

    /// Returns the square of the Frobenius norm, the sum of `|a|²` over all elements.
    ///
    /// This is always exact.
    pub fn frobenius_norm_pow2(&self) -> T::Real {
        sum(self.elements.iter().map(T::abs_pow2))
    }

    /// Returns the Frobenius norm, approximated under `ctx`.
    pub fn frobenius_norm(&self, ctx: &SquareRootContext) -> BigDecimal {
        sqrt_non_negative(&self.frobenius_norm_pow2().to_decimal(), ctx)
    }

    /// Returns the largest absolute value of any element.
    pub fn max_norm(&self, ctx: &SquareRootContext) -> T::Abs {
        max_non_negative(self.elements.iter().map(|elem| elem.abs(ctx)))
    }

    /// All 1-based `(row, column)` pairs, row by row.
    fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.columns;
        (1..=self.rows).flat_map(move |i| (1..=columns).map(move |j| (i, j)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a Matrix<T>, usize);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mat = self.0;
                write!(f, "[")?;
                for col in 0..mat.columns {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", mat.elements[col * mat.rows + self.1])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}
