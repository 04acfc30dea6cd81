//! Implementations of `std::ops`.

use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::{approx::ApproxEq, error::Result, Matrix, Scalar, Vector};

/// Unwraps the result of a shape-checked operation, panicking with its error message.
#[track_caller]
fn expect_shape<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

/// 1-based `(row, column)` element access.
///
/// # Panics
///
/// Panics if `row` or `column` is out of range. Use [`Matrix::get`] for a non-panicking variant.
impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.get(row, column) {
            Some(elem) => elem,
            None => panic!(
                "expected (row, column) in [1, {}]x[1, {}] but actual ({}, {})",
                self.row_size(),
                self.column_size(),
                row,
                column
            ),
        }
    }
}

impl<T> ApproxEq for Matrix<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: &Self::Tolerance) -> bool {
        self.rows == other.rows && self.elements[..].abs_diff_eq(&other.elements[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: &Self::Tolerance) -> bool {
        self.rows == other.rows && self.elements[..].rel_diff_eq(&other.elements[..], rel_tolerance)
    }
}

/// Element-wise negation.
impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the shapes differ.
impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn add(self, rhs: Self) -> Self::Output {
        expect_shape(Matrix::add(self, rhs))
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the shapes differ.
impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn sub(self, rhs: Self) -> Self::Output {
        expect_shape(self.subtract(rhs))
    }
}

/// Matrix * Matrix.
///
/// # Panics
///
/// Panics if the column size of `self` differs from the row size of `rhs`.
impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: Self) -> Self::Output {
        expect_shape(self.multiply(rhs))
    }
}

/// Matrix * Column Vector.
///
/// # Panics
///
/// Panics if the column size of `self` differs from the size of `rhs`.
impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        expect_shape(self.multiply_vector(rhs))
    }
}
