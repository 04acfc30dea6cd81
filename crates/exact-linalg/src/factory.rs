//! Constructors for common vectors and matrices.
//!
//! These are thin wrappers around [`VectorBuilder`] and [`MatrixBuilder`], so they report the
//! same errors for invalid sizes.

use crate::{error::Result, Matrix, MatrixBuilder, Scalar, Vector, VectorBuilder};

/// Creates a vector of `size` zeroes.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`][crate::Error::InvalidDimension] if `size` is 0.
pub fn zero_vector<T: Scalar>(size: usize) -> Result<Vector<T>> {
    VectorBuilder::new(size)?.put_all(T::zero()).build()
}

/// Creates the standard basis vector of length `size` with a one at `index` and zeroes
/// elsewhere.
///
/// # Errors
///
/// - [`Error::InvalidDimension`][crate::Error::InvalidDimension] if `size` is 0.
/// - [`Error::IndexOutOfRange`][crate::Error::IndexOutOfRange] if `index` is not in `[1, size]`.
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let e2 = unit_vector::<BigInt>(3, 2).unwrap();
/// assert_eq!(format!("{:?}", e2), "(0, 1, 0)");
/// ```
pub fn unit_vector<T: Scalar>(size: usize, index: usize) -> Result<Vector<T>> {
    VectorBuilder::new(size)?
        .put(index, T::one())?
        .nulls_to_element(T::zero())
        .build()
}

/// Creates a `rows`x`columns` matrix of zeroes.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`][crate::Error::InvalidDimension] if either size is 0.
pub fn zero_matrix<T: Scalar>(rows: usize, columns: usize) -> Result<Matrix<T>> {
    MatrixBuilder::new(rows, columns)?.put_all(T::zero()).build()
}

/// Creates the `size`x`size` identity matrix.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`][crate::Error::InvalidDimension] if `size` is 0.
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let id = identity_matrix::<BigDecimal>(2).unwrap();
/// assert!(id.is_identity());
/// assert_eq!(id.trace(), Ok(BigDecimal::from(2)));
/// ```
pub fn identity_matrix<T: Scalar>(size: usize) -> Result<Matrix<T>> {
    let mut builder = MatrixBuilder::new(size, size)?;
    for i in 1..=size {
        builder.put(i, i, T::one())?;
    }
    builder.nulls_to_element(T::zero()).build()
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_complex::Complex;

    use crate::{ComplexBigInt, Error};

    use super::*;

    #[test]
    fn vectors() {
        let zero = zero_vector::<BigInt>(3).unwrap();
        assert_eq!(zero.size(), 3);
        assert!(zero.iter().all(|elem| elem == &BigInt::from(0)));

        let e1 = unit_vector::<ComplexBigInt>(2, 1).unwrap();
        assert_eq!(e1[1], Complex::new(BigInt::from(1), BigInt::from(0)));
        assert_eq!(e1[2], Complex::new(BigInt::from(0), BigInt::from(0)));

        assert_eq!(
            unit_vector::<BigInt>(2, 3).unwrap_err(),
            Error::IndexOutOfRange {
                name: "index",
                max: 2,
                actual: 3
            }
        );
        assert!(zero_vector::<BigInt>(0).is_err());
    }

    #[test]
    fn matrices() {
        let zero = zero_matrix::<BigInt>(2, 3).unwrap();
        assert_eq!(format!("{:?}", zero), "[[0, 0, 0], [0, 0, 0]]");
        assert!(!zero.is_diagonal());

        let id = identity_matrix::<BigInt>(3).unwrap();
        assert_eq!(format!("{:?}", id), "[[1, 0, 0], [0, 1, 0], [0, 0, 1]]");
        assert!(id.is_identity());
        assert!(id.is_invertible());

        assert_eq!(
            zero_matrix::<BigInt>(2, 0).unwrap_err(),
            Error::InvalidDimension {
                name: "column size",
                actual: 0
            }
        );
        assert!(identity_matrix::<BigInt>(0).is_err());
    }
}
