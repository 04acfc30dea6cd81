use crate::{
    error::{check_dimension, check_index, Error, Result},
    Matrix, Scalar,
};

/// Mutable staging area for a [`Matrix`].
///
/// Works like [`VectorBuilder`][crate::VectorBuilder], with `(row, column)` positions instead of
/// a single index. Both are 1-based.
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let mut builder = MatrixBuilder::new(2, 3).unwrap();
/// builder.put(1, 1, BigInt::from(1)).unwrap();
/// builder.put(2, 3, BigInt::from(6)).unwrap();
/// builder.nulls_to_element(BigInt::from(0));
/// let mat = builder.build().unwrap();
/// assert_eq!(format!("{:?}", mat), "[[1, 0, 0], [0, 0, 6]]");
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder<T> {
    rows: usize,
    columns: usize,
    /// Column-major, like [`Matrix`].
    elements: Vec<Option<T>>,
}

impl<T: Scalar> MatrixBuilder<T> {
    /// Creates a builder for a `rows`x`columns` matrix, with no element set yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either size is 0.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        check_dimension("row size", rows)?;
        check_dimension("column size", columns)?;
        Ok(Self {
            rows,
            columns,
            elements: vec![None; rows * columns],
        })
    }

    #[inline]
    pub fn row_size(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn column_size(&self) -> usize {
        self.columns
    }

    /// Sets the element in `row` and `column`, replacing any earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `row` is not in `[1, rows]` or `column` is not in
    /// `[1, columns]`.
    pub fn put(&mut self, row: usize, column: usize, value: T) -> Result<&mut Self> {
        check_index("row index", self.rows, row)?;
        check_index("column index", self.columns, column)?;
        self.elements[(column - 1) * self.rows + (row - 1)] = Some(value);
        Ok(self)
    }

    /// Sets every element to `value`.
    pub fn put_all(&mut self, value: T) -> &mut Self {
        self.elements.fill(Some(value));
        self
    }

    /// Sets every element that hasn't been set yet to `value`.
    pub fn nulls_to_element(&mut self, value: T) -> &mut Self {
        self.elements
            .iter_mut()
            .filter(|elem| elem.is_none())
            .for_each(|elem| *elem = Some(value.clone()));
        self
    }

    /// Returns a snapshot of the finished [`Matrix`].
    ///
    /// The builder stays usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteContainer`] if any element is still unset.
    pub fn build(&self) -> Result<Matrix<T>> {
        let missing = self.elements.iter().filter(|elem| elem.is_none()).count();
        if missing != 0 {
            return Err(Error::IncompleteContainer { missing });
        }
        let elements = self.elements.iter().flatten().cloned().collect();
        Ok(Matrix::from_column_major(self.rows, self.columns, elements))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    fn int(i: i64) -> BigInt {
        BigInt::from(i)
    }

    #[test]
    fn invalid_sizes() {
        assert_eq!(
            MatrixBuilder::<BigInt>::new(0, 2).unwrap_err(),
            Error::InvalidDimension {
                name: "row size",
                actual: 0
            }
        );
        assert_eq!(
            MatrixBuilder::<BigInt>::new(2, 0).unwrap_err(),
            Error::InvalidDimension {
                name: "column size",
                actual: 0
            }
        );
        assert_eq!(
            MatrixBuilder::<BigInt>::new(0, 0).unwrap_err().to_string(),
            "expected row size > 0 but actual 0"
        );
    }

    #[test]
    fn bounds() {
        let mut builder = MatrixBuilder::new(2, 3).unwrap();
        assert_eq!(
            builder.put(3, 1, int(0)).unwrap_err(),
            Error::IndexOutOfRange {
                name: "row index",
                max: 2,
                actual: 3
            }
        );
        assert_eq!(
            builder.put(1, 0, int(0)).unwrap_err(),
            Error::IndexOutOfRange {
                name: "column index",
                max: 3,
                actual: 0
            }
        );
        builder.put(2, 3, int(0)).unwrap();
    }

    #[test]
    fn incomplete() {
        let mut builder = MatrixBuilder::new(2, 2).unwrap();
        builder.put(1, 2, int(1)).unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            Error::IncompleteContainer { missing: 3 }
        );
    }

    #[test]
    fn layout() {
        let mut builder = MatrixBuilder::new(2, 2).unwrap();
        builder
            .put(1, 1, int(1))
            .unwrap()
            .put(1, 2, int(2))
            .unwrap()
            .put(2, 1, int(3))
            .unwrap()
            .put(2, 2, int(4))
            .unwrap();
        let mat = builder.build().unwrap();
        assert_eq!(mat[(1, 2)], int(2));
        assert_eq!(mat[(2, 1)], int(3));
    }

    #[test]
    fn build_is_a_snapshot() {
        let mut builder = MatrixBuilder::new(1, 2).unwrap();
        builder.put_all(int(0));
        let zero = builder.build().unwrap();
        builder.put(1, 1, int(5)).unwrap();
        let changed = builder.build().unwrap();
        assert_eq!(zero[(1, 1)], int(0));
        assert_eq!(changed[(1, 1)], int(5));
        assert_eq!(changed[(1, 2)], int(0));
    }
}
