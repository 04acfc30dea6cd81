//! Determinants by closed form and by permutation expansion.

use itertools::Itertools;

use crate::{error::NotSquare, Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Computes the determinant of a square matrix.
    ///
    /// Matrices up to 3x3 use the closed-form rules. Larger ones use the Leibniz formula
    ///
    /// > det(M) = Σ<sub>σ</sub> sgn(σ) · Π<sub>i</sub> M<sub>σ(i), i</sub>
    ///
    /// summing over all `n!` permutations of the row indices. This takes factorial time and is
    /// only practical for small matrices, but is exact in every domain since it only adds and
    /// multiplies.
    ///
    /// # Errors
    ///
    /// Returns [`NotSquare`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let mat = Matrix::from_fn(4, 4, |i, j| BigInt::from(if i == j { 2 } else { 1 })).unwrap();
    /// assert_eq!(mat.determinant(), Ok(BigInt::from(5)));
    ///
    /// let wide = Matrix::from_fn(2, 3, |_, _| BigInt::from(0)).unwrap();
    /// assert!(wide.determinant().is_err());
    /// ```
    pub fn determinant(&self) -> Result<T, NotSquare> {
        self.check_square()?;

        let m = |row, col| self.at(row, col);
        let det = match self.row_size() {
            1 => m(1, 1).clone(),
            2 => m(1, 1).multiply(m(2, 2)).subtract(&m(1, 2).multiply(m(2, 1))),
            3 => {
                let positive = [(1, 2, 3), (2, 3, 1), (3, 1, 2)];
                let negative = [(3, 2, 1), (1, 3, 2), (2, 1, 3)];
                let term = |(a, b, c): (usize, usize, usize)| {
                    m(a, 1).multiply(m(b, 2)).multiply(m(c, 3))
                };
                let plus = positive.into_iter().map(term).fold(T::zero(), |acc, t| acc.add(&t));
                negative
                    .into_iter()
                    .map(term)
                    .fold(plus, |acc, t| acc.subtract(&t))
            }
            n => self.leibniz(n),
        };
        Ok(det)
    }

    fn leibniz(&self, n: usize) -> T {
        log::debug!("expanding {n}x{n} determinant over all permutations");
        let mut terms = 0usize;
        let det = (1..=n)
            .permutations(n)
            .fold(T::zero(), |acc, sigma| {
                terms += 1;
                let product = sigma
                    .iter()
                    .enumerate()
                    .fold(T::one(), |acc, (i, &row)| acc.multiply(self.at(row, i + 1)));
                if inversions(&sigma) % 2 == 0 {
                    acc.add(&product)
                } else {
                    acc.subtract(&product)
                }
            });
        log::trace!("summed {terms} determinant terms");
        det
    }
}

/// Counts the pairs `i < j` with `sigma[i] > sigma[j]`.
fn inversions(sigma: &[usize]) -> usize {
    sigma
        .iter()
        .enumerate()
        .map(|(i, a)| sigma[i + 1..].iter().filter(|&b| a > b).count())
        .sum()
}
