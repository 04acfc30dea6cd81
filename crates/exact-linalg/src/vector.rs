use std::{fmt, slice};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    error::{Error, Result},
    sqrt::{sqrt_non_negative, SquareRootContext},
    traits::{max_non_negative, sum, ComplexBigDecimal, ComplexBigInt, RealScalar},
    Scalar,
};

mod builder;
mod ops;

pub use builder::VectorBuilder;

/// A vector of arbitrary-precision integers.
pub type IntVector = Vector<BigInt>;
/// A vector of arbitrary-precision decimals.
pub type DecimalVector = Vector<BigDecimal>;
/// A vector of complex numbers with integer parts.
pub type ComplexIntVector = Vector<ComplexBigInt>;
/// A vector of complex numbers with decimal parts.
pub type ComplexDecimalVector = Vector<ComplexBigDecimal>;

/// An immutable column vector with at least one element of type `T`.
///
/// # Construction
///
/// Every vector goes through a [`VectorBuilder`], which checks that each index is set exactly
/// once:
///
/// - [`VectorBuilder`] allows setting elements one by one, or filling them all at once.
/// - [`Vector::from_elements`] creates a vector from an iterator.
/// - [`zero_vector`][crate::zero_vector] and [`unit_vector`][crate::unit_vector] create vectors
///   of all-zeroes and standard basis vectors.
///
/// # Element Access
///
/// Indices are 1-based, matching common mathematical notation. [`Vector`] implements [`Index`]
/// for `usize`, which panics when the index is out of range; [`Vector::get`] returns an
/// [`Option`] instead.
///
/// ```
/// # use exact_linalg::*;
/// let v = Vector::from_elements([1, 2, 3].map(BigInt::from)).unwrap();
/// assert_eq!(v[1], BigInt::from(1));
/// assert_eq!(v.get(3), Some(&BigInt::from(3)));
/// assert_eq!(v.get(0), None);
/// assert_eq!(v.get(4), None);
/// ```
///
/// # Arithmetic
///
/// All operations return new vectors. Binary operations require both operands to have the same
/// size and return [`Error::SizeMismatch`] otherwise. The `std::ops` operators are also
/// implemented for references, and panic on mismatched sizes instead.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T>(Vec<T>);

impl<T: Scalar> Vector<T> {
    /// Creates a vector from already validated elements.
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        debug_assert!(!elements.is_empty());
        Self(elements)
    }

    /// Creates a [`Vector`] from a sequence of elements, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `elements` is empty.
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter().collect::<Vec<_>>();
        let mut builder = VectorBuilder::new(elements.len())?;
        for (i, elem) in elements.into_iter().enumerate() {
            builder.put(i + 1, elem)?;
        }
        builder.build()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns a reference to the element at the 1-based `index`, or [`None`] if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        index.checked_sub(1).and_then(|i| self.0.get(i))
    }

    /// Returns an iterator over the elements, starting at index 1.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns the elements as a slice (0-based, like every slice).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let v = Vector::from_elements([1, 2, 3].map(BigInt::from)).unwrap();
    /// let halves = v.map(|i| BigDecimal::new(i.clone(), 1) * BigDecimal::from(5));
    /// assert_eq!(halves[2], BigDecimal::from(1));
    /// ```
    pub fn map<U: Scalar, F>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector(self.0.iter().map(f).collect())
    }

    /// Combines `self` and `other` element-wise, after checking that their sizes match.
    fn zip_with<F>(&self, other: &Self, operand: &'static str, mut f: F) -> Result<Self>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.check_size(other, operand)?;
        Ok(Vector(
            self.0.iter().zip(&other.0).map(|(a, b)| f(a, b)).collect(),
        ))
    }

    fn check_size(&self, other: &Self, operand: &'static str) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::SizeMismatch {
                operand,
                expected: self.size(),
                actual: other.size(),
            });
        }
        Ok(())
    }

    /// Element-wise sum of `self` and `summand`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the sizes differ.
    pub fn add(&self, summand: &Self) -> Result<Self> {
        self.zip_with(summand, "summand", T::add)
    }

    /// Element-wise difference of `self` and `subtrahend`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the sizes differ.
    pub fn subtract(&self, subtrahend: &Self) -> Result<Self> {
        self.zip_with(subtrahend, "subtrahend", T::subtract)
    }

    /// Multiplies every element with `scalar`.
    pub fn scalar_multiply(&self, scalar: &T) -> Self {
        self.map(|elem| elem.multiply(scalar))
    }

    /// Negates every element.
    ///
    /// This is equivalent to `self.scalar_multiply(&T::one().negate())`.
    pub fn negate(&self) -> Self {
        self.map(T::negate)
    }

    /// Conjugates every element (a no-op for real domains).
    pub fn conjugate(&self) -> Self {
        self.map(T::conjugate)
    }

    /// Computes the dot product `Σ aᵢbᵢ` of `self` and `other`.
    ///
    /// For complex domains this is the bilinear form: neither operand is conjugated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the sizes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let a = Vector::from_elements([1, 3, -5].map(BigInt::from)).unwrap();
    /// let b = Vector::from_elements([4, -2, -1].map(BigInt::from)).unwrap();
    /// assert_eq!(a.dot_product(&b).unwrap(), BigInt::from(3));
    /// ```
    pub fn dot_product(&self, other: &Self) -> Result<T> {
        self.check_size(other, "other")?;
        Ok(sum(self.0.iter().zip(&other.0).map(|(a, b)| a.multiply(b))))
    }

    /// Returns the *taxicab norm* `Σ|aᵢ|`.
    ///
    /// `ctx` is only used by complex domains, where absolute values are square roots.
    pub fn taxicab_norm(&self, ctx: &SquareRootContext) -> T::Abs {
        sum(self.0.iter().map(|elem| elem.abs(ctx)))
    }

    /// Returns the square of the *Euclidean norm*, `Σ|aᵢ|²`, computed exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let v = Vector::from_elements([3, 4].map(BigInt::from)).unwrap();
    /// assert_eq!(v.euclidean_norm_pow2(), BigInt::from(25));
    /// ```
    pub fn euclidean_norm_pow2(&self) -> T::Real {
        sum(self.0.iter().map(T::abs_pow2))
    }

    /// Returns the *Euclidean norm* `√(Σ|aᵢ|²)`, approximated under `ctx`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exact_linalg::*;
    /// let ctx = SquareRootContext::default();
    /// let v = Vector::from_elements([3, 4].map(BigInt::from)).unwrap();
    /// assert_approx_eq!(v.euclidean_norm(&ctx), BigDecimal::from(5));
    /// ```
    pub fn euclidean_norm(&self, ctx: &SquareRootContext) -> BigDecimal {
        sqrt_non_negative(&self.euclidean_norm_pow2().to_decimal(), ctx)
    }

    /// Returns the *maximum norm* `max |aᵢ|`.
    ///
    /// `ctx` is only used by complex domains, where absolute values are square roots.
    pub fn max_norm(&self, ctx: &SquareRootContext) -> T::Abs {
        max_non_negative(self.0.iter().map(|elem| elem.abs(ctx)))
    }

    /// Returns the taxicab distance between `self` and `other`, the taxicab norm of their
    /// difference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the sizes differ.
    pub fn taxicab_distance(&self, other: &Self, ctx: &SquareRootContext) -> Result<T::Abs> {
        Ok(self.difference(other)?.taxicab_norm(ctx))
    }

    /// Returns the Euclidean distance between `self` and `other`, approximated under `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the sizes differ.
    pub fn euclidean_distance(&self, other: &Self, ctx: &SquareRootContext) -> Result<BigDecimal> {
        Ok(self.difference(other)?.euclidean_norm(ctx))
    }

    /// Returns the maximum distance between `self` and `other`, the largest absolute difference
    /// of corresponding elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the sizes differ.
    pub fn max_distance(&self, other: &Self, ctx: &SquareRootContext) -> Result<T::Abs> {
        Ok(self.difference(other)?.max_norm(ctx))
    }

    fn difference(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "other", T::subtract)
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
