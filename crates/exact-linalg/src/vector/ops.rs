//! Implementations of `std::ops`.
//!
//! The binary operators panic where the corresponding [`Vector`] method would return an error.

use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::{approx::ApproxEq, Scalar};

use super::Vector;

/// 1-based element access.
///
/// # Panics
///
/// Panics if `index` is not in `[1, size]`. Use [`Vector::get`] for a non-panicking variant.
impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(elem) => elem,
            None => panic!(
                "expected index in [1, {}] but actual {}",
                self.size(),
                index
            ),
        }
    }
}

impl<T> ApproxEq for Vector<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: &Self::Tolerance) -> bool {
        self.0[..].abs_diff_eq(&other.0[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: &Self::Tolerance) -> bool {
        self.0[..].rel_diff_eq(&other.0[..], rel_tolerance)
    }
}

/// Element-wise negation.
impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the sizes differ.
impl<T: Scalar> Add for &Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn add(self, rhs: Self) -> Self::Output {
        match Vector::add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the sizes differ.
impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn sub(self, rhs: Self) -> Self::Output {
        match self.subtract(rhs) {
            Ok(difference) => difference,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Scalar multiplication.
impl<T: Scalar> Mul<&T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &T) -> Self::Output {
        self.scalar_multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use num_bigint::BigInt;

    use crate::{assert_approx_eq, assert_approx_ne};

    use super::*;

    fn ints(elements: &[i64]) -> Vector<BigInt> {
        Vector::from_elements(elements.iter().map(|&i| BigInt::from(i))).unwrap()
    }

    fn decs(elements: &[&str]) -> Vector<BigDecimal> {
        Vector::from_elements(elements.iter().map(|s| s.parse::<BigDecimal>().unwrap())).unwrap()
    }

    #[test]
    fn index() {
        let v = ints(&[4, 5, 6]);
        assert_eq!(v[1], BigInt::from(4));
        assert_eq!(v[3], BigInt::from(6));
    }

    #[test]
    #[should_panic(expected = "expected index in [1, 3] but actual 0")]
    fn index_zero() {
        let _ = &ints(&[4, 5, 6])[0];
    }

    #[test]
    #[should_panic(expected = "expected index in [1, 3] but actual 4")]
    fn index_past_end() {
        let _ = &ints(&[4, 5, 6])[4];
    }

    #[test]
    fn operators() {
        let a = ints(&[1, 2]);
        let b = ints(&[3, -5]);
        assert_eq!(&a + &b, ints(&[4, -3]));
        assert_eq!(&a - &b, ints(&[-2, 7]));
        assert_eq!(-&a, ints(&[-1, -2]));
        assert_eq!(&b * &BigInt::from(2), ints(&[6, -10]));
    }

    #[test]
    #[should_panic(expected = "summand: expected equal sizes but actual 2 != 1")]
    fn add_mismatch() {
        let _ = &ints(&[1, 2]) + &ints(&[1]);
    }

    #[test]
    #[should_panic(expected = "subtrahend: expected equal sizes but actual 1 != 2")]
    fn sub_mismatch() {
        let _ = &ints(&[1]) - &ints(&[1, 2]);
    }

    #[test]
    fn approx() {
        let a = decs(&["1", "2"]);
        assert_approx_eq!(a, decs(&["1.0001", "1.9999"])).abs("0.001".parse().unwrap());
        assert_approx_ne!(a, decs(&["1", "2.1"])).abs("0.001".parse().unwrap());
        assert_approx_ne!(a, decs(&["1"]));
    }
}
