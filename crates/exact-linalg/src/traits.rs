//! The numeric domains [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix] are generic over.
//!
//! Four domains are supported:
//!
//! | Domain | Type | `Real` | `Abs` |
//! |---|---|---|---|
//! | exact integers | [`BigInt`] | [`BigInt`] | [`BigInt`] |
//! | exact decimals | [`BigDecimal`] | [`BigDecimal`] | [`BigDecimal`] |
//! | complex, integer parts | [`ComplexBigInt`] | [`BigInt`] | [`BigDecimal`] |
//! | complex, decimal parts | [`ComplexBigDecimal`] | [`BigDecimal`] | [`BigDecimal`] |

use std::{cmp::Ordering, fmt, hash::Hash};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_complex::Complex;
use num_traits::{One, Signed, Zero};

use crate::sqrt::{sqrt_non_negative, SquareRootContext};

/// A complex number with arbitrary-precision integer parts (a Gaussian integer).
pub type ComplexBigInt = Complex<BigInt>;
/// A complex number with arbitrary-precision decimal parts.
pub type ComplexBigDecimal = Complex<BigDecimal>;

/// The arithmetic every element type of a [`Vector`][crate::Vector] or [`Matrix`][crate::Matrix]
/// has to provide.
///
/// Addition, subtraction, multiplication and negation are exact in every domain. Only the
/// absolute value of complex scalars needs a square root, which is why [`Scalar::abs`] takes a
/// [`SquareRootContext`]. [`Scalar::abs_pow2`] is always exact.
pub trait Scalar: Clone + PartialEq + Eq + Hash + fmt::Debug {
    /// The type of the exact squared magnitude [`Scalar::abs_pow2`].
    type Real: RealScalar;

    /// The type of the absolute value [`Scalar::abs`].
    type Abs: RealScalar;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    fn add(&self, rhs: &Self) -> Self;

    fn subtract(&self, rhs: &Self) -> Self;

    fn multiply(&self, rhs: &Self) -> Self;

    fn negate(&self) -> Self;

    /// Raises `self` to the power of `exponent` by repeated squaring.
    ///
    /// `x.pow(0)` is one for every `x`, including zero.
    fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.multiply(&base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.multiply(&base);
            }
        }
        result
    }

    /// Returns the complex conjugate of `self` (`self` itself for real domains).
    fn conjugate(&self) -> Self;

    /// Returns the absolute value of `self`.
    ///
    /// This is exact for real domains, which ignore `ctx`. For complex domains it is the square
    /// root of [`Scalar::abs_pow2`], approximated under `ctx`.
    fn abs(&self, ctx: &SquareRootContext) -> Self::Abs;

    /// Returns the exact square of the absolute value of `self`.
    fn abs_pow2(&self) -> Self::Real;

    /// Total order of the domain: the natural order for real domains, and the real part followed
    /// by the imaginary part for complex domains.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns whether `self` has a multiplicative inverse *within the domain*.
    ///
    /// - Integers: only `1` and `-1`.
    /// - Gaussian integers: `1`, `-1`, `i` and `-i`.
    /// - Decimals (real or complex): every non-zero value.
    fn is_unit(&self) -> bool;
}

/// A [`Scalar`] on the real line, with a total order and an exact decimal representation.
pub trait RealScalar: Scalar + Ord {
    fn to_decimal(&self) -> BigDecimal;
}

macro_rules! forward_arithmetic {
    () => {
        fn zero() -> Self {
            <Self as Zero>::zero()
        }

        fn one() -> Self {
            <Self as One>::one()
        }

        fn is_zero(&self) -> bool {
            <Self as Zero>::is_zero(self)
        }

        fn add(&self, rhs: &Self) -> Self {
            self + rhs
        }

        fn subtract(&self, rhs: &Self) -> Self {
            self - rhs
        }

        fn multiply(&self, rhs: &Self) -> Self {
            self * rhs
        }

        fn negate(&self) -> Self {
            -self
        }
    };
}

impl Scalar for BigInt {
    type Real = Self;
    type Abs = Self;

    forward_arithmetic!();

    fn pow(&self, exponent: u32) -> Self {
        BigInt::pow(self, exponent)
    }

    fn conjugate(&self) -> Self {
        self.clone()
    }

    fn abs(&self, _ctx: &SquareRootContext) -> Self {
        Signed::abs(self)
    }

    fn abs_pow2(&self) -> Self {
        self * self
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_unit(&self) -> bool {
        self.magnitude().is_one()
    }
}

impl RealScalar for BigInt {
    fn to_decimal(&self) -> BigDecimal {
        BigDecimal::new(self.clone(), 0)
    }
}

impl Scalar for BigDecimal {
    type Real = Self;
    type Abs = Self;

    forward_arithmetic!();

    fn conjugate(&self) -> Self {
        self.clone()
    }

    fn abs(&self, _ctx: &SquareRootContext) -> Self {
        BigDecimal::abs(self)
    }

    fn abs_pow2(&self) -> Self {
        self * self
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_unit(&self) -> bool {
        !<Self as Zero>::is_zero(self)
    }
}

impl RealScalar for BigDecimal {
    fn to_decimal(&self) -> BigDecimal {
        self.clone()
    }
}

impl Scalar for ComplexBigInt {
    type Real = BigInt;
    type Abs = BigDecimal;

    forward_arithmetic!();

    fn conjugate(&self) -> Self {
        self.conj()
    }

    fn abs(&self, ctx: &SquareRootContext) -> BigDecimal {
        sqrt_non_negative(&self.norm_sqr().to_decimal(), ctx)
    }

    fn abs_pow2(&self) -> BigInt {
        self.norm_sqr()
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.re.cmp(&other.re).then_with(|| self.im.cmp(&other.im))
    }

    fn is_unit(&self) -> bool {
        One::is_one(&self.norm_sqr())
    }
}

impl Scalar for ComplexBigDecimal {
    type Real = BigDecimal;
    type Abs = BigDecimal;

    forward_arithmetic!();

    fn conjugate(&self) -> Self {
        self.conj()
    }

    fn abs(&self, ctx: &SquareRootContext) -> BigDecimal {
        sqrt_non_negative(&self.norm_sqr(), ctx)
    }

    fn abs_pow2(&self) -> BigDecimal {
        self.norm_sqr()
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.re.cmp(&other.re).then_with(|| self.im.cmp(&other.im))
    }

    fn is_unit(&self) -> bool {
        !<Self as Zero>::is_zero(self)
    }
}

/// Sums `values`, starting from zero.
pub(crate) fn sum<T: Scalar>(values: impl IntoIterator<Item = T>) -> T {
    values
        .into_iter()
        .fold(T::zero(), |acc, value| acc.add(&value))
}

/// Returns the largest of `values`, which must all be non-negative (or zero if there are none).
pub(crate) fn max_non_negative<T: RealScalar>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(T::zero(), Ord::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> BigInt {
        BigInt::from(i)
    }

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn cint(re: i64, im: i64) -> ComplexBigInt {
        Complex::new(int(re), int(im))
    }

    #[test]
    fn integer_arithmetic() {
        let a = int(7);
        let b = int(-3);
        assert_eq!(Scalar::add(&a, &b), int(4));
        assert_eq!(a.subtract(&b), int(10));
        assert_eq!(a.multiply(&b), int(-21));
        assert_eq!(b.negate(), int(3));
        assert_eq!(Scalar::pow(&b, 3), int(-27));
        assert_eq!(Scalar::pow(&b, 0), int(1));
        assert_eq!(b.abs_pow2(), int(9));
        assert_eq!(Scalar::abs(&b, &SquareRootContext::default()), int(3));
        assert!(Scalar::is_one(&Scalar::pow(&<BigInt as Scalar>::zero(), 0)));
    }

    #[test]
    fn decimal_arithmetic_is_exact() {
        let a = dec("0.1");
        let b = dec("0.2");
        assert_eq!(Scalar::add(&a, &b), dec("0.3"));
        assert_eq!(a.multiply(&b), dec("0.02"));
        assert_eq!(Scalar::pow(&dec("1.5"), 2), dec("2.25"));
        assert_eq!(Scalar::abs(&dec("-2.5"), &SquareRootContext::default()), dec("2.5"));
        assert_eq!(dec("1.10"), dec("1.1"));
    }

    #[test]
    fn complex_arithmetic() {
        let i = cint(0, 1);
        assert_eq!(i.multiply(&i), cint(-1, 0));
        assert_eq!(Scalar::pow(&i, 4), cint(1, 0));
        assert_eq!(cint(1, 2).multiply(&cint(3, -1)), cint(5, 5));
        assert_eq!(cint(1, 2).conjugate(), cint(1, -2));
        assert_eq!(cint(3, 4).abs_pow2(), int(25));

        let ctx = SquareRootContext::default();
        let abs = Scalar::abs(&cint(3, 4), &ctx);
        assert!((abs - dec("5")).abs() <= *ctx.tolerance());
    }

    #[test]
    fn complex_decimal_abs() {
        let ctx = SquareRootContext::default();
        let z = Complex::new(dec("0.6"), dec("-0.8"));
        assert_eq!(z.abs_pow2(), dec("1"));
        assert!((Scalar::abs(&z, &ctx) - dec("1")).abs() <= *ctx.tolerance());
    }

    #[test]
    fn ordering() {
        assert_eq!(int(1).compare(&int(2)), Ordering::Less);
        assert_eq!(dec("2.0").compare(&dec("2")), Ordering::Equal);
        assert_eq!(cint(1, 5).compare(&cint(2, -5)), Ordering::Less);
        assert_eq!(cint(2, 1).compare(&cint(2, -5)), Ordering::Greater);
        assert_eq!(cint(2, 1).compare(&cint(2, 1)), Ordering::Equal);
    }

    #[test]
    fn units() {
        assert!(int(1).is_unit());
        assert!(int(-1).is_unit());
        assert!(!int(2).is_unit());
        assert!(!int(0).is_unit());

        assert!(cint(0, 1).is_unit());
        assert!(cint(0, -1).is_unit());
        assert!(!cint(1, 1).is_unit());

        assert!(dec("0.001").is_unit());
        assert!(!dec("0.000").is_unit());
        assert!(Complex::new(dec("0"), dec("2")).is_unit());
    }

    #[test]
    fn helpers() {
        assert_eq!(sum(vec![int(1), int(2), int(3)]), int(6));
        assert_eq!(sum(Vec::<BigInt>::new()), int(0));
        assert_eq!(max_non_negative(vec![dec("1.5"), dec("3"), dec("0")]), dec("3"));
    }
}
