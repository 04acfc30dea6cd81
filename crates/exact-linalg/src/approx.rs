//! Approximate equality.
//!
//! Exact domains compare with `==`. Results that went through a square root (Euclidean norms and
//! distances, absolute values of complex scalars) are only correct up to the tolerance of the
//! [`SquareRootContext`][crate::SquareRootContext] they were computed with, and are compared with
//! the [`ApproxEq`] trait and the [`assert_approx_eq!`][crate::assert_approx_eq] macro instead.

mod impls;

use std::{fmt, panic::Location};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::One;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their elements are, and
/// if they have the same shape.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    ///
    /// This is [`BigDecimal`] for every type in this crate.
    type Tolerance: DefaultTolerances + Clone;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to
    /// `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: &Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the largest of
    /// the two magnitudes times `rel_tolerance`, the values are considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: &Self::Tolerance) -> bool;
}

/// Trait implemented for the `Tolerance` value of [`ApproxEq`] implementations.
///
/// This supplies the default tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne].
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    fn default_abs_tolerance() -> Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    fn default_rel_tolerance() -> Self;
}

impl DefaultTolerances for BigDecimal {
    /// `1e-20`
    fn default_abs_tolerance() -> Self {
        BigDecimal::new(BigInt::one(), 20)
    }

    /// `1e-20`
    fn default_rel_tolerance() -> Self {
        BigDecimal::new(BigInt::one(), 20)
    }
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type will check the assertion when dropped, and has methods that allow configuring the
/// comparison method and tolerances to use:
///
/// - [`Asserter::abs`] for comparing the value's *absolute difference* via [`ApproxEq::abs_diff_eq`].
/// - [`Asserter::rel`] for comparing the value's *relative difference* via [`ApproxEq::rel_diff_eq`].
///
/// If both methods are called, the values will be considered equal if *either* comparison
/// considers them equal.
///
/// If neither method is called, the values compare equal if an *absolute comparison* with the
/// [default absolute tolerance] considers them equal, *or* if a *relative comparison* with the
/// [default relative tolerance] considers them equal.
///
/// [default absolute tolerance]: DefaultTolerances::default_abs_tolerance
/// [default relative tolerance]: DefaultTolerances::default_rel_tolerance
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    ///
    /// This is the natural comparison for results of a square root approximation, since the
    /// [`SquareRootContext`][crate::SquareRootContext] tolerance is absolute as well.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given tolerance.
    ///
    /// Any non-zero number will only compare equal to zero with a relative tolerance of at least
    /// 1, so prefer [`Asserter::abs`] for values close to zero.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&mut self) -> bool {
        if let Some(abs) = self.abs.take() {
            if T::abs_diff_eq(self.left, self.right, &abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel.take() {
            if T::rel_diff_eq(self.left, self.right, &rel) {
                return true;
            }
        }

        false
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            self.abs = Some(T::Tolerance::default_abs_tolerance());
            self.rel = Some(T::Tolerance::default_rel_tolerance());
        }

        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        // `#[track_caller]` doesn't work on `drop`, so the location of the assertion is printed
        // manually.
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses the [`ApproxEq`]
/// trait to perform an approximate comparison, and returns an [`Asserter`] that can be used to
/// configure the type of comparison, as well as the tolerance values to use.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let ctx = SquareRootContext::default();
/// let two = sqrt(&BigDecimal::from(4), &ctx).unwrap();
/// assert_approx_eq!(two, BigDecimal::from(2));
/// ```
///
/// Perform absolute and relative comparisons with custom tolerance values:
///
/// ```
/// # use exact_linalg::*;
/// assert_approx_eq!(BigDecimal::from(100), BigDecimal::from(99)).abs(BigDecimal::from(1));
/// assert_approx_eq!(BigDecimal::from(100), BigDecimal::from(99)).rel("0.01".parse().unwrap());
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// assert_approx_ne!(BigDecimal::from(100), BigDecimal::from(99)).abs("0.5".parse().unwrap());
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use num_complex::Complex;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(dec("1"), dec("1"));
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(dec("1"), dec("2"));
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(dec("1"), dec("2"), "my message");
    }

    #[test]
    fn abs() {
        assert_approx_eq!(dec("1"), dec("1.0000000000000000000001"));
        assert_approx_ne!(dec("1"), dec("1.001")).abs(dec("0.0001"));
        assert_approx_eq!(dec("1"), dec("-1")).abs(dec("2"));
        assert_approx_eq!(dec("-1"), dec("-1")).abs(dec("0"));
    }

    #[test]
    fn rel() {
        assert_approx_eq!(dec("1"), dec("1.001")).rel(dec("0.01"));
        assert_approx_eq!(dec("1"), dec("-1")).rel(dec("2"));
        assert_approx_eq!(dec("0"), dec("0.00001")).rel(dec("1"));
        assert_approx_ne!(dec("1000"), dec("1001")).rel(dec("0.0001"));
    }

    #[test]
    fn complex() {
        let a = Complex::new(dec("1"), dec("2"));
        let b = Complex::new(dec("1.0001"), dec("1.9999"));
        assert_approx_eq!(a, b).abs(dec("0.001"));
        assert_approx_ne!(a, b).abs(dec("0.00001"));
        assert_approx_ne!(a, Complex::new(dec("1"), dec("-2"))).abs(dec("1"));
    }
}
