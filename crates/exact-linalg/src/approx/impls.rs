use bigdecimal::BigDecimal;
use num_complex::Complex;

use super::ApproxEq;

impl ApproxEq for BigDecimal {
    type Tolerance = Self;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: &Self::Tolerance) -> bool {
        (self - other).abs() <= *abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: &Self::Tolerance) -> bool {
        let abs_diff = (self - other).abs();
        let largest = Ord::max(self.abs(), other.abs());

        abs_diff <= largest * rel_tolerance
    }
}

/// Complex values compare equal if both their real and their imaginary parts do.
impl ApproxEq for Complex<BigDecimal> {
    type Tolerance = BigDecimal;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: &Self::Tolerance) -> bool {
        self.re.abs_diff_eq(&other.re, abs_tolerance) && self.im.abs_diff_eq(&other.im, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: &Self::Tolerance) -> bool {
        self.re.rel_diff_eq(&other.re, rel_tolerance) && self.im.rel_diff_eq(&other.im, rel_tolerance)
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: &Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: &Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }
}

/// Slices of different length are never equal.
impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: &Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::abs_diff_eq(a, b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: &Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::rel_diff_eq(a, b, rel_tolerance))
    }
}
