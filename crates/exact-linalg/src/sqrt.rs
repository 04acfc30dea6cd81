//! Arbitrary-precision square roots.
//!
//! Euclidean norms and distances (and the absolute value of complex scalars) are generally
//! irrational, so they are approximated with Newton's method under a caller-supplied
//! [`SquareRootContext`].

use std::num::{NonZeroU64, NonZeroUsize};

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Pow, Signed, Zero};

use crate::error::{Error, Result};

const DEFAULT_PRECISION: NonZeroU64 = match NonZeroU64::new(34) {
    Some(precision) => precision,
    None => unreachable!(),
};

/// Largest precision (in significant digits) a [`SquareRootContext`] accepts.
pub const MAX_PRECISION: u64 = u32::MAX as u64;

/// Precision, rounding and convergence settings for [`sqrt`].
///
/// - *precision* is the number of significant decimal digits each intermediate division is
///   carried out to, rounded with the context's [`RoundingMode`].
/// - *tolerance* is the absolute bound on `|x² - radicand|` at which the iteration stops.
/// - *max iterations* optionally caps the number of Newton steps.
///
/// If the tolerance is finer than the precision allows, the iteration also stops as soon as a step
/// no longer changes the approximation.
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let ctx = SquareRootContext::new(50, "1e-40".parse().unwrap())
///     .unwrap()
///     .with_rounding(RoundingMode::HalfUp)
///     .with_max_iterations(100)
///     .unwrap();
/// assert_eq!(ctx.precision(), 50);
/// assert_eq!(ctx.max_iterations(), Some(100));
/// ```
#[derive(Debug, Clone)]
pub struct SquareRootContext {
    precision: NonZeroU64,
    rounding: RoundingMode,
    tolerance: BigDecimal,
    max_iterations: Option<NonZeroUsize>,
}

impl SquareRootContext {
    /// Creates a context with the given precision (in significant digits) and tolerance.
    ///
    /// Rounding defaults to [`RoundingMode::HalfEven`] and the iteration count is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `precision` is zero or above [`MAX_PRECISION`], or
    /// if `tolerance` is not positive.
    pub fn new(precision: u64, tolerance: BigDecimal) -> Result<Self> {
        if precision > MAX_PRECISION {
            return Err(Error::invalid_argument(
                "precision",
                format!("expected <= {MAX_PRECISION} but actual {precision}"),
            ));
        }
        let precision = NonZeroU64::new(precision)
            .ok_or_else(|| Error::invalid_argument("precision", "expected > 0 but actual 0"))?;
        if tolerance <= BigDecimal::zero() {
            return Err(Error::invalid_argument(
                "tolerance",
                format!("expected > 0 but actual {tolerance}"),
            ));
        }

        Ok(Self {
            precision,
            rounding: RoundingMode::HalfEven,
            tolerance,
            max_iterations: None,
        })
    }

    /// Returns this context with a different rounding mode.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Returns this context with the number of Newton steps capped at `max_iterations`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `max_iterations` is zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        let max = NonZeroUsize::new(max_iterations).ok_or_else(|| {
            Error::invalid_argument("maximum iteration count", "expected > 0 but actual 0")
        })?;
        self.max_iterations = Some(max);
        Ok(self)
    }

    #[inline]
    pub fn precision(&self) -> u64 {
        self.precision.get()
    }

    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    #[inline]
    pub fn tolerance(&self) -> &BigDecimal {
        &self.tolerance
    }

    #[inline]
    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations.map(NonZeroUsize::get)
    }

    /// Rounds `value` to this context's precision.
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        value.with_precision_round(self.precision, self.rounding)
    }

    /// Divides `numerator` by `denominator`, rounded to this context's precision with its
    /// rounding mode.
    ///
    /// `denominator` must not be zero.
    pub(crate) fn divide(&self, numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
        let (num, num_scale) = numerator.as_bigint_and_exponent();
        let (den, den_scale) = denominator.as_bigint_and_exponent();
        let negative = num.is_negative() != den.is_negative();

        // At least one digit past the requested precision, plus a sticky digit below.
        let precision = i64::from(u32::try_from(self.precision.get()).unwrap_or(u32::MAX));
        let shift = (precision + 2 + decimal_digits(&den) - decimal_digits(&num)).max(0);
        let scaled = num * Pow::pow(BigInt::from(10), shift.unsigned_abs());
        let mut quotient = &scaled / &den;
        let mut scale = num_scale - den_scale + shift;

        // A non-zero remainder means the exact quotient lies strictly beyond the truncated one.
        if !(scaled - &quotient * &den).is_zero() {
            let sticky = if negative { -1 } else { 1 };
            quotient = quotient * 10 + sticky;
            scale += 1;
        }

        self.round(&BigDecimal::new(quotient, scale))
    }
}

impl Default for SquareRootContext {
    /// 34 significant digits, half-even rounding, a tolerance of `1e-30`, no iteration cap.
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            rounding: RoundingMode::HalfEven,
            tolerance: BigDecimal::new(BigInt::one(), 30),
            max_iterations: None,
        }
    }
}

fn decimal_digits(n: &BigInt) -> i64 {
    n.magnitude().to_string().len() as i64
}

/// Approximates the square root of `radicand` with Newton's method.
///
/// Starting from `radicand` (or 1 if `radicand < 1`), the approximation is refined with
/// `x' = (x + radicand / x) / 2` until `|x'² - radicand|` is within the context's tolerance, the
/// iteration cap is reached, or a step stops changing `x`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `radicand` is negative.
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let ctx = SquareRootContext::default();
/// let root = sqrt(&BigDecimal::from(25), &ctx).unwrap();
/// assert_approx_eq!(root, BigDecimal::from(5)).abs(ctx.tolerance().clone());
///
/// assert!(sqrt(&BigDecimal::from(-1), &ctx).is_err());
/// ```
pub fn sqrt(radicand: &BigDecimal, ctx: &SquareRootContext) -> Result<BigDecimal> {
    if *radicand < BigDecimal::zero() {
        return Err(Error::invalid_argument(
            "radicand",
            format!("expected >= 0 but actual {radicand}"),
        ));
    }
    Ok(sqrt_non_negative(radicand, ctx))
}

/// [`sqrt`] for radicands known to be non-negative (sums of squares).
pub(crate) fn sqrt_non_negative(radicand: &BigDecimal, ctx: &SquareRootContext) -> BigDecimal {
    if radicand.is_zero() {
        return BigDecimal::zero();
    }

    let two = BigDecimal::from(2);
    let mut x = if *radicand < BigDecimal::one() {
        BigDecimal::one()
    } else {
        radicand.clone()
    };
    let mut previous: Option<BigDecimal> = None;
    let mut iterations = 0;
    loop {
        let next = ctx.divide(&(&x + &ctx.divide(radicand, &x)), &two);
        iterations += 1;

        let residual = (&next * &next - radicand).abs();
        log::trace!("sqrt({radicand}) step {iterations}: x={next}, residual={residual}");

        if residual <= ctx.tolerance {
            return next;
        }
        if next == x || previous.as_ref() == Some(&next) {
            // Rounding keeps us from getting any closer.
            log::debug!(
                "sqrt({radicand}) stalled after {iterations} steps with residual {residual} > {}",
                ctx.tolerance
            );
            return next;
        }
        if let Some(max) = ctx.max_iterations {
            if iterations >= max.get() {
                log::debug!("sqrt({radicand}) stopped at the {iterations} step cap");
                return next;
            }
        }

        previous = Some(std::mem::replace(&mut x, next));
    }
}
