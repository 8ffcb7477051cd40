//! Decimal rounding policy.
//!
//! Every statistic and every normalized value passes through a
//! [`DecimalPolicy`]. The policy carries two scales:
//!
//! - `intermediate_scale`: precision of the divisions by the count (mean and
//!   variance). The reference behavior keeps these at 0 fractional digits.
//! - `output_scale`: precision of every externally visible value (2 digits).
//!
//! Rounding is applied exactly once per step on the exact quotient, so
//! results do not depend on a division precision cap.

use std::cmp::Ordering;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Result, StatsError};

/// Fractional digits used for internal statistics in the reference behavior.
pub const REFERENCE_INTERMEDIATE_SCALE: i64 = 0;

/// Fractional digits of every value exposed to callers.
pub const OUTPUT_SCALE: i64 = 2;

/// Rounding discipline threaded through statistics and formatting calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalPolicy {
    /// Rounding rule applied whenever a value is cut to a scale.
    pub rounding: RoundingMode,
    /// Scale of intermediate statistics.
    pub intermediate_scale: i64,
    /// Scale of exposed statistics and normalized values.
    pub output_scale: i64,
}

impl Default for DecimalPolicy {
    fn default() -> Self {
        Self::reference()
    }
}

impl DecimalPolicy {
    /// Round-half-to-even, 0-digit intermediates, 2-digit outputs.
    pub const fn reference() -> Self {
        Self {
            rounding: RoundingMode::HalfEven,
            intermediate_scale: REFERENCE_INTERMEDIATE_SCALE,
            output_scale: OUTPUT_SCALE,
        }
    }

    /// Set the scale of intermediate statistics.
    #[must_use]
    pub const fn with_intermediate_scale(mut self, scale: i64) -> Self {
        self.intermediate_scale = scale;
        self
    }

    /// Set the scale of exposed values.
    #[must_use]
    pub const fn with_output_scale(mut self, scale: i64) -> Self {
        self.output_scale = scale;
        self
    }

    /// Set the rounding rule.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Round to the intermediate scale.
    pub fn round_intermediate(&self, value: &BigDecimal) -> BigDecimal {
        self.rescale(value, self.intermediate_scale)
    }

    /// Round to the output scale.
    pub fn round_output(&self, value: &BigDecimal) -> BigDecimal {
        self.rescale(value, self.output_scale)
    }

    /// Return `value` with exactly `scale` fractional digits.
    ///
    /// Widening the scale is exact; narrowing it applies the policy rounding.
    pub fn rescale(&self, value: &BigDecimal, scale: i64) -> BigDecimal {
        value.with_scale_round(scale, self.rounding)
    }

    /// Divide exactly, then round once to `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::DivisionByZero`] when `denominator` is zero.
    pub fn divide(
        &self,
        numerator: &BigDecimal,
        denominator: &BigDecimal,
        scale: i64,
    ) -> Result<BigDecimal> {
        if denominator.is_zero() {
            return Err(StatsError::DivisionByZero);
        }
        let (num_digits, num_scale) = numerator.as_bigint_and_exponent();
        let (den_digits, den_scale) = denominator.as_bigint_and_exponent();
        // value * 10^scale == num_digits * 10^(den_scale - num_scale + scale) / den_digits
        let shift = den_scale - num_scale + scale;
        let (num, den) = if shift >= 0 {
            (num_digits * pow10(shift), den_digits)
        } else {
            (num_digits, den_digits * pow10(-shift))
        };
        Ok(BigDecimal::new(
            round_quotient(&num, &den, self.rounding),
            scale,
        ))
    }
}

fn pow10(exponent: i64) -> BigInt {
    let exponent = usize::try_from(exponent).unwrap_or(0);
    num_traits::pow(BigInt::from(10u8), exponent)
}

/// Integer division of `numerator / denominator` rounded with `mode`.
///
/// `BigDecimal` division stops at a precision limit, so quotients are
/// rounded here from the exact remainder instead.
fn round_quotient(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }
    let negative = (numerator.sign() == Sign::Minus) != (denominator.sign() == Sign::Minus);
    let half = (remainder.abs() * BigInt::from(2u8)).cmp(&denominator.abs());
    let away_from_zero = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => half != Ordering::Less,
        RoundingMode::HalfDown => half == Ordering::Greater,
        RoundingMode::HalfEven => match half {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => quotient.is_odd(),
        },
    };
    match (away_from_zero, negative) {
        (false, _) => quotient,
        (true, false) => quotient + BigInt::one(),
        (true, true) => quotient - BigInt::one(),
    }
}
