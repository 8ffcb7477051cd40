//! Exact-decimal descriptive statistics.
//!
//! All functions borrow the dataset immutably and return new values.
//! An empty dataset yields `None` wherever the result is undefined
//! (mean, variance, standard deviation, median, min, max).
//!
//! Only the two divisions by the count are cut to
//! [`DecimalPolicy::intermediate_scale`]: the mean and the variance
//! quotient. Squared deviations and the even-count median are exact.
//! Callers re-scale the results to the output scale before exposing them.
//!
//! The standard deviation is the one step computed in binary floating
//! point: the square root of the variance is taken as `f64` and read back
//! as a decimal from its shortest round-trip representation. Results can
//! therefore differ in the last binary digit across platforms before the
//! final re-scale.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

use crate::policy::DecimalPolicy;

/// Left-to-right exact sum. The sum of no values is zero.
pub fn sum(values: &[BigDecimal]) -> BigDecimal {
    values
        .iter()
        .fold(BigDecimal::zero(), |total, value| total + value)
}

/// Arithmetic mean rounded to the intermediate scale.
pub fn mean(values: &[BigDecimal], policy: &DecimalPolicy) -> Option<BigDecimal> {
    if values.is_empty() {
        return None;
    }
    policy
        .divide(&sum(values), &count(values), policy.intermediate_scale)
        .ok()
}

/// Population variance: `sum((x - mean)^2) / n`.
///
/// The squares are exact; only the quotient is rounded. Zero for a single
/// value.
pub fn population_variance(values: &[BigDecimal], policy: &DecimalPolicy) -> Option<BigDecimal> {
    match values.len() {
        0 => return None,
        1 => return Some(BigDecimal::zero()),
        _ => {}
    }
    let mean = mean(values, policy)?;
    let squares: Vec<BigDecimal> = values
        .iter()
        .map(|value| {
            let deviation = value - &mean;
            &deviation * &deviation
        })
        .collect();
    policy
        .divide(&sum(&squares), &count(values), policy.intermediate_scale)
        .ok()
}

/// Square root of the population variance, via `f64`.
///
/// Zero for a single value; `None` if the square root is not finite.
pub fn standard_deviation(values: &[BigDecimal], policy: &DecimalPolicy) -> Option<BigDecimal> {
    match values.len() {
        0 => None,
        1 => Some(BigDecimal::zero()),
        _ => {
            let variance = population_variance(values, policy)?.to_f64()?;
            let root = variance.sqrt();
            if !root.is_finite() {
                return None;
            }
            BigDecimal::from_str(&root.to_string()).ok()
        }
    }
}

/// Median over a sorted private copy of `values`.
///
/// The even-count midpoint is exact.
pub fn median(values: &[BigDecimal]) -> Option<BigDecimal> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Some(sorted[mid].clone());
    }
    Some((&sorted[mid - 1] + &sorted[mid]).half())
}

/// Smallest value under natural decimal ordering.
pub fn min(values: &[BigDecimal]) -> Option<BigDecimal> {
    values.iter().min().cloned()
}

/// Largest value under natural decimal ordering.
pub fn max(values: &[BigDecimal]) -> Option<BigDecimal> {
    values.iter().max().cloned()
}

fn count(values: &[BigDecimal]) -> BigDecimal {
    BigDecimal::from(values.len() as u64)
}
