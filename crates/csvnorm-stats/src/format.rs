//! Decimal parsing and fixed-point formatting.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{Result, StatsError};
use crate::policy::DecimalPolicy;

/// Parse a base-10 decimal literal, ignoring surrounding whitespace.
///
/// Accepts an optional sign, fraction and exponent (`-12.5`, `1e3`).
/// Empty strings and non-numeric tokens such as `NaN` are rejected.
pub fn parse_decimal(value: &str) -> Result<BigDecimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return Err(StatsError::InvalidDecimal {
            value: value.to_string(),
        });
    }
    BigDecimal::from_str(trimmed).map_err(|_| StatsError::InvalidDecimal {
        value: value.to_string(),
    })
}

/// Format a decimal in positional notation with exactly its scale in
/// fractional digits. Never emits scientific notation.
pub fn format_decimal(value: &BigDecimal) -> String {
    value.to_plain_string()
}

/// Round to the policy's output scale, then format.
pub fn format_with_policy(value: &BigDecimal, policy: &DecimalPolicy) -> String {
    format_decimal(&policy.round_output(value))
}
