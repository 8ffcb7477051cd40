//! Per-value normalization formulas.
//!
//! Both formulas divide exactly and round once to the policy's output
//! scale; the summary statistics they read are already at that scale.

use bigdecimal::BigDecimal;
use csvnorm_stats::{DecimalPolicy, ScoringSummary};
use num_traits::Zero;

use crate::error::Result;
use crate::options::TargetRange;

/// Min-max scaling of `value` onto `range`:
/// `lower + (value - min) * (upper - lower) / (max - min)`.
///
/// For the unit range this is `round((value - min) / (max - min))`.
pub fn min_max(
    value: &BigDecimal,
    summary: &ScoringSummary,
    range: &TargetRange,
    policy: &DecimalPolicy,
) -> Result<BigDecimal> {
    let spread = summary.max() - summary.min();
    let offset = (value - summary.min()) * range.width();
    let scaled = policy.divide(&offset, &spread, policy.output_scale)?;
    Ok(policy.round_output(&(scaled + range.lower())))
}

/// Z-score standardization: `(value - mean) / standard deviation`.
///
/// A zero standard deviation (one row, or all values equal) scores every
/// value as zero.
pub fn z_score(
    value: &BigDecimal,
    summary: &ScoringSummary,
    policy: &DecimalPolicy,
) -> Result<BigDecimal> {
    let sd = summary.standard_deviation();
    if sd.is_zero() {
        return Ok(policy.round_output(&BigDecimal::zero()));
    }
    Ok(policy.divide(&(value - summary.mean()), sd, policy.output_scale)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvnorm_stats::format_decimal;

    fn summary_of(values: &[i64]) -> ScoringSummary {
        let values: Vec<BigDecimal> = values.iter().copied().map(BigDecimal::from).collect();
        ScoringSummary::from_values(&values, &DecimalPolicy::reference()).unwrap()
    }

    #[test]
    fn test_min_max_unit_range() {
        let policy = DecimalPolicy::reference();
        let summary = summary_of(&[10, 20, 30]);
        let range = TargetRange::unit();
        let scaled: Vec<String> = [10, 20, 30, 25]
            .into_iter()
            .map(|v| format_decimal(&min_max(&BigDecimal::from(v), &summary, &range, &policy).unwrap()))
            .collect();
        assert_eq!(scaled, ["0.00", "0.50", "1.00", "0.75"]);
    }

    #[test]
    fn test_min_max_custom_range() {
        let policy = DecimalPolicy::reference();
        let summary = summary_of(&[10, 20, 30]);
        let range = TargetRange::new(BigDecimal::from(-1), BigDecimal::from(1)).unwrap();
        let low = min_max(&BigDecimal::from(10), &summary, &range, &policy).unwrap();
        let mid = min_max(&BigDecimal::from(20), &summary, &range, &policy).unwrap();
        let high = min_max(&BigDecimal::from(30), &summary, &range, &policy).unwrap();
        assert_eq!(format_decimal(&low), "-1.00");
        assert_eq!(format_decimal(&mid), "0.00");
        assert_eq!(format_decimal(&high), "1.00");
    }

    #[test]
    fn test_min_max_degenerate_divides_by_zero() {
        let policy = DecimalPolicy::reference();
        let summary = summary_of(&[5, 5]);
        assert!(min_max(&BigDecimal::from(5), &summary, &TargetRange::unit(), &policy).is_err());
    }

    #[test]
    fn test_z_score() {
        let policy = DecimalPolicy::reference();
        let summary = summary_of(&[10, 20, 30]);
        // sd rounds to 8.19 under the reference policy
        let scores: Vec<String> = [10, 20, 30]
            .into_iter()
            .map(|v| format_decimal(&z_score(&BigDecimal::from(v), &summary, &policy).unwrap()))
            .collect();
        assert_eq!(scores, ["-1.22", "0.00", "1.22"]);
    }

    #[test]
    fn test_z_score_zero_spread() {
        let policy = DecimalPolicy::reference();
        let summary = summary_of(&[42]);
        let score = z_score(&BigDecimal::from(42), &summary, &policy).unwrap();
        assert_eq!(format_decimal(&score), "0.00");
    }
}
