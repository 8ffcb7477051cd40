//! Property tests for the decimal statistics engine.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use proptest::prelude::*;

use csvnorm_stats::statistics::{population_variance, standard_deviation};
use csvnorm_stats::{DecimalPolicy, ScoringSummary, format_with_policy, parse_decimal};

fn integers() -> impl Strategy<Value = Vec<BigDecimal>> {
    prop::collection::vec(-10_000i64..10_000, 1..40)
        .prop_map(|values| values.into_iter().map(BigDecimal::from).collect())
}

fn cents() -> impl Strategy<Value = Vec<BigDecimal>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 1..40).prop_map(|values| {
        values
            .into_iter()
            .map(|v| BigDecimal::new(BigInt::from(v), 2))
            .collect()
    })
}

fn assert_ordered(summary: &ScoringSummary) {
    assert!(summary.min() <= summary.median());
    assert!(summary.median() <= summary.max());
    assert!(summary.min() <= summary.mean());
    assert!(summary.mean() <= summary.max());
}

proptest! {
    #[test]
    fn summary_is_ordered_for_integers(values in integers()) {
        let summary = ScoringSummary::from_values(&values, &DecimalPolicy::reference()).unwrap();
        assert_ordered(&summary);
    }

    #[test]
    fn summary_is_ordered_with_precise_intermediates(values in cents()) {
        let policy = DecimalPolicy::reference().with_intermediate_scale(6);
        let summary = ScoringSummary::from_values(&values, &policy).unwrap();
        assert_ordered(&summary);
    }

    #[test]
    fn stddev_squared_matches_variance(values in integers()) {
        prop_assume!(values.len() >= 2);
        let policy = DecimalPolicy::reference();
        let variance = population_variance(&values, &policy).unwrap().to_f64().unwrap();
        let sd = standard_deviation(&values, &policy).unwrap().to_f64().unwrap();
        let tolerance = 1e-9 * variance.max(1.0);
        prop_assert!((sd * sd - variance).abs() <= tolerance);
    }

    #[test]
    fn formatting_is_idempotent(mantissa in any::<i64>(), scale in 0i64..8) {
        let policy = DecimalPolicy::reference();
        let value = BigDecimal::new(BigInt::from(mantissa), scale);
        let once = format_with_policy(&value, &policy);
        let twice = format_with_policy(&parse_decimal(&once).unwrap(), &policy);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn even_count_median_keeps_its_half(values in prop::collection::vec(-10_000i64..10_000, 1..20)) {
        let mut values = values;
        if values.len() % 2 == 1 {
            values.pop();
        }
        prop_assume!(!values.is_empty());
        let mut sorted = values.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        let twice = sorted[mid - 1] + sorted[mid];
        let sign = if twice < 0 { "-" } else { "" };
        let fraction = if twice.abs() % 2 == 1 { "50" } else { "00" };
        let expected = format!("{sign}{}.{fraction}", twice.abs() / 2);

        let decimals: Vec<BigDecimal> = values.into_iter().map(BigDecimal::from).collect();
        let summary = ScoringSummary::from_values(&decimals, &DecimalPolicy::reference()).unwrap();
        prop_assert_eq!(summary.to_report().median, expected);
    }

    #[test]
    fn summary_count_matches_input(values in cents()) {
        let summary = ScoringSummary::from_values(&values, &DecimalPolicy::reference()).unwrap();
        prop_assert_eq!(summary.count(), values.len());
    }
}

#[test]
fn report_serializes_as_strings() {
    let values: Vec<BigDecimal> = [10, 20, 30].into_iter().map(BigDecimal::from).collect();
    let summary = ScoringSummary::from_values(&values, &DecimalPolicy::reference()).unwrap();
    let json = serde_json::to_value(summary.to_report()).unwrap();
    assert_eq!(json["mean"], "20.00");
    assert_eq!(json["count"], 3);
}

#[test]
fn even_count_median_of_reference_policy() {
    let values: Vec<BigDecimal> = [1, 2, 3, 4].into_iter().map(BigDecimal::from).collect();
    let summary = ScoringSummary::from_values(&values, &DecimalPolicy::reference()).unwrap();
    assert_eq!(summary.to_report().median, "2.50");
}
