//! Scoring summary over a finalized column dataset.

use bigdecimal::BigDecimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::format::format_decimal;
use crate::policy::DecimalPolicy;
use crate::statistics;

/// Immutable snapshot of the six summary statistics of one column.
///
/// Every value is re-scaled to the policy's output scale at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSummary {
    count: usize,
    mean: BigDecimal,
    standard_deviation: BigDecimal,
    variance: BigDecimal,
    median: BigDecimal,
    min: BigDecimal,
    max: BigDecimal,
}

impl ScoringSummary {
    /// Summarize `values` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyDataset`] for an empty slice, and
    /// [`StatsError::NonFinite`] if the standard deviation cannot be taken.
    pub fn from_values(values: &[BigDecimal], policy: &DecimalPolicy) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyDataset);
        }
        let defined = |value: Option<BigDecimal>, operation: &'static str| {
            value
                .map(|v| policy.round_output(&v))
                .ok_or(StatsError::NonFinite { operation })
        };
        let summary = Self {
            count: values.len(),
            mean: defined(statistics::mean(values, policy), "mean")?,
            standard_deviation: defined(
                statistics::standard_deviation(values, policy),
                "standard deviation",
            )?,
            variance: defined(statistics::population_variance(values, policy), "variance")?,
            median: defined(statistics::median(values), "median")?,
            min: defined(statistics::min(values), "min")?,
            max: defined(statistics::max(values), "max")?,
        };
        debug!(
            count = summary.count,
            mean = %format_decimal(&summary.mean),
            standard_deviation = %format_decimal(&summary.standard_deviation),
            min = %format_decimal(&summary.min),
            max = %format_decimal(&summary.max),
            "computed scoring summary"
        );
        Ok(summary)
    }

    /// Number of values summarized.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> &BigDecimal {
        &self.mean
    }

    pub fn standard_deviation(&self) -> &BigDecimal {
        &self.standard_deviation
    }

    /// Population variance.
    pub fn variance(&self) -> &BigDecimal {
        &self.variance
    }

    pub fn median(&self) -> &BigDecimal {
        &self.median
    }

    pub fn min(&self) -> &BigDecimal {
        &self.min
    }

    pub fn max(&self) -> &BigDecimal {
        &self.max
    }

    /// Render all statistics as fixed-point strings.
    pub fn to_report(&self) -> SummaryReport {
        SummaryReport {
            count: self.count,
            mean: format_decimal(&self.mean),
            standard_deviation: format_decimal(&self.standard_deviation),
            variance: format_decimal(&self.variance),
            median: format_decimal(&self.median),
            min: format_decimal(&self.min),
            max: format_decimal(&self.max),
        }
    }
}

/// Serializable, display-ready form of a [`ScoringSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub count: usize,
    pub mean: String,
    pub standard_deviation: String,
    pub variance: String,
    pub median: String,
    pub min: String,
    pub max: String,
}
