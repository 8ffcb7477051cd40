//! Normalization method selection and options.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use csvnorm_stats::{DecimalPolicy, format_decimal};

use crate::error::{Result, TransformError};

/// Supported normalization formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationMethod {
    /// `(x - min) / (max - min)`, mapped onto a [`TargetRange`].
    MinMax,
    /// `(x - mean) / standard deviation`.
    ZScore,
}

impl NormalizationMethod {
    pub const ALL: [Self; 2] = [Self::MinMax, Self::ZScore];

    /// Command-line name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Self::MinMax => "min-max",
            Self::ZScore => "z-score",
        }
    }

    /// Suffix appended to the source column name to name the new column.
    pub fn column_suffix(self) -> &'static str {
        match self {
            Self::MinMax => "_mm",
            Self::ZScore => "_z",
        }
    }

    /// Output column name for `column`, e.g. `score_mm`.
    pub fn output_column(self, column: &str) -> String {
        format!("{column}{}", self.column_suffix())
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown normalization method '{0}' (expected min-max or z-score)")]
pub struct UnknownMethod(pub String);

impl FromStr for NormalizationMethod {
    type Err = UnknownMethod;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == value)
            .ok_or_else(|| UnknownMethod(value.to_string()))
    }
}

/// Target interval of min-max scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRange {
    lower: BigDecimal,
    upper: BigDecimal,
}

impl TargetRange {
    /// Build a range, rejecting `upper <= lower`.
    pub fn new(lower: BigDecimal, upper: BigDecimal) -> Result<Self> {
        if upper <= lower {
            return Err(TransformError::InvalidTargetRange {
                lower: format_decimal(&lower),
                upper: format_decimal(&upper),
            });
        }
        Ok(Self { lower, upper })
    }

    /// The unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Self {
            lower: BigDecimal::from(0),
            upper: BigDecimal::from(1),
        }
    }

    pub fn lower(&self) -> &BigDecimal {
        &self.lower
    }

    pub fn upper(&self) -> &BigDecimal {
        &self.upper
    }

    /// `upper - lower`.
    pub fn width(&self) -> BigDecimal {
        &self.upper - &self.lower
    }

    pub fn is_unit(&self) -> bool {
        *self == Self::unit()
    }
}

impl Default for TargetRange {
    fn default() -> Self {
        Self::unit()
    }
}

/// Options shared by every normalization run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeOptions {
    /// Rounding discipline for statistics and normalized values.
    pub policy: DecimalPolicy,
    /// Target interval for min-max scaling.
    pub target_range: TargetRange,
}

impl NormalizeOptions {
    #[must_use]
    pub fn with_policy(mut self, policy: DecimalPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_target_range(mut self, target_range: TargetRange) -> Self {
        self.target_range = target_range;
        self
    }
}
