//! Exact-decimal statistics for column normalization.
//!
//! This crate provides the arithmetic half of csvnorm: an explicit rounding
//! policy, decimal parsing and fixed-point formatting, the descriptive
//! statistics, and the immutable [`ScoringSummary`] built from them.
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//! use bigdecimal::BigDecimal;
//! use csvnorm_stats::{DecimalPolicy, ScoringSummary};
//!
//! let values: Vec<BigDecimal> = ["10", "20", "30"]
//!     .iter()
//!     .map(|v| BigDecimal::from_str(v).unwrap())
//!     .collect();
//! let summary = ScoringSummary::from_values(&values, &DecimalPolicy::reference()).unwrap();
//! assert_eq!(summary.to_report().mean, "20.00");
//! ```

mod error;
pub mod format;
mod policy;
pub mod statistics;
mod summary;

// === Error Types ===
pub use error::{Result, StatsError};

// === Rounding ===
pub use policy::{DecimalPolicy, OUTPUT_SCALE, REFERENCE_INTERMEDIATE_SCALE};

// === Formatting ===
pub use format::{format_decimal, format_with_policy, parse_decimal};

// === Summary ===
pub use summary::{ScoringSummary, SummaryReport};
