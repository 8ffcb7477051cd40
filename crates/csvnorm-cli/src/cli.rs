//! CLI argument definitions for csvnorm.

use std::path::PathBuf;

use bigdecimal::BigDecimal;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use csvnorm_stats::{REFERENCE_INTERMEDIATE_SCALE, parse_decimal};
use csvnorm_transform::NormalizationMethod;

#[derive(Parser)]
#[command(
    name = "csvnorm",
    version,
    about = "Normalize one numeric CSV column by min-max scaling or z-score",
    long_about = "Normalize one numeric CSV column by min-max scaling or z-score.\n\n\
                  Writes <SOURCE-STEM>_normalized.csv into DEST_DIR with the normalized\n\
                  column inserted right after the source column, and prints the\n\
                  column's mean, standard deviation, variance, median, min and max."
)]
pub struct Cli {
    /// Source CSV file.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Existing directory that receives the normalized file.
    #[arg(value_name = "DEST_DIR")]
    pub destination_dir: PathBuf,

    /// Name of the numeric column to normalize.
    #[arg(value_name = "COLUMN")]
    pub column: String,

    /// Normalization method.
    #[arg(value_name = "METHOD", value_enum)]
    pub method: MethodArg,

    /// Name of the new column (default: <COLUMN>_mm or <COLUMN>_z).
    #[arg(long = "output-column", value_name = "NAME")]
    pub output_column: Option<String>,

    /// Fractional digits kept by intermediate statistics (mean, variance, median).
    #[arg(
        long = "intermediate-scale",
        value_name = "DIGITS",
        default_value_t = REFERENCE_INTERMEDIATE_SCALE
    )]
    pub intermediate_scale: i64,

    /// Lower bound of the min-max target range.
    #[arg(
        long = "range-min",
        value_name = "DECIMAL",
        value_parser = decimal_arg,
        allow_negative_numbers = true
    )]
    pub range_min: Option<BigDecimal>,

    /// Upper bound of the min-max target range.
    #[arg(
        long = "range-max",
        value_name = "DECIMAL",
        value_parser = decimal_arg,
        allow_negative_numbers = true
    )]
    pub range_max: Option<BigDecimal>,

    /// How to print the summary statistics.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

fn decimal_arg(value: &str) -> Result<BigDecimal, String> {
    parse_decimal(value).map_err(|error| error.to_string())
}

/// CLI normalization method choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    MinMax,
    ZScore,
}

impl From<MethodArg> for NormalizationMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::MinMax => Self::MinMax,
            MethodArg::ZScore => Self::ZScore,
        }
    }
}

/// Summary output choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positionals() {
        let cli = Cli::try_parse_from(["csvnorm", "marks.csv", "out", "score", "z-score"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("marks.csv"));
        assert_eq!(cli.destination_dir, PathBuf::from("out"));
        assert_eq!(cli.column, "score");
        assert_eq!(cli.method, MethodArg::ZScore);
        assert_eq!(cli.intermediate_scale, 0);
        assert_eq!(cli.summary, SummaryFormatArg::Table);
        assert!(!cli.log_timestamps);
        assert!(!cli.log_target);
    }

    #[test]
    fn test_log_detail_flags() {
        let cli = Cli::try_parse_from([
            "csvnorm",
            "a.csv",
            "out",
            "score",
            "min-max",
            "--log-timestamps",
            "--log-target",
        ])
        .unwrap();
        assert!(cli.log_timestamps);
        assert!(cli.log_target);
    }

    #[test]
    fn test_rejects_unknown_method() {
        assert!(Cli::try_parse_from(["csvnorm", "a.csv", "out", "score", "log"]).is_err());
    }

    #[test]
    fn test_requires_four_positionals() {
        assert!(Cli::try_parse_from(["csvnorm", "a.csv", "out", "score"]).is_err());
    }

    #[test]
    fn test_range_flags_parse_decimals() {
        let cli = Cli::try_parse_from([
            "csvnorm",
            "a.csv",
            "out",
            "score",
            "min-max",
            "--range-min",
            "-1",
            "--range-max",
            "1.5",
        ])
        .unwrap();
        assert_eq!(cli.range_min, Some(BigDecimal::from(-1)));
        assert_eq!(cli.range_max, Some("1.5".parse::<BigDecimal>().unwrap()));
        assert!(
            Cli::try_parse_from(["csvnorm", "a.csv", "out", "s", "min-max", "--range-min", "x"])
                .is_err()
        );
    }
}
