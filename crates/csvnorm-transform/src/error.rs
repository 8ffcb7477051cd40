//! Error types for CSV normalization.

use std::path::PathBuf;

use csvnorm_stats::StatsError;
use thiserror::Error;

/// Errors that can occur while normalizing a CSV column.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Argument Errors ===
    /// Source CSV does not exist.
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Requested column is absent from the header.
    #[error("column {column} not found in {path}")]
    ColumnNotFound { column: String, path: PathBuf },

    /// Target range whose upper bound is not above its lower bound.
    #[error("invalid target range [{lower}, {upper}]")]
    InvalidTargetRange { lower: String, upper: String },

    // === Input Errors ===
    /// Source CSV has no header line.
    #[error("CSV file has no header: {path}")]
    MissingHeader { path: PathBuf },

    /// Data row is too short to contain the target column.
    #[error("line {line} of {path} has no value for column {column}")]
    MissingField {
        line: u64,
        column: String,
        path: PathBuf,
    },

    /// Target field is not a decimal literal.
    #[error("line {line} of {path}: invalid number '{value}' in column {column}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
        path: PathBuf,
    },

    /// Header present but no data rows.
    #[error("no data rows in {path}")]
    EmptyDataset { path: PathBuf },

    // === Computation Errors ===
    /// Min-max scaling over a column whose min equals its max.
    #[error("column {column} has a degenerate range: min and max are both {value}")]
    DegenerateRange { column: String, value: String },

    /// Failure inside the statistics engine.
    #[error(transparent)]
    Stats(#[from] StatsError),

    // === I/O Errors ===
    /// Failed to open or read the source.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a CSV field.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to create, write or flush the destination.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, TransformError>;
