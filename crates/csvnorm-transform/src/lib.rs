//! CSV column normalization.
//!
//! This crate reads one numeric column of a CSV file, summarizes it with
//! [`csvnorm_stats`], and writes a copy of the file with a normalized column
//! inserted immediately to the right of the source column.
//!
//! # Features
//!
//! - **Min-max scaling**: `(x - min) / (max - min)`, onto `[0, 1]` or a
//!   configured [`TargetRange`]
//! - **Z-score standardization**: `(x - mean) / standard deviation`
//! - **Fail closed**: the destination is only created once every row has
//!   been parsed and normalized
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use csvnorm_transform::{CsvNormalizer, Normalizer};
//!
//! let summary = CsvNormalizer::default().min_max_scaling(
//!     Path::new("marks.csv"),
//!     Path::new("out/marks_normalized.csv"),
//!     "score",
//! )?;
//! println!("mean = {}", summary.to_report().mean);
//! ```

mod dataset;
mod error;
pub mod formula;
mod normalizer;
mod options;
mod task;

// === Error Types ===
pub use error::{Result, TransformError};

// === Options ===
pub use options::{NormalizationMethod, NormalizeOptions, TargetRange, UnknownMethod};

// === Dataset ===
pub use dataset::{ColumnDataset, SourceLine, read_column_dataset};

// === Task ===
pub use task::{LINE_SEPARATOR, NormalizationTask};

// === Entry Points ===
pub use normalizer::{CsvNormalizer, Normalizer};
