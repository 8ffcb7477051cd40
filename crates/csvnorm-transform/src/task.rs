//! CSV normalization task.
//!
//! A task reads the whole source file, validates and summarizes the target
//! column, computes every normalized value, and only then creates the
//! destination. Any failure before the write leaves the destination
//! untouched.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bigdecimal::BigDecimal;
use csv::{QuoteStyle, WriterBuilder};
use csvnorm_stats::{ScoringSummary, StatsError, format_decimal};
use tracing::{debug, info, info_span, trace};

use crate::dataset::{ColumnDataset, read_column_dataset};
use crate::error::{Result, TransformError};
use crate::formula;
use crate::options::{NormalizationMethod, NormalizeOptions};

/// Line separator written between output rows.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line separator written between output rows.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// One normalization run from a source CSV to a destination CSV.
#[derive(Debug, Clone)]
pub struct NormalizationTask {
    source: PathBuf,
    destination: PathBuf,
    column: String,
    output_column: String,
    options: NormalizeOptions,
}

impl NormalizationTask {
    /// Normalize `column` of `source` into `destination`, writing the new
    /// values under `output_column` right after the source column.
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        column: impl Into<String>,
        output_column: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            column: column.into(),
            output_column: output_column.into(),
            options: NormalizeOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn run_min_max(&self) -> Result<ScoringSummary> {
        self.run(NormalizationMethod::MinMax)
    }

    pub fn run_z_score(&self) -> Result<ScoringSummary> {
        self.run(NormalizationMethod::ZScore)
    }

    /// Execute the task with `method` and return the source column summary.
    pub fn run(&self, method: NormalizationMethod) -> Result<ScoringSummary> {
        let span = info_span!(
            "normalize",
            method = %method,
            column = %self.column,
            source = %self.source.display()
        );
        let _guard = span.enter();

        let dataset = read_column_dataset(&self.source, &self.column)?;
        let policy = &self.options.policy;
        let summary = ScoringSummary::from_values(dataset.values(), policy).map_err(|err| {
            match err {
                StatsError::EmptyDataset => TransformError::EmptyDataset {
                    path: self.source.clone(),
                },
                other => TransformError::Stats(other),
            }
        })?;

        let normalized = self.normalize(method, &dataset, &summary)?;
        let rendered = self.render(&dataset, &normalized)?;
        self.write_output(rendered.as_bytes())?;

        info!(
            rows = dataset.len(),
            destination = %self.destination.display(),
            "normalization complete"
        );
        Ok(summary)
    }

    fn normalize(
        &self,
        method: NormalizationMethod,
        dataset: &ColumnDataset,
        summary: &ScoringSummary,
    ) -> Result<Vec<String>> {
        let policy = &self.options.policy;
        if method == NormalizationMethod::MinMax && summary.min() == summary.max() {
            return Err(TransformError::DegenerateRange {
                column: self.column.clone(),
                value: format_decimal(summary.min()),
            });
        }
        debug!(
            method = %method,
            target_range = ?self.options.target_range,
            "applying formula"
        );

        dataset
            .values()
            .iter()
            .enumerate()
            .map(|(row, value)| -> Result<String> {
                let result: BigDecimal = match method {
                    NormalizationMethod::MinMax => {
                        formula::min_max(value, summary, &self.options.target_range, policy)?
                    }
                    NormalizationMethod::ZScore => formula::z_score(value, summary, policy)?,
                };
                let text = format_decimal(&result);
                trace!(row, value = %value, normalized = %text, "normalized row");
                Ok(text)
            })
            .collect()
    }

    /// Render header and rows with the new field spliced in after the source
    /// column. Everything else on each line is copied verbatim. The final row
    /// carries no line separator.
    fn render(&self, dataset: &ColumnDataset, normalized: &[String]) -> Result<String> {
        let header_field = self.quoted_output_column()?;
        let lines: Vec<String> = std::iter::once(dataset.header().with_field_after(&header_field))
            .chain(
                dataset
                    .rows()
                    .iter()
                    .zip(normalized)
                    .map(|(row, value)| row.with_field_after(value)),
            )
            .collect();
        Ok(lines.join(LINE_SEPARATOR))
    }

    /// The output column name as a CSV field, quoted only when needed.
    fn quoted_output_column(&self) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .from_writer(Vec::new());
        writer
            .write_field(&self.output_column)
            .map_err(|source| TransformError::Csv {
                path: self.destination.clone(),
                source,
            })?;
        let bytes = writer.into_inner().map_err(|err| TransformError::Write {
            path: self.destination.clone(),
            source: std::io::Error::other(err.to_string()),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_output(&self, contents: &[u8]) -> Result<()> {
        let write_error = |source| TransformError::Write {
            path: self.destination.clone(),
            source,
        };
        let file = File::create(&self.destination).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
        debug!(bytes = contents.len(), "wrote destination");
        Ok(())
    }
}
