//! Programmatic entry points.

use std::path::Path;

use csvnorm_stats::ScoringSummary;

use crate::error::{Result, TransformError};
use crate::options::{NormalizationMethod, NormalizeOptions};
use crate::task::NormalizationTask;

/// Normalizes one column of a CSV file into a new CSV file.
pub trait Normalizer {
    /// Standardize `column` by z-score into a new `<column>_z` column.
    fn zscore(&self, source: &Path, destination: &Path, column: &str) -> Result<ScoringSummary>;

    /// Scale `column` by min-max into a new `<column>_mm` column.
    fn min_max_scaling(
        &self,
        source: &Path,
        destination: &Path,
        column: &str,
    ) -> Result<ScoringSummary>;
}

/// File-backed [`Normalizer`].
#[derive(Debug, Clone, Default)]
pub struct CsvNormalizer {
    options: NormalizeOptions,
}

impl CsvNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Run `method`, naming the output column after the method suffix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SourceNotFound`] before touching any file
    /// when `source` does not exist; all other validation happens in the
    /// task.
    pub fn normalize(
        &self,
        method: NormalizationMethod,
        source: &Path,
        destination: &Path,
        column: &str,
    ) -> Result<ScoringSummary> {
        self.normalize_into(method, source, destination, column, &method.output_column(column))
    }

    /// Like [`CsvNormalizer::normalize`] with an explicit output column name.
    pub fn normalize_into(
        &self,
        method: NormalizationMethod,
        source: &Path,
        destination: &Path,
        column: &str,
        output_column: &str,
    ) -> Result<ScoringSummary> {
        if !source.exists() {
            return Err(TransformError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        NormalizationTask::new(source, destination, column, output_column)
            .with_options(self.options.clone())
            .run(method)
    }
}

impl Normalizer for CsvNormalizer {
    fn zscore(&self, source: &Path, destination: &Path, column: &str) -> Result<ScoringSummary> {
        self.normalize(NormalizationMethod::ZScore, source, destination, column)
    }

    fn min_max_scaling(
        &self,
        source: &Path,
        destination: &Path,
        column: &str,
    ) -> Result<ScoringSummary> {
        self.normalize(NormalizationMethod::MinMax, source, destination, column)
    }
}
