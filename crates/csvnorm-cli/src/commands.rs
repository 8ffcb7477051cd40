//! The normalize command: argument validation and task dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use csvnorm_stats::ScoringSummary;
use csvnorm_transform::{CsvNormalizer, NormalizationMethod, NormalizeOptions};
use tracing::info;

/// Suffix of the file written into the destination directory.
pub const OUTPUT_SUFFIX: &str = "_normalized.csv";

/// Everything the normalize command needs, already parsed.
#[derive(Debug, Clone)]
pub struct NormalizeRequest {
    pub source: PathBuf,
    pub destination_dir: PathBuf,
    pub column: String,
    pub method: NormalizationMethod,
    /// Overrides the `<column>_mm` / `<column>_z` default.
    pub output_column: Option<String>,
    pub options: NormalizeOptions,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub output: PathBuf,
    pub output_column: String,
    pub method: NormalizationMethod,
    pub summary: ScoringSummary,
}

/// `<dir>/<source-stem>_normalized.csv`.
pub fn output_path(source: &Path, destination_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    destination_dir.join(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Check the source, destination directory and output file; return the
/// output path.
pub fn validate_request(request: &NormalizeRequest) -> Result<PathBuf> {
    if !request.source.is_file() {
        bail!("source file not found: {}", request.source.display());
    }
    if !request.destination_dir.is_dir() {
        bail!(
            "destination is not a directory: {}",
            request.destination_dir.display()
        );
    }
    let output = output_path(&request.source, &request.destination_dir);
    if output.exists() {
        bail!("output file already exists: {}", output.display());
    }
    Ok(output)
}

pub fn run_normalize(request: &NormalizeRequest) -> Result<NormalizeOutcome> {
    let output = validate_request(request)?;
    let output_column = request
        .output_column
        .clone()
        .unwrap_or_else(|| request.method.output_column(&request.column));
    info!(
        source = %request.source.display(),
        output = %output.display(),
        method = %request.method,
        "starting normalization"
    );

    let summary = CsvNormalizer::new(request.options.clone())
        .normalize_into(
            request.method,
            &request.source,
            &output,
            &request.column,
            &output_column,
        )
        .with_context(|| {
            format!(
                "{} normalization of column {} in {}",
                request.method,
                request.column,
                request.source.display()
            )
        })?;

    Ok(NormalizeOutcome {
        output,
        output_column,
        method: request.method,
        summary,
    })
}
