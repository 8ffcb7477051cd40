//! Integration tests for the normalize command.

use std::fs;

use tempfile::TempDir;

use csvnorm_cli::commands::{NormalizeRequest, output_path, run_normalize, validate_request};
use csvnorm_cli::summary::{summary_json, summary_table};
use csvnorm_transform::{NormalizationMethod, NormalizeOptions};

fn request(dir: &TempDir, method: NormalizationMethod) -> NormalizeRequest {
    let source = dir.path().join("marks.csv");
    fs::write(&source, "id,score\n1,10\n2,20\n3,30\n").expect("write source");
    let destination_dir = dir.path().join("out");
    fs::create_dir_all(&destination_dir).expect("create destination");
    NormalizeRequest {
        source,
        destination_dir,
        column: "score".to_string(),
        method,
        output_column: None,
        options: NormalizeOptions::default(),
    }
}

#[test]
fn writes_normalized_file_next_to_stem() {
    let dir = TempDir::new().unwrap();
    let request = request(&dir, NormalizationMethod::MinMax);

    let outcome = run_normalize(&request).expect("run");

    assert_eq!(outcome.output, dir.path().join("out/marks_normalized.csv"));
    assert_eq!(outcome.output_column, "score_mm");
    let written = fs::read_to_string(&outcome.output).unwrap();
    assert!(written.starts_with("id,score,score_mm"));
}

#[test]
fn output_column_override() {
    let dir = TempDir::new().unwrap();
    let mut request = request(&dir, NormalizationMethod::ZScore);
    request.output_column = Some("standardized".to_string());

    let outcome = run_normalize(&request).expect("run");

    let written = fs::read_to_string(&outcome.output).unwrap();
    assert!(written.starts_with("id,score,standardized"));
}

#[test]
fn rejects_missing_source() {
    let dir = TempDir::new().unwrap();
    let mut request = request(&dir, NormalizationMethod::MinMax);
    request.source = dir.path().join("absent.csv");

    let err = validate_request(&request).unwrap_err();
    assert!(err.to_string().starts_with("source file not found"));
}

#[test]
fn rejects_destination_that_is_not_a_directory() {
    let dir = TempDir::new().unwrap();
    let mut request = request(&dir, NormalizationMethod::MinMax);
    request.destination_dir = request.source.clone();

    let err = validate_request(&request).unwrap_err();
    assert!(err.to_string().starts_with("destination is not a directory"));
}

#[test]
fn refuses_to_overwrite_existing_output() {
    let dir = TempDir::new().unwrap();
    let request = request(&dir, NormalizationMethod::MinMax);
    let existing = output_path(&request.source, &request.destination_dir);
    fs::write(&existing, "keep me").unwrap();

    let err = run_normalize(&request).unwrap_err();

    assert!(err.to_string().starts_with("output file already exists"));
    assert_eq!(fs::read_to_string(&existing).unwrap(), "keep me");
}

#[test]
fn core_failure_carries_context() {
    let dir = TempDir::new().unwrap();
    let mut request = request(&dir, NormalizationMethod::ZScore);
    request.column = "grade".to_string();

    let err = run_normalize(&request).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("z-score normalization of column grade"));
    assert!(message.contains("column grade not found"));
    assert!(!output_path(&request.source, &request.destination_dir).exists());
}

#[test]
fn summary_renders_as_table_and_json() {
    let dir = TempDir::new().unwrap();
    let request = request(&dir, NormalizationMethod::MinMax);
    let outcome = run_normalize(&request).expect("run");

    let table = summary_table(&outcome).to_string();
    assert!(table.contains("Standard deviation"));
    assert!(table.contains("20.00"));

    let json: serde_json::Value = serde_json::from_str(&summary_json(&outcome).unwrap()).unwrap();
    assert_eq!(json["method"], "min-max");
    assert_eq!(json["output_column"], "score_mm");
    assert_eq!(json["summary"]["max"], "30.00");
}
