//! Loading one numeric column of a CSV file.
//!
//! Records are physical lines. Each line is kept verbatim so the output can
//! splice the normalized field in without re-quoting anything else. Quoted
//! fields may contain commas but not line breaks. Blank lines are rows like
//! any other and fail for lack of a value.

use std::fs;
use std::path::Path;

use bigdecimal::BigDecimal;
use csv_core::{ReadFieldResult, Reader};
use csvnorm_stats::parse_decimal;
use tracing::debug;

use crate::error::{Result, TransformError};

/// A line of the source file, kept as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    number: u64,
    text: String,
    field_end: usize,
}

impl SourceLine {
    /// 1-based line number in the source file.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The raw line, without its terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The raw line with `,value` inserted right after the target field.
    pub fn with_field_after(&self, value: &str) -> String {
        let (head, tail) = self.text.split_at(self.field_end);
        format!("{head},{value}{tail}")
    }
}

/// A CSV file's header and data rows, paired 1:1 with the parsed values of
/// one column. Row order is file order.
#[derive(Debug, Clone)]
pub struct ColumnDataset {
    header: SourceLine,
    column_index: usize,
    rows: Vec<SourceLine>,
    values: Vec<BigDecimal>,
}

impl ColumnDataset {
    pub fn header(&self) -> &SourceLine {
        &self.header
    }

    /// 0-based position of the source column.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Data rows as read.
    pub fn rows(&self) -> &[SourceLine] {
        &self.rows
    }

    /// Parsed column values, one per row.
    pub fn values(&self) -> &[BigDecimal] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An unescaped field and the byte offset in its line where the raw field
/// ends (before the following delimiter).
#[derive(Debug)]
struct ScannedField {
    text: String,
    end: usize,
}

/// Split one physical line into fields.
///
/// A blank line has no fields.
fn scan_fields(line: &str) -> Vec<ScannedField> {
    let mut reader = Reader::new();
    let mut input = line.as_bytes();
    let mut output = vec![0; line.len() + 1];
    let (mut consumed, mut written) = (0, 0);
    let mut fields = Vec::new();
    loop {
        let (result, nin, nout) = reader.read_field(input, &mut output[written..]);
        input = &input[nin..];
        consumed += nin;
        written += nout;
        match result {
            ReadFieldResult::InputEmpty => {}
            ReadFieldResult::OutputFull => output.resize(output.len() * 2, 0),
            ReadFieldResult::Field { record_end } => {
                fields.push(ScannedField {
                    text: String::from_utf8_lossy(&output[..written]).into_owned(),
                    end: if record_end { consumed } else { consumed - 1 },
                });
                written = 0;
                if record_end {
                    break;
                }
            }
            ReadFieldResult::End => break,
        }
    }
    fields
}

/// Trims whitespace from a header field. A leading byte-order mark is
/// already dropped by the scanner.
fn normalize_header(value: &str) -> &str {
    value.trim()
}

/// Read `path` and extract `column` as decimals.
///
/// Fails on a missing header or column, a row without the column (blank
/// lines included), or a field that is not a decimal literal. Rows are never
/// skipped.
pub fn read_column_dataset(path: &Path, column: &str) -> Result<ColumnDataset> {
    let contents = fs::read_to_string(path).map_err(|source| TransformError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = (1u64..).zip(contents.lines());

    let (number, text) = lines.next().ok_or_else(|| TransformError::MissingHeader {
        path: path.to_path_buf(),
    })?;
    let header_fields = scan_fields(text);
    let column_index = header_fields
        .iter()
        .position(|field| normalize_header(&field.text) == column)
        .ok_or_else(|| TransformError::ColumnNotFound {
            column: column.to_string(),
            path: path.to_path_buf(),
        })?;
    let header = SourceLine {
        number,
        text: text.to_string(),
        field_end: header_fields[column_index].end,
    };
    debug!(column, column_index, "resolved target column");

    let mut rows = Vec::new();
    let mut values = Vec::new();
    for (number, text) in lines {
        let fields = scan_fields(text);
        let field = fields
            .get(column_index)
            .ok_or_else(|| TransformError::MissingField {
                line: number,
                column: column.to_string(),
                path: path.to_path_buf(),
            })?;
        let value = parse_decimal(&field.text).map_err(|_| TransformError::InvalidNumber {
            line: number,
            column: column.to_string(),
            value: field.text.clone(),
            path: path.to_path_buf(),
        })?;
        values.push(value);
        rows.push(SourceLine {
            number,
            text: text.to_string(),
            field_end: field.end,
        });
    }

    if values.is_empty() {
        return Err(TransformError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    debug!(rows = values.len(), "loaded column dataset");

    Ok(ColumnDataset {
        header,
        column_index,
        rows,
        values,
    })
}
