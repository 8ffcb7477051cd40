//! Summary rendering for the CLI.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::NormalizeOutcome;

/// Table of the six statistics plus the row count.
pub fn summary_table(outcome: &NormalizeOutcome) -> Table {
    let report = outcome.summary.to_report();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    let rows = [
        ("Rows", report.count.to_string()),
        ("Mean", report.mean),
        ("Standard deviation", report.standard_deviation),
        ("Variance", report.variance),
        ("Median", report.median),
        ("Min", report.min),
        ("Max", report.max),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn print_summary(outcome: &NormalizeOutcome) {
    println!("Normalization complete: {}", outcome.output.display());
    println!("Method: {} (column {})", outcome.method, outcome.output_column);
    println!("{}", summary_table(outcome));
}

/// JSON form of the summary, including where the output went.
pub fn summary_json(outcome: &NormalizeOutcome) -> serde_json::Result<String> {
    let value = serde_json::json!({
        "output": outcome.output.display().to_string(),
        "method": outcome.method.name(),
        "output_column": outcome.output_column,
        "summary": outcome.summary.to_report(),
    });
    serde_json::to_string_pretty(&value)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
