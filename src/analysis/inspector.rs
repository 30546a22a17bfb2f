use std::collections::HashSet;
use std::fmt::Write;

use crate::models::{Column, Transaction};

/// Rows shown in the dataset preview.
pub const PREVIEW_ROWS: usize = 5;

/// Structural summary: row count, then one line per column with its
/// non-null count and type.
pub fn info_report(records: &[Transaction]) -> String {
    let mut report = String::new();
    let name_width = column_name_width();

    let _ = writeln!(report, "Sales dataset summary");

    if records.is_empty() {
        let _ = writeln!(report, "Entries: 0");
    } else {
        let _ = writeln!(report, "Entries: {} (rows 0 to {})", records.len(), records.len() - 1);
    }

    let _ = writeln!(report, "Data columns (total {} columns):", Column::ALL.len());
    let _ = writeln!(report, " #   {:<name_width$}  {:<14}  {}", "Column", "Non-Null Count", "Dtype");
    let _ = writeln!(report, "---  {:<name_width$}  {:<14}  {}", "-".repeat(name_width), "-".repeat(14), "-".repeat(10));

    for (position, column) in Column::ALL.iter().enumerate() {
        let non_null = records.len() - missing_count(records, *column);
        let _ = writeln!(
            report,
            " {:<3} {:<name_width$}  {:<14}  {}",
            position,
            column.name(),
            format!("{non_null} non-null"),
            column.dtype()
        );
    }

    report
}

/// Aligned table of the first `rows` records with their positions.
pub fn head_report(records: &[Transaction], rows: usize) -> String {
    let preview = &records[..records.len().min(rows)];
    let index_width = preview.len().saturating_sub(1).to_string().len();

    let cells: Vec<Vec<String>> = preview.iter()
        .map(|record| Column::ALL.iter().map(|column| column.render(record)).collect())
        .collect();

    let widths: Vec<usize> = Column::ALL.iter()
        .enumerate()
        .map(|(position, column)| {
            cells.iter().map(|row| row[position].len()).fold(column.name().len(), usize::max)
        })
        .collect();

    let mut report = String::new();
    let _ = write!(report, "{:index_width$}", "");

    for (column, width) in Column::ALL.iter().zip(&widths) {
        let _ = write!(report, "  {}", align(column, column.name(), *width));
    }

    let _ = writeln!(report);

    for (position, row) in cells.iter().enumerate() {
        let _ = write!(report, "{position:<index_width$}");

        for ((column, cell), width) in Column::ALL.iter().zip(row).zip(&widths) {
            let _ = write!(report, "  {}", align(column, cell, *width));
        }

        let _ = writeln!(report);
    }

    report
}

/// Counts records identical to an earlier record in the dataset.
pub fn duplicate_count(records: &[Transaction]) -> usize {
    let mut seen = HashSet::with_capacity(records.len());

    records.iter().filter(|record| !seen.insert(*record)).count()
}

pub fn missing_count(records: &[Transaction], column: Column) -> usize {
    records.iter().filter(|record| column.is_missing(record)).count()
}

pub fn duplicates_report(records: &[Transaction]) -> String {
    format!("Duplicate entries: {}", duplicate_count(records))
}

pub fn missing_values_report(records: &[Transaction]) -> String {
    let name_width = column_name_width();
    let mut report = String::from("Missing values:");

    for column in Column::ALL {
        let _ = write!(report, "\n{:<name_width$}  {}", column.name(), missing_count(records, column));
    }

    report
}

fn column_name_width() -> usize {
    Column::ALL.iter().map(|column| column.name().len()).max().unwrap_or_default()
}

fn align(column: &Column, value: &str, width: usize) -> String {
    if column.is_numeric() {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}
