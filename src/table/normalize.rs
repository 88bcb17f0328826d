//! Table normalization
//!
//! Applied once to the accumulated table before writing:
//! 1. Column names are trimmed, lowercased and have spaces replaced by `_`
//! 2. Every cell is converted to text and trimmed; nulls become empty text
//! 3. Exact duplicate rows are dropped, keeping the first occurrence
//!
//! All cells hold text, so every column counts as a textual column for step 2.
//! Row positions are implicit in the row vector and stay contiguous from zero.

use crate::table::{Row, Table};
use std::collections::HashSet;

/// Normalizes a single column name
///
/// # Example
///
/// ```
/// use web_extractor::table::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Quote Text "), "quote_text");
/// ```
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Normalizes column names, trims cells and removes duplicate rows
///
/// Normalizing an already-normalized table returns it unchanged.
pub fn normalize_table(table: Table) -> Table {
    let (columns, rows) = table.into_parts();

    let columns: Vec<String> = columns.iter().map(|c| normalize_column_name(c)).collect();

    let before = rows.len();
    let rows = dedup_rows(rows.into_iter().map(trim_row));

    if rows.len() < before {
        tracing::debug!("Removed {} duplicate rows", before - rows.len());
    }

    Table::with_rows(columns, rows)
}

/// Converts every cell to trimmed text
fn trim_row(row: Row) -> Row {
    row.into_iter()
        .map(|cell| Some(cell.as_deref().unwrap_or_default().trim().to_string()))
        .collect()
}

/// Keeps the first occurrence of each distinct row, preserving order
fn dedup_rows(rows: impl Iterator<Item = Row>) -> Vec<Row> {
    let mut seen: HashSet<Row> = HashSet::new();
    let mut unique = Vec::new();

    for row in rows {
        if seen.insert(row.clone()) {
            unique.push(row);
        }
    }

    unique
}
