//! Markdown preview of an extracted table
//!
//! Terminal counterpart of the CSV viewer: renders the header and the first
//! rows of a table so the output can be checked without opening a
//! spreadsheet.

use crate::table::Table;

/// Rows shown when no limit is given
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Formats up to `limit` rows of a table as a Markdown table
///
/// # Arguments
///
/// * `table` - The table to render
/// * `limit` - Maximum number of data rows to include
///
/// # Returns
///
/// A Markdown string ending with a row count line
pub fn format_preview(table: &Table, limit: usize) -> String {
    let mut md = String::new();

    if table.columns().is_empty() {
        md.push_str("_Empty table_\n");
        return md;
    }

    // Header
    md.push_str(&format_line(table.columns().iter().map(String::as_str)));
    md.push_str(&format_line(table.columns().iter().map(|_| "---")));

    // Rows
    for row in table.rows().iter().take(limit) {
        md.push_str(&format_line(
            row.iter().map(|cell| cell.as_deref().unwrap_or("")),
        ));
    }

    md.push('\n');
    let shown = table.len().min(limit);
    if shown < table.len() {
        md.push_str(&format!("Showing {} of {} rows\n", shown, table.len()));
    } else {
        md.push_str(&format!("{} rows\n", table.len()));
    }

    md
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<String> = cells.map(escape_cell).collect();
    format!("| {} |\n", cells.join(" | "))
}

/// Escapes pipes and flattens line breaks so a cell stays on one line
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\r', '\n'], " ")
}
