//! CSV serialization of tables
//!
//! Output is comma-delimited UTF-8 with a header row and no index column.
//! Null cells are written as empty fields.

use crate::table::Table;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a table to a CSV file
///
/// Missing parent directories are created and an existing file is
/// overwritten.
///
/// # Arguments
///
/// * `table` - The table to write
/// * `output_path` - Destination file
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path written to
/// * `Err(ExtractorError)` - Failed to create directories or write the file
pub fn write_csv(table: &Table, output_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;

    let resolved = fs::canonicalize(output_path)?;
    tracing::info!("Saved cleaned CSV to: {}", resolved.display());

    Ok(resolved)
}

/// Reads a CSV file with a header row into a table
///
/// Every cell is read as text; empty fields stay empty strings.
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)?;

    let columns = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(columns);

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|field| Some(field.to_string())).collect());
    }

    tracing::debug!("Read {} rows from {}", table.len(), path.display());

    Ok(table)
}
