//! Output module for writing and previewing extracted tables
//!
//! This module handles:
//! - Writing the normalized table to a CSV file
//! - Reading a CSV file in that same shape back into a table
//! - Rendering a table as Markdown for terminal preview

mod csv_file;
mod preview;

pub use csv_file::{read_csv, write_csv};
pub use preview::{format_preview, DEFAULT_PREVIEW_ROWS};
