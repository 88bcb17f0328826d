//! Extracted records and the in-memory table they accumulate into
//!
//! A [`QuoteRecord`] is produced once per matched quote element and never
//! changed afterwards. The [`Table`] collects records from every page as
//! rows of nullable text cells under named columns.

mod normalize;

pub use normalize::{normalize_column_name, normalize_table};

/// Column names produced by the quote parser, in creation order
pub const QUOTE_COLUMNS: [&str; 3] = ["text", "author", "tags"];

/// One row of the table; `None` is a null cell
pub type Row = Vec<Option<String>>;

/// One extracted quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Quote text, `None` when the element has no text child
    pub text: Option<String>,

    /// Author name, `None` when the element has no author child
    pub author: Option<String>,

    /// Comma-joined tags in document order; empty when there are none
    pub tags: String,
}

impl QuoteRecord {
    /// Converts the record into a row ordered like [`QUOTE_COLUMNS`]
    pub fn into_row(self) -> Row {
        vec![self.text, self.author, Some(self.tags)]
    }
}

/// Rows with named columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table with the given columns
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from columns and rows, fitting each row to the column count
    pub fn with_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Builds the quote table from parsed records
    pub fn from_records(records: Vec<QuoteRecord>) -> Self {
        let columns = QUOTE_COLUMNS.iter().map(|c| c.to_string()).collect();
        let rows = records.into_iter().map(QuoteRecord::into_row).collect();
        Self { columns, rows }
    }

    /// Appends a row. Short rows are padded with nulls, long rows truncated.
    pub fn push_row(&mut self, mut row: Row) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of the named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the cell at `row` in the named column, `None` for null or out of range
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)?.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Row>) {
        (self.columns, self.rows)
    }
}
