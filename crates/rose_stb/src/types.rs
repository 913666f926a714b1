//! In-memory representation of an STB table.

use rose_text::TextEncoding;

use crate::error::{Error, Result};

/// The encoding every STB string is stored in.
pub(crate) const ENCODING: TextEncoding = TextEncoding::EucKr;

/// The magic tags accepted when reading.
pub(crate) const ACCEPTED_MAGICS: [&[u8; 4]; 2] = [b"STB0", b"STB1"];

/// The magic tag emitted when writing.
pub(crate) const CURRENT_MAGIC: &[u8; 4] = b"STB1";

/// An STB data table.
///
/// Each row's element 0 is the row name; the remaining elements are the
/// data cells. Rows may be ragged — [`StbFile::get_cell`] treats positions
/// beyond a row's width as empty, and the shape written to disk is derived
/// from the widest row at save time, not carried over from the file the
/// table was read from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StbFile {
    pub(crate) row_size: u32,
    pub(crate) column_sizes: Vec<i16>,
    pub(crate) column_names: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
}

impl StbFile {
    /// Number of data rows (the pseudo-header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of column names, row-name column included.
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Column names as parsed from the pseudo-header row.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Display row size carried through from the header.
    pub fn row_size(&self) -> u32 {
        self.row_size
    }

    /// Get a cell's text.
    ///
    /// A column beyond the row's current width is an empty string, not an
    /// error — ragged rows are a supported state. A row outside the table
    /// is [`Error::RowOutOfRange`].
    pub fn get_cell(&self, row: usize, column: usize) -> Result<&str> {
        let cells = self.rows.get(row).ok_or(Error::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })?;

        Ok(cells.get(column).map(String::as_str).unwrap_or(""))
    }

    /// Set a cell's text, growing the row with empty strings when `column`
    /// is beyond its current width.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<()> {
        let rows = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(Error::RowOutOfRange { row, rows })?;

        while cells.len() <= column {
            cells.push(String::new());
        }
        cells[column] = value.into();

        Ok(())
    }

    /// Append a data row. Element 0 is the row name.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Append a column with the given header name, filling every existing
    /// row with the default value.
    pub fn add_column(&mut self, name: impl Into<String>, default: &str) {
        self.column_names.push(name.into());
        self.column_sizes.push(0);

        for row in &mut self.rows {
            row.push(default.to_string());
        }
    }
}
