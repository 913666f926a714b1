//! Types for reading LTB language table files
//!

use binrw::BinRead;
use std::io::{Read, Seek};
use tracing::{instrument, warn};

use rose_text::TextEncoding;

use crate::error::{Error, Result};
use crate::types::{LtbCell, LtbHeader};

/// LTB file reader and in-memory table
///
/// ```no_run
/// use std::io::prelude::*;
/// use rose_text::TextEncoding;
///
/// fn first_cell(reader: impl Read + Seek) -> rose_ltb::error::Result<()> {
///     let ltb = rose_ltb::LtbFile::read(reader, TextEncoding::Utf16Le)?;
///
///     if let Some(text) = ltb.get(0, 0) {
///         println!("{}", text);
///     }
///
///     Ok(())
/// }
/// ```
pub struct LtbFile {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<LtbCell>,
    pub(crate) data_offset: u32,
    pub(crate) data: Vec<u8>,
    pub(crate) encoding: TextEncoding,
}

impl LtbFile {
    /// Read an LTB file and its cell table, keeping the string blob as raw
    /// bytes to be decoded on demand.
    #[instrument(skip(reader), err)]
    pub fn read<R: Read + Seek>(mut reader: R, encoding: TextEncoding) -> Result<LtbFile> {
        let header = LtbHeader::read(&mut reader).map_err(|_| Error::MalformedHeader)?;

        let columns = header.columns as usize;
        let rows = header.rows as usize;
        let expected = rows * columns;

        let mut cells = Vec::with_capacity(expected);
        for _ in 0..expected {
            let cell =
                LtbCell::read(&mut reader).map_err(|_| Error::MalformedCellTable { expected })?;
            cells.push(cell);
        }

        let data_offset = reader.stream_position()? as u32;

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        Ok(LtbFile {
            columns,
            rows,
            cells,
            data_offset,
            data,
            encoding,
        })
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The encoding cell strings are stored in.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Decode the string at the given grid position.
    ///
    /// Returns `None` for positions outside the grid and for empty cells.
    /// A cell whose bytes fail to decode is logged and reported as absent
    /// rather than failing the whole table.
    pub fn get(&self, row: usize, column: usize) -> Option<String> {
        let cell = self.cells.get(row * self.columns + column)?;
        if cell.is_empty(self.data_offset) {
            return None;
        }

        let start = (cell.offset - self.data_offset) as usize;
        let end = start + cell.size as usize * self.encoding.unit_width();
        let Some(bytes) = self.data.get(start..end) else {
            warn!(row, column, "cell addresses bytes outside the blob");
            return None;
        };

        match self.encoding.decode(bytes) {
            Ok(text) => Some(text),
            Err(error) => {
                warn!(row, column, %error, "failed to decode cell");
                None
            }
        }
    }

    /// Materialize the selected columns as a row-major table, with absent
    /// cells as empty strings.
    pub fn to_table(&self, selected_columns: &[usize]) -> Vec<Vec<String>> {
        (0..self.rows)
            .map(|row| {
                selected_columns
                    .iter()
                    .map(|&column| self.get(row, column).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
