//! Types for writing LTB language table files
//!

use binrw::BinWrite;
use std::io::{Seek, SeekFrom, Write};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::read::LtbFile;
use crate::types::{LtbCell, LtbHeader};

impl LtbFile {
    /// Serialize the table, replacing the selected columns with edited text.
    ///
    /// `selected_columns` names the column indices whose text comes from
    /// `edited`; `edited` must hold one row per grid row, each with one
    /// string per selected column. Every other column is re-read from the
    /// current table and re-encoded as-is, with absent cells becoming empty
    /// strings.
    ///
    /// The whole cell table and blob are rewritten on every save: cells
    /// address the blob by absolute offset, so a single changed string
    /// length moves every string after it. The cell table is emitted first
    /// as zeroed placeholders and backpatched once the blob layout is
    /// known.
    ///
    /// On success the in-memory table is updated to the just-written state.
    #[instrument(skip(self, writer, edited), err)]
    pub fn write_with_update<W: Write + Seek>(
        &mut self,
        mut writer: W,
        edited: &[Vec<String>],
        selected_columns: &[usize],
    ) -> Result<()> {
        if edited.len() != self.rows
            || edited.iter().any(|row| row.len() != selected_columns.len())
        {
            return Err(Error::InvalidEditTable {
                rows: self.rows,
                columns: selected_columns.len(),
            });
        }

        let header = LtbHeader {
            columns: self.columns as u32,
            rows: self.rows as u32,
        };
        header.write(&mut writer)?;

        for _ in 0..self.rows * self.columns {
            LtbCell::default().write(&mut writer)?;
        }
        let new_data_offset = writer.stream_position()? as u32;

        let unit = self.encoding.unit_width();
        let mut blob = Vec::new();
        let mut cells = Vec::with_capacity(self.rows * self.columns);

        for row in 0..self.rows {
            for column in 0..self.columns {
                let text = match selected_columns.iter().position(|&c| c == column) {
                    Some(index) => edited[row][index].clone(),
                    None => self.get(row, column).unwrap_or_default(),
                };

                let encoded = self.encoding.encode_terminated(&text)?;
                let size = u16::try_from(encoded.len() / unit)
                    .map_err(|_| Error::CellTooLong { row, column })?;

                cells.push(LtbCell {
                    offset: new_data_offset + blob.len() as u32,
                    size,
                });
                blob.extend_from_slice(&encoded);
            }
        }

        writer.write_all(&blob)?;

        writer.seek(SeekFrom::Start(8))?;
        for cell in &cells {
            cell.write(&mut writer)?;
        }

        self.cells = cells;
        self.data = blob;
        self.data_offset = new_data_offset;

        Ok(())
    }
}
