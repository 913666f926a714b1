//! Types for writing STB data tables
//!

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Seek, SeekFrom, Write};
use tracing::instrument;

use rose_text::{write_prefixed_string, LengthPrefix};

use crate::error::Result;
use crate::types::{StbFile, CURRENT_MAGIC, ENCODING};

impl StbFile {
    /// Serialize the table.
    ///
    /// Always emits the newer `STB1` magic. Row and column counts are
    /// derived from the current in-memory shape — the widest row decides
    /// the column count, and ragged rows are padded with empty cells so the
    /// file re-reads to the same table. The data offset is written as a
    /// placeholder and backpatched once the metadata region's size is
    /// known.
    #[instrument(skip(self, writer), err)]
    pub fn write<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        writer.write_all(CURRENT_MAGIC)?;

        let data_offset_position = writer.stream_position()?;
        writer.write_u32::<LittleEndian>(0)?;

        let row_count = self.rows.len() as u32 + 1;
        let column_count = self.rows.iter().map(Vec::len).max().unwrap_or(0) as u32;

        writer.write_u32::<LittleEndian>(row_count)?;
        writer.write_u32::<LittleEndian>(column_count)?;
        writer.write_u32::<LittleEndian>(self.row_size)?;

        for index in 0..=column_count as usize {
            let size = self.column_sizes.get(index).copied().unwrap_or(0);
            writer.write_i16::<LittleEndian>(size)?;
        }

        for index in 0..=column_count as usize {
            let name = self.column_names.get(index).map(String::as_str).unwrap_or("");
            write_prefixed_string(&mut writer, LengthPrefix::Fixed16, name, ENCODING)?;
        }

        for row in &self.rows {
            let name = row.first().map(String::as_str).unwrap_or("");
            write_prefixed_string(&mut writer, LengthPrefix::Fixed16, name, ENCODING)?;
        }

        let data_offset = writer.stream_position()? as u32;

        for row in &self.rows {
            for column in 1..column_count as usize {
                let cell = row.get(column).map(String::as_str).unwrap_or("");
                write_prefixed_string(&mut writer, LengthPrefix::Fixed16, cell, ENCODING)?;
            }
        }

        writer.seek(SeekFrom::Start(data_offset_position))?;
        writer.write_u32::<LittleEndian>(data_offset)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::{assert_eq, assert_str_eq};
    use std::io::Cursor;
    use tracing_test::traced_test;

    use crate::error::Result;
    use crate::types::StbFile;

    #[traced_test]
    #[test]
    fn write_minimal_table() -> Result<()> {
        let mut stb = StbFile::default();
        stb.add_column("A", "");
        stb.add_column("B", "");
        stb.add_column("C", "");
        stb.add_row(vec!["R1".to_string(), "hello".to_string()]);

        #[rustfmt::skip]
        let expected = vec![
            // Header
            0x53, 0x54, 0x42, 0x31,
            0x27, 0x00, 0x00, 0x00,
            0x02, 0x00, 0x00, 0x00,
            0x02, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            // Column sizes
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            // Column names
            0x01, 0x00, 0x41,
            0x01, 0x00, 0x42,
            0x01, 0x00, 0x43,
            // Row names
            0x02, 0x00, 0x52, 0x31,
            // Cell bodies
            0x05, 0x00, 0x68, 0x65, 0x6C, 0x6C, 0x6F,
        ];

        let mut output = Cursor::new(Vec::new());
        stb.write(&mut output)?;

        assert_str_eq!(
            format!("{:02X?}", output.get_ref()),
            format!("{:02X?}", expected)
        );

        Ok(())
    }

    #[traced_test]
    #[test]
    fn backpatched_offset_points_at_cell_bodies() -> Result<()> {
        let mut stb = StbFile::default();
        stb.add_column("ID", "");
        stb.add_column("Name", "");
        stb.add_row(vec!["NPC_001".to_string(), "guard".to_string()]);
        stb.add_row(vec!["NPC_002".to_string(), "merchant".to_string()]);

        let mut output = Cursor::new(Vec::new());
        stb.write(&mut output)?;
        let bytes = output.into_inner();

        let data_offset = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;

        // The first cell body is "guard" behind its 2-byte length
        assert_eq!(
            u16::from_le_bytes([bytes[data_offset], bytes[data_offset + 1]]),
            5
        );
        assert_eq!(&bytes[data_offset + 2..data_offset + 7], b"guard");

        Ok(())
    }
}
