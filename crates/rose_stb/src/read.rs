//! Types for reading STB data tables
//!

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};
use tracing::{debug, instrument};

use rose_text::{read_prefixed_string, LengthPrefix};

use crate::error::{Error, Result};
use crate::types::{StbFile, ACCEPTED_MAGICS, ENCODING};

impl StbFile {
    /// Read an STB file into a table.
    ///
    /// The first logical row is a header row: its cells become the column
    /// names and it is excluded from the row set. Any short read is
    /// [`Error::Truncated`] — unlike the STL codec, this format fails fast
    /// on malformed input.
    #[instrument(skip(reader), err)]
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<StbFile> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if !ACCEPTED_MAGICS.contains(&&magic) {
            return Err(Error::InvalidMagic(magic));
        }

        let data_offset = reader.read_u32::<LittleEndian>()?;
        let row_count = reader.read_u32::<LittleEndian>()?;
        let column_count = reader.read_u32::<LittleEndian>()?;
        let row_size = reader.read_u32::<LittleEndian>()?;
        debug!(row_count, column_count, data_offset, "parsed STB header");

        let mut column_sizes = Vec::with_capacity(column_count as usize + 1);
        for _ in 0..=column_count {
            column_sizes.push(reader.read_i16::<LittleEndian>()?);
        }

        let mut column_names = Vec::with_capacity(column_count as usize + 1);
        for _ in 0..=column_count {
            column_names.push(read_prefixed_string(
                &mut reader,
                LengthPrefix::Fixed16,
                ENCODING,
            )?);
        }

        let mut rows = Vec::with_capacity(row_count.saturating_sub(1) as usize);
        for _ in 1..row_count {
            let name = read_prefixed_string(&mut reader, LengthPrefix::Fixed16, ENCODING)?;
            rows.push(vec![name]);
        }

        if reader.stream_position()? < data_offset as u64 {
            reader.seek(SeekFrom::Start(data_offset as u64))?;
        }

        for row in &mut rows {
            for _ in 1..column_count {
                row.push(read_prefixed_string(
                    &mut reader,
                    LengthPrefix::Fixed16,
                    ENCODING,
                )?);
            }
        }

        Ok(StbFile {
            row_size,
            column_sizes,
            column_names,
            rows,
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tracing_test::traced_test;

    use crate::error::{Error, Result};
    use crate::types::StbFile;

    /// Two columns, one data row ("R1", "hello"), cell bodies at offset 39.
    #[rustfmt::skip]
    fn minimal_table() -> Vec<u8> {
        vec![
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
        ]
    }

    #[traced_test]
    #[test]
    fn parse_minimal_table() -> Result<()> {
        let stb = StbFile::read(Cursor::new(minimal_table()))?;

        assert_eq!(stb.column_names(), ["A", "B", "C"]);
        assert_eq!(stb.row_count(), 1);
        assert_eq!(stb.get_cell(0, 0)?, "R1");
        assert_eq!(stb.get_cell(0, 1)?, "hello");

        Ok(())
    }

    #[test]
    fn accepts_both_magic_tags() -> Result<()> {
        let mut bytes = minimal_table();
        bytes[3] = b'0';

        let stb = StbFile::read(Cursor::new(bytes))?;
        assert_eq!(stb.get_cell(0, 1)?, "hello");

        Ok(())
    }

    #[test]
    fn rejects_unknown_magic() {
        let mut bytes = minimal_table();
        bytes[0] = b'X';

        assert!(matches!(
            StbFile::read(Cursor::new(bytes)),
            Err(Error::InvalidMagic(_))
        ));
    }

    #[test]
    fn seeks_forward_to_data_offset() -> Result<()> {
        // Two junk bytes between the row names and the cell bodies
        let mut bytes = minimal_table();
        bytes.splice(39..39, [0xEE, 0xEE]);
        bytes[4] = 41;

        let stb = StbFile::read(Cursor::new(bytes))?;
        assert_eq!(stb.get_cell(0, 1)?, "hello");

        Ok(())
    }

    #[test]
    fn short_reads_are_truncated() {
        let bytes = minimal_table();

        for cut in [2, 10, 24, 30, 37, 42] {
            let result = StbFile::read(Cursor::new(&bytes[..cut]));
            assert!(
                matches!(result, Err(Error::Truncated)),
                "cut at {cut} should be truncated"
            );
        }
    }
}
