use std::io::Cursor;

use pretty_assertions::assert_eq;
use tracing_test::traced_test;

use rose_ltb::error::Result;
use rose_ltb::LtbFile;
use rose_text::TextEncoding;

/// Build a populated grid the way the game ships them: every cell present,
/// sizes counting the terminator.
fn populated_grid(rows: u32, columns: u32) -> Vec<u8> {
    let data_offset = 8 + rows * columns * 6;
    let mut cells = Vec::new();
    let mut blob = Vec::new();

    for row in 0..rows {
        for column in 0..columns {
            let encoded: Vec<u8> = format!("line {row}-{column}")
                .encode_utf16()
                .chain(std::iter::once(0))
                .flat_map(|unit| unit.to_le_bytes())
                .collect();

            cells.extend((data_offset + blob.len() as u32).to_le_bytes());
            cells.extend(((encoded.len() / 2) as u16).to_le_bytes());
            blob.extend(encoded);
        }
    }

    let mut bytes = Vec::new();
    bytes.extend(columns.to_le_bytes());
    bytes.extend(rows.to_le_bytes());
    bytes.extend(cells);
    bytes.extend(blob);
    bytes
}

#[traced_test]
#[test]
fn unedited_rewrite_preserves_every_cell() -> Result<()> {
    let original = LtbFile::read(Cursor::new(populated_grid(20, 3)), TextEncoding::Utf16Le)?;

    let mut rewritten = LtbFile::read(Cursor::new(populated_grid(20, 3)), TextEncoding::Utf16Le)?;
    let mut output = Cursor::new(Vec::new());
    let empty_rows = vec![Vec::new(); 20];
    rewritten.write_with_update(&mut output, &empty_rows, &[])?;

    let reread = LtbFile::read(Cursor::new(output.into_inner()), TextEncoding::Utf16Le)?;
    assert_eq!(reread.rows(), original.rows());
    assert_eq!(reread.columns(), original.columns());

    for row in 0..original.rows() {
        for column in 0..original.columns() {
            assert_eq!(
                reread.get(row, column),
                original.get(row, column),
                "cell ({row}, {column})"
            );
        }
    }

    Ok(())
}

#[traced_test]
#[test]
fn edited_and_retained_cells_survive_rewrite() -> Result<()> {
    let mut ltb = LtbFile::read(Cursor::new(populated_grid(10, 3)), TextEncoding::Utf16Le)?;

    // Replace column 1 wholesale, shifting every downstream offset
    let edited: Vec<Vec<String>> = (0..10)
        .map(|row| vec![format!("a much longer replacement for row {row}")])
        .collect();

    let mut output = Cursor::new(Vec::new());
    ltb.write_with_update(&mut output, &edited, &[1])?;

    let reread = LtbFile::read(Cursor::new(output.into_inner()), TextEncoding::Utf16Le)?;
    for row in 0..10 {
        assert_eq!(
            reread.get(row, 1).as_deref(),
            Some(format!("a much longer replacement for row {row}").as_str())
        );
        assert_eq!(
            reread.get(row, 0).as_deref(),
            Some(format!("line {row}-0").as_str())
        );
        assert_eq!(
            reread.get(row, 2).as_deref(),
            Some(format!("line {row}-2").as_str())
        );
    }

    Ok(())
}
