//! Base types for structure of LTB file.

use binrw::{BinRead, BinWrite};

/// LTB file header
///
/// All data is stored in little endian format. Note that the column count
/// precedes the row count.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct LtbHeader {
    /// The number of columns in the grid
    pub columns: u32,

    /// The number of rows in the grid
    pub rows: u32,
}

/// LTB cell record
///
/// Addresses one string in the blob. An offset before the blob start or a
/// size of zero denotes an empty cell.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct LtbCell {
    /// Absolute file offset of the cell's string
    pub offset: u32,

    /// String length in code units, terminator included
    pub size: u16,
}

impl LtbCell {
    /// Whether this record denotes an empty cell relative to the given blob
    /// start.
    pub fn is_empty(&self, data_offset: u32) -> bool {
        self.offset < data_offset || self.size == 0
    }
}
