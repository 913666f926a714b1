//! This library handles reading from and creating **STB** files used by *ROSE Online*.
//!
//! # STB Format Documentation
//!
//! The STB format is a custom binary format that stores a named-column data
//! table: column metadata up front, one "row name" per row, and the
//! remaining cells as a block of length-prefixed strings whose start is
//! recorded in the header. STB files are typically identified with the
//! `.stb` extension.
//!
//! ## File Structure
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic                  | 4 bytes: "STB0" or "STB1"                                  |
//! | 0x0004         | Data Offset            | 4 bytes: Offset of the cell bodies                         |
//! | 0x0008         | Row Count              | 4 bytes: Number of rows, pseudo-header row included        |
//! | 0x000C         | Column Count           | 4 bytes: Declared column count                             |
//! | 0x0010         | Row Size               | 4 bytes: Display row size carried through unchanged        |
//!
//! ### Column Metadata
//!
//! The header is followed by `column_count + 1` signed 16-bit column sizes
//! and then `column_count + 1` column names. The extra entry covers the
//! row-name column. Names and all other strings are length-prefixed with a
//! plain little-endian signed 16-bit length and encoded as EUC-KR.
//!
//! ### Rows
//!
//! The first logical row of the table is a header row consumed during
//! parsing, so `row_count - 1` row names follow the column metadata — each
//! row's column-0 value. The remaining `column_count - 1` cells of each row
//! are stored from **Data Offset** onwards, row by row.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.stb`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Encoding**: EUC-KR for every string
//!

pub mod error;
pub mod read;
pub mod types;
pub mod write;

pub use types::StbFile;
