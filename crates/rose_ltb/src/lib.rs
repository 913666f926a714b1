//! This library handles reading from and creating **LTB** files used by *ROSE Online*.
//!
//! # LTB Format Documentation
//!
//! The LTB format is a custom binary format that stores a fixed grid of
//! localized strings — one row per dialogue line, one column per language or
//! variant. Every cell addresses a span of a single shared string blob at
//! the end of the file. LTB files are typically identified with the `.ltb`
//! extension.
//!
//! ## File Structure
//!
//! An LTB file consists of a header, a cell table, and a string blob.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Column Count           | 4 bytes: The number of columns in the grid                 |
//! | 0x0004         | Row Count              | 4 bytes: The number of rows in the grid                    |
//! | 0x0008         | Cell Table             | (rows * columns) * 6 bytes: One record per cell            |
//!
//! ### Cell Table
//!
//! Cells are stored row-major: the record for cell (r, c) is at index
//! `r * columns + c`. Each record has the following structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Offset                 | 4 bytes: Absolute file offset of the cell's string      |
//! | 0x0004         | Size                   | 2 bytes: String length in code units                    |
//!
//! A record with an offset before the blob start or a size of zero denotes
//! an empty cell.
//!
//! ### String Blob
//!
//! The blob immediately follows the cell table and runs to the end of the
//! file. Strings are NUL-terminated in the file's encoding (UTF-16LE or
//! EUC-KR); the stored size counts code units including the terminator.
//!
//! Because cells are addressed by absolute offset, editing any string moves
//! every string after it: saving always rewrites the entire cell table and
//! blob.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.ltb`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
pub mod types;
pub mod write;

pub use read::LtbFile;
