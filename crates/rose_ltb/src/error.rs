//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent wrapper for [`rose_text::error::Error`]
    #[error(transparent)]
    TextError(#[from] rose_text::error::Error),

    /// file is too short to contain a valid header
    #[error("file is too short to contain a valid header")]
    MalformedHeader,

    /// cell table is shorter than the header declares
    #[error("cell table ended before {expected} records")]
    MalformedCellTable { expected: usize },

    /// edited table does not match the declared shape
    #[error("edited table must be {rows} rows of {columns} selected columns")]
    InvalidEditTable { rows: usize, columns: usize },

    /// encoded cell does not fit the 16-bit size field
    #[error("cell ({row}, {column}) exceeds the 16-bit size field")]
    CellTooLong { row: usize, column: usize },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
