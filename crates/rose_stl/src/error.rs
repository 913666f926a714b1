//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Wrapper for [`std::io::Error`]; end-of-stream is reported as
    /// [`Error::Truncated`] instead
    #[error(transparent)]
    IOError(std::io::Error),

    /// Wrapper for [`rose_text::error::Error`]
    #[error(transparent)]
    TextError(rose_text::error::Error),

    /// input ended before a declared structure was complete
    #[error("input ended before the declared structure was complete")]
    Truncated,

    /// language name is not in the known set
    #[error("unknown language {0:?}")]
    UnknownLanguage(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        if value.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::Truncated
        } else {
            Error::IOError(value)
        }
    }
}

impl From<rose_text::error::Error> for Error {
    fn from(value: rose_text::error::Error) -> Self {
        match value {
            rose_text::error::Error::TruncatedInput => Error::Truncated,
            other => Error::TextError(other),
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
