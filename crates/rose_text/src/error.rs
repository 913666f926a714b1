//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

use crate::encoding::TextEncoding;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Wrapper for [`std::io::Error`]; end-of-stream is reported as
    /// [`Error::TruncatedInput`] instead
    #[error(transparent)]
    IOError(std::io::Error),

    /// Input ended before the declared length
    #[error("input ended before the declared length")]
    TruncatedInput,

    /// Bytes are not valid in the declared encoding
    #[error("invalid {0} byte sequence")]
    Decode(TextEncoding),

    /// Text has no representation in the declared encoding
    #[error("text is not representable in {0}")]
    Encode(TextEncoding),

    /// Encoding name is not one of the supported set
    #[error("unsupported encoding {0:?}")]
    UnsupportedEncoding(String),

    /// A length prefix held a negative value
    #[error("negative string length {0}")]
    InvalidLength(i64),

    /// String does not fit the length-prefix form
    #[error("string of {len} bytes exceeds the prefix maximum of {max}")]
    StringTooLong { len: usize, max: usize },
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        if value.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::TruncatedInput
        } else {
            Error::IOError(value)
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
