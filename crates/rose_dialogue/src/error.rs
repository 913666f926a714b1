//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// A failure reported by a dialogue backend for one request.
///
/// Transport and service failures are transient and worth retrying; a
/// rejection is final for that request.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// the backend could not be reached
    #[error("transport failure: {0}")]
    Transport(String),

    /// the backend was reached but could not serve the request
    #[error("service failure: {0}")]
    Service(String),

    /// the backend refused the request
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl BackendError {
    /// Whether another attempt could plausibly succeed.
    pub const fn is_transient(&self) -> bool {
        matches!(self, BackendError::Transport(_) | BackendError::Service(_))
    }
}

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// the backend rejected the request outright
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// every attempt within the retry budget failed
    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: BackendError },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
