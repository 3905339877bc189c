//! Error types for qqwry.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for qqwry operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database file missing or unreadable
    #[error("IP data file not exists or access denied: {path}")]
    DatabaseUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header index bounds are unusable
    #[error("invalid index header: start {index_start}, end {index_end}")]
    InvalidHeader { index_start: u32, index_end: u32 },

    /// Fixed-width read ran past the end of the data
    #[error("truncated read at offset {offset}: expected {expected} bytes, got {actual}")]
    TruncatedRead {
        offset: usize,
        expected: usize,
        actual: usize,
    },

    /// Byte-wise read hit the end of the data
    #[error("end of file at offset {offset}")]
    EndOfFile { offset: usize },

    /// Location block could not be decoded
    #[error("corrupt record at offset {offset}")]
    CorruptRecord {
        offset: usize,
        #[source]
        source: Box<Error>,
    },

    /// No index range covers the address
    #[error("unknown IP: {0}")]
    IpNotFound(u32),

    /// Malformed IP argument
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown output charset label
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// Version record missing or unparseable
    #[error("{0}")]
    Version(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the database is well-formed but has no range for the address.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::IpNotFound(_))
    }

    /// True when the database content itself is malformed.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Error::InvalidHeader { .. }
                | Error::TruncatedRead { .. }
                | Error::EndOfFile { .. }
                | Error::CorruptRecord { .. }
        )
    }
}

/// Result type alias for qqwry operations.
pub type Result<T> = std::result::Result<T, Error>;
