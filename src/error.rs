//! Error types for percent-encoding and percent-decoding operations.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while encoding or decoding a URI.
///
/// Scanner operations never produce an error: "no match" is reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// A `%` was not followed by two hexadecimal digits.
    #[error("malformed escape sequence at byte {position}")]
    MalformedEscape {
        /// Byte offset of the offending `%` in the input.
        position: usize,
    },

    /// The decoded bytes do not form valid UTF-8.
    #[error("invalid UTF-8 after decoding (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix of the decoded bytes.
        valid_up_to: usize,
    },

    /// The output buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for the output buffer")]
    OutOfMemory {
        /// Number of bytes that were requested.
        requested: usize,
    },
}

/// Error categories, for callers that only need to branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`UriError::MalformedEscape`].
    MalformedEscape,
    /// See [`UriError::InvalidUtf8`].
    InvalidUtf8,
    /// See [`UriError::OutOfMemory`].
    OutOfMemory,
}

impl UriError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UriError::MalformedEscape { .. } => ErrorKind::MalformedEscape,
            UriError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            UriError::OutOfMemory { .. } => ErrorKind::OutOfMemory,
        }
    }
}

impl From<FromUtf8Error> for UriError {
    fn from(err: FromUtf8Error) -> Self {
        UriError::InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
        }
    }
}

/// Result type returned by the encode and decode operations.
pub type UriResult<T> = Result<T, UriError>;
