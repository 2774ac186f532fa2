//! Errors that occur during writing

use std::io;

use crate::charset::UnknownCharset;

/// An error occured while writing a font
#[derive(Debug)]
pub enum WriteError {
    /// `info.charset` is not one of the known character set names.
    UnknownCharset(UnknownCharset),
    /// The binary format requires page ids to be `0..page_count`.
    ///
    /// `expected` is the first id that is missing, `found` is the id that
    /// was present in its place.
    NonContiguousPageIds { expected: u32, found: u32 },
    /// The destination could not be written.
    Io(io::Error),
}

impl From<UnknownCharset> for WriteError {
    fn from(src: UnknownCharset) -> WriteError {
        WriteError::UnknownCharset(src)
    }
}

impl From<io::Error> for WriteError {
    fn from(src: io::Error) -> WriteError {
        WriteError::Io(src)
    }
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::UnknownCharset(err) => write!(f, "{err}"),
            WriteError::NonContiguousPageIds { expected, found } => write!(
                f,
                "The binary format requires page ids to be consecutive and zero based \
                 (expected page {expected}, found page {found})"
            ),
            WriteError::Io(err) => write!(f, "Failed to write font: {err}"),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::UnknownCharset(err) => Some(err),
            WriteError::NonContiguousPageIds { .. } => None,
            WriteError::Io(err) => Some(err),
        }
    }
}
