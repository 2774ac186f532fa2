//! Errors that occur while reading a font description

use std::io;

/// An error that occurs when reading an MSDF font description.
#[derive(Debug)]
pub enum ReadError {
    /// The input could not be read.
    Io(io::Error),
    /// The input was not valid JSON, or a member had the wrong type.
    Json(serde_json::Error),
}

impl From<io::Error> for ReadError {
    fn from(src: io::Error) -> ReadError {
        ReadError::Io(src)
    }
}

impl From<serde_json::Error> for ReadError {
    fn from(src: serde_json::Error) -> ReadError {
        // serde_json reports failures of the underlying reader as its own
        // error kind; keep those distinct from malformed documents.
        if src.is_io() {
            return ReadError::Io(src.into());
        }
        ReadError::Json(src)
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "Failed to read font description: {err}"),
            ReadError::Json(err) => write!(f, "Malformed font description: {err}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Json(err) => Some(err),
        }
    }
}
