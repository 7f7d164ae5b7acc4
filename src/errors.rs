//! Capture error types.
//!
//! Expected terminal outcomes (no results found, duplicate entry, user
//! abort) are not errors; they live in `capture::CaptureOutcome`.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CaptureError {
    /// The query was empty or whitespace-only. Rejected before any
    /// network call.
    EmptyQuery,
    /// Appending to the library file failed.
    Append(io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::EmptyQuery => write!(f, "Please enter a search query"),
            CaptureError::Append(e) => write!(f, "Failed to write library file: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::EmptyQuery => None,
            CaptureError::Append(e) => Some(e),
        }
    }
}

impl From<io::Error> for CaptureError {
    fn from(e: io::Error) -> Self {
        CaptureError::Append(e)
    }
}
