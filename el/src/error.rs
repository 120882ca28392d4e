//! Listener error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from parsing a header line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Malformed header token {token:?}: expected exactly one ':'")]
    MalformedToken { token: String },

    #[error("Header line has no len token")]
    MissingLength,

    #[error("Invalid len value {value:?}")]
    InvalidLength { value: String },
}

/// Errors that end a handshake cycle
///
/// None of these are reported to the supervisor; a failed cycle never writes
/// a RESULT frame.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    #[error("Protocol stream error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to append to audit log {}: {}", .path.display(), .source)]
    Audit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListenerError {
    /// Check if this error came from bad input rather than the environment
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ListenerError::Header(_))
    }
}
