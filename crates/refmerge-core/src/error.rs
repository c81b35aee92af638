//! Error types for refmerge operations.

use std::io;
use thiserror::Error;

/// Result type for refmerge operations.
pub type Result<T> = std::result::Result<T, RefMergeError>;

/// Errors that abort a load.
///
/// Malformed layer content that can still be classified (deleting an unknown
/// reference, a moved reference marked deleted) never shows up here; it is
/// reported through a [`DiagnosticsSink`](crate::diagnostics::DiagnosticsSink).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RefMergeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record store error: {0}")]
    Store(String),
}

impl RefMergeError {
    /// Check if this error came from the reference stream rather than from
    /// the session state.
    #[inline]
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, RefMergeError::Decode(_) | RefMergeError::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_is_decode() {
        assert!(RefMergeError::Decode("truncated record".into()).is_decode());
    }

    #[test]
    fn test_store_is_not_decode() {
        assert!(!RefMergeError::Store("index 4 out of range".into()).is_decode());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = RefMergeError::Store("unknown ref id ref#7".into());
        assert_eq!(err.to_string(), "Record store error: unknown ref id ref#7");
    }
}
