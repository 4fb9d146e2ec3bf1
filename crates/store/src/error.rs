// ABOUTME: Error types for document storage operations.
// ABOUTME: Provides StoreError with rejection, lookup, and I/O variants plus boolean helpers.

use thiserror::Error;

/// Errors that can occur while storing or retrieving documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The upload's file extension is not in the allowed set.
    #[error("unsupported file type {extension:?}: only {allowed} files are supported")]
    UnsupportedFileType { extension: String, allowed: String },

    /// The upload is larger than the configured limit.
    #[error("file exceeds maximum allowed size ({limit} bytes)")]
    TooLarge { limit: u64 },

    /// No document has the requested file id.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The document exists but has not been analysed yet.
    #[error("analysis pending for document {0}")]
    Pending(String),

    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("document index is unreadable: {0}")]
    Index(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates an UnsupportedFileType error for the given extension.
    pub fn unsupported(extension: impl Into<String>, allowed: &[String]) -> Self {
        StoreError::UnsupportedFileType {
            extension: extension.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Returns true if the upload was rejected before being stored.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            StoreError::UnsupportedFileType { .. } | StoreError::TooLarge { .. }
        )
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Returns true if this is a Pending error.
    pub fn is_pending(&self) -> bool {
        matches!(self, StoreError::Pending(_))
    }
}
