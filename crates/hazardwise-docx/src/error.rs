//! Error types for document export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when writing a document to its sink.
///
/// Building a document never fails; only the output sink can.
#[derive(Debug, Error)]
pub enum DocxError {
    /// The output file could not be written.
    #[error("Failed to write document to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for document export operations.
pub type DocxResult<T> = Result<T, DocxError>;
