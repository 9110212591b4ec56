//! Error types for docview library.

use std::io;
use thiserror::Error;

/// Result type alias for docview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a file-backed source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text is empty or contains only whitespace.
    #[error("Document is empty")]
    EmptyDocument,

    /// The input text exceeds the configured maximum length.
    #[error("Input is {size} bytes, exceeding the configured limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// A text-extraction collaborator failed. Extraction is never retried
    /// inside the pipeline; retry policy belongs to the caller.
    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    /// Error during HTML serialization.
    #[error("Rendering error: {0}")]
    Render(String),
}
