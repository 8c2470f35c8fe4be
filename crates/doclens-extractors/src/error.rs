//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during content extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Neither the MIME type nor the file name identify a supported format.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// Extraction process failed.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF-specific extraction error.
    #[cfg(feature = "pdf")]
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// DOCX-specific extraction error.
    #[cfg(feature = "docx")]
    #[error("DOCX extraction error: {0}")]
    Docx(String),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ExtractError {
    /// MIME type named by an unsupported-type error.
    pub fn unsupported_mime_type(&self) -> Option<&str> {
        match self {
            Self::UnsupportedType(mime_type) => Some(mime_type),
            _ => None,
        }
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
