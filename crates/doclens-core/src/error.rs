//! Error types for doclens operations.
//!
//! Only genuine failures live here. "No relevant sentence" and "empty
//! document" are ordinary results, and pattern extraction never fails.

use doclens_extractors::ExtractError;
use thiserror::Error;

/// Result type alias for doclens operations.
pub type DocLensResult<T> = Result<T, DocLensError>;

/// Main error type for all doclens operations.
#[derive(Error, Debug)]
pub enum DocLensError {
    /// Neither MIME type nor file name identify a supported document format.
    #[error("Unsupported file type: {mime_type}")]
    UnsupportedFormat { mime_type: String },

    /// Text extraction failed for a supported format.
    #[error("Extraction error: {message}")]
    Extraction {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Completion model call failed.
    #[error("Completion error: {message}")]
    Completion {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An operation exceeded its time budget.
    #[error("Timed out after {millis}ms: {operation}")]
    Timeout { operation: String, millis: u64 },

    /// Document not found in a document source.
    #[error("Document not found: {name}")]
    NotFound { name: String },

    /// Document source failed to list or fetch.
    #[error("Document source error: {message}")]
    Source { message: String, code: ErrorCode },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Extraction (EXT_xxx)
    ExtUnsupportedFormat,
    ExtParseFailed,
    ExtIo,

    // Completion (CMP_xxx)
    CmpUnavailable,
    CmpFailed,
    CmpEmptyResponse,

    // Source (SRC_xxx)
    SrcNotFound,
    SrcListFailed,
    SrcFetchFailed,

    // Timeout
    Timeout,

    // Configuration
    Configuration,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ExtUnsupportedFormat => "EXT_001",
            ErrorCode::ExtParseFailed => "EXT_002",
            ErrorCode::ExtIo => "EXT_003",
            ErrorCode::CmpUnavailable => "CMP_001",
            ErrorCode::CmpFailed => "CMP_002",
            ErrorCode::CmpEmptyResponse => "CMP_003",
            ErrorCode::SrcNotFound => "SRC_001",
            ErrorCode::SrcListFailed => "SRC_002",
            ErrorCode::SrcFetchFailed => "SRC_003",
            ErrorCode::Timeout => "TIME_001",
            ErrorCode::Configuration => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl DocLensError {
    /// Create an unsupported-format error.
    pub fn unsupported_format(mime_type: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            mime_type: mime_type.into(),
        }
    }

    /// Create an extraction error.
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
            code: ErrorCode::ExtParseFailed,
            source: None,
        }
    }

    /// Create a completion error.
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion {
            message: message.into(),
            code: ErrorCode::CmpFailed,
            source: None,
        }
    }

    /// Create a completion error for an absent model.
    pub fn completion_unavailable() -> Self {
        Self::Completion {
            message: "no completion model configured".to_string(),
            code: ErrorCode::CmpUnavailable,
            source: None,
        }
    }

    /// Create a timeout error.
    pub fn timeout(operation: impl Into<String>, millis: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            millis,
        }
    }

    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a document source error.
    pub fn source_error(message: impl Into<String>, code: ErrorCode) -> Self {
        Self::Source {
            message: message.into(),
            code,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedFormat { .. } => ErrorCode::ExtUnsupportedFormat,
            Self::Extraction { code, .. } => *code,
            Self::Completion { code, .. } => *code,
            Self::Timeout { .. } => ErrorCode::Timeout,
            Self::NotFound { .. } => ErrorCode::SrcNotFound,
            Self::Source { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::Configuration,
            Self::Io(_) => ErrorCode::ExtIo,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::UnsupportedFormat { .. } => {
                Some("Supported formats are plain text, PDF and Word (.docx) documents")
            }
            Self::Timeout { .. } => Some("Try a smaller document or raise the timeout"),
            Self::NotFound { .. } => Some("Check the document name and that it exists in the library"),
            Self::Completion { .. } => Some("Check the completion model configuration"),
            _ => None,
        }
    }

    /// Whether a multi-document scan may skip this failure and continue.
    pub fn is_skippable(&self) -> bool {
        !matches!(self, Self::Configuration(_) | Self::Internal(_))
    }
}

impl From<ExtractError> for DocLensError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedType(mime_type) => Self::UnsupportedFormat { mime_type },
            ExtractError::Io(e) => Self::Io(e),
            other => Self::Extraction {
                message: other.to_string(),
                code: ErrorCode::ExtParseFailed,
                source: Some(Box::new(other)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_from_extract_error() {
        let err: DocLensError = ExtractError::UnsupportedType("application/zip".to_string()).into();
        assert_eq!(err.code(), ErrorCode::ExtUnsupportedFormat);
        assert!(err.to_string().contains("application/zip"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_parse_failure_keeps_source() {
        let err: DocLensError = ExtractError::ExtractionFailed("bad xref".to_string()).into();
        assert_eq!(err.code(), ErrorCode::ExtParseFailed);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_timeout_error() {
        let err = DocLensError::timeout("extract report.pdf", 250);
        assert_eq!(err.code(), ErrorCode::Timeout);
        assert_eq!(err.to_string(), "Timed out after 250ms: extract report.pdf");
        assert!(err.is_skippable());
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::ExtUnsupportedFormat.as_str(), "EXT_001");
        assert_eq!(ErrorCode::CmpUnavailable.as_str(), "CMP_001");
        assert_eq!(DocLensError::not_found("a.txt").code().as_str(), "SRC_001");
    }

    #[test]
    fn test_configuration_not_skippable() {
        assert!(!DocLensError::Configuration("bad".to_string()).is_skippable());
    }
}
