//! PDF content extraction using pdf-extract.
//!
//! Text objects are concatenated in content-stream order. Multi-column
//! layouts and tables may interleave; no layout reconstruction is attempted.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, SourceFormat};
use crate::Extractor;
use async_trait::async_trait;

/// PDF content extractor using pdf-extract library.
///
/// Wraps synchronous pdf-extract calls in spawn_blocking to avoid blocking
/// the async runtime. A parser panic on malformed input surfaces as
/// [`ExtractError::TaskJoin`].
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    /// Below this many non-whitespace characters the PDF is flagged as
    /// likely scanned (no text layer). Still returned as a valid result.
    min_text_length: usize,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    /// Create new PDF extractor with default settings.
    pub fn new() -> Self {
        Self {
            min_text_length: 10,
        }
    }

    /// Create PDF extractor with custom minimum text threshold.
    pub fn with_min_text_length(min_text_length: usize) -> Self {
        Self { min_text_length }
    }

    fn extract_sync(content: Vec<u8>) -> ExtractResult<String> {
        pdf_extract::extract_text_from_mem(&content)
            .map_err(|e| ExtractError::Pdf(format!("Failed to parse PDF: {}", e)))
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let content = content.to_vec();
        let content_len = content.len();

        let text = tokio::task::spawn_blocking(move || Self::extract_sync(content)).await??;

        let visible_chars = text.chars().filter(|c| !c.is_whitespace()).count();
        let likely_scanned = visible_chars < self.min_text_length;
        if likely_scanned {
            tracing::debug!(visible_chars, "PDF has little or no text layer");
        }

        Ok(ExtractedContent::new(text, SourceFormat::Pdf)
            .with_metadata("original_size", content_len)
            .with_metadata("likely_scanned", likely_scanned))
    }

    fn supported_types(&self) -> &[&str] {
        &["application/pdf"]
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".pdf"]
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
