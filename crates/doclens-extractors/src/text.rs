//! Plain-text extraction.

use crate::error::ExtractResult;
use crate::types::{ExtractedContent, SourceFormat};
use crate::Extractor;
use async_trait::async_trait;

const UTF8_BOM: char = '\u{FEFF}';

/// Decodes text files as UTF-8.
///
/// Invalid sequences are replaced rather than rejected, so a mislabelled
/// file still yields whatever text it carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create new plain-text extractor.
    pub fn new() -> Self {
        Self
    }

    /// Decode bytes to a string, dropping a leading byte-order mark.
    pub fn decode(content: &[u8]) -> String {
        let text = String::from_utf8_lossy(content);
        text.strip_prefix(UTF8_BOM).unwrap_or(&text).to_string()
    }
}

#[async_trait]
impl Extractor for TextExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let text = Self::decode(content);
        Ok(ExtractedContent::new(text, SourceFormat::Text).with_metadata("original_size", content.len()))
    }

    fn supported_types(&self) -> &[&str] {
        &["text/"]
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".txt", ".md", ".csv"]
    }

    fn name(&self) -> &str {
        "plain-text"
    }
}
