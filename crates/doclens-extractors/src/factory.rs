//! Factory for the built-in extractors.

use std::sync::Arc;

use crate::text::TextExtractor;
use crate::Extractor;

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "docx")]
use crate::DocxExtractor;

/// Creates the extractors compiled into this build.
pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn text() -> Arc<dyn Extractor> {
        Arc::new(TextExtractor::new())
    }

    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    #[cfg(feature = "docx")]
    pub fn docx() -> Arc<dyn Extractor> {
        Arc::new(DocxExtractor::new())
    }

    /// Every available extractor, in dispatch order: Word, PDF, plain text.
    #[allow(clippy::vec_init_then_push)]
    pub fn all() -> Vec<Arc<dyn Extractor>> {
        let mut extractors: Vec<Arc<dyn Extractor>> = Vec::new();

        #[cfg(feature = "docx")]
        extractors.push(Self::docx());

        #[cfg(feature = "pdf")]
        extractors.push(Self::pdf());

        extractors.push(Self::text());

        extractors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_always_last() {
        let names: Vec<String> = ExtractorFactory::all().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names.last().map(String::as_str), Some("plain-text"));
    }

    #[cfg(all(feature = "pdf", feature = "docx"))]
    #[test]
    fn test_dispatch_order() {
        let names: Vec<String> = ExtractorFactory::all().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, vec!["docx-rs", "pdf-extract", "plain-text"]);
    }

    #[test]
    fn test_text_handles_every_text_subtype() {
        let extractor = ExtractorFactory::text();
        assert!(extractor.supports("text/csv"));
        assert!(extractor.supports("TEXT/Markdown; charset=utf-8"));
        assert!(!extractor.supports("application/pdf"));
    }
}
