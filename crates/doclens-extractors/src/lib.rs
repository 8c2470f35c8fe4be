//! doclens-extractors - Plain-text extraction for document question answering.
//!
//! Turns the raw bytes of a document-library file into plain text with a
//! unified trait-based interface. No OCR and no layout reconstruction: text
//! is concatenated in stream order.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via pdf-extract
//! - `docx` (default) - DOCX text extraction via docx-rs
//! - `full` - All extraction features
//!
//! Plain text is always available.
//!
//! # Example
//!
//! ```ignore
//! use doclens_extractors::ExtractionPipeline;
//!
//! // MIME substring routing with a file-name fallback
//! let pipeline = ExtractionPipeline::with_defaults();
//! let result = pipeline.extract(&bytes, "application/pdf", "report.pdf").await?;
//! println!("{}", result.text);
//! ```

mod error;
mod factory;
mod pipeline;
mod text;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use pipeline::{ExtractionPipeline, GENERIC_MIME_TYPE};
pub use text::TextExtractor;
pub use types::{ExtractedContent, Outline, SourceFormat};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

use async_trait::async_trait;

/// Core Extractor trait - all content extractors implement this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent>;

    /// MIME type fragments this extractor recognizes.
    ///
    /// Matching is by substring, so `"text/"` covers every text subtype.
    fn supported_types(&self) -> &[&str];

    /// File extensions (with leading dot, lower case) used when the MIME
    /// type does not identify the format.
    fn supported_extensions(&self) -> &[&str];

    /// Check if this extractor handles the given MIME type.
    fn supports(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.to_ascii_lowercase();
        self.supported_types()
            .iter()
            .any(|fragment| mime_type.contains(fragment))
    }

    /// Check if this extractor handles the given file name by extension.
    fn supports_file_name(&self, file_name: &str) -> bool {
        let file_name = file_name.to_ascii_lowercase();
        self.supported_extensions()
            .iter()
            .any(|ext| file_name.ends_with(ext))
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
