//! Extraction pipeline for processing content through appropriate extractors.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::ExtractedContent;
use crate::Extractor;

/// MIME type reported when the caller supplies none.
pub const GENERIC_MIME_TYPE: &str = "application/octet-stream";

/// Pipeline for extracting content using registered extractors.
///
/// Routes content by MIME type substring first, then by file extension when
/// no extractor recognizes the MIME type (absent, generic, or mislabelled).
/// Extractors are tried in registration order.
pub struct ExtractionPipeline {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionPipeline {
    /// Create new empty pipeline.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create pipeline with all available extractors.
    pub fn with_defaults() -> Self {
        Self {
            extractors: crate::ExtractorFactory::all(),
        }
    }

    /// Add an extractor to the pipeline.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Pick the extractor for a MIME type / file name pair.
    pub fn resolve(&self, mime_type: &str, file_name: &str) -> Option<&Arc<dyn Extractor>> {
        self.extractors
            .iter()
            .find(|e| !mime_type.is_empty() && e.supports(mime_type))
            .or_else(|| {
                self.extractors
                    .iter()
                    .find(|e| !file_name.is_empty() && e.supports_file_name(file_name))
            })
    }

    /// Extract content using the appropriate extractor.
    ///
    /// Fails with [`ExtractError::UnsupportedType`] naming the MIME type when
    /// neither the MIME type nor the file name identify a supported format.
    pub async fn extract(
        &self,
        content: &[u8],
        mime_type: &str,
        file_name: &str,
    ) -> ExtractResult<ExtractedContent> {
        tracing::info!(file_name, mime_type, "Extracting text");

        let Some(extractor) = self.resolve(mime_type, file_name) else {
            let reported = if mime_type.is_empty() {
                GENERIC_MIME_TYPE
            } else {
                mime_type
            };
            return Err(ExtractError::UnsupportedType(reported.to_string()));
        };

        tracing::debug!(extractor = extractor.name(), "Resolved extractor");
        extractor.extract(content).await
    }

    /// Check if pipeline can handle a given MIME type.
    pub fn supports(&self, mime_type: &str) -> bool {
        self.extractors.iter().any(|e| e.supports(mime_type))
    }

    /// Check if pipeline can handle a MIME type / file name pair.
    pub fn supports_document(&self, mime_type: &str, file_name: &str) -> bool {
        self.resolve(mime_type, file_name).is_some()
    }

    /// List all supported MIME type fragments.
    pub fn supported_types(&self) -> Vec<&str> {
        self.extractors
            .iter()
            .flat_map(|e| e.supported_types().iter().copied())
            .collect()
    }

    /// Get the number of registered extractors.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Check if the pipeline has no registered extractors.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
