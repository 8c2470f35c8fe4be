//! Document types.

use doclens_extractors::ExtractionPipeline;
use serde::{Deserialize, Serialize};

use crate::error::DocLensResult;

/// Listing entry returned by a document source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// File name, unique within its source.
    pub name: String,
    /// MIME type as reported by the source (may be empty or generic).
    pub mime_type: String,
    /// Size in bytes, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl DocumentMeta {
    /// Create a listing entry.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: None,
        }
    }
}

/// A fetched document.
///
/// Extracted text is computed on first use and cached on the value, so it
/// lives exactly as long as the request holding the document.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name.
    pub name: String,
    /// MIME type as reported by the source.
    pub mime_type: String,
    /// Raw file content.
    pub raw_bytes: Vec<u8>,
    extracted_text: Option<String>,
}

impl Document {
    /// Create a document from raw bytes.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, raw_bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            raw_bytes,
            extracted_text: None,
        }
    }

    /// Create a document whose text is already known.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            name: name.into(),
            mime_type: "text/plain".to_string(),
            raw_bytes: text.as_bytes().to_vec(),
            extracted_text: Some(text),
        }
    }

    /// Listing entry for this document.
    pub fn meta(&self) -> DocumentMeta {
        DocumentMeta {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size: Some(self.raw_bytes.len() as u64),
        }
    }

    /// Extracted text, if already computed.
    pub fn extracted_text(&self) -> Option<&str> {
        self.extracted_text.as_deref()
    }

    /// Extracted text, running the pipeline on first call.
    pub async fn text(&mut self, pipeline: &ExtractionPipeline) -> DocLensResult<&str> {
        if self.extracted_text.is_none() {
            let content = pipeline
                .extract(&self.raw_bytes, &self.mime_type, &self.name)
                .await?;
            self.extracted_text = Some(content.text);
        }
        Ok(self.extracted_text.as_deref().unwrap_or_default())
    }
}
