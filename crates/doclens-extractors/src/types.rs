//! Extraction result types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// File format the text came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    #[default]
    Text,
    Pdf,
    Docx,
}

/// Heading outline of a structured document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Heading texts in document order.
    pub headings: Vec<String>,
}

/// Plain text extracted from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Text in stream order. May be empty.
    pub text: String,

    pub format: SourceFormat,

    /// Headings, for formats that mark them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,

    /// Format-specific facts such as `original_size` or `likely_scanned`.
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ExtractedContent {
    pub fn new(text: String, format: SourceFormat) -> Self {
        Self {
            text,
            format,
            outline: None,
            metadata: HashMap::new(),
        }
    }

    /// Attach the heading outline. An empty list leaves no outline.
    pub fn with_headings(mut self, headings: Vec<String>) -> Self {
        self.outline = (!headings.is_empty()).then_some(Outline { headings });
        self
    }

    /// Record a metadata fact.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether extraction produced no usable text.
    ///
    /// Empty output is a valid result (e.g. a scanned PDF without a text
    /// layer); callers see zero sentences downstream.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of characters of extracted text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
