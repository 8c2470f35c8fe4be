//! Document sources: where documents to search come from.

mod directory;

pub use directory::{mime_type_for, DirectorySource};

use async_trait::async_trait;

use crate::error::{DocLensError, DocLensResult};
use crate::types::{Document, DocumentMeta};

/// A library of documents that can be listed and fetched by name.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// All documents, in the source's natural order.
    async fn list(&self) -> DocLensResult<Vec<DocumentMeta>>;

    /// Fetch one document with its raw bytes.
    async fn fetch(&self, name: &str) -> DocLensResult<Document>;

    /// Up to `limit` recently added or modified documents, newest first.
    ///
    /// Defaults to the first `limit` entries of [`list`](Self::list).
    async fn recent(&self, limit: usize) -> DocLensResult<Vec<DocumentMeta>> {
        let mut documents = self.list().await?;
        documents.truncate(limit);
        Ok(documents)
    }

    /// Source name, for logging.
    fn name(&self) -> &str;
}

/// Documents held in memory, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<Document>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any existing one with the same name.
    pub fn with_document(mut self, document: Document) -> Self {
        self.add(document);
        self
    }

    /// Add a document, replacing any existing one with the same name.
    pub fn add(&mut self, document: Document) {
        match self.documents.iter_mut().find(|d| d.name == document.name) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for InMemorySource {
    async fn list(&self) -> DocLensResult<Vec<DocumentMeta>> {
        Ok(self.documents.iter().map(Document::meta).collect())
    }

    async fn fetch(&self, name: &str) -> DocLensResult<Document> {
        self.documents
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .ok_or_else(|| DocLensError::not_found(name))
    }

    /// Newest first: the most recently added documents.
    async fn recent(&self, limit: usize) -> DocLensResult<Vec<DocumentMeta>> {
        Ok(self.documents.iter().rev().take(limit).map(Document::meta).collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
