//! Local folder document source.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use doclens_extractors::GENERIC_MIME_TYPE;
use tracing::debug;

use super::DocumentSource;
use crate::error::{DocLensError, DocLensResult, ErrorCode};
use crate::types::{Document, DocumentMeta};

const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Guess a MIME type from a file name's extension.
pub fn mime_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("pdf") => "application/pdf",
        Some("docx") => DOCX_MIME_TYPE,
        _ => GENERIC_MIME_TYPE,
    }
}

/// Regular files directly inside a folder, listed by name.
///
/// Hidden files and subdirectories are ignored.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    label: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let label = root.display().to_string();
        Self { root, label }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn entries(&self) -> DocLensResult<Vec<(DocumentMeta, SystemTime)>> {
        let mut dir = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            DocLensError::source_error(
                format!("cannot read {}: {}", self.root.display(), e),
                ErrorCode::SrcListFailed,
            )
        })?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            let mut meta = DocumentMeta::new(name.as_str(), mime_type_for(&name));
            meta.size = Some(metadata.len());
            entries.push((meta, modified));
        }

        entries.sort_by(|a, b| a.0.name.cmp(&b.0.name));
        debug!(root = %self.root.display(), count = entries.len(), "Listed directory");
        Ok(entries)
    }
}

#[async_trait]
impl DocumentSource for DirectorySource {
    async fn list(&self) -> DocLensResult<Vec<DocumentMeta>> {
        Ok(self.entries().await?.into_iter().map(|(meta, _)| meta).collect())
    }

    async fn fetch(&self, name: &str) -> DocLensResult<Document> {
        // Only plain file names inside the root are addressable.
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(DocLensError::not_found(name));
        }

        let path = self.root.join(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DocLensError::not_found(name));
            }
            Err(e) => {
                return Err(DocLensError::source_error(
                    format!("cannot read {}: {}", path.display(), e),
                    ErrorCode::SrcFetchFailed,
                ));
            }
        };

        Ok(Document::new(name, mime_type_for(name), bytes))
    }

    /// Newest modification time first; equal times keep name order.
    async fn recent(&self, limit: usize) -> DocLensResult<Vec<DocumentMeta>> {
        let mut entries = self.entries().await?;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(entries.into_iter().take(limit).map(|(meta, _)| meta).collect())
    }

    fn name(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "Team notes.").unwrap();
        std::fs::write(dir.path().join("Budget.PDF"), b"%PDF-1.4").unwrap();
        std::fs::write(dir.path().join(".hidden"), "secret").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        dir
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for("a.txt"), "text/plain");
        assert_eq!(mime_type_for("A.DOCX"), DOCX_MIME_TYPE);
        assert_eq!(mime_type_for("scan.pdf"), "application/pdf");
        assert_eq!(mime_type_for("archive.zip"), GENERIC_MIME_TYPE);
        assert_eq!(mime_type_for("README"), GENERIC_MIME_TYPE);
    }

    #[tokio::test]
    async fn test_list_skips_hidden_and_directories() {
        let dir = library();
        let source = DirectorySource::new(dir.path());
        let listed = source.list().await.unwrap();

        let names: Vec<&str> = listed.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Budget.PDF", "notes.txt"]);
        assert_eq!(listed[0].mime_type, "application/pdf");
        assert_eq!(listed[1].size, Some(11));
    }

    #[tokio::test]
    async fn test_fetch() {
        let dir = library();
        let source = DirectorySource::new(dir.path());
        let doc = source.fetch("notes.txt").await.unwrap();
        assert_eq!(doc.raw_bytes, b"Team notes.");
        assert_eq!(doc.mime_type, "text/plain");
    }

    #[tokio::test]
    async fn test_fetch_rejects_missing_and_traversal() {
        let dir = library();
        let source = DirectorySource::new(dir.path());
        for name in ["missing.txt", "../notes.txt", "nested/x.txt", ".."] {
            let err = source.fetch(name).await.unwrap_err();
            assert!(matches!(err, DocLensError::NotFound { .. }), "name: {}", name);
        }
    }

    #[tokio::test]
    async fn test_missing_root_is_source_error() {
        let source = DirectorySource::new("/definitely/not/here");
        let err = source.list().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::SrcListFailed);
    }
}
