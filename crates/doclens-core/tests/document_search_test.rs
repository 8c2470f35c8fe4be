//! Integration tests for searching a document library.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use doclens_core::{
    DirectorySource, DocLensError, DocLensResult, Document, DocumentAnalyzer, DocumentMeta, DocumentSearch,
    DocumentSource, InMemorySource, QaConfig,
};
use tempfile::TempDir;

const NOT_FOUND: &str = "I couldn't find specific information related to your question in this document.";

fn search_with(config: QaConfig) -> DocumentSearch {
    DocumentSearch::new(Arc::new(DocumentAnalyzer::new(config)))
}

/// Wraps a source, stalling on one document.
struct StallingSource {
    inner: InMemorySource,
    stall_on: &'static str,
    stall_for: Duration,
}

#[async_trait]
impl DocumentSource for StallingSource {
    async fn list(&self) -> DocLensResult<Vec<DocumentMeta>> {
        self.inner.list().await
    }

    async fn fetch(&self, name: &str) -> DocLensResult<Document> {
        if name == self.stall_on {
            tokio::time::sleep(self.stall_for).await;
        }
        self.inner.fetch(name).await
    }

    fn name(&self) -> &str {
        "stalling"
    }
}

#[tokio::test]
async fn test_search_directory_library() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("holidays.txt"),
        "The office closes for holidays on December 24, 2024. Staff return in January.",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("expenses.md"),
        "Travel expenses above $500 need approval. Receipts are required for every expense claim.",
    )
    .unwrap();
    std::fs::write(dir.path().join("archive.zip"), b"PK\x03\x04").unwrap();

    let source = DirectorySource::new(dir.path());
    let outcome = search_with(QaConfig::default())
        .search("How much travel expenses need approval?", &source)
        .await
        .unwrap();

    assert_eq!(outcome.answer.document_name.as_deref(), Some("expenses.md"));
    assert!(outcome.answer.answer.contains("$500"));
    assert_eq!(outcome.searched, 2);
    assert_eq!(outcome.skipped, 1);
}

#[tokio::test]
async fn test_tie_breaks_on_listing_order_under_concurrency() {
    let mut source = InMemorySource::new();
    for i in 0..8 {
        source.add(Document::from_text(
            format!("report-{i}.txt"),
            "The quarterly report is attached for review.",
        ));
    }

    let config = QaConfig::builder().search_concurrency(4).build();
    let outcome = search_with(config).search("quarterly report", &source).await.unwrap();
    assert_eq!(outcome.answer.document_name.as_deref(), Some("report-0.txt"));
    assert_eq!(outcome.searched, 8);
}

#[tokio::test]
async fn test_slow_document_is_skipped() {
    let source = StallingSource {
        inner: InMemorySource::new()
            .with_document(Document::from_text("slow.txt", "The vendor contract renews every spring."))
            .with_document(Document::from_text("fast.txt", "The vendor contract is under review.")),
        stall_on: "slow.txt",
        stall_for: Duration::from_secs(5),
    };

    let config = QaConfig::builder()
        .search_timeouts(Duration::from_millis(50), Duration::from_secs(10))
        .build();
    let outcome = search_with(config).search("vendor contract", &source).await.unwrap();

    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.answer.document_name.as_deref(), Some("fast.txt"));
    assert!(!outcome.timed_out);
}

#[tokio::test]
async fn test_total_timeout_keeps_best_so_far() {
    let source = StallingSource {
        inner: InMemorySource::new()
            .with_document(Document::from_text("first.txt", "The vendor contract is signed."))
            .with_document(Document::from_text("stuck.txt", "The vendor contract is pending.")),
        stall_on: "stuck.txt",
        stall_for: Duration::from_secs(5),
    };

    let config = QaConfig::builder()
        .search_timeouts(Duration::from_secs(10), Duration::from_millis(100))
        .search_concurrency(1)
        .build();
    let outcome = search_with(config).search("vendor contract", &source).await.unwrap();

    assert!(outcome.timed_out);
    assert_eq!(outcome.searched, 1);
    assert_eq!(outcome.answer.document_name.as_deref(), Some("first.txt"));
}

#[tokio::test]
async fn test_nothing_relevant() {
    let source = InMemorySource::new().with_document(Document::from_text("menu.txt", "Soup of the day is tomato."));
    let outcome = search_with(QaConfig::default())
        .search("parking permits", &source)
        .await
        .unwrap();
    assert_eq!(outcome.answer.answer, NOT_FOUND);
    assert_eq!(outcome.answer.confidence, 0.0);
}

#[tokio::test]
async fn test_missing_directory_is_an_error() {
    let source = DirectorySource::new("/no/such/library");
    let err = search_with(QaConfig::default())
        .search("anything", &source)
        .await
        .unwrap_err();
    assert!(matches!(err, DocLensError::Source { .. }));
}
