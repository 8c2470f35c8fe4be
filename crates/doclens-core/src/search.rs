//! Best-answer search across the documents of a source.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analyzer::DocumentAnalyzer;
use crate::error::{DocLensError, DocLensResult};
use crate::source::DocumentSource;
use crate::types::{AnswerResult, CandidateAnswer, DocumentMeta};

/// Result of a search over a document source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best answer, or the not-found answer when nothing cleared the gate.
    pub answer: AnswerResult,
    /// Documents answered without error.
    pub searched: usize,
    /// Documents that failed or timed out.
    pub skipped: usize,
    /// Whether the total time budget ran out before every document was seen.
    pub timed_out: bool,
}

#[derive(Debug, Default)]
struct ScanState {
    best: Option<CandidateAnswer>,
    searched: usize,
    skipped: usize,
}

impl ScanState {
    fn record(&mut self, name: &str, result: DocLensResult<AnswerResult>) -> DocLensResult<()> {
        match result {
            Ok(answer) => {
                self.searched += 1;
                let Some(candidate) = CandidateAnswer::from_answer(answer, name) else {
                    debug!(document = name, "No relevant passages");
                    return Ok(());
                };
                debug!(document = name, relevance = candidate.relevance, "Candidate answer");
                if self.best.as_ref().map_or(true, |best| candidate.beats(best)) {
                    self.best = Some(candidate);
                }
                Ok(())
            }
            Err(e) if e.is_skippable() => {
                warn!(document = name, error = %e, "Skipping document");
                self.skipped += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Answers a question from whichever document of a source answers it best.
///
/// Documents are fetched and answered with bounded concurrency but folded in
/// listing order, so on equal relevance the first listed document wins.
#[derive(Debug, Clone)]
pub struct DocumentSearch {
    analyzer: Arc<DocumentAnalyzer>,
}

impl DocumentSearch {
    pub fn new(analyzer: Arc<DocumentAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &DocumentAnalyzer {
        &self.analyzer
    }

    /// Search every listed document of `source` for the best answer.
    pub async fn search(&self, question: &str, source: &dyn DocumentSource) -> DocLensResult<SearchOutcome> {
        let documents = source.list().await?;
        self.search_documents(question, source, &documents).await
    }

    /// Search the given listing of `source` for the best answer.
    pub async fn search_documents(
        &self,
        question: &str,
        source: &dyn DocumentSource,
        documents: &[DocumentMeta],
    ) -> DocLensResult<SearchOutcome> {
        let config = self.analyzer.config();
        info!(source = source.name(), documents = documents.len(), "Searching documents");

        let mut state = ScanState::default();
        let scan = async {
            let mut results = stream::iter(documents)
                .map(|meta| async move { (meta.name.as_str(), self.answer_one(question, source, meta).await) })
                .buffered(config.search_concurrency.max(1));
            while let Some((name, result)) = results.next().await {
                state.record(name, result)?;
            }
            Ok::<(), DocLensError>(())
        };

        let scanned = tokio::time::timeout(config.search_timeout(), scan).await;
        let timed_out = match scanned {
            Ok(result) => {
                result?;
                false
            }
            Err(_) => {
                warn!(
                    timeout_ms = config.search_timeout_ms,
                    searched = state.searched,
                    "Search timed out, using best answer so far"
                );
                true
            }
        };

        let answer = match state.best {
            Some(best) if best.relevance >= config.confidence_gate => best.into_answer(),
            Some(best) => {
                debug!(relevance = best.relevance, gate = config.confidence_gate, "Best answer below gate");
                AnswerResult::not_found()
            }
            None => AnswerResult::not_found(),
        };

        Ok(SearchOutcome {
            answer,
            searched: state.searched,
            skipped: state.skipped,
            timed_out,
        })
    }

    async fn answer_one(
        &self,
        question: &str,
        source: &dyn DocumentSource,
        meta: &DocumentMeta,
    ) -> DocLensResult<AnswerResult> {
        let timeout = self.analyzer.config().document_timeout();
        let work = async {
            let mut document = source.fetch(&meta.name).await?;
            self.analyzer.answer_document(question, &mut document).await
        };

        tokio::time::timeout(timeout, work).await.map_err(|_| {
            DocLensError::timeout(format!("answering {}", meta.name), timeout.as_millis() as u64)
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QaConfig;
    use crate::source::InMemorySource;
    use crate::types::{Document, NOT_FOUND_ANSWER};

    fn search() -> DocumentSearch {
        DocumentSearch::new(Arc::new(DocumentAnalyzer::default()))
    }

    #[tokio::test]
    async fn test_best_document_wins() {
        let source = InMemorySource::new()
            .with_document(Document::from_text("fruit.txt", "The farm grows apples in autumn."))
            .with_document(Document::from_text("market.txt", "The market sells apples and bananas daily."));

        let outcome = search().search("apples and bananas", &source).await.unwrap();
        assert_eq!(outcome.answer.document_name.as_deref(), Some("market.txt"));
        assert_eq!(outcome.answer.confidence, 1.0);
        assert_eq!(outcome.searched, 2);
        assert_eq!(outcome.skipped, 0);
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn test_tie_keeps_first_listed() {
        let source = InMemorySource::new()
            .with_document(Document::from_text("first.txt", "The invoice was paid on time."))
            .with_document(Document::from_text("second.txt", "Another invoice arrived today."));

        let outcome = search().search("invoice", &source).await.unwrap();
        assert_eq!(outcome.answer.document_name.as_deref(), Some("first.txt"));
    }

    #[tokio::test]
    async fn test_failing_document_is_skipped() {
        let source = InMemorySource::new()
            .with_document(Document::new("archive.zip", "application/zip", vec![0x50, 0x4b]))
            .with_document(Document::from_text("notes.txt", "The invoice total is final."));

        let outcome = search().search("invoice total", &source).await.unwrap();
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.searched, 1);
        assert_eq!(outcome.answer.document_name.as_deref(), Some("notes.txt"));
    }

    #[tokio::test]
    async fn test_below_gate_is_not_found() {
        let config = QaConfig::builder().confidence_gate(0.9).build();
        let search = DocumentSearch::new(Arc::new(DocumentAnalyzer::new(config)));
        let source = InMemorySource::new()
            .with_document(Document::from_text("notes.txt", "The invoice arrived yesterday."));

        let outcome = search.search("invoice totals overdue", &source).await.unwrap();
        assert_eq!(outcome.answer.answer, NOT_FOUND_ANSWER);
        assert_eq!(outcome.searched, 1);
    }

    #[tokio::test]
    async fn test_empty_source() {
        let outcome = search().search("anything useful", &InMemorySource::new()).await.unwrap();
        assert_eq!(outcome.answer.answer, NOT_FOUND_ANSWER);
        assert_eq!(outcome.searched, 0);
    }
}
