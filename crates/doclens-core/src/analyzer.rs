//! Document analyzer façade.
//!
//! Ties extraction, ranking, synthesis and insight generation together and
//! optionally consults a [`CompletionModel`], falling back to the local
//! result whenever the model is absent, fails, times out or returns nothing.

use std::sync::Arc;

use doclens_extractors::ExtractionPipeline;
use tracing::{debug, info, warn};

use crate::config::QaConfig;
use crate::error::DocLensResult;
use crate::insights::{key_info, InsightGenerator};
use crate::synthesizer::AnswerSynthesizer;
use crate::text::RelevanceScorer;
use crate::traits::{CompletionModel, CompletionPrompt, NoCompletion};
use crate::types::{AnswerOrigin, AnswerResult, Document, InsightsResult, KeyInfo, SummaryResult};

/// Answers questions about documents and summarizes them.
pub struct DocumentAnalyzer {
    config: QaConfig,
    pipeline: Arc<ExtractionPipeline>,
    scorer: RelevanceScorer,
    synthesizer: AnswerSynthesizer,
    generator: InsightGenerator,
    model: Arc<dyn CompletionModel>,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(QaConfig::default())
    }
}

impl std::fmt::Debug for DocumentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAnalyzer")
            .field("config", &self.config)
            .field("extractors", &self.pipeline.len())
            .field("completion", &self.model.is_available())
            .finish()
    }
}

impl DocumentAnalyzer {
    /// Create an analyzer with the default extractors and no completion model.
    pub fn new(config: QaConfig) -> Self {
        Self {
            scorer: RelevanceScorer::new(&config),
            synthesizer: AnswerSynthesizer::new(&config),
            generator: InsightGenerator::new(&config),
            pipeline: Arc::new(ExtractionPipeline::with_defaults()),
            model: Arc::new(NoCompletion),
            config,
        }
    }

    /// Use a custom extraction pipeline.
    pub fn with_pipeline(mut self, pipeline: ExtractionPipeline) -> Self {
        self.pipeline = Arc::new(pipeline);
        self
    }

    /// Consult a completion model in the `*_enhanced` operations.
    pub fn with_completion_model(mut self, model: Arc<dyn CompletionModel>) -> Self {
        self.model = model;
        self
    }

    pub fn config(&self) -> &QaConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &ExtractionPipeline {
        &self.pipeline
    }

    /// Extract plain text from raw document bytes.
    pub async fn extract_text(&self, bytes: &[u8], mime_type: &str, file_name: &str) -> DocLensResult<String> {
        info!(file_name, mime_type, size = bytes.len(), "Extracting text");
        let content = self.pipeline.extract(bytes, mime_type, file_name).await?;
        debug!(file_name, chars = content.char_count(), format = ?content.format, "Extracted text");
        Ok(content.text)
    }

    /// Answer a question from the sentences of `text`.
    pub fn answer_question(&self, question: &str, text: &str, document_name: &str) -> AnswerResult {
        let ranked = self.scorer.rank(question, text);
        self.synthesizer.synthesize(question, &ranked, document_name)
    }

    /// Answer a question about a fetched document, extracting it if needed.
    pub async fn answer_document(&self, question: &str, document: &mut Document) -> DocLensResult<AnswerResult> {
        let name = document.name.clone();
        let text = document.text(&self.pipeline).await?;
        Ok(self.answer_question(question, text, &name))
    }

    /// Extractive summary of `text`.
    pub fn generate_summary(&self, text: &str, document_name: &str) -> SummaryResult {
        self.generator.summarize(text, document_name)
    }

    /// Dates, amounts, contacts and action items found in `text`.
    pub fn generate_insights(&self, text: &str, document_name: &str) -> InsightsResult {
        self.generator.insights(text, document_name)
    }

    /// Word, paragraph and topic statistics for `text`.
    pub fn key_info(&self, text: &str, document_name: &str) -> KeyInfo {
        key_info(text, document_name)
    }

    /// Like [`answer_question`](Self::answer_question), preferring the
    /// completion model when one is available.
    pub async fn answer_question_enhanced(&self, question: &str, text: &str, document_name: &str) -> AnswerResult {
        let prompt = CompletionPrompt::question(question, document_name, text, self.config.prompt_char_budget);
        match self.complete_remote("answer", &prompt).await {
            Some(answer) => AnswerResult {
                answer,
                confidence: self.config.remote_confidence,
                sources: vec![document_name.to_string()],
                document_name: Some(document_name.to_string()),
                intent: None,
                origin: AnswerOrigin::Remote,
            },
            None => self.answer_question(question, text, document_name),
        }
    }

    /// Like [`generate_summary`](Self::generate_summary), preferring the
    /// completion model when one is available.
    pub async fn generate_summary_enhanced(&self, text: &str, document_name: &str) -> SummaryResult {
        let prompt = CompletionPrompt::summary(document_name, text, self.config.prompt_char_budget);
        match self.complete_remote("summary", &prompt).await {
            Some(summary) => SummaryResult {
                summary,
                confidence: self.config.remote_confidence,
                origin: AnswerOrigin::Remote,
            },
            None => self.generate_summary(text, document_name),
        }
    }

    /// Like [`generate_insights`](Self::generate_insights), preferring the
    /// completion model when one is available.
    pub async fn generate_insights_enhanced(&self, text: &str, document_name: &str) -> InsightsResult {
        let prompt = CompletionPrompt::insights(document_name, text, self.config.prompt_char_budget);
        match self.complete_remote("insights", &prompt).await {
            Some(insights) => InsightsResult {
                insights,
                confidence: self.config.remote_confidence,
                origin: AnswerOrigin::Remote,
            },
            None => self.generate_insights(text, document_name),
        }
    }

    /// Trimmed completion text, or `None` when the local result should be used.
    async fn complete_remote(&self, operation: &str, prompt: &CompletionPrompt) -> Option<String> {
        if !self.model.is_available() {
            return None;
        }

        let timeout = self.config.completion_timeout();
        match tokio::time::timeout(timeout, self.model.complete(prompt)).await {
            Ok(Ok(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(operation, "Empty completion, using local result");
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Ok(Err(e)) => {
                warn!(operation, error = %e, "Completion failed, using local result");
                None
            }
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = timeout.as_millis() as u64,
                    "Completion timed out, using local result"
                );
                None
            }
        }
    }
}
