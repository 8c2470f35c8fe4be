//! Answer synthesis from ranked sentences.

mod intent;

pub use intent::{classify, render, AnswerContext, Formatter, IntentRule, DEFAULT_RULE, INTENT_RULES};

use crate::config::QaConfig;
use crate::text::ScoredSentence;
use crate::types::{AnswerOrigin, AnswerResult};

/// Turns the top-ranked sentences of a document into an answer.
#[derive(Debug, Clone)]
pub struct AnswerSynthesizer {
    top_sentences: usize,
    display_limit: usize,
}

impl Default for AnswerSynthesizer {
    fn default() -> Self {
        Self::new(&QaConfig::default())
    }
}

impl AnswerSynthesizer {
    pub fn new(config: &QaConfig) -> Self {
        Self {
            top_sentences: config.top_sentences,
            display_limit: config.display_limit,
        }
    }

    /// Build an answer from `ranked`, which must be sorted by descending
    /// score. Only the first `top_sentences` entries are used.
    ///
    /// No ranked sentence yields [`AnswerResult::not_found`].
    pub fn synthesize(&self, question: &str, ranked: &[ScoredSentence], document_name: &str) -> AnswerResult {
        let top = &ranked[..ranked.len().min(self.top_sentences)];
        let Some(best) = top.first() else {
            return AnswerResult::not_found();
        };

        let context = top
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let ctx = AnswerContext {
            document_name,
            context: &context,
            display_limit: self.display_limit,
        };
        let (intent, answer) = render(question, &ctx);
        tracing::debug!(%intent, passages = top.len(), "Synthesized answer");

        AnswerResult {
            answer,
            confidence: best.score,
            sources: vec![format!("{} ({} relevant passages found)", document_name, top.len())],
            document_name: Some(document_name.to_string()),
            intent: Some(intent),
            origin: AnswerOrigin::Local,
        }
    }
}
