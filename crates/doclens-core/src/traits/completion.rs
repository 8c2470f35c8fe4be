//! Completion model trait and prompt construction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{DocLensError, DocLensResult};

/// System instruction sent with every prompt.
pub const SYSTEM_PREAMBLE: &str = "You are a helpful AI assistant that analyzes business documents and provides clear, concise, and actionable insights.";

/// A prompt for a completion model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionPrompt {
    /// System instruction.
    pub system: String,
    /// User message, including the (truncated) document text.
    pub user: String,
}

impl CompletionPrompt {
    /// Create a prompt with the standard system preamble.
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            system: SYSTEM_PREAMBLE.to_string(),
            user: user.into(),
        }
    }

    /// Prompt asking for a concise summary.
    pub fn summary(document_name: &str, text: &str, char_budget: usize) -> Self {
        Self::new(format!(
            "Please provide a concise summary of the following document content from \"{}\":\n\n{}",
            document_name,
            truncate_chars(text, char_budget)
        ))
    }

    /// Prompt asking for key insights and action items.
    pub fn insights(document_name: &str, text: &str, char_budget: usize) -> Self {
        Self::new(format!(
            "Analyze the following document content from \"{}\" and provide key insights, important points, and actionable items:\n\n{}",
            document_name,
            truncate_chars(text, char_budget)
        ))
    }

    /// Prompt asking a question about the document.
    pub fn question(question: &str, document_name: &str, text: &str, char_budget: usize) -> Self {
        Self::new(format!(
            "Based on the following document content from \"{}\", please answer this question: \"{}\"\n\nDocument content:\n{}\n\nAnswer:",
            document_name,
            question,
            truncate_chars(text, char_budget)
        ))
    }
}

/// First `budget` characters of `text`.
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// A text completion capability, such as a hosted language model.
///
/// The analyzer never requires one: every operation has a local result
/// that is used when the model is absent or fails.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Complete a prompt, returning the generated text.
    async fn complete(&self, prompt: &CompletionPrompt) -> DocLensResult<String>;

    /// Whether the model is configured and worth calling.
    fn is_available(&self) -> bool {
        true
    }
}

/// The absent completion model.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompletion;

#[async_trait]
impl CompletionModel for NoCompletion {
    async fn complete(&self, _prompt: &CompletionPrompt) -> DocLensResult<String> {
        Err(DocLensError::completion_unavailable())
    }

    fn is_available(&self) -> bool {
        false
    }
}
