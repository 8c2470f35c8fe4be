//! Answer, summary and insight result types.

use serde::{Deserialize, Serialize};

use super::Intent;

/// Fixed answer when no sentence matches the question.
pub const NOT_FOUND_ANSWER: &str =
    "I couldn't find specific information related to your question in this document.";

/// Which engine produced a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerOrigin {
    /// Local keyword engine.
    #[default]
    Local,
    /// Injected completion model.
    Remote,
}

/// Answer to a question about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Answer text.
    pub answer: String,
    /// Confidence in [0, 1]; relevance of the top sentence for local answers.
    pub confidence: f32,
    /// Human-readable source descriptions.
    pub sources: Vec<String>,
    /// Document the answer came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    /// Classified intent (absent when nothing matched).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Producing engine.
    #[serde(default)]
    pub origin: AnswerOrigin,
}

impl AnswerResult {
    /// The terminal "could not find" outcome: zero confidence, no sources.
    pub fn not_found() -> Self {
        Self {
            answer: NOT_FOUND_ANSWER.to_string(),
            confidence: 0.0,
            sources: Vec::new(),
            document_name: None,
            intent: None,
            origin: AnswerOrigin::Local,
        }
    }

    /// Whether any passage supported this answer.
    pub fn is_found(&self) -> bool {
        self.confidence > 0.0 && !self.sources.is_empty()
    }

    /// Whether the answer clears a confidence gate.
    pub fn is_confident(&self, gate: f32) -> bool {
        self.is_found() && self.confidence >= gate
    }
}

/// Extractive or remote summary of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Summary text.
    pub summary: String,
    /// Fixed policy confidence.
    pub confidence: f32,
    /// Producing engine.
    #[serde(default)]
    pub origin: AnswerOrigin,
}

/// Formatted insights report for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResult {
    /// Report text.
    pub insights: String,
    /// Fixed policy confidence.
    pub confidence: f32,
    /// Producing engine.
    #[serde(default)]
    pub origin: AnswerOrigin,
}

/// Raw pattern matches found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightReport {
    pub dates: Vec<String>,
    pub money: Vec<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub action_items: Vec<String>,
}

impl InsightReport {
    /// True when no category has a match.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
            && self.money.is_empty()
            && self.emails.is_empty()
            && self.phones.is_empty()
            && self.action_items.is_empty()
    }
}

/// Best answer for a question within one document.
///
/// Compared across documents to keep a running best.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAnswer {
    /// Answer text.
    pub text: String,
    /// Relevance of the top sentence, in [0, 1].
    pub relevance: f32,
    /// Document the answer came from.
    pub source_document: String,
    /// Classified intent.
    pub intent: Intent,
    /// Source descriptions of the underlying answer.
    pub sources: Vec<String>,
    /// Producing engine.
    #[serde(default)]
    pub origin: AnswerOrigin,
}

impl CandidateAnswer {
    /// Build a candidate from an answer; `None` for the not-found outcome.
    pub fn from_answer(result: AnswerResult, source_document: impl Into<String>) -> Option<Self> {
        if !result.is_found() {
            return None;
        }
        Some(Self {
            text: result.answer,
            relevance: result.confidence,
            source_document: source_document.into(),
            intent: result.intent.unwrap_or(Intent::Generic),
            sources: result.sources,
            origin: result.origin,
        })
    }

    /// Strictly more relevant than `other`; ties keep the earlier candidate.
    pub fn beats(&self, other: &CandidateAnswer) -> bool {
        self.relevance > other.relevance
    }

    /// Convert back into an answer result.
    pub fn into_answer(self) -> AnswerResult {
        AnswerResult {
            answer: self.text,
            confidence: self.relevance,
            sources: self.sources,
            document_name: Some(self.source_document),
            intent: Some(self.intent),
            origin: self.origin,
        }
    }
}

/// Word frequency entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Quick statistics about a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    pub document_name: String,
    pub word_count: usize,
    pub paragraphs: usize,
    pub has_numbers: bool,
    pub has_dates: bool,
    pub has_emails: bool,
    /// Most frequent words longer than four characters.
    pub top_keywords: Vec<KeywordCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(confidence: f32) -> AnswerResult {
        AnswerResult {
            answer: "answer".to_string(),
            confidence,
            sources: vec!["doc (1 relevant passages found)".to_string()],
            document_name: Some("doc".to_string()),
            intent: Some(Intent::Money),
            origin: AnswerOrigin::Local,
        }
    }

    #[test]
    fn test_not_found_shape() {
        let result = AnswerResult::not_found();
        assert_eq!(result.answer, NOT_FOUND_ANSWER);
        assert_eq!(result.confidence, 0.0);
        assert!(result.sources.is_empty());
        assert!(!result.is_found());
        assert!(CandidateAnswer::from_answer(result, "doc").is_none());
    }

    #[test]
    fn test_confidence_gate() {
        assert!(found(0.5).is_confident(0.1));
        assert!(!found(0.05).is_confident(0.1));
    }

    #[test]
    fn test_candidate_round_trip_keeps_fields() {
        let candidate = CandidateAnswer::from_answer(found(0.5), "budget.docx").unwrap();
        assert_eq!(candidate.intent, Intent::Money);
        let answer = candidate.into_answer();
        assert_eq!(answer.document_name.as_deref(), Some("budget.docx"));
        assert!((answer.confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ties_do_not_beat() {
        let first = CandidateAnswer::from_answer(found(0.5), "a").unwrap();
        let second = CandidateAnswer::from_answer(found(0.5), "b").unwrap();
        let better = CandidateAnswer::from_answer(found(0.75), "c").unwrap();
        assert!(!second.beats(&first));
        assert!(better.beats(&first));
    }
}
