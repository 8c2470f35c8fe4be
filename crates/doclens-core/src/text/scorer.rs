//! Keyword relevance scoring and ranking.

use serde::{Deserialize, Serialize};

use super::keywords::extract_keywords;
use super::segment::segment;
use crate::config::QaConfig;

/// A sentence with its relevance to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Sentence text.
    pub text: String,
    /// Index of the sentence in the source text.
    pub position: usize,
    /// Matched keywords over total keywords, in (0, 1].
    pub score: f32,
}

/// Fraction of `keywords` found (case-insensitive substring) in `sentence`.
///
/// Keywords are expected lower-case and distinct. Zero keywords score 0.
pub fn score(keywords: &[String], sentence: &str) -> f32 {
    if keywords.is_empty() {
        return 0.0;
    }
    let lower = sentence.to_lowercase();
    let matched = keywords.iter().filter(|k| lower.contains(k.as_str())).count();
    matched as f32 / keywords.len() as f32
}

/// Ranks the sentences of a document against a question.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    min_sentence_len: usize,
    min_keyword_len: usize,
    stop_words: Vec<String>,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(&QaConfig::default())
    }
}

impl RelevanceScorer {
    /// Create a scorer using the Q&A sentence pool settings.
    pub fn new(config: &QaConfig) -> Self {
        Self {
            min_sentence_len: config.qa_min_sentence_len,
            min_keyword_len: config.min_keyword_len,
            stop_words: config.stop_words.clone(),
        }
    }

    /// Keywords of a question.
    pub fn keywords(&self, question: &str) -> Vec<String> {
        extract_keywords(question, self.min_keyword_len, self.stop_words.as_slice())
    }

    /// Score every sentence, drop those with no match, and sort by
    /// descending score. Equal scores keep document order.
    pub fn rank(&self, question: &str, text: &str) -> Vec<ScoredSentence> {
        let keywords = self.keywords(question);
        tracing::debug!(keywords = ?keywords, "Looking for keywords");
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<ScoredSentence> = segment(text, self.min_sentence_len)
            .into_iter()
            .filter_map(|sentence| {
                let score = score(&keywords, &sentence.text);
                (score > 0.0).then(|| ScoredSentence {
                    text: sentence.text,
                    position: sentence.position,
                    score,
                })
            })
            .collect();

        // Vec::sort_by is stable.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_matches_rank_higher() {
        let scorer = RelevanceScorer::default();
        let ranked = scorer.rank(
            "what about apples and bananas",
            "A has apples. B has apples and bananas.",
        );

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].text, "B has apples and bananas");
        assert_eq!(ranked[1].text, "A has apples");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_score_is_fraction_of_keywords() {
        let keywords = vec!["about".to_string(), "apples".to_string(), "bananas".to_string()];
        assert!((score(&keywords, "B has APPLES and bananas") - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(score(&keywords, "nothing relevant"), 0.0);
        assert_eq!(score(&[], "anything"), 0.0);
    }

    #[test]
    fn test_ties_keep_document_order() {
        let scorer = RelevanceScorer::default();
        let ranked = scorer.rank(
            "invoice totals",
            "First invoice is pending. Unrelated filler text here. Second invoice arrived late.",
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].text, "First invoice is pending");
        assert_eq!(ranked[1].text, "Second invoice arrived late");
    }

    #[test]
    fn test_no_keyword_no_candidates() {
        let scorer = RelevanceScorer::default();
        assert!(scorer.rank("What is the deadline", "The due date is March 5, 2024.").is_empty());
        assert!(scorer.rank("who? what?", "Everything matches nothing here.").is_empty());
    }

    #[test]
    fn test_substring_match() {
        let scorer = RelevanceScorer::default();
        let ranked = scorer.rank("payment", "Payments are processed monthly.");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 1.0);
    }

    #[test]
    fn test_short_sentences_excluded() {
        let scorer = RelevanceScorer::default();
        assert!(scorer.rank("budget", "Budget ok.").is_empty());
    }
}
