//! Sentence segmentation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// A sentence of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text, without its terminator.
    pub text: String,
    /// Index among all segments of the source text, before filtering.
    pub position: usize,
}

/// Split text on `.`, `!` and `?` and keep trimmed sentences longer than
/// `min_len` characters.
pub fn segment(text: &str, min_len: usize) -> Vec<Sentence> {
    SENTENCE_TERMINATORS
        .split(text)
        .enumerate()
        .filter_map(|(position, raw)| {
            let trimmed = raw.trim();
            (trimmed.chars().count() > min_len).then(|| Sentence {
                text: trimmed.to_string(),
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_split_on_all_terminators() {
        let text = "The budget is approved. Is the venue booked?! Send invites now!";
        let sentences = segment(text, 10);
        assert_eq!(
            texts(&sentences),
            vec!["The budget is approved", "Is the venue booked", "Send invites now"]
        );
    }

    #[test]
    fn test_min_length_is_exclusive() {
        // "Exactly ten" has 11 chars, "0123456789" exactly 10.
        let sentences = segment("Exactly ten. Ten chars! 0123456789.", 10);
        assert_eq!(texts(&sentences), vec!["Exactly ten"]);
    }

    #[test]
    fn test_positions_count_filtered_fragments() {
        let sentences = segment("Hi. This sentence is long enough. Ok.", 10);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].position, 1);
    }

    #[test]
    fn test_thresholds_differ() {
        let text = "Short but over ten. This one is comfortably over twenty characters.";
        assert_eq!(segment(text, 10).len(), 2);
        assert_eq!(segment(text, 20).len(), 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(segment("", 10).is_empty());
        assert!(segment("   \n ", 10).is_empty());
    }
}
