//! Question keyword extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Extract distinct keywords from a question, in order of first appearance.
///
/// Lower-cases, turns punctuation into spaces (letters of any script count
/// as word characters), and drops words of
/// `min_len` characters or fewer as well as stop words.
pub fn extract_keywords<S: AsRef<str>>(question: &str, min_len: usize, stop_words: &[S]) -> Vec<String> {
    let lower = question.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lower, " ");

    let mut keywords: Vec<String> = Vec::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() <= min_len {
            continue;
        }
        if stop_words.iter().any(|stop| stop.as_ref() == word) {
            continue;
        }
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    keywords
}
