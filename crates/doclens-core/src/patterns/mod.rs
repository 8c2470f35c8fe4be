//! Regex-based detectors for dates, money, contacts and action items.
//!
//! Every detector is a pure function returning matches in text order. None
//! of them can fail: no match is an empty vector.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that mark a sentence as an action item (case-insensitive).
pub const ACTION_WORDS: &[&str] = &[
    "must", "should", "need to", "required", "deadline", "due", "urgent", "important",
];

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}\b|\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}\b",
    )
    .unwrap()
});

static MONEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$[\d,]+\.?\d*|\b\d+\.\d{2}\b|\b\d{1,3}(?:,\d{3})*\s*(?:dollars?|usd|aud)\b")
        .unwrap()
});

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[\-.]?\d{3}[\-.]?\d{4}\b").unwrap());

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").unwrap());

static DEADLINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:deadline|due date|expires?|by)\s+[^.!?]+").unwrap());

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

static NUMERIC_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\d{4}[/\-]\d{1,2}[/\-]\d{1,2}").unwrap()
});

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Numeric (`5/3/2024`, `05-03-24`) and month-name (`March 5, 2024`) dates.
pub fn extract_dates(text: &str) -> Vec<String> {
    find_all(&DATE_PATTERN, text)
}

/// Dollar amounts, bare two-decimal amounts and `N dollars/usd/aud` forms.
pub fn extract_money(text: &str) -> Vec<String> {
    find_all(&MONEY_PATTERN, text)
}

/// Email addresses.
pub fn extract_emails(text: &str) -> Vec<String> {
    find_all(&EMAIL_PATTERN, text)
}

/// North-American style phone numbers.
pub fn extract_phones(text: &str) -> Vec<String> {
    find_all(&PHONE_PATTERN, text)
}

/// Two consecutive capitalized words, taken as a person name.
pub fn extract_names(text: &str) -> Vec<String> {
    find_all(&NAME_PATTERN, text)
}

/// Phrases starting at `deadline`, `due date`, `expire(s)` or `by`, up to
/// the end of the sentence.
pub fn extract_deadlines(text: &str) -> Vec<String> {
    find_all(&DEADLINE_PATTERN, text)
}

/// Sentences containing any of [`ACTION_WORDS`].
pub fn extract_action_items(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            ACTION_WORDS.iter().any(|word| lower.contains(word))
        })
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Whether the text contains any digit run.
pub fn has_numbers(text: &str) -> bool {
    NUMBER_PATTERN.is_match(text)
}

/// Whether the text contains a numeric date (day-first or ISO-like).
pub fn has_numeric_date(text: &str) -> bool {
    NUMERIC_DATE_PATTERN.is_match(text)
}

/// First `limit` matches, for display.
pub fn take_display(matches: &[String], limit: usize) -> &[String] {
    &matches[..matches.len().min(limit)]
}
