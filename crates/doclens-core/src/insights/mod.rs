//! Extractive summaries, insight reports and key-info statistics.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::QaConfig;
use crate::patterns::{
    extract_action_items, extract_dates, extract_emails, extract_money, extract_phones, has_numbers,
    has_numeric_date, take_display,
};
use crate::text::segment;
use crate::types::{AnswerOrigin, InsightReport, InsightsResult, KeyInfo, KeywordCount, SummaryResult};

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

const TOP_KEYWORDS: usize = 10;
const MIN_TOPIC_WORD_LEN: usize = 4;

/// Run every pattern extractor over the full text. Matches are uncapped.
pub fn insight_report(text: &str) -> InsightReport {
    InsightReport {
        dates: extract_dates(text),
        money: extract_money(text),
        emails: extract_emails(text),
        phones: extract_phones(text),
        action_items: extract_action_items(text),
    }
}

/// Word, paragraph and topic statistics for a document.
///
/// Top keywords are the ten most frequent words longer than four
/// characters; equal counts keep first-appearance order.
pub fn key_info(text: &str, document_name: &str) -> KeyInfo {
    let paragraphs = PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();

    let lower = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lower, " ");
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() <= MIN_TOPIC_WORD_LEN {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut top_keywords: Vec<KeywordCount> = order
        .into_iter()
        .map(|word| KeywordCount {
            word: word.to_string(),
            count: counts[word],
        })
        .collect();
    top_keywords.sort_by(|a, b| b.count.cmp(&a.count));
    top_keywords.truncate(TOP_KEYWORDS);

    KeyInfo {
        document_name: document_name.to_string(),
        word_count: text.split_whitespace().count(),
        paragraphs,
        has_numbers: has_numbers(text),
        has_dates: has_numeric_date(text),
        has_emails: text.contains('@'),
        top_keywords,
    }
}

/// Local summary and insight generation.
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    min_sentence_len: usize,
    summary_sentences: usize,
    summary_confidence: f32,
    insights_confidence: f32,
    display_limit: usize,
    action_item_limit: usize,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new(&QaConfig::default())
    }
}

impl InsightGenerator {
    pub fn new(config: &QaConfig) -> Self {
        Self {
            min_sentence_len: config.summary_min_sentence_len,
            summary_sentences: config.summary_sentences,
            summary_confidence: config.summary_confidence,
            insights_confidence: config.insights_confidence,
            display_limit: config.display_limit,
            action_item_limit: config.action_item_limit,
        }
    }

    /// Leading sentences of the document, in order.
    pub fn summarize(&self, text: &str, document_name: &str) -> SummaryResult {
        let sentences: Vec<String> = segment(text, self.min_sentence_len)
            .into_iter()
            .take(self.summary_sentences)
            .map(|s| s.text)
            .collect();

        let summary = if sentences.is_empty() {
            format!(
                "**Document Summary for {}:**\n\nNo summary available: the document has no sentences long enough to summarize.",
                document_name
            )
        } else {
            format!(
                "**Document Summary for {}:**\n\n{}.",
                document_name,
                sentences.join(". ")
            )
        };

        SummaryResult {
            summary,
            confidence: self.summary_confidence,
            origin: AnswerOrigin::Local,
        }
    }

    /// One labelled line per non-empty category of the insight report.
    pub fn insights(&self, text: &str, document_name: &str) -> InsightsResult {
        let report = insight_report(text);
        let listing = |label: &str, matches: &[String]| {
            format!("**{}:** {}", label, take_display(matches, self.display_limit).join(", "))
        };

        let mut lines = Vec::new();
        if !report.dates.is_empty() {
            lines.push(listing("Important Dates", &report.dates));
        }
        if !report.money.is_empty() {
            lines.push(listing("Financial Information", &report.money));
        }
        if !report.emails.is_empty() {
            lines.push(listing("Contact Emails", &report.emails));
        }
        if !report.phones.is_empty() {
            lines.push(listing("Phone Numbers", &report.phones));
        }
        if !report.action_items.is_empty() {
            lines.push(format!(
                "**Action Items:** {}",
                take_display(&report.action_items, self.action_item_limit).join(". ")
            ));
        }

        let insights = if lines.is_empty() {
            format!(
                "**Key Points from {}:**\n\nNo dates, amounts, contacts or action items were detected in this document.",
                document_name
            )
        } else {
            lines.join("\n\n")
        };

        InsightsResult {
            insights,
            confidence: self.insights_confidence,
            origin: AnswerOrigin::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_takes_first_three_long_sentences() {
        let text = "First sentence is long enough here. Second sentence is long enough here. \
                    Short one. Third sentence is long enough here. Fourth sentence is long enough here. \
                    Fifth sentence is long enough here.";
        let result = InsightGenerator::default().summarize(text, "notes.txt");

        assert!(result.summary.starts_with("**Document Summary for notes.txt:**\n\n"));
        assert!(result.summary.ends_with(
            "First sentence is long enough here. Second sentence is long enough here. Third sentence is long enough here."
        ));
        assert!(!result.summary.contains("Fourth"));
        assert!(!result.summary.contains("Short one"));
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.origin, AnswerOrigin::Local);
    }

    #[test]
    fn test_summary_without_sentences() {
        let result = InsightGenerator::default().summarize("Too short. Tiny.", "memo.txt");
        assert!(result.summary.contains("No summary available"));
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_insights_fixed_category_order() {
        let text = "Call 555-123-4567 about the $1,200.00 invoice. Email billing@acme.com. \
                    Payment is due 5/3/2024. You must reply. This is important. Also urgent.";
        let result = InsightGenerator::default().insights(text, "invoice.pdf");
        let lines: Vec<&str> = result.insights.split("\n\n").collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "**Important Dates:** 5/3/2024");
        assert_eq!(lines[1], "**Financial Information:** $1,200.00");
        assert_eq!(lines[2], "**Contact Emails:** billing@acme.com");
        assert_eq!(lines[3], "**Phone Numbers:** 555-123-4567");
        assert_eq!(lines[4], "**Action Items:** Payment is due 5/3/2024. You must reply");
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn test_insights_fallback() {
        let result = InsightGenerator::default().insights("A calm note about nothing in particular.", "note.txt");
        assert!(result.insights.starts_with("**Key Points from note.txt:**"));
    }

    #[test]
    fn test_insight_report_is_uncapped() {
        let report = insight_report("a@x.io b@x.io c@x.io d@x.io");
        assert_eq!(report.emails.len(), 4);
        assert!(report.dates.is_empty());
    }

    #[test]
    fn test_key_info() {
        let text = "Project budget review.\n\nThe budget covers hardware.\n  \nContact ops@corp.io by 2024-03-05. Budget!";
        let info = key_info(text, "review.md");

        assert_eq!(info.document_name, "review.md");
        assert_eq!(info.word_count, 12);
        assert_eq!(info.paragraphs, 3);
        assert!(info.has_numbers);
        assert!(info.has_dates);
        assert!(info.has_emails);
        assert_eq!(info.top_keywords[0], KeywordCount { word: "budget".to_string(), count: 3 });
        // Ties keep first appearance.
        assert_eq!(info.top_keywords[1].word, "project");
        assert_eq!(info.top_keywords[2].word, "review");
    }

    #[test]
    fn test_key_info_accented_topics() {
        let info = key_info("Résumé screening: every résumé is read twice.", "hiring.md");
        assert_eq!(info.top_keywords[0], KeywordCount { word: "résumé".to_string(), count: 2 });
    }

    #[test]
    fn test_key_info_empty_text() {
        let info = key_info("", "empty.txt");
        assert_eq!(info.word_count, 0);
        assert_eq!(info.paragraphs, 0);
        assert!(info.top_keywords.is_empty());
    }
}
