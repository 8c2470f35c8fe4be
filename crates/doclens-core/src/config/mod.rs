//! Configuration system for doclens.
//!
//! Every tunable policy value of the engine lives in [`QaConfig`]: sentence
//! length filters, the confidence gate, the fixed confidences reported for
//! summaries and insights, and the time budgets of the async seams.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DocLensError, DocLensResult};

/// Question words ignored when extracting keywords.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "what", "when", "where", "how", "why", "who", "does", "will", "can", "should",
];

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QaConfig {
    /// Sentences must be longer than this (in chars) to join a Q&A pool.
    pub qa_min_sentence_len: usize,
    /// Sentences must be longer than this (in chars) to join a summary.
    pub summary_min_sentence_len: usize,
    /// Number of ranked sentences handed to the synthesizer.
    pub top_sentences: usize,
    /// Question words of this length or shorter are not keywords.
    pub min_keyword_len: usize,
    /// Question words that are never keywords.
    pub stop_words: Vec<String>,
    /// Minimum confidence for a best answer to be surfaced by a search.
    pub confidence_gate: f32,
    /// Confidence reported for extractive summaries.
    pub summary_confidence: f32,
    /// Confidence reported for pattern-based insights.
    pub insights_confidence: f32,
    /// Confidence reported for completion-model answers.
    pub remote_confidence: f32,
    /// Maximum matches listed per category in formatted output.
    pub display_limit: usize,
    /// Maximum action items listed in an insights report.
    pub action_item_limit: usize,
    /// Number of leading sentences in an extractive summary.
    pub summary_sentences: usize,
    /// Document characters included in a completion prompt.
    pub prompt_char_budget: usize,
    /// Time budget for one completion call.
    pub completion_timeout_ms: u64,
    /// Time budget for fetching, extracting and answering one document.
    pub document_timeout_ms: u64,
    /// Time budget for a whole multi-document search.
    pub search_timeout_ms: u64,
    /// Documents processed concurrently during a search.
    pub search_concurrency: usize,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            qa_min_sentence_len: 10,
            summary_min_sentence_len: 20,
            top_sentences: 3,
            min_keyword_len: 3,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            confidence_gate: 0.1,
            summary_confidence: 0.6,
            insights_confidence: 0.7,
            remote_confidence: 0.9,
            display_limit: 3,
            action_item_limit: 2,
            summary_sentences: 3,
            prompt_char_budget: 3000,
            completion_timeout_ms: 30_000,
            document_timeout_ms: 10_000,
            search_timeout_ms: 60_000,
            search_concurrency: 4,
        }
    }
}

impl QaConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> DocLensResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| DocLensError::Configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DocLensError::Configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| DocLensError::Configuration(e.to_string()))?,
            _ => {
                return Err(DocLensError::Configuration(
                    "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `DOCLENS_*` environment variables.
    ///
    /// Unparseable values are ignored and the default is kept. The result is
    /// validated like a configuration file.
    pub fn from_env() -> DocLensResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> DocLensResult<Self> {
        let mut config = Self::default();

        fn parse<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
            value.and_then(|v| v.trim().parse().ok())
        }

        if let Some(v) = parse(var("DOCLENS_CONFIDENCE_GATE")) {
            config.confidence_gate = v;
        }
        if let Some(v) = parse(var("DOCLENS_TOP_SENTENCES")) {
            config.top_sentences = v;
        }
        if let Some(v) = parse(var("DOCLENS_PROMPT_CHAR_BUDGET")) {
            config.prompt_char_budget = v;
        }
        if let Some(v) = parse(var("DOCLENS_COMPLETION_TIMEOUT_MS")) {
            config.completion_timeout_ms = v;
        }
        if let Some(v) = parse(var("DOCLENS_DOCUMENT_TIMEOUT_MS")) {
            config.document_timeout_ms = v;
        }
        if let Some(v) = parse(var("DOCLENS_SEARCH_TIMEOUT_MS")) {
            config.search_timeout_ms = v;
        }
        if let Some(v) = parse(var("DOCLENS_SEARCH_CONCURRENCY")) {
            config.search_concurrency = v;
        }
        if let Some(words) = var("DOCLENS_STOP_WORDS") {
            config.stop_words = words
                .split(',')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    /// Default location of the user configuration file.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".doclens"))
            .unwrap_or_else(|| PathBuf::from(".doclens"))
            .join("config.toml")
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> QaConfigBuilder {
        QaConfigBuilder::default()
    }

    /// Validate configuration values are in valid ranges.
    pub fn validate(&self) -> DocLensResult<()> {
        let unit = |name: &str, value: f32| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(DocLensError::Configuration(format!(
                    "{} must be between 0.0 and 1.0",
                    name
                )))
            }
        };

        unit("confidence_gate", self.confidence_gate)?;
        unit("summary_confidence", self.summary_confidence)?;
        unit("insights_confidence", self.insights_confidence)?;
        unit("remote_confidence", self.remote_confidence)?;

        if self.top_sentences == 0 {
            return Err(DocLensError::Configuration(
                "top_sentences must be at least 1".to_string(),
            ));
        }
        if self.search_concurrency == 0 {
            return Err(DocLensError::Configuration(
                "search_concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Time budget for one completion call.
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_millis(self.completion_timeout_ms)
    }

    /// Time budget for one document during a search.
    pub fn document_timeout(&self) -> Duration {
        Duration::from_millis(self.document_timeout_ms)
    }

    /// Time budget for a whole search.
    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }
}

/// Builder for QaConfig.
#[derive(Default)]
pub struct QaConfigBuilder {
    config: QaConfig,
}

impl QaConfigBuilder {
    /// Set the confidence gate.
    pub fn confidence_gate(mut self, gate: f32) -> Self {
        self.config.confidence_gate = gate;
        self
    }

    /// Set the number of ranked sentences used per answer.
    pub fn top_sentences(mut self, n: usize) -> Self {
        self.config.top_sentences = n;
        self
    }

    /// Set the stop-word list.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sentence length filters for Q&A and summary pools.
    pub fn sentence_lengths(mut self, qa: usize, summary: usize) -> Self {
        self.config.qa_min_sentence_len = qa;
        self.config.summary_min_sentence_len = summary;
        self
    }

    /// Set the completion timeout.
    pub fn completion_timeout(mut self, timeout: Duration) -> Self {
        self.config.completion_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set per-document and total search timeouts.
    pub fn search_timeouts(mut self, per_document: Duration, total: Duration) -> Self {
        self.config.document_timeout_ms = per_document.as_millis() as u64;
        self.config.search_timeout_ms = total.as_millis() as u64;
        self
    }

    /// Set search concurrency.
    pub fn search_concurrency(mut self, n: usize) -> Self {
        self.config.search_concurrency = n;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> QaConfig {
        self.config
    }
}
