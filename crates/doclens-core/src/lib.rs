//! doclens-core - Core library for doclens.
//!
//! This crate answers natural-language questions about business documents
//! by keyword-ranking their sentences, and produces extractive summaries and
//! pattern-based insight reports. A completion model can optionally be
//! plugged in; every operation has a local result to fall back on.
//!
//! # Example
//!
//! ```ignore
//! use doclens_core::{DocumentAnalyzer, QaConfig};
//!
//! let analyzer = DocumentAnalyzer::new(QaConfig::default());
//! let text = analyzer.extract_text(&bytes, "application/pdf", "contract.pdf").await?;
//!
//! let answer = analyzer.answer_question("When does the contract expire?", &text, "contract.pdf");
//! println!("{} ({:.2})", answer.answer, answer.confidence);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod insights;
pub mod patterns;
pub mod search;
pub mod source;
pub mod synthesizer;
pub mod text;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use analyzer::DocumentAnalyzer;
pub use config::QaConfig;
pub use error::{DocLensError, DocLensResult, ErrorCode};
pub use insights::{insight_report, key_info, InsightGenerator};
pub use search::{DocumentSearch, SearchOutcome};
pub use source::{DirectorySource, DocumentSource, InMemorySource};
pub use synthesizer::{classify, AnswerSynthesizer, IntentRule, INTENT_RULES};
pub use text::{extract_keywords, segment, RelevanceScorer, ScoredSentence, Sentence};
pub use traits::{CompletionModel, CompletionPrompt, NoCompletion};
pub use types::{
    AnswerOrigin, AnswerResult, CandidateAnswer, Document, DocumentMeta, InsightReport, InsightsResult, Intent,
    KeyInfo, KeywordCount, SummaryResult,
};
