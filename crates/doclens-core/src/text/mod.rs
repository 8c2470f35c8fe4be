//! Sentence segmentation, keyword extraction and relevance ranking.

mod keywords;
mod scorer;
mod segment;

pub use keywords::extract_keywords;
pub use scorer::{score, RelevanceScorer, ScoredSentence};
pub use segment::{segment, Sentence};
