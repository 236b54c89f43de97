//! Offline scoring engine: keyword extraction, formatting audit, score
//! aggregation and suggestion text

pub mod vocabulary;
pub mod keywords;
pub mod formatting;
pub mod suggestions;
pub mod scorer;

pub use formatting::{check_formatting, FormatCheckResult, FormatIssue, Severity};
pub use keywords::{extract_keywords, KeywordExtractor, KeywordFrequencyMap, KeywordWeight};
pub use scorer::{analyze, AnalysisResult, AtsScorer, ScoreBreakdown};
pub use suggestions::generate_suggestions;
