//! Offline ATS scoring: keyword coverage, formatting and length combined into
//! a single weighted score.

use crate::config::ScoringConfig;
use crate::processing::formatting::check_formatting;
use crate::processing::keywords::KeywordExtractor;
use crate::processing::suggestions::generate_suggestions_with_limit;
use aho_corasick::AhoCorasick;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const MISSING_INPUT_MESSAGE: &str = "Please provide both Job Description and Resume.";

/// Result of one resume/job comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Share of significant job keywords found in the resume
    pub match_percentage: u32,
    /// Weighted composite of keyword, formatting and length scores
    pub ats_score: u32,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub ats_feedback: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Raw sub-scores behind the composite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub keyword_score: f64,
    pub format_score: u32,
    pub length_score: u32,
    pub word_count: usize,
    pub matched_keywords: usize,
    pub considered_keywords: usize,
}

impl AnalysisResult {
    fn missing_input() -> Self {
        Self {
            suggestions: vec![MISSING_INPUT_MESSAGE.to_string()],
            ..Self::default()
        }
    }
}

/// Keyword coverage of one resume against the top-ranked job keywords
#[derive(Debug, Clone, PartialEq)]
struct KeywordCoverage {
    considered: usize,
    matched: usize,
    missing: Vec<String>,
}

impl KeywordCoverage {
    fn score(&self) -> f64 {
        if self.considered == 0 {
            0.0
        } else {
            100.0 * self.matched as f64 / self.considered as f64
        }
    }
}

/// Deterministic ATS scorer. Holds only configuration, so a single instance
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct AtsScorer {
    config: ScoringConfig,
    extractor: KeywordExtractor,
}

impl AtsScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            extractor: KeywordExtractor::new(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `resume_text` against `job_text`. Never fails: empty input yields
    /// a zero result with a single suggestion asking for both texts.
    pub fn analyze(&self, job_text: &str, resume_text: &str) -> AnalysisResult {
        if job_text.is_empty() || resume_text.is_empty() {
            warn!("Analysis requested with an empty job description or resume");
            return AnalysisResult::missing_input();
        }

        let coverage = self.keyword_coverage(job_text, resume_text);
        let keyword_score = coverage.score();

        let formatting = check_formatting(resume_text);
        let ats_feedback = formatting.issue_lines();

        let word_count = count_words(resume_text);
        let length_score = self.length_score(word_count);

        let composite = keyword_score * self.config.keyword_weight
            + formatting.score as f64 * self.config.format_weight
            + length_score as f64 * self.config.length_weight;
        let ats_score = clamp_percentage(composite);
        let match_percentage = clamp_percentage(keyword_score);

        debug!(
            "keyword={:.1} format={} length={} words={} -> ats={}",
            keyword_score, formatting.score, length_score, word_count, ats_score
        );

        let suggestions = generate_suggestions_with_limit(
            &coverage.missing,
            &ats_feedback,
            self.config.suggestion_keyword_limit,
        );

        let (matched_keywords, considered_keywords) = (coverage.matched, coverage.considered);
        let mut missing_skills = coverage.missing;
        missing_skills.truncate(self.config.missing_skills_limit);

        AnalysisResult {
            match_percentage,
            ats_score,
            missing_skills,
            suggestions,
            ats_feedback,
            breakdown: ScoreBreakdown {
                keyword_score,
                format_score: formatting.score,
                length_score,
                word_count,
                matched_keywords,
                considered_keywords,
            },
        }
    }

    /// Length heuristic. The long-resume check runs after the short-resume
    /// check and wins if both ever apply.
    pub fn length_score(&self, word_count: usize) -> u32 {
        let mut score = 100;
        if word_count < self.config.min_word_count {
            score = self.config.short_length_score;
        }
        if word_count > self.config.max_word_count {
            score = self.config.long_length_score;
        }
        score
    }

    fn keyword_coverage(&self, job_text: &str, resume_text: &str) -> KeywordCoverage {
        let significant = self.extractor.extract(job_text).top(self.config.top_keywords);
        let considered = significant.len();
        if considered == 0 {
            return KeywordCoverage {
                considered: 0,
                matched: 0,
                missing: Vec::new(),
            };
        }

        let resume_lower = resume_text.to_lowercase();
        let found = match AhoCorasick::new(significant.iter().map(|k| k.keyword.as_str())) {
            Ok(matcher) => {
                let mut found = vec![false; considered];
                for mat in matcher.find_overlapping_iter(&resume_lower) {
                    found[mat.pattern().as_usize()] = true;
                }
                found
            }
            Err(e) => {
                warn!("Falling back to linear keyword search: {}", e);
                significant
                    .iter()
                    .map(|k| resume_lower.contains(k.keyword.as_str()))
                    .collect()
            }
        };

        let missing: Vec<String> = significant
            .iter()
            .zip(&found)
            .filter(|&(_, &hit)| !hit)
            .map(|(k, _)| k.keyword.clone())
            .collect();

        KeywordCoverage {
            considered,
            matched: considered - missing.len(),
            missing,
        }
    }
}

/// Number of pieces left after splitting on whitespace runs. Leading and
/// trailing whitespace each contribute an empty piece, so "a b\n" counts 3.
pub fn count_words(text: &str) -> usize {
    let words = text.split_whitespace().count();
    if words == 0 {
        return if text.is_empty() { 1 } else { 2 };
    }
    let leading = text.starts_with(char::is_whitespace) as usize;
    let trailing = text.ends_with(char::is_whitespace) as usize;
    words + leading + trailing
}

/// Score one resume/job pair with the default configuration
pub fn analyze(job_text: &str, resume_text: &str) -> AnalysisResult {
    AtsScorer::new().analyze(job_text, resume_text)
}

fn clamp_percentage(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}
