//! Report structures wrapping an analysis result for presentation

use crate::llm::analyzer::QualitativeInsights;
use crate::processing::scorer::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Everything a formatter needs to render one comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// One-line verdict derived from the ATS score
    pub verdict: String,

    /// Suggestions ranked by how much they matter
    pub recommendations: Vec<Recommendation>,

    /// Offline scoring output
    pub result: AnalysisResult,

    /// Optional model-produced summary and interview questions
    pub insights: Option<QualitativeInsights>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecommendationPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: SystemTime,

    /// Version of the scorer used
    pub scorer_version: String,

    pub resume_source: String,

    pub job_source: String,

    pub processing_time_ms: u64,
}

impl AnalysisReport {
    pub fn new(
        result: AnalysisResult,
        insights: Option<QualitativeInsights>,
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
        processing_time_ms: u64,
    ) -> Self {
        let verdict = verdict_for(result.ats_score).to_string();
        let mut recommendations: Vec<Recommendation> = result
            .suggestions
            .iter()
            .map(|text| Recommendation {
                priority: classify(text),
                text: text.clone(),
            })
            .collect();
        recommendations.sort_by_key(|r| r.priority);

        Self {
            verdict,
            recommendations,
            result,
            insights,
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_source: resume_source.into(),
                job_source: job_source.into(),
                processing_time_ms,
            },
        }
    }

    pub fn recommendations_with(&self, priority: RecommendationPriority) -> impl Iterator<Item = &Recommendation> {
        self.recommendations.iter().filter(move |r| r.priority == priority)
    }
}

pub fn verdict_for(ats_score: u32) -> &'static str {
    match ats_score {
        90..=100 => "Excellent match - ready to submit",
        75..=89 => "Strong match - a few tweaks recommended",
        60..=74 => "Moderate match - targeted improvements needed",
        40..=59 => "Weak match - significant gaps to close",
        _ => "Poor match - major revisions required",
    }
}

/// Map a suggestion line to a priority by its severity prefix
fn classify(text: &str) -> RecommendationPriority {
    if text.starts_with("CRITICAL") {
        RecommendationPriority::Critical
    } else if text.starts_with("Add these high-value keywords") {
        RecommendationPriority::High
    } else if text.starts_with("WARNING") {
        RecommendationPriority::Medium
    } else {
        RecommendationPriority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::analyze;

    #[test]
    fn test_recommendations_are_prioritized() {
        let result = analyze(
            "Looking for a Python developer with Docker and AWS experience. Must know React.",
            "Experience with Python and AWS. Education: BSc.",
        );
        let report = AnalysisReport::new(result, None, "resume.txt", "job.txt", 3);

        let priorities: Vec<RecommendationPriority> =
            report.recommendations.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![
                RecommendationPriority::Critical,
                RecommendationPriority::High,
                RecommendationPriority::Medium,
                RecommendationPriority::Low,
            ]
        );
        assert_eq!(report.recommendations_with(RecommendationPriority::Critical).count(), 1);
        assert_eq!(report.metadata.job_source, "job.txt");
    }

    #[test]
    fn test_verdict_bands() {
        assert!(verdict_for(100).starts_with("Excellent"));
        assert!(verdict_for(75).starts_with("Strong"));
        assert!(verdict_for(60).starts_with("Moderate"));
        assert!(verdict_for(45).starts_with("Weak"));
        assert!(verdict_for(0).starts_with("Poor"));
    }
}
