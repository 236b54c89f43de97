//! Parsing of model output into typed payloads

use crate::error::{Result, ResumeScorerError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const INVALID_JSON_MESSAGE: &str = "AI response was not valid JSON.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSummary {
    pub summary: String,
    pub expectations: String,
    pub tech_stack: Vec<String>,
}

impl JobSummary {
    /// Placeholder shown when the summary could not be produced
    pub fn unavailable() -> Self {
        Self {
            summary: "Unavailable".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub category: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarAnswer {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

/// Model-produced counterpart of the offline analysis result. Scores stay
/// fractional since models do not reliably round them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillAudit {
    pub match_percentage: f64,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub ats_score: f64,
    pub ats_feedback: Vec<String>,
}

/// Strip a surrounding markdown code fence, if the whole text is fenced
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.ends_with("```") {
        return trimmed;
    }

    let inner = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Parse a model response as JSON, tolerating a markdown code fence
pub fn clean_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    let body = strip_code_fence(text);
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse model response as JSON: {}", e);
        log::debug!("Raw response: {}", text);
        ResumeScorerError::InvalidResponse(INVALID_JSON_MESSAGE.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{}"), "```json\n{}");
    }

    #[test]
    fn test_lone_fence_does_not_panic() {
        assert_eq!(strip_code_fence("```"), "");
        assert!(clean_json::<JobSummary>("```").is_err());
    }

    #[test]
    fn test_parse_job_summary() {
        let raw = "```json\n{\"summary\": \"Build APIs\", \"expectations\": \"Ownership\", \"techStack\": [\"Rust\", \"AWS\"]}\n```";
        let summary: JobSummary = clean_json(raw).unwrap();
        assert_eq!(summary.summary, "Build APIs");
        assert_eq!(summary.tech_stack, vec!["Rust", "AWS"]);
    }

    #[test]
    fn test_parse_questions() {
        let raw = r#"[{"category": "Rust", "question": "Explain ownership."}]"#;
        let questions: Vec<InterviewQuestion> = clean_json(raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, "Rust");
    }

    #[test]
    fn test_parse_skill_audit_with_missing_fields() {
        let raw = r#"{"matchPercentage": 64, "missingSkills": ["Kafka"]}"#;
        let audit: SkillAudit = clean_json(raw).unwrap();
        assert_eq!(audit.match_percentage, 64.0);
        assert_eq!(audit.missing_skills, vec!["Kafka"]);
        assert!(audit.suggestions.is_empty());
    }

    #[test]
    fn test_parse_skill_audit_with_fractional_scores() {
        let raw = r#"{"matchPercentage": 61.25, "atsScore": 72.5, "atsFeedback": ["WARNING: Use standard bullet points"]}"#;
        let audit: SkillAudit = clean_json(raw).unwrap();
        assert_eq!(audit.match_percentage, 61.25);
        assert_eq!(audit.ats_score, 72.5);
        assert_eq!(audit.ats_feedback.len(), 1);
    }

    #[test]
    fn test_invalid_json() {
        let err = clean_json::<JobSummary>("Sure! Here is the summary.").unwrap_err();
        assert!(matches!(err, ResumeScorerError::InvalidResponse(_)));
        assert_eq!(err.to_string(), format!("Invalid model response: {}", INVALID_JSON_MESSAGE));
    }
}
