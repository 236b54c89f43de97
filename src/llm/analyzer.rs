//! Qualitative analysis through a pluggable completion backend

use crate::error::Result;
use crate::llm::prompts::{self, Prompt};
use crate::llm::response::{clean_json, InterviewQuestion, JobSummary, SkillAudit, StarAnswer};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Chat-completion capability supplied by the caller.
///
/// Implementations own transport and credentials; the analyzer only deals
/// in prompts and raw response text.
pub trait CompletionBackend: Send + Sync {
    fn complete(&self, system: &str, user: &str) -> impl Future<Output = Result<String>> + Send;

    /// Name shown in reports, e.g. the model identifier
    fn name(&self) -> String;
}

/// Summary and interview questions gathered for one job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitativeInsights {
    pub backend: String,
    pub summary: JobSummary,
    pub questions: Vec<InterviewQuestion>,
}

pub struct QualitativeAnalyzer<B> {
    backend: B,
}

impl<B: CompletionBackend> QualitativeAnalyzer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn run(&self, prompt: Prompt) -> Result<String> {
        self.backend.complete(&prompt.system, &prompt.user).await
    }

    pub async fn analyze_job(&self, job_text: &str) -> Result<JobSummary> {
        let raw = self.run(prompts::job_summary(job_text)).await?;
        clean_json(&raw)
    }

    pub async fn generate_questions(&self, job_text: &str) -> Result<Vec<InterviewQuestion>> {
        let raw = self.run(prompts::interview_questions(job_text)).await?;
        clean_json(&raw)
    }

    pub async fn generate_star_answers(&self, job_text: &str) -> Result<Vec<StarAnswer>> {
        let raw = self.run(prompts::star_answers(job_text)).await?;
        clean_json(&raw)
    }

    pub async fn check_skills(&self, job_text: &str, resume_text: Option<&str>) -> Result<SkillAudit> {
        let raw = self.run(prompts::skill_audit(job_text, resume_text)).await?;
        clean_json(&raw)
    }

    /// Summary and questions requested concurrently. Either half degrades to
    /// a placeholder on failure instead of failing the whole call.
    pub async fn insights(&self, job_text: &str) -> QualitativeInsights {
        info!("Requesting qualitative insights from {}", self.backend.name());

        let (summary, questions) = tokio::join!(
            self.analyze_job(job_text),
            self.generate_questions(job_text)
        );

        let summary = summary.unwrap_or_else(|e| {
            warn!("Job summary unavailable: {}", e);
            JobSummary::unavailable()
        });
        let questions = questions.unwrap_or_else(|e| {
            warn!("Interview questions unavailable: {}", e);
            Vec::new()
        });

        QualitativeInsights {
            backend: self.backend.name(),
            summary,
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeScorerError;
    use std::sync::Mutex;

    /// Replies based on which prompt it receives and records every call
    struct CannedBackend {
        summary: Option<&'static str>,
        questions: Option<&'static str>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl CannedBackend {
        fn new(summary: Option<&'static str>, questions: Option<&'static str>) -> Self {
            Self {
                summary,
                questions,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl CompletionBackend for CannedBackend {
        async fn complete(&self, system: &str, user: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));

            let reply = if system.starts_with("Analyze this job description") {
                self.summary
            } else if system.starts_with("Generate 5 technical interview questions") {
                self.questions
            } else if system.starts_with("Generate 2 STAR") {
                Some(r#"[{"situation": "s", "task": "t", "action": "a", "result": "r"}]"#)
            } else {
                Some(r#"{"matchPercentage": 80, "atsScore": 75}"#)
            };

            reply
                .map(str::to_string)
                .ok_or_else(|| ResumeScorerError::Qualitative("backend offline".to_string()))
        }

        fn name(&self) -> String {
            "canned".to_string()
        }
    }

    const SUMMARY: &str = "```json\n{\"summary\": \"Platform role\", \"expectations\": \"On-call\", \"techStack\": [\"Rust\"]}\n```";
    const QUESTIONS: &str = r#"[{"category": "Systems", "question": "How does epoll work?"}]"#;

    #[tokio::test]
    async fn test_insights_success() {
        let analyzer = QualitativeAnalyzer::new(CannedBackend::new(Some(SUMMARY), Some(QUESTIONS)));
        let insights = analyzer.insights("Rust platform engineer").await;

        assert_eq!(insights.backend, "canned");
        assert_eq!(insights.summary.summary, "Platform role");
        assert_eq!(insights.questions.len(), 1);
        assert_eq!(analyzer.backend().calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insights_degrade_on_failure() {
        let analyzer = QualitativeAnalyzer::new(CannedBackend::new(None, Some("not json")));
        let insights = analyzer.insights("Rust platform engineer").await;

        assert_eq!(insights.summary, JobSummary::unavailable());
        assert!(insights.questions.is_empty());
    }

    #[tokio::test]
    async fn test_star_answers_and_audit() {
        let analyzer = QualitativeAnalyzer::new(CannedBackend::new(None, None));

        let answers = analyzer.generate_star_answers("job").await.unwrap();
        assert_eq!(answers[0].result, "r");

        let audit = analyzer.check_skills("job", None).await.unwrap();
        assert_eq!(audit.match_percentage, 80.0);
        assert_eq!(audit.ats_score, 75.0);

        let calls = analyzer.backend().calls.lock().unwrap();
        assert!(calls[1].1.ends_with(prompts::NO_RESUME_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_analyze_job_propagates_errors() {
        let analyzer = QualitativeAnalyzer::new(CannedBackend::new(None, None));
        let err = analyzer.analyze_job("job").await.unwrap_err();
        assert!(matches!(err, ResumeScorerError::Qualitative(_)));
    }
}
