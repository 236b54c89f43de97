//! Prompt templates for the qualitative analyzer

use crate::input::manager::truncate_chars;

/// Character budget for job text in summary, question and STAR prompts
pub const JOB_TEXT_LIMIT: usize = 12_000;
/// Character budgets for the ATS audit prompt
pub const AUDIT_JOB_TEXT_LIMIT: usize = 8_000;
pub const AUDIT_RESUME_TEXT_LIMIT: usize = 4_000;

pub const NO_RESUME_PLACEHOLDER: &str = "No resume provided.";

/// A system/user prompt pair ready for a completion backend
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

const JOB_SUMMARY_TEMPLATE: &str = r#"Analyze this job description. Return JSON with:
{
    "summary": "Brief 2-3 sentence summary",
    "expectations": "Key expectations",
    "techStack": ["Tech 1", "Tech 2"]
}"#;

const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"Generate 5 technical interview questions based on this job description. Return JSON array:
[
    { "category": "Topic", "question": "Question text" }
]"#;

const STAR_ANSWERS_TEMPLATE: &str = r#"Generate 2 STAR method examples relevant to this job. Return JSON array:
[
    { "situation": "Situation...", "task": "Task...", "action": "Action...", "result": "Result..." }
]"#;

const SKILL_AUDIT_TEMPLATE: &str = r#"You are a strict ATS (Applicant Tracking System) Auditor. Compare the resume against the job description using rigorous keyword matching logic.

Methodology:
1. Calculate Match % based on exact keyword presence from the JD in the Resume.
2. ATS Score (0-100) is a weighted calculation:
   - 40% Key Hard Skills (e.g. React, Python)
   - 30% Experience/Role Match
   - 20% Formatting/Section Headers (Standard headers like 'Experience', 'Education' are required)
   - 10% Soft Skills

Return JSON exactly:
{
    "matchPercentage": 0-100,
    "missingSkills": ["Specific missing keyword 1", "Specific missing keyword 2"],
    "suggestions": ["Actionable advice to improve content"],
    "atsScore": 0-100,
    "atsFeedback": [
        "CRITICAL: Missing standard section 'Experience'",
        "WARNING: Use standard bullet points",
        "Identify specific missing keywords"
    ]
}"#;

pub fn job_summary(job_text: &str) -> Prompt {
    Prompt {
        system: JOB_SUMMARY_TEMPLATE.to_string(),
        user: truncate_chars(job_text, JOB_TEXT_LIMIT),
    }
}

pub fn interview_questions(job_text: &str) -> Prompt {
    Prompt {
        system: INTERVIEW_QUESTIONS_TEMPLATE.to_string(),
        user: truncate_chars(job_text, JOB_TEXT_LIMIT),
    }
}

pub fn star_answers(job_text: &str) -> Prompt {
    Prompt {
        system: STAR_ANSWERS_TEMPLATE.to_string(),
        user: truncate_chars(job_text, JOB_TEXT_LIMIT),
    }
}

pub fn skill_audit(job_text: &str, resume_text: Option<&str>) -> Prompt {
    let job = truncate_chars(job_text, AUDIT_JOB_TEXT_LIMIT);
    let resume = match resume_text {
        Some(text) if !text.is_empty() => truncate_chars(text, AUDIT_RESUME_TEXT_LIMIT),
        _ => NO_RESUME_PLACEHOLDER.to_string(),
    };

    Prompt {
        system: SKILL_AUDIT_TEMPLATE.to_string(),
        user: format!(
            "Job Description:\n{}\n\nUser Resume Context:\n{}",
            job, resume
        ),
    }
}
