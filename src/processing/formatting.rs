//! Resume structure and formatting audit

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}(?-u:\b)").expect("Invalid email regex")
});

/// Section headers every resume is expected to carry, in reporting order
pub const REQUIRED_SECTIONS: [&str; 3] = ["experience", "education", "skills"];

const BULLET_MARKERS: [&str; 3] = ["•", "- ", "* "];
const PENALTY: u32 = 10;
const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Tip,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Tip => "TIP",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatIssue {
    pub severity: Severity,
    pub message: String,
}

impl FormatIssue {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCheckResult {
    pub score: u32,
    pub issues: Vec<FormatIssue>,
}

impl FormatCheckResult {
    /// Issues rendered with their severity prefix, e.g. `WARNING: ...`
    pub fn issue_lines(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Audit resume text for section headers, contact details and bullets
pub fn check_formatting(resume_text: &str) -> FormatCheckResult {
    let lower = resume_text.to_lowercase();
    let mut issues = Vec::new();

    for section in REQUIRED_SECTIONS {
        if !lower.contains(section) {
            issues.push(FormatIssue::new(
                Severity::Critical,
                format!("Missing '{}' section.", title_case(section)),
            ));
        }
    }

    if !EMAIL_PATTERN.is_match(resume_text) {
        issues.push(FormatIssue::new(Severity::Warning, "No email address detected."));
    }

    if !BULLET_MARKERS.iter().any(|marker| resume_text.contains(marker)) {
        issues.push(FormatIssue::new(
            Severity::Tip,
            "Use standard bullet points (•, -) for readability.",
        ));
    }

    let penalty = PENALTY * issues.len() as u32;
    let score = MAX_SCORE.saturating_sub(penalty);

    FormatCheckResult { score, issues }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "Jane Roe\njane.roe@example.com\n\nExperience\n- Built APIs\n\nEducation\nBSc\n\nSkills\n• Rust";

    #[test]
    fn test_well_formed_resume() {
        let result = check_formatting(WELL_FORMED);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_everything_missing() {
        let result = check_formatting("just a name");
        assert_eq!(result.score, 50);
        assert_eq!(
            result.issue_lines(),
            vec![
                "CRITICAL: Missing 'Experience' section.",
                "CRITICAL: Missing 'Education' section.",
                "CRITICAL: Missing 'Skills' section.",
                "WARNING: No email address detected.",
                "TIP: Use standard bullet points (•, -) for readability.",
            ]
        );
    }

    #[test]
    fn test_section_headers_are_case_insensitive() {
        let result = check_formatting("EXPERIENCE Education skills a@b.io • x");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_adding_section_raises_score() {
        let before = check_formatting("Experience\nEducation\nme@mail.com\n- bullet");
        let after = check_formatting("Experience\nEducation\nSkills\nme@mail.com\n- bullet");
        assert!(after.score > before.score);
        assert!(before
            .issue_lines()
            .contains(&"CRITICAL: Missing 'Skills' section.".to_string()));
        assert!(after.issues.is_empty());
    }

    #[test]
    fn test_email_detection() {
        assert!(EMAIL_PATTERN.is_match("Contact: John.Doe+jobs@Mail.Example.ORG"));
        assert!(!EMAIL_PATTERN.is_match("john@localhost"));
        assert!(!EMAIL_PATTERN.is_match("john@example.c"));
        assert!(!EMAIL_PATTERN.is_match("@example.com"));
    }

    #[test]
    fn test_email_next_to_non_ascii_letters() {
        for text in ["邮箱jane@example.com", "garcía@mail.com", "jane@example.comé"] {
            assert!(EMAIL_PATTERN.is_match(text), "no email found in {}", text);
            let issues = check_formatting(text).issue_lines();
            assert!(!issues.contains(&"WARNING: No email address detected.".to_string()));
        }
    }

    #[test]
    fn test_bullet_markers() {
        let base = "Experience Education Skills a@b.io ";
        assert_eq!(check_formatting(&format!("{}* item", base)).score, 100);
        assert_eq!(check_formatting(&format!("{}- item", base)).score, 100);
        assert_eq!(check_formatting(&format!("{}•item", base)).score, 100);
        assert_eq!(check_formatting(&format!("{}-item", base)).score, 90);
    }

    #[test]
    fn test_severity_labels() {
        let issue = FormatIssue::new(Severity::Tip, "hello");
        assert_eq!(issue.to_string(), "TIP: hello");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }
}
