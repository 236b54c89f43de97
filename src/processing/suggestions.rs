//! Remediation text built from scoring gaps

pub const DEFAULT_KEYWORD_LIMIT: usize = 5;
pub const WELL_OPTIMIZED_MESSAGE: &str = "Great job! Your resume looks well-optimized.";

/// Build suggestions from the default number of leading missing keywords
pub fn generate_suggestions(missing_keywords: &[String], formatting_issues: &[String]) -> Vec<String> {
    generate_suggestions_with_limit(missing_keywords, formatting_issues, DEFAULT_KEYWORD_LIMIT)
}

/// Keyword line first (if any keywords are missing), then formatting issues in
/// order, then the positive fallback only when both are empty.
pub fn generate_suggestions_with_limit(
    missing_keywords: &[String],
    formatting_issues: &[String],
    keyword_limit: usize,
) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(formatting_issues.len() + 1);

    if !missing_keywords.is_empty() {
        let leading: Vec<&str> = missing_keywords
            .iter()
            .take(keyword_limit)
            .map(String::as_str)
            .collect();
        suggestions.push(format!("Add these high-value keywords: {}", leading.join(", ")));
    }

    suggestions.extend(formatting_issues.iter().cloned());

    if suggestions.is_empty() {
        suggestions.push(WELL_OPTIMIZED_MESSAGE.to_string());
    }

    suggestions
}
