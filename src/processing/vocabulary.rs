//! Static word lists used by keyword extraction

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Common English
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
        "will", "would", "shall", "should", "can", "could", "may", "might", "must",
        "this", "that", "these", "those", "it", "its", "we", "us", "our", "you", "your", "they",
        "them", "their", "i", "me", "my", "he", "him", "his", "she", "her", "hers",
        "what", "which", "who", "whom", "whose", "where", "when", "why", "how",
        "as", "if", "than", "so", "because", "while", "until", "unless", "since",
        "about", "against", "between", "into", "through", "during", "before", "after", "above",
        "below", "from", "up", "down", "out", "off", "over", "under", "again", "further", "then",
        "once", "here", "there", "all", "any", "both", "each", "few", "more", "most", "other",
        "some", "such", "no", "nor", "not", "only", "own", "same", "too", "very", "s", "t",
        "just", "don", "now",
        // Generic job-ad vocabulary
        "experience", "work", "job", "role", "position", "candidate", "team", "skills",
        "requirements", "responsibilities",
    ]
    .into_iter()
    .collect()
});

static SKILL_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Languages
        "javascript", "python", "java", "c++", "c#", "ruby", "go", "swift", "kotlin", "php",
        "typescript", "rust",
        // Frameworks
        "react", "angular", "vue", "node.js", "django", "flask", "spring", "asp.net", "laravel",
        "rails",
        // Web and data stores
        "html", "css", "sql", "nosql", "mongodb", "postgresql", "mysql", "oracle", "redis",
        "firebase",
        // Platforms and tooling
        "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab", "jira",
        // Practices
        "agile", "scrum", "kanban", "devops", "ci/cd", "machine learning", "ai", "data science",
        "nlp",
    ]
    .into_iter()
    .collect()
});

/// Common English and job-ad words excluded from keyword extraction
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWordSet;

impl StopWordSet {
    pub fn contains(&self, word: &str) -> bool {
        STOP_WORDS.contains(word)
    }

    pub fn len(&self) -> usize {
        STOP_WORDS.len()
    }

    pub fn is_empty(&self) -> bool {
        STOP_WORDS.is_empty()
    }
}

/// Known technical skill terms that receive a frequency boost.
///
/// Some entries contain punctuation or spaces (`node.js`, `ci/cd`,
/// `machine learning`) and can never equal a single extracted token; they are
/// kept so the list reads as the full curated vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillVocabulary;

impl SkillVocabulary {
    pub fn contains(&self, term: &str) -> bool {
        SKILL_VOCABULARY.contains(term)
    }

    pub fn len(&self) -> usize {
        SKILL_VOCABULARY.len()
    }

    pub fn is_empty(&self) -> bool {
        SKILL_VOCABULARY.is_empty()
    }

    /// Sorted copy of the vocabulary, for listing
    pub fn terms(&self) -> Vec<&'static str> {
        let mut terms: Vec<&'static str> = SKILL_VOCABULARY.iter().copied().collect();
        terms.sort_unstable();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_include_job_ad_terms() {
        let stop_words = StopWordSet;
        for word in ["the", "experience", "team", "skills", "responsibilities"] {
            assert!(stop_words.contains(word), "{} should be a stop word", word);
        }
        assert!(!stop_words.contains("python"));
    }

    #[test]
    fn test_skill_vocabulary_lookup() {
        let skills = SkillVocabulary;
        assert!(skills.contains("c++"));
        assert!(skills.contains("c#"));
        assert!(skills.contains("docker"));
        assert!(!skills.contains("Docker"));
        assert!(!skills.contains("developer"));
    }

    #[test]
    fn test_terms_are_sorted() {
        let terms = SkillVocabulary.terms();
        assert_eq!(terms.len(), SkillVocabulary.len());
        assert!(terms.windows(2).all(|w| w[0] <= w[1]));
    }
}
