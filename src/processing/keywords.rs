//! Keyword frequency extraction from job descriptions

use crate::processing::vocabulary::{SkillVocabulary, StopWordSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Anything that is not an ASCII word character, whitespace, `+` or `#`
static STRIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s+#]").expect("Invalid strip regex"));

const MIN_TOKEN_LEN: usize = 3;
const SKILL_BOOST: u32 = 2;
const PLAIN_WEIGHT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: u32,
}

/// Token weights for one job description, in first-occurrence order
#[derive(Debug, Clone, Default)]
pub struct KeywordFrequencyMap {
    entries: Vec<KeywordWeight>,
    index: HashMap<String, usize>,
}

impl KeywordFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, keyword: &str, increment: u32) {
        match self.index.get(keyword) {
            Some(&i) => self.entries[i].weight += increment,
            None => {
                self.index.insert(keyword.to_string(), self.entries.len());
                self.entries.push(KeywordWeight {
                    keyword: keyword.to_string(),
                    weight: increment,
                });
            }
        }
    }

    pub fn get(&self, keyword: &str) -> Option<u32> {
        self.index.get(keyword).map(|&i| self.entries[i].weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordWeight> {
        self.entries.iter()
    }

    /// Entries by descending weight. The sort is stable, so equal weights keep
    /// the order in which the keywords first appeared.
    pub fn ranked(&self) -> Vec<KeywordWeight> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
        ranked
    }

    /// The `n` highest-ranked keywords
    pub fn top(&self, n: usize) -> Vec<KeywordWeight> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Tokenizer and weighting for job-description text
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor {
    stop_words: StopWordSet,
    skills: SkillVocabulary,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-case, strip punctuation (keeping `+` and `#` so `c++` and `c#`
    /// survive) and split on whitespace.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = STRIP_PATTERN.replace_all(&lowered, "");
        stripped.split_whitespace().map(str::to_string).collect()
    }

    pub fn extract(&self, text: &str) -> KeywordFrequencyMap {
        let mut map = KeywordFrequencyMap::new();

        for token in self.tokenize(text) {
            if token.chars().count() < MIN_TOKEN_LEN || self.stop_words.contains(&token) {
                continue;
            }
            let increment = if self.skills.contains(&token) {
                SKILL_BOOST
            } else {
                PLAIN_WEIGHT
            };
            map.add(&token, increment);
        }

        log::debug!("Extracted {} distinct keywords", map.len());
        map
    }
}

/// Extract weighted keywords from job-description text
pub fn extract_keywords(job_text: &str) -> KeywordFrequencyMap {
    KeywordExtractor::new().extract(job_text)
}
