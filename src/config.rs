//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Weights and thresholds used by the offline ATS scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub format_weight: f64,
    pub length_weight: f64,
    /// Number of top-ranked job keywords considered significant
    pub top_keywords: usize,
    pub missing_skills_limit: usize,
    pub suggestion_keyword_limit: usize,
    pub min_word_count: usize,
    pub short_length_score: u32,
    pub max_word_count: usize,
    pub long_length_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub max_resume_chars: usize,
    pub min_job_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 0.5,
            format_weight: 0.3,
            length_weight: 0.2,
            top_keywords: 20,
            missing_skills_limit: 10,
            suggestion_keyword_limit: 5,
            min_word_count: 200,
            short_length_score: 50,
            max_word_count: 2000,
            long_length_score: 80,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_resume_chars: 50_000,
            min_job_chars: 50,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("keyword_weight", self.keyword_weight),
            ("format_weight", self.format_weight),
            ("length_weight", self.length_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ResumeScorerError::Configuration(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        let total = self.keyword_weight + self.format_weight + self.length_weight;
        if total > 1.0 + 1e-9 {
            return Err(ResumeScorerError::Configuration(format!(
                "scoring weights must sum to at most 1.0, got {:.3}",
                total
            )));
        }

        if self.short_length_score > 100 || self.long_length_score > 100 {
            return Err(ResumeScorerError::Configuration(
                "length scores must be within 0..=100".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or defaults when nothing has been written there yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overwrite `path` with defaults without reading its current contents
    pub fn reset(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }

    /// Set a single value by dotted key, e.g. `scoring.top_keywords`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
            value.parse::<T>().map_err(|_| {
                ResumeScorerError::Configuration(format!("Invalid value for {}: {}", key, value))
            })
        }

        let mut updated = self.clone();
        match key {
            "scoring.keyword_weight" => updated.scoring.keyword_weight = parse(key, value)?,
            "scoring.format_weight" => updated.scoring.format_weight = parse(key, value)?,
            "scoring.length_weight" => updated.scoring.length_weight = parse(key, value)?,
            "scoring.top_keywords" => updated.scoring.top_keywords = parse(key, value)?,
            "scoring.missing_skills_limit" => updated.scoring.missing_skills_limit = parse(key, value)?,
            "scoring.suggestion_keyword_limit" => {
                updated.scoring.suggestion_keyword_limit = parse(key, value)?
            }
            "scoring.min_word_count" => updated.scoring.min_word_count = parse(key, value)?,
            "scoring.short_length_score" => updated.scoring.short_length_score = parse(key, value)?,
            "scoring.max_word_count" => updated.scoring.max_word_count = parse(key, value)?,
            "scoring.long_length_score" => updated.scoring.long_length_score = parse(key, value)?,
            "input.max_resume_chars" => updated.input.max_resume_chars = parse(key, value)?,
            "input.min_job_chars" => updated.input.min_job_chars = parse(key, value)?,
            "output.format" => {
                updated.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeScorerError::Configuration)?
            }
            "output.detailed" => updated.output.detailed = parse(key, value)?,
            "output.color_output" => updated.output.color_output = parse(key, value)?,
            _ => {
                return Err(ResumeScorerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.top_keywords, 20);
        assert_eq!(config.scoring.missing_skills_limit, 10);
        assert_eq!(config.input.max_resume_chars, 50_000);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.top_keywords = 15;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\ntop_keywords = 5\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.top_keywords, 5);
        assert_eq!(loaded.scoring.keyword_weight, 0.5);
        assert_eq!(loaded.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_rejects_overweighted_scoring() {
        let mut config = Config::default();
        config.scoring.keyword_weight = 0.9;
        assert!(matches!(config.validate(), Err(ResumeScorerError::Configuration(_))));

        config.scoring.keyword_weight = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reset_recovers_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nkeyword_weight = 0.9\n").unwrap();
        assert!(Config::load_from(&path).is_err());
        assert!(Config::load_or_default(&path).is_err());

        let reset = Config::reset(&path).unwrap();
        assert_eq!(reset, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_reset_and_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fresh").join("config.toml");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
        assert!(!path.exists());

        Config::reset(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_set_by_key() {
        let mut config = Config::default();
        config.set("scoring.top_keywords", "25").unwrap();
        config.set("output.format", "json").unwrap();
        assert_eq!(config.scoring.top_keywords, 25);
        assert_eq!(config.output.format, OutputFormat::Json);

        assert!(config.set("scoring.unknown", "1").is_err());
        assert!(config.set("scoring.top_keywords", "many").is_err());
        assert!(config.set("scoring.format_weight", "0.9").is_err());
    }
}
