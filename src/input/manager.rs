//! Input manager: loads resume and job text and applies input limits

use crate::config::InputConfig;
use crate::error::{Result, ResumeScorerError};
use crate::input::normalize::clean_text;
use crate::input::text_source::{FileSource, TextSource};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub const MISSING_RESUME_MESSAGE: &str = "Please upload your resume first.";
pub const INVALID_JOB_MESSAGE: &str = "Please paste a valid Job Description.";

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    limits: InputConfig,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            limits: InputConfig::default(),
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_limits(mut self, limits: InputConfig) -> Self {
        self.limits = limits;
        self
    }

    pub async fn read_source<S: TextSource>(&mut self, source: &S) -> Result<String> {
        let key = source.describe();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&key) {
                info!("Using cached text for: {}", key);
                return Ok(cached_text.clone());
            }
        }

        let text = source.read_text().await?;

        if self.enable_cache {
            self.cache.insert(key, text.clone());
        }

        Ok(text)
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        info!("Reading text file: {}", path.display());
        self.read_source(&FileSource::new(path)).await
    }

    /// Load a resume, truncated to the configured character limit
    pub async fn load_resume(&mut self, path: &Path) -> Result<String> {
        let text = self.extract_text(path).await?;
        Ok(truncate_chars(&text, self.limits.max_resume_chars))
    }

    /// Load a job description, optionally stripping markup first
    pub async fn load_job(&mut self, path: &Path, clean: bool) -> Result<String> {
        let text = self.extract_text(path).await?;
        Ok(if clean { clean_text(&text) } else { text })
    }

    /// Reject a missing resume or a job description too short to be real
    pub fn validate_inputs(&self, resume_text: &str, job_text: &str) -> Result<()> {
        if resume_text.trim().is_empty() {
            return Err(ResumeScorerError::InvalidInput(MISSING_RESUME_MESSAGE.to_string()));
        }
        if job_text.chars().count() < self.limits.min_job_chars {
            warn!(
                "Job description has {} characters, minimum is {}",
                job_text.chars().count(),
                self.limits.min_job_chars
            );
            return Err(ResumeScorerError::InvalidInput(INVALID_JOB_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Keep at most `max_chars` characters, cutting on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
