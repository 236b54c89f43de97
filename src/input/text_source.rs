//! Sources of plain resume and job-description text

use crate::error::{Result, ResumeScorerError};
use crate::input::file_detector::FileType;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Anything that can hand over plain text for analysis
pub trait TextSource {
    fn read_text(&self) -> impl Future<Output = Result<String>> + Send;

    /// Human-readable origin, used in reports
    fn describe(&self) -> String;
}

/// UTF-8 text file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_type(&self) -> Result<FileType> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeScorerError::InvalidInput(format!(
                    "File has no extension: {}",
                    self.path.display()
                ))
            })?;

        Ok(FileType::from_extension(extension))
    }
}

impl TextSource for FileSource {
    async fn read_text(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(ResumeScorerError::InvalidInput(format!(
                "File does not exist: {}",
                self.path.display()
            )));
        }

        match self.file_type()? {
            file_type if file_type.is_plain_text() => {
                let content = fs::read_to_string(&self.path).await?;
                Ok(content)
            }
            FileType::Pdf | FileType::Docx => Err(ResumeScorerError::UnsupportedFormat(format!(
                "{} must be converted to plain text first",
                self.path.display()
            ))),
            _ => Err(ResumeScorerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                self.path.display()
            ))),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Text already held in memory
#[derive(Debug, Clone)]
pub struct InlineSource {
    label: String,
    text: String,
}

impl InlineSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl TextSource for InlineSource {
    async fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
