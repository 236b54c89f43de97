//! Error handling for the resume scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Qualitative analysis error: {0}")]
    Qualitative(String),

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;

/// Convert anyhow errors coming out of completion backends
impl From<anyhow::Error> for ResumeScorerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScorerError::Qualitative(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ResumeScorerError::InvalidInput("Please upload your resume first.".to_string());
        assert_eq!(err.to_string(), "Invalid input: Please upload your resume first.");

        let err: ResumeScorerError = anyhow::anyhow!("connection refused").into();
        assert!(matches!(err, ResumeScorerError::Qualitative(_)));
        assert_eq!(err.to_string(), "Qualitative analysis error: connection refused");
    }
}
