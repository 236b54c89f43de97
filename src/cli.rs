//! CLI interface for the resume scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Offline ATS resume scoring against a job description")]
#[command(long_about = "Score a plain-text resume against a job description using keyword coverage, formatting checks and length heuristics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Analyze {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show the score breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,

        /// Strip HTML tags and collapse whitespace in the job description
        #[arg(long)]
        clean_job: bool,
    },

    /// List the weighted keywords extracted from a job description
    Keywords {
        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Number of keywords to show
        #[arg(short, long, default_value_t = 20)]
        top: usize,

        /// Strip HTML tags and collapse whitespace first
        #[arg(long)]
        clean_job: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.keyword_weight")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported formats: console, json, markdown, html",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("html").unwrap(), OutputFormat::Html);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::parse_from([
            "resume-scorer",
            "analyze",
            "--resume",
            "cv.txt",
            "--job",
            "job.txt",
            "--clean-job",
            "-o",
            "json",
        ]);
        match cli.command {
            Commands::Analyze { resume, output, clean_job, detailed, .. } => {
                assert_eq!(resume, PathBuf::from("cv.txt"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(clean_job);
                assert!(!detailed);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_parse_keywords_default_top() {
        let cli = Cli::parse_from(["resume-scorer", "keywords", "-j", "job.txt"]);
        match cli.command {
            Commands::Keywords { top, .. } => assert_eq!(top, 20),
            _ => panic!("expected keywords command"),
        }
    }
}
