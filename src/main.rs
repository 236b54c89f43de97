//! Resume scorer: offline ATS scoring of a resume against a job description

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::input::InputManager;
use resume_scorer::config::OutputFormat;
use resume_scorer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_scorer::output::AnalysisReport;
use resume_scorer::processing::{AtsScorer, KeywordExtractor};
use resume_scorer::Config;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone();
    let load_config = || match &config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::load().context("Failed to load configuration"),
    };

    match cli.command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            no_color,
            clean_job,
        } => {
            let config = load_config()?;
            let format = match output {
                Some(value) => cli::parse_output_format(&value).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };

            info!("Scoring {} against {}", resume.display(), job.display());
            let started = Instant::now();

            let mut input_manager = InputManager::new().with_limits(config.input.clone());
            let resume_text = input_manager
                .load_resume(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_text = input_manager
                .load_job(&job, clean_job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;

            input_manager.validate_inputs(&resume_text, &job_text)?;

            let scorer = AtsScorer::with_config(config.scoring.clone());
            let result = scorer.analyze(&job_text, &resume_text);
            let elapsed_ms = started.elapsed().as_millis() as u64;
            debug!("Analysis finished in {}ms", elapsed_ms);

            let report = AnalysisReport::new(
                result,
                None,
                resume.display().to_string(),
                job.display().to_string(),
                elapsed_ms,
            );

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &format)?;

            match save {
                Some(path) => {
                    let path = report_path(path, &resume, &format);
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Keywords { job, top, clean_job } => {
            let config = load_config()?;
            let mut input_manager = InputManager::new().with_limits(config.input.clone());
            let job_text = input_manager
                .load_job(&job, clean_job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;

            let keywords = KeywordExtractor::new().extract(&job_text);
            println!("🔑 {} distinct keywords in {}\n", keywords.len(), job.display());
            for (rank, entry) in keywords.top(top).iter().enumerate() {
                println!("{:>3}. {:<24} {}", rank + 1, entry.keyword, entry.weight);
            }
        }

        Commands::Config { action } => {
            let target = config_path.clone().unwrap_or_else(Config::config_path);
            run_config_action(action, &target)?;
        }
    }

    Ok(())
}

/// Config commands never require the current file to be valid: `path` and
/// `reset` do not read it at all.
fn run_config_action(action: Option<ConfigAction>, target: &Path) -> anyhow::Result<()> {
    let load = || {
        Config::load_or_default(target)
            .with_context(|| format!("Failed to load configuration from {}", target.display()))
    };

    match action {
        Some(ConfigAction::Show) | None => {
            let config = load()?;
            println!("⚙️  Current Configuration ({})\n", target.display());
            print!("{}", config.to_toml()?);
        }

        Some(ConfigAction::Path) => {
            println!("{}", target.display());
        }

        Some(ConfigAction::Reset) => {
            Config::reset(target)?;
            println!("✅ Configuration reset to defaults");
        }

        Some(ConfigAction::Set { key, value }) => {
            let mut config = load()?;
            config.set(&key, &value)?;
            config.save_to(target)?;
            println!("✅ {} = {}", key, value);
        }
    }

    Ok(())
}

/// A directory target gets a generated, timestamped file name
fn report_path(save: PathBuf, resume: &Path, format: &OutputFormat) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, &resume.to_string_lossy(), true))
    } else {
        save
    }
}
