//! Output formatters: console, JSON, Markdown and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScorerError};
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter backed by an askama template
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ATS Analysis Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 860px; margin: 0 auto; padding: 20px; color: #333; }
        .badge { display: inline-block; padding: 6px 14px; border-radius: 16px; color: white; font-weight: bold; }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .critical { border-left: 4px solid #dc3545; padding-left: 8px; }
        .high { border-left: 4px solid #ffc107; padding-left: 8px; }
        .medium { border-left: 4px solid #17a2b8; padding-left: 8px; }
        .low { border-left: 4px solid #28a745; padding-left: 8px; }
        .metadata { font-size: 0.9em; color: #6c757d; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <h1>ATS Analysis Report</h1>
    <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>

    <h2>ATS Score: {{ ats_score }}% <span class="badge {{ score_class }}">{{ score_label }}</span></h2>
    <p><strong>Keyword match:</strong> {{ match_percentage }}%</p>
    <p><strong>Verdict:</strong> {{ verdict }}</p>

    <h2>Score Breakdown</h2>
    <ul>
        <li>Keywords: {{ keyword_score }}% ({{ matched_keywords }} of {{ considered_keywords }})</li>
        <li>Formatting: {{ format_score }}%</li>
        <li>Length: {{ length_score }}% ({{ word_count }} words)</li>
    </ul>

    {% if has_missing_skills %}
    <h2>Missing Keywords</h2>
    <ul>
        {% for skill in missing_skills %}<li>{{ skill }}</li>{% endfor %}
    </ul>
    {% endif %}

    <h2>Recommendations</h2>
    {% for rec in recommendations %}
    <p class="{{ rec.css_class }}">{{ rec.text }}</p>
    {% endfor %}

    {% if has_insights %}
    <h2>AI Insights ({{ insights_backend }})</h2>
    <blockquote>{{ insights_summary }}</blockquote>
    {% if has_questions %}
    <h3>Interview Questions</h3>
    <ol>
        {% for q in questions %}<li><strong>{{ q.category }}:</strong> {{ q.question }}</li>{% endfor %}
    </ol>
    {% endif %}
    {% endif %}

    <div class="metadata">
        <p>Generated by resume-scorer v{{ version }}</p>
        <p>Resume: {{ resume_source }} | Job: {{ job_source }}</p>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    ats_score: u32,
    match_percentage: u32,
    score_class: String,
    score_label: String,
    verdict: String,
    keyword_score: String,
    matched_keywords: usize,
    considered_keywords: usize,
    format_score: u32,
    length_score: u32,
    word_count: usize,
    missing_skills: Vec<String>,
    has_missing_skills: bool,
    recommendations: Vec<HtmlRecommendation>,
    has_insights: bool,
    insights_backend: String,
    insights_summary: String,
    questions: Vec<HtmlQuestion>,
    has_questions: bool,
    version: String,
    resume_source: String,
    job_source: String,
}

#[derive(Debug, Clone)]
struct HtmlRecommendation {
    css_class: String,
    text: String,
}

#[derive(Debug, Clone)]
struct HtmlQuestion {
    category: String,
    question: String,
}

fn format_timestamp(report: &AnalysisReport) -> String {
    chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn score_label(score: u32) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}

fn priority_label(priority: RecommendationPriority) -> &'static str {
    match priority {
        RecommendationPriority::Critical => "Critical",
        RecommendationPriority::High => "High",
        RecommendationPriority::Medium => "Medium",
        RecommendationPriority::Low => "Low",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        let badge = score_label(score);

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: RecommendationPriority) -> &'static str {
        match (self.use_colors, priority) {
            (true, RecommendationPriority::Critical) => "🚨",
            (true, RecommendationPriority::High) => "⚠️",
            (true, RecommendationPriority::Medium) => "📋",
            (true, RecommendationPriority::Low) => "💡",
            (false, RecommendationPriority::Critical) => "[!]",
            (false, RecommendationPriority::High) => "[*]",
            (false, RecommendationPriority::Medium) => "[-]",
            (false, RecommendationPriority::Low) => "[+]",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let breakdown = &result.breakdown;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "ATS Score: {}% {}\n",
            result.ats_score,
            self.format_score_badge(result.ats_score)
        ));
        output.push_str(&format!("Keyword Match: {}%\n", result.match_percentage));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&report.verdict, Color::Cyan)));

        if self.detailed {
            output.push_str(&self.format_header("Score Breakdown", 3));
            output.push_str(&format!(
                "Keywords: {:.1}% ({} of {} found)\n",
                breakdown.keyword_score, breakdown.matched_keywords, breakdown.considered_keywords
            ));
            output.push_str(&format!("Formatting: {}%\n", breakdown.format_score));
            output.push_str(&format!(
                "Length: {}% ({} words)\n",
                breakdown.length_score, breakdown.word_count
            ));
        }

        if !result.missing_skills.is_empty() {
            output.push_str(&self.format_header("Missing Keywords", 3));
            for skill in &result.missing_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("Recommendations", 2));
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} {}\n",
                i + 1,
                self.format_priority_icon(rec.priority),
                rec.text
            ));
        }

        if let Some(insights) = &report.insights {
            output.push_str(&self.format_header("AI Insights", 2));
            output.push_str(&format!("Backend: {}\n", insights.backend));
            output.push_str(&format!(
                "{} {}\n",
                self.colorize("Summary:", Color::Cyan),
                insights.summary.summary
            ));
            if !insights.summary.tech_stack.is_empty() {
                output.push_str(&format!("Tech stack: {}\n", insights.summary.tech_stack.join(", ")));
            }
            for (i, q) in insights.questions.iter().enumerate() {
                output.push_str(&format!("  {}. [{}] {}\n", i + 1, q.category, q.question));
            }
        }

        output.push_str(&format!(
            "\n{} Generated by resume-scorer v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.scorer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u32) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let breakdown = &result.breakdown;
        let mut output = String::new();

        output.push_str("# ATS Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_source, report.metadata.job_source
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**ATS Score:** {}% {}\n\n",
            result.ats_score,
            Self::markdown_score_badge(result.ats_score)
        ));
        output.push_str(&format!("**Keyword Match:** {}%\n\n", result.match_percentage));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score | Detail |\n");
        output.push_str("|-----------|-------|--------|\n");
        output.push_str(&format!(
            "| Keywords | {:.1}% | {} of {} found |\n",
            breakdown.keyword_score, breakdown.matched_keywords, breakdown.considered_keywords
        ));
        output.push_str(&format!("| Formatting | {}% | {} issues |\n", breakdown.format_score, result.ats_feedback.len()));
        output.push_str(&format!("| Length | {}% | {} words |\n\n", breakdown.length_score, breakdown.word_count));

        if !result.missing_skills.is_empty() {
            output.push_str("### Missing Keywords\n\n");
            output.push_str(&format!("`{}`\n\n", result.missing_skills.join("`, `")));
        }

        output.push_str("## Recommendations\n\n");
        for priority in [
            RecommendationPriority::Critical,
            RecommendationPriority::High,
            RecommendationPriority::Medium,
            RecommendationPriority::Low,
        ] {
            let recs: Vec<&Recommendation> = report.recommendations_with(priority).collect();
            if recs.is_empty() {
                continue;
            }
            output.push_str(&format!("### {} Priority\n\n", priority_label(priority)));
            for rec in recs {
                output.push_str(&format!("- {}\n", rec.text));
            }
            output.push('\n');
        }

        if let Some(insights) = &report.insights {
            output.push_str("## AI Insights\n\n");
            output.push_str(&format!("> {}\n\n", insights.summary.summary));
            if !insights.summary.expectations.is_empty() {
                output.push_str(&format!("**Expectations:** {}\n\n", insights.summary.expectations));
            }
            if !insights.questions.is_empty() {
                output.push_str("### Interview Questions\n\n");
                for (i, q) in insights.questions.iter().enumerate() {
                    output.push_str(&format!("{}. **{}:** {}\n", i + 1, q.category, q.question));
                }
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by resume-scorer v{}*\n",
                report.metadata.scorer_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let result = &report.result;
        let breakdown = &result.breakdown;
        let score_class = match result.ats_score {
            90..=100 => "score-excellent",
            70..=89 => "score-good",
            60..=69 => "score-fair",
            _ => "score-poor",
        };

        let recommendations = report
            .recommendations
            .iter()
            .map(|rec| HtmlRecommendation {
                css_class: priority_label(rec.priority).to_lowercase(),
                text: rec.text.clone(),
            })
            .collect();

        let (insights_backend, insights_summary, questions) = match &report.insights {
            Some(insights) => (
                insights.backend.clone(),
                insights.summary.summary.clone(),
                insights
                    .questions
                    .iter()
                    .map(|q| HtmlQuestion {
                        category: q.category.clone(),
                        question: q.question.clone(),
                    })
                    .collect::<Vec<_>>(),
            ),
            None => (String::new(), String::new(), Vec::new()),
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            processing_time: report.metadata.processing_time_ms,
            ats_score: result.ats_score,
            match_percentage: result.match_percentage,
            score_class: score_class.to_string(),
            score_label: score_label(result.ats_score).to_string(),
            verdict: report.verdict.clone(),
            keyword_score: format!("{:.1}", breakdown.keyword_score),
            matched_keywords: breakdown.matched_keywords,
            considered_keywords: breakdown.considered_keywords,
            format_score: breakdown.format_score,
            length_score: breakdown.length_score,
            word_count: breakdown.word_count,
            has_missing_skills: !result.missing_skills.is_empty(),
            missing_skills: result.missing_skills.clone(),
            recommendations,
            has_insights: report.insights.is_some(),
            insights_backend,
            insights_summary,
            has_questions: !questions.is_empty(),
            questions,
            version: report.metadata.scorer_version.clone(),
            resume_source: report.metadata.resume_source.clone(),
            job_source: report.metadata.job_source.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeScorerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}
