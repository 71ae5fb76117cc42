//! Output formatters for compatibility, ranking and suggestion reports

use crate::config::OutputFormat;
use crate::error::{CompatError, Result};
use crate::output::report::*;
use crate::scoring::{render_badge_html, BadgeTier, Impact, ScoreBreakdown};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter embedding the compatibility badge markup
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

fn tier_color(tier: BadgeTier) -> Color {
    match tier {
        BadgeTier::PerfectMatch => Color::Green,
        BadgeTier::High => Color::Blue,
        BadgeTier::Good => Color::Magenta,
        BadgeTier::Potential => Color::Yellow,
        BadgeTier::Low => Color::Red,
    }
}

fn format_timestamp(metadata: &ReportMetadata) -> String {
    metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn impact_label(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "high",
        Impact::Medium => "medium",
        Impact::Low => "low",
    }
}

fn format_average(average: Option<f64>) -> String {
    average
        .map(|years| format!("{:.1} years", years))
        .unwrap_or_else(|| "n/a".to_string())
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

    fn format_badge(&self, score: u8) -> String {
        let tier = BadgeTier::from_score(score);
        if self.use_colors {
            format!("[{}]", tier.text().color(tier_color(tier)).bold())
        } else {
            format!("[{}]", tier.text())
        }
    }

    fn format_breakdown(&self, breakdown: &ScoreBreakdown, indent: &str) -> String {
        let mut output = String::new();
        for sub in &breakdown.subscores {
            let source = if sub.defaulted {
                self.colorize(" (default)", Color::BrightBlack)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "{}{:<11} {:>5.1}% × {:>4.0}% = {:>5.2} pts{}\n",
                indent,
                sub.dimension.to_string(),
                sub.value * 100.0,
                sub.weight * 100.0,
                sub.points,
                source
            ));
        }
        output
    }

    fn format_compatibility(&self, report: &CompatibilityReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 COMPATIBILITY SCORE", 1));
        output.push_str(&format!("Candidate: {}\n", self.colorize(&report.candidate, Color::Cyan)));
        output.push_str(&format!("Job: {}\n", self.colorize(&report.job, Color::Cyan)));

        output.push_str(&self.format_header("Result", 2));
        output.push_str(&format!(
            "Score: {}% {}\n",
            report.breakdown.score,
            self.format_badge(report.breakdown.score)
        ));

        output.push_str(&self.format_header("Breakdown", 3));
        output.push_str(&self.format_breakdown(&report.breakdown, "  "));

        let defaulted = report.breakdown.defaulted_dimensions();
        if !defaulted.is_empty() {
            let names: Vec<String> = defaulted.iter().map(|d| d.to_string()).collect();
            output.push_str(&format!(
                "\n{} {}\n",
                self.colorize("Missing data, defaults used for:", Color::Yellow),
                names.join(", ")
            ));
        }

        if self.detailed {
            output.push_str(&format!(
                "\nGenerated: {} | Candidate file: {} | Job file: {}\n",
                format_timestamp(&report.metadata),
                report.metadata.candidate_file,
                report.metadata.job_file
            ));
        }

        output
    }

    fn format_ranking(&self, report: &RankingReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📋 JOB RANKING", 1));
        output.push_str(&format!(
            "Candidate: {} | Showing {} of {} jobs\n",
            self.colorize(&report.candidate, Color::Cyan),
            report.entries.len(),
            report.total_jobs
        ));

        if report.entries.is_empty() {
            output.push_str(&self.colorize("\nNo jobs matched the current filters.\n", Color::Yellow));
            return output;
        }

        output.push('\n');
        for entry in &report.entries {
            output.push_str(&format!(
                "{:>3}. {:>3}% {} {}\n",
                entry.position,
                entry.score,
                self.format_badge(entry.score),
                entry.job
            ));
            if self.detailed {
                output.push_str(&self.format_breakdown(&entry.breakdown, "        "));
            }
        }

        output
    }

    fn format_suggestions(&self, report: &SuggestionReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("💡 PROFILE SUGGESTIONS", 1));
        output.push_str(&format!(
            "Candidate: {} | Jobs considered: {}\n",
            self.colorize(&report.candidate, Color::Cyan),
            report.jobs_considered
        ));

        output.push_str(&self.format_header("Market Demand", 2));
        if report.demanded_skills.is_empty() {
            output.push_str("Most requested skills: none\n");
        } else {
            output.push_str(&format!(
                "Most requested skills: {}\n",
                report.demanded_skills.join(", ")
            ));
        }
        output.push_str(&format!(
            "Average required experience: {}\n",
            format_average(report.average_required_experience)
        ));

        output.push_str(&self.format_header("Suggestions", 2));
        if report.suggestions.is_empty() {
            output.push_str(&self.colorize("Your profile already covers what these jobs ask for.\n", Color::Green));
        }
        for suggestion in &report.suggestions {
            let (icon, color) = match suggestion.impact {
                Impact::High => ("[!]", Color::Red),
                Impact::Medium => ("[*]", Color::Yellow),
                Impact::Low => ("[+]", Color::Green),
            };
            output.push_str(&format!(
                "  {} {}\n",
                self.colorize(icon, color),
                suggestion.message
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = match report {
            Report::Compatibility(r) => self.format_compatibility(r),
            Report::Ranking(r) => self.format_ranking(r),
            Report::Suggestions(r) => self.format_suggestions(r),
        };

        output.push_str(&format!(
            "\n{} Generated by job-compat v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata().tool_version
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
    fn format_report(&self, report: &Report) -> Result<String> {
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

    fn breakdown_table(breakdown: &ScoreBreakdown) -> String {
        let mut output = String::new();
        output.push_str("| Dimension | Sub-score | Weight | Points | Source |\n");
        output.push_str("|-----------|-----------|--------|--------|--------|\n");
        for sub in &breakdown.subscores {
            output.push_str(&format!(
                "| {} | {:.1}% | {:.0}% | {:.2} | {} |\n",
                sub.dimension,
                sub.value * 100.0,
                sub.weight * 100.0,
                sub.points,
                if sub.defaulted { "default" } else { "measured" }
            ));
        }
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        match report {
            Report::Compatibility(r) => {
                output.push_str("# 🎯 Compatibility Report\n\n");
                output.push_str(&format!("**Candidate:** {} | **Job:** {}\n\n", r.candidate, r.job));
                output.push_str(&format!(
                    "**Score:** {}% ({})\n\n",
                    r.breakdown.score, r.breakdown.badge.text
                ));
                output.push_str("## Breakdown\n\n");
                output.push_str(&Self::breakdown_table(&r.breakdown));
                output.push('\n');
            }
            Report::Ranking(r) => {
                output.push_str("# 📋 Job Ranking\n\n");
                output.push_str(&format!(
                    "**Candidate:** {} | **Showing:** {} of {} jobs\n\n",
                    r.candidate,
                    r.entries.len(),
                    r.total_jobs
                ));
                if r.entries.is_empty() {
                    output.push_str("_No jobs matched the current filters._\n\n");
                } else {
                    output.push_str("| # | Job | Score | Badge |\n");
                    output.push_str("|---|-----|-------|-------|\n");
                    for entry in &r.entries {
                        output.push_str(&format!(
                            "| {} | {} | {}% | {} |\n",
                            entry.position, entry.job, entry.score, entry.breakdown.badge.text
                        ));
                    }
                    output.push('\n');
                }
            }
            Report::Suggestions(r) => {
                output.push_str("# 💡 Profile Suggestions\n\n");
                output.push_str(&format!(
                    "**Candidate:** {} | **Jobs considered:** {}\n\n",
                    r.candidate, r.jobs_considered
                ));
                output.push_str("## Market Demand\n\n");
                for skill in &r.demanded_skills {
                    output.push_str(&format!("- `{}`\n", skill));
                }
                output.push_str(&format!(
                    "\n**Average required experience:** {}\n\n",
                    format_average(r.average_required_experience)
                ));
                output.push_str("## Suggestions\n\n");
                if r.suggestions.is_empty() {
                    output.push_str("_No suggestions._\n\n");
                }
                for suggestion in &r.suggestions {
                    output.push_str(&format!(
                        "- **{}** {}\n",
                        impact_label(suggestion.impact),
                        suggestion.message
                    ));
                }
                output.push('\n');
            }
        }

        if self.include_metadata {
            let metadata = report.metadata();
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated {} by job-compat v{} from `{}` and `{}`*\n",
                format_timestamp(metadata),
                metadata.tool_version,
                file_name(&metadata.candidate_file),
                file_name(&metadata.job_file)
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8fafc; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        table { width: 100%; border-collapse: collapse; margin: 16px 0; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e2e8f0; }
        .compatibility-badge { display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; border-radius: 20px; color: white; font-weight: 600; font-size: 14px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); margin: 8px 0; }
        .compatibility-badge .badge-score { background: rgba(255,255,255,0.2); padding: 2px 8px; border-radius: 12px; font-size: 12px; font-weight: 700; }
        .defaulted { color: #94a3b8; }
        .suggestions-list { background: #f8fafc; border-radius: 8px; padding: 16px; }
        .suggestion-item { padding: 8px 0; border-bottom: 1px solid #e2e8f0; }
        .suggestion-item:last-child { border-bottom: none; }
        .impact-high { color: #ef4444; }
        .impact-medium { color: #f59e0b; }
        .impact-low { color: #10b981; }
        .metadata { margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>{{ title }}</h1>
        <p>Candidate: <strong>{{ candidate }}</strong> | {{ subject }}</p>
        {% if has_score %}
        <div class="compatibility-section">
            {{ badge_html|safe }}
        </div>
        {% endif %}
        {% if !breakdown_rows.is_empty() %}
        <table>
            <tr><th>Dimension</th><th>Sub-score</th><th>Weight</th><th>Points</th></tr>
            {% for row in breakdown_rows %}
            <tr{% if row.defaulted %} class="defaulted"{% endif %}><td>{{ row.dimension }}</td><td>{{ row.value }}</td><td>{{ row.weight }}</td><td>{{ row.points }}</td></tr>
            {% endfor %}
        </table>
        {% endif %}
        {% if is_ranking %}
        {% if ranking_rows.is_empty() %}
        <p>No jobs matched the current filters.</p>
        {% else %}
        <table>
            <tr><th>#</th><th>Job</th><th>Compatibility</th></tr>
            {% for row in ranking_rows %}
            <tr><td>{{ row.position }}</td><td>{{ row.job }}</td><td>{{ row.badge_html|safe }}</td></tr>
            {% endfor %}
        </table>
        {% endif %}
        {% endif %}
        {% if is_suggestions %}
        <h2>Most requested skills</h2>
        <p>{{ demanded_skills }}</p>
        <p>Average required experience: {{ average_experience }}</p>
        <div class="suggestions-list">
            {% for item in suggestions %}
            <div class="suggestion-item"><span class="impact-{{ item.impact }}">{{ item.impact }}</span> {{ item.message }}</div>
            {% endfor %}
        </div>
        {% endif %}
        <div class="metadata">
            <p>Generated {{ generated_at }} by job-compat v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    title: String,
    candidate: String,
    subject: String,
    has_score: bool,
    badge_html: String,
    breakdown_rows: Vec<HtmlBreakdownRow>,
    is_ranking: bool,
    ranking_rows: Vec<HtmlRankingRow>,
    is_suggestions: bool,
    demanded_skills: String,
    average_experience: String,
    suggestions: Vec<HtmlSuggestion>,
    generated_at: String,
    version: String,
}

struct HtmlBreakdownRow {
    dimension: String,
    value: String,
    weight: String,
    points: String,
    defaulted: bool,
}

struct HtmlRankingRow {
    position: usize,
    job: String,
    badge_html: String,
}

struct HtmlSuggestion {
    impact: &'static str,
    message: String,
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn breakdown_rows(breakdown: &ScoreBreakdown) -> Vec<HtmlBreakdownRow> {
        breakdown
            .subscores
            .iter()
            .map(|sub| HtmlBreakdownRow {
                dimension: sub.dimension.to_string(),
                value: format!("{:.1}%", sub.value * 100.0),
                weight: format!("{:.0}%", sub.weight * 100.0),
                points: format!("{:.2}", sub.points),
                defaulted: sub.defaulted,
            })
            .collect()
    }

    fn create_template_data(&self, report: &Report) -> Result<HtmlTemplate> {
        let metadata = report.metadata();
        let mut template = HtmlTemplate {
            include_styles: self.include_styles,
            title: String::new(),
            candidate: String::new(),
            subject: String::new(),
            has_score: false,
            badge_html: String::new(),
            breakdown_rows: Vec::new(),
            is_ranking: false,
            ranking_rows: Vec::new(),
            is_suggestions: false,
            demanded_skills: String::new(),
            average_experience: String::new(),
            suggestions: Vec::new(),
            generated_at: format_timestamp(metadata),
            version: metadata.tool_version.clone(),
        };

        match report {
            Report::Compatibility(r) => {
                template.title = "Compatibility Report".to_string();
                template.candidate = r.candidate.clone();
                template.subject = format!("Job: {}", r.job);
                template.has_score = true;
                template.badge_html = render_badge_html(r.breakdown.score)?;
                template.breakdown_rows = Self::breakdown_rows(&r.breakdown);
            }
            Report::Ranking(r) => {
                template.title = "Job Ranking".to_string();
                template.candidate = r.candidate.clone();
                template.subject = format!("Showing {} of {} jobs", r.entries.len(), r.total_jobs);
                template.is_ranking = true;
                template.ranking_rows = r
                    .entries
                    .iter()
                    .map(|entry| {
                        Ok(HtmlRankingRow {
                            position: entry.position,
                            job: entry.job.clone(),
                            badge_html: render_badge_html(entry.score)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
            Report::Suggestions(r) => {
                template.title = "Profile Suggestions".to_string();
                template.candidate = r.candidate.clone();
                template.subject = format!("Jobs considered: {}", r.jobs_considered);
                template.is_suggestions = true;
                template.demanded_skills = if r.demanded_skills.is_empty() {
                    "none".to_string()
                } else {
                    r.demanded_skills.join(", ")
                };
                template.average_experience = format_average(r.average_required_experience);
                template.suggestions = r
                    .suggestions
                    .iter()
                    .map(|s| HtmlSuggestion {
                        impact: impact_label(s.impact),
                        message: s.message.clone(),
                    })
                    .collect();
            }
        }

        Ok(template)
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let template_data = self.create_template_data(report)?;
        template_data
            .render()
            .map_err(|e| CompatError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
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

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
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

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, candidate_file: &str, timestamp: bool) -> String {
    let base_name = Path::new(candidate_file)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_compat{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_compat{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_compat{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_compat{}.html", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CandidateProfile, JobPosting};
    use crate::scoring::{CompatibilityScorer, MatchScorer, Suggestion, SuggestionKind};

    fn compatibility_report() -> Report {
        let candidate = CandidateProfile {
            name: Some("Carla <dev>".to_string()),
            skills: Some(vec!["rust".to_string()]),
            ..Default::default()
        };
        let job = JobPosting {
            title: Some("Rust Engineer".to_string()),
            required_skills: Some(vec!["rust".to_string(), "sql".to_string()]),
            ..Default::default()
        };
        let breakdown = CompatibilityScorer::new().evaluate(&candidate, &job);
        Report::Compatibility(CompatibilityReport::new(
            &candidate,
            job.label(),
            breakdown,
            ReportMetadata::new("tests/carla.json", "tests/job.json"),
        ))
    }

    fn suggestion_report() -> Report {
        Report::Suggestions(SuggestionReport {
            candidate: "Carla".to_string(),
            jobs_considered: 2,
            demanded_skills: vec!["sql".to_string()],
            average_required_experience: Some(4.0),
            suggestions: vec![Suggestion {
                kind: SuggestionKind::Skill,
                message: "Consider adding \"sql\" to your skills".to_string(),
                impact: Impact::High,
            }],
            metadata: ReportMetadata::new("carla.json", "jobs.json"),
        })
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, false)
            .format_report(&compatibility_report())
            .unwrap();
        // skills 0.5 → 17.5, plus 12.5 + 7.5 + 15 + 8
        assert!(output.contains("Score: 61% [Good Compatibility]"));
        assert!(output.contains("Missing data, defaults used for:"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_round_trips_report() {
        let output = JsonFormatter::new(false)
            .format_report(&compatibility_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["report"], "compatibility");
        assert_eq!(value["breakdown"]["score"], 61);
    }

    #[test]
    fn test_markdown_breakdown_table() {
        let output = MarkdownFormatter::new(true)
            .format_report(&compatibility_report())
            .unwrap();
        assert!(output.contains("| Skills | 50.0% | 35% | 17.50 | measured |"));
        assert!(output.contains("`carla.json`"));
    }

    #[test]
    fn test_html_escapes_user_text_and_embeds_badge() {
        let output = HtmlFormatter::new(false)
            .format_report(&compatibility_report())
            .unwrap();
        assert!(output.contains("Carla &#60;dev&#62;"));
        assert!(!output.contains("<dev>"));
        assert!(output.contains(r#"class="compatibility-badge good-match""#));
    }

    #[test]
    fn test_html_suggestions() {
        let output = HtmlFormatter::new(true)
            .format_report(&suggestion_report())
            .unwrap();
        assert!(output.contains("impact-high"));
        assert!(output.contains("4.0 years"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, true, true, false, false);
        let report = suggestion_report();
        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# 💡 Profile Suggestions"));
        assert!(!markdown.contains("Generated"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "profiles/ana.json", false),
            "ana_compat.md"
        );
    }
}
