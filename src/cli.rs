//! CLI interface for the compatibility tool

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-compat")]
#[command(about = "Candidate and job posting compatibility scoring tool")]
#[command(long_about = "Score candidate profiles against job postings on skills, experience, location, education and salary, rank job lists, and suggest profile improvements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate against one job posting
    Score {
        /// Path to candidate profile (JSON, TOML)
        #[arg(short = 'p', long)]
        candidate: PathBuf,

        /// Path to job posting (JSON, TOML)
        #[arg(short, long)]
        job: PathBuf,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rank a list of job postings for one candidate
    Rank {
        /// Path to candidate profile (JSON, TOML)
        #[arg(short = 'p', long)]
        candidate: PathBuf,

        /// Path to job list (JSON array, {"jobs": [...]}, or TOML [[jobs]])
        #[arg(short, long)]
        jobs: PathBuf,

        /// Maximum number of jobs to show (0 = all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide jobs scoring below this value
        #[arg(short, long)]
        min_score: Option<u8>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Suggest profile improvements based on a list of job postings
    Suggest {
        /// Path to candidate profile (JSON, TOML)
        #[arg(short = 'p', long)]
        candidate: PathBuf,

        /// Path to job list (JSON array, {"jobs": [...]}, or TOML [[jobs]])
        #[arg(short, long)]
        jobs: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the badge for a score
    Badge {
        /// Compatibility score (0-100)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,

        /// Print the HTML snippet instead of the label
        #[arg(long)]
        html: bool,
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

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "ranking.limit")
        key: String,

        /// Configuration value
        value: String,
    },
}

impl Commands {
    /// `config path` and `config reset` run without reading the current file.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Commands::Config {
                action: Some(ConfigAction::Path | ConfigAction::Reset)
            }
        )
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("a.JSON"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("a.txt"), &["json", "toml"]).is_err());
        assert!(validate_file_extension(Path::new("noext"), &["json"]).is_err());
    }

    #[test]
    fn test_parse_rank_command() {
        let cli = Cli::try_parse_from([
            "job-compat", "rank", "-p", "me.json", "--jobs", "jobs.json", "--limit", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Rank { limit, min_score, .. } => {
                assert_eq!(limit, Some(3));
                assert_eq!(min_score, None);
            }
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_config_repair_commands_skip_loading() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;
        assert!(!parse(&["job-compat", "config", "reset"]).needs_config());
        assert!(!parse(&["job-compat", "config", "path"]).needs_config());
        assert!(parse(&["job-compat", "config", "show"]).needs_config());
        assert!(parse(&["job-compat", "config"]).needs_config());
        assert!(parse(&["job-compat", "badge", "50"]).needs_config());
    }

    #[test]
    fn test_badge_score_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["job-compat", "badge", "101"]).is_err());
    }
}
