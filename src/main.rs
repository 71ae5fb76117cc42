//! job-compat: candidate and job posting compatibility scoring tool

use anyhow::Context;
use clap::Parser;
use job_compat::cli::{self, Cli, Commands, ConfigAction};
use job_compat::config::{Config, OutputFormat};
use job_compat::error::{CompatError, Result};
use job_compat::input::InputManager;
use job_compat::output::formatter::{save_report_to_file, suggest_filename};
use job_compat::output::report::{
    CompatibilityReport, RankingReport, Report, ReportMetadata, SuggestionReport,
};
use job_compat::output::ReportGenerator;
use job_compat::scoring::{render_badge_html, Badge, CompatibilityScorer, MatchScorer, ProfileAdvisor};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

const INPUT_EXTENSIONS: &[&str] = &["json", "toml"];

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    let result = if cli.command.needs_config() {
        // Load configuration
        let mut config = match load_config(&config_path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                process::exit(1);
            }
        };

        if cli.no_color {
            config.output.color_output = false;
        }
        if !config.output.color_output {
            colored::control::set_override(false);
        }

        run_command(cli.command, config, &config_path).await
    } else {
        match cli.command {
            Commands::Config {
                action: Some(ConfigAction::Reset),
            } => reset_config(&config_path),
            _ => print_config_path(&config_path),
        }
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(config)
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Score {
            candidate,
            job,
            detailed,
            output,
            save,
        } => {
            validate_input(&candidate, "Candidate file")?;
            validate_input(&job, "Job file")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let mut manager = InputManager::new();
            let profile = manager.load_candidate(&candidate).await?;
            let posting = manager.load_job(&job).await?;

            let scorer = CompatibilityScorer::new();
            let breakdown = scorer.evaluate(&profile, &posting);
            info!("{} vs {}: {}%", profile.label(), posting.label(), breakdown.score);

            let report = Report::Compatibility(CompatibilityReport::new(
                &profile,
                posting.label(),
                breakdown,
                metadata_for(&candidate, &job),
            ));
            emit(&report, format, detailed || config.output.detailed, &config, save)
        }

        Commands::Rank {
            candidate,
            jobs,
            limit,
            min_score,
            detailed,
            output,
            save,
        } => {
            validate_input(&candidate, "Candidate file")?;
            validate_input(&jobs, "Jobs file")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let mut manager = InputManager::new();
            let profile = manager.load_candidate(&candidate).await?;
            let postings = manager.load_jobs(&jobs).await?;

            let ranked = CompatibilityScorer::new().rank(&profile, &postings);
            let report = Report::Ranking(RankingReport::from_ranked(
                &profile,
                ranked,
                limit.unwrap_or(config.ranking.limit),
                min_score.unwrap_or(config.ranking.min_score),
                metadata_for(&candidate, &jobs),
            ));
            emit(&report, format, detailed || config.output.detailed, &config, save)
        }

        Commands::Suggest {
            candidate,
            jobs,
            output,
            save,
        } => {
            validate_input(&candidate, "Candidate file")?;
            validate_input(&jobs, "Jobs file")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let mut manager = InputManager::new();
            let profile = manager.load_candidate(&candidate).await?;
            let postings = manager.load_jobs(&jobs).await?;

            let advisor = ProfileAdvisor::new(
                config.advisor.max_demanded_skills,
                config.advisor.experience_gap_ratio,
            );
            let report = Report::Suggestions(SuggestionReport {
                candidate: profile.label(),
                jobs_considered: postings.len(),
                demanded_skills: advisor.most_demanded_skills(&postings),
                average_required_experience: advisor.average_required_experience(&postings),
                suggestions: advisor.suggest(&profile, &postings),
                metadata: metadata_for(&candidate, &jobs),
            });
            emit(&report, format, config.output.detailed, &config, save)
        }

        Commands::Badge { score, html } => {
            if html {
                println!("{}", render_badge_html(score)?);
            } else {
                let badge = Badge::for_score(score);
                println!("{}% {} ({}, {})", score, badge.text, badge.class_name, badge.color_hex);
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| CompatError::Configuration(e.to_string()))?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", content);
                Ok(())
            }
            Some(ConfigAction::Path) => print_config_path(config_path),
            Some(ConfigAction::Reset) => reset_config(config_path),
            Some(ConfigAction::Set { key, value }) => {
                let mut updated = config;
                updated.set_value(&key, &value)?;
                updated.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
                Ok(())
            }
        },
    }
}

fn print_config_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

fn reset_config(config_path: &Path) -> Result<()> {
    Config::default().save_to(config_path)?;
    println!("✅ Configuration reset to defaults");
    Ok(())
}

fn validate_input(path: &Path, what: &str) -> Result<()> {
    cli::validate_file_extension(path, INPUT_EXTENSIONS)
        .map_err(|e| CompatError::InvalidInput(format!("{}: {}", what, e)))
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(CompatError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn metadata_for(candidate: &Path, jobs: &Path) -> ReportMetadata {
    ReportMetadata::new(
        candidate.display().to_string(),
        jobs.display().to_string(),
    )
}

fn emit(
    report: &Report,
    format: OutputFormat,
    detailed: bool,
    config: &Config,
    save: Option<PathBuf>,
) -> Result<()> {
    // Files never get ANSI escapes
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true, true);
    let content = generator.generate_report(report, &format)?;

    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(&format, &report.metadata().candidate_file, true))
            } else {
                path
            };
            save_report_to_file(&content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
