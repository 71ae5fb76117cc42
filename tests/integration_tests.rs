//! Integration tests for the compatibility tool

use job_compat::config::OutputFormat;
use job_compat::input::manager::InputManager;
use job_compat::output::report::{CompatibilityReport, RankingReport, Report, ReportMetadata};
use job_compat::output::ReportGenerator;
use job_compat::scoring::{BadgeTier, CompatibilityScorer, Dimension, MatchScorer, ProfileAdvisor};
use std::path::Path;

#[tokio::test]
async fn test_score_fixture_pair() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let job = manager
        .load_job(Path::new("tests/fixtures/job.json"))
        .await
        .unwrap();

    let breakdown = CompatibilityScorer::new().evaluate(&candidate, &job);
    assert_eq!(breakdown.score, 88);
    assert_eq!(breakdown.badge.tier, BadgeTier::High);
    assert_eq!(breakdown.badge.class_name, "high-match");
}

#[tokio::test]
async fn test_empty_candidate_gets_defaults() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/empty_candidate.json"))
        .await
        .unwrap();
    let job = manager
        .load_job(Path::new("tests/fixtures/job.json"))
        .await
        .unwrap();

    let breakdown = CompatibilityScorer::new().evaluate(&candidate, &job);
    assert_eq!(breakdown.score, 33);
    assert_eq!(breakdown.badge.text, "Low Compatibility");
    assert_eq!(breakdown.defaulted_dimensions().len(), 5);
}

#[tokio::test]
async fn test_rank_json_catalog() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let jobs = manager
        .load_jobs(Path::new("tests/fixtures/jobs.json"))
        .await
        .unwrap();
    assert_eq!(jobs.len(), 3);

    let ranked = CompatibilityScorer::new().rank(&candidate, &jobs);
    assert_eq!(ranked[0].job.title.as_deref(), Some("Frontend Developer"));
    assert_eq!(ranked[0].index, 1);
    assert_eq!(ranked[0].breakdown.score, 88);
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].breakdown.score >= pair[1].breakdown.score));
}

#[tokio::test]
async fn test_rank_toml_jobs() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.toml"))
        .await
        .unwrap();
    let jobs = manager
        .load_jobs(Path::new("tests/fixtures/jobs.toml"))
        .await
        .unwrap();

    let ranked = CompatibilityScorer::new().rank(&candidate, &jobs);
    assert_eq!(ranked.len(), 2);
    // skills 35 + experience 12.5 + remote 15 + education 15 + salary 8
    assert_eq!(ranked[0].job.title.as_deref(), Some("Rust Developer"));
    assert_eq!(ranked[0].breakdown.score, 86);
}

#[tokio::test]
async fn test_partial_records_still_score() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let jobs = manager
        .load_jobs(Path::new("tests/fixtures/partial_jobs.json"))
        .await
        .unwrap();
    assert_eq!(jobs.len(), 2);
    assert!(!jobs[0].remote);

    let scorer = CompatibilityScorer::new();
    // 8000 is within 1.2 × the 7000 floor
    let min_only = scorer.evaluate(&candidate, &jobs[0]);
    let salary = min_only.get(Dimension::Salary).unwrap();
    assert_eq!(salary.value, 0.8);
    assert!(!salary.defaulted);

    let max_only = scorer.evaluate(&candidate, &jobs[1]);
    assert_eq!(max_only.get(Dimension::Salary).unwrap().value, 0.3);
}

#[tokio::test]
async fn test_suggestions_from_job_catalog() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let jobs = manager
        .load_jobs(Path::new("tests/fixtures/jobs.json"))
        .await
        .unwrap();

    let advisor = ProfileAdvisor::default();
    assert_eq!(advisor.most_demanded_skills(&jobs)[0], "node");
    assert_eq!(advisor.average_required_experience(&jobs), Some(7.0));

    let messages: Vec<String> = advisor
        .suggest(&candidate, &jobs)
        .into_iter()
        .map(|s| s.message)
        .collect();
    assert!(messages.contains(&"Consider adding \"node\" to your skills".to_string()));
    assert!(!messages.iter().any(|m| m.contains("\"react\"")));
    assert!(messages
        .contains(&"Highlight projects that demonstrate 7 years of experience".to_string()));
}

#[tokio::test]
async fn test_reports_render_in_every_format() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let jobs = manager
        .load_jobs(Path::new("tests/fixtures/jobs.json"))
        .await
        .unwrap();
    let scorer = CompatibilityScorer::new();

    let compatibility = Report::Compatibility(CompatibilityReport::new(
        &candidate,
        jobs[1].label(),
        scorer.evaluate(&candidate, &jobs[1]),
        ReportMetadata::new("candidate.json", "jobs.json"),
    ));
    let ranking = Report::Ranking(RankingReport::from_ranked(
        &candidate,
        scorer.rank(&candidate, &jobs),
        2,
        0,
        ReportMetadata::new("candidate.json", "jobs.json"),
    ));

    let generator = ReportGenerator::with_options(false, true, true, true, true);
    for format in [
        OutputFormat::Console,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ] {
        let score_output = generator.generate_report(&compatibility, &format).unwrap();
        assert!(score_output.contains("88"));

        let rank_output = generator.generate_report(&ranking, &format).unwrap();
        assert!(rank_output.contains("Frontend Developer"));
    }
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/candidate.json");

    let first = manager.load_candidate(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_candidate(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.load_candidate(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.json");

    let result = manager.load_job(path).await;
    assert!(result.is_err());
}
