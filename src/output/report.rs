//! Report structures produced by the CLI commands

use crate::model::CandidateProfile;
use crate::scoring::{RankedJob, ScoreBreakdown, Suggestion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Any report the tool can render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Compatibility(CompatibilityReport),
    Ranking(RankingReport),
    Suggestions(SuggestionReport),
}

impl Report {
    pub fn metadata(&self) -> &ReportMetadata {
        match self {
            Report::Compatibility(r) => &r.metadata,
            Report::Ranking(r) => &r.metadata,
            Report::Suggestions(r) => &r.metadata,
        }
    }
}

/// Report metadata and generation info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub candidate_file: String,
    /// Job posting or job list the candidate was compared against
    pub job_file: String,
}

impl ReportMetadata {
    pub fn new(candidate_file: impl Into<String>, job_file: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            candidate_file: candidate_file.into(),
            job_file: job_file.into(),
        }
    }
}

/// One candidate scored against one posting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub candidate: String,
    pub job: String,
    pub breakdown: ScoreBreakdown,
    pub metadata: ReportMetadata,
}

impl CompatibilityReport {
    pub fn new(
        candidate: &CandidateProfile,
        job_label: String,
        breakdown: ScoreBreakdown,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            candidate: candidate.label(),
            job: job_label,
            breakdown,
            metadata,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based position after sorting
    pub position: usize,
    /// Position of the job in the input file
    pub input_index: usize,
    pub job: String,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Job list ranked for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub candidate: String,
    pub total_jobs: usize,
    pub entries: Vec<RankingEntry>,
    pub metadata: ReportMetadata,
}

impl RankingReport {
    /// Build from already sorted results. `limit == 0` keeps every entry.
    pub fn from_ranked(
        candidate: &CandidateProfile,
        ranked: Vec<RankedJob>,
        limit: usize,
        min_score: u8,
        metadata: ReportMetadata,
    ) -> Self {
        let total_jobs = ranked.len();
        let take = if limit == 0 { usize::MAX } else { limit };

        let entries = ranked
            .into_iter()
            .filter(|r| r.breakdown.score >= min_score)
            .take(take)
            .enumerate()
            .map(|(i, r)| RankingEntry {
                position: i + 1,
                input_index: r.index,
                job: r.job.label(),
                score: r.breakdown.score,
                breakdown: r.breakdown,
            })
            .collect();

        Self {
            candidate: candidate.label(),
            total_jobs,
            entries,
            metadata,
        }
    }
}

/// Advisor output for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub candidate: String,
    pub jobs_considered: usize,
    pub demanded_skills: Vec<String>,
    pub average_required_experience: Option<f64>,
    pub suggestions: Vec<Suggestion>,
    pub metadata: ReportMetadata,
}
