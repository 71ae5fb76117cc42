//! Compatibility scorer
//!
//! `score(candidate, job)` is a weighted sum of five sub-scores:
//! 1. each rule in [`subscores`] yields a value in `[0, 1]`
//! 2. value × weight points (see [`Weights`]) gives the contribution on a 0-100 scale
//! 3. the contributions are summed, rounded, and clamped to `[0, 100]`
//!
//! The scorer holds no mutable state; construct one and share it freely.

use crate::model::{CandidateProfile, JobPosting};
use crate::scoring::badge::Badge;
use crate::scoring::subscores::{self, Dimension, Rating};
use crate::scoring::weights::{Weights, DEFAULT_WEIGHTS};
use log::debug;
use serde::{Deserialize, Serialize};

/// One dimension of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub dimension: Dimension,
    /// Sub-score in `[0, 1]`
    pub value: f64,
    /// Weight as a fraction of 1.0
    pub weight: f64,
    /// `value × weight` on the 0-100 scale
    pub points: f64,
    /// True when the value came from the default table instead of a comparison
    pub defaulted: bool,
}

/// Per-dimension view of one compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub badge: Badge,
    pub subscores: Vec<SubScore>,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> Option<&SubScore> {
        self.subscores.iter().find(|s| s.dimension == dimension)
    }

    pub fn defaulted_dimensions(&self) -> Vec<Dimension> {
        self.subscores
            .iter()
            .filter(|s| s.defaulted)
            .map(|s| s.dimension)
            .collect()
    }
}

/// A job together with its score for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    /// Position of the job in the input list
    pub index: usize,
    pub job: JobPosting,
    pub breakdown: ScoreBreakdown,
}

/// Scoring seam. Callers hold a `&dyn MatchScorer` (or a concrete scorer)
/// instead of a shared global instance.
pub trait MatchScorer {
    fn evaluate(&self, candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown;

    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> u8 {
        self.evaluate(candidate, job).score
    }

    /// Score every job and sort by score, highest first. Ties keep input order.
    fn rank(&self, candidate: &CandidateProfile, jobs: &[JobPosting]) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| RankedJob {
                index,
                job: job.clone(),
                breakdown: self.evaluate(candidate, job),
            })
            .collect();

        ranked.sort_by(|a, b| b.breakdown.score.cmp(&a.breakdown.score));
        ranked
    }
}

/// Default weighted-sum scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityScorer {
    weights: Weights,
}

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    fn rate(dimension: Dimension, candidate: &CandidateProfile, job: &JobPosting) -> Rating {
        match dimension {
            Dimension::Skills => subscores::skills_match(
                candidate.skills.as_deref(),
                job.required_skills.as_deref(),
            ),
            Dimension::Experience => {
                subscores::experience_match(candidate.experience, job.required_experience)
            }
            Dimension::Location => subscores::location_match(
                candidate.location.as_ref(),
                job.location.as_ref(),
                job.remote,
            ),
            Dimension::Education => subscores::education_match(
                candidate.education.as_deref(),
                job.required_education.as_deref(),
            ),
            Dimension::Salary => {
                subscores::salary_match(candidate.expected_salary, job.salary_range.as_ref())
            }
        }
    }
}

impl MatchScorer for CompatibilityScorer {
    fn evaluate(&self, candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown {
        let subscores: Vec<SubScore> = Dimension::ALL
            .iter()
            .map(|&dimension| {
                let rating = Self::rate(dimension, candidate, job);
                SubScore {
                    dimension,
                    value: rating.value,
                    weight: self.weights.fraction(dimension),
                    points: rating.value * self.weights.points(dimension) as f64,
                    defaulted: rating.defaulted,
                }
            })
            .collect();

        let total: f64 = subscores.iter().map(|s| s.points).sum();
        let score = total.round().clamp(0.0, 100.0) as u8;

        debug!(
            "Scored {} against {}: {} ({})",
            candidate.label(),
            job.label(),
            score,
            subscores
                .iter()
                .map(|s| format!("{}={:.2}", s.dimension, s.value))
                .collect::<Vec<_>>()
                .join(", ")
        );

        ScoreBreakdown {
            score,
            badge: Badge::for_score(score),
            subscores,
        }
    }
}
