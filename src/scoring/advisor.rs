//! Profile improvement suggestions drawn from a set of job postings

use crate::model::{CandidateProfile, JobPosting};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Skill,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
    pub impact: Impact,
}

pub struct ProfileAdvisor {
    max_demanded_skills: usize,
    experience_gap_ratio: f64,
}

impl ProfileAdvisor {
    pub fn new(max_demanded_skills: usize, experience_gap_ratio: f64) -> Self {
        Self {
            max_demanded_skills,
            experience_gap_ratio,
        }
    }

    /// Required skills ordered by how many postings ask for them.
    ///
    /// Skills are counted by their exact spelling; ties keep the order in
    /// which the skills first appear.
    pub fn most_demanded_skills(&self, jobs: &[JobPosting]) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for skill in jobs.iter().flat_map(|j| j.required_skills.iter().flatten()) {
            let count = counts.entry(skill.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(skill.as_str());
            }
            *count += 1;
        }

        // stable sort keeps first-seen order for ties
        first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
        first_seen
            .into_iter()
            .take(self.max_demanded_skills)
            .map(str::to_string)
            .collect()
    }

    /// Mean required experience, counting missing values as zero.
    pub fn average_required_experience(&self, jobs: &[JobPosting]) -> Option<f64> {
        if jobs.is_empty() {
            return None;
        }
        let total: f64 = jobs
            .iter()
            .map(|j| j.required_experience.filter(|v| !v.is_nan()).unwrap_or(0.0))
            .sum();
        Some(total / jobs.len() as f64)
    }

    pub fn suggest(&self, candidate: &CandidateProfile, jobs: &[JobPosting]) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        let owned: HashSet<String> = candidate
            .skills
            .iter()
            .flatten()
            .map(|s| s.to_lowercase())
            .collect();

        for skill in self.most_demanded_skills(jobs) {
            if !owned.contains(&skill.to_lowercase()) {
                suggestions.push(Suggestion {
                    kind: SuggestionKind::Skill,
                    message: format!("Consider adding \"{}\" to your skills", skill),
                    impact: Impact::High,
                });
            }
        }

        if let (Some(experience), Some(average)) =
            (candidate.experience, self.average_required_experience(jobs))
        {
            if experience < average * self.experience_gap_ratio {
                suggestions.push(Suggestion {
                    kind: SuggestionKind::Experience,
                    message: format!(
                        "Highlight projects that demonstrate {} years of experience",
                        format_years(average)
                    ),
                    impact: Impact::Medium,
                });
            }
        }

        suggestions
    }
}

impl Default for ProfileAdvisor {
    fn default() -> Self {
        Self::new(5, 0.8)
    }
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as i64)
    } else {
        format!("{:.1}", years)
    }
}
