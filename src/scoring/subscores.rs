//! The five sub-score rules.
//!
//! Each rule maps its inputs to a value in `[0, 1]`. Missing inputs never
//! fail: they resolve to the defaults below and the rating is marked as
//! defaulted.
//!
//! | dimension  | missing input                         | value |
//! |------------|---------------------------------------|-------|
//! | skills     | either list absent or nothing required | 0.0  |
//! | experience | either value absent, zero or NaN      | 0.5   |
//! | location   | either location absent (on-site job)  | 0.5   |
//! | education  | no requirement                        | 1.0   |
//! | education  | candidate level absent                | 0.3   |
//! | salary     | expectation absent, zero or NaN, or no range | 0.8 |

use crate::model::{EducationLevel, Location, SalaryRange};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const MISSING_SKILLS: f64 = 0.0;
pub const MISSING_EXPERIENCE: f64 = 0.5;
pub const MISSING_LOCATION: f64 = 0.5;
pub const NO_EDUCATION_REQUIREMENT: f64 = 1.0;
pub const MISSING_EDUCATION: f64 = 0.3;
pub const MISSING_SALARY: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Skills,
    Experience,
    Location,
    Education,
    Salary,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Skills,
        Dimension::Experience,
        Dimension::Location,
        Dimension::Education,
        Dimension::Salary,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Skills => "Skills",
            Dimension::Experience => "Experience",
            Dimension::Location => "Location",
            Dimension::Education => "Education",
            Dimension::Salary => "Salary",
        };
        f.write_str(name)
    }
}

/// A sub-score value and whether it came from the default table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub value: f64,
    pub defaulted: bool,
}

impl Rating {
    pub fn measured(value: f64) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    pub fn defaulted(value: f64) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Zero and NaN count as absent. Negative values are kept.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Share of required skills the candidate has, case-insensitive.
pub fn skills_match(candidate: Option<&[String]>, required: Option<&[String]>) -> Rating {
    let (candidate, required) = match (candidate, required) {
        (Some(c), Some(r)) if !r.is_empty() => (c, r),
        _ => return Rating::defaulted(MISSING_SKILLS),
    };

    let candidate_set: HashSet<String> = candidate.iter().map(|s| s.to_lowercase()).collect();
    let required_set: HashSet<String> = required.iter().map(|s| s.to_lowercase()).collect();

    let matches = required_set.intersection(&candidate_set).count();
    Rating::measured(matches as f64 / required_set.len() as f64)
}

pub fn experience_match(candidate_years: Option<f64>, required_years: Option<f64>) -> Rating {
    let (candidate, required) = match (present(candidate_years), present(required_years)) {
        (Some(c), Some(r)) => (c, r),
        _ => return Rating::defaulted(MISSING_EXPERIENCE),
    };

    let value = if candidate >= required {
        1.0
    } else if candidate >= required * 0.7 {
        0.8
    } else if candidate >= required * 0.5 {
        0.6
    } else {
        0.3
    };
    Rating::measured(value)
}

pub fn location_match(
    candidate: Option<&Location>,
    job: Option<&Location>,
    remote: bool,
) -> Rating {
    if remote {
        return Rating::measured(1.0);
    }

    let (candidate, job) = match (candidate, job) {
        (Some(c), Some(j)) if !c.is_empty() && !j.is_empty() => (c, j),
        _ => return Rating::defaulted(MISSING_LOCATION),
    };

    let same = |a: Option<String>, b: Option<String>| matches!((a, b), (Some(a), Some(b)) if a == b);

    let value = if same(candidate.city_key(), job.city_key()) {
        1.0
    } else if same(candidate.state_key(), job.state_key()) {
        0.7
    } else {
        0.3
    };
    Rating::measured(value)
}

pub fn education_match(candidate: Option<&str>, required: Option<&str>) -> Rating {
    let Some(required) = non_blank(required) else {
        return Rating::defaulted(NO_EDUCATION_REQUIREMENT);
    };
    let Some(candidate) = non_blank(candidate) else {
        return Rating::defaulted(MISSING_EDUCATION);
    };

    warn_unrecognized(candidate);
    warn_unrecognized(required);

    let candidate_rank = EducationLevel::rank_of(candidate);
    let required_rank = EducationLevel::rank_of(required);

    if candidate_rank >= required_rank {
        Rating::measured(1.0)
    } else {
        Rating::measured(candidate_rank as f64 / required_rank as f64)
    }
}

fn warn_unrecognized(label: &str) {
    if EducationLevel::from_label(label).is_some() {
        return;
    }
    match EducationLevel::closest(label) {
        Some((level, similarity)) if similarity >= 0.8 => {
            warn!(
                "Unrecognized education level '{}' (did you mean '{}'?)",
                label, level
            );
        }
        _ => warn!("Unrecognized education level '{}'", label),
    }
}

pub fn salary_match(expected: Option<f64>, range: Option<&SalaryRange>) -> Rating {
    let (expected, range) = match (present(expected), range) {
        (Some(e), Some(r)) => (e, r),
        _ => return Rating::defaulted(MISSING_SALARY),
    };

    // no lower bound, no tier applies
    let Some(min) = range.min.filter(|m| !m.is_nan()) else {
        return Rating::measured(0.3);
    };

    let value = if range.contains(expected) {
        1.0
    } else if expected <= min * 1.2 {
        0.8
    } else if expected <= min * 1.5 {
        0.6
    } else {
        0.3
    };
    Rating::measured(value)
}
