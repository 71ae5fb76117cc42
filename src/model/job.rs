//! Job posting records

use crate::model::candidate::Location;
use serde::{Deserialize, Deserializer, Serialize};

/// Offered salary band. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SalaryRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Inclusive on both ends; false when either bound is unknown.
    pub fn contains(&self, salary: f64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => salary >= min && salary <= max,
            _ => false,
        }
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Job side of a compatibility comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub required_skills: Option<Vec<String>>,
    /// Minimum years of experience asked for
    pub required_experience: Option<f64>,
    pub location: Option<Location>,
    #[serde(deserialize_with = "null_as_false")]
    pub remote: bool,
    pub required_education: Option<String>,
    pub salary_range: Option<SalaryRange>,
}

impl JobPosting {
    pub fn label(&self) -> String {
        match (&self.title, &self.company) {
            (Some(title), Some(company)) => format!("{} @ {}", title, company),
            (Some(title), None) => title.clone(),
            _ => self
                .id
                .clone()
                .unwrap_or_else(|| "Untitled job".to_string()),
        }
    }
}
