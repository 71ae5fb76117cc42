//! Candidate profile records

use serde::{Deserialize, Serialize};

/// City and state pair used for on-site matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            state: Some(state.into()),
        }
    }

    /// Lower-cased city, if one is set and not blank
    pub fn city_key(&self) -> Option<String> {
        normalized(self.city.as_deref())
    }

    /// Lower-cased state, if one is set and not blank
    pub fn state_key(&self) -> Option<String> {
        normalized(self.state.as_deref())
    }

    /// A location with neither city nor state carries no information.
    pub fn is_empty(&self) -> bool {
        self.city_key().is_none() && self.state_key().is_none()
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_lowercase())
}

/// Candidate side of a compatibility comparison.
///
/// Every scoring field is optional. Absent values are resolved by the
/// default table in [`crate::scoring::subscores`], never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub skills: Option<Vec<String>>,
    /// Years of professional experience
    pub experience: Option<f64>,
    pub location: Option<Location>,
    /// Education ladder label, e.g. `"superior"`
    pub education: Option<String>,
    pub expected_salary: Option<f64>,
}

impl CandidateProfile {
    /// Human readable label for reports
    pub fn label(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| "Unnamed candidate".to_string())
    }
}
