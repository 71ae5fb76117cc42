use crate::scoring::subscores::Dimension;
use serde::{Deserialize, Serialize};

/// Fixed scoring weights, in percentage points.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 35,
    experience: 25,
    location: 15,
    education: 15,
    salary: 10,
};

/// Weights are kept as integer points so the weighted sum is accumulated
/// on an exact 0-100 scale before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub skills: u32,
    pub experience: u32,
    pub location: u32,
    pub education: u32,
    pub salary: u32,
}

impl Weights {
    pub fn sum(&self) -> u32 {
        self.skills + self.experience + self.location + self.education + self.salary
    }

    pub fn points(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Skills => self.skills,
            Dimension::Experience => self.experience,
            Dimension::Location => self.location,
            Dimension::Education => self.education,
            Dimension::Salary => self.salary,
        }
    }

    /// Weight as a fraction of 1.0
    pub fn fraction(&self, dimension: Dimension) -> f64 {
        self.points(dimension) as f64 / 100.0
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
