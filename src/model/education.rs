//! Education ladder

use serde::{Deserialize, Serialize};
use std::fmt;
use strsim::jaro_winkler;

/// Ordinal education levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Fundamental,
    Medio,
    Tecnico,
    Superior,
    Pos,
    Mestrado,
    Doutorado,
}

impl EducationLevel {
    pub const LADDER: [EducationLevel; 7] = [
        EducationLevel::Fundamental,
        EducationLevel::Medio,
        EducationLevel::Tecnico,
        EducationLevel::Superior,
        EducationLevel::Pos,
        EducationLevel::Mestrado,
        EducationLevel::Doutorado,
    ];

    /// Position on the ladder, starting at 1.
    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::Fundamental => 1,
            EducationLevel::Medio => 2,
            EducationLevel::Tecnico => 3,
            EducationLevel::Superior => 4,
            EducationLevel::Pos => 5,
            EducationLevel::Mestrado => 6,
            EducationLevel::Doutorado => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Fundamental => "fundamental",
            EducationLevel::Medio => "medio",
            EducationLevel::Tecnico => "tecnico",
            EducationLevel::Superior => "superior",
            EducationLevel::Pos => "pos",
            EducationLevel::Mestrado => "mestrado",
            EducationLevel::Doutorado => "doutorado",
        }
    }

    /// Case-insensitive lookup. Accented spellings are accepted.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "fundamental" => Some(EducationLevel::Fundamental),
            "medio" | "médio" => Some(EducationLevel::Medio),
            "tecnico" | "técnico" => Some(EducationLevel::Tecnico),
            "superior" => Some(EducationLevel::Superior),
            "pos" | "pós" => Some(EducationLevel::Pos),
            "mestrado" => Some(EducationLevel::Mestrado),
            "doutorado" => Some(EducationLevel::Doutorado),
            _ => None,
        }
    }

    /// Ladder rank of a free-form label; unrecognized labels rank 0.
    pub fn rank_of(label: &str) -> u8 {
        Self::from_label(label).map(Self::rank).unwrap_or(0)
    }

    /// Closest ladder label by Jaro-Winkler similarity, for diagnostics.
    pub fn closest(label: &str) -> Option<(Self, f64)> {
        let needle = label.trim().to_lowercase();
        Self::LADDER
            .iter()
            .map(|level| (*level, jaro_winkler(&needle, level.label())))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_strictly_increasing() {
        for pair in EducationLevel::LADDER.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(EducationLevel::from_label("SUPERIOR"), Some(EducationLevel::Superior));
        assert_eq!(EducationLevel::from_label(" Mestrado "), Some(EducationLevel::Mestrado));
        assert_eq!(EducationLevel::from_label("Técnico"), Some(EducationLevel::Tecnico));
        assert_eq!(EducationLevel::from_label("bachelor"), None);
    }

    #[test]
    fn test_unknown_label_ranks_zero() {
        assert_eq!(EducationLevel::rank_of("phd"), 0);
        assert_eq!(EducationLevel::rank_of("pos"), 5);
    }

    #[test]
    fn test_closest_finds_typo() {
        let (level, similarity) = EducationLevel::closest("mestrdo").unwrap();
        assert_eq!(level, EducationLevel::Mestrado);
        assert!(similarity > 0.8);
    }
}
