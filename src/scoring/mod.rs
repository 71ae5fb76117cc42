//! Compatibility scoring between candidate profiles and job postings

pub mod advisor;
pub mod badge;
pub mod scorer;
pub mod subscores;
pub mod weights;

pub use advisor::{Impact, ProfileAdvisor, Suggestion, SuggestionKind};
pub use badge::{render_badge_html, Badge, BadgeTier};
pub use scorer::{CompatibilityScorer, MatchScorer, RankedJob, ScoreBreakdown, SubScore};
pub use subscores::{Dimension, Rating};
pub use weights::{Weights, DEFAULT_WEIGHTS};
