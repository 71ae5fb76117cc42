//! Candidate and job posting compatibility scoring library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{CompatError, Result};
pub use scoring::{CompatibilityScorer, MatchScorer};
