//! Candidate profiles and job postings as loaded from input files

pub mod candidate;
pub mod education;
pub mod job;

pub use candidate::{CandidateProfile, Location};
pub use education::EducationLevel;
pub use job::{JobPosting, SalaryRange};
