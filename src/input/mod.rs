//! Input processing module
//! Handles file type detection, parsing, and caching of profiles and postings

pub mod file_detector;
pub mod manager;

pub use manager::InputManager;
