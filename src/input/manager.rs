//! Input manager for loading candidate profiles and job postings

use crate::error::{CompatError, Result};
use crate::input::file_detector::FileType;
use crate::model::{CandidateProfile, JobPosting};
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Accepted shapes for a job list file.
#[derive(Deserialize)]
#[serde(untagged)]
enum JobsDocument {
    List(Vec<JobPosting>),
    Catalog { jobs: Vec<JobPosting> },
}

impl JobsDocument {
    fn into_jobs(self) -> Vec<JobPosting> {
        match self {
            JobsDocument::List(jobs) => jobs,
            JobsDocument::Catalog { jobs } => jobs,
        }
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_candidate(&mut self, path: &Path) -> Result<CandidateProfile> {
        self.load_document(path).await
    }

    pub async fn load_job(&mut self, path: &Path) -> Result<JobPosting> {
        self.load_document(path).await
    }

    pub async fn load_jobs(&mut self, path: &Path) -> Result<Vec<JobPosting>> {
        let document: JobsDocument = self.load_document(path).await?;
        let jobs = document.into_jobs();
        info!("Loaded {} job postings from {}", jobs.len(), path.display());
        Ok(jobs)
    }

    async fn load_document<T: DeserializeOwned>(&mut self, path: &Path) -> Result<T> {
        let file_type = self.detect_file_type(path)?;
        if file_type == FileType::Unknown {
            return Err(CompatError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        let text = self.read_text(path).await?;
        match file_type {
            FileType::Toml => Ok(toml::from_str(&text)?),
            _ => Ok(serde_json::from_str(&text)?),
        }
    }

    async fn read_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached input for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(CompatError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading input file: {}", path.display());
        let text = fs::read_to_string(path).await?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CompatError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_jobs_accepts_json_array_and_object() {
        let dir = tempdir().unwrap();
        let array = dir.path().join("array.json");
        let object = dir.path().join("object.json");
        std::fs::write(&array, r#"[{"title": "A"}, {"title": "B"}]"#).unwrap();
        std::fs::write(&object, r#"{"jobs": [{"title": "C"}]}"#).unwrap();

        let mut manager = InputManager::new();
        assert_eq!(manager.load_jobs(&array).await.unwrap().len(), 2);
        let jobs = manager.load_jobs(&object).await.unwrap();
        assert_eq!(jobs[0].title.as_deref(), Some("C"));
    }

    #[tokio::test]
    async fn test_load_candidate_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("candidate.toml");
        std::fs::write(
            &path,
            "name = \"Bruno\"\nskills = [\"rust\"]\nexperience = 2.0\n\n[location]\ncity = \"Recife\"\nstate = \"PE\"\n",
        )
        .unwrap();

        let mut manager = InputManager::new();
        let candidate = manager.load_candidate(&path).await.unwrap();
        assert_eq!(candidate.name.as_deref(), Some("Bruno"));
        assert_eq!(candidate.experience, Some(2.0));
        assert_eq!(candidate.location.unwrap().state.as_deref(), Some("PE"));
    }

    #[tokio::test]
    async fn test_cache_can_be_disabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(&path, "{}").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        manager.load_job(&path).await.unwrap();
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_invalid_json_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut manager = InputManager::new();
        let err = manager.load_job(&path).await.unwrap_err();
        assert!(matches!(err, CompatError::Serialization(_)));
    }
}
