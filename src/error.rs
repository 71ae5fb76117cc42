//! Error handling for the compatibility tool
//!
//! Scoring itself never fails; these errors come from loading inputs,
//! configuration and rendering reports.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, CompatError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CompatError {
    fn from(err: anyhow::Error) -> Self {
        CompatError::Processing(format!("{:#}", err))
    }
}

impl From<toml::de::Error> for CompatError {
    fn from(err: toml::de::Error) -> Self {
        CompatError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anyhow_converts_to_processing() {
        let err: CompatError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, CompatError::Processing(ref msg) if msg == "boom"));
    }

    #[test]
    fn test_anyhow_context_keeps_cause() {
        use anyhow::Context;
        let err: CompatError = std::fs::read_to_string("/nonexistent/job-compat.toml")
            .context("reading config")
            .unwrap_err()
            .into();
        let message = err.to_string();
        assert!(message.starts_with("Processing error: reading config: "));
    }

    #[test]
    fn test_toml_error_converts_to_parse() {
        let err: CompatError = toml::from_str::<toml::Table>("not = [valid")
            .unwrap_err()
            .into();
        assert!(matches!(err, CompatError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }
}
