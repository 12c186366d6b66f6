//! Domain Errors
//!
//! Error types for the search and extract pipelines.

use thiserror::Error;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Missing or unusable credential. Fatal: no pipeline runs without it.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Parameter-extractor output failed validation. Recovered by the caller
    /// with default options, never fatal.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Nothing usable to work with (empty query, zero valid URLs).
    #[error("No valid input: {0}")]
    NoValidInput(String),

    /// The search/extract provider call failed. Message kept verbatim where
    /// the provider supplied one. Never retried.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The text-generation collaborator failed.
    #[error("Generation error: {0}")]
    Generation(String),
}

impl ScoutError {
    pub fn missing_setting(key: &str) -> Self {
        Self::Configuration(format!("{} is not set", key))
    }
}
