//! Configuration
//!
//! Credentials read from the environment. A missing search credential is
//! fatal at construction time; the pipelines never run without one.

use crate::domain::errors::ScoutError;

pub const TAVILY_API_KEY: &str = "TAVILY_API_KEY";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Plugin configuration
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// Tavily credential, required
    pub tavily_api_key: String,
    /// Gemini credential for the packaged generator, required when using it
    pub gemini_api_key: String,
}

impl ScoutConfig {
    pub fn new(tavily_api_key: impl Into<String>, gemini_api_key: impl Into<String>) -> Self {
        Self {
            tavily_api_key: tavily_api_key.into(),
            gemini_api_key: gemini_api_key.into(),
        }
    }

    /// Load from the environment, honoring a `.env` file if present.
    pub fn from_env() -> Result<Self, ScoutError> {
        dotenvy::dotenv().ok();

        let tavily_api_key = require(TAVILY_API_KEY)?;
        let gemini_api_key = require(GEMINI_API_KEY)?;

        Ok(Self {
            tavily_api_key,
            gemini_api_key,
        })
    }
}

fn require(key: &str) -> Result<String, ScoutError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ScoutError::missing_setting(key))
}
