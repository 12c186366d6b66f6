//! Text Generation Port
//!
//! Abstract interface for the model-generation collaborator. Each action
//! makes two calls through it: one to extract structured parameters from
//! free text, one to format a structured result into prose.

use async_trait::async_trait;

use crate::domain::errors::ScoutError;

/// Size class of the model to use for a call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelClass {
    /// Cheap and fast, used for parameter extraction
    #[default]
    Small,
    /// Larger model for long-form formatting
    Medium,
}

/// Text generation interface
///
/// Implementations call an actual provider (Gemini, OpenAI, ...) and should
/// be swappable without touching the pipelines.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text from a rendered prompt
    async fn generate(&self, prompt: &str, class: ModelClass) -> Result<String, ScoutError>;
}
