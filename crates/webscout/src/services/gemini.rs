//! Gemini Generator
//!
//! `TextGenerator` adapter over the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ScoutError;
use crate::ports::generator::{ModelClass, TextGenerator};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const SMALL_MODEL: &str = "gemini-2.0-flash-lite";
const MEDIUM_MODEL: &str = "gemini-2.0-flash";

/// Text generation client backed by Gemini.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    small_model: String,
    medium_model: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiGenerator {
    /// Create a new generator using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            small_model: SMALL_MODEL.to_string(),
            medium_model: MEDIUM_MODEL.to_string(),
        }
    }

    /// Override the model used for a class, if needed.
    pub fn with_model(mut self, class: ModelClass, model: impl Into<String>) -> Self {
        match class {
            ModelClass::Small => self.small_model = model.into(),
            ModelClass::Medium => self.medium_model = model.into(),
        }
        self
    }

    fn model_for(&self, class: ModelClass) -> &str {
        match class {
            ModelClass::Small => &self.small_model,
            ModelClass::Medium => &self.medium_model,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str, class: ModelClass) -> Result<String, ScoutError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model_for(class),
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ScoutError::Generation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::Generation(format!("parse error: {}", e)))?;

        let collected: Vec<String> = payload
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if collected.is_empty() {
            return Err(ScoutError::Generation("model returned no text".to_string()));
        }

        Ok(collected.join("\n\n"))
    }
}

fn map_http_error(status: StatusCode, body: String) -> ScoutError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    ScoutError::Generation(format!("Gemini API error ({}): {}", status, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_is_collected_across_candidates_and_parts() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": " first "}, {"text": ""}]}},
                    {"content": {"parts": [{"text": "second"}]}},
                    {}
                ]
            }"#,
        )
        .unwrap();

        let collected: Vec<String> = payload
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        assert_eq!(collected, vec!["first", "second"]);
    }

    #[test]
    fn http_error_prefers_the_api_message() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": {"message": "API key not valid"}}"#.to_string(),
        );
        assert!(err.to_string().contains("API key not valid"));

        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "plain body".to_string());
        assert!(err.to_string().contains("plain body"));
    }
}
