//! Provider Responses
//!
//! Canonical response shapes for the search and extract providers. All of
//! these are request-scoped value records; nothing here outlives a single
//! action invocation.

use serde::{Deserialize, Serialize};

/// One search hit, in provider order. Relevance is never recomputed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: Option<String>,
    pub score: Option<f64>,
    pub published_date: Option<String>,
}

/// Image attached to a search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchImage {
    pub url: String,
    pub description: Option<String>,
}

/// Full search response. `answer` and `images` may legitimately be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub answer: Option<String>,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub images: Vec<SearchImage>,
    pub response_time: f64,
}

/// Successfully extracted page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractSuccess {
    pub url: String,
    pub raw_content: String,
    pub images: Vec<String>,
}

/// Page the provider could not extract. Always carries a reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractFailure {
    pub url: String,
    pub error: String,
}

/// Extraction response, partitioned per URL by provider outcome.
/// Partial failure is the expected case, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub results: Vec<ExtractSuccess>,
    pub failed_results: Vec<ExtractFailure>,
    pub response_time: f64,
}
