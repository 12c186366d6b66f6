//! Tavily Client
//!
//! `SearchProvider` adapter for the Tavily search and extract API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ScoutError;
use crate::domain::options::{ExtractDepth, ExtractOptions, SearchDepth, SearchOptions, SearchTopic};
use crate::domain::response::{
    ExtractFailure, ExtractResponse, ExtractSuccess, SearchImage, SearchResponse, SearchResult,
};
use crate::ports::provider::SearchProvider;

const SEARCH_URL: &str = "https://api.tavily.com/search";
const EXTRACT_URL: &str = "https://api.tavily.com/extract";

/// Tavily API client. Stateless beyond the credential; safe to share.
pub struct TavilyClient {
    api_key: String,
    client: reqwest::Client,
}

/// Tavily search request
#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: SearchDepth,
    topic: SearchTopic,
    days: u32,
    max_results: u8,
    include_answer: bool,
    include_images: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_domains: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_domains: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
}

/// Tavily extract request
#[derive(Debug, Serialize)]
struct TavilyExtractRequest<'a> {
    api_key: &'a str,
    urls: &'a [String],
    include_images: bool,
    extract_depth: ExtractDepth,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    query: String,
    #[serde(default)]
    results: Vec<TavilySearchResult>,
    #[serde(default)]
    images: Vec<TavilyImage>,
    #[serde(default)]
    response_time: f64,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResult {
    title: String,
    url: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    published_date: Option<String>,
}

/// Images arrive either as bare URL strings or as objects with a description.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TavilyImage {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct TavilyExtractResponse {
    #[serde(default)]
    results: Vec<TavilyExtractResult>,
    #[serde(default)]
    failed_results: Vec<TavilyExtractFailure>,
    #[serde(default)]
    response_time: f64,
}

#[derive(Debug, Deserialize)]
struct TavilyExtractResult {
    url: String,
    /// The more specific field, preferred when both are present
    #[serde(default)]
    raw_content: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    images: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TavilyExtractFailure {
    url: String,
    #[serde(default)]
    error: Option<String>,
}

impl TavilyClient {
    /// Create a new Tavily client
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<T, ScoutError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ScoutError::Provider(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::Provider(format!(
                "Tavily API error {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ScoutError::Provider(format!("failed to parse Tavily response: {}", e)))
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    fn is_available(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, ScoutError> {
        tracing::debug!(query, max_results = options.max_results, "tavily search");

        let request = TavilySearchRequest {
            api_key: &self.api_key,
            query,
            search_depth: options.search_depth,
            topic: options.topic,
            days: options.days,
            max_results: options.max_results,
            include_answer: options.include_answer,
            include_images: options.include_images,
            include_domains: options.include_domains.as_deref(),
            exclude_domains: options.exclude_domains.as_deref(),
            max_tokens: options.max_tokens,
        };

        let raw: TavilySearchResponse = self.post_json(SEARCH_URL, &request).await?;

        Ok(SearchResponse {
            answer: raw.answer,
            query: if raw.query.is_empty() {
                query.to_string()
            } else {
                raw.query
            },
            results: raw
                .results
                .into_iter()
                .map(|r| SearchResult {
                    title: r.title,
                    url: r.url,
                    content: r.content,
                    score: r.score,
                    published_date: r.published_date,
                })
                .collect(),
            images: raw
                .images
                .into_iter()
                .map(|image| match image {
                    TavilyImage::Url(url) => SearchImage {
                        url,
                        description: None,
                    },
                    TavilyImage::Detailed { url, description } => SearchImage { url, description },
                })
                .collect(),
            response_time: raw.response_time,
        })
    }

    async fn extract(
        &self,
        urls: &[String],
        options: &ExtractOptions,
    ) -> Result<ExtractResponse, ScoutError> {
        tracing::debug!(url_count = urls.len(), "tavily extract");

        let request = TavilyExtractRequest {
            api_key: &self.api_key,
            urls,
            include_images: options.include_images,
            extract_depth: options.extract_depth,
        };

        let raw: TavilyExtractResponse = self.post_json(EXTRACT_URL, &request).await?;

        let results = raw
            .results
            .into_iter()
            .map(|r| ExtractSuccess {
                url: r.url,
                raw_content: r.raw_content.or(r.content).unwrap_or_default(),
                images: r.images,
            })
            .collect();

        // A failed URL is never dropped silently, even without a reason.
        let failed_results = raw
            .failed_results
            .into_iter()
            .map(|r| ExtractFailure {
                url: r.url,
                error: r.error.unwrap_or_else(|| "Unknown error".to_string()),
            })
            .collect();

        Ok(ExtractResponse {
            results,
            failed_results,
            response_time: raw.response_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_follows_credential_presence() {
        assert!(TavilyClient::new("tvly-key").is_available());
        assert!(!TavilyClient::new("").is_available());
        assert!(!TavilyClient::new("   ").is_available());
    }

    #[test]
    fn extract_result_prefers_raw_content_over_content() {
        let raw: TavilyExtractResponse = serde_json::from_str(
            r#"{
                "results": [
                    {"url": "https://a.com", "raw_content": "raw", "content": "plain"},
                    {"url": "https://b.com", "content": "plain only"},
                    {"url": "https://c.com"}
                ],
                "failed_results": [{"url": "https://d.com"}],
                "response_time": 0.4
            }"#,
        )
        .unwrap();

        let contents: Vec<String> = raw
            .results
            .into_iter()
            .map(|r| r.raw_content.or(r.content).unwrap_or_default())
            .collect();
        assert_eq!(contents, vec!["raw", "plain only", ""]);
        assert_eq!(raw.failed_results[0].error, None);
    }

    #[test]
    fn search_response_tolerates_missing_answer_and_images() {
        let raw: TavilySearchResponse = serde_json::from_str(
            r#"{
                "query": "rust",
                "results": [{"title": "Rust", "url": "https://rust-lang.org", "score": 0.99}],
                "response_time": 0.2
            }"#,
        )
        .unwrap();
        assert!(raw.answer.is_none());
        assert!(raw.images.is_empty());
        assert_eq!(raw.results.len(), 1);
        assert!(raw.results[0].content.is_none());
    }

    #[test]
    fn images_decode_as_strings_or_objects() {
        let raw: Vec<TavilyImage> = serde_json::from_str(
            r#"["https://img.example/1.png", {"url": "https://img.example/2.png", "description": "a rocket"}]"#,
        )
        .unwrap();
        assert!(matches!(&raw[0], TavilyImage::Url(u) if u.ends_with("1.png")));
        assert!(matches!(&raw[1], TavilyImage::Detailed { description: Some(d), .. } if d == "a rocket"));
    }
}
