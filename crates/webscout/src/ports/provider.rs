//! Search Provider Port
//!
//! Abstract interface for the third-party search and extraction API.

use async_trait::async_trait;

use crate::domain::errors::ScoutError;
use crate::domain::options::{ExtractOptions, SearchOptions};
use crate::domain::response::{ExtractResponse, SearchResponse};

/// Service interface for web search and content extraction
///
/// Adapters translate our option records into the provider's call shape and
/// the provider's JSON back into our response shapes. Provider errors
/// propagate unchanged: no retry, no backoff, no subtype mapping.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Whether the provider is configured and ready to accept calls.
    ///
    /// Actions use this as their availability gate before advertising
    /// themselves to the host runtime.
    fn is_available(&self) -> bool {
        true
    }

    /// Search the web for a query
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, ScoutError>;

    /// Extract page content for a batch of URLs.
    ///
    /// One call covers the full set; the provider partitions success and
    /// failure per URL inside a successful response. A transport-level
    /// failure of the whole call is a `Provider` error instead.
    async fn extract(
        &self,
        urls: &[String],
        options: &ExtractOptions,
    ) -> Result<ExtractResponse, ScoutError>;
}
