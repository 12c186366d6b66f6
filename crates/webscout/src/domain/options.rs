//! Request Options
//!
//! Well-typed option records for the search and extract providers, with the
//! provider-accepted defaults applied via `Default`.

use serde::{Deserialize, Serialize};

/// Provider bounds for the number of search results per call
pub const MIN_SEARCH_RESULTS: u8 = 1;
pub const MAX_SEARCH_RESULTS: u8 = 20;

/// Search topic category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTopic {
    #[default]
    General,
    News,
}

impl std::str::FromStr for SearchTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(SearchTopic::General),
            "news" => Ok(SearchTopic::News),
            _ => Err(format!("Unknown topic: {}. Valid: general, news", s)),
        }
    }
}

/// Search depth requested from the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl std::str::FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(SearchDepth::Basic),
            "advanced" => Ok(SearchDepth::Advanced),
            _ => Err(format!("Unknown depth: {}. Valid: basic, advanced", s)),
        }
    }
}

/// Extraction depth requested from the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractDepth {
    #[default]
    Basic,
    Advanced,
}

impl std::str::FromStr for ExtractDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(ExtractDepth::Basic),
            "advanced" => Ok(ExtractDepth::Advanced),
            _ => Err(format!("Unknown depth: {}. Valid: basic, advanced", s)),
        }
    }
}

/// Options for a single search call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Number of results to return, within provider bounds
    pub max_results: u8,
    /// Search category
    pub topic: SearchTopic,
    /// Search depth
    pub search_depth: SearchDepth,
    /// Ask the provider for a generated answer
    pub include_answer: bool,
    /// Include images in the response
    pub include_images: bool,
    /// Recency window in days (news topic)
    pub days: u32,
    /// Restrict results to these domains
    pub include_domains: Option<Vec<String>>,
    /// Exclude results from these domains
    pub exclude_domains: Option<Vec<String>>,
    /// Provider-side token cap for returned content
    pub max_tokens: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 1,
            topic: SearchTopic::General,
            search_depth: SearchDepth::Basic,
            include_answer: true,
            include_images: false,
            days: 3,
            include_domains: None,
            exclude_domains: None,
            max_tokens: None,
        }
    }
}

/// Options for a single extraction call
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Include image URLs found on the pages
    pub include_images: bool,
    /// Extraction depth
    pub extract_depth: ExtractDepth,
}
