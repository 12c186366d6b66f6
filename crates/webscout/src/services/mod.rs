//! Service Adapters
//!
//! Packaged implementations of the ports: Tavily for search/extract,
//! Gemini for text generation, and the default token counter.

pub mod gemini;
pub mod tavily;
pub mod tokens;

// Re-exports
pub use gemini::GeminiGenerator;
pub use tavily::TavilyClient;
pub use tokens::{HeuristicTokenCounter, DEFAULT_MAX_EXTRACT_TOKENS, DEFAULT_MAX_SEARCH_TOKENS};
