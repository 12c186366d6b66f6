//! Token Counting
//!
//! Default `TokenCounter` implementation. A real tokenizer is an external
//! dependency detail; the pipelines only need a stable count.

use crate::ports::token_counter::TokenCounter;

/// Default token budget for a shaped search response
pub const DEFAULT_MAX_SEARCH_TOKENS: usize = 4000;
/// Default token budget for a shaped extraction response
pub const DEFAULT_MAX_EXTRACT_TOKENS: usize = 8000;

/// Character-ratio token estimate, ~4 chars per token.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTokenCounter;

impl TokenCounter for HeuristicTokenCounter {
    fn count(&self, text: &str) -> usize {
        text.len() / 4
    }
}
