//! Token Counting Port
//!
//! The truncator only needs a count, so the tokenizer stays behind a trait
//! and tests can drive it with a stub.

/// Token counting interface
pub trait TokenCounter: Send + Sync {
    /// Number of tokens in `text` under this counter's model
    fn count(&self, text: &str) -> usize;
}

/// Cap `text` to a token budget.
///
/// When the count reaches the limit, the cut keeps the first `max_tokens`
/// *characters* rather than tokens: a deliberately cheap approximation.
/// Below the limit the text passes through unchanged, so re-truncating at
/// the same limit is a no-op.
pub fn truncate_to_budget(text: &str, max_tokens: usize, counter: &dyn TokenCounter) -> String {
    if counter.count(text) >= max_tokens {
        text.chars().take(max_tokens).collect()
    } else {
        text.to_string()
    }
}
