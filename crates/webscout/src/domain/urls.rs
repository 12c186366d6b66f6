//! URL Validation
//!
//! Syntactic filtering of candidate URL strings before an extraction call.

use url::Url;

/// Provider batch limit per extraction call
pub const MAX_URLS_PER_REQUEST: usize = 20;

/// Keep the candidates that parse as absolute URLs with an authority.
///
/// Order-preserving, no deduplication, no normalization, no network check.
/// Anything beyond the provider batch limit is dropped from the tail. An
/// empty result is a legitimate outcome the caller must report as "no valid
/// URLs", not as a provider failure.
pub fn filter_valid_urls(candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| {
            Url::parse(candidate)
                .map(|url| url.has_authority())
                .unwrap_or(false)
        })
        .take(MAX_URLS_PER_REQUEST)
        .cloned()
        .collect()
}
