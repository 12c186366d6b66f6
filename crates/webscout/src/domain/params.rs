//! Parameter Validation
//!
//! The parameter extractor hands us untrusted, loosely-typed JSON: numbers
//! arrive as strings, booleans as `"TRUE"`, enums in mixed case. These
//! decoders turn that into well-typed option records. Both are pure: the
//! input value is never mutated.
//!
//! The two pipelines deliberately apply different recovery policies:
//! - search: any bad field marks the whole record invalid and the caller
//!   falls back to full defaults;
//! - extract: each field defaults independently and decoding never fails.

use serde_json::Value;

use super::errors::ScoutError;
use super::options::{
    ExtractDepth, ExtractOptions, SearchDepth, SearchOptions, SearchTopic, MAX_SEARCH_RESULTS,
    MIN_SEARCH_RESULTS,
};

/// Validated search parameters: the reformulated query plus provider options.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub options: SearchOptions,
}

impl SearchParams {
    /// Decode and validate raw extractor output.
    ///
    /// A missing or empty `query` is `NoValidInput`; any malformed option
    /// field is `InvalidParams` and invalidates the whole record.
    pub fn validate(raw: &Value) -> Result<Self, ScoutError> {
        let object = raw
            .as_object()
            .ok_or_else(|| ScoutError::InvalidParams("expected a JSON object".to_string()))?;

        let query = object
            .get("query")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ScoutError::NoValidInput("empty search query".to_string()))?
            .to_string();

        let mut options = SearchOptions::default();

        // The extractor is inconsistent about field names between revisions
        // of its template, so both aliases are accepted.
        if let Some(value) = object.get("maxResults").or_else(|| object.get("limit")) {
            let limit = parse_positive_int(value).ok_or_else(|| {
                ScoutError::InvalidParams(format!("maxResults must be a positive integer, got {}", value))
            })?;
            options.max_results =
                limit.clamp(MIN_SEARCH_RESULTS as u64, MAX_SEARCH_RESULTS as u64) as u8;
        }

        if let Some(value) = object.get("topic").or_else(|| object.get("type")) {
            let topic = value
                .as_str()
                .and_then(|s| s.parse::<SearchTopic>().ok())
                .ok_or_else(|| {
                    ScoutError::InvalidParams(format!("topic must be general or news, got {}", value))
                })?;
            options.topic = topic;
        }

        if let Some(value) = object.get("searchDepth") {
            let depth = value
                .as_str()
                .and_then(|s| s.parse::<SearchDepth>().ok())
                .ok_or_else(|| {
                    ScoutError::InvalidParams(format!("searchDepth must be basic or advanced, got {}", value))
                })?;
            options.search_depth = depth;
        }

        if let Some(value) = object.get("days") {
            let days = parse_positive_int(value).ok_or_else(|| {
                ScoutError::InvalidParams(format!("days must be a positive integer, got {}", value))
            })?;
            options.days = days as u32;
        }

        if let Some(include_answer) = object.get("includeAnswer").and_then(Value::as_bool) {
            options.include_answer = include_answer;
        }
        if let Some(include_images) = object.get("includeImages").and_then(Value::as_bool) {
            options.include_images = include_images;
        }
        // Anything else the extractor dreamt up is dropped, not propagated.

        Ok(Self { query, options })
    }
}

/// Normalized extract parameters: candidate URLs plus provider options.
#[derive(Debug, Clone, Default)]
pub struct ExtractParams {
    pub urls: Vec<String>,
    pub options: ExtractOptions,
}

impl ExtractParams {
    /// Normalize raw extractor output, substituting defaults per field.
    ///
    /// Total: garbage in any field degrades that field to its default, and
    /// absence of usable data yields `{urls: [], includeImages: false,
    /// extractDepth: basic}`. URL syntax is checked downstream.
    pub fn normalize(raw: &Value) -> Self {
        let mut params = Self::default();

        let Some(object) = raw.as_object() else {
            return params;
        };

        params.options.include_images = match object.get("includeImages") {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => s.to_lowercase() == "true",
            _ => false,
        };

        params.options.extract_depth = object
            .get("extractDepth")
            .and_then(Value::as_str)
            .and_then(|s| s.to_lowercase().parse::<ExtractDepth>().ok())
            .unwrap_or_default();

        if let Some(Value::Array(items)) = object.get("urls") {
            params.urls = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
        }

        params
    }
}

/// Accept a JSON integer or a numeric string, both required to be >= 1.
fn parse_positive_int(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().filter(|&n| n >= 1),
        Value::String(s) => s.trim().parse::<u64>().ok().filter(|&n| n >= 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_string_limit_normalizes_to_integer() {
        let params = SearchParams::validate(&json!({"query": "rust", "limit": "5"})).unwrap();
        assert_eq!(params.options.max_results, 5);

        let params = SearchParams::validate(&json!({"query": "rust", "maxResults": 3})).unwrap();
        assert_eq!(params.options.max_results, 3);
    }

    #[test]
    fn bad_limit_invalidates_the_record() {
        for bad in [json!("zero"), json!("0"), json!(-2), json!(1.5), json!(true)] {
            let raw = json!({"query": "rust", "limit": bad});
            assert!(matches!(
                SearchParams::validate(&raw),
                Err(ScoutError::InvalidParams(_))
            ));
        }
    }

    #[test]
    fn limit_is_clamped_to_provider_bounds() {
        let params = SearchParams::validate(&json!({"query": "rust", "limit": 50})).unwrap();
        assert_eq!(params.options.max_results, MAX_SEARCH_RESULTS);

        let params = SearchParams::validate(&json!({"query": "rust", "limit": 1})).unwrap();
        assert_eq!(params.options.max_results, MIN_SEARCH_RESULTS);
    }

    #[test]
    fn topic_accepts_only_known_literals() {
        let params = SearchParams::validate(&json!({"query": "q", "type": "news"})).unwrap();
        assert_eq!(params.options.topic, SearchTopic::News);

        let raw = json!({"query": "q", "topic": "sports"});
        assert!(matches!(
            SearchParams::validate(&raw),
            Err(ScoutError::InvalidParams(_))
        ));
    }

    #[test]
    fn search_depth_accepts_only_known_literals() {
        let params = SearchParams::validate(&json!({"query": "q", "searchDepth": "advanced"})).unwrap();
        assert_eq!(params.options.search_depth, SearchDepth::Advanced);

        let raw = json!({"query": "q", "searchDepth": "deep"});
        assert!(SearchParams::validate(&raw).is_err());
    }

    #[test]
    fn missing_query_is_no_valid_input() {
        for raw in [json!({}), json!({"query": ""}), json!({"query": "   "})] {
            assert!(matches!(
                SearchParams::validate(&raw),
                Err(ScoutError::NoValidInput(_))
            ));
        }
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let params =
            SearchParams::validate(&json!({"query": "q", "frobnicate": 42, "includeAnswer": false}))
                .unwrap();
        assert!(!params.options.include_answer);
        assert_eq!(params.options.max_results, 1);
    }

    #[test]
    fn include_images_truth_table() {
        let cases = [
            (json!({"includeImages": true}), true),
            (json!({"includeImages": false}), false),
            (json!({"includeImages": "true"}), true),
            (json!({"includeImages": "TRUE"}), true),
            (json!({"includeImages": "false"}), false),
            (json!({"includeImages": "yes"}), false),
            (json!({}), false),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                ExtractParams::normalize(&raw).options.include_images,
                expected,
                "input: {}",
                raw
            );
        }
    }

    #[test]
    fn extract_depth_coercion() {
        let cases = [
            (json!({"extractDepth": "basic"}), ExtractDepth::Basic),
            (json!({"extractDepth": "ADVANCED"}), ExtractDepth::Advanced),
            (json!({"extractDepth": "deep"}), ExtractDepth::Basic),
            (json!({}), ExtractDepth::Basic),
        ];
        for (raw, expected) in cases {
            assert_eq!(ExtractParams::normalize(&raw).options.extract_depth, expected);
        }
    }

    #[test]
    fn urls_kept_only_when_an_array_of_strings() {
        let params = ExtractParams::normalize(&json!({"urls": ["https://a.com", 7, "b"]}));
        assert_eq!(params.urls, vec!["https://a.com", "b"]);

        let params = ExtractParams::normalize(&json!({"urls": "https://a.com"}));
        assert!(params.urls.is_empty());

        let params = ExtractParams::normalize(&json!(null));
        assert!(params.urls.is_empty());
    }
}
