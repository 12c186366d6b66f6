//! Actions
//!
//! The two capabilities exposed to the host runtime: web search and web
//! extract. Each runs one sequential pipeline per invocation and invokes
//! the host callback exactly once, whatever happens inside.

pub mod web_extract;
pub mod web_search;

use std::sync::Arc;

pub use web_extract::WebExtractAction;
pub use web_search::WebSearchAction;

use crate::ports::generator::TextGenerator;
use crate::ports::provider::SearchProvider;
use crate::ports::token_counter::TokenCounter;

/// Outcome category, computed before response shaping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// At least one usable result
    Success,
    /// Nothing usable came back (zero results, or zero valid URLs to begin with)
    NoResults,
    /// Validation, provider, or generation failure terminated the pipeline
    Error,
}

/// Final user-visible output, handed to the host callback
#[derive(Debug, Clone)]
pub struct ActionOutput {
    pub text: String,
    pub status: ActionStatus,
}

impl ActionOutput {
    pub fn new(text: impl Into<String>, status: ActionStatus) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }
}

/// Collaborator handles shared by the actions.
///
/// Constructed once per host session and injected; no ambient singletons.
pub struct ActionDeps {
    pub generator: Arc<dyn TextGenerator>,
    pub provider: Arc<dyn SearchProvider>,
    pub tokens: Arc<dyn TokenCounter>,
}

impl ActionDeps {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        provider: Arc<dyn SearchProvider>,
        tokens: Arc<dyn TokenCounter>,
    ) -> Self {
        Self {
            generator,
            provider,
            tokens,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Hand-written port stubs for pipeline tests.

    use std::sync::Arc;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::ActionDeps;
    use crate::domain::errors::ScoutError;
    use crate::domain::options::{ExtractOptions, SearchOptions};
    use crate::domain::response::{ExtractResponse, SearchResponse};
    use crate::ports::generator::{ModelClass, TextGenerator};
    use crate::ports::provider::SearchProvider;
    use crate::ports::token_counter::TokenCounter;

    /// Returns queued replies in order; errors once the queue is empty.
    pub struct StubGenerator {
        replies: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        pub fn new(replies: Vec<&str>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().rev().map(String::from).collect()),
            }
        }

        pub fn failing() -> Self {
            Self::new(vec![])
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str, _class: ModelClass) -> Result<String, ScoutError> {
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| ScoutError::Generation("stub generator exhausted".to_string()))
        }
    }

    /// Canned provider responses, with call recording for assertions.
    pub struct StubProvider {
        pub search_response: Option<Result<SearchResponse, String>>,
        pub extract_response: Option<Result<ExtractResponse, String>>,
        pub seen_queries: Mutex<Vec<String>>,
        pub seen_urls: Mutex<Vec<Vec<String>>>,
    }

    impl StubProvider {
        pub fn searching(response: SearchResponse) -> Self {
            Self {
                search_response: Some(Ok(response)),
                extract_response: None,
                seen_queries: Mutex::new(vec![]),
                seen_urls: Mutex::new(vec![]),
            }
        }

        pub fn extracting(response: ExtractResponse) -> Self {
            Self {
                search_response: None,
                extract_response: Some(Ok(response)),
                seen_queries: Mutex::new(vec![]),
                seen_urls: Mutex::new(vec![]),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                search_response: Some(Err(message.to_string())),
                extract_response: Some(Err(message.to_string())),
                seen_queries: Mutex::new(vec![]),
                seen_urls: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        async fn search(
            &self,
            query: &str,
            _options: &SearchOptions,
        ) -> Result<SearchResponse, ScoutError> {
            self.seen_queries.lock().unwrap().push(query.to_string());
            match &self.search_response {
                Some(Ok(response)) => Ok(response.clone()),
                Some(Err(message)) => Err(ScoutError::Provider(message.clone())),
                None => panic!("search not stubbed"),
            }
        }

        async fn extract(
            &self,
            urls: &[String],
            _options: &ExtractOptions,
        ) -> Result<ExtractResponse, ScoutError> {
            self.seen_urls.lock().unwrap().push(urls.to_vec());
            match &self.extract_response {
                Some(Ok(response)) => Ok(response.clone()),
                Some(Err(message)) => Err(ScoutError::Provider(message.clone())),
                None => panic!("extract not stubbed"),
            }
        }
    }

    /// Counter that never triggers truncation.
    pub struct NoopCounter;

    impl TokenCounter for NoopCounter {
        fn count(&self, _text: &str) -> usize {
            0
        }
    }

    pub fn deps(generator: StubGenerator, provider: StubProvider) -> Arc<ActionDeps> {
        Arc::new(ActionDeps::new(
            Arc::new(generator),
            Arc::new(provider),
            Arc::new(NoopCounter),
        ))
    }
}
