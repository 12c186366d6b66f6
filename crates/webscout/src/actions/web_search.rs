//! Web Search Action
//!
//! Pipeline: pick the effective query message, extract parameters with the
//! small model, validate, call the search provider, shape the response with
//! a second model call, truncate to the token budget.

use std::sync::Arc;

use serde_json::json;

use super::{ActionDeps, ActionOutput, ActionStatus};
use crate::domain::errors::ScoutError;
use crate::domain::message::{MessageContext, QuerySource};
use crate::domain::params::SearchParams;
use crate::domain::response::SearchResponse;
use crate::ports::generator::ModelClass;
use crate::ports::token_counter::truncate_to_budget;
use crate::services::tokens::DEFAULT_MAX_SEARCH_TOKENS;
use crate::templates::{parse_json_reply, render, SEARCH_PARAMS_TEMPLATE, SEARCH_RESPONSE_TEMPLATE};

pub const NO_RESULTS_TEXT: &str =
    "I could not find any relevant results for your search. Try rephrasing your request.";
pub const EMPTY_QUERY_TEXT: &str =
    "I could not work out what to search for. Please tell me what you are looking for.";

/// Web search capability
pub struct WebSearchAction {
    deps: Arc<ActionDeps>,
    query_source: QuerySource,
    max_tokens: usize,
}

impl WebSearchAction {
    pub fn new(deps: Arc<ActionDeps>) -> Self {
        Self {
            deps,
            query_source: QuerySource::default(),
            max_tokens: DEFAULT_MAX_SEARCH_TOKENS,
        }
    }

    /// Override which conversation message is treated as the query.
    pub fn with_query_source(mut self, source: QuerySource) -> Self {
        self.query_source = source;
        self
    }

    pub fn name(&self) -> &'static str {
        "WEB_SEARCH"
    }

    pub fn similes(&self) -> &'static [&'static str] {
        &[
            "SEARCH_WEB",
            "INTERNET_SEARCH",
            "LOOKUP",
            "QUERY_WEB",
            "FIND_ONLINE",
            "SEARCH_ENGINE",
            "WEB_LOOKUP",
            "ONLINE_SEARCH",
            "FIND_INFORMATION",
        ]
    }

    pub fn description(&self) -> &'static str {
        "Perform a web search to find information related to the message."
    }

    /// Availability gate for the host runtime: the action only advertises
    /// itself when the search provider has a usable credential.
    pub fn validate(&self) -> bool {
        self.deps.provider.is_available()
    }

    /// Run the pipeline and deliver the result through `callback`.
    ///
    /// The callback fires exactly once, for every path including failures.
    pub async fn handle<F>(&self, context: &MessageContext, callback: F)
    where
        F: FnOnce(ActionOutput),
    {
        callback(self.run(context).await);
    }

    async fn run(&self, context: &MessageContext) -> ActionOutput {
        let Some(message) = context.effective_query(self.query_source) else {
            return ActionOutput::new(EMPTY_QUERY_TEXT, ActionStatus::NoResults);
        };

        let params = match self.extract_params(message).await {
            Ok(params) => params,
            Err(error @ ScoutError::Generation(_)) => {
                tracing::error!(%error, "search parameter extraction failed");
                return error_output(&error);
            }
            Err(error) => {
                // Bad extractor output falls back to full defaults with the
                // raw message as query; it never kills the pipeline.
                tracing::warn!(%error, "invalid search params, using defaults");
                SearchParams {
                    query: message.to_string(),
                    options: Default::default(),
                }
            }
        };

        let response = match self
            .deps
            .provider
            .search(&params.query, &params.options)
            .await
        {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, query = %params.query, "web search failed");
                return error_output(&error);
            }
        };

        if response.results.is_empty() {
            return ActionOutput::new(NO_RESULTS_TEXT, ActionStatus::NoResults);
        }

        match self
            .shape_success(message, &response, params.options.max_results as usize)
            .await
        {
            Ok(text) => ActionOutput::new(text, ActionStatus::Success),
            Err(error) => {
                tracing::error!(%error, "search response shaping failed");
                error_output(&error)
            }
        }
    }

    async fn extract_params(&self, message: &str) -> Result<SearchParams, ScoutError> {
        let prompt = render(SEARCH_PARAMS_TEMPLATE, &[("message", message)]);
        let reply = self.deps.generator.generate(&prompt, ModelClass::Small).await?;
        let raw = parse_json_reply(&reply)?;
        SearchParams::validate(&raw)
    }

    /// Shape a non-empty response into the final text.
    ///
    /// Only the first `max_results` results (provider order) enter the
    /// formatting context; the source list is built in code so links never
    /// depend on the model transcribing URLs correctly.
    async fn shape_success(
        &self,
        message: &str,
        response: &SearchResponse,
        max_results: usize,
    ) -> Result<String, ScoutError> {
        let limited = &response.results[..max_results.min(response.results.len())];

        let search_context = json!({
            "query": response.query,
            "answer": response.answer,
            "results": limited,
        })
        .to_string();

        let prompt = render(
            SEARCH_RESPONSE_TEMPLATE,
            &[("message", message), ("search_response", &search_context)],
        );
        let prose = self.deps.generator.generate(&prompt, ModelClass::Small).await?;

        let mut text = prose.trim_end().to_string();
        text.push_str("\n\nSources:\n");
        for (index, result) in limited.iter().enumerate() {
            text.push_str(&format!("{}. [{}]({})\n", index + 1, result.title, result.url));
        }

        Ok(truncate_to_budget(&text, self.max_tokens, self.deps.tokens.as_ref()))
    }
}

fn error_output(error: &ScoutError) -> ActionOutput {
    ActionOutput::new(
        format!("An error occurred while searching the web: {}", error),
        ActionStatus::Error,
    )
}
