//! Web Extract Action
//!
//! Pipeline: extract candidate URLs and options from the message, filter to
//! syntactically valid URLs, call the extraction provider once for the whole
//! batch, shape the partitioned results with the medium model, truncate.

use std::fmt::Write as _;
use std::sync::Arc;

use super::{ActionDeps, ActionOutput, ActionStatus};
use crate::domain::errors::ScoutError;
use crate::domain::message::{MessageContext, QuerySource};
use crate::domain::params::ExtractParams;
use crate::domain::response::ExtractResponse;
use crate::domain::urls::filter_valid_urls;
use crate::ports::generator::ModelClass;
use crate::ports::token_counter::truncate_to_budget;
use crate::services::tokens::DEFAULT_MAX_EXTRACT_TOKENS;
use crate::templates::{parse_json_reply, render, EXTRACT_PARAMS_TEMPLATE, EXTRACT_RESPONSE_TEMPLATE};

pub const NO_VALID_URLS_TEXT: &str =
    "I could not find any valid URLs in your message. Please provide valid URLs starting with http:// or https://.";
pub const ALL_FAILED_TEXT: &str =
    "I could not extract content from the provided URLs. Please check that the URLs are accessible and try again.";

/// Web content extraction capability
pub struct WebExtractAction {
    deps: Arc<ActionDeps>,
    max_tokens: usize,
}

impl WebExtractAction {
    pub fn new(deps: Arc<ActionDeps>) -> Self {
        Self {
            deps,
            max_tokens: DEFAULT_MAX_EXTRACT_TOKENS,
        }
    }

    pub fn name(&self) -> &'static str {
        "WEB_EXTRACT"
    }

    pub fn similes(&self) -> &'static [&'static str] {
        &[
            "EXTRACT_FROM_WEB",
            "EXTRACT_FROM_URL",
            "EXTRACT_FROM_PAGE",
            "LOOKUP_URL",
            "LOOKUP_WEB_PAGE",
            "URL_EXTRACT",
            "WEB_EXTRACT_INFORMATION",
        ]
    }

    pub fn description(&self) -> &'static str {
        "Extract the content of web pages from URLs in the message."
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
        let Some(message) = context.effective_query(QuerySource::LastMessage) else {
            return ActionOutput::new(NO_VALID_URLS_TEXT, ActionStatus::NoResults);
        };

        let params = match self.extract_params(message).await {
            Ok(params) => params,
            Err(error @ ScoutError::Generation(_)) => {
                tracing::error!(%error, "extract parameter extraction failed");
                return error_output(&error);
            }
            Err(error) => {
                // Undecodable extractor output degrades to empty params and
                // is then reported as "no valid URLs" below.
                tracing::warn!(%error, "undecodable extract params");
                ExtractParams::default()
            }
        };

        let urls = filter_valid_urls(&params.urls);
        if urls.is_empty() {
            // Distinct from a provider failure: there was nothing to ask for.
            return ActionOutput::new(NO_VALID_URLS_TEXT, ActionStatus::NoResults);
        }

        let response = match self.deps.provider.extract(&urls, &params.options).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, url_count = urls.len(), "web extract failed");
                return error_output(&error);
            }
        };

        if response.results.is_empty() {
            return ActionOutput::new(ALL_FAILED_TEXT, ActionStatus::NoResults);
        }

        match self.shape_success(&response).await {
            Ok(text) => ActionOutput::new(text, ActionStatus::Success),
            Err(error) => {
                tracing::error!(%error, "extract response shaping failed");
                error_output(&error)
            }
        }
    }

    async fn extract_params(&self, message: &str) -> Result<ExtractParams, ScoutError> {
        let prompt = render(EXTRACT_PARAMS_TEMPLATE, &[("message", message)]);
        let reply = self.deps.generator.generate(&prompt, ModelClass::Small).await?;
        let raw = parse_json_reply(&reply)?;
        Ok(ExtractParams::normalize(&raw))
    }

    /// Shape a response with at least one success into the final text.
    /// Failed URLs are always reported alongside, never dropped.
    async fn shape_success(&self, response: &ExtractResponse) -> Result<String, ScoutError> {
        let mut sections = String::new();

        for (index, result) in response.results.iter().enumerate() {
            let _ = writeln!(sections, "URL {}: {}", index + 1, result.url);
            let _ = writeln!(sections, "Content: {}", result.raw_content);
            if !result.images.is_empty() {
                let _ = writeln!(sections, "Images: {} image(s) found", result.images.len());
            }
            sections.push_str("\n---\n\n");
        }

        if !response.failed_results.is_empty() {
            sections.push_str("URLs that could not be extracted:\n");
            for (index, result) in response.failed_results.iter().enumerate() {
                let _ = writeln!(sections, "URL {}: {} - Error: {}", index + 1, result.url, result.error);
            }
            sections.push_str("\n---\n\n");
        }

        let prompt = render(
            EXTRACT_RESPONSE_TEMPLATE,
            &[
                ("extraction_results", sections.as_str()),
                ("response_time", &format!("{:.2}", response.response_time)),
            ],
        );
        let prose = self.deps.generator.generate(&prompt, ModelClass::Medium).await?;

        Ok(truncate_to_budget(&prose, self.max_tokens, self.deps.tokens.as_ref()))
    }
}

fn error_output(error: &ScoutError) -> ActionOutput {
    ActionOutput::new(
        format!("An error occurred while extracting the URLs: {}", error),
        ActionStatus::Error,
    )
}
