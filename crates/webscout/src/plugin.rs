//! Plugin Assembly
//!
//! Wires the collaborators into the two actions. One plugin instance is
//! constructed per host session and injected where needed; there are no
//! module-level singletons.

use std::sync::Arc;

use crate::actions::{ActionDeps, WebExtractAction, WebSearchAction};
use crate::config::ScoutConfig;
use crate::domain::errors::ScoutError;
use crate::ports::generator::TextGenerator;
use crate::ports::provider::SearchProvider;
use crate::ports::token_counter::TokenCounter;
use crate::services::{GeminiGenerator, HeuristicTokenCounter, TavilyClient};

/// Web search and extraction plugin
pub struct WebScoutPlugin {
    pub search: WebSearchAction,
    pub extract: WebExtractAction,
}

impl std::fmt::Debug for WebScoutPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebScoutPlugin").finish_non_exhaustive()
    }
}

impl WebScoutPlugin {
    pub fn name(&self) -> &'static str {
        "webscout"
    }

    pub fn description(&self) -> &'static str {
        "Search the web and extract page content"
    }

    /// Assemble from explicit collaborator handles.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        provider: Arc<dyn SearchProvider>,
        tokens: Arc<dyn TokenCounter>,
    ) -> Self {
        let deps = Arc::new(ActionDeps::new(generator, provider, tokens));
        Self {
            search: WebSearchAction::new(deps.clone()),
            extract: WebExtractAction::new(deps),
        }
    }

    /// Assemble with the packaged Tavily and Gemini adapters.
    ///
    /// Fails fast on missing credentials; nothing network-facing is built
    /// until configuration is known good.
    pub fn from_config(config: &ScoutConfig) -> Result<Self, ScoutError> {
        if config.tavily_api_key.trim().is_empty() {
            return Err(ScoutError::missing_setting(crate::config::TAVILY_API_KEY));
        }
        if config.gemini_api_key.trim().is_empty() {
            return Err(ScoutError::missing_setting(crate::config::GEMINI_API_KEY));
        }

        tracing::info!("webscout plugin initialized");

        Ok(Self::new(
            Arc::new(GeminiGenerator::new(config.gemini_api_key.clone())),
            Arc::new(TavilyClient::new(config.tavily_api_key.clone())),
            Arc::new(HeuristicTokenCounter),
        ))
    }
}
