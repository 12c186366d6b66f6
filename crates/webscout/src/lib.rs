//! Webscout
//!
//! Web search and content extraction plugin for conversational agents. Two
//! actions, one pipeline shape:
//!
//! ```text
//! message -> parameter extraction (LLM) -> validation/normalization
//!         -> provider call -> response shaping (LLM) -> token truncation
//!         -> one output callback
//! ```
//!
//! # Architecture
//!
//! - **Domain** (`domain/`): option and response records, parameter
//!   validation, URL filtering, errors. Pure, no I/O.
//! - **Ports** (`ports/`): traits for the external collaborators - the
//!   text-generation model, the search/extract provider, the tokenizer.
//! - **Services** (`services/`): packaged adapters (Tavily, Gemini) and the
//!   default token counter.
//! - **Actions** (`actions/`): the two pipelines, each delivering exactly
//!   one callback per invocation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use webscout::{ScoutConfig, WebScoutPlugin};
//! use webscout::domain::{ConversationMessage, MessageContext};
//!
//! let plugin = WebScoutPlugin::from_config(&ScoutConfig::from_env()?)?;
//! let context = MessageContext::new(vec![ConversationMessage::user(
//!     "Find the latest news about SpaceX launches",
//! )]);
//! plugin.search.handle(&context, |output| println!("{}", output.text)).await;
//! ```

pub mod actions;
pub mod config;
pub mod domain;
pub mod plugin;
pub mod ports;
pub mod services;
pub mod templates;

// Re-export commonly used types
pub use actions::{ActionOutput, ActionStatus, WebExtractAction, WebSearchAction};
pub use config::ScoutConfig;
pub use domain::{
    ConversationMessage, ExtractOptions, ExtractResponse, MessageContext, QuerySource, ScoutError,
    SearchOptions, SearchResponse,
};
pub use plugin::WebScoutPlugin;
pub use ports::{ModelClass, SearchProvider, TextGenerator, TokenCounter};
pub use services::{GeminiGenerator, HeuristicTokenCounter, TavilyClient};
