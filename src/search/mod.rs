//! Search-and-extract strategy
//!
//! Builds a results-page URL from the message, scrapes a few snippets and
//! formats them. Upstream failures degrade to a link-only answer; this
//! strategy never returns an error for them.

pub mod client;
pub mod compose;
pub mod extract;

use async_trait::async_trait;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::ChatRequest;
use crate::errors::HandlerError;
use crate::strategy::AnswerStrategy;

pub use client::SearchClient;
pub use extract::{RegexSnippetExtractor, SnippetExtractor};

pub struct SearchStrategy {
    client: SearchClient,
    terse: bool,
}

impl SearchStrategy {
    #[must_use]
    pub fn new(client: SearchClient, terse: bool) -> Self {
        Self { client, terse }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig, terse: bool) -> Result<Self, HandlerError> {
        let client = SearchClient::new(
            &config.search_url,
            config.search_timeout,
            Box::new(RegexSnippetExtractor),
        )?;
        Ok(Self::new(client, terse))
    }
}

#[async_trait]
impl AnswerStrategy for SearchStrategy {
    fn name(&self) -> &'static str {
        if self.terse { "search-terse" } else { "search" }
    }

    async fn answer(&self, request: &ChatRequest) -> Result<String, HandlerError> {
        let url = self.client.search_url(&request.message);
        info!(search_url = %url, "Searching");

        let snippets = self.client.fetch_snippets(&url).await;
        Ok(compose::compose_answer(
            &snippets,
            &url,
            request.language,
            self.terse,
        ))
    }
}
