//! Search results page fetcher

use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use super::extract::SnippetExtractor;
use crate::errors::HandlerError;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct SearchClient {
    http: Client,
    search_url: String,
    extractor: Box<dyn SnippetExtractor>,
}

impl SearchClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        search_url: &str,
        timeout: Duration,
        extractor: Box<dyn SnippetExtractor>,
    ) -> Result<Self, HandlerError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| HandlerError::Http(format!("Failed to build search HTTP client: {e}")))?;

        Ok(Self {
            http,
            search_url: search_url.to_string(),
            extractor,
        })
    }

    /// Results page URL for `query`.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!("{}?text={}", self.search_url, urlencoding::encode(query))
    }

    /// Fetches `url` and extracts snippets. Never fails: any transport or
    /// status error yields an empty list.
    pub async fn fetch_snippets(&self, url: &str) -> Vec<String> {
        match self.fetch_page(url).await {
            Ok(html) => {
                let snippets = self.extractor.extract(&html);
                info!(count = snippets.len(), "Extracted search snippets");
                snippets
            }
            Err(e) => {
                warn!("Search request failed, falling back to link-only answer: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, HandlerError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HandlerError::Http(format!(
                "search engine returned status {status}"
            )));
        }

        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
