//! Completion strategy backed by the `OpenAI` chat API

pub mod client;
pub mod prompt_builder;

use async_trait::async_trait;

use crate::core::config::AppConfig;
use crate::core::models::ChatRequest;
use crate::errors::HandlerError;
use crate::strategy::AnswerStrategy;

pub use client::LlmClient;

/// Forwards the message to the model and returns its answer unchanged.
pub struct CompletionStrategy {
    client: Option<LlmClient>,
}

impl CompletionStrategy {
    /// A missing API key is accepted here and reported on each request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, HandlerError> {
        let client = config
            .openai_api_key
            .clone()
            .map(|key| {
                LlmClient::new(
                    key,
                    config.openai_model.clone(),
                    &config.openai_base_url,
                    config.openai_timeout,
                )
            })
            .transpose()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl AnswerStrategy for CompletionStrategy {
    fn name(&self) -> &'static str {
        "completion"
    }

    async fn answer(&self, request: &ChatRequest) -> Result<String, HandlerError> {
        let client = self.client.as_ref().ok_or(HandlerError::ConfigurationMissing)?;
        let prompt = prompt_builder::build_prompt(&request.message, request.language);
        client.complete(&prompt).await
    }
}
