//! LLM (`OpenAI`) chat-completion client
//!
//! One request per invocation, no retries.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use openai_api_rs::v1::common::GPT3_5_TURBO;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::HandlerError;

pub const MAX_OUTPUT_TOKENS: u32 = 500;
pub const TEMPERATURE: f64 = 0.7;

pub struct LlmClient {
    http: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        model_name: Option<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, HandlerError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HandlerError::Http(format!("Failed to build OpenAI HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            model_name: model_name.unwrap_or_else(|| GPT3_5_TURBO.to_string()),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-2xx
    /// status, or the response carries no message content.
    pub async fn complete(&self, prompt: &[ChatCompletionMessage]) -> Result<String, HandlerError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            "Requesting chat completion with {} messages in prompt",
            prompt.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": messages_to_json(prompt),
            "max_tokens": MAX_OUTPUT_TOKENS,
            "temperature": TEMPERATURE,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| HandlerError::Http(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(HandlerError::Upstream(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            HandlerError::Upstream(format!("Failed to parse OpenAI response: {e}"))
        })?;

        debug!("Chat completion finished");

        extract_answer(&response_json)
            .ok_or_else(|| HandlerError::Upstream("No text in response".to_string()))
    }
}

fn messages_to_json(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };
            match &msg.content {
                Content::Text(text) => Some(json!({ "role": role_str, "content": text })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// `choices[0].message.content` of a chat-completion response.
#[must_use]
pub fn extract_answer(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(std::string::ToString::to_string)
}
