//! Lambda request handler: method dispatch, validation, answer, envelope.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::dispatch::{Dispatch, dispatch};
use super::{parsing, response};
use crate::core::config::{AppConfig, JsonPolicy};
use crate::core::models::ResponseEnvelope;
use crate::errors::HandlerError;
use crate::strategy::{self, AnswerStrategy};

pub struct ChatHandler {
    json_policy: JsonPolicy,
    strategy: Box<dyn AnswerStrategy>,
}

impl ChatHandler {
    /// # Errors
    ///
    /// Returns an error if the configured strategy cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, HandlerError> {
        Ok(Self::new(config.json_policy, strategy::from_config(config)?))
    }

    #[must_use]
    pub fn new(json_policy: JsonPolicy, strategy: Box<dyn AnswerStrategy>) -> Self {
        Self {
            json_policy,
            strategy,
        }
    }

    /// Handles one API Gateway proxy event. Always produces an envelope.
    pub async fn handle(&self, event: &Value, request_id: &str) -> ResponseEnvelope {
        let method = parsing::event_method(event);

        match dispatch(method) {
            Dispatch::Preflight => return response::options_response(),
            Dispatch::Reject => {
                warn!(method = %method, "Rejecting unsupported method");
                return response::error_envelope(&HandlerError::MethodNotAllowed);
            }
            Dispatch::Proceed => {}
        }

        let body = parsing::extract_body(event);
        let request = match parsing::parse_chat_request(&body, self.json_policy) {
            Ok(r) => r,
            Err(e) => {
                warn!("Request validation failed: {}", e);
                return response::error_envelope(&e);
            }
        };

        info!(
            strategy = self.strategy.name(),
            language = ?request.language,
            message_chars = request.message.chars().count(),
            "Answering request"
        );

        match self.strategy.answer(&request).await {
            Ok(text) => response::ok_reply(&text, request_id),
            Err(e) => {
                error!(strategy = self.strategy.name(), "Failed to answer request: {}", e);
                response::error_envelope(&e)
            }
        }
    }

    /// Lambda entry point; echoes the invocation's request id.
    ///
    /// # Errors
    ///
    /// Never fails in practice: every outcome is encoded in the envelope.
    #[tracing::instrument(level = "info", skip(self, event), fields(request_id = %event.context.request_id))]
    pub async fn function_handler(
        &self,
        event: LambdaEvent<Value>,
    ) -> Result<ResponseEnvelope, Error> {
        let (payload, context) = event.into_parts();
        Ok(self.handle(&payload, &context.request_id).await)
    }
}
