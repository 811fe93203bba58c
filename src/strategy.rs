//! Answer strategies: the single point where the handler reaches upstream.

use async_trait::async_trait;

use crate::ai::CompletionStrategy;
use crate::core::config::{AnswerStrategyKind, AppConfig};
use crate::core::models::ChatRequest;
use crate::errors::HandlerError;
use crate::search::SearchStrategy;

#[async_trait]
pub trait AnswerStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produces the final response text for a validated request.
    async fn answer(&self, request: &ChatRequest) -> Result<String, HandlerError>;
}

/// Builds the strategy selected by `config.strategy`.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built.
pub fn from_config(config: &AppConfig) -> Result<Box<dyn AnswerStrategy>, HandlerError> {
    let strategy: Box<dyn AnswerStrategy> = match config.strategy {
        AnswerStrategyKind::Completion => Box::new(CompletionStrategy::from_config(config)?),
        AnswerStrategyKind::Search => Box::new(SearchStrategy::from_config(config, false)?),
        AnswerStrategyKind::SearchTerse => Box::new(SearchStrategy::from_config(config, true)?),
    };
    Ok(strategy)
}
