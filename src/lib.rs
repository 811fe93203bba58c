//! Corporate assistant - a serverless chat endpoint for AWS Lambda.
//!
//! One handler serves an API Gateway proxy integration:
//! 1. `OPTIONS` preflight and method filtering
//! 2. JSON body validation (`message`, optional `language`)
//! 3. An answer strategy chosen by configuration: an `OpenAI` chat completion,
//!    or a search-engine lookup that scrapes a few snippets
//! 4. A JSON envelope echoing the Lambda request id
//!
//! # Example
//!
//! ```no_run
//! use corp_assistant::api::ChatHandler;
//! use corp_assistant::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     corp_assistant::setup_logging();
//!
//!     let config = AppConfig {
//!         openai_api_key: Some("dummy_openai_key".to_string()),
//!         ..AppConfig::default()
//!     };
//!     let handler = ChatHandler::from_config(&config)?;
//!
//!     let event = serde_json::json!({
//!         "httpMethod": "POST",
//!         "body": "{\"message\": \"What is EBITDA?\", \"language\": \"en\"}"
//!     });
//!     let envelope = handler.handle(&event, "local-request").await;
//!     println!("{} {}", envelope.status_code, envelope.body);
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod search;
pub mod strategy;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Safe to call more than once; later calls are no-ops.
///
/// # Example
///
/// ```
/// corp_assistant::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
