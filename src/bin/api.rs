use corp_assistant::api::ChatHandler;
use corp_assistant::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    corp_assistant::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    if config.openai_api_key.is_none() {
        info!("OPENAI_API_KEY is not set; completion requests will be rejected");
    }

    let handler = ChatHandler::from_config(&config).map_err(|e| {
        error!("Failed to build handler: {}", e);
        Error::from(e.to_string())
    })?;
    info!(strategy = ?config.strategy, json_policy = ?config.json_policy, "Handler ready");

    let handler = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler.function_handler(event).await
    }))
    .await
}
