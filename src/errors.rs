use thiserror::Error;

/// Public message returned for every upstream failure on the completion path.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to get a response from the AI service";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Malformed body reported with the parser's own text.
    #[error("{0}")]
    BodyParse(String),

    #[error("Message is required")]
    MissingMessage,

    #[error("OpenAI API key not configured")]
    ConfigurationMissing,

    #[error("Failed to access OpenAI API: {0}")]
    Upstream(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl HandlerError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MethodNotAllowed => 405,
            HandlerError::InvalidJson(_) | HandlerError::MissingMessage => 400,
            HandlerError::ConfigurationMissing
            | HandlerError::BodyParse(_)
            | HandlerError::Upstream(_)
            | HandlerError::Http(_) => 500,
        }
    }

    /// Message safe to show to the caller. Upstream detail stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            HandlerError::BodyParse(detail) => detail.clone(),
            HandlerError::Upstream(_) | HandlerError::Http(_) => {
                UPSTREAM_FAILURE_MESSAGE.to_string()
            }
            HandlerError::InvalidJson(_) => "Invalid JSON".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for HandlerError {
    fn from(error: reqwest::Error) -> Self {
        HandlerError::Http(error.to_string())
    }
}
