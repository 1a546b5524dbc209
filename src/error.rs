use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ConfigValidation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl CoachError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoachError::InvalidInput(message.into())
    }

    /// Whether this error should be shown to the user as a validation message.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoachError::InvalidInput(_))
    }
}

/// Failures of the remote language-model coach.
///
/// These never reach the user: the remote coach falls back to local narration.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u128 },

    #[error("network error: {0}")]
    Network(String),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            LlmError::Network(format!("connection failed: {}", e))
        } else {
            LlmError::Network(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
