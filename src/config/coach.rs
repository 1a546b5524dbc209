use std::time::Duration;

use serde::Deserialize;

use crate::error::{CoachError, Result};

/// Which coach narrates plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachKind {
    /// Deterministic text report only.
    #[default]
    Local,
    /// Language-model narration with local fallback.
    Remote,
}

/// Remote coach settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub kind: CoachKind,

    /// API key for the chat-completions endpoint.
    pub api_key: Option<String>,

    /// OpenAI-compatible base URL (without `/chat/completions`).
    pub base_url: String,

    pub model: String,
    pub temperature: f32,

    /// Upper bound on the whole remote exchange.
    pub timeout_secs: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            kind: CoachKind::Local,
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama3-8b-8192".to_string(),
            temperature: 0.4,
            timeout_secs: 20,
        }
    }
}

impl CoachConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    /// A missing API key is not an error: the remote coach falls back.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(CoachError::ConfigValidation(
                "coach timeout must be at least one second".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CoachError::ConfigValidation(
                "coach temperature must lie between 0 and 2".to_string(),
            ));
        }
        if self.kind == CoachKind::Remote && self.base_url.trim().is_empty() {
            return Err(CoachError::ConfigValidation(
                "remote coach needs a base_url".to_string(),
            ));
        }
        Ok(())
    }
}
