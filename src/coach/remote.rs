//! Remote language-model coach.
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint (Groq by
//! default). The plan numbers are always computed locally and passed to the
//! model, which only writes the narrative. Any failure (missing key, timeout,
//! network, bad status, malformed body) is logged and answered with the
//! local advice instead.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coach::{Advice, AdviceSource, Coach, LocalCoach};
use crate::config::CoachConfig;
use crate::error::{LlmError, Result};
use crate::models::{BiometricInput, NutritionPlan};

const SYSTEM_PROMPT: &str = "You are a professional fitness and nutrition AI coach.";

/// Connection settings for the remote coach.
#[derive(Debug, Clone)]
pub struct RemoteLlmConfig {
    api_key: Option<Secret<String>>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl RemoteLlmConfig {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let defaults = CoachConfig::default();
        let timeout = defaults.timeout();
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()).map(Secret::new),
            base_url: base_url.into(),
            model: defaults.model,
            temperature: defaults.temperature,
            timeout,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl From<&CoachConfig> for RemoteLlmConfig {
    fn from(config: &CoachConfig) -> Self {
        let mut remote = RemoteLlmConfig::new(config.api_key.clone(), config.base_url.clone())
            .with_model(config.model.clone())
            .with_timeout(config.timeout());
        remote.temperature = config.temperature;
        remote
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// User prompt listing the stats and the locally computed targets.
pub fn build_prompt(plan: &NutritionPlan) -> String {
    let input = &plan.input;
    let macros = &plan.macros;
    format!(
        "User stats:\n\
Height: {} cm\n\
Weight: {} kg\n\
Age: {}\n\
Goal: {}\n\
Activity Level: {}\n\
\n\
Computed targets (use these exact numbers):\n\
Calories: {} kcal/day (activity multiplier {})\n\
Protein: {} g, Carbs: {} g, Fat: {} g\n\
Meals per day: {}\n\
\n\
Give me:\n\
1) 1 sample full-day Indian meal plan with exact quantities (grams) hitting these targets\n\
2) 1 sample gym workout plan (compound-focused)\n\
3) Explanation of why this plan fits the goal\n\
\n\
Return clean text. Do NOT hallucinate foods that don't exist in India.",
        input.height_cm,
        input.weight_kg,
        plan.energy.age,
        input.goal,
        input.activity_level,
        macros.calorie_target,
        plan.energy.activity_multiplier,
        macros.protein_g,
        macros.carbs_g,
        macros.fat_g,
        plan.meals.len()
    )
}

/// Extract `choices[0].message.content` from a chat-completions body.
pub fn parse_completion(body: &str) -> std::result::Result<String, LlmError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| LlmError::MalformedResponse("no completion content".to_string()))
}

/// Coach that narrates through a language model.
pub struct RemoteLlmCoach {
    config: RemoteLlmConfig,
    client: Client,
    fallback: LocalCoach,
}

impl RemoteLlmCoach {
    pub fn new(config: RemoteLlmConfig, fallback: LocalCoach) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::from)?;

        Ok(Self {
            config,
            client,
            fallback,
        })
    }

    async fn narrate(&self, plan: &NutritionPlan) -> std::result::Result<String, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(LlmError::MissingApiKey)?;

        let prompt = build_prompt(plan);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.config.temperature,
        };

        tokio::time::timeout(self.config.timeout, self.exchange(api_key, &request))
            .await
            .map_err(|_| LlmError::Timeout {
                timeout_ms: self.config.timeout.as_millis(),
            })?
    }

    /// One request/response round-trip, without the outer timeout.
    async fn exchange(
        &self,
        api_key: &Secret<String>,
        request: &ChatRequest<'_>,
    ) -> std::result::Result<String, LlmError> {
        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_completion(&body)
    }
}

#[async_trait]
impl Coach for RemoteLlmCoach {
    fn name(&self) -> &str {
        "remote-llm"
    }

    async fn advise(&self, input: &BiometricInput) -> Result<Advice> {
        let local = self.fallback.advise_now(input)?;

        match self.narrate(&local.plan).await {
            Ok(narrative) => {
                debug!(model = %self.config.model, "remote narration received");
                Ok(Advice {
                    plan: local.plan,
                    narrative,
                    source: AdviceSource::Remote {
                        model: self.config.model.clone(),
                    },
                })
            }
            Err(e) => {
                warn!(error = %e, "remote coach failed, using local narration");
                Ok(local)
            }
        }
    }
}
