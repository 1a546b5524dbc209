//! Application configuration
//!
//! Loaded once at process start from environment variables (and a `.env`
//! file when present) with the `DIET_COACH` prefix; nested values use `__`
//! as separator, e.g. `DIET_COACH__CALCULATOR__CUT_DEFICIT_KCAL=500`.
//! The bare `PORT` and `GROQ_API_KEY` variables are honoured as defaults.
//!
//! Nothing below [`AppConfig`] reads the environment on its own.

mod coach;
mod server;

pub use coach::{CoachConfig, CoachKind};
pub use server::ServerConfig;

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Result;
use crate::planner::CalculatorConfig;

const ENV_PREFIX: &str = "DIET_COACH";

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub calculator: CalculatorConfig,
    pub coach: CoachConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Config` when a value cannot be parsed into its
    /// expected type.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(std::env::vars().collect())
    }

    /// Load configuration from an explicit set of environment variables.
    ///
    /// Prefixed variables win over the bare `PORT` and `GROQ_API_KEY`.
    pub fn load_from(env: HashMap<String, String>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(port) = env.get("PORT") {
            builder = builder.set_default("server.port", port.as_str())?;
        }
        if let Some(key) = env.get("GROQ_API_KEY") {
            builder = builder.set_default("coach.api_key", key.as_str())?;
        }

        let config = builder
            .add_source(
                ::config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__")
                    .source(Some(env)),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.calculator.validate()?;
        self.coach.validate()?;
        Ok(())
    }
}
