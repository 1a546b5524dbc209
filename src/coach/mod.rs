//! Coach strategies.
//!
//! A [`Coach`] turns a [`BiometricInput`] into [`Advice`]: the deterministic
//! plan plus a narrative. [`LocalCoach`] narrates with the plain-text report;
//! [`RemoteLlmCoach`] asks a chat-completions API and falls back to the local
//! narration on any failure.

mod local;
mod remote;

pub use local::LocalCoach;
pub use remote::{RemoteLlmCoach, RemoteLlmConfig, build_prompt, parse_completion};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{CoachConfig, CoachKind};
use crate::error::Result;
use crate::models::{BiometricInput, NutritionPlan};
use crate::planner::NutritionCalculator;

/// Where a narrative came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AdviceSource {
    Local,
    Remote { model: String },
}

/// A computed plan and its narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub plan: NutritionPlan,
    pub narrative: String,
    pub source: AdviceSource,
}

#[async_trait]
pub trait Coach: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Compute and narrate a plan.
    ///
    /// Fails only on invalid input; narration failures are absorbed.
    async fn advise(&self, input: &BiometricInput) -> Result<Advice>;
}

/// Build the coach selected by configuration.
pub fn build_coach(
    calculator: NutritionCalculator,
    config: &CoachConfig,
) -> Result<Arc<dyn Coach>> {
    let local = LocalCoach::new(calculator);
    match config.kind {
        CoachKind::Local => Ok(Arc::new(local)),
        CoachKind::Remote => {
            let remote = RemoteLlmCoach::new(RemoteLlmConfig::from(config), local)?;
            Ok(Arc::new(remote))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_coach_selects_kind() {
        let local = build_coach(NutritionCalculator::default(), &CoachConfig::default()).unwrap();
        assert_eq!(local.name(), "local");

        let config = CoachConfig {
            kind: CoachKind::Remote,
            ..Default::default()
        };
        let remote = build_coach(NutritionCalculator::default(), &config).unwrap();
        assert_eq!(remote.name(), "remote-llm");
    }

    #[test]
    fn test_advice_source_serialization() {
        let json = serde_json::to_value(AdviceSource::Remote {
            model: "m".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "remote");
        assert_eq!(json["model"], "m");
    }
}
