//! Request and response bodies for the web shim.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interface::parse::{parse_activity, parse_age, parse_goal, parse_positive};
use crate::models::BiometricInput;

/// Raw HTML form fields, kept as strings so the page can echo them back.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanForm {
    pub height: String,
    pub weight: String,
    pub age: String,
    pub goal: String,
    pub activity: String,
}

impl PlanForm {
    /// Values pre-filled on a fresh form.
    pub fn prefilled(default_age: u32) -> Self {
        Self {
            height: "170".to_string(),
            weight: "70".to_string(),
            age: default_age.to_string(),
            goal: "cut".to_string(),
            activity: "light".to_string(),
        }
    }

    /// Parse the form into validated input. Blank age and activity fall back
    /// to their defaults.
    pub fn to_input(&self) -> Result<BiometricInput> {
        let input = BiometricInput {
            height_cm: parse_positive("height", &self.height)?,
            weight_kg: parse_positive("weight", &self.weight)?,
            age: parse_age(&self.age)?,
            goal: parse_goal(&self.goal)?,
            activity_level: parse_activity(&self.activity)?,
        };
        input.validate()?;
        Ok(input)
    }
}

/// JSON body for `POST /api/plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub age: Option<u32>,
    pub goal: String,
    #[serde(default)]
    pub activity_level: Option<String>,
}

impl PlanRequest {
    pub fn to_input(&self) -> Result<BiometricInput> {
        let input = BiometricInput {
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            age: self.age,
            goal: parse_goal(&self.goal)?,
            activity_level: parse_activity(self.activity_level.as_deref().unwrap_or(""))?,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Error body for JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
