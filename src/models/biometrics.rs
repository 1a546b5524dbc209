use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Largest accepted height.
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Largest accepted weight.
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Largest accepted age.
pub const MAX_AGE: u32 = 130;

/// Dietary goal driving the calorie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric deficit.
    Cut,
    /// Caloric surplus.
    Bulk,
    /// Caloric parity. Body recomposition is treated the same way.
    #[serde(alias = "recomp")]
    Maintain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Bulk, Goal::Maintain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Bulk => "bulk",
            Goal::Maintain => "maintain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily activity level, scaling BMR into expenditure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Light,
    Moderate,
    High,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::Athlete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
            ActivityLevel::Athlete => "athlete",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biometric inputs for a single plan request.
///
/// `age` is optional; the calculator substitutes its configured default
/// (30 unless overridden) when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub age: Option<u32>,
    pub goal: Goal,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl BiometricInput {
    pub fn new(height_cm: f64, weight_kg: f64, goal: Goal) -> Self {
        Self {
            height_cm,
            weight_kg,
            age: None,
            goal,
            activity_level: ActivityLevel::default(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_activity(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Reject body measurements outside `(0, MAX]`, non-finite values and
    /// an age outside `1..=MAX_AGE`.
    pub fn validate(&self) -> Result<()> {
        if !(self.height_cm > 0.0 && self.height_cm <= MAX_HEIGHT_CM) {
            return Err(CoachError::invalid_input(format!(
                "height must be between 0 and {} cm, got {}",
                MAX_HEIGHT_CM, self.height_cm
            )));
        }
        if !(self.weight_kg > 0.0 && self.weight_kg <= MAX_WEIGHT_KG) {
            return Err(CoachError::invalid_input(format!(
                "weight must be between 0 and {} kg, got {}",
                MAX_WEIGHT_KG, self.weight_kg
            )));
        }
        if let Some(age) = self.age {
            if age == 0 || age > MAX_AGE {
                return Err(CoachError::invalid_input(format!(
                    "age must be between 1 and {}, got {}",
                    MAX_AGE, age
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = BiometricInput::new(170.0, 70.0, Goal::Cut);
        assert_eq!(input.age, None);
        assert_eq!(input.activity_level, ActivityLevel::Light);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(BiometricInput::new(0.0, 70.0, Goal::Cut).validate().is_err());
        assert!(BiometricInput::new(170.0, -1.0, Goal::Cut).validate().is_err());
        assert!(BiometricInput::new(f64::NAN, 70.0, Goal::Cut).validate().is_err());
        assert!(
            BiometricInput::new(170.0, 70.0, Goal::Cut)
                .with_age(0)
                .validate()
                .is_err()
        );
        assert!(BiometricInput::new(170.0, 70.0, Goal::Bulk).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(BiometricInput::new(170.0, 1e10, Goal::Bulk).validate().is_err());
        assert!(BiometricInput::new(f64::INFINITY, 70.0, Goal::Cut).validate().is_err());
        assert!(BiometricInput::new(301.0, 70.0, Goal::Cut).validate().is_err());
        assert!(
            BiometricInput::new(170.0, 70.0, Goal::Cut)
                .with_age(MAX_AGE + 1)
                .validate()
                .is_err()
        );
        assert!(
            BiometricInput::new(MAX_HEIGHT_CM, MAX_WEIGHT_KG, Goal::Bulk)
                .with_age(MAX_AGE)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_recomp_deserializes_as_maintain() {
        let goal: Goal = serde_json::from_str("\"recomp\"").unwrap();
        assert_eq!(goal, Goal::Maintain);
    }
}
