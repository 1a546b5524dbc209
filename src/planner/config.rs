use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::models::ActivityLevel;
use crate::planner::constants::{
    ATHLETE_MULT, BULK_SURPLUS_KCAL, CALORIE_FLOOR_KCAL, CUT_DEFICIT_KCAL, DEFAULT_AGE,
    DEFAULT_MEAL_COUNT, FAT_FRACTION, HIGH_MULT, LIGHT_MULT, MAIN_MEAL_PROTEIN_SHARE,
    MODERATE_MULT, PROTEIN_G_PER_KG, SEDENTARY_MULT,
};

/// Multiplier per activity level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityMultipliers {
    pub sedentary: f64,
    pub light: f64,
    pub moderate: f64,
    pub high: f64,
    pub athlete: f64,
}

impl Default for ActivityMultipliers {
    fn default() -> Self {
        Self {
            sedentary: SEDENTARY_MULT,
            light: LIGHT_MULT,
            moderate: MODERATE_MULT,
            high: HIGH_MULT,
            athlete: ATHLETE_MULT,
        }
    }
}

impl ActivityMultipliers {
    pub fn for_level(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::High => self.high,
            ActivityLevel::Athlete => self.athlete,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (ActivityLevel, f64)> + '_ {
        ActivityLevel::ALL
            .into_iter()
            .map(move |level| (level, self.for_level(level)))
    }
}

/// Runtime-configurable calculator constants.
///
/// Defaults are the canonical demo values; every field can be overridden
/// through [`crate::config::AppConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub default_age: u32,
    pub cut_deficit_kcal: f64,
    pub bulk_surplus_kcal: f64,
    pub calorie_floor_kcal: f64,
    pub protein_g_per_kg: f64,
    pub fat_fraction: f64,
    pub main_meal_protein_share: f64,
    pub meal_count: usize,
    pub activity: ActivityMultipliers,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_age: DEFAULT_AGE,
            cut_deficit_kcal: CUT_DEFICIT_KCAL,
            bulk_surplus_kcal: BULK_SURPLUS_KCAL,
            calorie_floor_kcal: CALORIE_FLOOR_KCAL,
            protein_g_per_kg: PROTEIN_G_PER_KG,
            fat_fraction: FAT_FRACTION,
            main_meal_protein_share: MAIN_MEAL_PROTEIN_SHARE,
            meal_count: DEFAULT_MEAL_COUNT,
            activity: ActivityMultipliers::default(),
        }
    }
}

impl CalculatorConfig {
    /// Copy with a different meal count.
    pub fn with_meal_count(mut self, meal_count: usize) -> Self {
        self.meal_count = meal_count;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_age == 0 {
            return Err(invalid("default_age must be positive"));
        }
        if self.cut_deficit_kcal < 0.0 || self.bulk_surplus_kcal < 0.0 {
            return Err(invalid("cut deficit and bulk surplus must not be negative"));
        }
        if self.calorie_floor_kcal < 0.0 {
            return Err(invalid("calorie floor must not be negative"));
        }
        if self.protein_g_per_kg <= 0.0 {
            return Err(invalid("protein_g_per_kg must be positive"));
        }
        if !(self.fat_fraction > 0.0 && self.fat_fraction < 1.0) {
            return Err(invalid("fat_fraction must lie strictly between 0 and 1"));
        }
        if !(0.0..=1.0).contains(&self.main_meal_protein_share) {
            return Err(invalid("main_meal_protein_share must lie between 0 and 1"));
        }
        if self.meal_count == 0 {
            return Err(invalid("meal_count must be at least 1"));
        }
        if let Some((level, _)) = self.activity.iter().find(|(_, m)| !(*m > 0.0)) {
            return Err(invalid(&format!("activity multiplier for {} must be positive", level)));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> CoachError {
    CoachError::ConfigValidation(message.to_string())
}
