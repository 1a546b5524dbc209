use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::BiometricInput;

/// Energy expenditure estimate for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate in kcal/day.
    pub bmr: f64,

    /// Age the BMR was computed with (after defaulting).
    pub age: u32,

    pub activity_multiplier: f64,

    /// Signed kcal applied for the goal (deficit is negative).
    pub goal_adjustment: f64,

    /// Daily calorie target in kcal.
    pub calorie_target: u32,

    /// Whether the calorie floor replaced a lower target.
    pub floor_applied: bool,
}

impl EnergyEstimate {
    /// Expenditure before the goal adjustment.
    pub fn maintenance_kcal(&self) -> f64 {
        self.bmr * self.activity_multiplier
    }
}

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPlan {
    pub calorie_target: u32,
    pub protein_g: u32,
    pub fat_g: u32,
    pub carbs_g: u32,
}

impl MacroPlan {
    /// Energy actually carried by the macros (4/9/4 kcal per gram).
    pub fn kcal(&self) -> u64 {
        u64::from(self.protein_g) * 4 + u64::from(self.fat_g) * 9 + u64::from(self.carbs_g) * 4
    }
}

/// Macros assigned to one meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealMacros {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Ordered per-meal distribution of a [`MacroPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSplit {
    pub meals: Vec<MealMacros>,
}

impl MealSplit {
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Field-wise sum across all meals.
    pub fn totals(&self) -> MealMacros {
        self.meals.iter().fold(MealMacros::default(), |acc, m| MealMacros {
            protein_g: acc.protein_g + m.protein_g,
            carbs_g: acc.carbs_g + m.carbs_g,
            fat_g: acc.fat_g + m.fat_g,
        })
    }
}

/// Reference-food equivalents for one meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPortions {
    pub protein_g: u32,
    pub chicken_g: u32,
    pub paneer_g: u32,
    pub eggs: u32,
    pub carbs_g: u32,
    pub rice_g: u32,
}

/// Reference-food equivalents for every meal of a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortionSuggestion {
    pub meals: Vec<MealPortions>,

    /// Whole-day protein expressed as chicken breast.
    pub total_chicken_g: u32,
}

impl PortionSuggestion {
    /// One deterministic line per meal.
    pub fn lines(&self) -> Vec<String> {
        self.meals
            .iter()
            .enumerate()
            .map(|(i, m)| {
                format!(
                    "Meal {}: ~{} g protein → ~{} g chicken OR {} eggs OR ~{} g paneer; ~{} g carbs → ~{} g cooked rice",
                    i + 1,
                    m.protein_g,
                    m.chicken_g,
                    m.eggs,
                    m.paneer_g,
                    m.carbs_g,
                    m.rice_g
                )
            })
            .collect()
    }
}

impl fmt::Display for PortionSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Everything derived for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub input: BiometricInput,
    pub energy: EnergyEstimate,
    pub macros: MacroPlan,
    pub meals: MealSplit,
    pub portions: PortionSuggestion,
}
