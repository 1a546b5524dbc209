pub mod cli;
pub mod coach;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod web;

pub use error::{CoachError, LlmError, Result};
pub use models::{
    ActivityLevel, BiometricInput, EnergyEstimate, Goal, MacroPlan, MealMacros, MealPortions,
    MealSplit, NutritionPlan, PortionSuggestion,
};
pub use planner::{CalculatorConfig, NutritionCalculator};
