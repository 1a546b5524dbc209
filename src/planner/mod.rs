pub mod calculations;
pub mod config;
pub mod constants;
pub mod meals;
pub mod portions;

pub use calculations::{NutritionCalculator, mifflin_st_jeor};
pub use config::{ActivityMultipliers, CalculatorConfig};
pub use constants::*;
pub use meals::split_meals;
pub use portions::{meal_portions, suggest_portions};
