mod biometrics;
mod plan;

pub use biometrics::{ActivityLevel, BiometricInput, Goal, MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG};
pub use plan::{
    EnergyEstimate, MacroPlan, MealMacros, MealPortions, MealSplit, NutritionPlan,
    PortionSuggestion,
};
