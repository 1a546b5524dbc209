use crate::models::{MealPortions, MealSplit, PortionSuggestion};
use crate::planner::calculations::round_u32;
use crate::planner::constants::{
    CHICKEN_PROTEIN_PER_100G, EGG_PROTEIN_PER_UNIT, PANEER_PROTEIN_PER_100G, RICE_CARBS_PER_100G,
};

/// Grams of a food supplying `nutrient_g`, given its density per 100 g.
fn grams_for(nutrient_g: u32, per_100g: f64) -> u32 {
    round_u32(f64::from(nutrient_g) / per_100g * 100.0)
}

/// Reference-food equivalents for one meal.
pub fn meal_portions(protein_g: u32, carbs_g: u32) -> MealPortions {
    MealPortions {
        protein_g,
        chicken_g: grams_for(protein_g, CHICKEN_PROTEIN_PER_100G),
        paneer_g: grams_for(protein_g, PANEER_PROTEIN_PER_100G),
        eggs: round_u32(f64::from(protein_g) / EGG_PROTEIN_PER_UNIT),
        carbs_g,
        rice_g: grams_for(carbs_g, RICE_CARBS_PER_100G),
    }
}

/// Translate every meal of a split into reference-food portions.
pub fn suggest_portions(split: &MealSplit) -> PortionSuggestion {
    let meals = split
        .meals
        .iter()
        .map(|m| meal_portions(m.protein_g, m.carbs_g))
        .collect();

    PortionSuggestion {
        meals,
        total_chicken_g: grams_for(split.totals().protein_g, CHICKEN_PROTEIN_PER_100G),
    }
}
