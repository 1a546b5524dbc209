use crate::models::{EnergyEstimate, MacroPlan, MealSplit, NutritionPlan, PortionSuggestion};

/// Disclaimer shown under every plan.
pub const DISCLAIMER: &str = "All food-portion numbers are approximate and for demo purposes. \
Protein/carbs/fat grams come from simple rules: protein = 2.0 g/kg bodyweight, \
fat = 25% calories, rest carbs.";

fn goal_adjustment_label(energy: &EnergyEstimate) -> String {
    if energy.goal_adjustment == 0.0 {
        "no adj".to_string()
    } else {
        format!("{:+.0} kcal", energy.goal_adjustment)
    }
}

/// How the calorie target was reached.
pub fn explanation(energy: &EnergyEstimate) -> String {
    let mut text = format!(
        "BMR estimate (age {}): {:.0} kcal. Activity multiplier used: {}. Goal adjustment: {}. \
Resulting calorie target = {} kcal/day.",
        energy.age,
        energy.bmr,
        energy.activity_multiplier,
        goal_adjustment_label(energy),
        energy.calorie_target
    );
    if energy.floor_applied {
        text.push_str(" (Raised to the calorie floor.)");
    }
    text
}

/// Daily calorie and macro totals.
pub fn daily_targets(macros: &MacroPlan) -> String {
    format!(
        "Calories: {} kcal/day\nProtein: {} g/day\nCarbs: {} g/day\nFat: {} g/day",
        macros.calorie_target, macros.protein_g, macros.carbs_g, macros.fat_g
    )
}

/// One line per meal with its macros.
pub fn per_meal(split: &MealSplit) -> String {
    split
        .meals
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "Meal {}: Protein {} g | Carbs {} g | Fat {} g",
                i + 1,
                m.protein_g,
                m.carbs_g,
                m.fat_g
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serving suggestions: whole-day chicken equivalent, then one line per meal.
pub fn servings(portions: &PortionSuggestion, macros: &MacroPlan) -> String {
    let mut lines = vec![
        format!(
            "Total protein target: {} g/day (≈ {} g chicken breast if all from chicken).",
            macros.protein_g, portions.total_chicken_g
        ),
        "Better to mix sources: example per-meal options (approx):".to_string(),
    ];
    lines.extend(portions.lines().into_iter().map(|l| format!(" {}", l)));
    lines.push(format!(
        "Total carbs: {} g/day. Total fat: {} g/day.",
        macros.carbs_g, macros.fat_g
    ));
    lines.join("\n")
}

/// The full plain-text report.
pub fn text_report(plan: &NutritionPlan) -> String {
    [
        "=== How the target was calculated ===".to_string(),
        explanation(&plan.energy),
        String::new(),
        "=== Daily target & macros ===".to_string(),
        daily_targets(&plan.macros),
        String::new(),
        "=== Per-meal split ===".to_string(),
        per_meal(&plan.meals),
        String::new(),
        "=== Serving suggestions ===".to_string(),
        servings(&plan.portions, &plan.macros),
        String::new(),
        format!("Note: {}", DISCLAIMER),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BiometricInput, Goal};
    use crate::planner::NutritionCalculator;

    fn reference_plan(goal: Goal) -> NutritionPlan {
        NutritionCalculator::default()
            .plan(&BiometricInput::new(170.0, 70.0, goal).with_age(30))
            .unwrap()
    }

    #[test]
    fn test_explanation_mentions_adjustment() {
        let cut = explanation(&reference_plan(Goal::Cut).energy);
        assert!(cut.contains("BMR estimate (age 30): 1694 kcal"));
        assert!(cut.contains("Activity multiplier used: 1.35"));
        assert!(cut.contains("-400 kcal"));
        assert!(cut.contains("1887 kcal/day"));

        let bulk = explanation(&reference_plan(Goal::Bulk).energy);
        assert!(bulk.contains("+300 kcal"));

        let maintain = explanation(&reference_plan(Goal::Maintain).energy);
        assert!(maintain.contains("no adj"));
    }

    #[test]
    fn test_per_meal_lines() {
        let text = per_meal(&reference_plan(Goal::Cut).meals);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Meal 1: Protein 39 g | Carbs 53 g | Fat 13 g");
        assert_eq!(lines[3], "Meal 4: Protein 35 g | Carbs 56 g | Fat 13 g");
    }

    #[test]
    fn test_text_report_is_deterministic() {
        let plan = reference_plan(Goal::Cut);
        assert_eq!(text_report(&plan), text_report(&plan.clone()));
        assert!(text_report(&plan).contains("Total protein target: 140 g/day"));
    }
}
