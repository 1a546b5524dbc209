use proptest::prelude::*;

use diet_coach_rs::models::{ActivityLevel, BiometricInput, Goal};
use diet_coach_rs::planner::NutritionCalculator;

fn goal_strategy() -> impl Strategy<Value = Goal> {
    prop::sample::select(Goal::ALL.to_vec())
}

fn activity_strategy() -> impl Strategy<Value = ActivityLevel> {
    prop::sample::select(ActivityLevel::ALL.to_vec())
}

fn input_strategy() -> impl Strategy<Value = BiometricInput> {
    (
        140.0f64..210.0,
        40.0f64..150.0,
        18u32..80,
        goal_strategy(),
        activity_strategy(),
    )
        .prop_map(|(height, weight, age, goal, activity)| {
            BiometricInput::new(height, weight, goal)
                .with_age(age)
                .with_activity(activity)
        })
}

proptest! {
    #[test]
    fn protein_is_two_grams_per_kg(input in input_strategy()) {
        let calc = NutritionCalculator::default();
        let energy = calc.estimate_energy(&input).unwrap();
        let macros = calc.derive_macros(&energy, input.weight_kg);
        prop_assert_eq!(macros.protein_g, (2.0 * input.weight_kg).round() as u32);
    }

    #[test]
    fn macro_energy_matches_target(input in input_strategy()) {
        let calc = NutritionCalculator::default();
        let energy = calc.estimate_energy(&input).unwrap();
        let macros = calc.derive_macros(&energy, input.weight_kg);

        let diff = macros.kcal() as i64 - i64::from(energy.calorie_target);
        if macros.carbs_g == 0 {
            // Protein and fat alone already cover the target
            prop_assert!(diff >= -2);
        } else {
            prop_assert!(diff.abs() <= 4, "kcal {} vs target {}", macros.kcal(), energy.calorie_target);
        }
    }

    #[test]
    fn pipeline_is_idempotent(input in input_strategy()) {
        let calc = NutritionCalculator::default();
        prop_assert_eq!(calc.plan(&input).unwrap(), calc.plan(&input).unwrap());
    }

    #[test]
    fn meal_sums_equal_daily_totals(input in input_strategy(), meal_count in 1usize..8) {
        let calc = NutritionCalculator::default();
        let energy = calc.estimate_energy(&input).unwrap();
        let macros = calc.derive_macros(&energy, input.weight_kg);
        let split = calc.split_meals(&macros, meal_count).unwrap();

        prop_assert_eq!(split.len(), meal_count);
        let totals = split.totals();
        prop_assert_eq!(totals.protein_g, macros.protein_g);
        prop_assert_eq!(totals.carbs_g, macros.carbs_g);
        prop_assert_eq!(totals.fat_g, macros.fat_g);
    }

    #[test]
    fn cut_never_below_floor(
        height in 100.0f64..220.0,
        weight in 30.0f64..200.0,
        age in 1u32..110,
        activity in activity_strategy(),
    ) {
        let calc = NutritionCalculator::default();
        let input = BiometricInput::new(height, weight, Goal::Cut)
            .with_age(age)
            .with_activity(activity);
        let energy = calc.estimate_energy(&input).unwrap();
        prop_assert!(energy.calorie_target >= 1200);
    }

    #[test]
    fn portions_cover_every_meal(input in input_strategy()) {
        let plan = NutritionCalculator::default().plan(&input).unwrap();
        prop_assert_eq!(plan.portions.meals.len(), plan.meals.len());
        for (meal, portions) in plan.meals.meals.iter().zip(&plan.portions.meals) {
            prop_assert_eq!(meal.protein_g, portions.protein_g);
            prop_assert_eq!(meal.carbs_g, portions.carbs_g);
        }
        prop_assert_eq!(plan.portions.lines().len(), plan.meals.len());
    }
}
