use tracing::debug;

use crate::error::{CoachError, Result};
use crate::models::{
    BiometricInput, EnergyEstimate, Goal, MacroPlan, MealSplit, NutritionPlan, PortionSuggestion,
};
use crate::planner::config::CalculatorConfig;
use crate::planner::constants::*;
use crate::planner::{meals, portions};

/// Basal Metabolic Rate via Mifflin-St Jeor.
///
/// Formula: 10 * weight_kg + 6.25 * height_cm - 5 * age + 5
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    MSJ_WEIGHT_COEF * weight_kg
        + MSJ_HEIGHT_COEF * height_cm
        + MSJ_AGE_COEF * f64::from(age)
        + MSJ_CONSTANT
}

/// Round a non-negative quantity to whole units.
pub(crate) fn round_u32(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Deterministic calorie, macro and meal calculator.
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// requests.
#[derive(Debug, Clone, Default)]
pub struct NutritionCalculator {
    config: CalculatorConfig,
}

impl NutritionCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Estimate BMR, activity multiplier and the daily calorie target.
    ///
    /// The adjusted expenditure is rounded up to the next whole kcal; a cut is
    /// clamped to the calorie floor.
    pub fn estimate_energy(&self, input: &BiometricInput) -> Result<EnergyEstimate> {
        input.validate()?;

        let age = input.age.unwrap_or(self.config.default_age);
        let bmr = mifflin_st_jeor(input.weight_kg, input.height_cm, age);
        let activity_multiplier = self.config.activity.for_level(input.activity_level);

        let goal_adjustment = match input.goal {
            Goal::Cut => -self.config.cut_deficit_kcal,
            Goal::Bulk => self.config.bulk_surplus_kcal,
            Goal::Maintain => 0.0,
        };

        // Nudge down so float noise on an exact integer does not round up.
        let adjusted = (bmr * activity_multiplier + goal_adjustment - 1e-9).ceil();
        let floor_applied = input.goal == Goal::Cut && adjusted < self.config.calorie_floor_kcal;
        let target = if floor_applied {
            self.config.calorie_floor_kcal.ceil()
        } else {
            adjusted
        };

        if !(target > 0.0) {
            return Err(CoachError::invalid_input(format!(
                "inputs produce a non-positive calorie target ({:.0} kcal)",
                target
            )));
        }

        let protein_g = (self.config.protein_g_per_kg * input.weight_kg).round();
        if target > f64::from(u32::MAX) || protein_g > f64::from(u32::MAX) {
            return Err(CoachError::invalid_input(format!(
                "inputs produce targets too large to represent ({:.0} kcal, {:.0} g protein)",
                target, protein_g
            )));
        }

        debug!(
            bmr,
            activity_multiplier, goal_adjustment, target, floor_applied, "estimated energy"
        );

        Ok(EnergyEstimate {
            bmr,
            age,
            activity_multiplier,
            goal_adjustment,
            calorie_target: target as u32,
            floor_applied,
        })
    }

    /// Split the calorie target into protein, fat and carbs.
    ///
    /// Protein is weight-driven, fat takes a fixed share of calories and carbs
    /// absorb the remainder. Carbs clamp to zero when protein and fat alone
    /// exceed the target.
    pub fn derive_macros(&self, energy: &EnergyEstimate, weight_kg: f64) -> MacroPlan {
        let target = f64::from(energy.calorie_target);

        let protein_g = round_u32(self.config.protein_g_per_kg * weight_kg);
        let fat_g = round_u32(self.config.fat_fraction * target / KCAL_PER_G_FAT);

        let remaining_kcal =
            target - f64::from(protein_g) * KCAL_PER_G_PROTEIN - f64::from(fat_g) * KCAL_PER_G_FAT;
        let carbs_g = round_u32(remaining_kcal / KCAL_PER_G_CARBS);

        MacroPlan {
            calorie_target: energy.calorie_target,
            protein_g,
            fat_g,
            carbs_g,
        }
    }

    /// Distribute daily macros over `meal_count` meals.
    pub fn split_meals(&self, macros: &MacroPlan, meal_count: usize) -> Result<MealSplit> {
        meals::split_meals(macros, meal_count, self.config.main_meal_protein_share)
    }

    /// Translate each meal into reference-food portions.
    pub fn suggest_portions(&self, split: &MealSplit) -> PortionSuggestion {
        portions::suggest_portions(split)
    }

    /// Run the full pipeline with the configured meal count.
    pub fn plan(&self, input: &BiometricInput) -> Result<NutritionPlan> {
        let energy = self.estimate_energy(input)?;
        let macros = self.derive_macros(&energy, input.weight_kg);
        let meals = self.split_meals(&macros, self.config.meal_count)?;
        let portions = self.suggest_portions(&meals);

        Ok(NutritionPlan {
            input: input.clone(),
            energy,
            macros,
            meals,
            portions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn reference_input(goal: Goal) -> BiometricInput {
        BiometricInput::new(170.0, 70.0, goal)
            .with_age(30)
            .with_activity(ActivityLevel::Light)
    }

    #[test]
    fn test_mifflin_st_jeor() {
        // 700 + 1062.5 - 150 + 5
        assert!((mifflin_st_jeor(70.0, 170.0, 30) - 1693.5).abs() < 1e-9);
    }

    #[test]
    fn test_cut_target() {
        let calc = NutritionCalculator::default();
        let energy = calc.estimate_energy(&reference_input(Goal::Cut)).unwrap();
        assert_eq!(energy.calorie_target, 1887);
        assert_eq!(energy.goal_adjustment, -400.0);
        assert!(!energy.floor_applied);
    }

    #[test]
    fn test_maintain_has_no_adjustment() {
        let calc = NutritionCalculator::default();
        let energy = calc
            .estimate_energy(&reference_input(Goal::Maintain))
            .unwrap();
        assert_eq!(energy.goal_adjustment, 0.0);
        assert_eq!(energy.calorie_target, 2287);
    }

    #[test]
    fn test_age_defaults_from_config() {
        let calc = NutritionCalculator::new(CalculatorConfig {
            default_age: 40,
            ..Default::default()
        });
        let energy = calc
            .estimate_energy(&BiometricInput::new(170.0, 70.0, Goal::Cut))
            .unwrap();
        assert_eq!(energy.age, 40);
        assert!((energy.bmr - 1643.5).abs() < 1e-9);
    }

    #[test]
    fn test_floor_applies_on_cut() {
        let calc = NutritionCalculator::default();
        let input = BiometricInput::new(120.0, 35.0, Goal::Cut)
            .with_age(80)
            .with_activity(ActivityLevel::Sedentary);
        let energy = calc.estimate_energy(&input).unwrap();
        assert_eq!(energy.calorie_target, 1200);
        assert!(energy.floor_applied);
    }

    #[test]
    fn test_carbs_clamp_to_zero() {
        let calc = NutritionCalculator::default();
        let energy = EnergyEstimate {
            bmr: 1000.0,
            age: 30,
            activity_multiplier: 1.2,
            goal_adjustment: -400.0,
            calorie_target: 1200,
            floor_applied: true,
        };
        let macros = calc.derive_macros(&energy, 150.0);
        assert_eq!(macros.protein_g, 300);
        assert_eq!(macros.carbs_g, 0);
    }

    #[test]
    fn test_invalid_height() {
        let calc = NutritionCalculator::default();
        let input = BiometricInput::new(0.0, 70.0, Goal::Cut);
        assert!(calc.estimate_energy(&input).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_unrepresentable_targets_are_rejected() {
        let surplus = NutritionCalculator::new(CalculatorConfig {
            bulk_surplus_kcal: 1e10,
            ..Default::default()
        });
        let err = surplus
            .estimate_energy(&reference_input(Goal::Bulk))
            .unwrap_err();
        assert!(err.is_invalid_input());

        let protein = NutritionCalculator::new(CalculatorConfig {
            protein_g_per_kg: 1e9,
            ..Default::default()
        });
        assert!(protein.plan(&reference_input(Goal::Cut)).is_err());
    }
}
