use crate::error::{CoachError, Result};
use crate::models::{MacroPlan, MealMacros, MealSplit};
use crate::planner::calculations::round_u32;

/// Split `total` into `parts` shares by integer division; the last share
/// absorbs the remainder so the shares always sum to `total`.
fn even_shares(total: u32, parts: usize) -> Vec<u32> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts as u32;
    let mut shares = vec![base; parts];
    if let Some(last) = shares.last_mut() {
        *last = total - base * (parts as u32 - 1);
    }
    shares
}

/// Distribute daily macros over `meal_count` meals.
///
/// The first (main) meal gets `main_meal_protein_share` of the protein and the
/// other meals split the rest evenly. Carbs and fat are split evenly across
/// all meals. In every field the last meal absorbs the integer-division
/// remainder, so per-meal sums equal the daily totals exactly.
pub fn split_meals(
    macros: &MacroPlan,
    meal_count: usize,
    main_meal_protein_share: f64,
) -> Result<MealSplit> {
    if meal_count == 0 {
        return Err(CoachError::invalid_input("meal count must be at least 1"));
    }

    let protein = if meal_count == 1 {
        vec![macros.protein_g]
    } else {
        let main = round_u32(f64::from(macros.protein_g) * main_meal_protein_share)
            .min(macros.protein_g);
        let mut shares = vec![main];
        shares.extend(even_shares(macros.protein_g - main, meal_count - 1));
        shares
    };
    let carbs = even_shares(macros.carbs_g, meal_count);
    let fat = even_shares(macros.fat_g, meal_count);

    let meals = protein
        .into_iter()
        .zip(carbs)
        .zip(fat)
        .map(|((protein_g, carbs_g), fat_g)| MealMacros {
            protein_g,
            carbs_g,
            fat_g,
        })
        .collect();

    Ok(MealSplit { meals })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_macros() -> MacroPlan {
        MacroPlan {
            calorie_target: 1887,
            protein_g: 140,
            fat_g: 52,
            carbs_g: 215,
        }
    }

    #[test]
    fn test_even_shares_remainder_goes_last() {
        assert_eq!(even_shares(215, 4), vec![53, 53, 53, 56]);
        assert_eq!(even_shares(3, 4), vec![0, 0, 0, 3]);
        assert_eq!(even_shares(8, 1), vec![8]);
        assert!(even_shares(8, 0).is_empty());
    }

    #[test]
    fn test_reference_split() {
        let split = split_meals(&reference_macros(), 4, 0.28).unwrap();
        let protein: Vec<u32> = split.meals.iter().map(|m| m.protein_g).collect();
        let carbs: Vec<u32> = split.meals.iter().map(|m| m.carbs_g).collect();
        let fat: Vec<u32> = split.meals.iter().map(|m| m.fat_g).collect();

        // main = round(140 * 0.28) = 39, rest 101 over 3 meals
        assert_eq!(protein, vec![39, 33, 33, 35]);
        assert_eq!(carbs, vec![53, 53, 53, 56]);
        assert_eq!(fat, vec![13, 13, 13, 13]);
    }

    #[test]
    fn test_single_meal_takes_everything() {
        let split = split_meals(&reference_macros(), 1, 0.28).unwrap();
        assert_eq!(split.len(), 1);
        assert_eq!(split.meals[0].protein_g, 140);
        assert_eq!(split.meals[0].carbs_g, 215);
        assert_eq!(split.meals[0].fat_g, 52);
    }

    #[test]
    fn test_two_meals() {
        let split = split_meals(&reference_macros(), 2, 0.28).unwrap();
        assert_eq!(split.meals[0].protein_g, 39);
        assert_eq!(split.meals[1].protein_g, 101);
    }

    #[test]
    fn test_zero_meals_rejected() {
        assert!(split_meals(&reference_macros(), 0, 0.28).is_err());
    }
}
