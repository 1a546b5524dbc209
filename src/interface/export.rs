use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::NutritionPlan;

/// Write the per-meal plan as CSV, one row per meal.
pub fn write_plan_csv<W: Write>(plan: &NutritionPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "meal",
        "protein_g",
        "carbs_g",
        "fat_g",
        "chicken_g",
        "paneer_g",
        "eggs",
        "rice_g",
    ])?;

    for (i, (meal, portions)) in plan
        .meals
        .meals
        .iter()
        .zip(&plan.portions.meals)
        .enumerate()
    {
        wtr.write_record([
            (i + 1).to_string(),
            meal.protein_g.to_string(),
            meal.carbs_g.to_string(),
            meal.fat_g.to_string(),
            portions.chicken_g.to_string(),
            portions.paneer_g.to_string(),
            portions.eggs.to_string(),
            portions.rice_g.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Save the per-meal plan as a CSV file.
pub fn save_plan_csv(plan: &NutritionPlan, path: &Path) -> Result<()> {
    write_plan_csv(plan, File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BiometricInput, Goal};
    use crate::planner::NutritionCalculator;
    use tempfile::NamedTempFile;

    fn reference_plan() -> NutritionPlan {
        NutritionCalculator::default()
            .plan(&BiometricInput::new(170.0, 70.0, Goal::Cut).with_age(30))
            .unwrap()
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_plan_csv(&reference_plan(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "meal,protein_g,carbs_g,fat_g,chicken_g,paneer_g,eggs,rice_g"
        );
        assert_eq!(lines[1], "1,39,53,13,126,217,7,189");
    }

    #[test]
    fn test_save_csv_file() {
        let file = NamedTempFile::new().unwrap();
        save_plan_csv(&reference_plan(), file.path()).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        assert_eq!(reader.records().count(), 4);
    }

    #[test]
    fn test_json_shape() {
        let plan = reference_plan();
        let mut buf = Vec::new();
        write_json(&plan, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["macros"]["calorie_target"], 1887);
        assert_eq!(value["input"]["goal"], "cut");
        assert_eq!(value["meals"]["meals"].as_array().unwrap().len(), 4);
        assert!(buf.ends_with(b"\n"));
    }
}
