use dialoguer::{Input, Select};

use crate::error::Result;
use crate::interface::parse::{parse_age, parse_positive};
use crate::models::{ActivityLevel, Goal};

/// Height offered when the user just presses Enter.
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

/// Weight offered when the user just presses Enter.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Goal offered first.
pub const DEFAULT_GOAL: Goal = Goal::Cut;

/// Prompt for a positive number, re-asking until it parses.
fn prompt_positive(prompt: &str, field: &str, default: f64) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;

        match parse_positive(field, &input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for height in centimetres.
pub fn prompt_height() -> Result<f64> {
    prompt_positive("Height (cm)", "height", DEFAULT_HEIGHT_CM)
}

/// Prompt for weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    prompt_positive("Weight (kg)", "weight", DEFAULT_WEIGHT_KG)
}

/// Prompt for age; blank keeps the calculator default.
pub fn prompt_age(default_age: u32) -> Result<Option<u32>> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("Age (blank for {})", default_age))
            .allow_empty(true)
            .interact_text()?;

        match parse_age(&input) {
            Ok(age) => return Ok(age),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for the goal.
pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.as_str()).collect();
    let default = Goal::ALL
        .iter()
        .position(|g| *g == DEFAULT_GOAL)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for the activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.as_str()).collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|a| *a == ActivityLevel::default())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}
