use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::error::{CoachError, Result};
use crate::models::{ActivityLevel, Goal};

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Accepted spellings for each goal.
static GOAL_ALIASES: LazyLock<HashMap<&'static str, Goal>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("cut", Goal::Cut);
    m.insert("bulk", Goal::Bulk);
    m.insert("maintain", Goal::Maintain);
    m.insert("maintenance", Goal::Maintain);
    m.insert("recomp", Goal::Maintain);
    m
});

/// Accepted spellings for each activity level.
static ACTIVITY_ALIASES: LazyLock<HashMap<&'static str, ActivityLevel>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("sedentary", ActivityLevel::Sedentary);
    m.insert("light", ActivityLevel::Light);
    m.insert("moderate", ActivityLevel::Moderate);
    m.insert("high", ActivityLevel::High);
    m.insert("athlete", ActivityLevel::Athlete);
    m
});

/// Closest known alias, if any is similar enough.
fn closest<'a>(input: &str, known: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut candidates: Vec<(&str, f64)> = known
        .map(|k| (k, jaro_winkler(k, input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.first().map(|(k, _)| *k)
}

fn lookup<T: Copy>(
    field: &str,
    raw: &str,
    aliases: &HashMap<&'static str, T>,
    expected: &str,
) -> Result<T> {
    let key = raw.trim().to_lowercase();
    if let Some(value) = aliases.get(key.as_str()) {
        return Ok(*value);
    }

    let hint = closest(&key, aliases.keys().copied())
        .map(|k| format!(" (did you mean '{}'?)", k))
        .unwrap_or_default();

    Err(CoachError::invalid_input(format!(
        "unrecognized {} '{}'{}; expected one of {}",
        field,
        raw.trim(),
        hint,
        expected
    )))
}

/// Parse a goal, case-insensitively. "recomp" and "maintenance" map to
/// [`Goal::Maintain`].
pub fn parse_goal(raw: &str) -> Result<Goal> {
    lookup("goal", raw, &GOAL_ALIASES, "cut, bulk, maintain, recomp")
}

/// Parse an activity level, case-insensitively. Blank input yields the
/// default level.
pub fn parse_activity(raw: &str) -> Result<ActivityLevel> {
    if raw.trim().is_empty() {
        return Ok(ActivityLevel::default());
    }
    lookup(
        "activity level",
        raw,
        &ACTIVITY_ALIASES,
        "sedentary, light, moderate, high, athlete",
    )
}

/// Parse a strictly positive decimal field such as height or weight.
pub fn parse_positive(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        CoachError::invalid_input(format!("{} must be a number, got '{}'", field, raw.trim()))
    })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(CoachError::invalid_input(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(value)
}

/// Parse an optional age. Blank input means "use the default".
pub fn parse_age(raw: &str) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(0) | Err(_) => Err(CoachError::invalid_input(format!(
            "age must be a positive whole number, got '{}'",
            trimmed
        ))),
        Ok(age) => Ok(Some(age)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_goal_case_insensitive() {
        assert_eq!(parse_goal("CUT").unwrap(), Goal::Cut);
        assert_eq!(parse_goal(" bulk ").unwrap(), Goal::Bulk);
        assert_eq!(parse_goal("Recomp").unwrap(), Goal::Maintain);
        assert_eq!(parse_goal("maintain").unwrap(), Goal::Maintain);
    }

    #[test]
    fn test_parse_goal_hint() {
        let err = parse_goal("bulkk").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("did you mean 'bulk'"));

        let err = parse_goal("xyz").unwrap_err();
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn test_parse_activity() {
        assert_eq!(parse_activity("").unwrap(), ActivityLevel::Light);
        assert_eq!(parse_activity("Athlete").unwrap(), ActivityLevel::Athlete);
        assert!(parse_activity("couch").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("height", "170").unwrap(), 170.0);
        assert_eq!(parse_positive("weight", " 72.5 ").unwrap(), 72.5);
        assert!(parse_positive("height", "0").is_err());
        assert!(parse_positive("height", "-3").is_err());
        assert!(parse_positive("height", "tall").is_err());
        assert!(parse_positive("height", "inf").is_err());
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("").unwrap(), None);
        assert_eq!(parse_age("28").unwrap(), Some(28));
        assert!(parse_age("0").is_err());
        assert!(parse_age("-4").is_err());
        assert!(parse_age("old").is_err());
    }
}
