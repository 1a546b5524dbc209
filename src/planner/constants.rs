// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor (fixed male constant; sex is not modelled)
// ─────────────────────────────────────────────────────────────────────────────

pub const MSJ_WEIGHT_COEF: f64 = 10.0;
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
pub const MSJ_AGE_COEF: f64 = -5.0;
pub const MSJ_CONSTANT: f64 = 5.0;

/// Age used when the request does not carry one.
pub const DEFAULT_AGE: u32 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.35;
pub const MODERATE_MULT: f64 = 1.55;
pub const HIGH_MULT: f64 = 1.725;
pub const ATHLETE_MULT: f64 = 1.9;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// Deficit subtracted for a cut.
pub const CUT_DEFICIT_KCAL: f64 = 400.0;

/// Surplus added for a bulk.
pub const BULK_SURPLUS_KCAL: f64 = 300.0;

/// A cut never targets fewer calories than this.
pub const CALORIE_FLOOR_KCAL: f64 = 1200.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macros
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Protein per kg bodyweight, independent of goal.
pub const PROTEIN_G_PER_KG: f64 = 2.0;

/// Share of the calorie target allotted to fat.
pub const FAT_FRACTION: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Meals and portions
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_MEAL_COUNT: usize = 4;

/// Share of daily protein given to the first (main) meal.
pub const MAIN_MEAL_PROTEIN_SHARE: f64 = 0.28;

/// Protein grams per 100 g cooked chicken breast.
pub const CHICKEN_PROTEIN_PER_100G: f64 = 31.0;

/// Protein grams per 100 g paneer.
pub const PANEER_PROTEIN_PER_100G: f64 = 18.0;

/// Protein grams per whole egg.
pub const EGG_PROTEIN_PER_UNIT: f64 = 6.0;

/// Carb grams per 100 g cooked rice.
pub const RICE_CARBS_PER_100G: f64 = 28.0;
