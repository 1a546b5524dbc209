pub mod export;
pub mod parse;
pub mod prompts;
pub mod render;

pub use export::{save_plan_csv, write_json, write_plan_csv};
pub use parse::{parse_activity, parse_age, parse_goal, parse_positive};
pub use prompts::{prompt_activity, prompt_age, prompt_goal, prompt_height, prompt_weight};
pub use render::{daily_targets, explanation, per_meal, servings, text_report};
