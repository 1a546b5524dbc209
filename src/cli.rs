use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Diet Coach: calorie, macro and meal-portion targets from a fixed formula.
#[derive(Parser, Debug)]
#[command(name = "diet-coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a plan and print it.
    Plan(PlanArgs),

    /// Serve the web form and JSON API.
    Serve {
        /// Host to bind (overrides configuration).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides configuration).
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Inputs for a single plan. Missing values are prompted for on a terminal
/// and defaulted otherwise.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Height in centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Goal: cut, bulk, maintain or recomp.
    #[arg(long)]
    pub goal: Option<String>,

    /// Activity level: sedentary, light, moderate, high or athlete.
    #[arg(long)]
    pub activity: Option<String>,

    /// Number of meals per day (overrides configuration).
    #[arg(long)]
    pub meals: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Narrate through the remote language-model coach.
    #[arg(long)]
    pub remote: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
