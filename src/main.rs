use std::fs::File;
use std::io::{self, IsTerminal, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use diet_coach_rs::cli::{Cli, Command, OutputFormat, PlanArgs};
use diet_coach_rs::coach::{Advice, AdviceSource, build_coach};
use diet_coach_rs::config::{AppConfig, CoachKind};
use diet_coach_rs::error::Result;
use diet_coach_rs::interface::prompts::{
    DEFAULT_GOAL, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG, prompt_activity, prompt_age, prompt_goal,
    prompt_height, prompt_weight,
};
use diet_coach_rs::interface::{
    parse_activity, parse_goal, text_report, write_json, write_plan_csv,
};
use diet_coach_rs::models::{ActivityLevel, BiometricInput};
use diet_coach_rs::planner::NutritionCalculator;
use diet_coach_rs::web::{self, AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server.log_level);

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(config, args).await,
        Command::Serve { host, port } => cmd_serve(config, host, port).await,
    }
}

/// Fill in values missing from the command line.
fn collect_input(args: &PlanArgs, default_age: u32) -> Result<BiometricInput> {
    let interactive = io::stdin().is_terminal();

    let height_cm = match args.height {
        Some(h) => h,
        None if interactive => prompt_height()?,
        None => DEFAULT_HEIGHT_CM,
    };
    let weight_kg = match args.weight {
        Some(w) => w,
        None if interactive => prompt_weight()?,
        None => DEFAULT_WEIGHT_KG,
    };
    let age = match args.age {
        Some(a) => Some(a),
        None if interactive => prompt_age(default_age)?,
        None => None,
    };
    let goal = match args.goal.as_deref() {
        Some(g) => parse_goal(g)?,
        None if interactive => prompt_goal()?,
        None => DEFAULT_GOAL,
    };
    let activity_level = match args.activity.as_deref() {
        Some(a) => parse_activity(a)?,
        None if interactive => prompt_activity()?,
        None => ActivityLevel::default(),
    };

    Ok(BiometricInput {
        height_cm,
        weight_kg,
        age,
        goal,
        activity_level,
    })
}

/// Compute one plan and print or save it.
async fn cmd_plan(mut config: AppConfig, args: PlanArgs) -> Result<()> {
    if let Some(meals) = args.meals {
        config.calculator = config.calculator.with_meal_count(meals);
        config.calculator.validate()?;
    }
    if args.remote {
        config.coach.kind = CoachKind::Remote;
    }

    let input = collect_input(&args, config.calculator.default_age)?;
    let calculator = NutritionCalculator::new(config.calculator.clone());
    let coach = build_coach(calculator, &config.coach)?;
    let advice = coach.advise(&input).await?;

    match &args.output {
        Some(path) => {
            write_advice(&advice, args.format, File::create(path)?)?;
            println!("Plan saved to {}", path.display());
        }
        None => write_advice(&advice, args.format, io::stdout().lock())?,
    }

    Ok(())
}

fn write_advice<W: Write>(advice: &Advice, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Text => match &advice.source {
            AdviceSource::Local => writeln!(out, "{}", advice.narrative)?,
            AdviceSource::Remote { model } => {
                writeln!(out, "{}", text_report(&advice.plan))?;
                writeln!(out, "\n=== Coach notes ({}) ===\n{}", model, advice.narrative)?;
            }
        },
        OutputFormat::Json => write_json(advice, out)?,
        OutputFormat::Csv => write_plan_csv(&advice.plan, out)?,
    }
    Ok(())
}

/// Serve the web form until interrupted.
async fn cmd_serve(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.server.validate()?;

    let calculator = NutritionCalculator::new(config.calculator.clone());
    let coach = build_coach(calculator, &config.coach)?;
    info!(coach = coach.name(), "starting web server");

    let state = AppState::new(coach, config.calculator.default_age);
    web::serve(&config.server.bind_addr(), state).await
}
