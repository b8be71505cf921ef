use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use lunch_decider_rs::cli::{Cli, Command, CompareArgs};
use lunch_decider_rs::error::Result;
use lunch_decider_rs::interface::{
    display_meal_score, display_meal_stats, display_menu, display_run_log, display_score_table,
    display_summary, write_log_csv, write_summary_json,
};
use lunch_decider_rs::logging::init_logging;
use lunch_decider_rs::models::Day;
use lunch_decider_rs::simulation::compare;
use lunch_decider_rs::state::{load_config, save_config, LunchConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_or_default(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Compare(args) => cmd_compare(&config, &args),
        Command::Score { day, meal } => cmd_score(&config, day, meal.as_deref()),
        Command::Menu { write_config } => cmd_menu(&config, write_config),
    }
}

/// Load the config file if given, otherwise the built-in catalog.
fn load_or_default(path: Option<&Path>) -> Result<LunchConfig> {
    match path {
        Some(path) => {
            let config = load_config(path)?;
            info!(path = %path.display(), meals = config.menu.len(), "using config file");
            Ok(config)
        }
        None => Ok(LunchConfig::default()),
    }
}

/// Run both simulations and print their logs and the summary.
fn cmd_compare(config: &LunchConfig, args: &CompareArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let comparison = compare(&config.menu, &config.weights, &args.compare_config(), &mut rng)?;

    for run in [&comparison.greedy, &comparison.bandit] {
        display_run_log(run, args.mark_explored);
        if args.meal_stats {
            display_meal_stats(run);
        }
    }
    display_summary(&comparison, args.mark_explored);

    if let Some(path) = &args.csv {
        write_log_csv(&comparison, path)?;
        println!("Wrote daily logs to {:?}", path);
    }

    if let Some(path) = &args.json {
        write_summary_json(&comparison, path)?;
        println!("Wrote summary to {:?}", path);
    }

    Ok(())
}

/// Score every meal, or one named meal, for a single day.
fn cmd_score(config: &LunchConfig, day: Day, meal: Option<&str>) -> Result<()> {
    match meal {
        Some(name) => {
            let meal = config.menu.require_meal(name)?;
            display_meal_score(meal, day, &config.weights);
        }
        None => display_score_table(&config.menu, day, &config.weights),
    }
    Ok(())
}

/// List the menu, optionally writing it out as a config file.
fn cmd_menu(config: &LunchConfig, write_config: Option<PathBuf>) -> Result<()> {
    display_menu(&config.menu, &config.weights);

    if let Some(path) = write_config {
        save_config(&path, config)?;
        println!("Wrote config to {:?}", path);
    }

    Ok(())
}
