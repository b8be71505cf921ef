use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::warn;

use lunch_decider_rs::logging::init_logging;
use lunch_decider_rs::models::Day;
use lunch_decider_rs::simulation::UniformFeedback;
use lunch_decider_rs::state::{load_config, LunchConfig};
use lunch_decider_rs::tuner::{print_topk, run_sweep, write_best_json, write_csv, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "tuner")]
#[command(about = "Epsilon sweep for the lunch bandit")]
struct Args {
    /// Epsilons to evaluate (comma-separated)
    #[arg(long, default_value = "0,0.05,0.1,0.2,0.3,0.5,0.75,1")]
    epsilons: String,

    /// Seeded runs per epsilon
    #[arg(long, default_value = "200")]
    trials: usize,

    /// First random seed
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Days per run
    #[arg(long, default_value = "30")]
    days: Day,

    /// Feedback range shared by all policies, MIN-MAX inclusive
    #[arg(long, default_value = "3-10")]
    feedback: UniformFeedback,

    /// JSON file with meals and weights (built-in catalog if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV file for all rows
    #[arg(long, default_value = "tuner_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the best row
    #[arg(long, default_value = "tuner_best.json")]
    json: PathBuf,

    /// Number of top rows to display
    #[arg(long, default_value = "10")]
    topk: usize,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_epsilons(s: &str) -> Vec<f64> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match part.parse() {
            Ok(epsilon) => Some(epsilon),
            Err(_) => {
                warn!(entry = part, "skipping unparsable epsilon");
                None
            }
        })
        .collect()
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => LunchConfig::default(),
    };

    println!("Loaded {} meals", config.menu.len());

    let epsilons = parse_epsilons(&args.epsilons);
    if epsilons.is_empty() {
        eprintln!("Error: no valid epsilons provided");
        std::process::exit(1);
    }
    println!("Testing epsilons: {:?}", epsilons);

    let sweep_config = SweepConfig {
        epsilons,
        trials: args.trials,
        seed: args.seed,
        days: args.days,
        feedback: args.feedback,
    };

    let sweep = match run_sweep(&sweep_config, &config.menu, &config.weights) {
        Ok(sweep) => sweep,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_topk(&sweep.results, &sweep.baseline, args.topk);

    let best = &sweep.results[0];
    println!(
        "Best epsilon: {:.3} (avg total {:.2}, greedy {:.2})",
        best.epsilon(),
        best.avg_total,
        sweep.baseline.avg_total
    );
    println!();

    if let Err(e) = write_csv(&sweep.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all rows to {:?}", args.csv);
    }

    if let Err(e) = write_best_json(best, &sweep.baseline, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote best row to {:?}", args.json);
    }
}
