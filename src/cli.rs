use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::models::Day;
use crate::planner::constants::{
    BANDIT_FEEDBACK_RANGE, DEFAULT_DAYS, DEFAULT_EPSILON, GREEDY_FEEDBACK_RANGE,
};
use crate::simulation::{CompareConfig, UniformFeedback};

/// Lunch Decider: simulate greedy vs. epsilon-greedy lunch choices.
#[derive(Parser, Debug)]
#[command(name = "lunch_decider")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file with meals and weights (built-in catalog if omitted).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the greedy and bandit simulations and compare their totals.
    Compare(CompareArgs),

    /// Show every meal's score for a given day.
    Score {
        /// Day to score (meals start with no eating history).
        #[arg(long, default_value_t = 1)]
        day: Day,

        /// Only show the breakdown for this meal.
        #[arg(long)]
        meal: Option<String>,
    },

    /// List the meals and weights in use.
    Menu {
        /// Write the menu and weights as a JSON config file.
        #[arg(long)]
        write_config: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Compare(CompareArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Number of days to simulate per run.
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    pub days: Day,

    /// Bandit explore probability in [0, 1].
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Random seed for reproducible runs (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Greedy feedback range, MIN-MAX inclusive.
    #[arg(long, default_value = "3-10")]
    pub greedy_feedback: UniformFeedback,

    /// Bandit feedback range, MIN-MAX inclusive.
    #[arg(long, default_value = "4-10")]
    pub bandit_feedback: UniformFeedback,

    /// Write both daily logs to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write a JSON summary of both runs.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Print per-meal statistics after each run.
    #[arg(long)]
    pub meal_stats: bool,

    /// Mark bandit exploration days with `*` in the daily log.
    #[arg(long)]
    pub mark_explored: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            epsilon: DEFAULT_EPSILON,
            seed: None,
            greedy_feedback: UniformFeedback::from_bounds(GREEDY_FEEDBACK_RANGE),
            bandit_feedback: UniformFeedback::from_bounds(BANDIT_FEEDBACK_RANGE),
            csv: None,
            json: None,
            meal_stats: false,
            mark_explored: false,
        }
    }
}

impl CompareArgs {
    pub fn compare_config(&self) -> CompareConfig {
        CompareConfig {
            days: self.days,
            epsilon: self.epsilon,
            greedy_feedback: self.greedy_feedback,
            bandit_feedback: self.bandit_feedback,
        }
    }
}
