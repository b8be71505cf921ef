use tracing::debug;

use crate::error::{LunchError, Result};
use crate::models::{Day, Weights};
use crate::planner::constants::{DEFAULT_DAYS, GREEDY_FEEDBACK_RANGE};
use crate::planner::Policy;
use crate::simulation::UniformFeedback;
use crate::state::Menu;
use crate::tuner::evaluation::{evaluate_policy, EvaluationResult};

/// Configuration for an epsilon sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub epsilons: Vec<f64>,
    /// Seeded runs per epsilon.
    pub trials: usize,
    /// First seed; trials use `seed..seed + trials`.
    pub seed: u64,
    pub days: Day,
    /// Shared by every policy so only the policy differs between rows.
    pub feedback: UniformFeedback,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            epsilons: vec![0.0, 0.05, 0.1, 0.2, 0.3, 0.5, 0.75, 1.0],
            trials: 200,
            seed: 123,
            days: DEFAULT_DAYS,
            feedback: UniformFeedback::from_bounds(GREEDY_FEEDBACK_RANGE),
        }
    }
}

/// Results from a sweep.
pub struct SweepResults {
    /// One row per epsilon, best first.
    pub results: Vec<EvaluationResult>,
    /// Greedy policy over the same seeds.
    pub baseline: EvaluationResult,
}

/// Evaluate the bandit at every epsilon, plus the greedy baseline.
pub fn run_sweep(config: &SweepConfig, menu: &Menu, weights: &Weights) -> Result<SweepResults> {
    if config.epsilons.is_empty() {
        return Err(LunchError::InvalidInput("no epsilons to evaluate".to_string()));
    }

    let seeds = config.seed..config.seed.saturating_add(config.trials as u64);

    let baseline = evaluate_policy(
        Policy::Greedy,
        menu,
        weights,
        config.days,
        config.feedback,
        seeds.clone(),
    )?;

    println!(
        "Baseline (greedy): total={:.2} score={:.2} distinct={:.1}",
        baseline.avg_total, baseline.avg_score, baseline.avg_distinct
    );
    println!(
        "Sweeping {} epsilons x {} trials...",
        config.epsilons.len(),
        config.trials
    );

    let mut results = Vec::with_capacity(config.epsilons.len());
    for &epsilon in &config.epsilons {
        let policy = Policy::epsilon_greedy(epsilon)?;
        let result = evaluate_policy(
            policy,
            menu,
            weights,
            config.days,
            config.feedback,
            seeds.clone(),
        )?;

        debug!(
            epsilon,
            avg_total = result.avg_total,
            avg_distinct = result.avg_distinct,
            "epsilon evaluated"
        );
        results.push(result);
    }

    // Best first
    results.sort_by(|a, b| b.cmp_score(a));

    Ok(SweepResults { results, baseline })
}
