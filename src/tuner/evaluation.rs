use std::cmp::Ordering;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{LunchError, Result};
use crate::models::{Day, Weights};
use crate::planner::Policy;
use crate::simulation::{run_simulation, SimulationConfig, UniformFeedback};
use crate::state::Menu;

/// Aggregated outcome of one policy across several seeded runs.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub policy: Policy,
    pub trials: usize,
    pub avg_total: f64,
    pub min_total: i64,
    pub max_total: i64,
    /// Mean decision-time utility of chosen meals.
    pub avg_score: f64,
    /// Mean number of distinct meals eaten per run.
    pub avg_distinct: f64,
    pub avg_explored: f64,
}

impl EvaluationResult {
    /// Epsilon of the evaluated policy (0 for greedy).
    pub fn epsilon(&self) -> f64 {
        match self.policy {
            Policy::Greedy => 0.0,
            Policy::EpsilonGreedy { epsilon } => epsilon,
        }
    }

    /// Lexicographic comparison: (avg_total, avg_score, avg_distinct).
    /// Higher is better for all metrics.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        match self.avg_total.partial_cmp(&other.avg_total) {
            Some(Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        match self.avg_score.partial_cmp(&other.avg_score) {
            Some(Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        self.avg_distinct
            .partial_cmp(&other.avg_distinct)
            .unwrap_or(Ordering::Equal)
    }
}

/// Run `policy` once per seed and average the results.
///
/// Every policy evaluated over the same seeds sees the same generator
/// streams, which keeps comparisons between policies fair.
pub fn evaluate_policy(
    policy: Policy,
    menu: &Menu,
    weights: &Weights,
    days: Day,
    feedback: UniformFeedback,
    seeds: Range<u64>,
) -> Result<EvaluationResult> {
    if seeds.is_empty() {
        return Err(LunchError::InvalidInput(
            "at least one trial is required".to_string(),
        ));
    }

    let config = SimulationConfig::for_days(days, policy);
    let mut totals = Vec::new();
    let mut score_sum = 0.0;
    let mut distinct_sum = 0usize;
    let mut explored_sum = 0usize;

    for seed in seeds {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut source = feedback;
        let run = run_simulation(menu, weights, &config, &mut source, &mut rng)?;

        totals.push(run.total);
        score_sum += run.average_score();
        distinct_sum += run.menu.distinct_eaten();
        explored_sum += run.explored_days();
    }

    let trials = totals.len();
    let n = trials as f64;

    Ok(EvaluationResult {
        policy,
        trials,
        avg_total: totals.iter().sum::<i64>() as f64 / n,
        min_total: totals.iter().copied().min().unwrap_or(0),
        max_total: totals.iter().copied().max().unwrap_or(0),
        avg_score: score_sum / n,
        avg_distinct: distinct_sum as f64 / n,
        avg_explored: explored_sum as f64 / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback() -> UniformFeedback {
        UniformFeedback::new(3, 10).unwrap()
    }

    #[test]
    fn test_evaluate_greedy() {
        let menu = Menu::default_catalog();
        let result =
            evaluate_policy(Policy::Greedy, &menu, &Weights::default(), 30, feedback(), 0..5)
                .unwrap();

        assert_eq!(result.trials, 5);
        assert_eq!(result.avg_explored, 0.0);
        assert!(result.min_total as f64 <= result.avg_total);
        assert!(result.avg_total <= result.max_total as f64);
        assert!(result.min_total >= 90 && result.max_total <= 300);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let menu = Menu::default_catalog();
        let policy = Policy::epsilon_greedy(0.3).unwrap();
        let a = evaluate_policy(policy, &menu, &Weights::default(), 30, feedback(), 10..20).unwrap();
        let b = evaluate_policy(policy, &menu, &Weights::default(), 30, feedback(), 10..20).unwrap();

        assert_eq!(a.avg_total, b.avg_total);
        assert_eq!(a.avg_distinct, b.avg_distinct);
        assert_eq!(a.epsilon(), 0.3);
    }

    #[test]
    fn test_full_exploration_explores_every_day() {
        let menu = Menu::default_catalog();
        let policy = Policy::epsilon_greedy(1.0).unwrap();
        let result =
            evaluate_policy(policy, &menu, &Weights::default(), 20, feedback(), 0..3).unwrap();
        assert_eq!(result.avg_explored, 20.0);
    }

    #[test]
    fn test_no_trials_rejected() {
        let menu = Menu::default_catalog();
        assert!(
            evaluate_policy(Policy::Greedy, &menu, &Weights::default(), 30, feedback(), 4..4)
                .is_err()
        );
    }

    #[test]
    fn test_cmp_score_prefers_higher_total() {
        let menu = Menu::default_catalog();
        let mut a =
            evaluate_policy(Policy::Greedy, &menu, &Weights::default(), 5, feedback(), 0..1)
                .unwrap();
        let mut b = a.clone();
        a.avg_total = 200.0;
        b.avg_total = 190.0;
        assert_eq!(a.cmp_score(&b), Ordering::Greater);

        b.avg_total = 200.0;
        b.avg_score = a.avg_score + 1.0;
        assert_eq!(a.cmp_score(&b), Ordering::Less);
    }
}
