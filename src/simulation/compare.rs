use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::Result;
use crate::models::{Day, Weights};
use crate::planner::constants::{
    BANDIT_FEEDBACK_RANGE, DEFAULT_DAYS, DEFAULT_EPSILON, GREEDY_FEEDBACK_RANGE,
};
use crate::planner::Policy;
use crate::simulation::driver::{run_simulation, SimulationConfig, SimulationRun};
use crate::simulation::feedback::UniformFeedback;
use crate::state::Menu;

/// Settings for a greedy-vs-bandit comparison.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub days: Day,
    pub epsilon: f64,
    pub greedy_feedback: UniformFeedback,
    pub bandit_feedback: UniformFeedback,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            epsilon: DEFAULT_EPSILON,
            greedy_feedback: UniformFeedback::from_bounds(GREEDY_FEEDBACK_RANGE),
            bandit_feedback: UniformFeedback::from_bounds(BANDIT_FEEDBACK_RANGE),
        }
    }
}

/// Two runs over the same starting menu.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub greedy: SimulationRun,
    pub bandit: SimulationRun,
}

impl Comparison {
    /// The run with the higher total, or None on a tie.
    pub fn winner(&self) -> Option<&SimulationRun> {
        match self.greedy.total.cmp(&self.bandit.total) {
            Ordering::Greater => Some(&self.greedy),
            Ordering::Less => Some(&self.bandit),
            Ordering::Equal => None,
        }
    }

    /// Bandit total minus greedy total.
    pub fn margin(&self) -> i64 {
        self.bandit.total - self.greedy.total
    }
}

/// Run greedy and epsilon-greedy over independent copies of `menu`.
///
/// Each run gets its own generator seeded from `rng`, so the two runs share
/// neither meal state nor random state.
pub fn compare<R: Rng + ?Sized>(
    menu: &Menu,
    weights: &Weights,
    config: &CompareConfig,
    rng: &mut R,
) -> Result<Comparison> {
    let bandit_policy = Policy::epsilon_greedy(config.epsilon)?;

    let mut greedy_rng = StdRng::seed_from_u64(rng.r#gen());
    let mut bandit_rng = StdRng::seed_from_u64(rng.r#gen());

    let mut greedy_feedback = config.greedy_feedback;
    let greedy = run_simulation(
        menu,
        weights,
        &SimulationConfig::for_days(config.days, Policy::Greedy),
        &mut greedy_feedback,
        &mut greedy_rng,
    )?;

    let mut bandit_feedback = config.bandit_feedback;
    let bandit = run_simulation(
        menu,
        weights,
        &SimulationConfig::for_days(config.days, bandit_policy),
        &mut bandit_feedback,
        &mut bandit_rng,
    )?;

    let comparison = Comparison { greedy, bandit };
    info!(
        greedy_total = comparison.greedy.total,
        bandit_total = comparison.bandit.total,
        margin = comparison.margin(),
        "comparison finished"
    );

    Ok(comparison)
}
