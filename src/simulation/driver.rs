use std::ops::RangeInclusive;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{LunchError, Result};
use crate::models::{DailyRecord, Day, Weights};
use crate::planner::constants::DEFAULT_DAYS;
use crate::planner::{update_meal, Policy};
use crate::simulation::feedback::FeedbackSource;
use crate::state::Menu;

/// Day range and policy for one run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub first_day: Day,
    pub last_day: Day,
    pub policy: Policy,
}

impl SimulationConfig {
    /// Days `1..=days` under `policy`.
    pub fn for_days(days: Day, policy: Policy) -> Self {
        Self {
            first_day: 1,
            last_day: days,
            policy,
        }
    }

    /// Inclusive day range; empty when `last_day < first_day`.
    pub fn days(&self) -> RangeInclusive<Day> {
        self.first_day..=self.last_day
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::for_days(DEFAULT_DAYS, Policy::Greedy)
    }
}

/// Everything produced by one run.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub policy: Policy,

    /// One record per simulated day, in day order.
    pub records: Vec<DailyRecord>,

    /// Sum of all feedback.
    pub total: i64,

    /// Meal states after the last day.
    pub menu: Menu,
}

impl SimulationRun {
    /// Number of days simulated.
    pub fn days(&self) -> usize {
        self.records.len()
    }

    /// Mean feedback per day, 0 for an empty run.
    pub fn average_feedback(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.total as f64 / self.records.len() as f64
        }
    }

    /// Mean decision-time utility of the chosen meals.
    pub fn average_score(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.records.iter().map(|r| r.score).sum::<f64>() / self.records.len() as f64
        }
    }

    /// Number of days decided by an exploration draw.
    pub fn explored_days(&self) -> usize {
        self.records.iter().filter(|r| r.explored).count()
    }
}

/// Run the day loop on a private copy of `menu`.
///
/// Each day: select a meal, draw feedback, update that meal, log the day.
/// `menu` itself is never mutated.
pub fn run_simulation<F, R>(
    menu: &Menu,
    weights: &Weights,
    config: &SimulationConfig,
    feedback: &mut F,
    rng: &mut R,
) -> Result<SimulationRun>
where
    F: FeedbackSource,
    R: Rng + ?Sized,
{
    config.policy.validate()?;

    let mut meals = menu.fork();
    let mut records = Vec::new();
    let mut total: i64 = 0;

    for day in config.days() {
        let selection = config.policy.select(meals.meals(), day, weights, rng)?;

        let meal = meals
            .meal_mut(selection.index)
            .ok_or(LunchError::EmptyMenu)?;
        let value = feedback.next_feedback(rng, meal, day);
        update_meal(meal, value, day);

        debug!(
            policy = config.policy.label(),
            day,
            meal = %meal.name,
            score = selection.score,
            explored = selection.explored,
            feedback = value,
            craving = meal.craving,
            "lunch decided"
        );

        total += i64::from(value);
        records.push(DailyRecord::new(
            day,
            meal.name.clone(),
            value,
            selection.score,
            selection.explored,
        ));
    }

    info!(
        policy = %config.policy,
        days = records.len(),
        total,
        "simulation finished"
    );

    Ok(SimulationRun {
        policy: config.policy,
        records,
        total,
        menu: meals,
    })
}
