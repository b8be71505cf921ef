use crate::models::{Day, Meal, Weights};
use crate::planner::constants::VARIETY_WINDOW_DAYS;

/// Recency penalty for eating `meal` on `current_day`.
///
/// Decays linearly from `VARIETY_WINDOW_DAYS` and is zero once that many days
/// have passed. Never negative.
pub fn variety_penalty(meal: &Meal, current_day: Day) -> f64 {
    let days_since = current_day.saturating_sub(meal.last_eaten_day);
    VARIETY_WINDOW_DAYS.saturating_sub(days_since).max(0) as f64
}

/// Linear utility of a meal on a given day.
///
/// Formula: crave*craving + nutrition*nutrition - cost*cost - variety*penalty
pub fn score(meal: &Meal, current_day: Day, weights: &Weights) -> f64 {
    let penalty = variety_penalty(meal, current_day);

    weights.craving * meal.craving + weights.nutrition * meal.nutrition
        - weights.cost * meal.cost
        - weights.variety * penalty
}

/// Score breakdown by factor, for display.
#[derive(Debug, Clone, Default)]
pub struct ScoreBreakdown {
    pub craving: f64,
    pub nutrition: f64,
    pub cost: f64,
    pub variety_penalty: f64,
}

impl ScoreBreakdown {
    /// Weighted contribution of each factor for `meal` on `current_day`.
    pub fn of(meal: &Meal, current_day: Day, weights: &Weights) -> Self {
        Self {
            craving: weights.craving * meal.craving,
            nutrition: weights.nutrition * meal.nutrition,
            cost: weights.cost * meal.cost,
            variety_penalty: weights.variety * variety_penalty(meal, current_day),
        }
    }

    /// Total utility; equals `score` for the same inputs.
    pub fn total(&self) -> f64 {
        self.craving + self.nutrition - self.cost - self.variety_penalty
    }
}
