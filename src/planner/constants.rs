use crate::models::Day;

/// Day assigned to meals that have never been eaten.
///
/// Far enough in the past that the variety penalty is already zero on day 1.
pub const NEVER_EATEN_DAY: Day = -10;

/// Days after which a meal no longer carries a variety penalty.
pub const VARIETY_WINDOW_DAYS: Day = 5;

/// Feedback value that leaves craving unchanged.
pub const NEUTRAL_FEEDBACK: i32 = 5;

/// Craving change per unit of feedback above or below neutral.
pub const CRAVING_LEARNING_RATE: f64 = 0.1;

/// Craving clamp range.
pub const CRAVING_MIN: f64 = 1.0;
pub const CRAVING_MAX: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Default weights
// ─────────────────────────────────────────────────────────────────────────────

/// Baseline craving importance.
pub const DEFAULT_CRAVING_WEIGHT: f64 = 1.0;

/// Slightly more health aware than craving.
pub const DEFAULT_NUTRITION_WEIGHT: f64 = 1.2;

/// Cost matters less than craving and nutrition.
pub const DEFAULT_COST_WEIGHT: f64 = 0.8;

/// Pushes toward a more diverse lunch routine.
pub const DEFAULT_VARIETY_WEIGHT: f64 = 1.5;

// ─────────────────────────────────────────────────────────────────────────────
// Simulation defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Number of simulated days per run.
pub const DEFAULT_DAYS: Day = 30;

/// Explore probability for the bandit run.
pub const DEFAULT_EPSILON: f64 = 0.3;

/// Feedback range (inclusive) drawn during the greedy run.
pub const GREEDY_FEEDBACK_RANGE: (i32, i32) = (3, 10);

/// Feedback range (inclusive) drawn during the bandit run.
pub const BANDIT_FEEDBACK_RANGE: (i32, i32) = (4, 10);

/// Feedback values outside this range are accepted but logged.
pub const NOMINAL_FEEDBACK_RANGE: (i32, i32) = (1, 10);

/// Width of the meal name column in daily logs.
pub const LOG_NAME_WIDTH: usize = 20;
