use serde::{Deserialize, Serialize};

use crate::models::Day;
use crate::planner::constants::NEVER_EATEN_DAY;

fn never_eaten() -> Day {
    NEVER_EATEN_DAY
}

/// A lunch option with static attributes and per-run state.
///
/// Craving is nominally on a 1-10 scale and stays clamped there once
/// feedback has been applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,

    pub cost: f64,

    /// Nutrition score (higher is better).
    pub nutrition: f64,

    #[serde(alias = "craving_score")]
    pub craving: f64,

    #[serde(default = "never_eaten")]
    pub last_eaten_day: Day,

    #[serde(default)]
    pub cumulative_reward: i64,

    #[serde(default)]
    pub times_chosen: u32,
}

impl Meal {
    /// Create a meal that has never been eaten.
    pub fn new(name: impl Into<String>, cost: f64, nutrition: f64, craving: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            nutrition,
            craving,
            last_eaten_day: NEVER_EATEN_DAY,
            cumulative_reward: 0,
            times_chosen: 0,
        }
    }

    /// Mean feedback per time chosen, 0 if never chosen.
    #[inline]
    pub fn average_reward(&self) -> f64 {
        if self.times_chosen > 0 {
            self.cumulative_reward as f64 / self.times_chosen as f64
        } else {
            0.0
        }
    }

    /// Whether the meal has been selected at least once.
    #[inline]
    pub fn has_been_eaten(&self) -> bool {
        self.times_chosen > 0
    }

    /// Basic validation: named, finite attributes, non-negative cost.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.cost.is_finite()
            && self.cost >= 0.0
            && self.nutrition.is_finite()
            && self.craving.is_finite()
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
