use serde::Serialize;

use crate::models::Day;

/// One simulated lunch decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub day: Day,

    /// Name of the meal eaten.
    pub meal: String,

    /// Satisfaction reported after eating.
    pub feedback: i32,

    /// Utility of the meal at decision time.
    pub score: f64,

    /// Whether the pick came from a random exploration draw.
    pub explored: bool,
}

impl DailyRecord {
    pub fn new(day: Day, meal: String, feedback: i32, score: f64, explored: bool) -> Self {
        Self {
            day,
            meal,
            feedback,
            score,
            explored,
        }
    }
}
