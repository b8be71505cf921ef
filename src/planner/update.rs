use crate::models::{Day, Meal};
use crate::planner::constants::{CRAVING_LEARNING_RATE, CRAVING_MAX, CRAVING_MIN, NEUTRAL_FEEDBACK};

/// Craving after receiving `feedback`, clamped to the craving range.
///
/// Feedback above neutral nudges craving up, below nudges it down.
pub fn adjusted_craving(craving: f64, feedback: i32) -> f64 {
    let drift = (f64::from(feedback) - f64::from(NEUTRAL_FEEDBACK)) * CRAVING_LEARNING_RATE;
    (craving + drift).clamp(CRAVING_MIN, CRAVING_MAX)
}

/// Apply one day's feedback to the meal that was eaten.
///
/// Feedback is not range-checked; only craving is clamped.
pub fn update_meal(meal: &mut Meal, feedback: i32, current_day: Day) {
    meal.cumulative_reward += i64::from(feedback);
    meal.times_chosen += 1;
    meal.last_eaten_day = current_day;
    meal.craving = adjusted_craving(meal.craving, feedback);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_meal_bookkeeping() {
        let mut meal = Meal::new("Burger", 9.0, 6.0, 8.0);
        update_meal(&mut meal, 7, 3);

        assert_eq!(meal.cumulative_reward, 7);
        assert_eq!(meal.times_chosen, 1);
        assert_eq!(meal.last_eaten_day, 3);
        assert!((meal.craving - 8.2).abs() < 1e-9);
    }

    #[test]
    fn test_high_feedback_raises_craving() {
        let mut meal = Meal::new("Turkey Sandwich", 7.5, 8.0, 7.0);
        update_meal(&mut meal, 10, 5);
        assert!((meal.craving - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_feedback_keeps_craving() {
        assert_eq!(adjusted_craving(6.3, NEUTRAL_FEEDBACK), 6.3);
    }

    #[test]
    fn test_craving_clamped() {
        assert_eq!(adjusted_craving(9.9, 10), CRAVING_MAX);
        assert_eq!(adjusted_craving(1.1, 0), CRAVING_MIN);
        // Unvalidated feedback still lands in range
        assert_eq!(adjusted_craving(5.0, 500), CRAVING_MAX);
        assert_eq!(adjusted_craving(5.0, -500), CRAVING_MIN);
    }

    #[test]
    fn test_extreme_feedback_clamps() {
        let mut meal = Meal::new("Burger", 9.0, 6.0, 8.0);
        update_meal(&mut meal, i32::MIN, 1);
        assert_eq!(meal.craving, CRAVING_MIN);
        assert_eq!(meal.cumulative_reward, i64::from(i32::MIN));

        update_meal(&mut meal, i32::MAX, 2);
        assert_eq!(meal.craving, CRAVING_MAX);
    }

    #[test]
    fn test_negative_feedback_reduces_reward() {
        let mut meal = Meal::new("PB&J Sandwich", 3.0, 4.0, 5.0);
        update_meal(&mut meal, 8, 1);
        update_meal(&mut meal, -3, 2);
        assert_eq!(meal.cumulative_reward, 5);
        assert_eq!(meal.times_chosen, 2);
        assert_eq!(meal.last_eaten_day, 2);
    }
}
