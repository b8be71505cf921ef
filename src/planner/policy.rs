use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::trace;

use crate::error::{LunchError, Result};
use crate::models::{Day, Meal, Weights};
use crate::planner::scoring::score;

/// Outcome of a policy decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Position of the chosen meal in the input slice.
    pub index: usize,

    /// Utility of the chosen meal at decision time.
    pub score: f64,

    /// True when the pick came from an exploration draw.
    pub explored: bool,
}

/// Strategy used to choose a meal each day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// Always eat the best-scoring meal.
    Greedy,

    /// Explore a random meal with probability `epsilon`, otherwise greedy.
    ///
    /// Build it with [`Policy::epsilon_greedy`], which checks the range.
    /// Simulations reject an out-of-range value through [`Policy::validate`].
    EpsilonGreedy { epsilon: f64 },
}

impl Policy {
    /// Epsilon-greedy policy; `epsilon` must lie in [0, 1].
    pub fn epsilon_greedy(epsilon: f64) -> Result<Self> {
        let policy = Policy::EpsilonGreedy { epsilon };
        policy.validate()?;
        Ok(policy)
    }

    /// Check parameters of a policy that may have been built directly.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Policy::Greedy => Ok(()),
            Policy::EpsilonGreedy { epsilon } if (0.0..=1.0).contains(&epsilon) => Ok(()),
            Policy::EpsilonGreedy { epsilon } => Err(LunchError::InvalidInput(format!(
                "epsilon must be within [0, 1], got {}",
                epsilon
            ))),
        }
    }

    /// Short label for logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Greedy => "Greedy",
            Policy::EpsilonGreedy { .. } => "Bandit",
        }
    }

    /// Pick a meal for `current_day`.
    ///
    /// The greedy policy never touches `rng`.
    pub fn select<R: Rng + ?Sized>(
        &self,
        meals: &[Meal],
        current_day: Day,
        weights: &Weights,
        rng: &mut R,
    ) -> Result<Selection> {
        match *self {
            Policy::Greedy => select_greedy(meals, current_day, weights),
            Policy::EpsilonGreedy { epsilon } => {
                select_bandit(meals, current_day, weights, epsilon, rng)
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Greedy => write!(f, "greedy"),
            Policy::EpsilonGreedy { epsilon } => write!(f, "epsilon-greedy (epsilon={})", epsilon),
        }
    }
}

/// Index and score of the best meal. Earliest meal wins ties.
pub fn select_greedy(meals: &[Meal], current_day: Day, weights: &Weights) -> Result<Selection> {
    let mut best: Option<(usize, f64)> = None;

    for (index, meal) in meals.iter().enumerate() {
        let s = score(meal, current_day, weights);
        trace!(day = current_day, meal = %meal.name, score = s, "scored");

        // Strict comparison keeps the first of equal scores
        match best {
            Some((_, best_score)) if s <= best_score => {}
            _ => best = Some((index, s)),
        }
    }

    best.map(|(index, score)| Selection {
        index,
        score,
        explored: false,
    })
    .ok_or(LunchError::EmptyMenu)
}

/// Epsilon-greedy decision: one uniform draw decides explore or exploit.
pub fn select_bandit<R: Rng + ?Sized>(
    meals: &[Meal],
    current_day: Day,
    weights: &Weights,
    epsilon: f64,
    rng: &mut R,
) -> Result<Selection> {
    if meals.is_empty() {
        return Err(LunchError::EmptyMenu);
    }

    if rng.r#gen::<f64>() < epsilon {
        let index = rng.gen_range(0..meals.len());
        return Ok(Selection {
            index,
            score: score(&meals[index], current_day, weights),
            explored: true,
        });
    }

    select_greedy(meals, current_day, weights)
}

/// Greedy choice among `meals`.
pub fn greedy<'a>(meals: &'a [Meal], current_day: Day, weights: &Weights) -> Result<&'a Meal> {
    select_greedy(meals, current_day, weights).map(|sel| &meals[sel.index])
}

/// Epsilon-greedy choice among `meals`.
pub fn bandit<'a, R: Rng + ?Sized>(
    meals: &'a [Meal],
    current_day: Day,
    weights: &Weights,
    epsilon: f64,
    rng: &mut R,
) -> Result<&'a Meal> {
    select_bandit(meals, current_day, weights, epsilon, rng).map(|sel| &meals[sel.index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn crave_pair() -> Vec<Meal> {
        vec![
            Meal::new("Low Crave", 5.0, 5.0, 2.0),
            Meal::new("High Crave", 5.0, 5.0, 9.0),
        ]
    }

    #[test]
    fn test_greedy_picks_highest_score() {
        let meals = crave_pair();
        let weights = Weights::uniform(1.0).unwrap();

        let sel = select_greedy(&meals, 1, &weights).unwrap();
        assert_eq!(sel.index, 1);
        assert!((sel.score - 9.0).abs() < 1e-9);
        assert!(!sel.explored);
        assert_eq!(greedy(&meals, 1, &weights).unwrap().name, "High Crave");
    }

    #[test]
    fn test_greedy_tie_goes_to_first() {
        let meals = vec![
            Meal::new("First", 5.0, 5.0, 5.0),
            Meal::new("Second", 5.0, 5.0, 5.0),
        ];
        let weights = Weights::default();
        assert_eq!(greedy(&meals, 1, &weights).unwrap().name, "First");
    }

    #[test]
    fn test_greedy_handles_all_negative_scores() {
        let meals = vec![
            Meal::new("Pricey", 50.0, 1.0, 1.0),
            Meal::new("Very Pricey", 90.0, 1.0, 1.0),
        ];
        let weights = Weights::default();
        assert_eq!(greedy(&meals, 1, &weights).unwrap().name, "Pricey");
    }

    #[test]
    fn test_greedy_empty_fails() {
        let weights = Weights::default();
        assert!(matches!(greedy(&[], 1, &weights), Err(LunchError::EmptyMenu)));
    }

    #[test]
    fn test_bandit_empty_fails() {
        let weights = Weights::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            bandit(&[], 1, &weights, 0.5, &mut rng),
            Err(LunchError::EmptyMenu)
        ));
    }

    #[test]
    fn test_bandit_zero_epsilon_matches_greedy() {
        let meals = crave_pair();
        let weights = Weights::uniform(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let sel = select_bandit(&meals, 1, &weights, 0.0, &mut rng).unwrap();
            assert_eq!(sel.index, 1);
            assert!(!sel.explored);
        }
    }

    #[test]
    fn test_bandit_full_epsilon_explores() {
        let meals = crave_pair();
        let weights = Weights::uniform(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let low_picks = (0..1000)
            .filter(|_| bandit(&meals, 1, &weights, 1.0, &mut rng).unwrap().name == "Low Crave")
            .count();

        // Uniform over two meals: roughly half
        assert!(low_picks > 350, "only {} exploratory picks", low_picks);
    }

    #[test]
    fn test_bandit_with_fixed_draws() {
        let meals = crave_pair();
        let weights = Weights::uniform(1.0).unwrap();

        // All-zero stream: draw 0.0 < epsilon, then index 0
        let mut low = StepRng::new(0, 0);
        let sel = select_bandit(&meals, 1, &weights, 0.5, &mut low).unwrap();
        assert!(sel.explored);
        assert_eq!(sel.index, 0);
        assert!((sel.score - 2.0).abs() < 1e-9);

        // All-ones stream: draw just under 1.0, exploit
        let mut high = StepRng::new(u64::MAX, 0);
        let sel = select_bandit(&meals, 1, &weights, 0.5, &mut high).unwrap();
        assert!(!sel.explored);
        assert_eq!(sel.index, 1);
    }

    #[test]
    fn test_epsilon_validation() {
        assert!(Policy::epsilon_greedy(0.0).is_ok());
        assert!(Policy::epsilon_greedy(1.0).is_ok());
        assert!(Policy::epsilon_greedy(1.5).is_err());
        assert!(Policy::epsilon_greedy(-0.1).is_err());
        assert!(Policy::epsilon_greedy(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_direct_variant() {
        assert!(Policy::Greedy.validate().is_ok());
        assert!(Policy::EpsilonGreedy { epsilon: 0.3 }.validate().is_ok());
        assert!(matches!(
            Policy::EpsilonGreedy { epsilon: -1.0 }.validate(),
            Err(LunchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_greedy_policy_ignores_rng() {
        let meals = crave_pair();
        let weights = Weights::uniform(1.0).unwrap();
        let mut rng = StepRng::new(0, 0);
        let sel = Policy::Greedy.select(&meals, 1, &weights, &mut rng).unwrap();
        assert_eq!(sel.index, 1);
    }
}
