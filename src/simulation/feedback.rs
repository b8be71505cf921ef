use std::str::FromStr;

use rand::Rng;
use tracing::warn;

use crate::error::{LunchError, Result};
use crate::models::{Day, Meal};
use crate::planner::constants::NOMINAL_FEEDBACK_RANGE;

/// Produces the satisfaction score reported after a lunch.
pub trait FeedbackSource {
    fn next_feedback<R: Rng + ?Sized>(&mut self, rng: &mut R, meal: &Meal, day: Day) -> i32;
}

/// Uniform random integer feedback within inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformFeedback {
    min: i32,
    max: i32,
}

impl UniformFeedback {
    /// Create a feedback range; `min` must not exceed `max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(LunchError::InvalidInput(format!(
                "feedback range {}-{} is empty",
                min, max
            )));
        }

        let (lo, hi) = NOMINAL_FEEDBACK_RANGE;
        if min < lo || max > hi {
            warn!(min, max, "feedback range extends outside the nominal 1-10 scale");
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

impl UniformFeedback {
    /// Built-in default ranges; callers pass ordered constants.
    pub(crate) const fn from_bounds((min, max): (i32, i32)) -> Self {
        Self { min, max }
    }
}

impl TryFrom<(i32, i32)> for UniformFeedback {
    type Error = LunchError;

    fn try_from((min, max): (i32, i32)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl FromStr for UniformFeedback {
    type Err = LunchError;

    /// Parse `MIN-MAX`, e.g. `3-10` or `-2-5`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| LunchError::InvalidInput(format!("expected MIN-MAX, got '{}'", s)))?;

        let parse = |part: &str| -> Result<i32> {
            part.trim()
                .parse()
                .map_err(|_| LunchError::InvalidInput(format!("invalid feedback bound '{}'", part)))
        };

        Self::new(parse(&s[..split])?, parse(&s[split + 1..])?)
    }
}

impl FeedbackSource for UniformFeedback {
    fn next_feedback<R: Rng + ?Sized>(&mut self, rng: &mut R, _meal: &Meal, _day: Day) -> i32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Replays a fixed feedback sequence, starting over when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedFeedback {
    values: Vec<i32>,
    position: usize,
}

impl ScriptedFeedback {
    pub fn new(values: Vec<i32>) -> Result<Self> {
        if values.is_empty() {
            return Err(LunchError::InvalidInput(
                "scripted feedback needs at least one value".to_string(),
            ));
        }
        Ok(Self {
            values,
            position: 0,
        })
    }
}

impl FeedbackSource for ScriptedFeedback {
    fn next_feedback<R: Rng + ?Sized>(&mut self, _rng: &mut R, _meal: &Meal, _day: Day) -> i32 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut source = UniformFeedback::new(3, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let meal = Meal::new("Burger", 9.0, 6.0, 8.0);

        let draws: Vec<i32> = (1..=500)
            .map(|day| source.next_feedback(&mut rng, &meal, day))
            .collect();

        assert!(draws.iter().all(|f| (3..=10).contains(f)));
        assert!(draws.contains(&3));
        assert!(draws.contains(&10));
    }

    #[test]
    fn test_single_value_range() {
        let mut source = UniformFeedback::new(7, 7).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let meal = Meal::new("Burger", 9.0, 6.0, 8.0);
        assert_eq!(source.next_feedback(&mut rng, &meal, 1), 7);
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(UniformFeedback::new(10, 3).is_err());
    }

    #[test]
    fn test_parse_range() {
        let range: UniformFeedback = "4-10".parse().unwrap();
        assert_eq!((range.min(), range.max()), (4, 10));

        let negative: UniformFeedback = "-2-5".parse().unwrap();
        assert_eq!((negative.min(), negative.max()), (-2, 5));

        assert!("4".parse::<UniformFeedback>().is_err());
        assert!("a-b".parse::<UniformFeedback>().is_err());
        assert!("9-2".parse::<UniformFeedback>().is_err());
    }

    #[test]
    fn test_tuple_conversion_validates_bounds() {
        let range = UniformFeedback::try_from((4, 10)).unwrap();
        assert_eq!((range.min(), range.max()), (4, 10));
        assert!(matches!(
            UniformFeedback::try_from((10, 4)),
            Err(LunchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_default_ranges_are_ordered() {
        use crate::planner::constants::{BANDIT_FEEDBACK_RANGE, GREEDY_FEEDBACK_RANGE};

        for range in [GREEDY_FEEDBACK_RANGE, BANDIT_FEEDBACK_RANGE] {
            assert_eq!(
                UniformFeedback::from_bounds(range),
                UniformFeedback::try_from(range).unwrap()
            );
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedFeedback::new(vec![9, 2]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let meal = Meal::new("Burger", 9.0, 6.0, 8.0);

        let out: Vec<i32> = (1..=5)
            .map(|day| source.next_feedback(&mut rng, &meal, day))
            .collect();
        assert_eq!(out, vec![9, 2, 9, 2, 9]);
        assert!(ScriptedFeedback::new(Vec::new()).is_err());
    }
}
