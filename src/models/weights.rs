use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LunchError, Result};
use crate::planner::constants::{
    DEFAULT_COST_WEIGHT, DEFAULT_CRAVING_WEIGHT, DEFAULT_NUTRITION_WEIGHT, DEFAULT_VARIETY_WEIGHT,
};

/// Multipliers for the linear meal utility.
///
/// All four factors are required and must be non-negative. Costs and the
/// variety penalty are subtracted by the scorer, so weights never carry a sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub craving: f64,
    pub nutrition: f64,
    pub cost: f64,
    pub variety: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            craving: DEFAULT_CRAVING_WEIGHT,
            nutrition: DEFAULT_NUTRITION_WEIGHT,
            cost: DEFAULT_COST_WEIGHT,
            variety: DEFAULT_VARIETY_WEIGHT,
        }
    }
}

impl Weights {
    /// Create validated weights.
    pub fn new(craving: f64, nutrition: f64, cost: f64, variety: f64) -> Result<Self> {
        let weights = Self {
            craving,
            nutrition,
            cost,
            variety,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Same multiplier for every factor.
    pub fn uniform(value: f64) -> Result<Self> {
        Self::new(value, value, value, value)
    }

    /// Build weights from a factor-name mapping.
    ///
    /// Accepts `crave` or `craving` for the craving factor. Unknown keys are
    /// ignored; a missing factor is reported by name.
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self> {
        let lookup = |names: &[&str]| -> Result<f64> {
            names
                .iter()
                .find_map(|name| map.get(*name).copied())
                .ok_or_else(|| LunchError::MissingConfig(names[0].to_string()))
        };

        Self::new(
            lookup(&["crave", "craving"])?,
            lookup(&["nutrition"])?,
            lookup(&["cost"])?,
            lookup(&["variety"])?,
        )
    }

    /// Reject negative or non-finite factors.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.factors() {
            if !value.is_finite() || value < 0.0 {
                return Err(LunchError::InvalidInput(format!(
                    "weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Named factors in display order.
    pub fn factors(&self) -> [(&'static str, f64); 4] {
        [
            ("crave", self.craving),
            ("nutrition", self.nutrition),
            ("cost", self.cost),
            ("variety", self.variety),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map() -> HashMap<String, f64> {
        [("crave", 1.0), ("nutrition", 1.2), ("cost", 0.8), ("variety", 1.5)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_from_map_matches_default() {
        let weights = Weights::from_map(&full_map()).unwrap();
        assert_eq!(weights, Weights::default());
    }

    #[test]
    fn test_from_map_accepts_craving_alias() {
        let mut map = full_map();
        let value = map.remove("crave").unwrap();
        map.insert("craving".to_string(), value);

        let weights = Weights::from_map(&map).unwrap();
        assert_eq!(weights.craving, 1.0);
    }

    #[test]
    fn test_from_map_missing_factor() {
        let mut map = full_map();
        map.remove("variety");

        match Weights::from_map(&map) {
            Err(LunchError::MissingConfig(name)) => assert_eq!(name, "variety"),
            other => panic!("expected MissingConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(matches!(
            Weights::new(1.0, -0.5, 1.0, 1.0),
            Err(LunchError::InvalidInput(_))
        ));
        assert!(Weights::uniform(f64::INFINITY).is_err());
        assert!(Weights::uniform(0.0).is_ok());
    }
}
