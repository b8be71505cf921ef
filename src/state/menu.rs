use std::collections::HashSet;

use crate::error::{LunchError, Result};
use crate::models::Meal;

/// Ordered collection of meals owned by one simulation run.
///
/// Order matters: the greedy policy breaks ties by position.
#[derive(Debug, Clone)]
pub struct Menu {
    meals: Vec<Meal>,
}

impl Menu {
    /// Create a menu, rejecting invalid meals and duplicate names.
    pub fn new(meals: Vec<Meal>) -> Result<Self> {
        let mut seen = HashSet::new();
        for meal in &meals {
            if !meal.is_valid() {
                return Err(LunchError::InvalidInput(format!(
                    "meal '{}' has invalid attributes",
                    meal.name
                )));
            }
            if !seen.insert(meal.key()) {
                return Err(LunchError::InvalidInput(format!(
                    "duplicate meal '{}'",
                    meal.name
                )));
            }
        }
        Ok(Self { meals })
    }

    /// The built-in lunch catalog.
    pub fn default_catalog() -> Self {
        Self {
            meals: vec![
                Meal::new("Turkey Sandwich", 7.5, 8.0, 7.0),
                Meal::new("Veggie Bowl", 6.0, 9.0, 5.0),
                Meal::new("Pizza Slice", 5.5, 4.0, 9.0),
                Meal::new("Tofu Stir Fry", 8.0, 10.0, 6.0),
                Meal::new("Burger", 9.0, 6.0, 8.0),
                Meal::new("PB&J Sandwich", 3.0, 4.0, 5.0),
                Meal::new("Steak Filet", 12.0, 10.0, 7.0),
            ],
        }
    }

    /// Independent deep copy for a new run.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Get a meal by name (case-insensitive).
    pub fn get_meal(&self, name: &str) -> Option<&Meal> {
        let key = name.to_lowercase();
        self.meals.iter().find(|m| m.key() == key)
    }

    /// Get a meal by name, failing if absent.
    pub fn require_meal(&self, name: &str) -> Result<&Meal> {
        self.get_meal(name)
            .ok_or_else(|| LunchError::MealNotFound(name.to_string()))
    }

    /// Meals in menu order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Mutable access to the meal at `index`.
    pub fn meal_mut(&mut self, index: usize) -> Option<&mut Meal> {
        self.meals.get_mut(index)
    }

    /// Meal chosen most often; earliest wins ties. None if nothing was eaten.
    pub fn most_chosen(&self) -> Option<&Meal> {
        self.meals
            .iter()
            .filter(|m| m.has_been_eaten())
            .fold(None, |best: Option<&Meal>, m| match best {
                Some(b) if b.times_chosen >= m.times_chosen => Some(b),
                _ => Some(m),
            })
    }

    /// Sum of feedback recorded across all meals.
    pub fn total_reward(&self) -> i64 {
        self.meals.iter().map(|m| m.cumulative_reward).sum()
    }

    /// Number of distinct meals eaten at least once.
    pub fn distinct_eaten(&self) -> usize {
        self.meals.iter().filter(|m| m.has_been_eaten()).count()
    }

    /// Convert to the owned meal list.
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals
    }

    /// Count of meals in the menu.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Check if menu has no meals.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
