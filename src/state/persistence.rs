use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{Meal, Weights};
use crate::state::Menu;

/// Meals and weights for a simulation.
#[derive(Debug, Clone)]
pub struct LunchConfig {
    pub weights: Weights,
    pub menu: Menu,
}

impl Default for LunchConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            menu: Menu::default_catalog(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    weights: Option<HashMap<String, f64>>,
    meals: Vec<Meal>,
}

/// Static meal attributes as written to a config file.
#[derive(Debug, Serialize)]
struct MealEntry<'a> {
    name: &'a str,
    cost: f64,
    nutrition: f64,
    craving: f64,
}

#[derive(Debug, Serialize)]
struct ConfigFileOut<'a> {
    weights: HashMap<&'static str, f64>,
    meals: Vec<MealEntry<'a>>,
}

/// Load meals and weights from a JSON file.
///
/// A file without a `weights` object uses the default weights; a `weights`
/// object missing a factor is an error.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LunchConfig> {
    let content = fs::read_to_string(path.as_ref())?;
    let raw: ConfigFile = serde_json::from_str(&content)?;

    let weights = match raw.weights {
        Some(map) => Weights::from_map(&map)?,
        None => Weights::default(),
    };
    let menu = Menu::new(raw.meals)?;

    debug!(
        path = %path.as_ref().display(),
        meals = menu.len(),
        "loaded lunch config"
    );

    Ok(LunchConfig { weights, menu })
}

/// Write static meal attributes and weights to a JSON file.
///
/// Simulation state is never written.
pub fn save_config<P: AsRef<Path>>(path: P, config: &LunchConfig) -> Result<()> {
    let out = ConfigFileOut {
        weights: config.weights.factors().into_iter().collect(),
        meals: config
            .menu
            .meals()
            .iter()
            .map(|m| MealEntry {
                name: &m.name,
                cost: m.cost,
                nutrition: m.nutrition,
                craving: m.craving,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&out)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LunchError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_temp(
            r#"{
                "weights": {"crave": 2.0, "nutrition": 1.0, "cost": 0.5, "variety": 1.0},
                "meals": [
                    {"name": "Ramen", "cost": 11, "nutrition": 5, "craving": 8},
                    {"name": "Salad", "cost": 9, "nutrition": 9, "craving": 4}
                ]
            }"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.weights.craving, 2.0);
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.menu.meals()[1].name, "Salad");
    }

    #[test]
    fn test_missing_weights_object_uses_defaults() {
        let file = write_temp(r#"{"meals": [{"name": "Ramen", "cost": 11, "nutrition": 5, "craving": 8}]}"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.weights, Weights::default());
    }

    #[test]
    fn test_missing_factor_is_reported() {
        let file = write_temp(
            r#"{"weights": {"crave": 1.0, "nutrition": 1.0, "variety": 1.0},
                "meals": [{"name": "Ramen", "cost": 11, "nutrition": 5, "craving": 8}]}"#,
        );

        match load_config(file.path()) {
            Err(LunchError::MissingConfig(name)) => assert_eq!(name, "cost"),
            other => panic!("expected MissingConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_reload() {
        let config = LunchConfig::default();
        let out_file = NamedTempFile::new().unwrap();
        save_config(out_file.path(), &config).unwrap();

        let reloaded = load_config(out_file.path()).unwrap();
        assert_eq!(reloaded.weights, config.weights);
        assert_eq!(reloaded.menu.len(), config.menu.len());
        assert_eq!(reloaded.menu.meals()[6].name, "Steak Filet");
    }
}
