use thiserror::Error;

#[derive(Debug, Error)]
pub enum LunchError {
    #[error("Invalid input: no meals to choose from")]
    EmptyMenu,

    #[error("Missing configuration: weight for '{0}' is required")]
    MissingConfig(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LunchError>;
