pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod simulation;
pub mod state;
pub mod tuner;

pub use error::{LunchError, Result};
pub use models::{DailyRecord, Day, Meal, Weights};
