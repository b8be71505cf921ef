pub mod meal;
pub mod record;
pub mod weights;

pub use meal::Meal;
pub use record::DailyRecord;
pub use weights::Weights;

/// Simulation day index. Signed so "never eaten" can sit before day 1.
pub type Day = i64;
