pub mod constants;
pub mod policy;
pub mod scoring;
pub mod update;

pub use constants::*;
pub use policy::{bandit, greedy, select_bandit, select_greedy, Policy, Selection};
pub use scoring::{score, variety_penalty, ScoreBreakdown};
pub use update::{adjusted_craving, update_meal};
