pub mod evaluation;
pub mod output;
pub mod search;

pub use evaluation::{evaluate_policy, EvaluationResult};
pub use output::{print_topk, write_best_json, write_csv};
pub use search::{run_sweep, SweepConfig, SweepResults};
