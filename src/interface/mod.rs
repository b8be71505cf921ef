pub mod export;
pub mod render;

pub use export::{write_log_csv, write_summary_json};
pub use render::{
    display_meal_score, display_meal_stats, display_menu, display_run_log, display_score_table,
    display_summary, format_run_line,
};
