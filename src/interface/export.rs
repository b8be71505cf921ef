use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::simulation::{Comparison, SimulationRun};

/// Write the daily logs of both runs to a CSV file.
pub fn write_log_csv(comparison: &Comparison, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["policy", "day", "meal", "feedback", "score", "explored"])?;

    for run in [&comparison.greedy, &comparison.bandit] {
        for record in &run.records {
            wtr.write_record([
                run.policy.label().to_lowercase(),
                record.day.to_string(),
                record.meal.clone(),
                record.feedback.to_string(),
                format!("{:.3}", record.score),
                record.explored.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn run_json(run: &SimulationRun) -> serde_json::Value {
    serde_json::json!({
        "policy": run.policy,
        "total": run.total,
        "average_feedback": run.average_feedback(),
        "explored_days": run.explored_days(),
        "records": run.records,
        "meals": run.menu.meals(),
    })
}

/// Write both runs and the outcome to a JSON file.
pub fn write_summary_json(comparison: &Comparison, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "greedy": run_json(&comparison.greedy),
        "bandit": run_json(&comparison.bandit),
        "winner": comparison.winner().map(|r| r.policy.label()),
        "margin": comparison.margin(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}
