use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::tuner::evaluation::EvaluationResult;

/// Truncate a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all sweep rows to a CSV file.
pub fn write_csv(results: &[EvaluationResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "epsilon",
        "trials",
        "avg_total",
        "min_total",
        "max_total",
        "avg_score",
        "avg_distinct",
        "avg_explored",
    ])?;

    for (i, result) in results.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            format!("{:.3}", result.epsilon()),
            result.trials.to_string(),
            format!("{:.2}", result.avg_total),
            result.min_total.to_string(),
            result.max_total.to_string(),
            format!("{:.3}", result.avg_score),
            format!("{:.2}", result.avg_distinct),
            format!("{:.2}", result.avg_explored),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn result_json(result: &EvaluationResult) -> serde_json::Value {
    serde_json::json!({
        "policy": result.policy,
        "trials": result.trials,
        "avg_total": truncate(result.avg_total, 2),
        "min_total": result.min_total,
        "max_total": result.max_total,
        "avg_score": truncate(result.avg_score, 3),
        "avg_distinct": truncate(result.avg_distinct, 2),
        "avg_explored": truncate(result.avg_explored, 2),
    })
}

/// Write the best row and the greedy baseline to a JSON file.
pub fn write_best_json(
    best: &EvaluationResult,
    baseline: &EvaluationResult,
    path: &Path,
) -> Result<()> {
    let json = serde_json::json!({
        "best": result_json(best),
        "baseline": result_json(baseline),
        "gain_over_greedy": truncate(best.avg_total - baseline.avg_total, 2),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print top-k rows to stdout.
pub fn print_topk(results: &[EvaluationResult], baseline: &EvaluationResult, k: usize) {
    println!("\n=== Top {} Epsilons (by avg total) ===\n", k.min(results.len()));

    for (i, result) in results.iter().take(k).enumerate() {
        let delta = result.avg_total - baseline.avg_total;
        println!(
            "#{}: epsilon={:.3} total={:.2} ({:+.2} vs greedy) range={}..{} score={:.2} distinct={:.1} explored={:.1}",
            i + 1,
            result.epsilon(),
            result.avg_total,
            delta,
            result.min_total,
            result.max_total,
            result.avg_score,
            result.avg_distinct,
            result.avg_explored
        );
    }
    println!();
}
