use crate::models::{DailyRecord, Day, Meal, Weights};
use crate::planner::constants::LOG_NAME_WIDTH;
use crate::planner::ScoreBreakdown;
use crate::simulation::{Comparison, SimulationRun};
use crate::state::Menu;

/// Header line for a run's daily log.
fn run_title(run: &SimulationRun) -> String {
    format!("--- {} Simulation ---", run.policy.label())
}

/// One log line: `Day  N: <name> | Feedback: F`, with a trailing `*` on
/// exploration days when `mark_explored` is set.
pub fn format_run_line(record: &DailyRecord, mark_explored: bool) -> String {
    let marker = if mark_explored && record.explored { "  *" } else { "" };
    format!(
        "Day {:2}: {:<width$} | Feedback: {}{}",
        record.day,
        record.meal,
        record.feedback,
        marker,
        width = LOG_NAME_WIDTH
    )
}

/// Display one run's daily decisions.
pub fn display_run_log(run: &SimulationRun, mark_explored: bool) {
    println!();
    println!("{}", run_title(run));

    if run.records.is_empty() {
        println!("(no days simulated)");
        return;
    }

    for record in &run.records {
        println!("{}", format_run_line(record, mark_explored));
    }
}

/// Display per-meal statistics after a run.
pub fn display_meal_stats(run: &SimulationRun) {
    let max_name_len = run
        .menu
        .meals()
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== {} meal stats ===", run.policy.label());

    for meal in run.menu.meals() {
        println!(
            "  {:<width$}  chosen {:>2}x | avg feedback {:>5.2} | craving {:>5.2}",
            meal.name,
            meal.times_chosen,
            meal.average_reward(),
            meal.craving,
            width = max_name_len
        );
    }

    if let Some(fav) = run.menu.most_chosen() {
        println!(
            "  Most chosen: {} ({} of {} days), {} distinct meals",
            fav.name,
            fav.times_chosen,
            run.days(),
            run.menu.distinct_eaten()
        );
    }
}

/// Display the comparison summary.
pub fn display_summary(comparison: &Comparison, mark_explored: bool) {
    println!();
    println!("Summary:");
    println!(
        "Total Greedy Satisfaction Score: {}",
        comparison.greedy.total
    );
    println!(
        "Total Bandit Satisfaction Score: {}",
        comparison.bandit.total
    );

    let explored = comparison.bandit.explored_days();
    if mark_explored && explored > 0 {
        println!("Bandit explored on {} of {} days (*)", explored, comparison.bandit.days());
    }

    match comparison.winner() {
        Some(run) => println!(
            "{} wins by {}",
            run.policy.label(),
            comparison.margin().abs()
        ),
        None => println!("Tie"),
    }
}

/// Display the score of every meal on `day`, best first.
pub fn display_score_table(menu: &Menu, day: Day, weights: &Weights) {
    if menu.is_empty() {
        println!("Menu: (none)");
        return;
    }

    let max_name_len = menu.meals().iter().map(|m| m.name.len()).max().unwrap_or(10);

    let mut rows: Vec<(&str, ScoreBreakdown)> = menu
        .meals()
        .iter()
        .map(|m| (m.name.as_str(), ScoreBreakdown::of(m, day, weights)))
        .collect();

    // Stable sort keeps menu order among equal scores
    rows.sort_by(|a, b| {
        b.1.total()
            .partial_cmp(&a.1.total())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    println!();
    println!("=== Scores for day {} ===", day);
    println!();

    for (i, (name, breakdown)) in rows.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:>7.2}  (crave {:+.2}, nutrition {:+.2}, cost {:+.2}, variety {:+.2})",
            i + 1,
            name,
            breakdown.total(),
            breakdown.craving,
            breakdown.nutrition,
            -breakdown.cost,
            -breakdown.variety_penalty,
            width = max_name_len
        );
    }
    println!();
}

/// Display one meal's score breakdown on `day`.
pub fn display_meal_score(meal: &Meal, day: Day, weights: &Weights) {
    let breakdown = ScoreBreakdown::of(meal, day, weights);

    println!();
    println!("{} on day {}:", meal.name, day);
    println!("  craving   {:+8.2}", breakdown.craving);
    println!("  nutrition {:+8.2}", breakdown.nutrition);
    println!("  cost      {:+8.2}", -breakdown.cost);
    println!("  variety   {:+8.2}", -breakdown.variety_penalty);
    println!("  total     {:+8.2}", breakdown.total());
    println!();
}

/// Display the menu and the active weights.
pub fn display_menu(menu: &Menu, weights: &Weights) {
    println!();
    println!("=== Menu ({} meals) ===", menu.len());
    println!();

    for meal in menu.meals() {
        println!(
            "  {} - cost {:.2}, nutrition {}, craving {}",
            meal.name, meal.cost, meal.nutrition, meal.craving
        );
    }

    let weights_str: Vec<String> = weights
        .factors()
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();

    println!();
    println!("Weights: {}", weights_str.join(" "));
    println!();
}
