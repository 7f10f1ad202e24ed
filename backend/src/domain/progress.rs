//! Overall completion across the goal list.
//!
//! Always derived from the list passed in; nothing here is cached.

use super::models::goal::DomainGoal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub total_count: usize,
    pub percentage: f64,
}

/// Percentage of completed goals, 0 for an empty list
pub fn overall_progress(goals: &[DomainGoal]) -> f64 {
    summarize(goals).percentage
}

pub fn summarize(goals: &[DomainGoal]) -> ProgressSummary {
    let total_count = goals.len();
    let completed_count = goals.iter().filter(|goal| goal.completed).count();
    let percentage = if total_count == 0 {
        0.0
    } else {
        completed_count as f64 / total_count as f64 * 100.0
    };

    ProgressSummary {
        completed_count,
        total_count,
        percentage,
    }
}

/// Whole percent for labels, rounding halves away from zero
pub fn format_percentage(percentage: f64) -> String {
    format!("{}%", percentage.round() as i64)
}
