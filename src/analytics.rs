//! Aggregate statistics over the task list

use serde::Serialize;

use crate::domain::Reply;
use crate::store::TaskStore;

/// Completion statistics for the whole store
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of tasks
    pub total: usize,

    /// Number of completed tasks
    pub completed: usize,

    /// Number of incomplete tasks
    pub pending: usize,

    /// Completed share in percent, rounded to two decimals. Exactly 0.0
    /// for an empty store.
    pub percentage: f64,
}

/// Computes completion statistics. Always succeeds.
pub fn get_summary(store: &TaskStore) -> Reply<Summary> {
    let total = store.len();
    let completed = store.tasks().iter().filter(|t| t.completed).count();
    let pending = total - completed;
    let percentage = if total == 0 {
        0.0
    } else {
        round2(completed as f64 / total as f64 * 100.0)
    };

    Reply::new(
        "Analytics calculated successfully",
        Summary {
            total,
            completed,
            pending,
            percentage,
        },
    )
}

/// Rounds to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
