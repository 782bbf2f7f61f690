//! Read-only task queries and display formatting

use crate::domain::{Reply, Task};
use crate::store::TaskStore;

/// Width of the separator line under the list header
const SEPARATOR_WIDTH: usize = 20;

/// Returns every task in insertion order. Always succeeds; an empty store
/// yields an empty sequence.
pub fn list_tasks(store: &TaskStore) -> Reply<Vec<Task>> {
    Reply::new("Tasks retrieved", store.tasks().to_vec())
}

/// Renders the task list as a single display block.
pub fn format_list(store: &TaskStore) -> Reply<String> {
    if store.is_empty() {
        return Reply::new("Standard view", "No tasks found".to_string());
    }

    let mut lines = vec!["Current Todo List:".to_string(), "-".repeat(SEPARATOR_WIDTH)];
    for task in store.tasks() {
        lines.push(format!("ID: {} {} {}", task.id, task.marker(), task.title));
        if !task.description.is_empty() {
            lines.push(format!("   Desc: {}", task.description));
        }
    }

    Reply::new("Formatted view", lines.join("\n"))
}
