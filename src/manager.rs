//! Task mutation operations
//!
//! The manager is the only component that writes to the store. Every
//! operation validates before mutating, so a failed call leaves the store
//! untouched, including the ID counter.

use crate::domain::{Outcome, Reply, Task, TaskError, TaskId, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::store::TaskStore;

/// Trims a title and checks the emptiness and length rules
fn validate_title(title: &str) -> Result<&str, TaskError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(TaskError::TitleTooLong);
    }
    Ok(trimmed)
}

/// Checks the description length rule; descriptions are not trimmed
fn validate_description(description: &str) -> Result<(), TaskError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TaskError::DescriptionTooLong);
    }
    Ok(())
}

/// Validates and creates a new task. The ID counter advances only when
/// validation passes.
pub fn add_task(store: &mut TaskStore, title: &str, description: &str) -> Outcome<Task> {
    let title = validate_title(title)?;
    validate_description(description)?;

    let task = store.create(title.to_string(), description.to_string()).clone();
    Ok(Reply::new("Task added successfully", task))
}

/// Flips the completion flag of the task with the given ID.
pub fn toggle_task(store: &mut TaskStore, id: TaskId) -> Outcome<Task> {
    let task = store.find_mut(id).ok_or(TaskError::NotFound(id))?;

    let status = if task.toggle() { "completed" } else { "incomplete" };
    let task = task.clone();
    Ok(Reply::new(format!("Task {id} marked as {status}"), task))
}

/// Applies the supplied fields to the task with the given ID.
///
/// `None` leaves a field unchanged; `Some` applies it under the same rules
/// as [`add_task`] (titles trimmed and validated, descriptions
/// length-checked but not trimmed). All supplied fields are validated
/// before any is written, so a failure never leaves a partial update.
pub fn update_task(
    store: &mut TaskStore,
    id: TaskId,
    title: Option<&str>,
    description: Option<&str>,
) -> Outcome<Task> {
    if store.find(id).is_none() {
        return Err(TaskError::NotFound(id));
    }

    let new_title = title.map(validate_title).transpose()?;
    if let Some(description) = description {
        validate_description(description)?;
    }

    let task = store.find_mut(id).ok_or(TaskError::NotFound(id))?;
    if let Some(new_title) = new_title {
        task.title = new_title.to_string();
    }
    if let Some(description) = description {
        task.description = description.to_string();
    }

    let task = task.clone();
    Ok(Reply::new(format!("Task {id} updated successfully"), task))
}

/// Removes the task with the given ID.
pub fn delete_task(store: &mut TaskStore, id: TaskId) -> Outcome<()> {
    if !store.remove(id) {
        return Err(TaskError::NotFound(id));
    }
    Ok(Reply::new(format!("Task {id} deleted successfully"), ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_task_assigns_id_and_stores() {
        let mut store = TaskStore::new();

        let reply = add_task(&mut store, "Buy groceries", "Milk, Eggs, Bread").unwrap();

        assert_eq!(reply.message, "Task added successfully");
        assert_eq!(reply.data.id, TaskId::FIRST);
        assert_eq!(reply.data.title, "Buy groceries");
        assert_eq!(reply.data.description, "Milk, Eggs, Bread");
        assert!(!reply.data.completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_task_trims_title() {
        let mut store = TaskStore::new();

        let reply = add_task(&mut store, "  Buy milk  ", "").unwrap();
        assert_eq!(reply.data.title, "Buy milk");
    }

    #[test]
    fn add_task_rejects_empty_title() {
        let mut store = TaskStore::new();

        assert_eq!(add_task(&mut store, "", ""), Err(TaskError::EmptyTitle));
        assert_eq!(add_task(&mut store, "   ", ""), Err(TaskError::EmptyTitle));
        assert!(store.is_empty());
    }

    #[test]
    fn add_task_rejects_overlong_title() {
        let mut store = TaskStore::new();

        let result = add_task(&mut store, &"A".repeat(MAX_TITLE_LEN + 1), "");
        assert_eq!(result, Err(TaskError::TitleTooLong));
        assert!(store.is_empty());
    }

    #[test]
    fn add_task_accepts_limit_lengths() {
        let mut store = TaskStore::new();

        let title = "A".repeat(MAX_TITLE_LEN);
        let description = "D".repeat(MAX_DESCRIPTION_LEN);
        assert!(add_task(&mut store, &title, &description).is_ok());
    }

    #[test]
    fn add_task_rejects_overlong_description() {
        let mut store = TaskStore::new();

        let result = add_task(&mut store, "Valid", &"D".repeat(MAX_DESCRIPTION_LEN + 1));
        assert_eq!(result, Err(TaskError::DescriptionTooLong));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_add_does_not_advance_counter() {
        let mut store = TaskStore::new();

        add_task(&mut store, "", "").unwrap_err();
        add_task(&mut store, &"A".repeat(201), "").unwrap_err();

        let reply = add_task(&mut store, "First valid", "").unwrap();
        assert_eq!(reply.data.id, TaskId::FIRST);
    }

    #[test]
    fn toggle_task_flips_and_reports_state() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Toggle me", "").unwrap();

        let reply = toggle_task(&mut store, TaskId::FIRST).unwrap();
        assert!(reply.data.completed);
        assert_eq!(reply.message, "Task 1 marked as completed");

        let reply = toggle_task(&mut store, TaskId::FIRST).unwrap();
        assert!(!reply.data.completed);
        assert_eq!(reply.message, "Task 1 marked as incomplete");
    }

    #[test]
    fn toggle_task_unknown_id() {
        let mut store = TaskStore::new();

        let result = toggle_task(&mut store, TaskId::from(9));
        assert_eq!(result, Err(TaskError::NotFound(TaskId::from(9))));
    }

    #[test]
    fn update_task_title_only_keeps_description() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Old title", "Keep me").unwrap();

        let reply = update_task(&mut store, TaskId::FIRST, Some("New title"), None).unwrap();

        assert_eq!(reply.message, "Task 1 updated successfully");
        assert_eq!(reply.data.title, "New title");
        assert_eq!(reply.data.description, "Keep me");
    }

    #[test]
    fn update_task_description_only_keeps_title() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Keep me", "Old description").unwrap();

        let reply = update_task(&mut store, TaskId::FIRST, None, Some("New description")).unwrap();

        assert_eq!(reply.data.title, "Keep me");
        assert_eq!(reply.data.description, "New description");
    }

    #[test]
    fn update_task_does_not_trim_description() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Task", "").unwrap();

        let reply = update_task(&mut store, TaskId::FIRST, None, Some("  padded  ")).unwrap();
        assert_eq!(reply.data.description, "  padded  ");
    }

    #[test]
    fn update_task_supplied_empty_description_clears_it() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Task", "Something").unwrap();

        let reply = update_task(&mut store, TaskId::FIRST, None, Some("")).unwrap();
        assert_eq!(reply.data.description, "");
    }

    #[test]
    fn update_task_invalid_title_aborts_whole_update() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Old title", "Old description").unwrap();

        let result = update_task(&mut store, TaskId::FIRST, Some("   "), Some("New description"));
        assert_eq!(result, Err(TaskError::EmptyTitle));

        // Neither field changed, even though the description was valid.
        let task = store.find(TaskId::FIRST).unwrap();
        assert_eq!(task.title, "Old title");
        assert_eq!(task.description, "Old description");
    }

    #[test]
    fn update_task_invalid_description_aborts_whole_update() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Old title", "Old description").unwrap();

        let long_description = "D".repeat(MAX_DESCRIPTION_LEN + 1);
        let result = update_task(
            &mut store,
            TaskId::FIRST,
            Some("New title"),
            Some(long_description.as_str()),
        );
        assert_eq!(result, Err(TaskError::DescriptionTooLong));

        let task = store.find(TaskId::FIRST).unwrap();
        assert_eq!(task.title, "Old title");
        assert_eq!(task.description, "Old description");
    }

    #[test]
    fn update_task_unknown_id() {
        let mut store = TaskStore::new();

        let result = update_task(&mut store, TaskId::from(4), Some("New"), None);
        assert_eq!(result, Err(TaskError::NotFound(TaskId::from(4))));
    }

    #[test]
    fn delete_task_removes_and_frees_nothing_else() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Delete me", "").unwrap();
        add_task(&mut store, "Keep me", "").unwrap();

        let reply = delete_task(&mut store, TaskId::FIRST).unwrap();
        assert_eq!(reply.message, "Task 1 deleted successfully");
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Keep me");
    }

    #[test]
    fn deleted_id_is_gone_for_good() {
        let mut store = TaskStore::new();
        add_task(&mut store, "Delete me", "").unwrap();

        delete_task(&mut store, TaskId::FIRST).unwrap();

        let result = toggle_task(&mut store, TaskId::FIRST);
        assert_eq!(result, Err(TaskError::NotFound(TaskId::FIRST)));
    }
}
