//! In-memory task storage
//!
//! [`TaskStore`] owns the ordered task list and the next-ID counter. It is
//! a plain container: validation lives in [`crate::manager`]. The caller
//! owns the store and passes it by reference, so every test gets an
//! isolated instance without shared global state.

use crate::domain::{Task, TaskId};

/// Ordered in-memory task collection with a monotonic ID counter
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store with the counter at 1
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Appends a new task under the current counter value and advances the
    /// counter. No validation happens here.
    pub fn create(&mut self, title: String, description: String) -> &Task {
        let task = Task::new(self.next_id, title, description);
        self.next_id = self.next_id.next();
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// First task with the given ID, if any
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Mutable access to the first task with the given ID, if any
    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Removes the task with the given ID, keeping the relative order of
    /// the survivors. Returns whether a task was removed.
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently held
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the store holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drops every task and resets the counter to 1. Lifecycle control for
    /// tests; normal flows never call this.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.next_id = TaskId::FIRST;
    }
}
