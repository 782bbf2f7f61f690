//! Task domain model

use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// Maximum title length in characters, counted after trimming
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation and never reused
    pub id: TaskId,

    /// Human-readable title; non-empty, stored trimmed
    pub title: String,

    /// Free-form description; may be empty
    #[serde(default)]
    pub description: String,

    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a new incomplete task
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Flips the completion flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Returns the display marker for the completion state
    pub fn marker(&self) -> &'static str {
        if self.completed {
            "[X]"
        } else {
            "[ ]"
        }
    }
}
