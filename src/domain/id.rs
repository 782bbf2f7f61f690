//! Sequential task identifiers
//!
//! Task IDs are positive integers handed out in creation order starting
//! at 1. They are never reused: deleting a task leaves a permanent gap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID: expected a positive integer, got '{0}'")]
    Invalid(String),
}

/// Task ID: a positive integer assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// The first ID a fresh store hands out
    pub const FIRST: TaskId = TaskId(1);

    /// Returns the numeric value of the ID
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the ID that follows this one
    pub fn next(&self) -> TaskId {
        TaskId(self.0 + 1)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u64>() {
            Ok(n) if n > 0 => Ok(TaskId(n)),
            _ => Err(IdError::Invalid(s.to_string())),
        }
    }
}
