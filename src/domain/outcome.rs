//! Operation outcomes
//!
//! Every core operation reports its result through [`Outcome`]: the
//! success arm carries a display message plus payload, the error arm is a
//! [`TaskError`] whose `Display` is the failure message. Expected
//! conditions such as a missing ID travel through the error arm, never
//! through panics.

use thiserror::Error;

use super::id::TaskId;
use super::task::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

/// Domain errors surfaced to the caller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Title was empty after trimming
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// Trimmed title is longer than [`MAX_TITLE_LEN`] characters
    #[error("Task title exceeds {} characters", MAX_TITLE_LEN)]
    TitleTooLong,

    /// Description is longer than [`MAX_DESCRIPTION_LEN`] characters
    #[error("Task description exceeds {} characters", MAX_DESCRIPTION_LEN)]
    DescriptionTooLong,

    /// No task with the given ID exists
    #[error("Task with ID {0} not found")]
    NotFound(TaskId),
}

/// Success arm of an [`Outcome`]: a display message plus payload
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    /// Human-readable message describing what happened
    pub message: String,

    /// Operation payload
    pub data: T,
}

impl<T> Reply<T> {
    /// Creates a reply from a message and payload
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Uniform result of every core operation
pub type Outcome<T> = Result<Reply<T>, TaskError>;
