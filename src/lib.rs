//! Todo CLI - An in-memory task list manager
//!
//! Tasks live only for the lifetime of the process. The core exposes
//! create, toggle, update, and delete operations plus listing, display
//! formatting, and summary statistics, all over a caller-owned
//! [`TaskStore`]. The interactive menu shell in [`cli`] is a thin layer
//! with no rules of its own.

pub mod analytics;
pub mod cli;
pub mod domain;
pub mod manager;
pub mod store;
pub mod viewer;

pub use domain::{Outcome, Reply, Task, TaskError, TaskId};
pub use store::TaskStore;
