//! This crate provides the task-management core of a to-do planner app.
//!
//! Tasks are kept in a [`TaskStore`]: a flat list of [`Task`]s that is saved back to a single JSON file after every change, so that a later session can simply pick the data up again.
//!
//! The screens of an app are not stored, they are derived. The [`views`] module computes them from the current task snapshot: \
//! [`views::list`] filters, searches and sorts the main task list, \
//! [`views::month`] lays tasks out on a month calendar grid, \
//! and [`views::stats`] computes the dashboard counters.

mod task;
pub use task::{Priority, Task, TaskId, TaskPatch};
pub mod store;
pub use store::TaskStore;

pub mod views;
pub mod utils;
