//! Derived views over the current task snapshot
//!
//! Everything in here is a pure function of the task list: given the same snapshot and the same
//! parameters it returns the same result, and it never mutates the tasks it is handed. The store
//! remains the only writer; pages re-derive their view from a fresh snapshot after every
//! mutation.
//!
//! * [`list`] — the searchable, filterable, sorted flat list
//! * [`month`] — the month calendar grid, with tasks bucketed per day
//! * [`stats`] — the counters shown on the dashboard

pub mod list;
pub mod month;
pub mod stats;
