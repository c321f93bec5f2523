//! Aggregate figures about a snapshot, as shown on the dashboard header

use crate::task::{Priority, Task};

/// The counters the dashboard displays above the task list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Pending tasks with a high priority, the "needs attention" figure
    pub high_priority_pending: usize,
}

impl TaskStats {
    /// Count a snapshot in a single pass
    pub fn collect(tasks: &[Task]) -> Self {
        let mut stats = Self::default();
        for task in tasks {
            stats.total += 1;
            if task.completed() {
                stats.completed += 1;
            } else {
                stats.pending += 1;
                if task.priority() == Priority::High {
                    stats.high_priority_pending += 1;
                }
            }
        }
        stats
    }

    /// The completed share of the snapshot, as a percentage rounded to the nearest integer.
    ///
    /// An empty snapshot has a rate of 0, not a division by zero.
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }
}
