//! The flat, filterable list of tasks
//!
//! [`list_view`] narrows a snapshot down with a text search and two set filters, then orders
//! what is left so that the most pressing tasks come first.

use std::cmp::Ordering;

use bitflags::bitflags;

use crate::task::{Priority, Task};

bitflags! {
    /// Which priorities the list should show.
    ///
    /// An empty set means "do not filter on priority at all", not "show nothing": filters start
    /// out empty and only restrict once the user ticks a box.
    pub struct PriorityFilter: u8 {
        const LOW = 1;
        const MEDIUM = 2;
        const HIGH = 4;
    }
}

impl PriorityFilter {
    /// Whether a task with this priority passes the filter
    pub fn matches(&self, priority: Priority) -> bool {
        self.is_empty() || self.contains(priority.into())
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityFilter::LOW,
            Priority::Medium => PriorityFilter::MEDIUM,
            Priority::High => PriorityFilter::HIGH,
        }
    }
}

bitflags! {
    /// Which completion states the list should show.
    ///
    /// Follows the same convention as [`PriorityFilter`]: an empty set lets everything through.
    pub struct StatusFilter: u8 {
        /// Tasks that still need doing
        const ACTIVE = 1;
        /// Tasks already marked as done
        const COMPLETED = 2;
    }
}

impl StatusFilter {
    /// Whether a task with this completion state passes the filter
    pub fn matches(&self, completed: bool) -> bool {
        if self.is_empty() {
            return true;
        }
        if completed {
            self.contains(StatusFilter::COMPLETED)
        } else {
            self.contains(StatusFilter::ACTIVE)
        }
    }
}

/// Filter and sort a snapshot for display as a flat list.
///
/// A task is kept when all three conditions hold:
/// * `search_term` is empty, or appears case-insensitively in the title or the description
/// * its priority passes `priorities`
/// * its completion state passes `statuses`
///
/// The result is ordered by [`compare_tasks`]. The sort is stable, so tasks that compare equal
/// keep their snapshot order.
pub fn list_view<'a>(tasks: &'a [Task], search_term: &str,
                     priorities: PriorityFilter, statuses: StatusFilter) -> Vec<&'a Task> {
    let search_term = search_term.to_lowercase();

    let mut selection: Vec<&Task> = tasks.iter()
        .filter(|task| matches_search(task, &search_term))
        .filter(|task| priorities.matches(task.priority()))
        .filter(|task| statuses.matches(task.completed()))
        .collect();

    selection.sort_by(|left, right| compare_tasks(left, right));
    selection
}

fn matches_search(task: &Task, lowercase_term: &str) -> bool {
    task.title().to_lowercase().contains(lowercase_term)
        || task.description().to_lowercase().contains(lowercase_term)
}

/// Compare two tasks for display order.
///
/// The precedence is:
/// 1. tasks still to do come before completed ones
/// 2. tasks with a due date come before tasks without one, earliest due date first
/// 3. between two tasks without due dates, the higher priority comes first
///
/// Anything beyond that (e.g. two tasks due at the very same time) is a tie; callers that need
/// a deterministic order should use a stable sort, which keeps ties in their original order.
pub fn compare_tasks(left: &Task, right: &Task) -> Ordering {
    // false < true, so pending tasks sort before completed ones
    let by_completion = left.completed().cmp(&right.completed());
    if by_completion != Ordering::Equal {
        return by_completion;
    }

    match (left.due_date(), right.due_date()) {
        (Some(l), Some(r)) => l.cmp(r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => left.priority().sort_rank().cmp(&right.priority().sort_rank()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Duration, TimeZone, Utc};

    use crate::task::TaskId;

    fn task(title: &str, description: &str, priority: Priority,
            due_in_hours: Option<i64>, completed: bool) -> Task {
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap();
        Task::new_with_parameters(
            TaskId::random(),
            title.to_string(),
            description.to_string(),
            priority,
            due_in_hours.map(|hours| now + Duration::hours(hours)),
            completed,
            now,
        )
    }

    fn titles<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|task| task.title()).collect()
    }

    #[test]
    fn pending_then_due_dates_then_priority() {
        let tasks = vec![
            task("C", "", Priority::High, Some(2), true),    // completed, due today
            task("B", "", Priority::High, None, false),      // pending, no due date
            task("A", "", Priority::Low, Some(26), false),   // pending, due tomorrow
        ];

        let view = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::empty());
        assert_eq!(titles(&view), vec!["A", "B", "C"]);
    }

    #[test]
    fn earliest_due_date_first() {
        let tasks = vec![
            task("later", "", Priority::High, Some(48), false),
            task("sooner", "", Priority::Low, Some(1), false),
            task("dateless", "", Priority::High, None, false),
        ];

        let view = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::empty());
        assert_eq!(titles(&view), vec!["sooner", "later", "dateless"]);
    }

    #[test]
    fn priority_breaks_ties_between_dateless_tasks() {
        let tasks = vec![
            task("low", "", Priority::Low, None, false),
            task("high", "", Priority::High, None, false),
            task("medium", "", Priority::Medium, None, false),
        ];

        let view = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::empty());
        assert_eq!(titles(&view), vec!["high", "medium", "low"]);
    }

    #[test]
    fn ties_keep_snapshot_order() {
        let tasks = vec![
            task("first", "", Priority::Medium, None, false),
            task("second", "", Priority::Medium, None, false),
            task("third", "", Priority::Medium, None, false),
        ];

        let view = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::empty());
        assert_eq!(titles(&view), vec!["first", "second", "third"]);
    }

    #[test]
    fn search_is_case_insensitive_and_covers_descriptions() {
        let tasks = vec![
            task("Dentist APPOINTMENT", "", Priority::Medium, None, false),
            task("Groceries", "appointment slips to print", Priority::Medium, None, false),
            task("Unrelated", "", Priority::Medium, None, false),
        ];

        let view = list_view(&tasks, "appointment", PriorityFilter::empty(), StatusFilter::empty());
        assert_eq!(view.len(), 2);

        // An empty search term matches everything
        let view = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::empty());
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn priority_and_status_filters_combine() {
        let tasks = vec![
            task("wanted", "", Priority::High, None, false),
            task("done already", "", Priority::High, None, true),
            task("not urgent", "", Priority::Low, None, false),
            task("neither", "", Priority::Low, None, true),
        ];

        let view = list_view(&tasks, "", PriorityFilter::HIGH, StatusFilter::ACTIVE);
        assert_eq!(titles(&view), vec!["wanted"]);
    }

    #[test]
    fn empty_filters_do_not_filter() {
        let tasks = vec![
            task("a", "", Priority::High, None, false),
            task("b", "", Priority::Low, None, true),
        ];

        assert!(PriorityFilter::empty().matches(Priority::Low));
        assert!(StatusFilter::empty().matches(true));
        let view = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::empty());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn status_filter_selects_either_side() {
        let tasks = vec![
            task("todo", "", Priority::Medium, None, false),
            task("done", "", Priority::Medium, None, true),
        ];

        let active = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::ACTIVE);
        assert_eq!(titles(&active), vec!["todo"]);

        let completed = list_view(&tasks, "", PriorityFilter::empty(), StatusFilter::COMPLETED);
        assert_eq!(titles(&completed), vec!["done"]);

        let both = list_view(&tasks, "", PriorityFilter::empty(),
                             StatusFilter::ACTIVE | StatusFilter::COMPLETED);
        assert_eq!(both.len(), 2);
    }
}
