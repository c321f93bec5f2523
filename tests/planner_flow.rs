//! Tests that simulate a user running a planner app over several sessions:
//! every session re-opens the same data file, mutates it, and recomputes the screens from it.

use std::path::PathBuf;

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

use corkboard::{Priority, TaskPatch, TaskStore};
use corkboard::views::list::{list_view, PriorityFilter, StatusFilter};
use corkboard::views::month::{Month, MonthGrid};
use corkboard::views::stats::TaskStats;

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

#[test]
fn test_a_planner_survives_across_sessions() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let file = data_file(&dir);

    let report_due = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();

    // First session: seed the planner and do a day of work
    {
        let mut store = TaskStore::load_or_create(&file);
        assert!(store.tasks().is_empty());

        let report = store.add_task("Write monthly report".to_string(),
            "Figures first".to_string(),
            Priority::High, Some(report_due), false);
        let groceries = store.add_task("Buy groceries".to_string(),
            String::new(),
            Priority::Medium, Some(report_due + Duration::days(1)), false);
        store.add_task("Water the plants".to_string(),
            String::new(),
            Priority::Low, None, false);

        store.complete_task(&groceries);
        store.update_task(&report, TaskPatch {
            description: Some("Figures first, then the summary".to_string()),
            ..TaskPatch::default()
        });
    }

    // Second session: everything is still there
    let store = TaskStore::load_or_create(&file);
    assert_eq!(store.tasks().len(), 3);

    let report = &store.tasks()[0];
    assert_eq!(report.title(), "Write monthly report");
    assert_eq!(report.description(), "Figures first, then the summary");
    assert_eq!(report.completed(), false);
    assert_eq!(report.due_date(), Some(&report_due));
    assert!(store.tasks()[1].completed());

    // ...and every screen can be recomputed from the re-opened snapshot.
    let still_active = list_view(store.tasks(), "", PriorityFilter::empty(), StatusFilter::ACTIVE);
    assert_eq!(still_active.len(), 2);
    assert_eq!(still_active[0].title(), "Write monthly report");
    assert_eq!(still_active[1].title(), "Water the plants");

    let grid = MonthGrid::new(store.tasks(), Month::of(2024, 3).unwrap());
    let report_day = grid.day(report_due.date_naive()).unwrap();
    assert_eq!(report_day.tasks().len(), 1);
    assert_eq!(report_day.tasks()[0].title(), "Write monthly report");

    let stats = TaskStats::collect(store.tasks());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.high_priority_pending, 1);
    assert_eq!(stats.completion_rate(), 33);
}

/// The data file is a plain JSON array with camelCase keys, the format web planners keep in
/// their local storage, so existing data can be opened as-is.
#[test]
fn test_the_data_file_is_a_plain_json_array() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let file = data_file(&dir);

    let mut store = TaskStore::load_or_create(&file);
    store.add_task("Write monthly report".to_string(), String::new(),
        Priority::High, Some(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()), false);

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    let tasks = raw.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Write monthly report");
    assert_eq!(tasks[0]["priority"], "high");
    assert_eq!(tasks[0]["dueDate"], "2024-03-15T09:30:00Z");
    assert_eq!(tasks[0]["completed"], false);
    assert!(tasks[0]["createdAt"].is_string());
    assert!(tasks[0]["id"].is_string());
}
