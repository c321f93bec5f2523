//! This is an example of how corkboard can be used.
//! This binary seeds a small planner, ticks off and reschedules some tasks, and prints the
//! resulting list views.

use std::path::Path;

use chrono::{Duration, Utc};

use corkboard::{Priority, TaskPatch, TaskStore};
use corkboard::views::list::{list_view, PriorityFilter, StatusFilter};
use corkboard::views::stats::TaskStats;

const DATA_FOLDER: &str = "planner_data";


fn main() {
    env_logger::init();

    println!("This example shows how tasks are stored, and how the task list screens are computed from them.");
    println!("Tasks are saved in the '{}' folder, so running this example again re-opens the same planner.", DATA_FOLDER);
    println!("You can also set the RUST_LOG environment variable to display more info about storage.");
    println!("");

    if let Err(err) = std::fs::create_dir_all(DATA_FOLDER) {
        log::error!("Unable to create the data folder: {}", err);
        return;
    }
    let data_file = Path::new(DATA_FOLDER).join("tasks.json");
    let mut store = TaskStore::load_or_create(&data_file);

    if store.tasks().is_empty() {
        println!("This looks like a fresh planner, let's seed a few tasks.");
        seed_example_tasks(&mut store);
    }

    println!("---- the whole planner -----");
    corkboard::utils::print_task_list(&list_view(store.tasks(), "", PriorityFilter::empty(), StatusFilter::empty()));

    tick_off_the_first_task(&mut store);
    postpone_the_groceries(&mut store);

    println!("---- still to do -----");
    corkboard::utils::print_task_list(&list_view(store.tasks(), "", PriorityFilter::empty(), StatusFilter::ACTIVE));

    println!("---- searching for 'report' -----");
    corkboard::utils::print_task_list(&list_view(store.tasks(), "report", PriorityFilter::empty(), StatusFilter::empty()));

    let stats = TaskStats::collect(store.tasks());
    println!("");
    println!("{} tasks in the planner, {} still pending ({} of them high-priority). {}% done.",
        stats.total, stats.pending, stats.high_priority_pending, stats.completion_rate());
}

fn seed_example_tasks(store: &mut TaskStore) {
    store.add_task("Write monthly report".to_string(),
        "Figures first, then the summary".to_string(),
        Priority::High, Some(Utc::now() + Duration::hours(26)), false);
    store.add_task("Buy groceries".to_string(),
        "Milk, bread, coffee".to_string(),
        Priority::Medium, Some(Utc::now() + Duration::hours(4)), false);
    store.add_task("Water the plants".to_string(),
        String::new(),
        Priority::Low, None, false);
    store.add_task("Renew passport".to_string(),
        "The old one expires this summer".to_string(),
        Priority::High, None, false);
}

/// Completes a task, like ticking its checkbox on the list screen would
fn tick_off_the_first_task(store: &mut TaskStore) {
    let first_id = match store.tasks().first() {
        Some(task) => task.id().clone(),
        None => return,
    };
    store.complete_task(&first_id);
}

/// Moves the due date of the groceries task to tomorrow, like the edit dialog would
fn postpone_the_groceries(store: &mut TaskStore) {
    let groceries_id = store.tasks().iter()
        .find(|task| task.title().contains("groceries"))
        .map(|task| task.id().clone());

    if let Some(id) = groceries_id {
        let patch = TaskPatch {
            due_date: Some(Some(Utc::now() + Duration::days(1))),
            ..TaskPatch::default()
        };
        store.update_task(&id, patch);
    }
}
