//! This is an example of how corkboard can be used.
//! This binary prints the current month of the planner as a calendar grid, then details the
//! busy days.

use std::path::Path;

use chrono::{Duration, Utc};

use corkboard::{Priority, TaskStore};
use corkboard::views::month::{GridCell, Month, MonthGrid};

const DATA_FOLDER: &str = "planner_data";


fn main() {
    env_logger::init();

    println!("This example shows the calendar screen of a planner.");
    println!("It re-opens the planner saved by the 'planner' example (run that one first to populate it).");
    println!("");

    if let Err(err) = std::fs::create_dir_all(DATA_FOLDER) {
        log::error!("Unable to create the data folder: {}", err);
        return;
    }
    let data_file = Path::new(DATA_FOLDER).join("tasks.json");
    let mut store = TaskStore::load_or_create(&data_file);

    if store.tasks().is_empty() {
        println!("This looks like a fresh planner, let's seed a few dated tasks.");
        seed_example_tasks(&mut store);
    }

    let this_month = Month::containing(Utc::now().date_naive());
    let grid = MonthGrid::new(store.tasks(), this_month);

    corkboard::utils::print_month_grid(&grid);
    println!("");
    print_busy_days(&grid);

    println!("");
    println!("The arrows of the calendar screen would navigate to {} or {}.",
        this_month.previous(), this_month.next());
}

fn seed_example_tasks(store: &mut TaskStore) {
    store.add_task("Team retrospective".to_string(), String::new(),
        Priority::Medium, Some(Utc::now()), false);
    store.add_task("Dentist appointment".to_string(), String::new(),
        Priority::High, Some(Utc::now() + Duration::days(2)), false);
    store.add_task("Call the plumber".to_string(), String::new(),
        Priority::Medium, Some(Utc::now() + Duration::days(2)), false);
    store.add_task("Water the plants".to_string(), String::new(),
        Priority::Low, Some(Utc::now() + Duration::days(2)), false);
    store.add_task("Pay the rent".to_string(), String::new(),
        Priority::High, Some(Utc::now() + Duration::days(2)), false);
    store.add_task("Plan the week-end trip".to_string(), String::new(),
        Priority::Low, Some(Utc::now() + Duration::days(9)), false);
}

/// Lists every day of the month that has tasks due, the way the calendar cells would show them:
/// at most 3 tasks per day, then a "+n more" line
fn print_busy_days(grid: &MonthGrid) {
    for cell in grid.cells() {
        if let GridCell::Day(day) = cell {
            if day.tasks().is_empty() {
                continue;
            }
            println!("{}:", day.date());
            let (shown, hidden) = day.preview(3);
            for task in shown {
                corkboard::utils::print_task(task);
            }
            if hidden > 0 {
                println!("    +{} more", hidden);
            }
        }
    }
}
