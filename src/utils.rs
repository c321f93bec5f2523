///! Some utility functions

use chrono::Datelike;

use crate::task::Task;
use crate::views::month::{GridCell, MonthGrid};

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    match task.due_date() {
        Some(due) => println!("    {} [{}] {}  (due {})", completion, task.priority(), task.title(), due.format("%Y-%m-%d %H:%M")),
        None => println!("    {} [{}] {}", completion, task.priority(), task.title()),
    }
}

/// A debug utility that pretty-prints a task list, e.g. the output of [`crate::views::list::list_view`]
pub fn print_task_list(tasks: &[&Task]) {
    for task in tasks {
        print_task(task);
    }
}

/// A debug utility that pretty-prints a month grid, one line per week.
///
/// Days that have tasks due are marked with a star.
pub fn print_month_grid(grid: &MonthGrid) {
    println!("{:^35}", grid.month().to_string());
    for name in &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        print!("{:>5}", name);
    }
    println!();

    for week in grid.cells().chunks(7) {
        for cell in week {
            match cell {
                GridCell::Blank => print!("{:>5}", ""),
                GridCell::Day(day) => {
                    let marker = if day.tasks().is_empty() { ' ' } else { '*' };
                    print!("{:>4}{}", day.date().day(), marker);
                },
            }
        }
        println!();
    }
}
