//! The month calendar grid
//!
//! The calendar page shows one month at a time as a 7-column grid of weeks, starting on Sunday.
//! [`MonthGrid`] lays the month out (including the blank cells before the 1st) and attaches to
//! every day the tasks due that day. [`bucket_by_due_date`] is the underlying day-bucketing and
//! can be used on its own, e.g. for an agenda view.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::task::Task;

/// A calendar month (a year and a month number), the unit the calendar page navigates by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Month {
    first_day: NaiveDate,
}

impl Month {
    /// The month of the given year, or None when `month` is not in `1..=12`
    pub fn of(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month the given date belongs to
    pub fn containing(date: NaiveDate) -> Self {
        let first_day = date.with_day(1).unwrap(/* day 1 exists in every month */);
        Self { first_day }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month number, 1 to 12
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day.pred_opt().unwrap(/* there is always a day before the 1st */)
    }

    /// Every date of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last_day = self.last_day();
        self.first_day.iter_days().take_while(move |day| *day <= last_day)
    }

    /// The month right after this one
    pub fn next(&self) -> Month {
        let (year, month) = match self.month() {
            12 => (self.year() + 1, 1),
            other => (self.year(), other + 1),
        };
        Month::of(year, month).unwrap(/* both branches build a valid month number */)
    }

    /// The month right before this one
    pub fn previous(&self) -> Month {
        let (year, month) = match self.month() {
            1 => (self.year() - 1, 12),
            other => (self.year(), other - 1),
        };
        Month::of(year, month).unwrap(/* both branches build a valid month number */)
    }
}

/// Displays as e.g. "March 2024", the usual calendar page header
impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.first_day.format("%B %Y"))
    }
}

/// Group a snapshot by the calendar day their due date falls on.
///
/// Only the date part of the due date matters: a task due at midnight and a task due at 23:59
/// end up in the same bucket. Tasks without a due date are in no bucket at all. Within a bucket,
/// tasks keep their snapshot order.
pub fn bucket_by_due_date<'a>(tasks: &'a [Task]) -> HashMap<NaiveDate, Vec<&'a Task>> {
    let mut buckets: HashMap<NaiveDate, Vec<&Task>> = HashMap::new();
    for task in tasks {
        if let Some(due_date) = task.due_date() {
            buckets.entry(due_date.date_naive()).or_insert_with(Vec::new).push(task);
        }
    }
    buckets
}

/// One cell of the month grid
#[derive(Clone, Debug)]
pub enum GridCell<'a> {
    /// Padding before the 1st of the month, so that every column of the grid stays on its weekday
    Blank,
    /// An actual day of the month
    Day(DayCell<'a>),
}

/// A day of the displayed month, together with the tasks due that day
#[derive(Clone, Debug)]
pub struct DayCell<'a> {
    date: NaiveDate,
    tasks: Vec<&'a Task>,
}

impl<'a> DayCell<'a> {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// All the tasks due this day, in snapshot order
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// The first `limit` tasks of the day plus the number of tasks that did not fit.
    ///
    /// Calendar cells only have room for a few entries; the page shows `preview(3)` and renders
    /// the second value as a "+n more" badge. The full bucket stays available in [`Self::tasks`].
    pub fn preview(&self, limit: usize) -> (&[&'a Task], usize) {
        if self.tasks.len() <= limit {
            (&self.tasks[..], 0)
        } else {
            (&self.tasks[..limit], self.tasks.len() - limit)
        }
    }
}

/// The 7-column layout of a month, weeks starting on Sunday.
///
/// The cell sequence begins with one [`GridCell::Blank`] per weekday before the 1st of the month
/// (e.g. 5 blanks when the month starts on a Friday), followed by one [`GridCell::Day`] per date.
/// Rendering the sequence 7 cells per row therefore aligns every date with its weekday column.
#[derive(Clone, Debug)]
pub struct MonthGrid<'a> {
    month: Month,
    cells: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Lay out `month`, attaching to each day the tasks of `tasks` due that day
    pub fn new(tasks: &'a [Task], month: Month) -> Self {
        let mut buckets = bucket_by_due_date(tasks);

        let leading_blanks = month.first_day().weekday().num_days_from_sunday();
        let mut cells = Vec::new();
        for _ in 0..leading_blanks {
            cells.push(GridCell::Blank);
        }
        for date in month.days() {
            cells.push(GridCell::Day(DayCell {
                date,
                tasks: buckets.remove(&date).unwrap_or_default(),
            }));
        }

        Self { month, cells }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// The cells to render, top-left to bottom-right
    pub fn cells(&self) -> &[GridCell<'a>] {
        &self.cells
    }

    /// How many blank cells pad the start of the grid
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter()
            .take_while(|cell| matches!(cell, GridCell::Blank))
            .count()
    }

    /// The cell of a given date, if it belongs to the displayed month
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.cells.iter().find_map(|cell| match cell {
            GridCell::Day(day) if day.date() == date => Some(day),
            _ => None,
        })
    }
}
