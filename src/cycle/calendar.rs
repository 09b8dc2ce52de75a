//! Month grids with every day classified
//!
//! Grids are Sunday-first: `leading_blanks` empty cells precede day 1.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::classify::{classify_date, DayClassification};
use super::engine::add_days;
use super::input::CycleInput;

/// Column headers, Sunday first
pub const DAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// One cell of a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month (1..=31)
    pub day: u32,
    /// Full date
    pub date: NaiveDate,
    /// Cycle classification of the date
    pub classification: DayClassification,
    /// Whether the date is "today"
    pub is_today: bool,
}

/// A single month laid out for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Calendar year
    pub year: i32,
    /// Month (1..=12)
    pub month: u32,
    /// Empty cells before the 1st (0 = Sunday)
    pub leading_blanks: u32,
    /// Days of the month in order
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// "January 2024"
    #[must_use]
    pub fn title(&self) -> String {
        self.days
            .first()
            .map_or_else(String::new, |d| d.date.format("%B %Y").to_string())
    }

    /// Rows of seven cells; `None` marks an empty cell
    #[must_use]
    pub fn weeks(&self) -> Vec<Vec<Option<&CalendarDay>>> {
        let cells: Vec<Option<&CalendarDay>> = std::iter::repeat(None)
            .take(self.leading_blanks as usize)
            .chain(self.days.iter().map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|week| {
                let mut row = week.to_vec();
                row.resize(7, None);
                row
            })
            .collect()
    }
}

/// First day of the month containing `date`
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.day0()))
}

/// Lay out the month containing `month_date`, classifying each day.
#[must_use]
pub fn month_grid(month_date: NaiveDate, input: &CycleInput, today: NaiveDate) -> MonthGrid {
    let first = first_of_month(month_date);
    let month = first.month();

    let days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| CalendarDay {
            day: date.day(),
            date,
            classification: classify_date(date, input),
            is_today: date == today,
        })
        .collect();

    MonthGrid {
        year: first.year(),
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

/// `count` consecutive month grids starting at the month of the last period.
#[must_use]
pub fn calendar_months(input: &CycleInput, today: NaiveDate, count: u32) -> Vec<MonthGrid> {
    let mut months = Vec::new();
    let mut cursor = first_of_month(input.last_period);

    for _ in 0..count {
        let grid = month_grid(cursor, input, today);
        if let Some(last) = grid.days.last() {
            cursor = add_days(last.date, 1);
        }
        months.push(grid);
    }

    months
}
