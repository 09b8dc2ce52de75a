//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use chrono::NaiveDate;

use crate::cycle::CycleInput;

/// Build a date from literal parts, panicking on invalid input.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// The worked example: period starting 2024-01-01, 28-day cycle, 5-day period.
#[must_use]
pub fn sample_input() -> CycleInput {
    CycleInput::new(date(2024, 1, 1), 28, 5)
}
