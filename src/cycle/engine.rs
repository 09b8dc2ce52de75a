//! Cycle date arithmetic
//!
//! Fixed heuristic model: a 14-day luteal phase regardless of cycle length,
//! a 7-day fertile window around ovulation, and a 266-day gestation counted
//! from ovulation. Every function here is pure and total.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::input::CycleInput;

/// Days between ovulation and the next period
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Days the fertile window opens before ovulation
pub const FERTILE_DAYS_BEFORE: i64 = 5;

/// Days the fertile window stays open after ovulation
pub const FERTILE_DAYS_AFTER: i64 = 1;

/// Gestation length counted from ovulation (fertilization age)
pub const GESTATION_DAYS: i64 = 266;

/// Everything derived from a [`CycleInput`] and the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleResult {
    /// Estimated ovulation date
    pub ovulation_date: NaiveDate,
    /// First day of the fertile window
    pub fertile_start: NaiveDate,
    /// Last day of the fertile window (inclusive)
    pub fertile_end: NaiveDate,
    /// Expected start of the next period
    pub next_period: NaiveDate,
    /// Due date if conception happens this cycle
    pub due_date: NaiveDate,
    /// 1-indexed day of the cycle "today"; zero or negative before the anchor
    pub cycle_day: i64,
    /// Cycle day number on which ovulation falls (`cycle_length - 14`)
    pub ovulation_cycle_day: i64,
}

/// Shift a date by a signed number of days.
///
/// Saturates at `NaiveDate::MIN` / `NaiveDate::MAX` instead of overflowing.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let step = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(step).unwrap_or(NaiveDate::MIN)
    } else {
        date.checked_add_days(step).unwrap_or(NaiveDate::MAX)
    }
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `last_period + (cycle_length - 14)` days
#[must_use]
pub fn compute_ovulation_date(last_period: NaiveDate, cycle_length: u32) -> NaiveDate {
    add_days(last_period, i64::from(cycle_length) - LUTEAL_PHASE_DAYS)
}

/// Fertile window `(ovulation - 5, ovulation + 1)`, both ends inclusive
#[must_use]
pub fn compute_fertile_window(ovulation_date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        add_days(ovulation_date, -FERTILE_DAYS_BEFORE),
        add_days(ovulation_date, FERTILE_DAYS_AFTER),
    )
}

/// `last_period + cycle_length` days
#[must_use]
pub fn compute_next_period(last_period: NaiveDate, cycle_length: u32) -> NaiveDate {
    add_days(last_period, i64::from(cycle_length))
}

/// `ovulation + 266` days
#[must_use]
pub fn compute_due_date(ovulation_date: NaiveDate) -> NaiveDate {
    add_days(ovulation_date, GESTATION_DAYS)
}

/// Day of the cycle `today` falls on, 1-indexed and unclamped
#[must_use]
pub fn compute_cycle_day(last_period: NaiveDate, today: NaiveDate) -> i64 {
    days_between(last_period, today) + 1
}

/// Compute all headline dates for `input` as seen on `today`
#[must_use]
pub fn compute(input: &CycleInput, today: NaiveDate) -> CycleResult {
    let ovulation_date = compute_ovulation_date(input.last_period, input.cycle_length);
    let (fertile_start, fertile_end) = compute_fertile_window(ovulation_date);

    CycleResult {
        ovulation_date,
        fertile_start,
        fertile_end,
        next_period: compute_next_period(input.last_period, input.cycle_length),
        due_date: compute_due_date(ovulation_date),
        cycle_day: compute_cycle_day(input.last_period, today),
        ovulation_cycle_day: input.ovulation_day_index(),
    }
}
