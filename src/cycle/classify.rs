//! Per-day classification against the repeating cycle
//!
//! Cycles are projected forward from the anchor period indefinitely; days
//! before the anchor are never classified.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::{days_between, FERTILE_DAYS_AFTER, FERTILE_DAYS_BEFORE};
use super::input::CycleInput;

/// What kind of day a calendar date is within its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayClassification {
    /// Bleeding days at the start of a cycle
    Period,
    /// Estimated ovulation day
    Ovulation,
    /// The two days before ovulation and the day after it
    FertileHigh,
    /// The early part of the fertile window
    FertileLow,
    /// Anything else, including dates before the anchor period
    None,
}

impl DayClassification {
    /// Kebab-case name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Period => "period",
            Self::Ovulation => "ovulation",
            Self::FertileHigh => "fertile-high",
            Self::FertileLow => "fertile-low",
            Self::None => "none",
        }
    }

    /// Whether the day falls inside the fertile window
    #[must_use]
    pub const fn is_fertile(self) -> bool {
        matches!(self, Self::Ovulation | Self::FertileHigh | Self::FertileLow)
    }
}

/// Where a date sits in the projected cycle sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePosition {
    /// 0 for the anchor cycle, 1 for the next, ...
    pub cycle_index: i64,
    /// 0-indexed day within that cycle
    pub day_in_cycle: i64,
}

/// Locate `date` in the cycle sequence.
///
/// `None` before the anchor period, or when `cycle_length` is zero.
#[must_use]
pub fn cycle_position(date: NaiveDate, input: &CycleInput) -> Option<CyclePosition> {
    let days_since = days_between(input.last_period, date);
    if days_since < 0 || input.cycle_length == 0 {
        return None;
    }

    let cycle_length = i64::from(input.cycle_length);
    Some(CyclePosition {
        cycle_index: days_since / cycle_length,
        day_in_cycle: days_since % cycle_length,
    })
}

/// Classify `date` relative to the cycle described by `input`.
///
/// Period days are checked first, so a period long enough to reach the
/// fertile window wins over it.
#[must_use]
pub fn classify_date(date: NaiveDate, input: &CycleInput) -> DayClassification {
    let Some(position) = cycle_position(date, input) else {
        return DayClassification::None;
    };
    let day = position.day_in_cycle;

    if day < i64::from(input.period_length) {
        return DayClassification::Period;
    }

    let ovulation_day = input.ovulation_day_index();
    if day >= ovulation_day - FERTILE_DAYS_BEFORE && day <= ovulation_day + FERTILE_DAYS_AFTER {
        if day == ovulation_day {
            DayClassification::Ovulation
        } else if day >= ovulation_day - 2 {
            DayClassification::FertileHigh
        } else {
            DayClassification::FertileLow
        }
    } else {
        DayClassification::None
    }
}
