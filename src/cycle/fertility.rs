//! Conception chance by day relative to ovulation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::add_days;

/// First offset (relative to ovulation) with a non-zero chance
pub const FIRST_FERTILE_OFFSET: i64 = -5;

/// Last offset (relative to ovulation) with a non-zero chance
pub const LAST_FERTILE_OFFSET: i64 = 2;

/// Coarse bucket for a conception chance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FertilityLevel {
    /// Outside or at the edges of the window
    Low,
    /// Rising or falling
    Medium,
    /// Close to ovulation
    High,
    /// The single most fertile day
    Peak,
}

impl FertilityLevel {
    /// Lowercase name used in markup and JSON
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Peak => "peak",
        }
    }
}

/// Conception chance for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilityPoint {
    /// Chance in percent (0..=100)
    pub chance: u8,
    /// Bucket of `chance`
    pub level: FertilityLevel,
}

impl FertilityPoint {
    const fn new(chance: u8, level: FertilityLevel) -> Self {
        Self { chance, level }
    }
}

/// Chance of conception for a day `offset` days from ovulation.
///
/// Defined for `-5..=2`; any other offset yields `0%` / `low`.
#[must_use]
pub const fn fertility_for_offset(offset: i64) -> FertilityPoint {
    match offset {
        -5 => FertilityPoint::new(5, FertilityLevel::Low),
        -4 => FertilityPoint::new(9, FertilityLevel::Low),
        -3 => FertilityPoint::new(15, FertilityLevel::Medium),
        -2 => FertilityPoint::new(25, FertilityLevel::High),
        -1 => FertilityPoint::new(33, FertilityLevel::Peak),
        0 => FertilityPoint::new(30, FertilityLevel::High),
        1 => FertilityPoint::new(18, FertilityLevel::Medium),
        2 => FertilityPoint::new(5, FertilityLevel::Low),
        _ => FertilityPoint::new(0, FertilityLevel::Low),
    }
}

/// One row of the fertility bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilityBar {
    /// Offset from ovulation in days
    pub offset: i64,
    /// Calendar date of this row
    pub date: NaiveDate,
    /// Cycle day number shown next to the date (`D14`)
    pub cycle_day: i64,
    /// Chance and level for the day
    pub point: FertilityPoint,
    /// Bar fill width in percent (`chance * 3`)
    pub width_percent: u32,
    /// The peak row (one day before ovulation)
    pub is_peak: bool,
    /// The ovulation row
    pub is_ovulation: bool,
}

/// Build the chart rows for offsets `-5..=2` around `ovulation_date`.
#[must_use]
pub fn fertility_chart(ovulation_date: NaiveDate, cycle_length: u32) -> Vec<FertilityBar> {
    let ovulation_day = i64::from(cycle_length) - super::engine::LUTEAL_PHASE_DAYS;

    (FIRST_FERTILE_OFFSET..=LAST_FERTILE_OFFSET)
        .map(|offset| {
            let point = fertility_for_offset(offset);
            FertilityBar {
                offset,
                date: add_days(ovulation_date, offset),
                cycle_day: ovulation_day + offset,
                point,
                width_percent: u32::from(point.chance) * 3,
                is_peak: offset == -1,
                is_ovulation: offset == 0,
            }
        })
        .collect()
}
