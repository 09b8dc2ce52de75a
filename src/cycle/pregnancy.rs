//! Pregnancy dating if conception happens at the estimated ovulation
//!
//! Trimesters and milestones count from the LMP, which this model places
//! 14 days before ovulation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::engine::{add_days, compute_due_date, LUTEAL_PHASE_DAYS};

/// Fixed milestone weeks and what happens at each
pub const MILESTONES: &[(u32, &str)] = &[
    (8, "First heartbeat detectable"),
    (12, "End of 1st trimester"),
    (20, "Anatomy scan / Gender reveal"),
    (24, "Viability milestone"),
    (28, "Third trimester begins"),
    (37, "Full term begins"),
];

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day
    pub start: NaiveDate,
    /// Last day (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether `date` lies within the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A dated pregnancy milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Gestational week counted from LMP
    pub week: u32,
    /// What the week marks
    pub description: String,
    /// `lmp + week * 7`
    pub date: NaiveDate,
}

/// Trimester boundaries and milestone dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimesterSchedule {
    /// Dating anchor (ovulation - 14 days)
    pub lmp: NaiveDate,
    /// Days 0..=84 from LMP
    pub first: DateRange,
    /// Days 85..=182 from LMP
    pub second: DateRange,
    /// Day 183 from LMP through the due date
    pub third: DateRange,
    /// Milestones in week order
    pub milestones: Vec<Milestone>,
}

/// Build the trimester schedule for a conception at `ovulation_date`
#[must_use]
pub fn compute_trimester_schedule(ovulation_date: NaiveDate) -> TrimesterSchedule {
    let lmp = add_days(ovulation_date, -LUTEAL_PHASE_DAYS);

    let milestones = MILESTONES
        .iter()
        .map(|&(week, description)| Milestone {
            week,
            description: description.to_string(),
            date: add_days(lmp, i64::from(week) * 7),
        })
        .collect();

    TrimesterSchedule {
        lmp,
        first: DateRange {
            start: lmp,
            end: add_days(lmp, 84),
        },
        second: DateRange {
            start: add_days(lmp, 85),
            end: add_days(lmp, 182),
        },
        third: DateRange {
            start: add_days(lmp, 183),
            end: compute_due_date(ovulation_date),
        },
        milestones,
    }
}

/// Northern-hemisphere season of the due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// March through May
    Spring,
    /// June through August
    Summer,
    /// September through November
    Fall,
    /// December through February
    Winter,
}

impl Season {
    /// Display label ("Spring Baby")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring Baby",
            Self::Summer => "Summer Baby",
            Self::Fall => "Fall Baby",
            Self::Winter => "Winter Baby",
        }
    }
}

/// Season by 0-based month index: 2-4 spring, 5-7 summer, 8-10 fall, else winter
#[must_use]
pub fn season_for_due_date(due_date: NaiveDate) -> Season {
    match due_date.month0() {
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Fall,
        _ => Season::Winter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::date;

    #[test]
    fn test_schedule_for_worked_example() {
        let schedule = compute_trimester_schedule(date(2024, 1, 15));

        assert_eq!(schedule.lmp, date(2024, 1, 1));
        assert_eq!(schedule.first.start, date(2024, 1, 1));
        assert_eq!(schedule.first.end, date(2024, 3, 25));
        assert_eq!(schedule.second.start, date(2024, 3, 26));
        assert_eq!(schedule.second.end, date(2024, 7, 1));
        assert_eq!(schedule.third.start, date(2024, 7, 2));
        assert_eq!(schedule.third.end, date(2024, 10, 7));
    }

    #[test]
    fn test_trimesters_are_contiguous() {
        let schedule = compute_trimester_schedule(date(2023, 11, 20));
        assert_eq!(add_days(schedule.first.end, 1), schedule.second.start);
        assert_eq!(add_days(schedule.second.end, 1), schedule.third.start);
        assert!(schedule.third.contains(schedule.third.end));
        assert!(!schedule.first.contains(schedule.second.start));
    }

    #[test]
    fn test_milestones() {
        let schedule = compute_trimester_schedule(date(2024, 1, 15));
        let weeks: Vec<u32> = schedule.milestones.iter().map(|m| m.week).collect();
        assert_eq!(weeks, vec![8, 12, 20, 24, 28, 37]);

        let first = &schedule.milestones[0];
        assert_eq!(first.description, "First heartbeat detectable");
        assert_eq!(first.date, date(2024, 2, 26));

        let full_term = schedule.milestones.last().unwrap();
        assert_eq!(full_term.date, date(2024, 9, 16));
    }

    #[test]
    fn test_seasons() {
        assert_eq!(season_for_due_date(date(2024, 3, 1)), Season::Spring);
        assert_eq!(season_for_due_date(date(2024, 5, 31)), Season::Spring);
        assert_eq!(season_for_due_date(date(2024, 6, 1)), Season::Summer);
        assert_eq!(season_for_due_date(date(2024, 8, 31)), Season::Summer);
        assert_eq!(season_for_due_date(date(2024, 10, 7)), Season::Fall);
        assert_eq!(season_for_due_date(date(2024, 12, 1)), Season::Winter);
        assert_eq!(season_for_due_date(date(2025, 2, 28)), Season::Winter);
    }

    #[test]
    fn test_season_label() {
        assert_eq!(Season::Fall.label(), "Fall Baby");
    }
}
