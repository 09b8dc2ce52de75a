//! Key dates relative to "today"

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::{add_days, days_between, CycleResult};
use super::pregnancy::DateRange;

/// Rows counted as "soon" when at most this many days away
pub const SOON_DAYS: i64 = 7;

/// How far a date is from today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "status", content = "days")]
pub enum DaysAway {
    /// The date is today
    Today,
    /// The date is tomorrow
    Tomorrow,
    /// Two or more days ahead
    InDays(i64),
    /// In the past
    DaysAgo(i64),
}

impl DaysAway {
    /// Today, tomorrow, or within the next week
    #[must_use]
    pub const fn is_soon(self) -> bool {
        match self {
            Self::Today | Self::Tomorrow => true,
            Self::InDays(days) => days <= SOON_DAYS,
            Self::DaysAgo(_) => false,
        }
    }

    /// "Today", "Tomorrow", "In 5 days", "3 days ago"
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Today => "Today".to_string(),
            Self::Tomorrow => "Tomorrow".to_string(),
            Self::InDays(days) => format!("In {days} days"),
            Self::DaysAgo(days) => format!("{days} days ago"),
        }
    }
}

/// Status of `date` as seen from `today`
#[must_use]
pub fn days_away(date: NaiveDate, today: NaiveDate) -> DaysAway {
    match days_between(today, date) {
        0 => DaysAway::Today,
        1 => DaysAway::Tomorrow,
        days if days > 1 => DaysAway::InDays(days),
        days => DaysAway::DaysAgo(-days),
    }
}

/// Named events in the key dates table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyEvent {
    /// First day of the fertile window
    FertileWindowStarts,
    /// The day before ovulation
    PeakFertility,
    /// Estimated ovulation
    Ovulation,
    /// Last day of the fertile window
    FertileWindowEnds,
    /// Next expected period
    NextPeriod,
    /// Due date if conceived
    DueDate,
}

impl KeyEvent {
    /// Row title
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FertileWindowStarts => "Fertile Window Starts",
            Self::PeakFertility => "Peak Fertility Day",
            Self::Ovulation => "Estimated Ovulation",
            Self::FertileWindowEnds => "Fertile Window Ends",
            Self::NextPeriod => "Next Period",
            Self::DueDate => "Potential Due Date",
        }
    }
}

/// One row of the key dates table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDate {
    /// What happens
    pub event: KeyEvent,
    /// When
    pub date: NaiveDate,
    /// Peak and ovulation rows are emphasised
    pub highlight: bool,
    /// Relative to today
    pub days_away: DaysAway,
}

/// Key dates table in chronological order
#[must_use]
pub fn key_dates(result: &CycleResult, today: NaiveDate) -> Vec<KeyDate> {
    [
        (KeyEvent::FertileWindowStarts, result.fertile_start, false),
        (KeyEvent::PeakFertility, add_days(result.ovulation_date, -1), true),
        (KeyEvent::Ovulation, result.ovulation_date, true),
        (KeyEvent::FertileWindowEnds, result.fertile_end, false),
        (KeyEvent::NextPeriod, result.next_period, false),
        (KeyEvent::DueDate, result.due_date, false),
    ]
    .into_iter()
    .map(|(event, date, highlight)| KeyDate {
        event,
        date,
        highlight,
        days_away: days_away(date, today),
    })
    .collect()
}

/// Days left until the estimated ovulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "status", content = "days")]
pub enum OvulationCountdown {
    /// Still ahead
    Upcoming(i64),
    /// Ovulation is today
    Today,
    /// Already happened this many days ago
    Passed(i64),
}

impl OvulationCountdown {
    /// "5", "Today!", "3 ago"
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Upcoming(days) => days.to_string(),
            Self::Today => "Today!".to_string(),
            Self::Passed(days) => format!("{days} ago"),
        }
    }
}

/// Countdown to `result.ovulation_date` from `today`
#[must_use]
pub fn ovulation_countdown(result: &CycleResult, today: NaiveDate) -> OvulationCountdown {
    match days_between(today, result.ovulation_date) {
        0 => OvulationCountdown::Today,
        days if days > 0 => OvulationCountdown::Upcoming(days),
        days => OvulationCountdown::Passed(-days),
    }
}

/// The three most fertile days: ovulation - 2 through ovulation
#[must_use]
pub fn best_days(result: &CycleResult) -> DateRange {
    DateRange {
        start: add_days(result.ovulation_date, -2),
        end: result.ovulation_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::engine::compute;
    use crate::testutil::{date, sample_input};

    #[test]
    fn test_days_away() {
        let today = date(2024, 1, 10);
        assert_eq!(days_away(today, today), DaysAway::Today);
        assert_eq!(days_away(date(2024, 1, 11), today), DaysAway::Tomorrow);
        assert_eq!(days_away(date(2024, 1, 15), today), DaysAway::InDays(5));
        assert_eq!(days_away(date(2024, 1, 7), today), DaysAway::DaysAgo(3));
    }

    #[test]
    fn test_soon() {
        assert!(DaysAway::Today.is_soon());
        assert!(DaysAway::Tomorrow.is_soon());
        assert!(DaysAway::InDays(7).is_soon());
        assert!(!DaysAway::InDays(8).is_soon());
        assert!(!DaysAway::DaysAgo(1).is_soon());
    }

    #[test]
    fn test_labels() {
        assert_eq!(DaysAway::InDays(12).label(), "In 12 days");
        assert_eq!(DaysAway::DaysAgo(2).label(), "2 days ago");
        assert_eq!(OvulationCountdown::Passed(4).label(), "4 ago");
        assert_eq!(OvulationCountdown::Today.label(), "Today!");
        assert_eq!(OvulationCountdown::Upcoming(6).label(), "6");
    }

    #[test]
    fn test_key_dates_table() {
        let today = date(2024, 1, 10);
        let rows = key_dates(&compute(&sample_input(), today), today);

        let events: Vec<KeyEvent> = rows.iter().map(|r| r.event).collect();
        assert_eq!(
            events,
            vec![
                KeyEvent::FertileWindowStarts,
                KeyEvent::PeakFertility,
                KeyEvent::Ovulation,
                KeyEvent::FertileWindowEnds,
                KeyEvent::NextPeriod,
                KeyEvent::DueDate,
            ]
        );
        assert_eq!(rows[0].days_away, DaysAway::Today);
        assert_eq!(rows[1].date, date(2024, 1, 14));
        assert!(rows[1].highlight && rows[2].highlight);
        assert!(!rows[4].highlight);
        assert_eq!(rows[4].days_away, DaysAway::InDays(19));
    }

    #[test]
    fn test_countdown() {
        let result = compute(&sample_input(), date(2024, 1, 10));
        assert_eq!(
            ovulation_countdown(&result, date(2024, 1, 10)),
            OvulationCountdown::Upcoming(5)
        );
        assert_eq!(
            ovulation_countdown(&result, date(2024, 1, 15)),
            OvulationCountdown::Today
        );
        assert_eq!(
            ovulation_countdown(&result, date(2024, 1, 18)),
            OvulationCountdown::Passed(3)
        );
    }

    #[test]
    fn test_best_days() {
        let result = compute(&sample_input(), date(2024, 1, 1));
        let best = best_days(&result);
        assert_eq!(best.start, date(2024, 1, 13));
        assert_eq!(best.end, date(2024, 1, 15));
    }

    #[test]
    fn test_days_away_serializes_tagged() {
        let json = serde_json::to_string(&DaysAway::InDays(3)).unwrap();
        assert_eq!(json, r#"{"status":"in-days","days":3}"#);
        let json = serde_json::to_string(&DaysAway::Today).unwrap();
        assert_eq!(json, r#"{"status":"today"}"#);
    }
}
