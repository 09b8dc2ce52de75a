//! Everything the front end displays for one input, bundled
//!
//! A [`Report`] is what a renderer consumes: plain data, serializable to
//! JSON, recomputed from scratch whenever the input or "today" changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cycle::{
    best_days, calendar_months, compute, compute_trimester_schedule, cycle_timeline,
    fertility_chart, key_dates, ovulation_countdown, season_for_due_date, CycleInput, CycleResult,
    CycleTimeline, DateRange, FertilityBar, KeyDate, MonthGrid, OvulationCountdown, Season,
    TrimesterSchedule,
};

/// Months shown in the calendar section by default
pub const DEFAULT_CALENDAR_MONTHS: u32 = 3;

/// Full set of results for one [`CycleInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The input everything was computed from
    pub input: CycleInput,
    /// The day treated as "today"
    pub today: NaiveDate,
    /// Headline dates
    pub result: CycleResult,
    /// Ovulation - 2 through ovulation
    pub best_days: DateRange,
    /// Days until ovulation
    pub countdown: OvulationCountdown,
    /// Key dates table
    pub key_dates: Vec<KeyDate>,
    /// Fertility bar chart rows
    pub fertility_chart: Vec<FertilityBar>,
    /// Phase timeline of one cycle
    pub timeline: CycleTimeline,
    /// Trimesters and milestones
    pub pregnancy: TrimesterSchedule,
    /// Season of the due date
    pub season: Season,
    /// Month grids starting at the month of the last period
    pub calendar: Vec<MonthGrid>,
}

impl Report {
    /// Compute every section for `input` as seen on `today`
    #[must_use]
    pub fn build(input: CycleInput, today: NaiveDate, months: u32) -> Self {
        let result = compute(&input, today);

        Self {
            input,
            today,
            best_days: best_days(&result),
            countdown: ovulation_countdown(&result, today),
            key_dates: key_dates(&result, today),
            fertility_chart: fertility_chart(result.ovulation_date, input.cycle_length),
            timeline: cycle_timeline(&input),
            pregnancy: compute_trimester_schedule(result.ovulation_date),
            season: season_for_due_date(result.due_date),
            calendar: calendar_months(&input, today, months),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{date, sample_input};

    #[test]
    fn test_build_collects_all_sections() {
        let report = Report::build(sample_input(), date(2024, 1, 12), DEFAULT_CALENDAR_MONTHS);

        assert_eq!(report.result.ovulation_date, date(2024, 1, 15));
        assert_eq!(report.result.cycle_day, 12);
        assert_eq!(report.countdown, OvulationCountdown::Upcoming(3));
        assert_eq!(report.key_dates.len(), 6);
        assert_eq!(report.fertility_chart.len(), 8);
        assert_eq!(report.timeline.segments.len(), 6);
        assert_eq!(report.pregnancy.lmp, date(2024, 1, 1));
        assert_eq!(report.season, Season::Fall);
        assert_eq!(report.calendar.len(), 3);
        assert_eq!(report.calendar[2].month, 3);
    }

    #[test]
    fn test_json_uses_page_class_names() {
        let report = Report::build(sample_input(), date(2024, 1, 12), 1);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["result"]["due_date"], "2024-10-07");
        assert_eq!(json["season"], "fall");
        assert_eq!(json["calendar"][0]["days"][14]["classification"], "ovulation");
        assert_eq!(json["timeline"]["segments"][2]["phase"], "fertile-low");
        assert_eq!(json["fertility_chart"][4]["point"]["level"], "peak");
    }
}
