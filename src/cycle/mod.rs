//! Cycle engine
//!
//! Pure date arithmetic over a [`CycleInput`]: ovulation, fertile window,
//! next period, due date, per-day classification and the derived tables
//! the front end displays. Nothing here performs I/O or holds state.

pub mod calendar;
pub mod classify;
pub mod engine;
pub mod fertility;
pub mod input;
pub mod key_dates;
pub mod pregnancy;
pub mod timeline;

pub use calendar::{calendar_months, month_grid, CalendarDay, MonthGrid};
pub use classify::{classify_date, cycle_position, CyclePosition, DayClassification};
pub use engine::{
    compute, compute_cycle_day, compute_due_date, compute_fertile_window, compute_next_period,
    compute_ovulation_date, CycleResult,
};
pub use fertility::{
    fertility_chart, fertility_for_offset, FertilityBar, FertilityLevel, FertilityPoint,
};
pub use input::CycleInput;
pub use key_dates::{
    best_days, days_away, key_dates, ovulation_countdown, DaysAway, KeyDate, KeyEvent,
    OvulationCountdown,
};
pub use pregnancy::{
    compute_trimester_schedule, season_for_due_date, DateRange, Milestone, Season,
    TrimesterSchedule,
};
pub use timeline::{cycle_timeline, CycleTimeline, Phase, TimelineSegment};
