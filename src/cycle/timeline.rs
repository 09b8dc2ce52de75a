//! Proportional phase layout of a single cycle

use serde::{Deserialize, Serialize};

use super::input::CycleInput;

/// Phase of a cycle as drawn on the timeline track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Bleeding days
    Period,
    /// Between the period and the fertile window
    Follicular,
    /// Offsets -5..=-3
    FertileLow,
    /// Offsets -2..=-1
    FertileHigh,
    /// Ovulation day and the day after
    Ovulation,
    /// Remainder of the cycle
    Luteal,
}

impl Phase {
    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Period => "Period",
            Self::Follicular => "Follicular Phase",
            Self::FertileLow => "Low Fertility",
            Self::FertileHigh => "High Fertility",
            Self::Ovulation => "Ovulation",
            Self::Luteal => "Luteal Phase",
        }
    }
}

/// One segment of the timeline track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Which phase the segment represents
    pub phase: Phase,
    /// Share of the cycle in percent
    pub width_percent: f64,
}

/// Timeline of one cycle, segments in drawing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleTimeline {
    /// Period, follicular, fertile-low, fertile-high, ovulation, luteal
    pub segments: Vec<TimelineSegment>,
    /// Cycle day marker highlighted under the track
    pub ovulation_day: i64,
    /// Last day marker
    pub cycle_length: u32,
    /// Period length, shown as "Days 1-N"
    pub period_length: u32,
}

/// Lay out the phases of `input`'s cycle as percentages of its length.
///
/// The follicular segment is floored at zero. Other widths are not adjusted,
/// so for unusual inputs the total may differ from 100.
#[must_use]
pub fn cycle_timeline(input: &CycleInput) -> CycleTimeline {
    let cycle = f64::from(input.cycle_length.max(1));
    let period = f64::from(input.period_length);
    let ovulation_day = input.ovulation_day_index();
    #[allow(clippy::cast_precision_loss)]
    let ov = ovulation_day as f64;

    let pct = |days: f64| days / cycle * 100.0;
    let segment = |phase, days| TimelineSegment {
        phase,
        width_percent: pct(days),
    };

    CycleTimeline {
        segments: vec![
            segment(Phase::Period, period),
            segment(Phase::Follicular, (ov - 5.0 - period).max(0.0)),
            segment(Phase::FertileLow, 3.0),
            segment(Phase::FertileHigh, 2.0),
            segment(Phase::Ovulation, 2.0),
            segment(Phase::Luteal, cycle - ov - 2.0),
        ],
        ovulation_day,
        cycle_length: input.cycle_length,
        period_length: input.period_length,
    }
}
