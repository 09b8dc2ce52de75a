//! Cycle input value object
//!
//! The single piece of caller-owned state: when the period started and how
//! long the cycle and the bleed usually last. The engine never validates it;
//! see [`crate::config::Limits::clamp`] for the caller-side step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cycle length used when the caller supplies none
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Period length used when the caller supplies none
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;

/// Parameters every engine operation is computed from
///
/// Expected to satisfy `period_length < cycle_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CycleInput {
    /// First day of the last period
    pub last_period: NaiveDate,
    /// Days from one period start to the next
    pub cycle_length: u32,
    /// Days of bleeding at the start of each cycle
    pub period_length: u32,
}

impl CycleInput {
    /// Create an input from explicit values
    #[must_use]
    pub const fn new(last_period: NaiveDate, cycle_length: u32, period_length: u32) -> Self {
        Self {
            last_period,
            cycle_length,
            period_length,
        }
    }

    /// Create an input with the default cycle and period lengths
    #[must_use]
    pub const fn with_defaults(last_period: NaiveDate) -> Self {
        Self::new(last_period, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH)
    }

    /// Whether `period_length < cycle_length` holds
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.period_length < self.cycle_length
    }

    /// Cycle day (0-indexed) on which ovulation is expected: `cycle_length - 14`
    ///
    /// Negative only for cycles shorter than the luteal phase.
    #[must_use]
    pub fn ovulation_day_index(&self) -> i64 {
        i64::from(self.cycle_length) - super::engine::LUTEAL_PHASE_DAYS
    }
}
