//! Calculator configuration
//!
//! Parses `cyclecalc.toml`: default lengths, the bounds the front end clamps
//! user input to, the years it accepts dates from, and the base URL share
//! links are built on. Every key is optional.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::cycle::input::{CycleInput, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};
use crate::report::DEFAULT_CALENDAR_MONTHS;

/// Values used when the user leaves a field out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    /// Cycle length in days (default: 28)
    pub cycle_length: u32,
    /// Period length in days (default: 5)
    pub period_length: u32,
    /// Months shown in the calendar section (default: 3)
    pub calendar_months: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            cycle_length: DEFAULT_CYCLE_LENGTH,
            period_length: DEFAULT_PERIOD_LENGTH,
            calendar_months: DEFAULT_CALENDAR_MONTHS,
        }
    }
}

/// Bounds user input is clamped to before it reaches the engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    /// Shortest accepted cycle (default: 21)
    pub min_cycle_length: u32,
    /// Longest accepted cycle (default: 45)
    pub max_cycle_length: u32,
    /// Shortest accepted period (default: 1)
    pub min_period_length: u32,
    /// Longest accepted period (default: 10)
    pub max_period_length: u32,
    /// Earliest accepted year for the last period and today (default: 1900)
    pub min_year: i32,
    /// Latest accepted year for the last period and today (default: 2200)
    pub max_year: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_cycle_length: 21,
            max_cycle_length: 45,
            min_period_length: 1,
            max_period_length: 10,
            min_year: 1900,
            max_year: 2200,
        }
    }
}

impl Limits {
    /// Clamp both lengths into range, keeping `period_length < cycle_length`.
    ///
    /// Logs a warning for every value that had to change.
    #[must_use]
    pub fn clamp(&self, input: CycleInput) -> CycleInput {
        let cycle_length = input
            .cycle_length
            .clamp(self.min_cycle_length, self.max_cycle_length);
        let mut clamped = CycleInput::new(
            input.last_period,
            cycle_length,
            input
                .period_length
                .clamp(self.min_period_length, self.max_period_length),
        );
        if !clamped.is_consistent() {
            clamped.period_length = cycle_length.saturating_sub(1);
        }
        let period_length = clamped.period_length;

        if cycle_length != input.cycle_length {
            warn!(
                requested = input.cycle_length,
                used = cycle_length,
                "cycle length out of range, clamped"
            );
        }
        if period_length != input.period_length {
            warn!(
                requested = input.period_length,
                used = period_length,
                "period length out of range, clamped"
            );
        }

        clamped
    }

    /// Reject a date outside `min_year..=max_year`.
    ///
    /// `what` names the date in the error message.
    pub fn check_date(&self, what: &str, date: NaiveDate) -> Result<()> {
        if !(self.min_year..=self.max_year).contains(&date.year()) {
            bail!(
                "{what} {date} is outside the supported years {}..={}",
                self.min_year,
                self.max_year
            );
        }
        Ok(())
    }
}

/// Share link settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShareConfig {
    /// Page the `lp`/`cl`/`pl` parameters are attached to
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://calculateovulation.org/".to_string(),
        }
    }
}

/// Top-level configuration parsed from `cyclecalc.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default input values
    pub defaults: Defaults,
    /// Input bounds
    pub limits: Limits,
    /// Share link settings
    pub share: ShareConfig,
}

impl Config {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise use the built-in defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse cyclecalc.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// The share base URL, parsed
    pub fn share_base(&self) -> Result<Url> {
        Url::parse(&self.share.base_url)
            .with_context(|| format!("Invalid share base_url '{}'", self.share.base_url))
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        let limits = &self.limits;

        if limits.min_cycle_length > limits.max_cycle_length {
            bail!(
                "min_cycle_length ({}) exceeds max_cycle_length ({})",
                limits.min_cycle_length,
                limits.max_cycle_length
            );
        }
        if limits.min_period_length > limits.max_period_length {
            bail!(
                "min_period_length ({}) exceeds max_period_length ({})",
                limits.min_period_length,
                limits.max_period_length
            );
        }
        if limits.max_period_length >= limits.min_cycle_length {
            bail!(
                "max_period_length ({}) must be shorter than min_cycle_length ({})",
                limits.max_period_length,
                limits.min_cycle_length
            );
        }

        if limits.min_year > limits.max_year {
            bail!(
                "min_year ({}) exceeds max_year ({})",
                limits.min_year,
                limits.max_year
            );
        }
        if NaiveDate::from_ymd_opt(limits.min_year, 1, 1).is_none()
            || NaiveDate::from_ymd_opt(limits.max_year, 12, 31).is_none()
        {
            bail!(
                "Year limits {}..={} are beyond the supported calendar",
                limits.min_year,
                limits.max_year
            );
        }

        let defaults = &self.defaults;
        if !(limits.min_cycle_length..=limits.max_cycle_length).contains(&defaults.cycle_length) {
            bail!(
                "Default cycle_length {} is outside {}..={}",
                defaults.cycle_length,
                limits.min_cycle_length,
                limits.max_cycle_length
            );
        }
        if !(limits.min_period_length..=limits.max_period_length).contains(&defaults.period_length)
        {
            bail!(
                "Default period_length {} is outside {}..={}",
                defaults.period_length,
                limits.min_period_length,
                limits.max_period_length
            );
        }
        if defaults.calendar_months == 0 {
            bail!("calendar_months must be at least 1");
        }

        self.share_base()?;

        Ok(())
    }
}
