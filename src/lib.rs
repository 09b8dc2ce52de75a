//! cyclecalc - Ovulation and fertile window calculator
//!
//! A pure cycle date engine (ovulation, fertile window, next period, due
//! date, per-day classification) plus the pieces a front end needs around
//! it: share links, configuration and terminal rendering.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod cycle;
pub mod logging;
pub mod report;
pub mod share;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use cli::{ReportDisplay, SummaryText};
pub use config::{Config, Limits};
pub use cycle::{
    classify_date, compute, fertility_for_offset, CycleInput, CycleResult, DayClassification,
    FertilityLevel, FertilityPoint,
};
pub use report::Report;
pub use share::{parse_share_link, parse_share_str, share_link, ShareLinkError};
