//! CLI output formatting
//!
//! Provides human-readable terminal display of calculator results,
//! as colored sections or a plain-text summary.

pub mod display;

pub use display::format_medium;
pub use display::format_short;
pub use display::ReportDisplay;
pub use display::SummaryText;
