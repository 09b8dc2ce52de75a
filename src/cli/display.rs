//! Terminal rendering of a [`Report`]
//!
//! Sections mirror the calculator page: headline results, statistics, key
//! dates, fertility chart, cycle timeline, pregnancy dates and the calendar.
//! Dates use a fixed en-US format ("Jan 5", "Fri, Jan 5").

use std::fmt;

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use crate::cycle::calendar::DAY_HEADERS;
use crate::cycle::{
    classify_date, DayClassification, FertilityBar, FertilityLevel, MonthGrid, Phase,
};
use crate::report::Report;

/// Character columns a 100% fertility bar would take
const BAR_COLUMNS: u32 = 30;

/// Character columns of the timeline track
const TIMELINE_COLUMNS: f64 = 56.0;

const RULE_WIDTH: usize = 50;

/// "Jan 5"
#[must_use]
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "Fri, Jan 5"
#[must_use]
pub fn format_medium(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Cycle day for display; `--` when today precedes the last period
#[must_use]
pub fn cycle_day_label(cycle_day: i64) -> String {
    if cycle_day > 0 {
        cycle_day.to_string()
    } else {
        "--".to_string()
    }
}

/// Full report renderer; use through its `Display` impl
pub struct ReportDisplay<'a> {
    report: &'a Report,
}

impl<'a> ReportDisplay<'a> {
    /// Wrap a report for rendering
    #[must_use]
    pub const fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Print the whole report to stdout
    pub fn print(&self) {
        print!("{self}");
    }

    fn header(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f, "\n{} {}", "===".bold().cyan(), title.bold().cyan())?;
        writeln!(f, "{}", "─".repeat(RULE_WIDTH).dimmed())
    }

    fn headline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.report.result;
        let best = &self.report.best_days;

        Self::header(f, "Your Results")?;
        writeln!(
            f,
            "  {} {} {}",
            field("Ovulation"),
            format_medium(r.ovulation_date).bold(),
            format!("(Day {})", r.ovulation_cycle_day).dimmed()
        )?;
        let now = if best.contains(self.report.today) {
            " (now)".green().bold()
        } else {
            "".normal()
        };
        writeln!(
            f,
            "  {} {} – {}{now}",
            field("Best days"),
            format_short(best.start),
            format_short(best.end)
        )?;
        writeln!(
            f,
            "  {} {} – {}",
            field("Fertile window"),
            format_short(r.fertile_start),
            format_short(r.fertile_end)
        )?;
        writeln!(
            f,
            "  {} {}",
            field("Next period"),
            format_short(r.next_period)
        )?;
        writeln!(
            f,
            "  {} {}",
            field("Due date"),
            format_short(r.due_date)
        )
    }

    fn statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let today = classify_date(self.report.today, &self.report.input);

        Self::header(f, "Statistics")?;
        writeln!(
            f,
            "  {} {}",
            field("Cycle day"),
            cycle_day_label(self.report.result.cycle_day)
        )?;
        writeln!(
            f,
            "  {} {}",
            field("Days to ovulation"),
            self.report.countdown.label()
        )?;
        writeln!(
            f,
            "  {} {}",
            field("Fertile today"),
            if today.is_fertile() {
                "yes".green()
            } else {
                "no".normal()
            }
        )?;
        writeln!(f, "  {} 14 days", field("Luteal phase"))
    }

    fn key_dates(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::header(f, "Key Dates")?;
        for row in &self.report.key_dates {
            let event = format!("{:<22}", row.event.label());
            let event = if row.highlight {
                event.bold()
            } else {
                event.normal()
            };
            let status = row.days_away.label();
            let status = if row.days_away.is_soon() {
                status.green()
            } else {
                status.dimmed()
            };
            writeln!(f, "  {event} {:<8} {status}", format_short(row.date))?;
        }
        Ok(())
    }

    fn fertility_chart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::header(f, "Chance of Conception")?;
        for bar in &self.report.fertility_chart {
            let label = format!("{} (D{})", format_short(bar.date), bar.cycle_day);
            let marker = if bar.is_peak {
                "★"
            } else if bar.is_ovulation {
                "●"
            } else {
                " "
            };
            writeln!(
                f,
                "  {label:<16} {marker} {} {:>3}% {}",
                fertility_bar(bar),
                bar.point.chance,
                bar.point.level.as_str().dimmed()
            )?;
        }
        Ok(())
    }

    fn timeline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeline = &self.report.timeline;

        Self::header(f, "Cycle Timeline")?;
        let mut track = String::new();
        for segment in &timeline.segments {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let columns = (segment.width_percent * TIMELINE_COLUMNS / 100.0)
                .round()
                .max(0.0) as usize;
            track.push_str(&phase_style(segment.phase, &"█".repeat(columns)).to_string());
        }
        writeln!(f, "  {track}")?;
        writeln!(
            f,
            "  {} · {} · {}",
            "Day 1".dimmed(),
            format!("Day {}", timeline.ovulation_day).bold(),
            format!("Day {}", timeline.cycle_length).dimmed()
        )?;
        writeln!(
            f,
            "  {} Period (Days 1-{})  {} Fertile  {} Ovulation  {} Luteal",
            phase_style(Phase::Period, "■"),
            timeline.period_length,
            phase_style(Phase::FertileHigh, "■"),
            phase_style(Phase::Ovulation, "■"),
            phase_style(Phase::Luteal, "■"),
        )
    }

    fn pregnancy(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = &self.report.pregnancy;

        Self::header(f, "If You Conceive")?;
        writeln!(
            f,
            "  {} {} ({})",
            field("Due date"),
            format_short(self.report.result.due_date).bold(),
            self.report.season.label()
        )?;
        for (name, range) in [
            ("1st trimester", &schedule.first),
            ("2nd trimester", &schedule.second),
            ("3rd trimester", &schedule.third),
        ] {
            writeln!(
                f,
                "  {} {} – {}",
                field(name),
                format_short(range.start),
                format_short(range.end)
            )?;
        }
        writeln!(f)?;
        for milestone in &schedule.milestones {
            writeln!(
                f,
                "  {} {} ({})",
                format!("Week {:<3}", milestone.week).cyan(),
                milestone.description,
                format_short(milestone.date)
            )?;
        }
        Ok(())
    }

    fn calendar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::header(f, "Calendar")?;
        for grid in &self.report.calendar {
            write_month(f, grid)?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "  {} Period  {} Fertile  {} High  {} Ovulation  {} Today",
            day_style(DayClassification::Period, "■"),
            day_style(DayClassification::FertileLow, "■"),
            day_style(DayClassification::FertileHigh, "■"),
            day_style(DayClassification::Ovulation, "■"),
            "■".reversed()
        )
    }
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.headline(f)?;
        self.statistics(f)?;
        self.key_dates(f)?;
        self.fertility_chart(f)?;
        self.timeline(f)?;
        self.pregnancy(f)?;
        self.calendar(f)
    }
}

/// Plain-text results block meant for pasting elsewhere
pub struct SummaryText<'a> {
    report: &'a Report,
}

impl<'a> SummaryText<'a> {
    /// Wrap a report for the summary block
    #[must_use]
    pub const fn new(report: &'a Report) -> Self {
        Self { report }
    }
}

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.report.result;
        writeln!(f, "My Ovulation Calculator Results")?;
        writeln!(f, "================================")?;
        writeln!(f, "Ovulation Date: {}", format_medium(r.ovulation_date))?;
        writeln!(
            f,
            "Fertile Window: {} – {}",
            format_short(r.fertile_start),
            format_short(r.fertile_end)
        )?;
        writeln!(f, "Next Period: {}", format_short(r.next_period))?;
        writeln!(f, "Due Date (if conceived): {}", format_short(r.due_date))
    }
}

fn field(name: &str) -> ColoredString {
    format!("{name:<18}").dimmed()
}

fn fertility_bar(bar: &FertilityBar) -> ColoredString {
    let filled = (bar.width_percent * BAR_COLUMNS / 100) as usize;
    let text = format!(
        "{}{}",
        "█".repeat(filled),
        " ".repeat((BAR_COLUMNS as usize).saturating_sub(filled))
    );
    match bar.point.level {
        FertilityLevel::Low => text.blue(),
        FertilityLevel::Medium => text.yellow(),
        FertilityLevel::High => text.magenta(),
        FertilityLevel::Peak => text.red().bold(),
    }
}

fn phase_style(phase: Phase, text: &str) -> ColoredString {
    match phase {
        Phase::Period => text.red(),
        Phase::Follicular => text.dimmed(),
        Phase::FertileLow => text.yellow(),
        Phase::FertileHigh => text.magenta(),
        Phase::Ovulation => text.bright_magenta().bold(),
        Phase::Luteal => text.blue(),
    }
}

fn day_style(classification: DayClassification, text: &str) -> ColoredString {
    match classification {
        DayClassification::Period => text.red(),
        DayClassification::Ovulation => text.bright_magenta().bold(),
        DayClassification::FertileHigh => text.magenta(),
        DayClassification::FertileLow => text.yellow(),
        DayClassification::None => text.normal(),
    }
}

fn write_month(f: &mut fmt::Formatter<'_>, grid: &MonthGrid) -> fmt::Result {
    writeln!(f, "  {}", grid.title().bold())?;
    let headers: String = DAY_HEADERS.iter().map(|h| format!("{h:>3}")).collect();
    writeln!(f, "  {}", headers.dimmed())?;

    for week in grid.weeks() {
        let mut line = String::new();
        for cell in week {
            let Some(day) = cell else {
                line.push_str("   ");
                continue;
            };
            let text = day_style(day.classification, &format!("{:>3}", day.day));
            if day.is_today {
                line.push_str(&text.reversed().to_string());
            } else {
                line.push_str(&text.to_string());
            }
        }
        writeln!(f, "  {}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{date, sample_input};

    fn plain_report(today: NaiveDate) -> String {
        colored::control::set_override(false);
        ReportDisplay::new(&Report::build(sample_input(), today, 1)).to_string()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_short(date(2024, 1, 5)), "Jan 5");
        assert_eq!(format_short(date(2024, 10, 17)), "Oct 17");
        assert_eq!(format_medium(date(2024, 1, 5)), "Fri, Jan 5");
    }

    #[test]
    fn test_cycle_day_label() {
        assert_eq!(cycle_day_label(12), "12");
        assert_eq!(cycle_day_label(0), "--");
        assert_eq!(cycle_day_label(-4), "--");
    }

    #[test]
    fn test_report_headline() {
        let text = plain_report(date(2024, 1, 12));

        assert!(text.contains("Mon, Jan 15"));
        assert!(text.contains("(Day 14)"));
        assert!(text.contains("Jan 13 – Jan 15"));
        assert!(text.contains("Jan 10 – Jan 16"));
        assert!(text.contains("Oct 7"));
        assert!(!text.contains("(now)"));

        let during = plain_report(date(2024, 1, 14));
        let best = during.lines().find(|l| l.contains("Best days")).unwrap();
        assert!(best.ends_with("Jan 13 – Jan 15 (now)"));
    }

    #[test]
    fn test_report_statistics() {
        let text = plain_report(date(2024, 1, 12));
        assert!(text.contains("Cycle day"));
        assert!(text.contains("14 days"));

        let fertile = text.lines().find(|l| l.contains("Fertile today")).unwrap();
        assert!(fertile.trim_end().ends_with("yes"));

        let later = plain_report(date(2024, 1, 20));
        let fertile = later.lines().find(|l| l.contains("Fertile today")).unwrap();
        assert!(fertile.trim_end().ends_with("no"));

        let before = plain_report(date(2023, 12, 20));
        let cycle_line = before.lines().find(|l| l.contains("Cycle day")).unwrap();
        assert!(cycle_line.trim_end().ends_with("--"));
    }

    #[test]
    fn test_report_sections_present() {
        let text = plain_report(date(2024, 1, 12));
        for title in [
            "Your Results",
            "Statistics",
            "Key Dates",
            "Chance of Conception",
            "Cycle Timeline",
            "If You Conceive",
            "Calendar",
        ] {
            assert!(text.contains(title), "missing section {title}");
        }
        assert!(text.contains("Fall Baby"));
        assert!(text.contains("January 2024"));
        assert!(text.contains("First heartbeat detectable (Feb 26)"));
    }

    #[test]
    fn test_key_date_statuses() {
        let text = plain_report(date(2024, 1, 12));
        let ovulation = text
            .lines()
            .find(|l| l.contains("Estimated Ovulation"))
            .unwrap();
        assert!(ovulation.contains("In 3 days"));

        let start = text
            .lines()
            .find(|l| l.contains("Fertile Window Starts"))
            .unwrap();
        assert!(start.contains("2 days ago"));
    }

    #[test]
    fn test_fertility_chart_rows() {
        let text = plain_report(date(2024, 1, 12));
        assert!(text.contains("Jan 14 (D13)"));
        assert!(text.contains(" 33% peak"));
        assert!(text.contains(" 18% medium"));
        assert!(text.contains("Jan 17 (D16)"));
    }

    #[test]
    fn test_calendar_first_week() {
        let text = plain_report(date(2024, 1, 12));
        // January 2024 starts on a Monday: one blank cell.
        assert!(text.contains("  S  M  T  W  T  F  S"));
        assert!(text.lines().any(|l| l == "       1  2  3  4  5  6"));
    }

    #[test]
    fn test_summary_text() {
        colored::control::set_override(false);
        let report = Report::build(sample_input(), date(2024, 1, 12), 1);
        let text = SummaryText::new(&report).to_string();

        assert!(text.starts_with("My Ovulation Calculator Results\n"));
        assert!(text.contains("Ovulation Date: Mon, Jan 15"));
        assert!(text.contains("Fertile Window: Jan 10 – Jan 16"));
        assert!(text.contains("Next Period: Jan 29"));
        assert!(text.contains("Due Date (if conceived): Oct 7"));
    }
}
