//! cyclecalc - Ovulation and fertile window calculator
//!
//! CLI entry point: resolves the input from flags, a share link and the
//! config file, then prints the results.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use cyclecalc::cycle::engine::add_days;
use cyclecalc::{
    logging, parse_share_str, share_link, Config, CycleInput, Report, ReportDisplay, SummaryText,
};

/// Days before today used as the last period when none is given
const DEFAULT_LOOKBACK_DAYS: i64 = 14;

/// Ovulation and fertile window calculator
///
/// Estimates ovulation, the fertile window, the next period and a due date
/// from the first day of the last period, then shows a fertility chart, a
/// cycle timeline and a calendar.
#[derive(Parser, Debug)]
#[command(name = "cyclecalc", version, about)]
struct Cli {
    /// First day of the last period (YYYY-MM-DD); defaults to two weeks ago
    #[arg(long, conflicts_with = "link")]
    last_period: Option<NaiveDate>,

    /// Read the input from a share link (`?lp=..&cl=..&pl=..`)
    #[arg(long)]
    link: Option<String>,

    /// Average cycle length in days
    #[arg(long)]
    cycle_length: Option<u32>,

    /// Average period length in days
    #[arg(long)]
    period_length: Option<u32>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Number of calendar months to show
    #[arg(long)]
    months: Option<u32>,

    /// Path to the cyclecalc.toml configuration file
    #[arg(long, default_value = "cyclecalc.toml")]
    config: PathBuf,

    /// Print the results as JSON
    #[arg(long, conflicts_with = "summary")]
    json: bool,

    /// Print only the plain-text results summary
    #[arg(long)]
    summary: bool,

    /// Also print a share link for this input (a `share_link` field with --json)
    #[arg(long)]
    share: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `--json` output: the report, plus the share link when asked for
#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_link: Option<String>,
}

/// Build the engine input from the command line, falling back to the share
/// link and then the configured defaults, and clamp it to the configured
/// limits.
///
/// Fails when today or the last period lies outside the configured years.
fn resolve_input(cli: &Cli, config: &Config, today: NaiveDate) -> Result<CycleInput> {
    config.limits.check_date("Today", today)?;

    let base = match &cli.link {
        Some(link) => {
            parse_share_str(link).with_context(|| format!("Failed to read share link '{link}'"))?
        }
        None => CycleInput::new(
            cli.last_period
                .unwrap_or_else(|| add_days(today, -DEFAULT_LOOKBACK_DAYS)),
            config.defaults.cycle_length,
            config.defaults.period_length,
        ),
    };

    let requested = CycleInput::new(
        base.last_period,
        cli.cycle_length.unwrap_or(base.cycle_length),
        cli.period_length.unwrap_or(base.period_length),
    );
    debug!(?requested, "resolved input");
    config.limits.check_date("Last period", requested.last_period)?;

    Ok(config.limits.clamp(requested))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from '{}'", cli.config.display()))?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let input = resolve_input(&cli, &config, today)?;
    let months = cli.months.unwrap_or(config.defaults.calendar_months);
    info!(?input, %today, months, "calculating");

    let report = Report::build(input, today, months);
    let link = if cli.share {
        Some(share_link(&config.share_base()?, &input))
    } else {
        None
    };

    if cli.json {
        let output = JsonOutput {
            report: &report,
            share_link: link.map(String::from),
        };
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize report to JSON")?;
        println!("{json}");
        return Ok(());
    }

    if cli.summary {
        print!("{}", SummaryText::new(&report));
    } else {
        ReportDisplay::new(&report).print();
    }
    if let Some(link) = link {
        println!("{link}");
    }

    Ok(())
}
