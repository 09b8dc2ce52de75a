//! Share links
//!
//! A [`CycleInput`] is persisted only as three query parameters on a URL:
//! `lp` (ISO date of the last period), `cl` (cycle length) and `pl` (period
//! length). Parsing is lenient about the lengths, matching how the page
//! reads its own links, but the last-period date is mandatory.

use chrono::NaiveDate;
use tracing::debug;
use url::Url;

use crate::cycle::input::{CycleInput, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};

/// Query key for the last period date
pub const PARAM_LAST_PERIOD: &str = "lp";
/// Query key for the cycle length
pub const PARAM_CYCLE_LENGTH: &str = "cl";
/// Query key for the period length
pub const PARAM_PERIOD_LENGTH: &str = "pl";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from reading a share link
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareLinkError {
    /// The text is not a URL at all
    #[error("invalid share link: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The `lp` parameter is absent
    #[error("share link has no 'lp' parameter")]
    MissingLastPeriod,

    /// The `lp` parameter is not a `YYYY-MM-DD` date
    #[error("invalid last period date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected value
        value: String,
    },
}

/// Put `input` on `base` as `lp`/`cl`/`pl`, replacing any previous values
/// and keeping unrelated query pairs.
#[must_use]
pub fn share_link(base: &Url, input: &CycleInput) -> Url {
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| !is_share_key(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(
            PARAM_LAST_PERIOD,
            &input.last_period.format(DATE_FORMAT).to_string(),
        )
        .append_pair(PARAM_CYCLE_LENGTH, &input.cycle_length.to_string())
        .append_pair(PARAM_PERIOD_LENGTH, &input.period_length.to_string());
    url
}

/// Read a [`CycleInput`] back from a share link.
///
/// Missing, non-numeric or zero `cl`/`pl` values fall back to the defaults
/// (28 and 5). Trailing garbage after leading digits is ignored.
pub fn parse_share_link(url: &Url) -> Result<CycleInput, ShareLinkError> {
    let mut last_period = None;
    let mut cycle_length = None;
    let mut period_length = None;

    for (key, value) in url.query_pairs() {
        match &*key {
            PARAM_LAST_PERIOD => last_period = Some(value.into_owned()),
            PARAM_CYCLE_LENGTH => cycle_length = Some(value.into_owned()),
            PARAM_PERIOD_LENGTH => period_length = Some(value.into_owned()),
            _ => {}
        }
    }

    let raw_date = last_period.ok_or(ShareLinkError::MissingLastPeriod)?;
    let last_period = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT)
        .map_err(|_| ShareLinkError::InvalidDate { value: raw_date })?;

    let input = CycleInput::new(
        last_period,
        lenient_length(cycle_length.as_deref(), DEFAULT_CYCLE_LENGTH),
        lenient_length(period_length.as_deref(), DEFAULT_PERIOD_LENGTH),
    );
    debug!(?input, "parsed share link");
    Ok(input)
}

/// Parse a share link given as text.
pub fn parse_share_str(link: &str) -> Result<CycleInput, ShareLinkError> {
    let url = Url::parse(link.trim())?;
    parse_share_link(&url)
}

fn is_share_key(key: &str) -> bool {
    matches!(
        key,
        PARAM_LAST_PERIOD | PARAM_CYCLE_LENGTH | PARAM_PERIOD_LENGTH
    )
}

/// Leading decimal digits of `raw`, or `default` when there are none or
/// they read as zero. Values too large for `u32` saturate.
fn lenient_length(raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return default;
    }

    match digits.parse::<u32>().unwrap_or(u32::MAX) {
        0 => default,
        value => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{date, sample_input};

    fn base() -> Url {
        Url::parse("https://calculateovulation.org/").unwrap()
    }

    #[test]
    fn test_share_link_format() {
        let url = share_link(&base(), &sample_input());
        assert_eq!(
            url.as_str(),
            "https://calculateovulation.org/?lp=2024-01-01&cl=28&pl=5"
        );
    }

    #[test]
    fn test_share_link_replaces_existing_values() {
        let base = Url::parse("https://example.com/calc?lp=2020-01-01&ref=mail&cl=40").unwrap();
        let url = share_link(&base, &CycleInput::new(date(2024, 2, 29), 31, 6));
        assert_eq!(
            url.as_str(),
            "https://example.com/calc?ref=mail&lp=2024-02-29&cl=31&pl=6"
        );
    }

    #[test]
    fn test_round_trip() {
        let input = CycleInput::new(date(2023, 12, 31), 33, 7);
        let parsed = parse_share_link(&share_link(&base(), &input)).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_missing_last_period() {
        assert_eq!(
            parse_share_str("https://example.com/?cl=28&pl=5"),
            Err(ShareLinkError::MissingLastPeriod)
        );
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            parse_share_str("https://example.com/?lp=2024-13-01"),
            Err(ShareLinkError::InvalidDate {
                value: "2024-13-01".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            parse_share_str("not a url"),
            Err(ShareLinkError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_lengths_default_when_missing() {
        let input = parse_share_str("https://example.com/?lp=2024-01-01").unwrap();
        assert_eq!(input, sample_input());
    }

    #[test]
    fn test_lengths_parse_leniently() {
        let input = parse_share_str("https://example.com/?lp=2024-01-01&cl=30days&pl=abc").unwrap();
        assert_eq!(input.cycle_length, 30);
        assert_eq!(input.period_length, 5);

        let input = parse_share_str("https://example.com/?lp=2024-01-01&cl=0&pl=-3").unwrap();
        assert_eq!(input.cycle_length, 28);
        assert_eq!(input.period_length, 5);
    }

    #[test]
    fn test_oversized_lengths_saturate() {
        let input =
            parse_share_str("https://example.com/?lp=2024-01-01&cl=99999999999&pl=0007").unwrap();
        assert_eq!(input.cycle_length, u32::MAX);
        assert_eq!(input.period_length, 7);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ShareLinkError::MissingLastPeriod.to_string(),
            "share link has no 'lp' parameter"
        );
        assert_eq!(
            ShareLinkError::InvalidDate {
                value: "x".to_string()
            }
            .to_string(),
            "invalid last period date 'x' (expected YYYY-MM-DD)"
        );
    }
}
