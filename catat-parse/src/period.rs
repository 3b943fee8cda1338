//! Period descriptions used by report/total/summary/compare commands.
//!
//! Accepted forms:
//!
//! ```text
//! 2025
//! januari 2025 / jan 2025
//! 2024-2025
//! januari 2024 hingga juni 2025
//! 01/01/2024 sampai 31/12/2025
//! 2024-01-01 hingga 2025-12-31
//! ```

use std::sync::LazyLock;

use catat_core::calendar::month_from_name;
use catat_core::{ParseError, Period};
use chrono::NaiveDate;
use regex::Regex;

static CONNECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?:hingga|sampai)\s+").expect("range connector pattern"));

static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<start>[0-9]{4})\s*-\s*(?P<end>[0-9]{4})$").expect("year range pattern")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<year>[0-9]{4})$").expect("year pattern"));

static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<month>\w+)\s+(?P<year>[0-9]{4})$").expect("month year pattern")
});

static DMY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>[0-9]{1,2})/(?P<month>[0-9]{1,2})/(?P<year>[0-9]{4})$")
        .expect("dd/mm/yyyy pattern")
});

static YMD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})$")
        .expect("yyyy-mm-dd pattern")
});

/// `<month-name> <yyyy>` with a known month name.
fn month_year(text: &str) -> Option<(i32, u32)> {
    let caps = MONTH_YEAR_RE.captures(text)?;
    let month = month_from_name(&caps["month"])?;
    let year = caps["year"].parse().ok()?;
    Some((year, month))
}

/// Calendar-checked `DD/MM/YYYY` or `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let caps = DMY_RE.captures(text).or_else(|| YMD_RE.captures(text))?;
    let year: i32 = caps["year"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let day: u32 = caps["day"].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `<start> hingga|sampai <end>`: month range first, then date range.
fn parse_range(args: &str) -> Result<Period, ParseError> {
    let parts: Vec<&str> = CONNECTOR_RE
        .split(args)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let &[start, end] = parts.as_slice() else {
        return Err(ParseError::Unmatched(args.to_string()));
    };

    if let (Some(from), Some(to)) = (month_year(start), month_year(end)) {
        return Period::month_range(from, to);
    }

    let from = parse_date(start).ok_or_else(|| ParseError::MalformedDate(start.to_string()))?;
    let to = parse_date(end).ok_or_else(|| ParseError::MalformedDate(end.to_string()))?;
    Period::date_range(from, to)
}

/// Parse a period description, explaining a rejection.
pub fn parse_period_detailed(args: &str) -> Result<Period, ParseError> {
    let args = args.trim().to_lowercase();
    if args.is_empty() {
        return Err(ParseError::Unmatched(args));
    }

    if CONNECTOR_RE.is_match(&args) {
        return parse_range(&args);
    }

    if let Some(caps) = YEAR_RANGE_RE.captures(&args) {
        let start: i32 = caps["start"]
            .parse()
            .map_err(|_| ParseError::Unmatched(args.clone()))?;
        let end: i32 = caps["end"]
            .parse()
            .map_err(|_| ParseError::Unmatched(args.clone()))?;
        return Period::year_range(start, end);
    }

    if let Some(caps) = YEAR_RE.captures(&args) {
        let year: i32 = caps["year"]
            .parse()
            .map_err(|_| ParseError::Unmatched(args.clone()))?;
        return Ok(Period::year(year));
    }

    if let Some((year, month)) = month_year(&args) {
        return Period::month(year, month);
    }

    Err(ParseError::Unmatched(args))
}

/// Parse a period description; `None` for blank or unrecognized input and
/// for inverted ranges.
pub fn parse_period(args: &str) -> Option<Period> {
    match parse_period_detailed(args) {
        Ok(period) => Some(period),
        Err(err) => {
            tracing::debug!(args, %err, "period not recognized");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_and_year_range() {
        assert_eq!(parse_period("2025"), Some(Period::year(2025)));
        assert_eq!(
            parse_period("2024-2025"),
            Some(Period::YearRange {
                start_year: 2024,
                end_year: 2025
            })
        );
        assert_eq!(
            parse_period("2024 - 2025").map(|p| p.kind()),
            Some("year_range")
        );
        assert_eq!(parse_period("2024-2024").map(|p| p.kind()), Some("year_range"));
        assert_eq!(parse_period("2025-2024"), None);
        assert!(matches!(
            parse_period_detailed("2025-2024"),
            Err(ParseError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_month() {
        assert_eq!(
            parse_period("januari 2025"),
            Some(Period::Month {
                year: 2025,
                month: 1
            })
        );
        assert_eq!(
            parse_period("  DES   2024 "),
            Some(Period::Month {
                year: 2024,
                month: 12
            })
        );
        assert_eq!(parse_period("ags 2025").map(|p| p.label()), Some("Agustus 2025".into()));
        assert_eq!(parse_period("may 2025"), None);
    }

    #[test]
    fn test_month_range() {
        let p = parse_period("jan 2024 hingga jun 2025").unwrap();
        assert_eq!(
            p,
            Period::MonthRange {
                start_date: date(2024, 1, 1),
                end_date: date(2025, 6, 30),
                start_label: "Januari 2024".into(),
                end_label: "Juni 2025".into(),
            }
        );

        let feb = parse_period("februari 2024 sampai februari 2024").unwrap();
        assert_eq!(feb.bounds().1, date(2024, 2, 29));

        assert_eq!(parse_period("jun 2025 hingga jan 2024"), None);
    }

    #[test]
    fn test_date_range() {
        let p = parse_period("01/01/2024 hingga 31/12/2025").unwrap();
        assert_eq!(p.bounds(), (date(2024, 1, 1), date(2025, 12, 31)));
        assert_eq!(p.label(), "01/01/2024 - 31/12/2025");

        let iso = parse_period("2024-03-05 sampai 2024-3-9").unwrap();
        assert_eq!(iso.bounds(), (date(2024, 3, 5), date(2024, 3, 9)));
        assert_eq!(iso.label(), "05/03/2024 - 09/03/2024");

        // Mixed formats are fine
        assert!(parse_period("1/1/2024 hingga 2024-12-31").is_some());
    }

    #[test]
    fn test_range_rejections() {
        assert!(matches!(
            parse_period_detailed("31/02/2024 hingga 01/03/2024"),
            Err(ParseError::MalformedDate(_))
        ));
        assert!(matches!(
            parse_period_detailed("31/12/2025 hingga 01/01/2024"),
            Err(ParseError::InvalidRange { .. })
        ));
        assert!(matches!(
            parse_period_detailed("jan 2024 hingga feb 2024 hingga mar 2024"),
            Err(ParseError::Unmatched(_))
        ));
        assert_eq!(parse_period("jan 2024 hingga"), None);
        assert_eq!(parse_period("xyz 2024 hingga jun 2025"), None);
    }

    #[test]
    fn test_blank_and_garbage() {
        assert_eq!(parse_period(""), None);
        assert_eq!(parse_period("   "), None);
        assert_eq!(parse_period("kemarin"), None);
        assert_eq!(parse_period("20255"), None);
        assert_eq!(parse_period("2024-01-05"), None);
    }

    #[test]
    fn test_early_year_ranges_round_trip() {
        let p = parse_period("jan 0999 hingga feb 0999").unwrap();
        assert_eq!(parse_period(&p.to_args()), Some(p));

        let p = parse_period("01/01/0005 sampai 31/12/0005").unwrap();
        assert_eq!(parse_period(&p.to_args()), Some(p));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("29/02/2024"), Some(date(2024, 2, 29)));
        assert_eq!(parse_date("29/02/2025"), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("5/6/2025"), Some(date(2025, 6, 5)));
    }
}
