//! Calendar utilities: month names, month lengths, timezone-aware "today".

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_LABELS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an out-of-range month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
}

/// Resolve a month name to 1-12.
///
/// Accepts the full Indonesian name and its short forms
/// (`januari`/`jan`, `agustus`/`agu`/`ags`, ...), case-insensitive.
pub fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.trim().to_lowercase().as_str() {
        "januari" | "jan" => 1,
        "februari" | "feb" => 2,
        "maret" | "mar" => 3,
        "april" | "apr" => 4,
        "mei" => 5,
        "juni" | "jun" => 6,
        "juli" | "jul" => 7,
        "agustus" | "agu" | "ags" => 8,
        "september" | "sep" => 9,
        "oktober" | "okt" => 10,
        "november" | "nov" => 11,
        "desember" | "des" => 12,
        _ => return None,
    };
    Some(month)
}

/// Capitalized Indonesian month name, or "" outside 1-12.
pub fn month_label(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_LABELS[(month - 1) as usize],
        _ => "",
    }
}

/// `(year, month)` of the month before the given one.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Current instant in an IANA timezone like "Asia/Jakarta".
pub fn now_in(tz: &str) -> Result<DateTime<Tz>> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(Utc::now().with_timezone(&tz))
}

/// Local calendar date in an IANA timezone.
pub fn today_in(tz: &str) -> Result<NaiveDate> {
    Ok(now_in(tz)?.date_naive())
}
