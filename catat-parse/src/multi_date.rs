//! Multi-date batches keyed by bare `ddmmyy` marker lines.
//!
//! ```text
//! 250226
//! makan 7k nasduk
//! belanja 100k alfa
//! 260226
//! makan 5k nasi
//! ```

use std::sync::LazyLock;

use catat_core::DatedExpenseBatch;
use chrono::NaiveDate;
use regex::Regex;

use crate::expense_line::parse_expense;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>[0-9]{2})(?P<month>[0-9]{2})(?P<year>[0-9]{2})$").expect("ddmmyy marker pattern")
});

/// Date of a `ddmmyy` marker line, in the 20xx century.
///
/// `Some(None)` means the line is marker-shaped but not a real date.
fn marker_date(line: &str) -> Option<Option<NaiveDate>> {
    let caps = MARKER_RE.captures(line)?;
    let day: u32 = caps["day"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let year: i32 = caps["year"].parse().ok()?;
    Some(NaiveDate::from_ymd_opt(2000 + year, month, day))
}

/// Group expense lines under the most recent valid date marker.
///
/// Lines before the first marker and lines that don't parse are dropped.
/// An invalid marker (e.g. `320226`) is ignored and does not open a bucket.
/// Dates left without expenses are dropped; an empty batch is `None`.
pub fn parse_multi_date(message: &str) -> Option<DatedExpenseBatch> {
    let mut batch = DatedExpenseBatch::new();
    let mut current: Option<NaiveDate> = None;

    for line in message.split(['\r', '\n']) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match marker_date(line) {
            Some(Some(date)) => {
                batch.open(date);
                current = Some(date);
                continue;
            }
            Some(None) => {
                tracing::debug!(marker = line, "ignoring invalid date marker");
                continue;
            }
            None => {}
        }

        if let Some(date) = current {
            if let Some(expense) = parse_expense(line) {
                batch.push(date, expense);
            }
        }
    }

    batch.drop_empty();
    (!batch.is_empty()).then_some(batch)
}
