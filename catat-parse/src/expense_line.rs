//! Single expense lines: `<category> <amount> [description]`.
//!
//! ```text
//! makan 50000 warteg
//! transport 25000
//! belanja 100rb indomaret
//! ```
//!
//! Whether the category exists is the caller's business.

use std::sync::LazyLock;

use catat_core::{ParseError, ParsedExpense};
use regex::Regex;

use crate::amount::normalize_amount;

static EXPENSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<category>\w+)\s+",
        r"(?P<amount>[0-9.,]+(?:rb|ribu|k|jt|juta)?)\s*",
        r"(?P<desc>.*)$"
    ))
    .expect("expense line pattern")
});

/// Parse one line, explaining a rejection.
pub fn parse_expense_detailed(line: &str) -> Result<ParsedExpense, ParseError> {
    let line = line.trim();
    let caps = EXPENSE_RE
        .captures(line)
        .ok_or_else(|| ParseError::Unmatched(line.to_string()))?;

    let amount = normalize_amount(&caps["amount"])?;
    let desc = caps["desc"].trim();

    Ok(ParsedExpense::new(
        &caps["category"],
        amount,
        (!desc.is_empty()).then(|| desc.to_string()),
    ))
}

pub fn parse_expense(line: &str) -> Option<ParsedExpense> {
    parse_expense_detailed(line).ok()
}
