//! Several expenses on one line: `makan 50rb + transport 25rb gojek`.

use std::sync::LazyLock;

use catat_core::{ParseError, ParsedExpense};
use regex::Regex;

use crate::expense_line::parse_expense;

static SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[+&]\s*").expect("multi-expense separator"));

/// Split on `+`/`&` and parse each segment.
///
/// Segments that do not parse are skipped, but at least two must succeed;
/// a single stray `+` inside a description is not a multi-expense.
pub fn parse_multiple_detailed(line: &str) -> Result<Vec<ParsedExpense>, ParseError> {
    let line = line.trim();
    let parts: Vec<&str> = SPLIT_RE.split(line).collect();
    if parts.len() <= 1 {
        return Err(ParseError::Unmatched(line.to_string()));
    }

    let expenses: Vec<ParsedExpense> = parts.into_iter().filter_map(parse_expense).collect();
    if expenses.len() < 2 {
        return Err(ParseError::InsufficientSegments {
            parsed: expenses.len(),
        });
    }
    Ok(expenses)
}

/// Empty when the line is not a multi-expense.
pub fn parse_multiple(line: &str) -> Vec<ParsedExpense> {
    parse_multiple_detailed(line).unwrap_or_default()
}
