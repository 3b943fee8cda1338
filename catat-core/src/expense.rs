//! Expense values produced by the line parsers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One `<category> <amount> [description]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpense {
    /// Lowercase, single word
    pub category: String,
    /// Whole rupiah, always > 0
    pub amount: i64,
    pub description: Option<String>,
}

impl ParsedExpense {
    pub fn new(category: impl Into<String>, amount: i64, description: Option<String>) -> Self {
        Self {
            category: category.into().to_lowercase(),
            amount,
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Sum of amounts, saturating instead of wrapping.
pub fn total_amount(expenses: &[ParsedExpense]) -> i64 {
    expenses
        .iter()
        .fold(0i64, |acc, e| acc.saturating_add(e.amount))
}

/// Expenses recorded under one `ddmmyy` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedExpenses {
    pub date: NaiveDate,
    pub expenses: Vec<ParsedExpense>,
}

/// Date buckets in the order their markers first appeared.
///
/// A repeated marker reuses its existing bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatedExpenseBatch {
    days: Vec<DatedExpenses>,
}

impl DatedExpenseBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a bucket exists for `date`.
    pub fn open(&mut self, date: NaiveDate) {
        if self.get(date).is_none() {
            self.days.push(DatedExpenses {
                date,
                expenses: Vec::new(),
            });
        }
    }

    pub fn push(&mut self, date: NaiveDate, expense: ParsedExpense) {
        self.open(date);
        if let Some(day) = self.days.iter_mut().find(|d| d.date == date) {
            day.expenses.push(expense);
        }
    }

    /// Drop dates whose marker had no valid expense lines under it.
    pub fn drop_empty(&mut self) {
        self.days.retain(|d| !d.expenses.is_empty());
    }

    pub fn get(&self, date: NaiveDate) -> Option<&[ParsedExpense]> {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.expenses.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatedExpenses> {
        self.days.iter()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn expense_count(&self) -> usize {
        self.days.iter().map(|d| d.expenses.len()).sum()
    }

    pub fn total(&self) -> i64 {
        self.days
            .iter()
            .fold(0i64, |acc, d| acc.saturating_add(total_amount(&d.expenses)))
    }
}

impl IntoIterator for DatedExpenseBatch {
    type Item = DatedExpenses;
    type IntoIter = std::vec::IntoIter<DatedExpenses>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

/// Outcome of validating parsed categories against the known set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCheck {
    pub accepted: Vec<ParsedExpense>,
    /// Unknown names, de-duplicated, first-seen order
    pub unknown: Vec<String>,
}

impl CategoryCheck {
    pub fn all_known(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// Split expenses by whether their category is in `known`.
///
/// `known` is the caller's snapshot; comparison is case-insensitive.
pub fn check_categories<S: AsRef<str>>(expenses: &[ParsedExpense], known: &[S]) -> CategoryCheck {
    let known: Vec<String> = known
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .collect();

    let mut out = CategoryCheck::default();
    for exp in expenses {
        if known.iter().any(|k| *k == exp.category) {
            out.accepted.push(exp.clone());
        } else if !out.unknown.contains(&exp.category) {
            out.unknown.push(exp.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_lowercases_and_drops_blank_description() {
        let e = ParsedExpense::new("Makan", 50_000, Some("  ".into()));
        assert_eq!(e.category, "makan");
        assert_eq!(e.description, None);
    }

    #[test]
    fn test_batch_keeps_marker_order_and_merges_repeats() {
        let mut batch = DatedExpenseBatch::new();
        batch.push(date(2026, 2, 26), ParsedExpense::new("makan", 5_000, None));
        batch.push(date(2026, 2, 25), ParsedExpense::new("makan", 7_000, None));
        batch.push(date(2026, 2, 26), ParsedExpense::new("belanja", 100_000, None));

        assert_eq!(batch.dates(), vec![date(2026, 2, 26), date(2026, 2, 25)]);
        assert_eq!(batch.get(date(2026, 2, 26)).map(<[_]>::len), Some(2));
        assert_eq!(batch.expense_count(), 3);
        assert_eq!(batch.total(), 112_000);
    }

    #[test]
    fn test_drop_empty() {
        let mut batch = DatedExpenseBatch::new();
        batch.open(date(2026, 2, 25));
        batch.push(date(2026, 2, 26), ParsedExpense::new("makan", 5_000, None));
        batch.drop_empty();
        assert_eq!(batch.dates(), vec![date(2026, 2, 26)]);
    }

    #[test]
    fn test_batch_serializes_iso_dates() {
        let mut batch = DatedExpenseBatch::new();
        batch.push(
            date(2026, 2, 25),
            ParsedExpense::new("makan", 7_000, Some("nasduk".into())),
        );
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json[0]["date"], "2026-02-25");
        assert_eq!(json[0]["expenses"][0]["amount"], 7000);
    }

    #[test]
    fn test_check_categories() {
        let expenses = vec![
            ParsedExpense::new("makan", 50_000, None),
            ParsedExpense::new("kopi", 20_000, None),
            ParsedExpense::new("kopi", 15_000, None),
            ParsedExpense::new("transport", 25_000, None),
        ];
        let check = check_categories(&expenses, &["Makan", "transport"]);
        assert!(!check.all_known());
        assert_eq!(check.accepted.len(), 2);
        assert_eq!(check.unknown, vec!["kopi".to_string()]);
    }
}
