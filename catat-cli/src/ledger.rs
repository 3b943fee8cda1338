//! Session-only expense records.

use catat_core::ParsedExpense;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: NaiveDate,
    pub category: String,
    pub amount: i64,
    pub description: Option<String>,
}

impl Record {
    pub fn new(date: NaiveDate, expense: ParsedExpense) -> Self {
        Self {
            date,
            category: expense.category,
            amount: expense.amount,
            description: expense.description,
        }
    }
}

/// Records in insertion order.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn delete_last(&mut self) -> Option<Record> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn between(&self, (start, end): (NaiveDate, NaiveDate)) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |r| start <= r.date && r.date <= end)
    }

    pub fn total(&self, bounds: (NaiveDate, NaiveDate)) -> i64 {
        self.between(bounds)
            .fold(0i64, |acc, r| acc.saturating_add(r.amount))
    }

    /// Per-category totals, largest first; ties by name.
    pub fn by_category(&self, bounds: (NaiveDate, NaiveDate)) -> Vec<(String, i64)> {
        let mut totals: Vec<(String, i64)> = Vec::new();
        for r in self.between(bounds) {
            match totals.iter_mut().find(|(c, _)| *c == r.category) {
                Some((_, t)) => *t = t.saturating_add(r.amount),
                None => totals.push((r.category.clone(), r.amount)),
            }
        }
        totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        totals
    }

    /// Most recent first.
    pub fn history(&self, limit: usize) -> impl Iterator<Item = &Record> {
        self.records.iter().rev().take(limit)
    }
}
