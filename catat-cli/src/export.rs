//! Rendering of a routed message for `catat parse`.

use anyhow::{Context, Result};
use catat_core::{ParsedExpense, Period};
use catat_parse::{PeriodArg, Routed};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::reply::format_rupiah;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct ExpenseRow<'a> {
    date: NaiveDate,
    category: &'a str,
    amount: i64,
    description: &'a str,
}

fn row(date: NaiveDate, e: &ParsedExpense) -> ExpenseRow<'_> {
    ExpenseRow {
        date,
        category: &e.category,
        amount: e.amount,
        description: e.description.as_deref().unwrap_or(""),
    }
}

/// Expense rows of a routed message; undated expenses use `today`.
fn rows(routed: &Routed, today: NaiveDate) -> Vec<ExpenseRow<'_>> {
    match routed {
        Routed::Expenses { expenses } => expenses.iter().map(|e| row(today, e)).collect(),
        Routed::DatedBatch { batch } => batch
            .iter()
            .flat_map(|day| day.expenses.iter().map(move |e| row(day.date, e)))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn write_csv<W: Write>(routed: &Routed, today: NaiveDate, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    let rows = rows(routed, today);
    if rows.is_empty() {
        wtr.write_record(["date", "category", "amount", "description"])?;
    }
    for row in rows {
        wtr.serialize(row).context("write csv row")?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(routed: &Routed, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, routed).context("serialize json")?;
    writeln!(out)?;
    Ok(())
}

pub fn period_text(period: &Period) -> String {
    let (start, end) = period.bounds();
    let mut lines = vec![
        format!("{} ({})", period.label(), period.kind()),
        format!("{start} .. {end}"),
    ];
    if let Some(prev) = period.previous() {
        lines.push(format!("previous: {}", prev.label()));
    }
    lines.join("\n")
}

pub fn text(routed: &Routed) -> String {
    match routed {
        Routed::Command { command, period } => {
            let mut out = format!("command: {}", command.name);
            if let Some(args) = &command.args {
                out.push_str(&format!("\nargs: {args}"));
            }
            match period {
                Some(PeriodArg::Missing) => out.push_str("\nperiod: (default)"),
                Some(PeriodArg::Parsed(p)) => {
                    out.push_str(&format!("\nperiod: {}", period_text(p).replace('\n', "\n  ")))
                }
                Some(PeriodArg::Invalid(args)) => {
                    out.push_str(&format!("\nperiod: not recognized: {args}"))
                }
                None => {}
            }
            out
        }
        Routed::DatedBatch { batch } => {
            let mut lines = Vec::new();
            for day in batch.iter() {
                lines.push(format!("{}:", day.date));
                lines.extend(day.expenses.iter().map(|e| format!("  {}", expense_text(e))));
            }
            lines.push(format!("total: {}", format_rupiah(batch.total())));
            lines.join("\n")
        }
        Routed::Expenses { expenses } => {
            let mut lines: Vec<String> = expenses.iter().map(expense_text).collect();
            if expenses.len() > 1 {
                lines.push(format!(
                    "total: {}",
                    format_rupiah(catat_core::total_amount(expenses))
                ));
            }
            lines.join("\n")
        }
        Routed::Unrecognized => "unrecognized".to_string(),
    }
}

fn expense_text(e: &ParsedExpense) -> String {
    match &e.description {
        Some(d) => format!("{} {} {d}", e.category, format_rupiah(e.amount)),
        None => format!("{} {}", e.category, format_rupiah(e.amount)),
    }
}
