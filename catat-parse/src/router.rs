//! Message routing: decide what one chat message is.
//!
//! Strategies run in a fixed order and the first one that produces a
//! result wins:
//!
//! 1. command prefix
//! 2. multi-date `ddmmyy` batch
//! 3. `+`/`&` multi-expense line
//! 4. single expense line
//!
//! Anything left is [`Routed::Unrecognized`]; routing never errors.

use catat_core::{Command, DatedExpenseBatch, ParsedExpense, Period};
use serde::{Deserialize, Serialize};

use crate::command::resolve;
use crate::expense_line::parse_expense;
use crate::multi::parse_multiple;
use crate::multi_date::parse_multi_date;
use crate::period::parse_period;

/// Period argument of a custom-period command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum PeriodArg {
    /// No args; the caller picks its default window.
    Missing,
    Parsed(Period),
    /// Args were given but are not a period description.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Routed {
    Command {
        command: Command,
        /// Set only for commands that take a period.
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<PeriodArg>,
    },
    DatedBatch {
        batch: DatedExpenseBatch,
    },
    /// One entry for a single expense, two or more for a `+` line.
    Expenses {
        expenses: Vec<ParsedExpense>,
    },
    Unrecognized,
}

impl Routed {
    pub fn strategy(&self) -> &'static str {
        match self {
            Routed::Command { .. } => "command",
            Routed::DatedBatch { .. } => "multi_date",
            Routed::Expenses { expenses } if expenses.len() > 1 => "multi_expense",
            Routed::Expenses { .. } => "expense",
            Routed::Unrecognized => "unrecognized",
        }
    }
}

type Strategy = fn(&str) -> Option<Routed>;

/// Evaluation order. First `Some` wins.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("command", route_command),
    ("multi_date", route_multi_date),
    ("multi_expense", route_multiple),
    ("expense", route_single),
];

fn route_command(message: &str) -> Option<Routed> {
    let command = resolve(message)?;
    let period = command.name.takes_period().then(|| match &command.args {
        None => PeriodArg::Missing,
        Some(args) => match parse_period(args) {
            Some(period) => PeriodArg::Parsed(period),
            None => PeriodArg::Invalid(args.clone()),
        },
    });
    Some(Routed::Command { command, period })
}

fn route_multi_date(message: &str) -> Option<Routed> {
    parse_multi_date(message).map(|batch| Routed::DatedBatch { batch })
}

fn route_multiple(message: &str) -> Option<Routed> {
    let expenses = parse_multiple(message);
    (!expenses.is_empty()).then_some(Routed::Expenses { expenses })
}

fn route_single(message: &str) -> Option<Routed> {
    parse_expense(message).map(|e| Routed::Expenses { expenses: vec![e] })
}

/// Route one (possibly multi-line) message.
pub fn route(message: &str) -> Routed {
    let message = message.trim();
    if message.is_empty() {
        return Routed::Unrecognized;
    }

    for (name, strategy) in STRATEGIES {
        if let Some(routed) = strategy(message) {
            tracing::debug!(strategy = *name, "message routed");
            return routed;
        }
    }

    tracing::debug!("message not recognized");
    Routed::Unrecognized
}
