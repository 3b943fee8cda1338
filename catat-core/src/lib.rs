//! catat-core: value types for chat bookkeeping messages

pub mod calendar;
pub mod command;
pub mod confirm;
pub mod error;
pub mod expense;
pub mod period;
pub mod relative;

pub use command::{Command, CommandKind};
pub use confirm::Confirmation;
pub use error::{AmountError, ParseError};
pub use expense::{
    CategoryCheck, DatedExpenseBatch, DatedExpenses, ParsedExpense, check_categories,
    total_amount,
};
pub use period::Period;
pub use relative::RelativePeriod;
