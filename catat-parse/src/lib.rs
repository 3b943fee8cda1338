//! Parsers for Indonesian expense-tracking chat messages.
//!
//! Every parser is pure: text in, typed value out. [`route`] ties them
//! together in a fixed precedence order.

pub mod amount;
pub mod command;
pub mod expense_line;
pub mod multi;
pub mod multi_date;
pub mod period;
pub mod router;

pub use amount::{normalize_amount, parse_amount};
pub use command::{COMMANDS, resolve};
pub use expense_line::{parse_expense, parse_expense_detailed};
pub use multi::{parse_multiple, parse_multiple_detailed};
pub use multi_date::parse_multi_date;
pub use period::{parse_date, parse_period, parse_period_detailed};
pub use router::{PeriodArg, Routed, route};
