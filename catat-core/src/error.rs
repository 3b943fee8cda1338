//! Rejection taxonomy shared by every parser.
//!
//! Parsers never fail hard: the public entry points collapse these into
//! `None` / empty results. The detailed forms exist so a caller can say
//! *why* a message was not understood.

use thiserror::Error;

/// Why an amount token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,

    #[error("not a number: {0}")]
    NotNumeric(String),

    /// A plain literal with a 1-2 digit group after the last separator,
    /// e.g. `50,5`. The currency has no fractional units.
    #[error("decimal amount without suffix: {0}")]
    BareDecimal(String),

    #[error("amount too large: {0}")]
    Overflow(String),

    #[error("amount must be positive")]
    NotPositive,
}

/// Why a piece of text produced no structured result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed amount: {0}")]
    MalformedAmount(#[from] AmountError),

    /// Fails calendar validation (31/02/2024) or is not a recognized date shape.
    #[error("malformed date: {0}")]
    MalformedDate(String),

    #[error("unrecognized input: {0}")]
    Unmatched(String),

    #[error("range starts after it ends: {start} > {end}")]
    InvalidRange { start: String, end: String },

    #[error("need at least 2 expenses, parsed {parsed}")]
    InsufficientSegments { parsed: usize },
}
