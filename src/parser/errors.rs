use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::MissingColumn;
use crate::types::{AccountIdError, AmountError, CodepageError, InvalidDate};

/// Reasons a statement export is rejected as a whole.
#[derive(Debug, Error)]
pub enum MalformedStatement {
    #[error("Statement has {lines} lines, at least {required} are required")]
    TooShort {
        lines: usize,
        required: usize
    },
    #[error("Statement line [{line}] has no {name} field")]
    MissingHeaderField {
        line: usize,
        name: &'static str
    },
    #[error("Statement account is invalid: {0}")]
    InvalidAccountId(#[from] AccountIdError),
    #[error("Statement {name} line is invalid: {reason}")]
    InvalidAnchor {
        name: &'static str,
        reason: String
    },
    #[error("Statement text could not be decoded: {0}")]
    Encoding(#[from] CodepageError),
    #[error("Statement table could not be read: {0}")]
    Table(#[from] csv::Error),
    #[error("Statement table is missing a column: {0}")]
    MissingColumn(#[from] MissingColumn),
    #[error("Statement table has an unexpected [{0}] column")]
    UnexpectedColumn(&'static str),
    #[error("Statement line [{line}] has an invalid amount: {error}")]
    InvalidAmount {
        line: usize,
        error: AmountError
    },
    #[error("Statement line [{line}] has a signed magnitude [{value}]")]
    SignedMagnitude {
        line: usize,
        value: Decimal
    },
    #[error("Statement line [{line}] has an invalid date: {error}")]
    InvalidDate {
        line: usize,
        error: InvalidDate
    },
    #[error("Statement line [{line}] overflows the running balance")]
    Overflow {
        line: usize
    },
    #[error("Statement declares closing balance [{declared}] but its transactions add up to [{computed}]")]
    BalanceMismatch {
        declared: Decimal,
        computed: Decimal
    }
}

impl MalformedStatement {
    pub fn invalid_anchor(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAnchor { name, reason: reason.into() }
    }

    pub fn invalid_amount(line: usize, error: AmountError) -> Self {
        Self::InvalidAmount { line, error }
    }

    pub fn invalid_date(line: usize, error: InvalidDate) -> Self {
        Self::InvalidDate { line, error }
    }
}
