use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::models::MissingColumn;
use crate::types::{AmountError, CodepageError, InvalidDate};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Ledger table could not be processed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Ledger encoding error: {0}")]
    Encoding(#[from] CodepageError),
    #[error("Ledger table is missing a column: {0}")]
    MissingColumn(#[from] MissingColumn),
    #[error("Ledger line [{line}] has an invalid amount: {error}")]
    InvalidAmount {
        line: usize,
        error: AmountError
    },
    #[error("Ledger contains an invalid date: {0}")]
    InvalidDate(#[from] InvalidDate),
    #[error("Ledger output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error)
}
