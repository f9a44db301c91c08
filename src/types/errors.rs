use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String)
}

/// A stored date value that is not a valid day-month-year digit string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid date [{value}]: expected a DDMMYYYY calendar date")]
pub struct InvalidDate {
    pub value: String
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Account id field [{field}] must be a non-empty digit string, got [{value}]")]
    InvalidField {
        field: &'static str,
        value: String
    },
    #[error("Unrecognised account id [{0}]")]
    Unrecognised(String)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodepageError {
    #[error("Input is not valid {0} text")]
    Undecodable(&'static str),
    #[error("Text contains characters that cannot be written as {0}")]
    Unencodable(&'static str)
}
