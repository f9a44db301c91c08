use crate::types::errors::AccountIdError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const PREFIX: &str = "sparda-blz";
const SEPARATOR: &str = "-konto";

/// Identifies a ledger by bank routing code (BLZ) and account number.
///
/// The rendered form `sparda-blz{routing_code}-konto{account_number}` is the storage
/// key and ledger file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId {
    routing_code: String,
    account_number: String
}

impl AccountId {
    pub fn new(routing_code: &str, account_number: &str) -> Result<Self, AccountIdError> {
        Ok(Self {
            routing_code: digits("routing_code", routing_code)?,
            account_number: digits("account_number", account_number)?
        })
    }

}

fn digits(field: &'static str, value: &str) -> Result<String, AccountIdError> {
    let value = value.trim();

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(AccountIdError::InvalidField { field, value: value.to_string() });
    }

    Ok(value.to_string())
}

impl Display for AccountId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{PREFIX}{}{SEPARATOR}{}", self.routing_code, self.account_number)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (routing_code, account_number) = value.strip_prefix(PREFIX)
            .and_then(|rest| rest.split_once(SEPARATOR))
            .ok_or_else(|| AccountIdError::Unrecognised(value.to_string()))?;

        AccountId::new(routing_code, account_number)
    }
}
