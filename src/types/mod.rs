mod account;
mod amount;
pub mod codepage;
mod date;
mod errors;

pub use account::AccountId;
pub use amount::{balance_tolerance, format_amount, parse_amount};
pub use date::RawDate;
pub use errors::{AccountIdError, AmountError, CodepageError, InvalidDate};
