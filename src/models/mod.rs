mod errors;
mod layout;
mod ledger;
mod statement;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::{MergeConflict, MissingColumn};
pub use layout::{Column, Layout, AMOUNT, BOOKING_DATE, DEBIT_CREDIT, RUNNING_BALANCE, VALUE_DATE};
pub use ledger::Ledger;
pub use statement::Statement;
pub use transaction::Transaction;
