use rust_decimal::Decimal;

use crate::types::RawDate;

/// A single ledger line.
///
/// Statements carry no transaction id, so two transactions are the same entry
/// exactly when every field is equal. `details` holds the remaining columns of the
/// row (counterparty, purpose, reference, ...) verbatim and in [`Layout`](super::Layout) order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transaction {
    /// Day the bank booked the transaction.
    pub booking_date: RawDate,
    /// Day the funds became effective.
    pub value_date: RawDate,
    /// Signed amount, negative for debits.
    pub amount: Decimal,
    /// Balance after this transaction was applied.
    pub running_balance: Decimal,
    pub details: Vec<String>
}
