use rust_decimal::Decimal;

use crate::models::{Layout, Transaction};
use crate::types::AccountId;

/// The content of one imported statement export, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub account_id: AccountId,
    /// Balance declared by the statement before its first transaction.
    pub opening_balance: Decimal,
    /// Balance declared by the statement after its last transaction.
    pub closing_balance: Decimal,
    pub layout: Layout,
    pub transactions: Vec<Transaction>
}
