use std::collections::HashSet;

use crate::models::errors::MergeConflict;
use crate::models::{Layout, Statement, Transaction};
use crate::types::AccountId;

/// The merged transaction history of one account.
///
/// Transactions are unique by value and kept in canonical order: ascending by
/// booking date, then value date, with equal dates in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    account_id: AccountId,
    layout: Layout,
    transactions: Vec<Transaction>
}

impl Ledger {
    /// Builds a ledger from arbitrary rows, dropping exact duplicates (first one wins)
    /// and sorting them into canonical order.
    pub fn new(account_id: AccountId, layout: Layout, transactions: Vec<Transaction>) -> Self {
        Self {
            account_id,
            layout,
            transactions: canonicalize(transactions)
        }
    }

    /// Combines a previously stored ledger with a freshly parsed statement.
    ///
    /// Rows present in both collapse into one. The merged result is not re-validated
    /// for balance continuity; only the statement itself was checked when parsed.
    ///
    /// # Errors
    /// Returns `MergeConflict` if the ledger belongs to another account or uses a
    /// different column layout than the statement.
    pub fn merge(existing: Option<&Ledger>, incoming: &Statement) -> Result<Ledger, MergeConflict> {
        let Some(existing) = existing else {
            return Ok(Ledger::new(incoming.account_id.clone(), incoming.layout.clone(), incoming.transactions.clone()));
        };

        if existing.account_id != incoming.account_id {
            return Err(MergeConflict::account_mismatch(existing, incoming));
        }

        if existing.layout != incoming.layout {
            return Err(MergeConflict::layout_mismatch(existing));
        }

        let combined = existing.transactions.iter()
            .chain(incoming.transactions.iter())
            .cloned()
            .collect();

        Ok(Ledger::new(existing.account_id.clone(), existing.layout.clone(), combined))
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}

fn canonicalize(transactions: Vec<Transaction>) -> Vec<Transaction> {
    let mut seen = HashSet::with_capacity(transactions.len());
    let keep: Vec<bool> = transactions.iter().map(|transaction| seen.insert(transaction)).collect();
    drop(seen);

    let mut unique: Vec<Transaction> = transactions.into_iter()
        .zip(keep)
        .filter_map(|(transaction, keep)| keep.then_some(transaction))
        .collect();

    // Stable, so rows sharing both dates keep their input order.
    unique.sort_by(|left, right| {
        left.booking_date.sort_key().cmp(&right.booking_date.sort_key())
            .then_with(|| left.value_date.sort_key().cmp(&right.value_date.sort_key()))
    });

    unique
}
