use crate::models::{Ledger, Statement};
use crate::types::AccountId;
use thiserror::Error;

/// A header row lacks one of the columns every ledger row needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Missing column [{0}]")]
pub struct MissingColumn(pub &'static str);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeConflict {
    #[error("Statement for account [{incoming}] cannot be merged into the ledger of account [{existing}]")]
    AccountMismatch {
        existing: AccountId,
        incoming: AccountId
    },
    #[error("Statement columns do not match the ledger columns for account [{account_id}]")]
    LayoutMismatch {
        account_id: AccountId
    }
}

impl MergeConflict {
    pub fn account_mismatch(ledger: &Ledger, statement: &Statement) -> Self {
        Self::AccountMismatch {
            existing: ledger.account_id().clone(),
            incoming: statement.account_id.clone()
        }
    }

    pub fn layout_mismatch(ledger: &Ledger) -> Self {
        Self::LayoutMismatch { account_id: ledger.account_id().clone() }
    }
}
