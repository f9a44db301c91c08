use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::engine::errors::ReconcileError;
use crate::models::{Ledger, Statement};
use crate::parser::StatementParser;
use crate::storage::ledger_csv::{render_rows, write_table, DateStyle};
use crate::storage::{LedgerStorage, StorageError};
use crate::types::{codepage, AccountId};

/// Outcome of importing one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub account_id: AccountId,
    /// Rows in the imported statement.
    pub statement_transactions: usize,
    /// Rows the ledger did not contain before.
    pub added_transactions: usize,
    /// Rows in the ledger after the merge.
    pub ledger_transactions: usize,
    /// Whether this import started a new ledger.
    pub created: bool
}

/// Imports statements into per-account ledgers and exports them again.
///
/// All state lives in the storage it is created with.
pub struct Reconciler<S: LedgerStorage> {
    storage: S
}

impl<S: LedgerStorage> Reconciler<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads, validates and merges the statement export at `path` into its account's ledger.
    pub fn import(&self, path: &Path) -> Result<ImportSummary, ReconcileError> {
        let bytes = fs::read(path).map_err(|error| ReconcileError::read_statement(path, error))?;
        let statement = StatementParser::parse_bytes(&bytes)?;

        debug!(
            "Parsed statement {} for account [{}]: [{}] transactions, opening [{}], closing [{}]",
            path.display(),
            statement.account_id,
            statement.transactions.len(),
            statement.opening_balance,
            statement.closing_balance
        );

        self.import_statement(&statement)
    }

    /// Merges an already parsed statement into its account's ledger and stores the result.
    pub fn import_statement(&self, statement: &Statement) -> Result<ImportSummary, ReconcileError> {
        let existing = self.storage.load(&statement.account_id)?;
        let previous_transactions = existing.as_ref().map_or(0, Ledger::len);

        let ledger = Ledger::merge(existing.as_ref(), statement)?;
        self.storage.save(&ledger)?;

        let summary = ImportSummary {
            account_id: statement.account_id.clone(),
            statement_transactions: statement.transactions.len(),
            added_transactions: ledger.len().saturating_sub(previous_transactions),
            ledger_transactions: ledger.len(),
            created: existing.is_none()
        };

        info!(
            "Imported [{}] of [{}] transactions into ledger [{}], now [{}] transactions",
            summary.added_transactions,
            summary.statement_transactions,
            summary.account_id,
            summary.ledger_transactions
        );

        Ok(summary)
    }

    /// Writes the ledger of `account_id` to `destination` with `DD.MM.YYYY` dates.
    ///
    /// The export is rendered completely before the destination is touched.
    pub fn export(&self, account_id: &AccountId, destination: &Path) -> Result<usize, ReconcileError> {
        let ledger = self.storage.load(account_id)?
            .ok_or_else(|| ReconcileError::UnknownAccount(account_id.clone()))?;

        let rows = render_rows(&ledger, DateStyle::Display)?;
        let text = write_table(ledger.layout(), &rows)?;
        let bytes = codepage::encode(&text).map_err(StorageError::from)?;

        fs::write(destination, bytes).map_err(|error| ReconcileError::write_export(destination, error))?;

        info!("Exported [{}] transactions of ledger [{account_id}] to {}", ledger.len(), destination.display());

        Ok(ledger.len())
    }

    pub fn accounts(&self) -> Result<Vec<AccountId>, ReconcileError> {
        Ok(self.storage.accounts()?)
    }
}
