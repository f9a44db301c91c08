mod errors;
mod file_storage;
pub mod ledger_csv;

use crate::models::Ledger;
use crate::types::AccountId;

pub use errors::StorageError;
pub use file_storage::FileLedgerStorage;

/// Persistence for per-account ledgers.
///
/// A ledger is always written as a whole; implementations never append.
pub trait LedgerStorage {
    fn load(&self, account_id: &AccountId) -> Result<Option<Ledger>, StorageError>;
    fn save(&self, ledger: &Ledger) -> Result<(), StorageError>;
    fn accounts(&self) -> Result<Vec<AccountId>, StorageError>;
}
