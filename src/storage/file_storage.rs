use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::models::Ledger;
use crate::storage::errors::StorageError;
use crate::storage::ledger_csv::{read_table, render_rows, write_table, DateStyle};
use crate::storage::LedgerStorage;
use crate::types::{codepage, AccountId};

const EXTENSION: &str = "csv";

/// Keeps one Windows-1250 ledger file per account in a data directory,
/// named `<account id>.csv`.
pub struct FileLedgerStorage {
    data_dir: PathBuf
}

impl FileLedgerStorage {
    /// Opens the data directory, creating it if it does not exist yet.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn ledger_path(&self, account_id: &AccountId) -> PathBuf {
        self.data_dir.join(format!("{account_id}.{EXTENSION}"))
    }
}

impl LedgerStorage for FileLedgerStorage {
    fn load(&self, account_id: &AccountId) -> Result<Option<Ledger>, StorageError> {
        let path = self.ledger_path(account_id);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into())
        };

        let ledger = read_table(account_id.clone(), &codepage::decode(&bytes)?)?;
        debug!("Loaded ledger [{account_id}] with [{}] transactions from {}", ledger.len(), path.display());

        Ok(Some(ledger))
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StorageError> {
        let path = self.ledger_path(ledger.account_id());
        let rows = render_rows(ledger, DateStyle::Raw)?;
        let bytes = codepage::encode(&write_table(ledger.layout(), &rows)?)?;

        // Written next to the target and renamed over it, so readers never see a partial ledger
        let mut file = NamedTempFile::new_in(&self.data_dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|error| StorageError::Io(error.error))?;

        debug!("Stored ledger [{}] with [{}] transactions to {}", ledger.account_id(), ledger.len(), path.display());

        Ok(())
    }

    fn accounts(&self) -> Result<Vec<AccountId>, StorageError> {
        let mut accounts = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();

            if !path.is_file() || path.extension().and_then(|extension| extension.to_str()) != Some(EXTENSION) {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match stem.parse::<AccountId>() {
                Ok(account_id) => accounts.push(account_id),
                Err(error) => warn!("Skipping {}: {error}", path.display())
            }
        }

        accounts.sort();

        Ok(accounts)
    }
}
