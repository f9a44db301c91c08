use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::MergeConflict;
use crate::parser::MalformedStatement;
use crate::storage::StorageError;
use crate::types::{AccountId, InvalidDate};

/// Failure of an import, export or listing. Nothing is persisted when one is returned.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Could not read statement {}: {source}", .path.display())]
    ReadStatement {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not write export {}: {source}", .path.display())]
    WriteExport {
        path: PathBuf,
        source: io::Error
    },
    #[error("Malformed statement: {0}")]
    MalformedStatement(#[from] MalformedStatement),
    #[error("Merge conflict: {0}")]
    MergeConflict(#[from] MergeConflict),
    #[error("Ledger can not be exported: {0}")]
    InvalidDate(#[from] InvalidDate),
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
    #[error("No ledger exists for account [{0}]")]
    UnknownAccount(AccountId)
}

impl ReconcileError {
    pub fn read_statement(path: &Path, source: io::Error) -> Self {
        Self::ReadStatement { path: path.to_path_buf(), source }
    }

    pub fn write_export(path: &Path, source: io::Error) -> Self {
        Self::WriteExport { path: path.to_path_buf(), source }
    }
}
