use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::AccountId;

#[derive(Parser, Debug)]
#[command(name = "statement-merger", version, about = "Merge bank statement exports into one ledger per account")]
pub struct Cli {
    /// Directory holding one ledger file per account.
    #[arg(long, env = "STATEMENT_MERGER_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// error, warn, info, debug or trace.
    #[arg(long, default_value = "error", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a statement export and merge it into its account's ledger.
    Import {
        file: PathBuf
    },
    /// Write an account's ledger with DD.MM.YYYY dates.
    Export {
        account: AccountId,
        output: PathBuf
    },
    /// List the accounts that have a ledger.
    List
}
