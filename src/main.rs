mod cli;
mod engine;
mod models;
mod parser;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{Cli, Command};
use crate::engine::Reconciler;
use crate::storage::FileLedgerStorage;

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let reconciler = Reconciler::new(FileLedgerStorage::open(&cli.data_dir)?);
    info!("Using data directory {}", reconciler.storage().data_dir().display());

    let mut output = BufWriter::new(stdout().lock());

    match cli.command {
        Command::Import { file } => {
            let summary = reconciler.import(&file)?;

            if summary.created {
                writeln!(output, "Created {} with {} transactions", summary.account_id, summary.ledger_transactions)?;
            } else {
                writeln!(
                    output,
                    "Imported {} new transactions into {} ({} total)",
                    summary.added_transactions,
                    summary.account_id,
                    summary.ledger_transactions
                )?;
            }
        }
        Command::Export { account, output: destination } => {
            let exported = reconciler.export(&account, &destination)?;
            writeln!(output, "Exported {} transactions to {}", exported, destination.display())?;
        }
        Command::List => {
            for account_id in reconciler.accounts()? {
                writeln!(output, "{account_id}")?;
            }
        }
    }

    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries command output, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
