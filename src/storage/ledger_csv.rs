//! The delimited ledger file format.
//!
//! Ledger files and exports share one layout: a header row naming the columns, then
//! one `;` delimited row per transaction with `,` as decimal separator. Ledger files
//! keep dates as `DDMMYYYY`, exports render them as `DD.MM.YYYY`.

use csv::{ReaderBuilder, Trim, WriterBuilder};
use rust_decimal::Decimal;

use crate::models::{Column, Layout, Ledger, Transaction};
use crate::storage::errors::StorageError;
use crate::types::{format_amount, parse_amount, AccountId, InvalidDate, RawDate};

const DELIMITER: u8 = b';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `DDMMYYYY`, as stored.
    Raw,
    /// `DD.MM.YYYY`, for export.
    Display
}

/// Renders every transaction into its row of cells, in layout order.
///
/// # Errors
/// With [`DateStyle::Display`], fails on the first date that is not a calendar date.
pub fn render_rows(ledger: &Ledger, style: DateStyle) -> Result<Vec<Vec<String>>, InvalidDate> {
    ledger.transactions().iter()
        .map(|transaction| render_row(ledger.layout(), transaction, style))
        .collect()
}

fn render_row(layout: &Layout, transaction: &Transaction, style: DateStyle) -> Result<Vec<String>, InvalidDate> {
    let mut details = transaction.details.iter();
    let mut row = Vec::with_capacity(layout.columns().len());

    for column in layout.iter() {
        let cell = match column {
            Column::BookingDate => render_date(&transaction.booking_date, style)?,
            Column::ValueDate => render_date(&transaction.value_date, style)?,
            Column::Amount => format_amount(transaction.amount),
            Column::RunningBalance => format_amount(transaction.running_balance),
            Column::Detail(_) => details.next().cloned().unwrap_or_default()
        };
        row.push(cell);
    }

    Ok(row)
}

fn render_date(date: &RawDate, style: DateStyle) -> Result<String, InvalidDate> {
    match style {
        DateStyle::Raw => Ok(date.as_str().to_string()),
        DateStyle::Display => date.to_display()
    }
}

/// Writes the header row and the rendered rows as delimited text.
pub fn write_table(layout: &Layout, rows: &[Vec<String>]) -> Result<String, StorageError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());

    writer.write_record(layout.columns())?;

    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer.into_inner().map_err(|error| StorageError::Io(error.into_error()))?;

    Ok(String::from_utf8(bytes)?)
}

/// Reads a ledger file body written by [`write_table`].
///
/// Amounts may carry `.` thousands separators and dates may be 7-digit integers
/// from older files. Rows are deduplicated and sorted on the way in.
pub fn read_table(account_id: AccountId, text: &str) -> Result<Ledger, StorageError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .trim(Trim::Headers)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    let layout = Layout::new(headers.iter().map(str::to_string).collect())?;
    let mut transactions = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = index + 2;
        let mut transaction = Transaction {
            booking_date: RawDate::from_cell(""),
            value_date: RawDate::from_cell(""),
            amount: Decimal::ZERO,
            running_balance: Decimal::ZERO,
            details: Vec::with_capacity(layout.detail_count())
        };

        for (column, value) in layout.iter().zip(record.iter()) {
            match column {
                Column::BookingDate => transaction.booking_date = RawDate::from_cell(value),
                Column::ValueDate => transaction.value_date = RawDate::from_cell(value),
                Column::Amount => transaction.amount = read_amount(value, line)?,
                Column::RunningBalance => transaction.running_balance = read_amount(value, line)?,
                Column::Detail(_) => transaction.details.push(value.to_string())
            }
        }

        transactions.push(transaction);
    }

    Ok(Ledger::new(account_id, layout, transactions))
}

fn read_amount(value: &str, line: usize) -> Result<Decimal, StorageError> {
    parse_amount(value).map_err(|error| StorageError::InvalidAmount { line, error })
}
