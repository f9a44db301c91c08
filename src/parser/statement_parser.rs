use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;

use crate::models::{Layout, MissingColumn, Statement, Transaction};
use crate::models::{AMOUNT, BOOKING_DATE, DEBIT_CREDIT, RUNNING_BALANCE, VALUE_DATE};
use crate::parser::errors::MalformedStatement;
use crate::types::{balance_tolerance, codepage, parse_amount, AccountId, RawDate};

const ROUTING_CODE_LINE: usize = 4;
const ACCOUNT_NUMBER_LINE: usize = 5;
const TABLE_START_LINE: usize = 15;
const TRAILER_LINES: usize = 3;
const MIN_LINES: usize = TABLE_START_LINE + 1 + TRAILER_LINES;

const DELIMITER: u8 = b';';
const DEBIT_FLAG: &str = "S";

/// Column positions of the statement table, resolved from its header row.
struct TableColumns {
    booking_date: usize,
    value_date: usize,
    amount: usize,
    debit_credit: usize,
    details: Vec<usize>
}

/// Parses statement exports.
///
/// An export is a fixed layout text file:
/// - 15 header lines, with the routing code on line 5 and the account number on line 6
///   (second `;` field each),
/// - a `;` delimited table whose first row names the columns,
/// - 3 trailer lines, the last two declaring the opening and closing balance.
///
/// Amounts use `.` for thousands and `,` for decimals. A trailing `S` flag marks debits.
pub struct StatementParser;

impl StatementParser {
    /// Decodes a Windows-1250 export and parses it.
    pub fn parse_bytes(raw: &[u8]) -> Result<Statement, MalformedStatement> {
        let text = codepage::decode(raw)?;
        Self::parse(&text)
    }

    /// Parses the text of one statement export.
    ///
    /// # Errors
    /// Returns `MalformedStatement` if the header lines are missing, the table can not
    /// be read, or the transactions do not add up from the opening to the closing balance.
    pub fn parse(raw_text: &str) -> Result<Statement, MalformedStatement> {
        let lines: Vec<&str> = raw_text.lines().collect();

        if lines.len() < MIN_LINES {
            return Err(MalformedStatement::TooShort { lines: lines.len(), required: MIN_LINES });
        }

        let account_id = AccountId::new(
            header_field(&lines, ROUTING_CODE_LINE, "routing code")?,
            header_field(&lines, ACCOUNT_NUMBER_LINE, "account number")?
        )?;

        let opening_balance = parse_anchor(lines[lines.len() - 2], "opening balance")?;
        let closing_balance = parse_anchor(lines[lines.len() - 1], "closing balance")?;

        let table = lines[TABLE_START_LINE..lines.len() - TRAILER_LINES].join("\n");
        let (layout, transactions) = parse_table(&table, opening_balance)?;

        let computed = transactions.last()
            .map(|transaction| transaction.running_balance)
            .unwrap_or(opening_balance);

        let matches = closing_balance.checked_sub(computed)
            .is_some_and(|difference| difference.abs() < balance_tolerance());

        if !matches {
            return Err(MalformedStatement::BalanceMismatch { declared: closing_balance, computed });
        }

        Ok(Statement {
            account_id,
            opening_balance,
            closing_balance,
            layout,
            transactions
        })
    }
}

fn header_field<'a>(lines: &[&'a str], line: usize, name: &'static str) -> Result<&'a str, MalformedStatement> {
    lines[line].split(';').nth(1)
        .map(str::trim)
        .ok_or(MalformedStatement::MissingHeaderField { line: line + 1, name })
}

fn parse_anchor(line: &str, name: &'static str) -> Result<Decimal, MalformedStatement> {
    let fields: Vec<&str> = line.trim().split(';').collect();

    if fields.len() < 2 {
        return Err(MalformedStatement::invalid_anchor(name, format!("[{line}] has no amount and flag fields")));
    }

    let magnitude = parse_amount(fields[fields.len() - 2])
        .map_err(|error| MalformedStatement::invalid_anchor(name, error.to_string()))?;

    if magnitude.is_sign_negative() && !magnitude.is_zero() {
        return Err(MalformedStatement::invalid_anchor(name, format!("[{magnitude}] carries its own sign")));
    }

    Ok(apply_flag(magnitude, fields[fields.len() - 1]))
}

fn apply_flag(magnitude: Decimal, flag: &str) -> Decimal {
    if flag.trim() == DEBIT_FLAG { -magnitude } else { magnitude }
}

fn parse_table(table: &str, opening_balance: Decimal) -> Result<(Layout, Vec<Transaction>), MalformedStatement> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .trim(Trim::Headers)
        .flexible(false)
        .from_reader(table.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut layout_columns: Vec<String> = headers.iter()
        .enumerate()
        .filter(|(index, _)| *index != columns.debit_credit)
        .map(|(_, name)| name.to_string())
        .collect();
    layout_columns.push(RUNNING_BALANCE.to_string());
    let layout = Layout::new(layout_columns)?;

    let mut transactions = Vec::new();
    let mut running_balance = opening_balance;

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // 1-based file line: header row, then one line per record
        let line = TABLE_START_LINE + 2 + index;
        let field = |position: usize| record.get(position).unwrap_or("");

        let magnitude = parse_amount(field(columns.amount))
            .map_err(|error| MalformedStatement::invalid_amount(line, error))?;

        if magnitude.is_sign_negative() && !magnitude.is_zero() {
            return Err(MalformedStatement::SignedMagnitude { line, value: magnitude });
        }

        let amount = apply_flag(magnitude, field(columns.debit_credit));

        running_balance = running_balance.checked_add(amount)
            .ok_or(MalformedStatement::Overflow { line })?;

        transactions.push(Transaction {
            booking_date: parse_date(field(columns.booking_date), line)?,
            value_date: parse_date(field(columns.value_date), line)?,
            amount,
            running_balance,
            details: columns.details.iter().map(|position| field(*position).to_string()).collect()
        });
    }

    Ok((layout, transactions))
}

fn resolve_columns(headers: &StringRecord) -> Result<TableColumns, MalformedStatement> {
    let position = |name: &'static str| {
        headers.iter().position(|header| header == name).ok_or(MissingColumn(name))
    };

    if position(RUNNING_BALANCE).is_ok() {
        return Err(MalformedStatement::UnexpectedColumn(RUNNING_BALANCE));
    }

    let booking_date = position(BOOKING_DATE)?;
    let value_date = position(VALUE_DATE)?;
    let amount = position(AMOUNT)?;
    let debit_credit = position(DEBIT_CREDIT)?;

    let structural = [booking_date, value_date, amount, debit_credit];
    let details = (0..headers.len()).filter(|index| !structural.contains(index)).collect();

    Ok(TableColumns {
        booking_date,
        value_date,
        amount,
        debit_credit,
        details
    })
}

fn parse_date(value: &str, line: usize) -> Result<RawDate, MalformedStatement> {
    let date = RawDate::from_cell(value);
    date.to_calendar().map_err(|error| MalformedStatement::invalid_date(line, error))?;
    Ok(date)
}
