use super::{Column, Layout, Ledger, MergeConflict, MissingColumn, Statement, Transaction};

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::types::{AccountId, RawDate};

fn create_layout() -> Result<Layout> {
    let columns = ["Buchungstag", "Valuta", "Vorgang/Verwendungszweck", "Umsatz", "Saldo"];
    Ok(Layout::new(columns.iter().map(|c| c.to_string()).collect())?)
}

fn create_transaction(booking_date: &str, value_date: &str, amount: &str, running_balance: &str, purpose: &str) -> Result<Transaction> {
    Ok(Transaction {
        booking_date: RawDate::from_cell(booking_date),
        value_date: RawDate::from_cell(value_date),
        amount: Decimal::from_str(amount)?,
        running_balance: Decimal::from_str(running_balance)?,
        details: vec![purpose.to_string()]
    })
}

fn create_statement(account_number: &str, transactions: Vec<Transaction>) -> Result<Statement> {
    Ok(Statement {
        account_id: AccountId::new("76090500", account_number)?,
        opening_balance: Decimal::ZERO,
        closing_balance: Decimal::ZERO,
        layout: create_layout()?,
        transactions
    })
}

fn statement_a() -> Result<Vec<Transaction>> {
    Ok(vec![
        create_transaction("02012023", "02012023", "50.00", "1050.00", "Gehalt")?,
        create_transaction("05012023", "04012023", "-20.00", "1030.00", "Miete")?,
        create_transaction("10012023", "10012023", "-5.50", "1024.50", "Baeckerei")?,
    ])
}

fn statement_b() -> Result<Vec<Transaction>> {
    Ok(vec![
        create_transaction("10012023", "10012023", "-5.50", "1024.50", "Baeckerei")?,
        create_transaction("15012023", "15012023", "-100.00", "924.50", "Versicherung")?,
        create_transaction("01022023", "01022023", "50.00", "974.50", "Gehalt")?,
    ])
}

fn purposes(ledger: &Ledger) -> Vec<&str> {
    ledger.transactions().iter().map(|t| t.details[0].as_str()).collect()
}

#[test]
fn test_merge_into_empty_ledger_keeps_statement_rows_sorted() -> Result<()> {
    let mut rows = statement_a()?;
    rows.reverse();
    let statement = create_statement("1234567", rows)?;

    let ledger = Ledger::merge(None, &statement)?;

    assert_eq!(ledger.len(), 3);
    assert_eq!(purposes(&ledger), vec!["Gehalt", "Miete", "Baeckerei"]);
    assert_eq!(ledger.account_id(), &statement.account_id);

    Ok(())
}

#[test]
fn test_merge_collapses_rows_shared_by_overlapping_statements() -> Result<()> {
    let ledger = Ledger::merge(None, &create_statement("1234567", statement_a()?)?)?;
    let merged = Ledger::merge(Some(&ledger), &create_statement("1234567", statement_b()?)?)?;

    assert_eq!(merged.len(), 5);
    assert_eq!(purposes(&merged), vec!["Gehalt", "Miete", "Baeckerei", "Versicherung", "Gehalt"]);

    Ok(())
}

#[test]
fn test_merge_does_not_mutate_inputs() -> Result<()> {
    let ledger = Ledger::merge(None, &create_statement("1234567", statement_a()?)?)?;
    let before = ledger.clone();
    let statement = create_statement("1234567", statement_b()?)?;

    Ledger::merge(Some(&ledger), &statement)?;

    assert_eq!(ledger, before);
    assert_eq!(statement.transactions, statement_b()?);

    Ok(())
}

#[test]
fn test_merge_is_idempotent() -> Result<()> {
    let statement = create_statement("1234567", statement_b()?)?;
    let ledger = Ledger::merge(None, &create_statement("1234567", statement_a()?)?)?;

    let once = Ledger::merge(Some(&ledger), &statement)?;
    let twice = Ledger::merge(Some(&once), &statement)?;

    assert_eq!(once, twice);

    Ok(())
}

#[test]
fn test_merge_content_does_not_depend_on_import_order() -> Result<()> {
    let a = create_statement("1234567", statement_a()?)?;
    let b = create_statement("1234567", statement_b()?)?;

    let a_then_b = Ledger::merge(Some(&Ledger::merge(None, &a)?), &b)?;
    let b_then_a = Ledger::merge(Some(&Ledger::merge(None, &b)?), &a)?;

    let set_a_then_b: HashSet<&Transaction> = a_then_b.transactions().iter().collect();
    let set_b_then_a: HashSet<&Transaction> = b_then_a.transactions().iter().collect();

    assert_eq!(set_a_then_b, set_b_then_a);
    assert_eq!(a_then_b.transactions(), b_then_a.transactions());

    Ok(())
}

#[test]
fn test_merge_sort_is_stable_for_equal_dates() -> Result<()> {
    let rows = vec![
        create_transaction("03012023", "03012023", "1.00", "1.00", "first")?,
        create_transaction("01012023", "01012023", "1.00", "1.00", "earlier")?,
        create_transaction("03012023", "03012023", "2.00", "3.00", "second")?,
        create_transaction("03012023", "03012023", "3.00", "6.00", "third")?,
    ];

    let ledger = Ledger::merge(None, &create_statement("1234567", rows)?)?;

    assert_eq!(purposes(&ledger), vec!["earlier", "first", "second", "third"]);

    Ok(())
}

#[test]
fn test_merge_orders_by_value_date_within_booking_date() -> Result<()> {
    let rows = vec![
        create_transaction("05012023", "05012023", "1.00", "1.00", "late value")?,
        create_transaction("05012023", "02012023", "1.00", "2.00", "early value")?,
    ];

    let ledger = Ledger::merge(None, &create_statement("1234567", rows)?)?;

    assert_eq!(purposes(&ledger), vec!["early value", "late value"]);

    Ok(())
}

#[test]
fn test_merge_orders_chronologically_across_month_boundaries() -> Result<()> {
    // Digit strings compare day-first, so a lexical sort would put 01.02 before 31.01
    let rows = vec![
        create_transaction("01022023", "01022023", "1.00", "2.00", "february")?,
        create_transaction("31012023", "31012023", "1.00", "1.00", "january")?,
    ];

    let ledger = Ledger::merge(None, &create_statement("1234567", rows)?)?;

    assert_eq!(purposes(&ledger), vec!["january", "february"]);

    Ok(())
}

#[test]
fn test_merge_keeps_first_of_duplicates_within_a_single_statement() -> Result<()> {
    let mut rows = statement_a()?;
    rows.push(rows[0].clone());

    let ledger = Ledger::merge(None, &create_statement("1234567", rows)?)?;

    assert_eq!(ledger.len(), 3);

    Ok(())
}

#[test]
fn test_merge_treats_rows_differing_in_one_field_as_distinct() -> Result<()> {
    let rows = vec![
        create_transaction("02012023", "02012023", "50.00", "1050.00", "Gehalt")?,
        create_transaction("02012023", "02012023", "50.00", "1100.00", "Gehalt")?,
    ];

    let ledger = Ledger::merge(None, &create_statement("1234567", rows)?)?;

    assert_eq!(ledger.len(), 2);

    Ok(())
}

#[test]
fn test_merge_rejects_statement_for_another_account() -> Result<()> {
    let ledger = Ledger::merge(None, &create_statement("1234567", statement_a()?)?)?;
    let foreign = create_statement("7654321", statement_b()?)?;

    let result = Ledger::merge(Some(&ledger), &foreign);

    assert!(matches!(result, Err(MergeConflict::AccountMismatch { .. })));

    Ok(())
}

#[test]
fn test_merge_rejects_statement_with_different_columns() -> Result<()> {
    let ledger = Ledger::merge(None, &create_statement("1234567", statement_a()?)?)?;
    let mut statement = create_statement("1234567", statement_b()?)?;
    statement.layout = Layout::new(vec![
        "Buchungstag".to_string(),
        "Valuta".to_string(),
        "Verwendungszweck".to_string(),
        "Umsatz".to_string(),
        "Saldo".to_string(),
    ])?;

    let result = Ledger::merge(Some(&ledger), &statement);

    assert!(matches!(result, Err(MergeConflict::LayoutMismatch { .. })));

    Ok(())
}

#[test]
fn test_layout_requires_structural_columns() {
    let result = Layout::new(vec!["Buchungstag".to_string(), "Valuta".to_string(), "Saldo".to_string()]);

    assert_eq!(result, Err(MissingColumn("Umsatz")));
}

#[test]
fn test_layout_resolves_columns_in_order() -> Result<()> {
    let layout = create_layout()?;
    let columns: Vec<Column> = layout.iter().collect();

    assert_eq!(columns, vec![
        Column::BookingDate,
        Column::ValueDate,
        Column::Detail("Vorgang/Verwendungszweck"),
        Column::Amount,
        Column::RunningBalance,
    ]);
    assert_eq!(layout.detail_count(), 1);

    Ok(())
}
