mod common;

use anyhow::Result;
use chrono::{Month, NaiveDate};
use common::{row_for, SAMPLE_LINES};
use spendbook::domain::{parse_transaction, Ledger, ParseError, Transaction, TransactionKind};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_empty_ledger_summary() {
    let ledger = Ledger::new();
    assert!(ledger.monthly_summary().is_empty());
}

#[test]
fn test_years_merge_into_one_month() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.add(Transaction::new(
        TransactionKind::Income,
        date("2024-01-10"),
        "Pay",
        100.0,
    ));
    ledger.add(Transaction::new(
        TransactionKind::Expense,
        date("2023-01-20"),
        "Food",
        30.0,
    ));

    let summary = ledger.monthly_summary();
    assert_eq!(summary.len(), 1);

    let january = row_for(&summary, Month::January).unwrap();
    assert_eq!(january.total_income, 100.0);
    assert_eq!(january.total_expense, 30.0);
    assert_eq!(january.net, 70.0);
    Ok(())
}

#[test]
fn test_zero_amount_month_omitted() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.add(parse_transaction("INCOME", "2024-05-01", "Nothing", "0")?);
    ledger.add(parse_transaction("EXPENSE", "2024-05-02", "Nothing", "0.0")?);

    assert_eq!(ledger.len(), 2);
    assert!(ledger.monthly_summary().is_empty());
    Ok(())
}

#[test]
fn test_invalid_date_on_february_30() {
    let result = parse_transaction("income", "2024-02-30", "x", "10");
    assert!(matches!(result, Err(ParseError::InvalidDate(_))));
}

#[test]
fn test_lowercase_kind_matches_uppercase() -> Result<()> {
    let lower = parse_transaction("income", "2024-01-01", "Pay", "100")?;
    let upper = parse_transaction("INCOME", "2024-01-01", "Pay", "100")?;
    assert_eq!(lower, upper);
    Ok(())
}

#[test]
fn test_import_skips_malformed_line() -> Result<()> {
    let mut ledger = Ledger::new();
    let appended = ledger.import_from_text([
        "INCOME,2024-01-01,Pay,100",
        "bad,line",
        "EXPENSE,2024-01-05,Food,20",
    ])?;

    // Wrong field count is a documented quirk: dropped without any signal
    assert_eq!(appended, 2);
    assert_eq!(ledger.len(), 2);

    let january = row_for(&ledger.monthly_summary(), Month::January).unwrap();
    assert_eq!(january.total_income, 100.0);
    assert_eq!(january.total_expense, 20.0);
    assert_eq!(january.net, 80.0);
    Ok(())
}

#[test]
fn test_import_keeps_records_before_failure() {
    let mut ledger = Ledger::new();
    let err = ledger
        .import_from_text(["INCOME,2024-01-01,Pay,100", "INCOME,notadate,Pay,50"])
        .unwrap_err();

    assert!(matches!(err.source, ParseError::InvalidDate(_)));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.transactions()[0].category(), "Pay");
}

#[test]
fn test_sample_summary() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.import_from_text(SAMPLE_LINES)?;

    let summary = ledger.monthly_summary();
    let months: Vec<Month> = summary.iter().map(|row| row.month).collect();
    assert_eq!(months, vec![Month::January, Month::February, Month::March]);

    let january = row_for(&summary, Month::January).unwrap();
    assert_eq!(january.total_income, 3500.0);
    assert_eq!(january.total_expense, 1200.0 + 254.30);

    let february = row_for(&summary, Month::February).unwrap();
    assert_eq!(february.total_income, 0.0);
    assert_eq!(february.net, -89.99);

    for row in &summary {
        assert_eq!(row.total_income - row.total_expense, row.net);
    }
    Ok(())
}

#[test]
fn test_summary_unchanged_without_mutation() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.import_from_text(SAMPLE_LINES)?;

    let first = ledger.monthly_summary();
    let second = ledger.monthly_summary();
    assert_eq!(first, second);

    ledger.add(parse_transaction("EXPENSE", "2022-02-01", "Gift", "10")?);
    let third = ledger.monthly_summary();
    assert_ne!(first, third);
    Ok(())
}

#[test]
fn test_fresh_ledgers_are_isolated() -> Result<()> {
    let mut first = Ledger::new();
    first.import_from_text(SAMPLE_LINES)?;

    let second = Ledger::new();
    assert!(second.is_empty());
    assert_eq!(first.len(), SAMPLE_LINES.len());
    Ok(())
}
