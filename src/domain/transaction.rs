use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Amount, MONTHS};

/// Date layout accepted for transactions.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction adds to or subtracts from the net balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseError;

    /// Case-insensitive: "income", "Income" and "INCOME" are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("INCOME") {
            Ok(TransactionKind::Income)
        } else if s.eq_ignore_ascii_case("EXPENSE") {
            Ok(TransactionKind::Expense)
        } else {
            Err(ParseError::InvalidKind(s.to_string()))
        }
    }
}

/// A single ledger entry. Transactions are immutable once built; the ledger
/// only ever appends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    date: NaiveDate,
    category: String,
    /// Magnitude as given by the caller. Negative values are kept as-is and
    /// will skew the monthly totals.
    amount: Amount,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            kind,
            date,
            category: category.into(),
            amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Calendar month of the transaction, regardless of year.
    pub fn month(&self) -> Month {
        MONTHS[self.date.month0() as usize]
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the trailing ".0" on whole amounts
        write!(
            f,
            "{} | {} | {} | {:?}",
            self.kind,
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid type '{0}'. Must be INCOME or EXPENSE")]
    InvalidKind(String),

    #[error("Invalid date '{0}'. Expected a real date in YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("Invalid amount '{0}'. Expected a decimal number")]
    InvalidAmount(String),
}

/// Build a transaction from its four raw text fields.
/// The category is taken verbatim; the other fields are validated in order
/// kind, date, amount and the first failure is returned.
pub fn parse_transaction(
    kind: &str,
    date: &str,
    category: &str,
    amount: &str,
) -> Result<Transaction, ParseError> {
    let kind: TransactionKind = kind.parse()?;
    let date = parse_date(date)?;
    let amount = parse_amount(amount)?;

    Ok(Transaction::new(kind, date, category, amount))
}

/// Parse a strict `YYYY-MM-DD` date. Unpadded months or days are rejected,
/// as are dates that do not exist (e.g. 2024-02-30).
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(ParseError::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(input.to_string()))
}

/// Parse a decimal amount, ignoring surrounding whitespace.
pub fn parse_amount(input: &str) -> Result<Amount, ParseError> {
    input
        .trim()
        .parse::<Amount>()
        .map_err(|_| ParseError::InvalidAmount(input.to_string()))
}
