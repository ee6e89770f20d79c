use chrono::{Datelike, Month};
use thiserror::Error;

use super::{parse_transaction, Amount, ParseError, Transaction, TransactionKind};

/// Field separator of the line-based import format.
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields a line must have to be considered a transaction.
pub const FIELD_COUNT: usize = 4;

/// Calendar months in reporting order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Totals for one calendar month, all years merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySummary {
    pub month: Month,
    pub total_income: Amount,
    pub total_expense: Amount,
    pub net: Amount,
}

/// An import stopped at a line that could not be parsed.
/// Records appended before that line remain in the ledger.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {source}")]
pub struct ImportError {
    /// 1-based position of the failing line in the input
    pub line: usize,
    /// Transactions appended by this import before it stopped
    pub appended: usize,
    pub source: ParseError,
}

/// In-memory, append-only list of transactions.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction at the end of the ledger.
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Parse `KIND,YYYY-MM-DD,CATEGORY,AMOUNT` lines and append them in order.
    ///
    /// Trailing empty fields are dropped before counting, so
    /// `INCOME,2024-01-01,Pay,` has three fields and `,,,` has none.
    /// Lines that do not split into exactly four fields are skipped without
    /// being reported. The first line that fails to parse aborts the import;
    /// nothing appended before it is undone. Returns the number of
    /// transactions appended.
    pub fn import_from_text<I, S>(&mut self, lines: I) -> Result<usize, ImportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut appended = 0;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            while fields.last() == Some(&"") {
                fields.pop();
            }
            if fields.len() != FIELD_COUNT {
                tracing::trace!(line = index + 1, "skipping line with {} fields", fields.len());
                continue;
            }

            let transaction = parse_transaction(fields[0], fields[1], fields[2], fields[3])
                .map_err(|source| ImportError {
                    line: index + 1,
                    appended,
                    source,
                })?;
            self.add(transaction);
            appended += 1;
        }

        Ok(appended)
    }

    /// Income, expense and net per calendar month, January first.
    /// The year is ignored, and a month only appears when its income or its
    /// expense total is strictly positive.
    pub fn monthly_summary(&self) -> Vec<MonthlySummary> {
        summarize_by_month(&self.transactions)
    }
}

/// Aggregate transactions into per-month totals.
pub fn summarize_by_month(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut income = [0.0; 12];
    let mut expense = [0.0; 12];

    for transaction in transactions {
        let slot = transaction.date().month0() as usize;
        match transaction.kind() {
            TransactionKind::Income => income[slot] += transaction.amount(),
            TransactionKind::Expense => expense[slot] += transaction.amount(),
        }
    }

    MONTHS
        .iter()
        .enumerate()
        .filter(|(slot, _)| income[*slot] > 0.0 || expense[*slot] > 0.0)
        .map(|(slot, month)| MonthlySummary {
            month: *month,
            total_income: income[slot],
            total_expense: expense[slot],
            net: income[slot] - expense[slot],
        })
        .collect()
}
