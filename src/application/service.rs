use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::{parse_transaction, Ledger, MonthlySummary, Transaction};
use crate::io::read_lines;

use super::{AppError, MonthlyReport};

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (CLI, shell, tests).
/// Each service owns its own ledger; nothing is shared between instances.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    /// Create a service with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    // ========================
    // Recording
    // ========================

    /// Parse raw fields into a transaction and append it.
    pub fn record_transaction(
        &mut self,
        kind: &str,
        date: &str,
        category: &str,
        amount: &str,
    ) -> Result<Transaction, AppError> {
        let transaction = parse_transaction(kind, date, category, amount)?;
        tracing::debug!(%transaction, "recording transaction");

        self.ledger.add(transaction.clone());
        Ok(transaction)
    }

    /// Append an already validated transaction.
    pub fn add(&mut self, transaction: Transaction) {
        tracing::debug!(%transaction, "adding transaction");
        self.ledger.add(transaction);
    }

    // ========================
    // Import
    // ========================

    /// Import already-read lines. Stops at the first unparseable line and
    /// keeps whatever was appended before it.
    pub fn import_lines<I, S>(&mut self, lines: I) -> Result<usize, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.ledger.import_from_text(lines) {
            Ok(count) => {
                tracing::info!(count, total = self.ledger.len(), "import complete");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(
                    line = err.line,
                    appended = err.appended,
                    error = %err.source,
                    "import aborted"
                );
                Err(err.into())
            }
        }
    }

    /// Read every line from `reader`, then import them. A read failure
    /// leaves the ledger untouched.
    pub fn import_reader<R: Read>(&mut self, reader: R) -> Result<usize, AppError> {
        let lines = read_lines(reader)?;
        self.import_lines(&lines)
    }

    /// Read the file at `path`, then import its lines.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading transactions");

        let read_error = |source| AppError::ReadFile {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        let lines = read_lines(file).map_err(read_error)?;

        self.import_lines(&lines)
    }

    // ========================
    // Reporting
    // ========================

    pub fn monthly_summary(&self) -> Vec<MonthlySummary> {
        self.ledger.monthly_summary()
    }

    pub fn monthly_report(&self) -> MonthlyReport {
        MonthlyReport::from_summaries(&self.ledger.monthly_summary())
    }
}
