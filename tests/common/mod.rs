// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Write;

use anyhow::Result;
use chrono::Month;
use spendbook::domain::MonthlySummary;
use tempfile::{NamedTempFile, TempDir};

/// Write `lines` (newline separated) into a temporary file.
pub fn write_import_file(lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(file)
}

/// A path inside a fresh temp dir that does not exist.
pub fn missing_file() -> Result<(TempDir, std::path::PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("does-not-exist.txt");
    Ok((dir, path))
}

/// Find the summary row for `month`, if the month made it into the summary.
pub fn row_for(summary: &[MonthlySummary], month: Month) -> Option<MonthlySummary> {
    summary.iter().find(|row| row.month == month).copied()
}

/// Sample import content spanning two years and three months.
pub const SAMPLE_LINES: &[&str] = &[
    "INCOME,2024-01-01,Salary,3000",
    "EXPENSE,2024-01-03,Rent,1200",
    "EXPENSE,2024-01-15,Groceries,254.30",
    "income,2023-01-20,Bonus,500",
    "EXPENSE,2024-02-02,Utilities,89.99",
    "INCOME,2024-03-01,Salary,3000",
    "EXPENSE,2024-03-10,Dining,75.5",
];
