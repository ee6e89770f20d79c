use serde::{Deserialize, Serialize};

use crate::domain::{Amount, MonthlySummary};

/// Monthly income/expense report over the whole ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub months: Vec<MonthRow>,
    pub total_income: Amount,
    pub total_expense: Amount,
    pub net: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRow {
    /// English month name, e.g. "January"
    pub month: String,
    pub income: Amount,
    pub expense: Amount,
    pub net: Amount,
}

impl From<&MonthlySummary> for MonthRow {
    fn from(summary: &MonthlySummary) -> Self {
        Self {
            month: summary.month.name().to_string(),
            income: summary.total_income,
            expense: summary.total_expense,
            net: summary.net,
        }
    }
}

impl MonthlyReport {
    /// Build the report from summary rows; grand totals cover only the
    /// months that made it into the summary.
    pub fn from_summaries(summaries: &[MonthlySummary]) -> Self {
        let total_income: Amount = summaries.iter().fold(0.0, |acc, s| acc + s.total_income);
        let total_expense: Amount = summaries.iter().fold(0.0, |acc, s| acc + s.total_expense);

        Self {
            months: summaries.iter().map(MonthRow::from).collect(),
            total_income,
            total_expense,
            net: total_income - total_expense,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
