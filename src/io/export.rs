use anyhow::Result;
use std::io::Write;

use crate::application::{LedgerService, MonthlyReport};
use crate::domain::{format_amount, DATE_FORMAT};

/// Exporter for writing ledger data out as CSV or JSON
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export transactions in the import line format (no header), so the
    /// output can be loaded back. Categories are written unquoted; one that
    /// contains a comma produces a line the importer will skip.
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        let mut count = 0;
        for transaction in self.service.transactions() {
            csv_writer.write_record([
                transaction.kind().as_str().to_string(),
                transaction.date().format(DATE_FORMAT).to_string(),
                transaction.category().to_string(),
                transaction.amount().to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the monthly report as CSV with a header row
    pub fn export_summary_csv<W: Write>(&self, writer: W) -> Result<MonthlyReport> {
        let report = self.service.monthly_report();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["month", "income", "expense", "net"])?;
        for row in &report.months {
            csv_writer.write_record([
                row.month.clone(),
                format_amount(row.income),
                format_amount(row.expense),
                format_amount(row.net),
            ])?;
        }

        csv_writer.flush()?;
        Ok(report)
    }

    /// Export the monthly report as pretty-printed JSON
    pub fn export_summary_json<W: Write>(&self, mut writer: W) -> Result<MonthlyReport> {
        let report = self.service.monthly_report();
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_service() -> LedgerService {
        let mut service = LedgerService::new();
        service
            .import_lines([
                "INCOME,2024-01-01,Pay,100",
                "EXPENSE,2023-01-20,Food,30.5",
                "EXPENSE,2024-03-15,Groceries,54.23",
            ])
            .unwrap();
        service
    }

    #[test]
    fn test_export_transactions_round_trip() {
        let service = sample_service();
        let mut buffer = Vec::new();

        let count = Exporter::new(&service)
            .export_transactions_csv(&mut buffer)
            .unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "INCOME,2024-01-01,Pay,100\nEXPENSE,2023-01-20,Food,30.5\nEXPENSE,2024-03-15,Groceries,54.23\n"
        );

        let mut reloaded = LedgerService::new();
        reloaded.import_lines(text.lines()).unwrap();
        assert_eq!(reloaded.transactions(), service.transactions());
    }

    #[test]
    fn test_export_summary_csv() {
        let service = sample_service();
        let mut buffer = Vec::new();

        Exporter::new(&service).export_summary_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "month,income,expense,net\nJanuary,100.00,30.50,69.50\nMarch,0.00,54.23,-54.23\n"
        );
    }

    #[test]
    fn test_export_summary_json() {
        let service = sample_service();
        let mut buffer = Vec::new();

        let report = Exporter::new(&service).export_summary_json(&mut buffer).unwrap();
        let parsed: MonthlyReport = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(parsed, report);
        assert_eq!(parsed.months[0].month, "January");
    }
}
