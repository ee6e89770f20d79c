use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::{AppError, LedgerService};
use crate::domain::{parse_amount, parse_date, Transaction, TransactionKind};

use super::format_summary_line;

/// Interactive menu over a ledger service. Generic over its input and
/// output so it can be driven from tests.
pub struct Shell<'a, R, W> {
    service: &'a mut LedgerService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(service: &'a mut LedgerService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Show the menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "===== Expense Tracker Menu =====")?;
            writeln!(self.output, "1. Add Income/Expense")?;
            writeln!(self.output, "2. View Monthly Summary")?;
            writeln!(self.output, "3. Load Data from File")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match choice.trim() {
                "1" => self.add_transaction()?,
                "2" => self.view_monthly_summary()?,
                "3" => self.load_from_file()?,
                "4" => {
                    writeln!(self.output, "Exiting... Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn add_transaction(&mut self) -> Result<()> {
        let Some(kind) = self.prompt("Enter type (INCOME/EXPENSE): ")? else {
            return Ok(());
        };
        let Ok(kind) = kind.parse::<TransactionKind>() else {
            writeln!(self.output, "Invalid type. Must be INCOME or EXPENSE.")?;
            return Ok(());
        };

        let Some(date) = self.prompt("Enter date (yyyy-MM-dd): ")? else {
            return Ok(());
        };
        let Ok(date) = parse_date(&date) else {
            writeln!(self.output, "Invalid date format.")?;
            return Ok(());
        };

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(());
        };

        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(());
        };
        let Ok(amount) = parse_amount(&amount) else {
            writeln!(self.output, "Invalid amount. Must be a number.")?;
            return Ok(());
        };

        self.service.add(Transaction::new(kind, date, category, amount));
        writeln!(self.output, "Transaction added successfully!")?;
        Ok(())
    }

    fn view_monthly_summary(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== Monthly Summary =====")?;
        for row in self.service.monthly_summary() {
            writeln!(self.output, "{}", format_summary_line(&row))?;
        }
        Ok(())
    }

    fn load_from_file(&mut self) -> Result<()> {
        let Some(path) = self.prompt("Enter file path: ")? else {
            return Ok(());
        };

        match self.service.import_file(&path) {
            Ok(_) => writeln!(self.output, "Data loaded successfully from file!")?,
            Err(AppError::ReadFile { .. }) => writeln!(self.output, "Error reading file.")?,
            Err(err) => {
                writeln!(
                    self.output,
                    "Error parsing file content. Make sure the format is correct."
                )?;
                writeln!(self.output, "  {}", err)?;
            }
        }
        Ok(())
    }

    /// Print `message` and read one line of input without its terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
