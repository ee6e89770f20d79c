use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::LedgerService;
use crate::domain::{format_amount, MonthlySummary};

pub mod shell;

pub use shell::Shell;

/// Spendbook - Personal Income & Expense Tracker
#[derive(Parser)]
#[command(name = "spendbook")]
#[command(about = "Track income and expenses in memory and summarize them by month")]
#[command(version)]
pub struct Cli {
    /// Transaction file to load before running the command (repeatable)
    #[arg(short, long = "load", value_name = "FILE", global = true)]
    pub load: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to the interactive shell)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu: add transactions, view the summary, load files
    Shell,

    /// Show income, expense and net per calendar month
    Summary {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List every transaction in insertion order
    List,

    /// Export data to CSV or JSON
    Export {
        /// What to export: transactions, summary
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json (default: csv)
        #[arg(short, long)]
        format: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let mut service = LedgerService::new();
        for path in &self.load {
            service
                .import_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
        }

        match self.command.unwrap_or(Commands::Shell) {
            Commands::Shell => {
                let stdin = std::io::stdin();
                let mut shell = Shell::new(&mut service, stdin.lock(), std::io::stdout());
                shell.run()?;
            }

            Commands::Summary { format } => run_summary_command(&service, &format)?,

            Commands::List => run_list_command(&service),

            Commands::Export {
                export_type,
                output,
                format,
            } => run_export_command(&service, &export_type, output.as_deref(), format.as_deref())?,
        }

        Ok(())
    }
}

/// Install the global tracing subscriber. Logs go to stderr so reports on
/// stdout stay machine readable. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = if verbose {
        "spendbook=debug"
    } else {
        "spendbook=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed (e.g. when embedded in tests)
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// One summary line, e.g. `JANUARY -> Income: 100.00 | Expense: 30.00 | Net: 70.00`
pub fn format_summary_line(summary: &MonthlySummary) -> String {
    format!(
        "{} -> Income: {} | Expense: {} | Net: {}",
        summary.month.name().to_uppercase(),
        format_amount(summary.total_income),
        format_amount(summary.total_expense),
        format_amount(summary.net)
    )
}

fn run_summary_command(service: &LedgerService, format: &str) -> Result<()> {
    use crate::io::Exporter;

    match format {
        "json" => {
            Exporter::new(service).export_summary_json(std::io::stdout())?;
        }
        "csv" => {
            Exporter::new(service).export_summary_csv(std::io::stdout())?;
        }
        "table" => {
            let summary = service.monthly_summary();
            println!("===== Monthly Summary =====");
            if summary.is_empty() {
                println!("No income or expenses recorded.");
            }
            for row in &summary {
                println!("{}", format_summary_line(row));
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid format '{}'. Valid formats: table, json, csv",
                format
            );
        }
    }
    Ok(())
}

fn run_list_command(service: &LedgerService) {
    let transactions = service.transactions();
    if transactions.is_empty() {
        println!("No transactions recorded.");
        return;
    }

    for transaction in transactions {
        println!("{}", transaction);
    }
}

/// Export target selected by the `export` subcommand
enum ExportKind {
    TransactionsCsv,
    SummaryCsv,
    SummaryJson,
}

impl ExportKind {
    fn parse(export_type: &str, format: &str) -> Result<Self> {
        match (export_type, format) {
            ("transactions", "csv") => Ok(ExportKind::TransactionsCsv),
            ("summary", "csv") => Ok(ExportKind::SummaryCsv),
            ("summary", "json") => Ok(ExportKind::SummaryJson),
            ("transactions", _) => {
                anyhow::bail!("Invalid format '{}' for transactions. Valid formats: csv", format)
            }
            ("summary", _) => {
                anyhow::bail!("Invalid format '{}' for summary. Valid formats: csv, json", format)
            }
            _ => anyhow::bail!(
                "Invalid export type '{}'. Valid types: transactions, summary",
                export_type
            ),
        }
    }
}

fn run_export_command(
    service: &LedgerService,
    export_type: &str,
    output: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let kind = ExportKind::parse(export_type, format.unwrap_or("csv"))?;
    let exporter = Exporter::new(service);

    // Determine output writer
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match kind {
        ExportKind::TransactionsCsv => {
            let count = exporter.export_transactions_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} transactions", count);
            }
        }
        ExportKind::SummaryCsv | ExportKind::SummaryJson => {
            let report = if matches!(kind, ExportKind::SummaryCsv) {
                exporter.export_summary_csv(writer)?
            } else {
                exporter.export_summary_json(writer)?
            };
            if output.is_some() {
                eprintln!("Exported {} months", report.months.len());
            }
        }
    }

    Ok(())
}
