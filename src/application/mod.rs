// Application layer - use cases on top of the in-memory ledger.
// Every client (CLI subcommands, interactive shell, tests) goes through
// LedgerService rather than touching the Ledger directly.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
