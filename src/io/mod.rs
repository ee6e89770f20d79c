// Import and export of ledger data

pub mod export;
pub mod import;

pub use export::*;
pub use import::*;
