use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{ImportError, ParseError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidTransaction(#[from] ParseError),

    #[error("Import stopped at {0}")]
    Import(#[from] ImportError),

    #[error("Error reading file {}: {}", .path.display(), .source)]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// The parse failure behind this error, if there is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            AppError::InvalidTransaction(err) => Some(err),
            AppError::Import(err) => Some(&err.source),
            AppError::ReadFile { .. } | AppError::Io(_) => None,
        }
    }
}
