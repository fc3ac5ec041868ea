//! Error types for the report pipeline.
//!
//! Every stage fails fast with one of these variants. None of them are
//! retried; the CLI reports the message and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Input path does not exist or is not a regular file
    #[error("Meta Ads CSV file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Input path has the wrong extension (`extension` is `<none>` when absent)
    #[error("Expected CSV file, got: {extension}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The file exists but could not be opened for reading
    #[error("Failed to open {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No header row and no data
    #[error("CSV file is empty: {}", .path.display())]
    EmptyInput { path: PathBuf },

    /// The csv tokenizer rejected the file
    #[error("Invalid CSV format: {diagnostic}")]
    MalformedInput { path: PathBuf, diagnostic: String },

    /// Required columns absent from the header
    #[error("Missing required columns in CSV: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// The report could not be created or saved
    #[error("Failed to write Excel report {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },
}

impl ReportError {
    /// Short category used when reporting the failure to the user.
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::NotFound { .. } | ReportError::Unreadable { .. } => "not found",
            ReportError::UnsupportedFormat { .. }
            | ReportError::EmptyInput { .. }
            | ReportError::MalformedInput { .. }
            | ReportError::Schema { .. } => "validation",
            ReportError::WriteFailure { .. } => "write",
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ReportError::WriteFailure { path: path.into(), reason: reason.to_string() }
    }
}
