//! Error types for the CSV writer.

use thiserror::Error;

/// Errors that can occur while writing the output file.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
