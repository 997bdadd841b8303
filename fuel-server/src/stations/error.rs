//! Station import error types.

/// Errors that can occur while importing the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// CSV file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// CSV structure could not be read
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns are missing from the header
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
