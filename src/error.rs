//! Error types for lemmaclean.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lemmaclean operations.
#[derive(Error, Debug)]
pub enum CleanError {
    /// The source file has zero bytes.
    #[error("Empty input: {0}")]
    EmptyInput(PathBuf),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A requested column is not part of the table header.
    #[error("Column '{column}' not found (available: {})", .available.join(", "))]
    MissingColumn {
        /// The requested column name.
        column: String,
        /// The columns the table does have.
        available: Vec<String>,
    },

    /// A source cell holds a token list instead of text.
    #[error("Column '{column}' row {row} does not hold text")]
    NotText {
        /// Column being cleaned.
        column: String,
        /// Zero-based row index.
        row: usize,
    },

    /// Annotating one row failed.
    #[error("Row {row} of column '{column}' failed: {source}")]
    RowFailed {
        /// Column being cleaned.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// The underlying tagger error.
        #[source]
        source: Box<CleanError>,
    },

    /// Failure inside a tagger backend.
    #[error("Tagger error: {0}")]
    Tagger(String),

    /// Malformed lemma lexicon.
    #[error("Lexicon error at line {line}: {message}")]
    Lexicon {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Rows or columns of mismatched length.
    #[error("Table shape error: {0}")]
    Shape(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-table parse error.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for lemmaclean operations.
pub type Result<T> = std::result::Result<T, CleanError>;

impl From<csv::Error> for CleanError {
    fn from(err: csv::Error) -> Self {
        CleanError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        CleanError::Serialization(err.to_string())
    }
}
