//! # Varcite - ClinVar and CiVIC citation loader
//!
//! Loads flat-file exports of variant annotations into local SQLite stores.
//!
//! Varcite provides:
//! - Idempotent schema setup for the ClinVar and CiVIC databases
//! - Header-driven parsing of tab-delimited exports with null-sentinel handling
//! - All-or-nothing bulk loading, one transaction per input file

pub mod record;
pub mod storage;
pub mod ingest;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use record::{CivicCitation, CivicVariant, ClinvarCitation};
pub use storage::{Dataset, SqliteStore};
pub use ingest::LoadReport;

/// Result type alias for Varcite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Varcite operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("Line {line}: data before any '#' header line")]
    MissingHeader { line: usize },

    #[error("Header has no '{column}' column")]
    MissingColumn { column: String },

    #[error("Line {line}: row too short, no '{column}' field")]
    MissingField { line: usize, column: String },

    #[error("Line {line}: '{column}' is required but empty")]
    MissingValue { line: usize, column: String },

    #[error("Line {line}: '{column}' is not an integer: {value:?}")]
    InvalidInteger {
        line: usize,
        column: String,
        value: String,
    },

    #[error("SQLite {found} is too old, {required} or newer is required")]
    EngineTooOld { found: String, required: String },
}
