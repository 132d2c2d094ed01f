//! Ingest Layer - parsers and bulk loaders
//!
//! Each loader streams one file into one table inside a single transaction:
//! - clinvar: `#`-headed citation export → citations
//! - civic: variant summaries → variants, evidence citations → citations

pub mod civic;
pub mod clinvar;
pub mod fields;
pub mod header;

pub use header::HeaderMap;

use std::time::Duration;

/// Outcome of one committed load
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub table: &'static str,
    pub rows: usize,
    /// Blank lines passed over
    pub skipped_lines: usize,
    pub elapsed: Duration,
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows into {} ({} blank lines skipped) in {:.2?}",
            self.rows, self.table, self.skipped_lines, self.elapsed
        )
    }
}
