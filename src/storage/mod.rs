//! Storage Layer - SQLite-backed persistence
//!
//! One database file per dataset:
//! - clinvar: citations(allele_id, citation_source, citation_id)
//! - civic: variants(allele_id, variant_type, gene_id, ..., variant_id)
//!   and citations(allele_id, ..., clinical_significance, phenotype, variant_origin)

pub mod engine;
pub mod schema;
pub mod sqlite;

pub use schema::Dataset;
pub use sqlite::{DbStats, SqliteStore, TableCount};
