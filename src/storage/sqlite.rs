//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, OpenFlags, params};
use serde::Serialize;
use crate::Result;
use crate::config::SqliteOptions;
use crate::record::{CivicCitation, CivicVariant, ClinvarCitation};
use super::schema::{self, Dataset};

/// SQLite-backed store for one dataset's tables
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file, creating it and its schema when missing
    pub fn open(path: &Path, dataset: Dataset, options: &SqliteOptions) -> Result<Self> {
        if !path.exists() {
            Self::create_file(path, options)?;
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.apply_pragmas(options)?;
        store.initialize_schema(dataset)?;
        Ok(store)
    }

    /// Open an existing database read-only, without touching its schema
    pub fn open_read_only(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory(dataset: Dataset) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.apply_pragmas(&SqliteOptions::default())?;
        store.initialize_schema(dataset)?;
        Ok(store)
    }

    /// Create the file and set its journal mode. Journal mode persists in the
    /// file, so this only happens once; a refusal is not fatal.
    fn create_file(path: &Path, options: &SqliteOptions) -> Result<()> {
        let conn = Connection::open(path)?;
        let requested = options.journal_mode.pragma_value();
        match conn.pragma_update_and_check(None, "journal_mode", requested, |row| {
            row.get::<_, String>(0)
        }) {
            Ok(mode) if mode.eq_ignore_ascii_case(requested) => {
                tracing::debug!("Created {} with journal_mode={}", path.display(), mode);
            }
            Ok(mode) => {
                tracing::warn!(
                    "journal_mode={} not applied to {} (engine kept {})",
                    requested,
                    path.display(),
                    mode
                );
            }
            Err(e) => {
                tracing::warn!("Failed to set journal_mode on {}: {}", path.display(), e);
            }
        }
        Ok(())
    }

    fn apply_pragmas(&self, options: &SqliteOptions) -> Result<()> {
        self.conn
            .pragma_update(None, "synchronous", options.synchronous.pragma_value())?;
        self.conn.pragma_update(None, "foreign_keys", true)?;
        Ok(())
    }

    /// Initialize the database schema
    fn initialize_schema(&self, dataset: Dataset) -> Result<()> {
        tracing::debug!("Applying {} schema", dataset.as_str());
        for stmt in schema::schema_statements(dataset) {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Insert Operations ==========

    /// Append a ClinVar citation
    pub fn insert_clinvar_citation(&self, citation: &ClinvarCitation) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO citations (allele_id, citation_source, citation_id) VALUES (?1, ?2, ?3)",
        )?;
        stmt.execute(params![
            citation.allele_id,
            citation.citation_source,
            citation.citation_id,
        ])?;
        Ok(())
    }

    /// Append a CiVIC variant
    pub fn insert_civic_variant(&self, variant: &CivicVariant) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            INSERT INTO variants (
                allele_id, variant_type, gene_id, gene_symbol, reference_assembly,
                chromosome, chr_start, chr_stop, reference_allele, alternative_allele,
                variant_id
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )?;
        stmt.execute(params![
            variant.allele_id,
            variant.variant_type,
            variant.gene_id,
            variant.gene_symbol,
            variant.reference_assembly,
            variant.chromosome,
            variant.chr_start,
            variant.chr_stop,
            variant.reference_allele,
            variant.alternative_allele,
            variant.variant_id,
        ])?;
        Ok(())
    }

    /// Append a CiVIC citation
    pub fn insert_civic_citation(&self, citation: &CivicCitation) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            INSERT INTO citations (
                allele_id, citation_source, citation_id,
                clinical_significance, phenotype, variant_origin
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )?;
        stmt.execute(params![
            citation.allele_id,
            citation.citation_source,
            citation.citation_id,
            citation.clinical_significance,
            citation.phenotype,
            citation.variant_origin,
        ])?;
        Ok(())
    }

    // ========== Bulk Operations ==========

    /// Begin a transaction for bulk operations
    pub fn begin_transaction(&self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    /// Run `f` inside a single transaction: commit on success, roll back
    /// everything `f` wrote on any error.
    pub fn in_transaction<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        self.begin_transaction()?;
        let outcome = f(self).and_then(|value| {
            self.commit()?;
            Ok(value)
        });

        if outcome.is_err() && !self.conn.is_autocommit() {
            if let Err(e) = self.rollback() {
                tracing::error!("Rollback failed: {}", e);
            }
        }
        outcome
    }

    // ========== Inspection ==========

    /// Count rows in a table
    pub fn count_rows(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', "\"\""));
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Check whether a table exists
    pub fn has_table(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Names of all tables and indexes, sorted
    pub fn schema_objects(&self) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT type, name FROM sqlite_master WHERE type IN ('table', 'index') AND name NOT LIKE 'sqlite_%' ORDER BY type, name",
        )?;
        let objects = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(objects)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        let mut tables = Vec::new();
        for table in schema::KNOWN_TABLES {
            if self.has_table(table)? {
                tables.push(TableCount {
                    table: table.to_string(),
                    rows: self.count_rows(table)?,
                });
            }
        }
        let indexes = self
            .schema_objects()?
            .iter()
            .filter(|(kind, _)| kind == "index")
            .count();
        Ok(DbStats { tables, indexes })
    }
}

/// Row count for one table
#[derive(Debug, Clone, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: usize,
}

/// Database statistics
#[derive(Debug, Clone, Serialize)]
pub struct DbStats {
    pub tables: Vec<TableCount>,
    pub indexes: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        for count in &self.tables {
            writeln!(f, "  {}: {}", count.table, count.rows)?;
        }
        writeln!(f, "  Indexes: {}", self.indexes)
    }
}
