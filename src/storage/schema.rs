//! Database schema definitions
//!
//! Every statement is idempotent (`IF NOT EXISTS`), so applying a schema to
//! an existing database is a no-op.

/// SQL to create the ClinVar citations table
pub const CREATE_CLINVAR_CITATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS citations (
    allele_id INTEGER NOT NULL,
    citation_source TEXT NOT NULL,
    citation_id TEXT NOT NULL
) STRICT
"#;

/// SQL to create the CiVIC variants table.
/// `allele_id` holds the single-variant molecular profile id.
pub const CREATE_CIVIC_VARIANTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS variants (
    allele_id INTEGER NOT NULL,
    variant_type TEXT NOT NULL,
    gene_id INTEGER,
    gene_symbol TEXT,
    reference_assembly TEXT,
    chromosome TEXT NOT NULL,
    chr_start INTEGER,
    chr_stop INTEGER,
    reference_allele TEXT,
    alternative_allele TEXT,
    variant_id INTEGER NOT NULL
) STRICT
"#;

/// SQL to create the CiVIC citations table
pub const CREATE_CIVIC_CITATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS citations (
    allele_id INTEGER NOT NULL,
    citation_source TEXT NOT NULL,
    citation_id TEXT NOT NULL,
    clinical_significance TEXT,
    phenotype TEXT,
    variant_origin TEXT
) STRICT
"#;

/// Indexes shared by both citation tables
pub const CREATE_CITATION_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_citations_allele_id ON citations(allele_id)",
    "CREATE INDEX IF NOT EXISTS idx_citations_citation_id ON citations(citation_id)",
];

pub const CREATE_VARIANT_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_variants_chromosome ON variants(chromosome, chr_start, chr_stop)",
];

/// Tables the stats command knows how to count
pub const KNOWN_TABLES: &[&str] = &["citations", "variants"];

/// Which flavour of database a store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Clinvar,
    Civic,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clinvar => "clinvar",
            Self::Civic => "civic",
        }
    }
}

/// All schema creation statements for a dataset, tables first
pub fn schema_statements(dataset: Dataset) -> Vec<&'static str> {
    let mut stmts = Vec::new();
    match dataset {
        Dataset::Clinvar => {
            stmts.push(CREATE_CLINVAR_CITATIONS_TABLE);
            stmts.extend(CREATE_CITATION_INDEXES.iter().copied());
        }
        Dataset::Civic => {
            stmts.push(CREATE_CIVIC_VARIANTS_TABLE);
            stmts.extend(CREATE_VARIANT_INDEXES.iter().copied());
            stmts.push(CREATE_CIVIC_CITATIONS_TABLE);
            stmts.extend(CREATE_CITATION_INDEXES.iter().copied());
        }
    }
    stmts
}
