//! Row types produced by the parsers and consumed by the store

/// One ClinVar variant-to-article citation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinvarCitation {
    pub allele_id: i64,
    /// Nullable here; the `NOT NULL` column rejects a null on insert
    pub citation_source: Option<String>,
    pub citation_id: Option<String>,
}

/// One CiVIC variant; `allele_id` is the molecular profile id used as join key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivicVariant {
    pub allele_id: i64,
    pub variant_type: Option<String>,
    pub gene_id: Option<i64>,
    pub gene_symbol: Option<String>,
    pub reference_assembly: Option<String>,
    pub chromosome: Option<String>,
    pub chr_start: Option<i64>,
    pub chr_stop: Option<i64>,
    pub reference_allele: Option<String>,
    pub alternative_allele: Option<String>,
    pub variant_id: Option<i64>,
}

/// One CiVIC evidence citation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivicCitation {
    pub allele_id: i64,
    pub citation_source: Option<String>,
    pub citation_id: Option<String>,
    pub clinical_significance: Option<String>,
    pub phenotype: Option<String>,
    pub variant_origin: Option<String>,
}
