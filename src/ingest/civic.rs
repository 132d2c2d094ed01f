//! CiVIC nightly TSV loaders
//!
//! Both files have a plain first-line header. Variants and citations are
//! separate passes with separate transactions. Text fields are stored as
//! written, empty included; only a short row reads as null.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::StringRecord;

use super::fields::{lenient_int, owned, strict_int};
use super::{HeaderMap, LoadReport};
use crate::record::{CivicCitation, CivicVariant};
use crate::storage::SqliteStore;
use crate::Result;

/// Variant summary column names
pub mod variant_columns {
    pub const MOLECULAR_PROFILE_ID: &str = "single_variant_molecular_profile_id";
    pub const VARIANT_TYPES: &str = "variant_types";
    pub const ENTREZ_ID: &str = "entrez_id";
    pub const GENE: &str = "gene";
    pub const REFERENCE_BUILD: &str = "reference_build";
    pub const CHROMOSOME: &str = "chromosome";
    pub const START: &str = "start";
    pub const STOP: &str = "stop";
    pub const REFERENCE_BASES: &str = "reference_bases";
    pub const VARIANT_BASES: &str = "variant_bases";
    pub const VARIANT_ID: &str = "variant_id";
}

/// Evidence summary column names
pub mod citation_columns {
    pub const MOLECULAR_PROFILE_ID: &str = "molecular_profile_id";
    pub const SOURCE_TYPE: &str = "source_type";
    pub const CITATION_ID: &str = "citation_id";
    pub const SIGNIFICANCE: &str = "significance";
    pub const DISEASE: &str = "disease";
    pub const VARIANT_ORIGIN: &str = "variant_origin";
}

/// Resolved positions, in record field order
struct Columns<const N: usize>([usize; N]);

impl<const N: usize> Columns<N> {
    fn resolve(header: &HeaderMap, names: [&str; N]) -> Result<Self> {
        let mut positions = [0; N];
        for (slot, name) in positions.iter_mut().zip(names) {
            *slot = header.require(name)?;
        }
        Ok(Self(positions))
    }

    /// Field `i` of a record, verbatim; a short row reads as null
    fn get<'r>(&self, record: &'r StringRecord, i: usize) -> Option<&'r str> {
        record.get(self.0[i])
    }

    /// Field `i` for a required integer; empty counts as missing
    fn key<'r>(&self, record: &'r StringRecord, i: usize) -> Option<&'r str> {
        self.get(record, i).filter(|v| !v.is_empty())
    }
}

const VARIANT_FIELDS: [&str; 11] = [
    variant_columns::MOLECULAR_PROFILE_ID,
    variant_columns::VARIANT_TYPES,
    variant_columns::ENTREZ_ID,
    variant_columns::GENE,
    variant_columns::REFERENCE_BUILD,
    variant_columns::CHROMOSOME,
    variant_columns::START,
    variant_columns::STOP,
    variant_columns::REFERENCE_BASES,
    variant_columns::VARIANT_BASES,
    variant_columns::VARIANT_ID,
];

const CITATION_FIELDS: [&str; 6] = [
    citation_columns::MOLECULAR_PROFILE_ID,
    citation_columns::SOURCE_TYPE,
    citation_columns::CITATION_ID,
    citation_columns::SIGNIFICANCE,
    citation_columns::DISEASE,
    citation_columns::VARIANT_ORIGIN,
];

fn tsv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

fn line_of(record: &StringRecord, fallback: usize) -> usize {
    record
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or(fallback)
}

fn parse_variant(columns: &Columns<11>, record: &StringRecord, line: usize) -> Result<CivicVariant> {
    let f = |i| columns.get(record, i);
    Ok(CivicVariant {
        allele_id: strict_int(columns.key(record, 0), line, variant_columns::MOLECULAR_PROFILE_ID)?,
        variant_type: owned(f(1)),
        gene_id: lenient_int(f(2)),
        gene_symbol: owned(f(3)),
        reference_assembly: owned(f(4)),
        chromosome: owned(f(5)),
        chr_start: lenient_int(f(6)),
        chr_stop: lenient_int(f(7)),
        reference_allele: owned(f(8)),
        alternative_allele: owned(f(9)),
        variant_id: lenient_int(f(10)),
    })
}

fn parse_citation(columns: &Columns<6>, record: &StringRecord, line: usize) -> Result<CivicCitation> {
    let f = |i| columns.get(record, i);
    Ok(CivicCitation {
        allele_id: strict_int(columns.key(record, 0), line, citation_columns::MOLECULAR_PROFILE_ID)?,
        citation_source: owned(f(1)),
        citation_id: owned(f(2)),
        clinical_significance: owned(f(3)),
        phenotype: owned(f(4)),
        variant_origin: owned(f(5)),
    })
}

/// Load a variant summaries file into `variants`
pub fn load_variants(store: &SqliteStore, path: &Path) -> Result<LoadReport> {
    let file = File::open(path)?;
    tracing::info!("Loading CiVIC variants from {}", path.display());
    load_variants_from(store, file)
}

pub fn load_variants_from<R: Read>(store: &SqliteStore, input: R) -> Result<LoadReport> {
    let started = Instant::now();
    let rows = store.in_transaction(|store| {
        let mut reader = tsv_reader(input);
        let header = HeaderMap::from_names(reader.headers()?.iter());
        let columns = Columns::resolve(&header, VARIANT_FIELDS)?;

        let mut rows = 0;
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let variant = parse_variant(&columns, &record, line_of(&record, idx + 2))?;
            store.insert_civic_variant(&variant)?;
            rows += 1;
        }
        Ok(rows)
    })?;

    Ok(LoadReport {
        table: "variants",
        rows,
        skipped_lines: 0,
        elapsed: started.elapsed(),
    })
}

/// Load an evidence summaries file into `citations`
pub fn load_citations(store: &SqliteStore, path: &Path) -> Result<LoadReport> {
    let file = File::open(path)?;
    tracing::info!("Loading CiVIC citations from {}", path.display());
    load_citations_from(store, file)
}

pub fn load_citations_from<R: Read>(store: &SqliteStore, input: R) -> Result<LoadReport> {
    let started = Instant::now();
    let rows = store.in_transaction(|store| {
        let mut reader = tsv_reader(input);
        let header = HeaderMap::from_names(reader.headers()?.iter());
        let columns = Columns::resolve(&header, CITATION_FIELDS)?;

        let mut rows = 0;
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let citation = parse_citation(&columns, &record, line_of(&record, idx + 2))?;
            store.insert_civic_citation(&citation)?;
            rows += 1;
        }
        Ok(rows)
    })?;

    Ok(LoadReport {
        table: "citations",
        rows,
        skipped_lines: 0,
        elapsed: started.elapsed(),
    })
}
