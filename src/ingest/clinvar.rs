//! ClinVar citation export loader
//!
//! The export carries its header in-band: the first line starting with `#`
//! names the columns, every other non-empty line is a citation. Fields are
//! tab-separated; empty fields and `-` mean null.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use super::fields::{normalize, owned, strict_int};
use super::{HeaderMap, LoadReport};
use crate::record::ClinvarCitation;
use crate::storage::SqliteStore;
use crate::{Error, Result};

pub const ALLELE_ID: &str = "AlleleID";
pub const CITATION_SOURCE: &str = "citation_source";
pub const CITATION_ID: &str = "citation_id";

/// Positions of the columns the loader reads
#[derive(Debug, Clone, Copy)]
struct Columns {
    allele_id: usize,
    citation_source: usize,
    citation_id: usize,
}

impl Columns {
    fn resolve(header: &HeaderMap) -> Result<Self> {
        Ok(Self {
            allele_id: header.require(ALLELE_ID)?,
            citation_source: header.require(CITATION_SOURCE)?,
            citation_id: header.require(CITATION_ID)?,
        })
    }
}

/// What a single input line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Header,
    Blank,
    Citation(ClinvarCitation),
}

/// Line-at-a-time parser; holds the header mapping once it has been seen
#[derive(Debug, Default)]
pub struct CitationParser {
    columns: Option<Columns>,
}

impl CitationParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_header(&self) -> bool {
        self.columns.is_some()
    }

    /// Parse one line (without its terminator). `line_no` is 1-based.
    pub fn parse_line(&mut self, line_no: usize, line: &str) -> Result<ParsedLine> {
        if self.columns.is_none() && HeaderMap::is_header_line(line) {
            let header = HeaderMap::from_comment_line(line);
            self.columns = Some(Columns::resolve(&header)?);
            tracing::debug!("Header at line {} with {} columns", line_no, header.len());
            return Ok(ParsedLine::Header);
        }

        if line.is_empty() {
            return Ok(ParsedLine::Blank);
        }

        let columns = self.columns.ok_or(Error::MissingHeader { line: line_no })?;
        let fields: Vec<Option<&str>> = line.split('\t').map(normalize).collect();
        let field = |pos: usize, column: &str| {
            fields.get(pos).copied().ok_or_else(|| Error::MissingField {
                line: line_no,
                column: column.to_string(),
            })
        };

        Ok(ParsedLine::Citation(ClinvarCitation {
            allele_id: strict_int(field(columns.allele_id, ALLELE_ID)?, line_no, ALLELE_ID)?,
            citation_source: owned(field(columns.citation_source, CITATION_SOURCE)?),
            citation_id: owned(field(columns.citation_id, CITATION_ID)?),
        }))
    }
}

/// Load a citation export file into the store
pub fn load_citations(store: &SqliteStore, path: &Path) -> Result<LoadReport> {
    let file = File::open(path)?;
    tracing::info!("Loading ClinVar citations from {}", path.display());
    load_citations_from(store, BufReader::new(file))
}

/// Load citations from any line source. Either every row is committed or none is.
pub fn load_citations_from<R: BufRead>(store: &SqliteStore, reader: R) -> Result<LoadReport> {
    let started = Instant::now();
    let (rows, skipped_lines) = store.in_transaction(|store| {
        let mut parser = CitationParser::new();
        let mut rows = 0;
        let mut skipped = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            match parser.parse_line(idx + 1, &line)? {
                ParsedLine::Header => {}
                ParsedLine::Blank => skipped += 1,
                ParsedLine::Citation(citation) => {
                    store.insert_clinvar_citation(&citation)?;
                    rows += 1;
                }
            }
        }

        if !parser.has_header() {
            tracing::warn!("No '#' header line found; nothing loaded");
        }
        Ok((rows, skipped))
    })?;

    Ok(LoadReport {
        table: "citations",
        rows,
        skipped_lines,
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Dataset;
    use std::io::Cursor;

    const HEADER: &str = "#AlleleID\tVariationID\trs\tnsv\tcitation_source\tcitation_id";

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory(Dataset::Clinvar).unwrap()
    }

    fn rows(store: &SqliteStore) -> Vec<(i64, String, String)> {
        store
            .connection()
            .prepare("SELECT allele_id, citation_source, citation_id FROM citations ORDER BY rowid")
            .unwrap()
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<rusqlite::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_single_row_scenario() {
        let store = store();
        let input = "#AlleleID\tcitation_source\tcitation_id\n12345\tPubMed\t98765\n";
        let report = load_citations_from(&store, Cursor::new(input)).unwrap();

        assert_eq!(report.rows, 1);
        assert_eq!(rows(&store), vec![(12345, "PubMed".to_string(), "98765".to_string())]);
    }

    #[test]
    fn test_row_count_matches_data_lines() {
        let store = store();
        let input = format!(
            "{HEADER}\n15041\t2\t397704705\t-\tPubMed\t20301418\n\n15042\t3\t-\t-\tPubMedCentral\tPMC123\r\n15043\t4\t-\t-\tNCBIBookShelf\tNBK1116\n"
        );
        let report = load_citations_from(&store, Cursor::new(input)).unwrap();
        assert_eq!(report.rows, 3);
        assert_eq!(report.skipped_lines, 1);
        assert_eq!(store.count_rows("citations").unwrap(), 3);
        // CRLF terminators do not leak into the stored value
        assert_eq!(rows(&store)[1].2, "PMC123");
    }

    #[test]
    fn test_tab_only_line_is_data() {
        let store = store();
        let input = "#AlleleID\tcitation_source\tcitation_id\n1\tPubMed\t10\n\t\t\n";
        assert!(matches!(
            load_citations_from(&store, Cursor::new(input)),
            Err(Error::MissingValue { line: 3, .. })
        ));
        assert_eq!(store.count_rows("citations").unwrap(), 0);
    }

    #[test]
    fn test_whitespace_line_is_data() {
        let mut parser = CitationParser::new();
        parser.parse_line(1, "#AlleleID\tcitation_source\tcitation_id").unwrap();
        assert_eq!(parser.parse_line(2, "").unwrap(), ParsedLine::Blank);
        assert!(matches!(
            parser.parse_line(3, "   "),
            Err(Error::InvalidInteger { line: 3, .. })
        ));
    }

    #[test]
    fn test_sentinel_nulls_required_column_rolls_back() {
        let store = store();
        let input = format!("{HEADER}\n15041\t2\t-\t-\tPubMed\t20301418\n15042\t3\t-\t-\t-\t555\n");
        let outcome = load_citations_from(&store, Cursor::new(input));
        assert!(matches!(outcome, Err(Error::Storage(_))));
        assert_eq!(store.count_rows("citations").unwrap(), 0);
    }

    #[test]
    fn test_non_numeric_allele_id_rolls_back() {
        let store = store();
        let input = format!("{HEADER}\n15041\t2\t-\t-\tPubMed\t1\nabc\t3\t-\t-\tPubMed\t2\n");
        match load_citations_from(&store, Cursor::new(input)) {
            Err(Error::InvalidInteger { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "AlleleID");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(store.count_rows("citations").unwrap(), 0);
    }

    #[test]
    fn test_data_before_header_is_rejected() {
        let store = store();
        let input = "12345\tPubMed\t98765\n#AlleleID\tcitation_source\tcitation_id\n";
        assert!(matches!(
            load_citations_from(&store, Cursor::new(input)),
            Err(Error::MissingHeader { line: 1 })
        ));
    }

    #[test]
    fn test_header_without_required_column() {
        let store = store();
        let input = "#AlleleID\tcitation_source\n12345\tPubMed\n";
        assert!(matches!(
            load_citations_from(&store, Cursor::new(input)),
            Err(Error::MissingColumn { column }) if column == "citation_id"
        ));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let store = store();
        let input = format!("{HEADER}\n15041\t2\n");
        assert!(matches!(
            load_citations_from(&store, Cursor::new(input)),
            Err(Error::MissingField { line: 2, .. })
        ));
    }

    #[test]
    fn test_only_first_comment_line_is_header() {
        let mut parser = CitationParser::new();
        assert_eq!(parser.parse_line(1, HEADER).unwrap(), ParsedLine::Header);
        assert!(matches!(
            parser.parse_line(2, "#comment\tx\ty\tz\tPubMed\t1"),
            Err(Error::InvalidInteger { line: 2, .. })
        ));
    }

    #[test]
    fn test_non_sentinel_values_kept_verbatim() {
        let mut parser = CitationParser::new();
        parser.parse_line(1, "#AlleleID\tcitation_source\tcitation_id").unwrap();
        let parsed = parser.parse_line(2, "7\t--\t 0").unwrap();
        assert_eq!(
            parsed,
            ParsedLine::Citation(ClinvarCitation {
                allele_id: 7,
                citation_source: Some("--".to_string()),
                citation_id: Some(" 0".to_string()),
            })
        );
    }

    #[test]
    fn test_reload_duplicates_rows() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("clinvar.db");
        let input = dir.path().join("var_citations.txt");
        std::fs::write(&input, format!("{HEADER}\n1\t2\t-\t-\tPubMed\t10\n3\t4\t-\t-\tPubMed\t11\n")).unwrap();

        let options = crate::config::SqliteOptions::default();
        for _ in 0..2 {
            let store = SqliteStore::open(&db, Dataset::Clinvar, &options).unwrap();
            load_citations(&store, &input).unwrap();
        }

        let store = SqliteStore::open(&db, Dataset::Clinvar, &options).unwrap();
        assert_eq!(store.count_rows("citations").unwrap(), 4);
    }

    #[test]
    fn test_missing_input_file() {
        let store = store();
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_citations(&store, &dir.path().join("absent.txt")),
            Err(Error::Io(_))
        ));
    }
}
