//! Column-name to position mapping, built once per file

use std::collections::HashMap;
use crate::{Error, Result};

/// Marker that introduces the in-band header of a ClinVar export
pub const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    positions: HashMap<String, usize>,
}

impl HeaderMap {
    /// Build from a column-name row. A repeated name maps to its last position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positions = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (name.as_ref().to_string(), idx))
            .collect();
        Self { positions }
    }

    /// Build from a `#`-prefixed, tab-separated header line
    pub fn from_comment_line(line: &str) -> Self {
        Self::from_names(line.trim_start_matches(COMMENT_MARKER).split('\t'))
    }

    pub fn is_header_line(line: &str) -> bool {
        line.starts_with(COMMENT_MARKER)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of a column the parser cannot do without
    pub fn require(&self, name: &str) -> Result<usize> {
        self.position(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_line_mapping() {
        let header = HeaderMap::from_comment_line("#AlleleID\tVariationID\trs\tnsv\tcitation_source\tcitation_id");
        assert_eq!(header.len(), 6);
        assert_eq!(header.position("AlleleID"), Some(0));
        assert_eq!(header.position("citation_source"), Some(4));
        assert_eq!(header.position("citation_id"), Some(5));
    }

    #[test]
    fn test_all_leading_markers_stripped() {
        let header = HeaderMap::from_comment_line("##AlleleID\tcitation_id");
        assert_eq!(header.position("AlleleID"), Some(0));
    }

    #[test]
    fn test_duplicate_name_keeps_last() {
        let header = HeaderMap::from_names(["gene", "start", "gene"]);
        assert_eq!(header.position("gene"), Some(2));
    }

    #[test]
    fn test_require_reports_column() {
        let header = HeaderMap::from_names(["a", "b"]);
        match header.require("citation_id") {
            Err(Error::MissingColumn { column }) => assert_eq!(column, "citation_id"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_header_detection() {
        assert!(HeaderMap::is_header_line("#AlleleID"));
        assert!(!HeaderMap::is_header_line("12345\tPubMed"));
        assert!(!HeaderMap::is_header_line(" #AlleleID"));
    }
}
