//! Field normalization: the ClinVar null sentinel and integer coercion

use crate::{Error, Result};

/// Token the exports use for "no value"
pub const NULL_SENTINEL: &str = "-";

/// Empty fields and the sentinel become null; everything else is kept verbatim
pub fn normalize(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw == NULL_SENTINEL {
        None
    } else {
        Some(raw)
    }
}

/// Parse a required integer, failing on null or malformed input
pub fn strict_int(value: Option<&str>, line: usize, column: &str) -> Result<i64> {
    let value = value.ok_or_else(|| Error::MissingValue {
        line,
        column: column.to_string(),
    })?;
    value.trim().parse().map_err(|_| Error::InvalidInteger {
        line,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Parse an optional integer; malformed input becomes null
pub fn lenient_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

pub fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_nulls_only_sentinels() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("-"), None);
        assert_eq!(normalize("--"), Some("--"));
        assert_eq!(normalize(" "), Some(" "));
        assert_eq!(normalize("0"), Some("0"));
        assert_eq!(normalize("-1"), Some("-1"));
    }

    #[test]
    fn test_strict_int() {
        assert_eq!(strict_int(Some("12345"), 1, "AlleleID").unwrap(), 12345);
        assert_eq!(strict_int(Some(" 42 "), 1, "AlleleID").unwrap(), 42);
        assert!(matches!(
            strict_int(Some("12a"), 7, "AlleleID"),
            Err(Error::InvalidInteger { line: 7, .. })
        ));
        assert!(matches!(
            strict_int(None, 3, "AlleleID"),
            Err(Error::MissingValue { line: 3, .. })
        ));
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int(Some("140453136")), Some(140453136));
        assert_eq!(lenient_int(Some("N/A")), None);
        assert_eq!(lenient_int(Some("1.5")), None);
        assert_eq!(lenient_int(None), None);
    }
}
