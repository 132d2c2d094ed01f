//! SQLite engine selection
//!
//! The binding is linked statically (`bundled`), so the only choice left at
//! runtime is whether the linked library is new enough. `STRICT` tables need
//! 3.37.0.

use crate::{Error, Result};

/// Oldest engine able to create `STRICT` tables, encoded as `rusqlite::version_number` does
pub const MIN_VERSION_NUMBER: i32 = 3_037_000;

/// Check the linked engine once at startup
pub fn ensure_supported() -> Result<()> {
    check_version(rusqlite::version_number(), rusqlite::version())
}

fn check_version(number: i32, found: &str) -> Result<()> {
    if number < MIN_VERSION_NUMBER {
        return Err(Error::EngineTooOld {
            found: found.to_string(),
            required: format_version(MIN_VERSION_NUMBER),
        });
    }
    tracing::debug!("Using SQLite {}", found);
    Ok(())
}

fn format_version(number: i32) -> String {
    format!(
        "{}.{}.{}",
        number / 1_000_000,
        (number / 1_000) % 1_000,
        number % 1_000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_engine_is_supported() {
        ensure_supported().unwrap();
    }

    #[test]
    fn test_old_engine_is_rejected() {
        let err = check_version(3_036_000, "3.36.0").unwrap_err();
        match err {
            Error::EngineTooOld { found, required } => {
                assert_eq!(found, "3.36.0");
                assert_eq!(required, "3.37.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_boundary_version_is_accepted() {
        assert!(check_version(MIN_VERSION_NUMBER, "3.37.0").is_ok());
    }
}
