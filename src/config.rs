use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VarciteConfig {
    #[serde(default)]
    pub sqlite: SqliteOptions,
}

/// Connection settings applied when a store is opened
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SqliteOptions {
    /// Only applied when the database file is first created
    #[serde(default)]
    pub journal_mode: JournalMode,
    #[serde(default)]
    pub synchronous: SyncMode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    #[default]
    Wal,
    Delete,
    Truncate,
    Memory,
}

impl JournalMode {
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Wal => "wal",
            Self::Delete => "delete",
            Self::Truncate => "truncate",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    Off,
    #[default]
    Normal,
    Full,
    Extra,
}

impl SyncMode {
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Normal => "normal",
            Self::Full => "full",
            Self::Extra => "extra",
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("varcite.toml")
}

/// Load the config file. A missing default file yields defaults; a missing
/// file that was asked for explicitly is an error.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<VarciteConfig> {
    let explicit = path.is_some();
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        if explicit {
            anyhow::bail!("config file not found at {}", path.display());
        }
        return Ok(VarciteConfig::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: VarciteConfig = toml::from_str(&contents)?;
    Ok(config)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
