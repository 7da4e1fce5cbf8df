use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database filename used when neither the flag nor the config file names one
pub const DEFAULT_DATABASE: &str = "hello.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NamebookConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("namebook.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<NamebookConfig>> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: NamebookConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Resolve the database path: flag wins, then the config file, then the
/// built-in default.
pub fn resolve_database_path(flag: Option<PathBuf>, config: Option<&NamebookConfig>) -> PathBuf {
    flag.or_else(|| {
        config
            .and_then(|c| c.database.clone())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_config_beats_default() {
        let config = NamebookConfig {
            database: Some("from_config.db".to_string()),
        };

        let from_flag =
            resolve_database_path(Some(PathBuf::from("from_flag.db")), Some(&config));
        assert_eq!(from_flag, PathBuf::from("from_flag.db"));

        let from_config = resolve_database_path(None, Some(&config));
        assert_eq!(from_config, PathBuf::from("from_config.db"));

        let fallback = resolve_database_path(None, None);
        assert_eq!(fallback, PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn test_load_config_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("namebook.toml");

        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_load_config_reads_database_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("namebook.toml");
        std::fs::write(&path, "database = \"ledger.db\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.database.as_deref(), Some("ledger.db"));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("hello.db");

        ensure_db_dir(&db_path).unwrap();
        assert!(db_path.parent().unwrap().exists());
    }
}
