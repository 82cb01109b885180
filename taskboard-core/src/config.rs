//! Board configuration loaded with figment
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables prefixed `TASKBOARD_`, nested keys split on `__`
//!    (for example `TASKBOARD_STORAGE__KEY`)

use crate::defaults::STORAGE_KEY;
use crate::error::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Where the board is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the board file
    pub dir: PathBuf,
    /// Storage slot name; the file is `<dir>/<key>.json`
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            key: STORAGE_KEY.to_string(),
        }
    }
}

/// Fuzzy search tuning
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Skim matches scoring below this are not shown
    pub min_score: i64,
}

/// Board configuration: storage location and search tuning
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub storage: StorageConfig,
    pub search: SearchConfig,
}

impl BoardConfig {
    /// Defaults overridden by the environment
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment())
    }

    /// Defaults, then `path` if it exists, then the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if path.exists() {
            debug!(path = %path.display(), "loading board config file");
            figment = figment.merge(Toml::file(path));
        }
        Self::extract(figment.merge(Self::env()))
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Self::env())
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        debug!(?config, "board config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    fn clear_env() {
        env::remove_var("TASKBOARD_STORAGE__DIR");
        env::remove_var("TASKBOARD_STORAGE__KEY");
        env::remove_var("TASKBOARD_SEARCH__MIN_SCORE");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = BoardConfig::load().unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.storage.key, "todo-board-v3");
        assert_eq!(config.storage.dir, PathBuf::from("."));
        assert_eq!(config.search.min_score, 0);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("TASKBOARD_STORAGE__KEY", "work-board");
        env::set_var("TASKBOARD_SEARCH__MIN_SCORE", "25");

        let config = BoardConfig::load().unwrap();
        clear_env();

        assert_eq!(config.storage.key, "work-board");
        assert_eq!(config.search.min_score, 25);
        assert_eq!(config.storage.dir, PathBuf::from("."));
    }

    #[test]
    #[serial]
    fn test_toml_file_then_env() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("taskboard.toml");
        std::fs::write(
            &path,
            "[storage]\ndir = \"/var/boards\"\nkey = \"from-file\"\n\n[search]\nmin_score = 10\n",
        )
        .unwrap();
        env::set_var("TASKBOARD_STORAGE__KEY", "from-env");

        let config = BoardConfig::load_from(&path).unwrap();
        clear_env();

        assert_eq!(config.storage.dir, PathBuf::from("/var/boards"));
        assert_eq!(config.storage.key, "from-env");
        assert_eq!(config.search.min_score, 10);
    }

    #[test]
    #[serial]
    fn test_missing_file_uses_defaults() {
        clear_env();
        let config = BoardConfig::load_from("/nonexistent/taskboard.toml").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    #[serial]
    fn test_bad_value_is_config_error() {
        clear_env();
        env::set_var("TASKBOARD_SEARCH__MIN_SCORE", "lots");
        let result = BoardConfig::load();
        clear_env();

        assert!(matches!(result, Err(BoardError::Config(_))));
    }
}
