//! Board slot backed by a JSON file

use super::{decode, BoardStorage};
use crate::config::StorageConfig;
use crate::defaults::STORAGE_KEY;
use crate::error::Result;
use crate::types::Board;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores the board as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    key: String,
}

impl FileStorage {
    /// Slot named `key` inside `dir`
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// Default slot inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, STORAGE_KEY)
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.dir, &config.key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path of the JSON file
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

#[async_trait]
impl BoardStorage for FileStorage {
    async fn load(&self) -> Result<Option<Board>> {
        let path = self.path();
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        decode(&raw, &path).map(Some)
    }

    async fn save(&self, board: &Board) -> Result<()> {
        let path = self.path();
        let content = serde_json::to_string_pretty(board)?;
        atomic_write(&path, content.as_bytes()).await?;
        debug!(path = %path.display(), "board saved");
        Ok(())
    }
}

/// Write to a sibling temp file, then rename over the target
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).await?;
    fs::rename(&temp_path, path).await?;

    Ok(())
}
