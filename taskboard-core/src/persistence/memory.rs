//! In-memory board slots, keyed like browser local storage

use super::{decode, BoardStorage};
use crate::defaults::STORAGE_KEY;
use crate::error::{BoardError, Result};
use crate::types::Board;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Raw JSON strings by key. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    key: String,
    slots: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    /// Empty storage using the default key
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Storage whose slot already holds `raw`
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.set_raw(raw);
        storage
    }

    /// Overwrite the slot with arbitrary text
    pub fn set_raw(&self, raw: impl Into<String>) {
        self.slots_mut().insert(self.key.clone(), raw.into());
    }

    /// Current text of the slot
    pub fn raw(&self) -> Option<String> {
        self.slots_mut().get(&self.key).cloned()
    }

    /// Make subsequent saves fail, as a full or disabled store would
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn slots_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BoardStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<Board>> {
        self.raw()
            .map(|raw| decode(&raw, Path::new(&self.key)))
            .transpose()
    }

    async fn save(&self, board: &Board) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BoardError::unavailable(format!(
                "writes to '{}' are disabled",
                self.key
            )));
        }
        let raw = serde_json::to_string(board)?;
        self.set_raw(raw);
        Ok(())
    }
}
