//! A board store wired to its storage slot.

use crate::config::BoardConfig;
use crate::dnd::{resolve_drop, DropEvent};
use crate::persistence::{load_or_seed, save_best_effort, BoardStorage, FileStorage};
use crate::search::{BoardView, FuzzySearch, StatusFilter};
use crate::store::{BoardStore, Transition};
use crate::types::Board;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loads a board once, then persists it after every accepted change.
///
/// The in-memory board is authoritative: a failed save is logged and the change
/// is kept.
pub struct BoardSession<S> {
    store: BoardStore,
    storage: S,
    search: FuzzySearch,
}

impl<S: BoardStorage> BoardSession<S> {
    /// Load from `storage`, seeding it when empty or unusable
    pub async fn open(storage: S) -> Self {
        let board = load_or_seed(&storage).await;
        Self {
            store: BoardStore::new(board),
            storage,
            search: FuzzySearch::new(),
        }
    }

    pub fn with_search(mut self, search: FuzzySearch) -> Self {
        self.search = search;
        self
    }

    /// Apply a transition, saving once if it changed the board.
    ///
    /// Returns `true` when the board changed.
    pub async fn dispatch(&mut self, transition: &impl Transition) -> bool {
        if !self.store.apply(transition) {
            return false;
        }
        save_best_effort(&self.storage, self.store.board()).await;
        true
    }

    /// Resolve a drop and dispatch the move it stands for
    pub async fn handle_drop(&mut self, event: &DropEvent) -> bool {
        match resolve_drop(self.store.board(), event) {
            Some(resolved) => self.dispatch(&resolved).await,
            None => {
                debug!(source = ?event.source, "drop is not a move");
                false
            }
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<Board> {
        self.store.snapshot()
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Filtered, searched view of the current board
    pub fn view(&self, status: StatusFilter, query: &str) -> BoardView<'_> {
        BoardView::build(self.store.board(), status, query, &self.search)
    }

    /// Re-read the slot, discarding in-memory state. Returns `true` when the
    /// board changed.
    pub async fn reload(&mut self) -> bool {
        let board = load_or_seed(&self.storage).await;
        if &board == self.store.board() {
            return false;
        }
        match self.store.replace(board) {
            Ok(()) => true,
            Err(violation) => {
                warn!(%violation, "reloaded board refused");
                false
            }
        }
    }
}

impl BoardSession<FileStorage> {
    /// Open the file slot and search settings named by `config`
    pub async fn from_config(config: &BoardConfig) -> Self {
        let storage = FileStorage::from_config(&config.storage);
        info!(path = %storage.path().display(), "opening board");
        Self::open(storage)
            .await
            .with_search(FuzzySearch::from_config(&config.search))
    }
}
