//! Durable storage for the board.
//!
//! A [`BoardStorage`] is one named slot holding a serialized board. Loading never
//! fails outward: [`load_or_seed`] falls back to the seed board when the slot is
//! empty, unreadable, or holds a board that breaks an invariant. Saving is best
//! effort and reported, never retried.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::defaults::seed_board;
use crate::error::{BoardError, Result};
use crate::types::Board;
use async_trait::async_trait;
use std::path::Path;
use tracing::{info, warn};

/// A single slot holding the persisted board
#[async_trait]
pub trait BoardStorage: Send + Sync {
    /// Read the persisted board. `Ok(None)` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<Board>>;

    /// Replace the persisted board
    async fn save(&self, board: &Board) -> Result<()>;
}

/// Parse a serialized board and check its invariants
pub(crate) fn decode(raw: &str, location: &Path) -> Result<Board> {
    let board: Board = serde_json::from_str(raw)?;
    board
        .validate()
        .map_err(|violation| BoardError::Invariant {
            path: location.to_path_buf(),
            violation,
        })?;
    Ok(board)
}

/// Load the persisted board, falling back to the seed board.
///
/// An empty slot is seeded and the seed written back. Read, parse and invariant
/// failures are logged and replaced by the seed without touching the slot.
pub async fn load_or_seed<S>(storage: &S) -> Board
where
    S: BoardStorage + ?Sized,
{
    match storage.load().await {
        Ok(Some(board)) => {
            info!(
                columns = board.column_order.len(),
                tasks = board.tasks.len(),
                "loaded persisted board"
            );
            board
        }
        Ok(None) => {
            info!("no persisted board, seeding");
            let board = seed_board();
            save_best_effort(storage, &board).await;
            board
        }
        Err(e) => {
            warn!(error = %e, "persisted board unusable, using seed");
            seed_board()
        }
    }
}

/// Save, logging failures. Returns `true` when the board was written.
pub async fn save_best_effort<S>(storage: &S, board: &Board) -> bool
where
    S: BoardStorage + ?Sized,
{
    match storage.save(board).await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to persist board");
            false
        }
    }
}
