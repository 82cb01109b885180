//! Board state store and the fail-soft transition functions.
//!
//! Every transition is a command value implementing [`Transition`]. `apply` reads
//! the prior board and returns a complete new one, or the reason it refused.
//! The free functions in this module wrap those commands with the fail-soft
//! contract used by interactive callers: a refused transition returns the board
//! unchanged.

use crate::column::{AddColumn, DeleteColumn, MoveColumn, RenameColumn};
use crate::error::{InvariantViolation, Rejected};
use crate::task::{AddTask, DeleteTask, EditTask, MoveTask, TaskAnchor, ToggleTask};
use crate::types::{is_valid_operation, Board, ColumnId, Noun, TaskId, Verb};
use std::sync::Arc;
use tracing::debug;

/// A pure board transition
pub trait Transition: std::fmt::Debug {
    /// What the transition does
    fn verb(&self) -> Verb;

    /// What it acts on
    fn noun(&self) -> Noun;

    /// Human-readable operation name, e.g. `"move task"`
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }

    /// Produce the next board, or the reason the transition is a no-op.
    ///
    /// Never mutates `board`.
    fn apply(&self, board: &Board) -> Result<Board, Rejected>;
}

/// Trim required text, refusing it when nothing is left
pub(crate) fn required_text(text: &str, field: &'static str) -> Result<String, Rejected> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Rejected::empty(field));
    }
    Ok(trimmed.to_string())
}

/// Apply a transition with fail-soft semantics
pub fn apply_soft(board: &Board, transition: &impl Transition) -> Board {
    match transition.apply(board) {
        Ok(next) => next,
        Err(reason) => {
            debug!(op = %transition.op_string(), %reason, "transition rejected");
            board.clone()
        }
    }
}

/// Append a new task to a column
pub fn add_task(board: &Board, column_id: &ColumnId, content: &str) -> Board {
    apply_soft(board, &AddTask::new(column_id, content))
}

/// Replace a task's content, keeping its completion flag
pub fn edit_task_content(board: &Board, task_id: &TaskId, content: &str) -> Board {
    apply_soft(board, &EditTask::new(task_id, content))
}

/// Flip a task's completion flag
pub fn toggle_task_complete(board: &Board, task_id: &TaskId) -> Board {
    apply_soft(board, &ToggleTask::new(task_id))
}

/// Remove a task from the board and from its column
pub fn delete_task(board: &Board, task_id: &TaskId) -> Board {
    apply_soft(board, &DeleteTask::new(task_id))
}

/// Append an empty column
pub fn add_column(board: &Board, title: &str) -> Board {
    apply_soft(board, &AddColumn::new(title))
}

/// Change a column's title
pub fn rename_column(board: &Board, column_id: &ColumnId, title: &str) -> Board {
    apply_soft(board, &RenameColumn::new(column_id, title))
}

/// Remove a column and every task it holds
pub fn delete_column(board: &Board, column_id: &ColumnId) -> Board {
    apply_soft(board, &DeleteColumn::new(column_id))
}

/// Move a column into the slot `to_id` currently occupies
pub fn move_column(board: &Board, from_id: &ColumnId, to_id: &ColumnId) -> Board {
    apply_soft(board, &MoveColumn::new(from_id, to_id))
}

/// Move a task before an anchor task or to the end of a column
pub fn move_task(
    board: &Board,
    task_id: &TaskId,
    from_column_id: &ColumnId,
    to_column_id: &ColumnId,
    anchor: TaskAnchor,
) -> Board {
    apply_soft(board, &MoveTask::new(task_id, from_column_id, to_column_id, anchor))
}

/// Holds the single source of truth for a board.
///
/// The current board is an immutable snapshot behind an `Arc`; each accepted
/// transition swaps in a new snapshot, so readers holding an older one keep a
/// complete, consistent view.
#[derive(Debug, Clone)]
pub struct BoardStore {
    current: Arc<Board>,
    revision: u64,
}

impl BoardStore {
    /// Create a store around an initial board
    pub fn new(board: Board) -> Self {
        debug_assert_eq!(board.validate(), Ok(()), "store seeded with invalid board");
        Self {
            current: Arc::new(board),
            revision: 0,
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.current)
    }

    /// Borrow the current board
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Number of accepted transitions since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a transition. Returns `true` when the board changed.
    pub fn apply(&mut self, transition: &impl Transition) -> bool {
        debug_assert!(is_valid_operation(transition.verb(), transition.noun()));
        match transition.apply(&self.current) {
            Ok(next) => {
                debug_assert_eq!(
                    next.validate(),
                    Ok(()),
                    "{} broke a board invariant",
                    transition.op_string()
                );
                self.current = Arc::new(next);
                self.revision += 1;
                debug!(
                    op = %transition.op_string(),
                    revision = self.revision,
                    "transition applied"
                );
                true
            }
            Err(reason) => {
                debug!(op = %transition.op_string(), %reason, "transition rejected");
                false
            }
        }
    }

    /// Replace the whole board, e.g. after reloading persisted state.
    ///
    /// A board that breaks an invariant is refused and the store is left as is.
    pub fn replace(&mut self, board: Board) -> Result<(), InvariantViolation> {
        board.validate()?;
        self.current = Arc::new(board);
        self.revision += 1;
        debug!(revision = self.revision, "board replaced");
        Ok(())
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Board::new())
    }
}
