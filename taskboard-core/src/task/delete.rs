//! DeleteTask transition

use crate::error::Rejected;
use crate::store::Transition;
use crate::types::{Board, Noun, TaskId, Verb};
use serde::{Deserialize, Serialize};

/// Remove a task and its reference from whichever column holds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    /// Create a new DeleteTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Transition for DeleteTask {
    fn verb(&self) -> Verb {
        Verb::Delete
    }

    fn noun(&self) -> Noun {
        Noun::Task
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        if !board.tasks.contains_key(&self.id) {
            return Err(Rejected::task_not_found(&self.id));
        }

        let mut next = board.clone();
        next.tasks.shift_remove(&self.id);
        for column in next.columns.values_mut() {
            column.task_ids.retain(|id| id != &self.id);
        }
        Ok(next)
    }
}
