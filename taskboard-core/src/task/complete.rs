//! ToggleTask transition

use crate::error::Rejected;
use crate::store::Transition;
use crate::types::{Board, Noun, TaskId, Verb};
use serde::{Deserialize, Serialize};

/// Flip a task's completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleTask {
    /// The task ID to toggle
    pub id: TaskId,
}

impl ToggleTask {
    /// Create a new ToggleTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Transition for ToggleTask {
    fn verb(&self) -> Verb {
        Verb::Toggle
    }

    fn noun(&self) -> Noun {
        Noun::Task
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        let task = board
            .task(&self.id)
            .ok_or_else(|| Rejected::task_not_found(&self.id))?;

        let toggled = task.toggled();
        let mut next = board.clone();
        next.tasks.insert(self.id.clone(), toggled);
        Ok(next)
    }
}
