//! AddTask transition

use crate::error::Rejected;
use crate::store::{required_text, Transition};
use crate::types::{Board, ColumnId, Noun, Task, Verb};
use serde::{Deserialize, Serialize};

/// Create a task at the end of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTask {
    /// The column receiving the task
    pub column: ColumnId,
    /// The task content (required, trimmed)
    pub content: String,
}

impl AddTask {
    /// Create a new AddTask command
    pub fn new(column: impl Into<ColumnId>, content: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            content: content.into(),
        }
    }
}

impl Transition for AddTask {
    fn verb(&self) -> Verb {
        Verb::Add
    }

    fn noun(&self) -> Noun {
        Noun::Task
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        let content = required_text(&self.content, "content")?;
        if !board.columns.contains_key(&self.column) {
            return Err(Rejected::column_not_found(&self.column));
        }

        let mut next = board.clone();
        let task = Task::new(content).with_id(board.fresh_task_id());
        if let Some(column) = next.columns.get_mut(&self.column) {
            column.task_ids.push(task.id.clone());
        }
        next.tasks.insert(task.id.clone(), task);
        Ok(next)
    }
}
