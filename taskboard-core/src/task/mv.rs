//! MoveTask transition

use crate::error::Rejected;
use crate::store::Transition;
use crate::types::{Board, ColumnId, Noun, TaskId, Verb};
use serde::{Deserialize, Serialize};

/// Where a moved task lands in its destination column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAnchor {
    /// Immediately before the given task
    Before(TaskId),
    /// After every other task
    End,
}

/// Move a task within a column or across columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The column currently holding the task
    pub from: ColumnId,
    /// The destination column (may equal `from`)
    pub to: ColumnId,
    /// Landing position in the destination
    pub anchor: TaskAnchor,
}

impl MoveTask {
    /// Create a new MoveTask command
    pub fn new(
        id: impl Into<TaskId>,
        from: impl Into<ColumnId>,
        to: impl Into<ColumnId>,
        anchor: TaskAnchor,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            anchor,
        }
    }

    /// Move a task to the end of a column
    pub fn to_end(
        id: impl Into<TaskId>,
        from: impl Into<ColumnId>,
        to: impl Into<ColumnId>,
    ) -> Self {
        Self::new(id, from, to, TaskAnchor::End)
    }
}

impl Transition for MoveTask {
    fn verb(&self) -> Verb {
        Verb::Move
    }

    fn noun(&self) -> Noun {
        Noun::Task
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        if !board.tasks.contains_key(&self.id) {
            return Err(Rejected::task_not_found(&self.id));
        }
        let from = board
            .column(&self.from)
            .ok_or_else(|| Rejected::column_not_found(&self.from))?;
        let to = board
            .column(&self.to)
            .ok_or_else(|| Rejected::column_not_found(&self.to))?;
        if !from.contains(&self.id) {
            return Err(Rejected::not_in_column(&self.id, &self.from));
        }
        if let TaskAnchor::Before(anchor) = &self.anchor {
            if anchor == &self.id {
                return Err(Rejected::NoChange);
            }
            if !to.contains(anchor) {
                return Err(Rejected::not_in_column(anchor, &self.to));
            }
        }

        let mut source = from.task_ids.clone();
        source.retain(|id| id != &self.id);

        let mut destination = if self.from == self.to {
            source.clone()
        } else {
            to.task_ids.clone()
        };
        let index = match &self.anchor {
            TaskAnchor::Before(anchor) => destination
                .iter()
                .position(|id| id == anchor)
                .unwrap_or(destination.len()),
            TaskAnchor::End => destination.len(),
        };
        destination.insert(index, self.id.clone());

        if destination == to.task_ids {
            return Err(Rejected::NoChange);
        }

        let mut next = board.clone();
        if self.from != self.to {
            if let Some(column) = next.columns.get_mut(&self.from) {
                column.task_ids = source;
            }
        }
        if let Some(column) = next.columns.get_mut(&self.to) {
            column.task_ids = destination;
        }
        Ok(next)
    }
}
