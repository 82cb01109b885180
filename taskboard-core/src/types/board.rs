//! The normalized board: tasks, columns and column order.

use super::column::Column;
use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::error::InvariantViolation;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// The kanban board.
///
/// Tasks and columns are stored by id; `column_order` decides display order and
/// each column's `task_ids` decides task order. Maps keep insertion order so the
/// persisted JSON stays stable, but equality ignores map order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub tasks: IndexMap<TaskId, Task>,
    pub columns: IndexMap<ColumnId, Column>,
    pub column_order: Vec<ColumnId>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column (and the tasks it holds) to the board
    pub fn with_column(mut self, column: Column, tasks: impl IntoIterator<Item = Task>) -> Self {
        for task in tasks {
            self.tasks.insert(task.id.clone(), task);
        }
        self.column_order.push(column.id.clone());
        self.columns.insert(column.id.clone(), column);
        self
    }

    /// Look up a task
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Look up a column
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// The column currently holding a task
    pub fn column_of(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.values().find(|column| column.contains(task_id))
    }

    /// Columns in display order
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// Tasks of a column in display order
    pub fn column_tasks(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.columns
            .get(column_id)
            .map(|column| {
                column
                    .task_ids
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every task in board order: column by column, top to bottom
    pub fn ordered_tasks(&self) -> Vec<&Task> {
        self.ordered_columns()
            .flat_map(|column| column.task_ids.iter())
            .filter_map(|id| self.tasks.get(id))
            .collect()
    }

    /// Generate a task id not yet used on this board
    pub fn fresh_task_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if !self.tasks.contains_key(&id) {
                return id;
            }
        }
    }

    /// Generate a column id not yet used on this board
    pub fn fresh_column_id(&self) -> ColumnId {
        loop {
            let id = ColumnId::new();
            if !self.columns.contains_key(&id) {
                return id;
            }
        }
    }

    /// Check every structural invariant, reporting the first violation found
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (key, task) in &self.tasks {
            if key != &task.id {
                return Err(InvariantViolation::KeyMismatch {
                    kind: "task",
                    key: key.to_string(),
                    id: task.id.to_string(),
                });
            }
        }
        for (key, column) in &self.columns {
            if key != &column.id {
                return Err(InvariantViolation::KeyMismatch {
                    kind: "column",
                    key: key.to_string(),
                    id: column.id.to_string(),
                });
            }
        }

        let mut ordered = IndexSet::with_capacity(self.column_order.len());
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) {
                return Err(InvariantViolation::DanglingColumn {
                    column: column_id.to_string(),
                });
            }
            if !ordered.insert(column_id) {
                return Err(InvariantViolation::DuplicateColumn {
                    column: column_id.to_string(),
                });
            }
        }
        if let Some(orphan) = self.columns.keys().find(|id| !ordered.contains(id)) {
            return Err(InvariantViolation::OrphanColumn {
                column: orphan.to_string(),
            });
        }

        let mut placed = IndexSet::with_capacity(self.tasks.len());
        for column in self.ordered_columns() {
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(InvariantViolation::DanglingTask {
                        column: column.id.to_string(),
                        task: task_id.to_string(),
                    });
                }
                if !placed.insert(task_id) {
                    return Err(InvariantViolation::DuplicateTask {
                        task: task_id.to_string(),
                    });
                }
            }
        }
        if let Some(unplaced) = self.tasks.keys().find(|id| !placed.contains(id)) {
            return Err(InvariantViolation::UnplacedTask {
                task: unplaced.to_string(),
            });
        }

        Ok(())
    }
}
