//! Column type

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A named, ordered bucket of task references.
///
/// A column orders its tasks but does not own them; the board's task map does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create an empty column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Use an explicit id
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the ordered task references
    pub fn with_tasks<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = task_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Position of a task within this column
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Check whether this column holds the task
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.task_ids.contains(task_id)
    }

    /// The task following `task_id`, if any
    pub fn task_after(&self, task_id: &TaskId) -> Option<&TaskId> {
        self.position_of(task_id)
            .and_then(|index| self.task_ids.get(index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let column = Column::new("To Do");
        assert_eq!(column.title, "To Do");
        assert!(column.task_ids.is_empty());
    }

    #[test]
    fn test_task_after() {
        let column = Column::new("A").with_tasks(["t1", "t2"]);
        assert_eq!(column.task_after(&"t1".into()), Some(&TaskId::from("t2")));
        assert_eq!(column.task_after(&"t2".into()), None);
        assert_eq!(column.task_after(&"t9".into()), None);
    }

    #[test]
    fn test_column_wire_format() {
        let column = Column::new("Done").with_id("column-3").with_tasks(["task-2"]);
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "column-3", "title": "Done", "taskIds": ["task-2"]})
        );
    }
}
