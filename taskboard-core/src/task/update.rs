//! EditTask transition

use crate::error::Rejected;
use crate::store::{required_text, Transition};
use crate::types::{Board, Noun, TaskId, Verb};
use serde::{Deserialize, Serialize};

/// Replace a task's content, keeping its completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTask {
    /// The task ID to edit
    pub id: TaskId,
    /// New content (required, trimmed)
    pub content: String,
}

impl EditTask {
    /// Create a new EditTask command
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Transition for EditTask {
    fn verb(&self) -> Verb {
        Verb::Edit
    }

    fn noun(&self) -> Noun {
        Noun::Task
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        let content = required_text(&self.content, "content")?;
        let task = board
            .task(&self.id)
            .ok_or_else(|| Rejected::task_not_found(&self.id))?;
        if task.content == content {
            return Err(Rejected::NoChange);
        }

        let edited = task.with_content(content);
        let mut next = board.clone();
        next.tasks.insert(self.id.clone(), edited);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Task};

    fn setup() -> Board {
        Board::new().with_column(
            Column::new("Done").with_id("done").with_tasks(["t1"]),
            [Task::new("Send CV").with_id("t1").completed(true)],
        )
    }

    #[test]
    fn test_edit_preserves_completion() {
        let next = EditTask::new("t1", "Send CV to company")
            .apply(&setup())
            .unwrap();
        let task = next.task(&"t1".into()).unwrap();
        assert_eq!(task.content, "Send CV to company");
        assert!(task.is_complete);
    }

    #[test]
    fn test_edit_keeps_map_position() {
        let board = Board::new().with_column(
            Column::new("A").with_id("A").with_tasks(["t1", "t2"]),
            [Task::new("one").with_id("t1"), Task::new("two").with_id("t2")],
        );
        let next = EditTask::new("t1", "uno").apply(&board).unwrap();
        let keys: Vec<_> = next.tasks.keys().map(|id| id.as_str()).collect();
        assert_eq!(keys, ["t1", "t2"]);
    }

    #[test]
    fn test_edit_rejections() {
        let board = setup();
        assert_eq!(
            EditTask::new("t1", "   ").apply(&board),
            Err(Rejected::empty("content"))
        );
        assert!(matches!(
            EditTask::new("missing", "text").apply(&board),
            Err(Rejected::TaskNotFound { .. })
        ));
        assert_eq!(
            EditTask::new("t1", "Send CV").apply(&board),
            Err(Rejected::NoChange)
        );
    }
}
