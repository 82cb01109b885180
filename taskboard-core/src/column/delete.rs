//! DeleteColumn transition

use crate::error::Rejected;
use crate::store::Transition;
use crate::types::{Board, ColumnId, Noun, Verb};
use serde::{Deserialize, Serialize};

/// Delete a column together with every task it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Transition for DeleteColumn {
    fn verb(&self) -> Verb {
        Verb::Delete
    }

    fn noun(&self) -> Noun {
        Noun::Column
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        let mut next = board.clone();
        let column = next
            .columns
            .shift_remove(&self.id)
            .ok_or_else(|| Rejected::column_not_found(&self.id))?;

        for task_id in &column.task_ids {
            next.tasks.shift_remove(task_id);
        }
        next.column_order.retain(|id| id != &self.id);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Task};

    fn setup() -> Board {
        Board::new()
            .with_column(
                Column::new("A").with_id("A").with_tasks(["t1", "t2"]),
                [Task::new("one").with_id("t1"), Task::new("two").with_id("t2")],
            )
            .with_column(
                Column::new("B").with_id("B").with_tasks(["t3"]),
                [Task::new("three").with_id("t3")],
            )
    }

    #[test]
    fn test_delete_column_cascades_tasks() {
        let next = DeleteColumn::new("A").apply(&setup()).unwrap();

        assert!(next.column(&"A".into()).is_none());
        assert_eq!(next.column_order, [ColumnId::from("B")]);
        assert!(next.task(&"t1".into()).is_none());
        assert!(next.task(&"t2".into()).is_none());
        assert!(next.task(&"t3".into()).is_some());
        assert_eq!(next.validate(), Ok(()));
    }

    #[test]
    fn test_delete_nonexistent_column() {
        let result = DeleteColumn::new("missing").apply(&setup());
        assert!(matches!(result, Err(Rejected::ColumnNotFound { .. })));
    }
}
